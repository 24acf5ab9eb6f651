//! 事件执行时可变借出的状态

use std::any::Any;

/// 由动画层实现；事件通过 `as_any_mut` 向下转型拿到具体类型。
pub trait World: Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

//! 输入事件
//!
//! tick、拓扑选择、开始键都以事件形式进入队列；执行时拿到仿真器（用于
//! 续约）和世界（用于修改动画状态）。

use super::simulator::Simulator;
use super::world::World;

pub trait Event: Send + 'static {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World);
}

/// 一次性闭包也可以直接调度
impl<F> Event for F
where
    F: FnOnce(&mut Simulator, &mut dyn World) + Send + 'static,
{
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        (*self)(sim, world)
    }
}

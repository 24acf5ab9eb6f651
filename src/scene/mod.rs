//! 场景绘制
//!
//! `RenderSurface` 是外部绘制层的接口；`SceneComposer` 负责把控制器状态
//! 翻译成绘制调用。附带两个 surface：记录调用的 `RecordingSurface` 和
//! 画进 ratatui canvas 的 `TerminalSurface`。

mod composer;
mod paint;
mod surface;
mod terminal;

pub use composer::SceneComposer;
pub use paint::Paint;
pub use surface::{rect, DrawCommand, RecordingSurface, RenderSurface};
pub use terminal::TerminalSurface;

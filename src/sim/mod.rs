//! 仿真核心模块
//!
//! 离散事件调度（驱动周期性 tick）、单调时间与时钟抽象。

mod clock;
mod event;
mod scheduled_event;
mod simulator;
mod time;
mod world;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use event::Event;
pub use simulator::Simulator;
pub use time::SimTime;
pub use world::World;

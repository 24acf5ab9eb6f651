//! 动画核心
//!
//! 行程规划、会话状态、tick 状态机，以及持有它们的控制器。

mod clock;
mod controller;
mod itinerary;
mod realtime;
mod session;
mod stats;
mod world;

pub use clock::{AnimationClock, CompletionRule, Transition};
pub use controller::Controller;
pub use itinerary::{Itinerary, Leg};
pub use realtime::run_realtime;
pub use session::{AnimationSession, Direction, Phase};
pub use stats::Stats;
pub use world::{meta_of, AnimWorld, PressStart, SelectTopology, Tick};

//! 时钟抽象
//!
//! 驻留（dwell）计时只比较"当前时间"与截止时间，因此把时间来源抽象为
//! `Clock`：离散事件仿真器、测试用的手动时钟、真实单调时钟三者可互换。

use super::simulator::Simulator;
use super::time::SimTime;
use std::cell::Cell;
use std::time::Instant;

/// 单调时间来源
pub trait Clock {
    fn now(&self) -> SimTime;
}

impl Clock for Simulator {
    fn now(&self) -> SimTime {
        Simulator::now(self)
    }
}

/// 手动推进的时钟（测试、离线回放）
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<SimTime>,
}

impl ManualClock {
    pub fn new(at: SimTime) -> Self {
        Self { now: Cell::new(at) }
    }

    pub fn set(&self, at: SimTime) {
        self.now.set(at);
    }

    pub fn advance(&self, by: SimTime) {
        self.now.set(self.now.get().saturating_add(by));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SimTime {
        self.now.get()
    }
}

/// 真实单调时钟：以创建时刻为零点
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> SimTime {
        SimTime::from(self.origin.elapsed())
    }
}

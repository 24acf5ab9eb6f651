//! 统计信息
//!
//! 一次会话内的计数，选择新拓扑时清零。

use super::clock::Transition;
use crate::sim::SimTime;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Stats {
    pub ticks: u64,
    pub legs: u64,
    pub dwells: u64,
    pub reversals: u64,
    pub completed_at: Option<SimTime>,
}

impl Stats {
    pub fn record(&mut self, now: SimTime, tr: &Transition) {
        match tr {
            Transition::LegCompleted { .. } => self.legs += 1,
            Transition::DwellStarted { .. } => self.dwells += 1,
            Transition::Reversed | Transition::ReturnTrip => self.reversals += 1,
            Transition::Completed => self.completed_at = Some(now),
            Transition::DwellEnded => {}
        }
    }
}

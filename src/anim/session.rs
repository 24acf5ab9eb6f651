//! 动画会话
//!
//! 一次拓扑选择对应一个会话；会话只被时钟 tick 修改，下一次选择时整体替换。

use crate::sim::SimTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn flipped(self) -> Direction {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    Traveling,
    /// 插值冻结，直到单调时钟到达 `deadline`
    Dwelling { deadline: SimTime },
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationSession {
    /// 当前行程内的插值参数，始终在 [0, 1]
    pub(crate) t: f64,
    pub(crate) direction: Direction,
    pub(crate) phase: Phase,
    /// ring 当前所在节点（当前这条边的起点）
    pub(crate) index: usize,
    /// bus 已进入回程
    pub(crate) return_trip: bool,
    pub(crate) active: bool,
}

impl Default for AnimationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationSession {
    /// 新会话：t=0，正向，行进中
    pub fn new() -> Self {
        Self {
            t: 0.0,
            direction: Direction::Forward,
            phase: Phase::Traveling,
            index: 0,
            return_trip: false,
            active: true,
        }
    }

    /// 尚未选择拓扑时的会话：停在 t=0，tick 不推进
    pub fn idle() -> Self {
        Self {
            active: false,
            ..Self::new()
        }
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn return_trip(&self) -> bool {
        self.return_trip
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_dwelling(&self) -> bool {
        matches!(self.phase, Phase::Dwelling { .. })
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub(crate) fn set_t(&mut self, t: f64) {
        self.t = t.clamp(0.0, 1.0);
    }

    pub(crate) fn finish(&mut self) {
        self.phase = Phase::Complete;
        self.active = false;
    }
}

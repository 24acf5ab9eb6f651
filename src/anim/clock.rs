//! 动画时钟
//!
//! 固定频率 tick 驱动的状态机：`正向 -> [驻留] -> 反向 -> 完成`。
//!
//! 每个 tick：
//! 1. 未驻留时 `t += speed`
//! 2. `t >= 1` 时 `t = 0`，按拓扑的完成规则推进状态
//! 3. 驻留中且时钟到达截止时间时结束驻留（ring 此刻才反向）
//!
//! 驻留时长由单调时钟的截止时间决定，与 tick 抖动无关。

use super::session::{AnimationSession, Direction, Phase};
use crate::config::TimingParams;
use crate::sim::SimTime;
use crate::topo::{Layout, Topology};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// 一次完整行程（t 从 0 到 1）结束时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionRule {
    /// bus：同一条边先去后回，第二次走完即结束
    ReturnTrip,
    /// ring：逐边前进；正向到达最后一个节点后驻留，反向回到 0 号节点结束
    RingLap,
    /// mesh / star / tree：正向走完整个行程后反向并驻留，反向走完结束
    OutAndBack,
}

impl Topology {
    pub fn completion_rule(self) -> CompletionRule {
        match self {
            Topology::Bus => CompletionRule::ReturnTrip,
            Topology::Ring => CompletionRule::RingLap,
            Topology::Mesh | Topology::Star | Topology::Tree => CompletionRule::OutAndBack,
        }
    }
}

/// 一个 tick 内发生的状态变化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "transition", rename_all = "snake_case")]
pub enum Transition {
    /// t 走到 1 并归零；`index` 为推进后的 ring 游标（其它拓扑恒为 0）
    LegCompleted { index: usize },
    ReturnTrip,
    DwellStarted { deadline: SimTime },
    DwellEnded,
    Reversed,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    pub speed: f64,
    pub ring_dwell: SimTime,
    pub lap_dwell: SimTime,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::from_timing(&TimingParams::default())
    }
}

impl AnimationClock {
    pub fn from_timing(timing: &TimingParams) -> Self {
        Self {
            speed: timing.speed,
            ring_dwell: timing.ring_dwell(),
            lap_dwell: timing.lap_dwell(),
        }
    }

    /// 推进一个 tick，返回本 tick 触发的状态变化
    pub fn tick(
        &self,
        layout: &Layout,
        session: &mut AnimationSession,
        now: SimTime,
    ) -> Vec<Transition> {
        let mut out = Vec::new();
        if !session.active {
            return out;
        }

        if !session.is_dwelling() {
            session.set_t(session.t + self.speed);
        }
        trace!(t = session.t, phase = ?session.phase, "tick");

        if session.t >= 1.0 {
            session.t = 0.0;
            self.complete_leg(layout, session, now, &mut out);
        }

        if let Phase::Dwelling { deadline } = session.phase {
            if now >= deadline {
                session.phase = Phase::Traveling;
                out.push(Transition::DwellEnded);
                if layout.topology.completion_rule() == CompletionRule::RingLap {
                    session.direction = Direction::Reverse;
                    out.push(Transition::Reversed);
                }
            }
        }

        out
    }

    fn complete_leg(
        &self,
        layout: &Layout,
        session: &mut AnimationSession,
        now: SimTime,
        out: &mut Vec<Transition>,
    ) {
        match layout.topology.completion_rule() {
            CompletionRule::ReturnTrip => {
                out.push(Transition::LegCompleted { index: 0 });
                if !session.return_trip {
                    session.return_trip = true;
                    out.push(Transition::ReturnTrip);
                } else {
                    session.finish();
                    out.push(Transition::Completed);
                }
            }
            CompletionRule::RingLap => {
                let n = layout.endpoint_count();
                let forward = session.direction.is_forward();
                session.index = if forward {
                    (session.index + 1) % n
                } else {
                    (session.index + n - 1) % n
                };
                out.push(Transition::LegCompleted {
                    index: session.index,
                });
                if forward && session.index == n - 1 {
                    self.enter_dwell(session, now + self.ring_dwell, out);
                } else if !forward && session.index == 0 {
                    session.finish();
                    out.push(Transition::Completed);
                }
            }
            CompletionRule::OutAndBack => {
                out.push(Transition::LegCompleted { index: 0 });
                if session.direction.is_forward() {
                    session.direction = Direction::Reverse;
                    out.push(Transition::Reversed);
                    self.enter_dwell(session, now + self.lap_dwell, out);
                } else {
                    session.finish();
                    out.push(Transition::Completed);
                }
            }
        }
    }

    fn enter_dwell(
        &self,
        session: &mut AnimationSession,
        deadline: SimTime,
        out: &mut Vec<Transition>,
    ) {
        session.phase = Phase::Dwelling { deadline };
        out.push(Transition::DwellStarted { deadline });
    }
}

//! 动画世界与输入事件
//!
//! 在离散事件仿真器上驱动动画：`Tick` 每隔一个 tick 周期重新调度自己，
//! 会话结束后停止；`SelectTopology` / `PressStart` 是输入源。仿真器本身就是
//! 时钟，因此驻留截止时间以仿真时间计。

use super::controller::Controller;
use super::stats::Stats;
use crate::config::AnimConfig;
use crate::sim::{Event, SimTime, Simulator, World};
use crate::topo::{Layout, Topology};
use crate::viz::{VizEdgeInfo, VizEvent, VizEventKind, VizFrame, VizLogger, VizNodeInfo};
use std::any::Any;
use tracing::trace;

pub struct AnimWorld {
    pub controller: Controller,
    pub viz: Option<VizLogger>,
    /// 当前会话的计数
    pub stats: Stats,
    tick_period: SimTime,
    /// 队列里是否已有一个待执行的 Tick
    ticking: bool,
}

impl AnimWorld {
    pub fn new(config: AnimConfig) -> Self {
        let tick_period = config.timing.tick_period();
        Self {
            controller: Controller::new(config),
            viz: None,
            stats: Stats::default(),
            tick_period,
            ticking: false,
        }
    }

    pub fn tick_period(&self) -> SimTime {
        self.tick_period
    }

    fn viz_push(&mut self, t_ns: u64, kind: VizEventKind) {
        if let Some(v) = &mut self.viz {
            v.push(VizEvent { t_ns, kind });
        }
    }

    /// 记录当前布局
    pub fn emit_viz_meta(&mut self, now: SimTime) {
        if self.viz.is_none() {
            return;
        }
        let kind = meta_of(self.controller.layout());
        self.viz_push(now.0, kind);
    }

    fn emit_frame(&mut self, now: SimTime) {
        let Some(v) = &mut self.viz else { return };
        let s = self.controller.session();
        v.push_frame(
            now.0,
            VizFrame {
                t: s.t(),
                direction: s.direction(),
                phase: s.phase(),
                index: s.index(),
                packet: self.controller.packet_position(),
            },
        );
    }

    /// 确保 tick 在运行：没有待执行的 Tick 时调度一个
    fn arm(&mut self, sim: &mut Simulator) {
        if !self.ticking {
            self.ticking = true;
            sim.schedule_in(self.tick_period, Tick);
        }
    }

    fn should_keep_ticking(&self) -> bool {
        self.controller.started() && self.controller.session().is_active()
    }
}

impl World for AnimWorld {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// 布局 -> meta 事件
pub fn meta_of(layout: &Layout) -> VizEventKind {
    VizEventKind::Meta {
        topology: layout.topology,
        nodes: (0..layout.node_count())
            .map(|id| {
                let pos = layout.nodes[id].pos;
                VizNodeInfo {
                    id,
                    x: pos.x,
                    y: pos.y,
                    role: layout.role(id),
                }
            })
            .collect(),
        edges: layout
            .edges
            .iter()
            .map(|e| VizEdgeInfo { a: e.0, b: e.1 })
            .collect(),
        hub: layout.hub,
        cable: layout.cable,
    }
}

fn anim_world(world: &mut dyn World) -> &mut AnimWorld {
    world
        .as_any_mut()
        .downcast_mut::<AnimWorld>()
        .expect("world must be AnimWorld")
}

/// 周期 tick。开始画面期间不推进；会话结束（或尚未开始）时不再重新调度。
#[derive(Debug)]
pub struct Tick;

impl Event for Tick {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let w = anim_world(world);
        w.ticking = false;

        if w.controller.started() {
            let now = sim.now();
            w.stats.ticks += 1;
            let transitions = w.controller.tick(&*sim);
            for tr in transitions {
                w.stats.record(now, &tr);
                w.viz_push(now.0, VizEventKind::Transition(tr));
            }
            w.emit_frame(now);
        }

        if w.should_keep_ticking() {
            w.arm(sim);
        } else {
            trace!(ticks = w.stats.ticks, "会话结束，停止 tick");
        }
    }
}

/// 选择拓扑（菜单输入）
#[derive(Debug)]
pub struct SelectTopology {
    pub topology: Topology,
}

impl Event for SelectTopology {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let w = anim_world(world);
        let now = sim.now();
        w.controller.select(self.topology);
        w.stats = Stats::default();
        w.viz_push(
            now.0,
            VizEventKind::Select {
                topology: self.topology,
            },
        );
        w.emit_viz_meta(now);
        w.arm(sim);
    }
}

/// 开始键（离开开始画面）
#[derive(Debug)]
pub struct PressStart;

impl Event for PressStart {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let w = anim_world(world);
        if !w.controller.started() {
            w.controller.press_start();
            w.viz_push(sim.now().0, VizEventKind::Start);
        }
        w.arm(sim);
    }
}

//! 顶层控制器
//!
//! 唯一持有会话与几何缓存的对象。输入（选择拓扑、开始）和 tick 都经由它
//! 修改状态；渲染只读取它。

use super::clock::{AnimationClock, Transition};
use super::itinerary::Itinerary;
use super::session::AnimationSession;
use crate::config::AnimConfig;
use crate::sim::Clock;
use crate::topo::{Layout, Point, Topology};
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Controller {
    config: AnimConfig,
    clock: AnimationClock,
    layouts: HashMap<Topology, Layout>,
    topology: Topology,
    session: AnimationSession,
    started: bool,
}

impl Controller {
    /// 初始停在开始画面，默认选中 bus；会话在第一次 `select` 之前不推进
    pub fn new(config: AnimConfig) -> Self {
        let clock = AnimationClock::from_timing(&config.timing);
        let mut me = Self {
            config,
            clock,
            layouts: HashMap::new(),
            topology: Topology::Bus,
            session: AnimationSession::idle(),
            started: false,
        };
        me.ensure_layout(Topology::Bus);
        me
    }

    pub fn config(&self) -> &AnimConfig {
        &self.config
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn session(&self) -> &AnimationSession {
        &self.session
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn layout(&self) -> &Layout {
        // select() 总是先填充缓存
        &self.layouts[&self.topology]
    }

    /// 关闭开始画面
    pub fn press_start(&mut self) {
        if !self.started {
            info!("开始动画");
            self.started = true;
        }
    }

    /// 选择拓扑：无条件以新的活动会话替换当前会话（包括正在驻留的会话）
    pub fn select(&mut self, topology: Topology) {
        if self.session.is_dwelling() {
            debug!(from = %self.topology, "驻留中被新的选择打断");
        }
        self.ensure_layout(topology);
        self.topology = topology;
        self.session = AnimationSession::new();
        let layout = self.layout();
        info!(
            topology = %topology,
            nodes = layout.node_count(),
            edges = layout.edges.len(),
            "选择拓扑"
        );
    }

    fn ensure_layout(&mut self, topology: Topology) {
        let geometry = &self.config.geometry;
        self.layouts
            .entry(topology)
            .or_insert_with(|| topology.layout(geometry));
    }

    /// 推进一个 tick；开始画面期间不推进
    pub fn tick(&mut self, clock: &dyn Clock) -> Vec<Transition> {
        if !self.started {
            return Vec::new();
        }
        let now = clock.now();
        let layout = &self.layouts[&self.topology];
        let transitions = self.clock.tick(layout, &mut self.session, now);
        for tr in &transitions {
            match tr {
                Transition::Completed => {
                    info!(topology = %self.topology, now = ?now, "数据传输完成")
                }
                _ => debug!(topology = %self.topology, now = ?now, transition = ?tr, "状态变化"),
            }
        }
        transitions
    }

    /// 当前行程
    pub fn itinerary(&self) -> Itinerary {
        self.topology.plan(self.layout(), &self.session)
    }

    /// 数据包当前坐标；完成后、以及 ring 驻留期间不显示
    pub fn packet_position(&self) -> Option<Point> {
        if self.session.is_complete() {
            return None;
        }
        if self.topology == Topology::Ring && self.session.is_dwelling() {
            return None;
        }
        Some(self.itinerary().point_at(self.layout(), self.session.t()))
    }
}

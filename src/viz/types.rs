use crate::anim::{Direction, Phase, Transition};
use crate::topo::{NodeRole, Point, Segment, Topology};
use serde::{Deserialize, Serialize};

/// 可视化事件类型
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VizEventKind {
    /// 拓扑几何（每次选择拓扑后的第一条事件）
    Meta {
        topology: Topology,
        nodes: Vec<VizNodeInfo>,
        edges: Vec<VizEdgeInfo>,
        #[serde(skip_serializing_if = "Option::is_none")]
        hub: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        cable: Option<Segment>,
    },
    /// 离开开始画面
    Start,
    /// 用户选择了拓扑（会话被重置）
    Select { topology: Topology },
    /// 每个 tick 之后的一帧
    Frame(VizFrame),
    /// 状态机变化
    Transition(Transition),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizNodeInfo {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub role: NodeRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizEdgeInfo {
    pub a: usize,
    pub b: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizFrame {
    pub t: f64,
    pub direction: Direction,
    pub phase: Phase,
    pub index: usize,
    /// 数据包不可见时为空
    pub packet: Option<Point>,
}

/// 一个可回放的事件（JSON）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizEvent {
    /// 单调时间（纳秒，和 `SimTime.0` 同口径）
    pub t_ns: u64,
    #[serde(flatten)]
    pub kind: VizEventKind,
}

/// 事件收集器（存内存，结束时写 JSON 文件）
#[derive(Debug, Default)]
pub struct VizLogger {
    pub events: Vec<VizEvent>,
    /// 只记录每隔多少帧的一帧（0 或 1 表示每帧都记）
    pub frame_stride: u64,
    frames_seen: u64,
}

impl VizLogger {
    pub fn with_frame_stride(frame_stride: u64) -> Self {
        Self {
            frame_stride,
            ..Self::default()
        }
    }

    pub fn push(&mut self, ev: VizEvent) {
        self.events.push(ev);
    }

    /// 记录一帧（按 `frame_stride` 抽样）
    pub fn push_frame(&mut self, t_ns: u64, frame: VizFrame) {
        let stride = self.frame_stride.max(1);
        let keep = self.frames_seen % stride == 0;
        self.frames_seen += 1;
        if keep {
            self.push(VizEvent {
                t_ns,
                kind: VizEventKind::Frame(frame),
            });
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }
}

//! 可视化事件记录（用于离线回放）
//!
//! 每次选择拓扑先写一条 `meta`（节点/边坐标），之后每个 tick 一条 `frame`，
//! 状态机变化写成 `transition`。回放端只需要这份 JSON，不需要重新计算几何。

mod types;

pub use types::{VizEdgeInfo, VizEvent, VizEventKind, VizFrame, VizLogger, VizNodeInfo};

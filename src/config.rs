//! 动画配置
//!
//! 几何与计时常量集中在这里；可从 JSON 文件加载（缺省字段取默认值）。

use crate::sim::SimTime;
use crate::topo::{circle, tree};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 圆周拓扑与 bus 的节点数上限
pub const MAX_NODES: usize = 4096;
/// mesh 边数 `N·(N-1)/2` 上限
pub const MAX_MESH_EDGES: usize = 100_000;
/// 树的节点数上限
pub const MAX_TREE_NODES: usize = 4096;

/// 配置加载 / 校验错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// 几何参数（节点数、半径、树深度等）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryParams {
    /// mesh / ring / star 圆周上的节点数
    pub node_count: usize,
    pub radius: f64,
    /// star 中心 hub 的绘制半径
    pub hub_radius: f64,
    pub tree_depth: usize,
    pub branching: usize,
    pub bus_nodes: usize,
    pub bus_first_x: f64,
    pub bus_spacing: f64,
    pub bus_node_y: f64,
    pub bus_cable_y: f64,
    pub bus_cable_extent: f64,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            node_count: 6,
            radius: 0.7,
            hub_radius: 0.1,
            tree_depth: 3,
            branching: 2,
            bus_nodes: 6,
            bus_first_x: -0.7,
            bus_spacing: 0.3,
            bus_node_y: 0.1,
            bus_cable_y: 0.0,
            bus_cable_extent: 0.9,
        }
    }
}

/// 计时参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingParams {
    /// 每个 tick 的插值增量
    pub speed: f64,
    pub tick_ms: u64,
    /// ring 到达最后一个节点后的驻留时间
    pub ring_dwell_ms: u64,
    /// mesh / star / tree 去程结束后的驻留时间
    pub lap_dwell_ms: u64,
}

impl Default for TimingParams {
    fn default() -> Self {
        Self {
            speed: 0.01,
            tick_ms: 16,
            ring_dwell_ms: 2_000,
            lap_dwell_ms: 3_000,
        }
    }
}

impl TimingParams {
    pub fn tick_period(&self) -> SimTime {
        SimTime::from_millis(self.tick_ms)
    }

    pub fn ring_dwell(&self) -> SimTime {
        SimTime::from_millis(self.ring_dwell_ms)
    }

    pub fn lap_dwell(&self) -> SimTime {
        SimTime::from_millis(self.lap_dwell_ms)
    }
}

/// 开始画面上的文字
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleParams {
    pub lines: Vec<String>,
    pub prompt: String,
}

impl Default for TitleParams {
    fn default() -> Self {
        Self {
            lines: vec![
                "NETWORK TOPOLOGY".to_string(),
                "NETWORK TOPOLOGIES SIMULATION".to_string(),
            ],
            prompt: "Press ENTER to start the simulation".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimConfig {
    pub geometry: GeometryParams,
    pub timing: TimingParams,
    pub title: TitleParams,
}

impl AnimConfig {
    /// 从 JSON 文件加载并校验
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: AnimConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.geometry;
        let t = &self.timing;
        if g.node_count < 2 {
            return Err(ConfigError::Invalid(format!(
                "node_count must be >= 2, got {}",
                g.node_count
            )));
        }
        if g.node_count > MAX_NODES {
            return Err(ConfigError::Invalid(format!(
                "node_count must be <= {MAX_NODES}, got {}",
                g.node_count
            )));
        }
        match circle::mesh_edge_count(g.node_count) {
            Some(e) if e <= MAX_MESH_EDGES => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "mesh with {} nodes exceeds {MAX_MESH_EDGES} edges",
                    g.node_count
                )));
            }
        }
        if !(2..=MAX_NODES).contains(&g.bus_nodes) {
            return Err(ConfigError::Invalid(format!(
                "bus_nodes must be in 2..={MAX_NODES}, got {}",
                g.bus_nodes
            )));
        }
        if g.tree_depth < 2 {
            return Err(ConfigError::Invalid(format!(
                "tree_depth must be >= 2, got {}",
                g.tree_depth
            )));
        }
        if g.branching < 2 {
            return Err(ConfigError::Invalid(format!(
                "branching must be >= 2, got {}",
                g.branching
            )));
        }
        match tree::node_count(g.tree_depth, g.branching) {
            Some(n) if n <= MAX_TREE_NODES => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "tree with depth {} and branching {} exceeds {MAX_TREE_NODES} nodes",
                    g.tree_depth, g.branching
                )));
            }
        }
        if !(t.speed > 0.0 && t.speed <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "speed must be in (0, 1], got {}",
                t.speed
            )));
        }
        if t.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be > 0".to_string()));
        }
        Ok(())
    }
}

//! 布局类型
//!
//! 节点坐标、边，以及一个拓扑生成后的完整布局。坐标为归一化设备坐标
//! `[-1, 1]²`。

use super::Topology;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 线性插值：`frac = 0` 精确返回 self，`frac = 1` 精确返回 `to`
    pub fn lerp(self, to: Point, frac: f64) -> Point {
        let keep = 1.0 - frac;
        Point {
            x: self.x * keep + to.x * frac,
            y: self.y * keep + to.y * frac,
        }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// 节点（生成后不可变）。`is_root` / `is_leaf` 只影响着色。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub pos: Point,
    pub is_root: bool,
    pub is_leaf: bool,
}

impl Node {
    pub fn plain(pos: Point) -> Self {
        Self {
            pos,
            is_root: false,
            is_leaf: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    Client,
    Server,
    Hub,
    Plain,
}

/// 无向边（两个节点下标）；遍历方向由行程决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge(pub usize, pub usize);

/// 线段（bus 的主干电缆）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// 一个拓扑的完整几何：节点、边、可选的 hub 与电缆
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub topology: Topology,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// star 的中心节点下标
    pub hub: Option<usize>,
    /// bus 主干；数据包沿主干移动
    pub cable: Option<Segment>,
}

impl Layout {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 不含 hub 的端点数量（ring 的取模基数）
    pub fn endpoint_count(&self) -> usize {
        self.nodes.len() - usize::from(self.hub.is_some())
    }

    /// 数据包与节点的接触点：bus 上是节点在主干上的投影，其它拓扑就是节点本身
    pub fn anchor(&self, node: usize) -> Point {
        let pos = self.nodes[node].pos;
        match self.cable {
            Some(cable) => Point::new(pos.x, cable.from.y),
            None => pos,
        }
    }

    /// 着色用角色：root 为 client，leaf 为 server
    pub fn role(&self, node: usize) -> NodeRole {
        let n = &self.nodes[node];
        if self.hub == Some(node) {
            NodeRole::Hub
        } else if n.is_root {
            NodeRole::Client
        } else if n.is_leaf {
            NodeRole::Server
        } else {
            NodeRole::Plain
        }
    }

    pub fn first_endpoint(&self) -> usize {
        0
    }

    pub fn last_endpoint(&self) -> usize {
        self.endpoint_count() - 1
    }
}

//! 拓扑几何
//!
//! 五种经典拓扑的节点坐标与边。生成是纯函数：同样的拓扑 + 参数总是得到
//! 同样的布局。

pub mod bus;
pub mod circle;
mod layout;
pub mod tree;

pub use layout::{Edge, Layout, Node, NodeRole, Point, Segment};

use crate::config::GeometryParams;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    Bus,
    Mesh,
    Ring,
    Star,
    Tree,
}

impl Topology {
    /// 菜单顺序
    pub const ALL: [Topology; 5] = [
        Topology::Bus,
        Topology::Mesh,
        Topology::Ring,
        Topology::Star,
        Topology::Tree,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Topology::Bus => "bus",
            Topology::Mesh => "mesh",
            Topology::Ring => "ring",
            Topology::Star => "star",
            Topology::Tree => "tree",
        }
    }

    /// 生成该拓扑的布局
    pub fn layout(self, params: &GeometryParams) -> Layout {
        match self {
            Topology::Bus => bus::build_bus(params),
            Topology::Mesh => circle::build_mesh(params),
            Topology::Ring => circle::build_ring(params),
            Topology::Star => circle::build_star(params),
            Topology::Tree => tree::build_tree(params),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown topology {0:?} (expected bus, mesh, ring, star or tree)")]
pub struct ParseTopologyError(pub String);

impl FromStr for Topology {
    type Err = ParseTopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topology::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTopologyError(s.to_string()))
    }
}

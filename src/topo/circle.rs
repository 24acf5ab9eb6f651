//! 圆周布局的拓扑：mesh / ring / star
//!
//! 三者共享同一组节点坐标：N 个节点均匀分布在半径为 r 的圆上，
//! 第 i 个节点的角度为 `2π·i/N`。区别只在边。

use super::layout::{Edge, Layout, Node, Point};
use super::Topology;
use crate::config::GeometryParams;
use std::f64::consts::TAU;

/// 圆周上的 N 个节点；0 号为 client（root），N-1 号为 server（leaf）
pub fn circle_nodes(n: usize, radius: f64) -> Vec<Node> {
    (0..n)
        .map(|i| {
            let theta = TAU * i as f64 / n as f64;
            Node {
                pos: Point::new(radius * theta.cos(), radius * theta.sin()),
                is_root: i == 0,
                is_leaf: i + 1 == n,
            }
        })
        .collect()
}

/// 全连接的边数 `N·(N-1)/2`；溢出时返回 None
pub fn mesh_edge_count(n: usize) -> Option<usize> {
    n.checked_mul(n.saturating_sub(1)).map(|pairs| pairs / 2)
}

/// 全连接：每个无序对 (i, j)，i < j，按行优先顺序
pub fn build_mesh(params: &GeometryParams) -> Layout {
    let n = params.node_count;
    let mut edges = Vec::with_capacity(mesh_edge_count(n).unwrap_or(0));
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push(Edge(i, j));
        }
    }
    Layout {
        topology: Topology::Mesh,
        nodes: circle_nodes(n, params.radius),
        edges,
        hub: None,
        cable: None,
    }
}

/// 相邻下标相连并回绕，构成一个长度为 N 的环
pub fn build_ring(params: &GeometryParams) -> Layout {
    let n = params.node_count;
    Layout {
        topology: Topology::Ring,
        nodes: circle_nodes(n, params.radius),
        edges: (0..n).map(|i| Edge(i, (i + 1) % n)).collect(),
        hub: None,
        cable: None,
    }
}

/// 圆周节点 + 原点处的 hub（下标 N）；hub 与每个节点相连
pub fn build_star(params: &GeometryParams) -> Layout {
    let n = params.node_count;
    let mut nodes = circle_nodes(n, params.radius);
    nodes.push(Node::plain(Point::ORIGIN));
    let hub = n;
    Layout {
        topology: Topology::Star,
        nodes,
        edges: (0..n).map(|i| Edge(hub, i)).collect(),
        hub: Some(hub),
        cable: None,
    }
}

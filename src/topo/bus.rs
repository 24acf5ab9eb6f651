//! Bus 拓扑构建
//!
//! 一条水平主干，节点等间距排在主干上方。只有首尾两个节点参与行程，
//! 中间节点仅用于展示。

use super::layout::{Edge, Layout, Node, Point, Segment};
use super::Topology;
use crate::config::GeometryParams;

pub fn build_bus(params: &GeometryParams) -> Layout {
    let n = params.bus_nodes;
    let nodes = (0..n)
        .map(|i| Node {
            pos: Point::new(
                params.bus_first_x + i as f64 * params.bus_spacing,
                params.bus_node_y,
            ),
            is_root: i == 0,
            is_leaf: i + 1 == n,
        })
        .collect::<Vec<_>>();

    let cable = Segment {
        from: Point::new(-params.bus_cable_extent, params.bus_cable_y),
        to: Point::new(params.bus_cable_extent, params.bus_cable_y),
    };

    Layout {
        topology: Topology::Bus,
        nodes,
        edges: vec![Edge(0, n - 1)],
        hub: None,
        cable: Some(cable),
    }
}

//! Tree 拓扑构建
//!
//! 深度为 L 的完全 B 叉树，按广度优先展开成一个数组：
//! - 第 ℓ 层有 `B^ℓ` 个节点，第 ℓ 层起始下标为 `(B^ℓ - 1) / (B - 1)`
//! - 节点 p 的孩子为 `p·B + j + 1`（j ∈ 0..B）
//! - 每层节点平分父节点的水平跨度；y 随层数线性下降

use super::layout::{Edge, Layout, Node, Point};
use super::Topology;
use crate::config::GeometryParams;

/// 第 `level` 层第一个节点的广度优先下标；溢出或 `branching < 2` 时返回 None
pub fn level_offset(level: usize, branching: usize) -> Option<usize> {
    let b = branching;
    if b < 2 {
        return None;
    }
    let width = checked_width(level, b)?;
    Some((width - 1) / (b - 1))
}

fn checked_width(level: usize, branching: usize) -> Option<usize> {
    branching.checked_pow(u32::try_from(level).ok()?)
}

/// 总节点数 `Σ_{ℓ<L} B^ℓ`；溢出时返回 None
pub fn node_count(depth: usize, branching: usize) -> Option<usize> {
    level_offset(depth, branching)
}

/// 节点所在层
pub fn level_of(index: usize, branching: usize) -> usize {
    let mut level = 0;
    while level_offset(level + 1, branching).is_some_and(|next| next <= index) {
        level += 1;
    }
    level
}

/// 父节点下标（根节点返回 None）
pub fn parent_of(index: usize, branching: usize) -> Option<usize> {
    (index > 0).then(|| (index - 1) / branching)
}

pub fn build_tree(params: &GeometryParams) -> Layout {
    let depth = params.tree_depth;
    let b = params.branching;
    // 参数已由 AnimConfig::validate 约束，这里只做饱和兜底
    let total = node_count(depth, b).unwrap_or(usize::MAX);

    let level_spacing = 2.0 / (depth as f64 + 1.0);
    let mut nodes = Vec::with_capacity(total);
    for level in 0..depth {
        let width = checked_width(level, b).unwrap_or(usize::MAX);
        let half_span = 1.0 / width as f64;
        let y = 1.0 - (level as f64 + 1.0) * level_spacing;
        for i in 0..width {
            nodes.push(Node {
                pos: Point::new(-1.0 + (2 * i + 1) as f64 * half_span, y),
                is_root: level == 0,
                is_leaf: level + 1 == depth,
            });
        }
    }

    let mut edges = Vec::with_capacity(nodes.len().saturating_sub(1));
    for level in 0..depth.saturating_sub(1) {
        let width = checked_width(level, b).unwrap_or(0);
        let offset = level_offset(level, b).unwrap_or(0);
        for i in 0..width {
            let parent = i + offset;
            for j in 0..b {
                let child = parent * b + j + 1;
                if child < nodes.len() {
                    edges.push(Edge(parent, child));
                }
            }
        }
    }

    Layout {
        topology: Topology::Tree,
        nodes,
        edges,
        hub: None,
        cable: None,
    }
}

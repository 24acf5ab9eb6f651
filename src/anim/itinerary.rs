//! 行程规划与插值
//!
//! 行程（itinerary）是一次单向遍历中数据包依次经过的有向边（leg）。
//! 插值参数 t ∈ [0, 1] 均匀分给各段：n 段时第 k 段占 `[k/n, (k+1)/n)`。

use super::session::AnimationSession;
use crate::topo::{Edge, Layout, Point, Topology};
use serde::{Deserialize, Serialize};

/// 有向遍历的一条边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    pub from: usize,
    pub to: usize,
}

impl Leg {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn reversed(self) -> Leg {
        Leg {
            from: self.to,
            to: self.from,
        }
    }
}

impl From<Edge> for Leg {
    fn from(e: Edge) -> Self {
        Leg::new(e.0, e.1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    pub fn new(legs: Vec<Leg>) -> Self {
        debug_assert!(!legs.is_empty(), "itinerary must have at least one leg");
        Self { legs }
    }

    /// 按边序正向遍历
    pub fn along(edges: &[Edge]) -> Self {
        Self::new(edges.iter().copied().map(Leg::from).collect())
    }

    /// 边序倒置，但每条边仍按 `a -> b` 穿过
    pub fn back_to_front(edges: &[Edge]) -> Self {
        Self::new(edges.iter().rev().copied().map(Leg::from).collect())
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// 起点节点
    pub fn origin(&self) -> Option<usize> {
        self.legs.first().map(|l| l.from)
    }

    /// 终点节点
    pub fn destination(&self) -> Option<usize> {
        self.legs.last().map(|l| l.to)
    }

    /// t 对应的 (段下标, 段内比例)。t = 1 时落在最后一段的终点，
    /// 浮点越界一律夹到合法范围。
    pub fn locate(&self, t: f64) -> (usize, f64) {
        let n = self.legs.len().max(1);
        let progress = t.clamp(0.0, 1.0) * n as f64;
        let leg = (progress.floor() as usize).min(n - 1);
        let frac = (progress - leg as f64).clamp(0.0, 1.0);
        (leg, frac)
    }

    /// t 对应的坐标：当前段两端锚点的凸组合
    pub fn point_at(&self, layout: &Layout, t: f64) -> Point {
        let (idx, frac) = self.locate(t);
        match self.legs.get(idx) {
            Some(leg) => layout.anchor(leg.from).lerp(layout.anchor(leg.to), frac),
            None => layout.anchor(0),
        }
    }
}

impl Topology {
    /// 根据会话状态（方向、ring 游标、bus 回程标志）规划当前行程
    pub fn plan(self, layout: &Layout, session: &AnimationSession) -> Itinerary {
        let forward = session.direction().is_forward();
        let first = layout.first_endpoint();
        let last = layout.last_endpoint();
        match self {
            Topology::Bus => {
                let leg = Leg::new(first, last);
                if session.return_trip() {
                    Itinerary::new(vec![leg.reversed()])
                } else {
                    Itinerary::new(vec![leg])
                }
            }
            Topology::Ring => {
                let n = layout.endpoint_count();
                let from = session.index() % n;
                let to = if forward { (from + 1) % n } else { (from + n - 1) % n };
                Itinerary::new(vec![Leg::new(from, to)])
            }
            Topology::Star => {
                // 前半段 first -> hub，后半段 hub -> last；反向时镜像
                let Some(hub) = layout.hub else {
                    return Itinerary::new(vec![Leg::new(first, last)]);
                };
                let there = vec![Leg::new(first, hub), Leg::new(hub, last)];
                if forward {
                    Itinerary::new(there)
                } else {
                    Itinerary::new(there.into_iter().rev().map(Leg::reversed).collect())
                }
            }
            Topology::Mesh | Topology::Tree => {
                if forward {
                    Itinerary::along(&layout.edges)
                } else {
                    Itinerary::back_to_front(&layout.edges)
                }
            }
        }
    }
}

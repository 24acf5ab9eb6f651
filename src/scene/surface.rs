//! 绘制接口
//!
//! 核心逻辑从不直接调用它；由 `SceneComposer` 把布局和数据包位置翻译成
//! 绘制调用。

use super::paint::Paint;
use crate::topo::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::io;

pub trait RenderSurface {
    fn segment(&mut self, from: Point, to: Point, paint: Paint);
    fn fill_quad(&mut self, quad: [Point; 4], paint: Paint);
    fn outline_quad(&mut self, quad: [Point; 4], paint: Paint);
    fn text(&mut self, at: Point, text: &str, paint: Paint);
    /// 一帧结束
    fn present(&mut self) -> io::Result<()>;

    /// 实心圆：以圆心为公共顶点的一圈退化四边形
    fn fill_disc(&mut self, center: Point, radius: f64, segments: usize, paint: Paint) {
        let segments = segments.max(3);
        let at = |i: usize| {
            let theta = TAU * i as f64 / segments as f64;
            Point::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        };
        for i in 0..segments {
            let (a, b) = (at(i), at(i + 1));
            self.fill_quad([center, a, b, b], paint);
        }
    }
}

/// 轴对齐矩形（逆时针）
pub fn rect(min: Point, max: Point) -> [Point; 4] {
    [
        min,
        Point::new(max.x, min.y),
        max,
        Point::new(min.x, max.y),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Segment { from: Point, to: Point, paint: Paint },
    FillQuad { quad: [Point; 4], paint: Paint },
    OutlineQuad { quad: [Point; 4], paint: Paint },
    Text { at: Point, text: String, paint: Paint },
}

impl DrawCommand {
    pub fn paint(&self) -> Paint {
        match self {
            DrawCommand::Segment { paint, .. }
            | DrawCommand::FillQuad { paint, .. }
            | DrawCommand::OutlineQuad { paint, .. }
            | DrawCommand::Text { paint, .. } => *paint,
        }
    }
}

/// 把绘制调用记下来（测试、JSON 导出）
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pending: Vec<DrawCommand>,
    pub frames: Vec<Vec<DrawCommand>>,
}

impl RecordingSurface {
    pub fn last_frame(&self) -> Option<&[DrawCommand]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl RenderSurface for RecordingSurface {
    fn segment(&mut self, from: Point, to: Point, paint: Paint) {
        self.pending.push(DrawCommand::Segment { from, to, paint });
    }

    fn fill_quad(&mut self, quad: [Point; 4], paint: Paint) {
        self.pending.push(DrawCommand::FillQuad { quad, paint });
    }

    fn outline_quad(&mut self, quad: [Point; 4], paint: Paint) {
        self.pending.push(DrawCommand::OutlineQuad { quad, paint });
    }

    fn text(&mut self, at: Point, text: &str, paint: Paint) {
        self.pending.push(DrawCommand::Text {
            at,
            text: text.to_string(),
            paint,
        });
    }

    fn present(&mut self) -> io::Result<()> {
        self.frames.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}

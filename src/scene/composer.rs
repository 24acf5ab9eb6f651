//! 场景合成
//!
//! 读取控制器（布局 + 数据包位置），输出一帧绘制调用。只读，不修改状态。

use super::paint::Paint;
use super::surface::{rect, RenderSurface};
use crate::anim::Controller;
use crate::topo::{Layout, Point};
use std::io;

/// 数据包方块半边长
const PACKET_HALF: f64 = 0.02;
const HUB_SEGMENTS: usize = 20;
const TITLE_ORIGIN: Point = Point { x: -0.3, y: 0.1 };
const TITLE_LINE_STEP: f64 = 0.1;
const PROMPT_AT: Point = Point { x: -0.5, y: -0.8 };

#[derive(Debug, Clone, Copy, Default)]
pub struct SceneComposer;

impl SceneComposer {
    /// 合成并呈现一帧
    pub fn compose(&self, ctl: &Controller, surface: &mut dyn RenderSurface) -> io::Result<()> {
        if ctl.started() {
            self.draw_topology(ctl, surface);
        } else {
            self.draw_title(ctl, surface);
        }
        surface.present()
    }

    fn draw_title(&self, ctl: &Controller, surface: &mut dyn RenderSurface) {
        let title = &ctl.config().title;
        for (i, line) in title.lines.iter().enumerate() {
            let at = Point::new(TITLE_ORIGIN.x, TITLE_ORIGIN.y - i as f64 * TITLE_LINE_STEP);
            surface.text(at, line, Paint::Text);
        }
        surface.text(PROMPT_AT, &title.prompt, Paint::Text);
    }

    fn draw_topology(&self, ctl: &Controller, surface: &mut dyn RenderSurface) {
        let layout = ctl.layout();
        self.draw_wires(layout, surface);
        if let Some(hub) = layout.hub {
            let r = ctl.config().geometry.hub_radius;
            surface.fill_disc(layout.nodes[hub].pos, r, HUB_SEGMENTS, Paint::Hub);
        }
        for (i, node) in layout.nodes.iter().enumerate() {
            if layout.hub == Some(i) {
                continue;
            }
            draw_computer(surface, node.pos, Paint::for_role(layout.role(i)));
        }
        if let Some(p) = ctl.packet_position() {
            let half = Point::new(PACKET_HALF, PACKET_HALF);
            surface.fill_quad(
                rect(
                    Point::new(p.x - half.x, p.y - half.y),
                    Point::new(p.x + half.x, p.y + half.y),
                ),
                Paint::Packet,
            );
        }
    }

    /// bus 只画主干；其余拓扑画每条边
    fn draw_wires(&self, layout: &Layout, surface: &mut dyn RenderSurface) {
        if let Some(cable) = layout.cable {
            surface.segment(cable.from, cable.to, Paint::Wire);
            return;
        }
        for e in &layout.edges {
            surface.segment(layout.nodes[e.0].pos, layout.nodes[e.1].pos, Paint::Wire);
        }
    }
}

/// 一台电脑：实心显示器、空心底座、空心机箱
fn draw_computer(surface: &mut dyn RenderSurface, at: Point, paint: Paint) {
    let Point { x, y } = at;
    surface.fill_quad(
        rect(Point::new(x - 0.06, y + 0.02), Point::new(x + 0.06, y + 0.12)),
        paint,
    );
    surface.outline_quad(
        rect(Point::new(x - 0.03, y - 0.02), Point::new(x + 0.03, y + 0.02)),
        paint,
    );
    surface.outline_quad(
        rect(Point::new(x - 0.05, y - 0.08), Point::new(x + 0.05, y - 0.02)),
        paint,
    );
}

//! 终端 surface
//!
//! 一帧内的绘制调用先攒下来，`present` 时整体画进一个 ratatui `Canvas`
//! （盲文点阵，坐标范围 `[-1, 1]²`）。后端可以是真实终端
//! （`CrosstermBackend`），也可以是测试用的 `TestBackend`。

use super::paint::Paint;
use super::surface::{DrawCommand, RenderSurface};
use crate::topo::Point;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Context, Line};
use ratatui::{Terminal, TerminalOptions, Viewport};
use std::io;

/// 填充时相邻扫描线的最大间距（NDC）
const FILL_PITCH: f64 = 0.01;
const MAX_FILL_LINES: usize = 256;

pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    pending: Vec<DrawCommand>,
    frames: u64,
}

impl<B: Backend> TerminalSurface<B> {
    /// 固定 `width × height` 视口，不查询终端尺寸
    pub fn new(backend: B, width: u16, height: u16) -> io::Result<Self> {
        let area = Rect::new(0, 0, width.max(2), height.max(2));
        let terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Fixed(area),
            },
        )?;
        Ok(Self {
            terminal,
            pending: Vec::new(),
            frames: 0,
        })
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    pub fn backend_mut(&mut self) -> &mut B {
        self.terminal.backend_mut()
    }
}

fn color_of(paint: Paint) -> Color {
    let [r, g, b] = paint.rgb().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color::Rgb(r, g, b)
}

fn draw_line(ctx: &mut Context, from: Point, to: Point, color: Color) {
    ctx.draw(&Line {
        x1: from.x,
        y1: from.y,
        x2: to.x,
        y2: to.y,
        color,
    });
}

/// 用一组扫描线填满四边形：`q0->q3` 与 `q1->q2` 上的对应点两两相连
fn fill(ctx: &mut Context, quad: &[Point; 4], color: Color) {
    let longest = (0..4)
        .map(|i| quad[i].distance(quad[(i + 1) % 4]))
        .fold(0.0_f64, f64::max);
    let lines = ((longest / FILL_PITCH).ceil() as usize).clamp(1, MAX_FILL_LINES);
    for k in 0..=lines {
        let f = k as f64 / lines as f64;
        draw_line(ctx, quad[0].lerp(quad[3], f), quad[1].lerp(quad[2], f), color);
    }
}

fn paint_commands(ctx: &mut Context, commands: &[DrawCommand]) {
    for cmd in commands {
        let color = color_of(cmd.paint());
        match cmd {
            DrawCommand::Segment { from, to, .. } => draw_line(ctx, *from, *to, color),
            DrawCommand::FillQuad { quad, .. } => fill(ctx, quad, color),
            DrawCommand::OutlineQuad { quad, .. } => {
                for i in 0..4 {
                    draw_line(ctx, quad[i], quad[(i + 1) % 4], color);
                }
            }
            DrawCommand::Text { at, text, .. } => {
                ctx.print(at.x, at.y, Span::styled(text.clone(), Style::default().fg(color)));
            }
        }
    }
}

impl<B: Backend> RenderSurface for TerminalSurface<B> {
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
        let commands = std::mem::take(&mut self.pending);
        self.terminal.draw(|f| {
            let canvas = Canvas::default()
                .marker(Marker::Braille)
                .x_bounds([-1.0, 1.0])
                .y_bounds([-1.0, 1.0])
                .paint(|ctx| paint_commands(ctx, &commands));
            f.render_widget(canvas, f.size());
        })?;
        self.frames += 1;
        Ok(())
    }
}

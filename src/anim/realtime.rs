//! 实时驱动
//!
//! 真实时间下的 tick 循环：每个周期先重绘、再 tick，两次 tick 之间按单调
//! 时钟睡到下一个截止点。睡眠只发生在 tick 之间，tick 本身从不阻塞；
//! 驻留由会话里的截止时间决定，与这里的节拍无关。

use super::controller::Controller;
use super::stats::Stats;
use crate::scene::{RenderSurface, SceneComposer};
use crate::sim::{Clock, SimTime};
use std::io;
use std::thread;
use tracing::debug;

pub fn run_realtime(
    ctl: &mut Controller,
    surface: &mut dyn RenderSurface,
    clock: &dyn Clock,
    tick_period: SimTime,
    until: Option<SimTime>,
) -> io::Result<Stats> {
    let composer = SceneComposer;
    let mut stats = Stats::default();
    let mut next = clock.now();

    loop {
        composer.compose(ctl, surface)?;
        if !ctl.session().is_active() {
            break;
        }
        if until.is_some_and(|u| clock.now() >= u) {
            debug!(ticks = stats.ticks, "到达运行时限");
            break;
        }

        next = next + tick_period;
        let now = clock.now();
        if next > now {
            thread::sleep(SimTime(next.0 - now.0).as_duration());
        }

        let now = clock.now();
        stats.ticks += 1;
        for tr in ctl.tick(clock) {
            stats.record(now, &tr);
        }
    }

    Ok(stats)
}

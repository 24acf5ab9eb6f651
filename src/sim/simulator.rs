//! 仿真器
//!
//! 动画 tick 在这里只是一个每隔固定周期重新调度自己的事件；选择拓扑、
//! 按开始键同样是排在某个时刻的事件。

use super::event::Event;
use super::scheduled_event::ScheduledEvent;
use super::time::SimTime;
use super::world::World;
use std::collections::BinaryHeap;
use tracing::{debug, info, trace};

/// 当前时间 + 待执行事件队列
#[derive(Default)]
pub struct Simulator {
    now: SimTime,
    next_seq: u64,
    q: BinaryHeap<ScheduledEvent>,
}

impl Simulator {
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// 队列中尚未执行的事件数
    pub fn pending(&self) -> usize {
        self.q.len()
    }

    /// 下一个事件的时刻
    pub fn next_at(&self) -> Option<SimTime> {
        self.q.peek().map(|item| item.at)
    }

    /// 在 `at` 执行 `ev`；早于当前时间的按当前时间处理
    #[tracing::instrument(skip(self, ev), fields(event_type = std::any::type_name::<E>(), schedule_at = ?at))]
    pub fn schedule<E: Event>(&mut self, at: SimTime, ev: E) {
        let at = at.max(self.now);
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        trace!(now = ?self.now, seq, "调度事件");
        self.q.push(ScheduledEvent {
            at,
            seq,
            ev: Box::new(ev),
        });
    }

    /// 从现在起 `delay` 之后执行
    pub fn schedule_in<E: Event>(&mut self, delay: SimTime, ev: E) {
        self.schedule(self.now + delay, ev);
    }

    /// 执行所有 `at <= until` 的事件，然后把时间推进到 `until`（不会倒退）。
    /// 返回执行的事件数。
    pub fn run_until(&mut self, until: SimTime, world: &mut dyn World) -> u64 {
        let executed = self.drain(Some(until), world);
        self.now = self.now.max(until);
        executed
    }

    /// 运行到队列为空，返回执行的事件数。
    #[tracing::instrument(skip(self, world))]
    pub fn run(&mut self, world: &mut dyn World) -> u64 {
        debug!(now = ?self.now, queue_size = self.q.len(), "开始运行仿真");
        let executed = self.drain(None, world);
        info!(total_events = executed, final_time = ?self.now, "仿真完成");
        executed
    }

    fn drain(&mut self, until: Option<SimTime>, world: &mut dyn World) -> u64 {
        let mut executed: u64 = 0;
        while self.next_at().is_some_and(|at| until.is_none_or(|u| at <= u)) {
            let Some(item) = self.q.pop() else { break };
            self.now = item.at;
            executed += 1;
            trace!(
                event_num = executed,
                now = ?self.now,
                seq = item.seq,
                remaining_queue = self.q.len(),
                "执行事件"
            );
            item.ev.execute(self, world);
        }
        executed
    }
}

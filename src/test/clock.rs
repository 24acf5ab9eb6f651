use crate::anim::{AnimationClock, AnimationSession, Direction, Phase, Transition};
use crate::config::GeometryParams;
use crate::sim::SimTime;
use crate::topo::{Layout, Topology};

fn clock(speed: f64) -> AnimationClock {
    AnimationClock {
        speed,
        ring_dwell: SimTime::from_secs(2),
        lap_dwell: SimTime::from_secs(3),
    }
}

fn layout(topology: Topology) -> Layout {
    topology.layout(&GeometryParams::default())
}

/// 在固定时刻连续 tick，收集所有状态变化
fn tick_n(
    c: &AnimationClock,
    layout: &Layout,
    s: &mut AnimationSession,
    now: SimTime,
    n: usize,
) -> Vec<Transition> {
    (0..n).flat_map(|_| c.tick(layout, s, now)).collect()
}

#[test]
fn t_advances_by_speed_and_wraps_to_zero() {
    let c = clock(0.25);
    let l = layout(Topology::Mesh);
    let mut s = AnimationSession::new();

    assert!(c.tick(&l, &mut s, SimTime::ZERO).is_empty());
    assert_eq!(s.t(), 0.25);
    tick_n(&c, &l, &mut s, SimTime::ZERO, 2);
    assert_eq!(s.t(), 0.75);
    let out = c.tick(&l, &mut s, SimTime::ZERO);
    assert_eq!(s.t(), 0.0);
    assert_eq!(out[0], Transition::LegCompleted { index: 0 });
}

#[test]
fn overshooting_speed_is_clamped() {
    let c = clock(0.3);
    let l = layout(Topology::Tree);
    let mut s = AnimationSession::new();
    for _ in 0..3 {
        c.tick(&l, &mut s, SimTime::ZERO);
        assert!((0.0..=1.0).contains(&s.t()));
    }
    // 第 4 次到达 1.2 -> 夹到 1 -> 完成一圈并归零
    let out = c.tick(&l, &mut s, SimTime::ZERO);
    assert_eq!(s.t(), 0.0);
    assert!(out.contains(&Transition::Reversed));
}

#[test]
fn bus_completes_after_exactly_two_crossings() {
    let c = clock(0.25);
    let l = layout(Topology::Bus);
    let mut s = AnimationSession::new();

    tick_n(&c, &l, &mut s, SimTime::ZERO, 3);
    assert!(!s.return_trip());
    let out = c.tick(&l, &mut s, SimTime::ZERO);
    assert_eq!(out, vec![Transition::LegCompleted { index: 0 }, Transition::ReturnTrip]);
    assert!(s.return_trip());
    assert_eq!(s.direction(), Direction::Forward, "bus never flips direction");
    assert!(s.is_active());

    tick_n(&c, &l, &mut s, SimTime::ZERO, 3);
    assert!(!s.is_complete());
    let out = c.tick(&l, &mut s, SimTime::ZERO);
    assert_eq!(out, vec![Transition::LegCompleted { index: 0 }, Transition::Completed]);
    assert!(s.is_complete());
    assert!(!s.is_active());

    // 完成后 tick 不再有任何效果
    assert!(tick_n(&c, &l, &mut s, SimTime::ZERO, 10).is_empty());
    assert_eq!(s.t(), 0.0);
}

#[test]
fn ring_dwells_once_at_last_node_then_returns_to_zero() {
    let c = clock(0.5);
    let l = layout(Topology::Ring);
    let mut s = AnimationSession::new();
    let t0 = SimTime::from_millis(100);

    // 正向 5 条边，每条 2 个 tick
    let out = tick_n(&c, &l, &mut s, t0, 10);
    let indices = out
        .iter()
        .filter_map(|tr| match tr {
            Transition::LegCompleted { index } => Some(*index),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    assert_eq!(s.index(), 5);
    let deadline = t0 + SimTime::from_secs(2);
    assert_eq!(s.phase(), Phase::Dwelling { deadline });
    assert_eq!(s.direction(), Direction::Forward, "ring flips when the dwell ends");

    // 驻留期间 t 冻结
    let out = tick_n(&c, &l, &mut s, SimTime(deadline.0 - 1), 50);
    assert!(out.is_empty());
    assert_eq!(s.t(), 0.0);
    assert!(s.is_dwelling());

    let out = c.tick(&l, &mut s, deadline);
    assert_eq!(out, vec![Transition::DwellEnded, Transition::Reversed]);
    assert_eq!(s.direction(), Direction::Reverse);
    assert_eq!(s.t(), 0.0, "the tick that ends the dwell does not advance t");

    let out = tick_n(&c, &l, &mut s, deadline, 10);
    let dwells = out
        .iter()
        .filter(|tr| matches!(tr, Transition::DwellStarted { .. }))
        .count();
    assert_eq!(dwells, 0);
    assert_eq!(out.last(), Some(&Transition::Completed));
    assert_eq!(s.index(), 0);
    assert!(s.is_complete());
}

#[test]
fn out_and_back_topologies_dwell_once_between_passes() {
    for topology in [Topology::Mesh, Topology::Star, Topology::Tree] {
        let c = clock(0.5);
        let l = layout(topology);
        let mut s = AnimationSession::new();
        let t0 = SimTime::from_secs(1);

        let out = tick_n(&c, &l, &mut s, t0, 2);
        let deadline = t0 + SimTime::from_secs(3);
        assert_eq!(
            out,
            vec![
                Transition::LegCompleted { index: 0 },
                Transition::Reversed,
                Transition::DwellStarted { deadline },
            ],
            "{topology}"
        );
        assert_eq!(s.direction(), Direction::Reverse);

        assert!(tick_n(&c, &l, &mut s, SimTime(deadline.0 - 1), 20).is_empty());
        assert_eq!(c.tick(&l, &mut s, deadline), vec![Transition::DwellEnded]);
        assert_eq!(s.phase(), Phase::Traveling);

        let out = tick_n(&c, &l, &mut s, deadline, 2);
        assert_eq!(
            out,
            vec![Transition::LegCompleted { index: 0 }, Transition::Completed],
            "{topology}"
        );
        assert!(!s.is_active());
    }
}

#[test]
fn dwell_is_measured_by_clock_not_tick_count() {
    let c = clock(0.5);
    let l = layout(Topology::Mesh);
    let mut s = AnimationSession::new();
    tick_n(&c, &l, &mut s, SimTime::ZERO, 2);
    assert!(s.is_dwelling());

    // 一个 tick 就跨过 3 秒：驻留立刻结束
    assert_eq!(
        c.tick(&l, &mut s, SimTime::from_secs(10)),
        vec![Transition::DwellEnded]
    );
}

#[test]
fn zero_length_dwell_ends_on_the_tick_that_started_it() {
    let c = AnimationClock {
        speed: 1.0,
        ring_dwell: SimTime::ZERO,
        lap_dwell: SimTime::ZERO,
    };
    let l = layout(Topology::Star);
    let mut s = AnimationSession::new();
    let out = c.tick(&l, &mut s, SimTime::ZERO);
    assert_eq!(out.last(), Some(&Transition::DwellEnded));
    assert_eq!(s.phase(), Phase::Traveling);
}

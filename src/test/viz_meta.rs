use crate::anim::{meta_of, AnimWorld, PressStart, SelectTopology, Transition};
use crate::config::{AnimConfig, GeometryParams, TimingParams};
use crate::sim::{SimTime, Simulator};
use crate::topo::{NodeRole, Topology};
use crate::viz::{VizEventKind, VizLogger};

#[test]
fn meta_describes_layout_nodes_and_edges() {
    let params = GeometryParams::default();

    let star = Topology::Star.layout(&params);
    let VizEventKind::Meta {
        topology,
        nodes,
        edges,
        hub,
        cable,
    } = meta_of(&star)
    else {
        panic!("meta_of must build a meta event");
    };
    assert_eq!(topology, Topology::Star);
    assert_eq!(nodes.len(), 7);
    assert_eq!(edges.len(), 6);
    assert_eq!(hub, Some(6));
    assert!(cable.is_none());
    assert_eq!(nodes[6].role, NodeRole::Hub);
    assert_eq!(nodes[0].role, NodeRole::Client);
    assert_eq!(nodes[5].role, NodeRole::Server);
    assert!(nodes.iter().enumerate().all(|(i, n)| n.id == i));

    let bus = Topology::Bus.layout(&params);
    let VizEventKind::Meta { cable, hub, .. } = meta_of(&bus) else {
        panic!("meta_of must build a meta event");
    };
    assert!(cable.is_some());
    assert!(hub.is_none());
}

fn recorded_run(topology: Topology, frame_stride: u64) -> AnimWorld {
    let mut sim = Simulator::default();
    let mut world = AnimWorld::new(AnimConfig {
        timing: TimingParams {
            speed: 0.5,
            ..TimingParams::default()
        },
        ..AnimConfig::default()
    });
    world.viz = Some(VizLogger::with_frame_stride(frame_stride));
    sim.schedule(SimTime::ZERO, PressStart);
    sim.schedule(SimTime::ZERO, SelectTopology { topology });
    sim.run(&mut world);
    world
}

#[test]
fn recording_starts_with_start_select_meta() {
    let world = recorded_run(Topology::Mesh, 1);
    let viz = world.viz.as_ref().unwrap();
    let kinds = viz.events.iter().map(|e| &e.kind).collect::<Vec<_>>();

    assert!(matches!(kinds[0], VizEventKind::Start));
    assert!(matches!(kinds[1], VizEventKind::Select { topology: Topology::Mesh }));
    assert!(matches!(kinds[2], VizEventKind::Meta { .. }));
    assert!(matches!(kinds[3], VizEventKind::Frame(_)));

    let frames = kinds
        .iter()
        .filter(|k| matches!(k, VizEventKind::Frame(_)))
        .count() as u64;
    assert_eq!(frames, world.stats.ticks);

    // 时间戳单调不减
    assert!(viz.events.windows(2).all(|w| w[0].t_ns <= w[1].t_ns));
}

#[test]
fn transitions_are_recorded_before_the_frame_of_the_same_tick() {
    let world = recorded_run(Topology::Bus, 1);
    let viz = world.viz.as_ref().unwrap();
    let last_two = &viz.events[viz.events.len() - 2..];
    assert!(matches!(
        last_two[0].kind,
        VizEventKind::Transition(Transition::Completed)
    ));
    match &last_two[1].kind {
        VizEventKind::Frame(f) => assert!(f.packet.is_none()),
        other => panic!("expected final frame, got {other:?}"),
    }
    assert_eq!(last_two[0].t_ns, last_two[1].t_ns);
}

#[test]
fn frame_stride_samples_frames_but_keeps_transitions() {
    let every = recorded_run(Topology::Ring, 1);
    let sampled = recorded_run(Topology::Ring, 10);

    let count = |w: &AnimWorld, pick: fn(&VizEventKind) -> bool| {
        w.viz.as_ref().unwrap().events.iter().filter(|e| pick(&e.kind)).count()
    };
    let is_frame: fn(&VizEventKind) -> bool = |k| matches!(k, VizEventKind::Frame(_));
    let is_transition: fn(&VizEventKind) -> bool = |k| matches!(k, VizEventKind::Transition(_));

    assert_eq!(count(&every, is_frame), 145);
    assert_eq!(count(&sampled, is_frame), 15);
    assert_eq!(count(&every, is_transition), count(&sampled, is_transition));
}

#[test]
fn json_uses_kind_tags_and_snake_case() {
    let world = recorded_run(Topology::Star, 5);
    let json = world.viz.as_ref().unwrap().to_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    let events = v.as_array().expect("top-level array");

    assert_eq!(events[0]["kind"], "start");
    assert_eq!(events[1]["kind"], "select");
    assert_eq!(events[1]["topology"], "star");
    assert_eq!(events[2]["kind"], "meta");
    assert_eq!(events[2]["hub"], 6);
    assert_eq!(events[2]["nodes"].as_array().unwrap().len(), 7);
    assert!(events[2].get("cable").is_none());

    let dwell = events
        .iter()
        .find(|e| e["transition"] == "dwell_started")
        .expect("star dwells once");
    assert_eq!(dwell["kind"], "transition");
    assert!(dwell["deadline"].is_u64());

    let frame = events.iter().find(|e| e["kind"] == "frame").unwrap();
    assert!(frame["t"].is_f64());
    assert_eq!(frame["direction"], "forward");
    assert!(frame["packet"]["x"].is_f64());
}

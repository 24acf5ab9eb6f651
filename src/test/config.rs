use crate::config::{AnimConfig, ConfigError, MAX_MESH_EDGES, MAX_NODES};
use crate::sim::SimTime;
use crate::topo::circle::mesh_edge_count;

#[test]
fn defaults_are_valid_and_match_the_classroom_demo() {
    let cfg = AnimConfig::default();
    cfg.validate().expect("defaults validate");
    assert_eq!(cfg.geometry.node_count, 6);
    assert_eq!(cfg.geometry.radius, 0.7);
    assert_eq!(cfg.timing.speed, 0.01);
    assert_eq!(cfg.timing.tick_period(), SimTime::from_millis(16));
    assert_eq!(cfg.timing.ring_dwell(), SimTime::from_secs(2));
    assert_eq!(cfg.timing.lap_dwell(), SimTime::from_secs(3));
    assert_eq!(cfg.title.lines.len(), 2);
}

#[test]
fn partial_json_fills_remaining_fields_with_defaults() {
    let cfg = AnimConfig::from_json(r#"{"timing":{"speed":0.5},"geometry":{"branching":3}}"#)
        .expect("valid partial config");
    assert_eq!(cfg.timing.speed, 0.5);
    assert_eq!(cfg.timing.tick_ms, 16);
    assert_eq!(cfg.geometry.branching, 3);
    assert_eq!(cfg.geometry.tree_depth, 3);
    assert_eq!(cfg.title, AnimConfig::default().title);

    assert_eq!(AnimConfig::from_json("{}").unwrap(), AnimConfig::default());
}

#[test]
fn invalid_values_are_rejected() {
    for raw in [
        r#"{"geometry":{"node_count":1}}"#,
        r#"{"geometry":{"bus_nodes":0}}"#,
        r#"{"geometry":{"tree_depth":1}}"#,
        r#"{"geometry":{"branching":1}}"#,
        r#"{"geometry":{"tree_depth":13,"branching":2}}"#,
        r#"{"timing":{"speed":0.0}}"#,
        r#"{"timing":{"speed":1.5}}"#,
        r#"{"timing":{"tick_ms":0}}"#,
    ] {
        match AnimConfig::from_json(raw) {
            Err(ConfigError::Invalid(msg)) => assert!(!msg.is_empty(), "{raw}"),
            other => panic!("{raw}: expected Invalid, got {other:?}"),
        }
    }
}

#[test]
fn oversized_layouts_are_rejected_before_any_geometry_is_built() {
    for raw in [
        r#"{"geometry":{"node_count":5000000000}}"#,
        r#"{"geometry":{"node_count":4097}}"#,
        r#"{"geometry":{"node_count":500}}"#,
        r#"{"geometry":{"bus_nodes":5000000000}}"#,
    ] {
        let err = AnimConfig::from_json(raw).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{raw}: {err}");
    }

    // 447 个节点的 mesh 有 99 681 条边，仍在上限内
    let cfg = AnimConfig::from_json(r#"{"geometry":{"node_count":447}}"#).expect("within caps");
    assert_eq!(mesh_edge_count(cfg.geometry.node_count), Some(99_681));
    assert!(MAX_NODES >= cfg.geometry.node_count);
    assert!(AnimConfig::from_json(r#"{"geometry":{"node_count":448}}"#).is_err());
    assert_eq!(mesh_edge_count(usize::MAX), None);
    assert!(MAX_MESH_EDGES < mesh_edge_count(448).unwrap());
}

#[test]
fn speed_of_exactly_one_is_allowed() {
    AnimConfig::from_json(r#"{"timing":{"speed":1.0}}"#).expect("speed 1 is in range");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = AnimConfig::from_json(r#"{"timing": "#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse config"));

    let err = AnimConfig::from_json(r#"{"timing":{"speed":"fast"}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join(format!(
        "topo_anim_missing_{}_{}.json",
        std::process::id(),
        line!()
    ));
    let err = AnimConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert!(err.to_string().starts_with("failed to read config"));
}

#[test]
fn config_file_round_trips_through_disk() {
    let path = std::env::temp_dir().join(format!("topo_anim_cfg_{}.json", std::process::id()));
    let mut cfg = AnimConfig::default();
    cfg.geometry.node_count = 8;
    cfg.timing.lap_dwell_ms = 500;
    std::fs::write(&path, serde_json::to_string(&cfg).unwrap()).unwrap();

    let loaded = AnimConfig::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, cfg);
}

mod common;

use roadroute_lib::{load_road_map, DatasetPaths, Error, InterestCategory, LoaderConfig};
use tempfile::tempdir;

use common::{write_dataset, EDGES, NODES, POINTS};

#[test]
fn loads_fixture_dataset() {
    let dir = tempdir().expect("temp dir");
    write_dataset(dir.path(), NODES, EDGES, POINTS);

    let map = load_road_map(&DatasetPaths::in_dir(dir.path()), &LoaderConfig::default())
        .expect("fixture loads");

    assert_eq!(map.graph.node_count(), 5);
    assert_eq!(map.graph.edge_count(), 7);
    assert_eq!(map.landmarks.len(), 4);

    let trondheim = map.landmarks.node_for_name("Trondheim").expect("known name");
    assert_eq!(trondheim, 3);
    assert_eq!(map.graph.node(trondheim).unwrap().latitude, 63.4305);

    let at_trondheim = map.landmarks.points_at(3);
    assert_eq!(at_trondheim.len(), 2);
    let info = map.landmarks.info_for_node(3).expect("points at node 3");
    assert_eq!(info.name, "Trondheim torg kafe");
    assert!(info.category.contains(InterestCategory::EATING));
}

#[test]
fn interest_point_outside_graph_is_malformed() {
    let dir = tempdir().expect("temp dir");
    write_dataset(dir.path(), NODES, EDGES, "1\n42 1 \"Nowhere\"\n");

    let err = load_road_map(&DatasetPaths::in_dir(dir.path()), &LoaderConfig::default())
        .expect_err("dangling interest point");
    assert!(matches!(err, Error::MalformedInput { .. }));
    assert!(err.to_string().contains("Nowhere"));
}

#[test]
fn edge_outside_graph_is_malformed() {
    let dir = tempdir().expect("temp dir");
    write_dataset(dir.path(), NODES, "1\n0 9 100 10 50\n", POINTS);

    let err = load_road_map(&DatasetPaths::in_dir(dir.path()), &LoaderConfig::default())
        .expect_err("dangling edge");
    assert!(matches!(err, Error::MalformedInput { .. }));
}

#[test]
fn negative_cost_in_file_is_rejected() {
    let dir = tempdir().expect("temp dir");
    write_dataset(dir.path(), NODES, "1\n0 1 -100 10 50\n", POINTS);

    let err = load_road_map(&DatasetPaths::in_dir(dir.path()), &LoaderConfig::default())
        .expect_err("negative cost");
    assert!(matches!(err, Error::NegativeEdgeCost { cost: -100, .. }));
}

#[test]
fn inconsistent_counts_are_malformed() {
    let dir = tempdir().expect("temp dir");
    write_dataset(dir.path(), "3\n0 1.0 1.0\n1 2.0 2.0\n", EDGES, POINTS);

    let err = load_road_map(&DatasetPaths::in_dir(dir.path()), &LoaderConfig::default())
        .expect_err("short node table");
    assert!(err.to_string().contains("node table"));
}

#[test]
fn missing_file_is_reported_by_path() {
    let dir = tempdir().expect("temp dir");
    let paths = DatasetPaths::in_dir(dir.path());

    let err = load_road_map(&paths, &LoaderConfig::default()).expect_err("nothing on disk");
    assert!(matches!(err, Error::DatasetNotFound { ref path } if *path == paths.nodes));
}

#[test]
fn oversized_declared_count_is_malformed() {
    let dir = tempdir().expect("temp dir");
    write_dataset(dir.path(), NODES, "18446744073709551615\n0 1 1 1 1\n", POINTS);

    let err = load_road_map(&DatasetPaths::in_dir(dir.path()), &LoaderConfig::default())
        .expect_err("count cannot fit");
    assert!(matches!(
        err,
        Error::MalformedInput { ref source_name, .. } if source_name == "edge table"
    ));
}

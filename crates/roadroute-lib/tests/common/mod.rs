#![allow(dead_code)]

use roadroute_lib::{EdgeRecord, Graph, Node, NodeId};

/// Build a graph from `(from, to, cost)` triples over `node_count` nodes laid
/// out along a line of longitude.
pub fn graph_from(node_count: usize, edges: &[(NodeId, NodeId, i64)]) -> Graph {
    let nodes = (0..node_count)
        .map(|i| Node {
            latitude: 63.0 + i as f64 * 0.5,
            longitude: 10.0,
        })
        .collect();
    let records: Vec<EdgeRecord> = edges
        .iter()
        .map(|&(from, to, cost)| EdgeRecord {
            from,
            to,
            cost,
            length_m: 100,
            speed_limit_kmh: 50,
        })
        .collect();
    Graph::from_records(nodes, &records).expect("fixture graph builds")
}

/// The three-node graph used throughout: 0->1 (5), 1->2 (3), 0->2 (10).
pub fn triangle() -> Graph {
    graph_from(3, &[(0, 1, 5), (1, 2, 3), (0, 2, 10)])
}

/// Write the three road network tables into `dir` using the default names.
pub fn write_dataset(dir: &std::path::Path, nodes: &str, edges: &str, points: &str) {
    std::fs::write(dir.join("noder.txt"), nodes).expect("write nodes");
    std::fs::write(dir.join("kanter.txt"), edges).expect("write edges");
    std::fs::write(dir.join("interessepkt.txt"), points).expect("write points");
}

pub const NODES: &str = "5
0 63.3000 9.8500
1 63.3500 10.0000
2 63.4000 10.2000
3 63.4305 10.3951
4 63.4100 10.4500
";

pub const EDGES: &str = "7
0 1 30000 4000 80
1 2 25000 3500 80
2 3 20000 2800 60
0 3 90000 12000 90
3 4 5000 600 50
4 3 5000 600 50
1 0 30000 4000 80
";

pub const POINTS: &str = "4
0 1 \"Orkanger\"
3 1 \"Trondheim\"
3 8 \"Trondheim torg kafe\"
4 2 \"Circle K Lade\"
";

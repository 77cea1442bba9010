use crate::graph::{Graph, GraphBuilder};

/// Initialize logging for tests.
pub fn init() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Single edge 1-2 with unit weight: the smallest non-trivial graph.
pub fn pair_graph() -> Graph {
    GraphBuilder::from_rows(&[vec![1.0, 2.0, 1.0]]).unwrap()
}

/// Triangle 1-2-3-1 with default weights.
pub fn triangle_graph() -> Graph {
    GraphBuilder::from_rows(&[vec![1.0, 2.0], vec![2.0, 3.0], vec![3.0, 1.0]]).unwrap()
}

/// Two disjoint unit edges: 1-2 and 3-4.
pub fn disjoint_pairs_graph() -> Graph {
    GraphBuilder::from_rows(&[vec![1.0, 2.0, 1.0], vec![3.0, 4.0, 1.0]]).unwrap()
}

/// Edge 1-3 only, leaving vertex 2 isolated.
pub fn isolated_vertex_graph() -> Graph {
    GraphBuilder::from_rows(&[vec![1.0, 3.0, 1.0]]).unwrap()
}

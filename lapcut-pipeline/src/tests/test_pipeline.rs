use std::io::Write;

use approx::abs_diff_eq;
use lapcut_core::{ClusterData, Error};
use tempfile::NamedTempFile;

use crate::tests::init;
use crate::{run, run_rows, PipelineConfig};

fn config(k: usize) -> PipelineConfig {
    PipelineConfig::new("unused.dat", k)
}

#[test]
fn test_single_edge_single_cluster() {
    init();
    let rows = vec![vec![1.0, 2.0, 1.0]];
    let output = run_rows(&rows, &config(1)).unwrap();

    assert_eq!(output.nnodes, 2);
    assert_eq!(output.nedges, 1);
    assert_eq!(output.labels, vec![0, 0]);

    // Both endpoints share the only cluster, so the edge is stamped with 0.
    let edge = &output.edges[0];
    assert_eq!((edge.source, edge.target), (1, 2));
    assert_eq!(edge.cluster, Some(0));
    assert_eq!(edge.sort_value(), 0.0);

    // L = [[1, -1], [-1, 1]]: spectrum {0, 2}.
    assert!(abs_diff_eq!(output.laplacian_spectrum[0], 0.0, epsilon = 1e-9));
    assert!(abs_diff_eq!(output.laplacian_spectrum[1], 2.0, epsilon = 1e-9));

    assert_eq!(output.edge_matrix[0][1], 0.0);
    assert_eq!(output.edge_matrix[1][0], -1.0);
}

#[test]
fn test_triangle_collapses_into_one_cluster() {
    let rows = vec![vec![1.0, 2.0], vec![2.0, 3.0], vec![3.0, 1.0]];
    let output = run_rows(&rows, &config(1)).unwrap();

    assert_eq!(output.nnodes, 3);
    assert_eq!(output.labels, vec![0, 0, 0]);
    assert_eq!(output.edges.len(), 3);
    for edge in &output.edges {
        assert_eq!(edge.cluster, Some(0));
    }
    // Equal sort keys keep input order.
    let order: Vec<(usize, usize)> = output
        .edges
        .iter()
        .map(|e| (e.source, e.target))
        .collect();
    assert_eq!(order, vec![(1, 2), (2, 3), (3, 1)]);
}

#[test]
fn test_malformed_row_fails_before_graph_construction() {
    let rows = vec![vec![1.0]];
    let err = run_rows(&rows, &config(1)).unwrap_err();
    assert!(matches!(err, Error::EdgeFormat { row: 1, .. }));
}

#[test]
fn test_disjoint_pairs_with_two_clusters() {
    let rows = vec![vec![1.0, 2.0, 1.0], vec![3.0, 4.0, 1.0]];
    let output = run_rows(&rows, &config(2)).unwrap();

    assert_eq!(output.labels.len(), 4);
    let mut distinct = output.labels.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(distinct.len(), 2, "k=2 must produce two populated clusters");

    // Stamping is consistent with the labels, edge by edge.
    for edge in &output.edges {
        let source_label = output.labels[edge.source - 1];
        let target_label = output.labels[edge.target - 1];
        match edge.cluster {
            Some(id) => {
                assert_eq!(source_label, id);
                assert_eq!(target_label, id);
            }
            None => assert_ne!(source_label, target_label),
        }
    }

    // If both edges landed inside clusters, the two ids must differ.
    let stamps: Vec<usize> = output.edges.iter().filter_map(|e| e.cluster).collect();
    if stamps.len() == 2 {
        assert_ne!(stamps[0], stamps[1]);
    }
}

#[test]
fn test_cluster_count_above_vertex_count_fails() {
    let rows = vec![vec![1.0, 2.0], vec![2.0, 3.0], vec![3.0, 1.0]];
    let err = run_rows(&rows, &config(5)).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidClusterCount {
            requested: 5,
            n_vertices: 3
        }
    ));
}

#[test]
fn test_rerun_on_identical_input_is_identical() {
    // With k = 1 the labeling is forced, so two runs must agree bit for bit.
    let rows = vec![vec![1.0, 2.0], vec![2.0, 3.0], vec![3.0, 1.0]];
    let first = run_rows(&rows, &config(1)).unwrap();
    let second = run_rows(&rows, &config(1)).unwrap();

    assert_eq!(first.labels, second.labels);
    assert_eq!(first.edges, second.edges);
    assert_eq!(first.laplacian_spectrum, second.laplacian_spectrum);
    assert_eq!(first.selected_eigenvalues, second.selected_eigenvalues);
    assert_eq!(first.embedding, second.embedding);
}

#[test]
fn test_selected_eigenvalues_are_descending() {
    let rows = vec![vec![1.0, 2.0], vec![2.0, 3.0], vec![3.0, 1.0]];
    let output = run_rows(&rows, &config(2)).unwrap();

    assert_eq!(output.selected_eigenvalues.len(), 2);
    assert!(output.selected_eigenvalues[0] >= output.selected_eigenvalues[1]);
    // K3's normalized spectrum is {0, 3/2, 3/2}: the top two are the pair.
    assert!(abs_diff_eq!(output.selected_eigenvalues[0], 1.5, epsilon = 1e-9));
    assert!(abs_diff_eq!(output.selected_eigenvalues[1], 1.5, epsilon = 1e-9));
}

#[test]
fn test_embedding_as_cluster_data() {
    let rows = vec![vec![1.0, 2.0], vec![2.0, 3.0], vec![3.0, 1.0]];
    let cfg = config(1).with_cluster_data(ClusterData::Embedding);
    let output = run_rows(&rows, &cfg).unwrap();

    assert_eq!(output.labels, vec![0, 0, 0]);
}

#[test]
fn test_run_reads_file_end_to_end() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"1,2,1\n").unwrap();
    file.flush().unwrap();

    let cfg = PipelineConfig::new(file.path(), 1);
    let output = run(&cfg).unwrap();

    assert_eq!(output.nnodes, 2);
    assert_eq!(output.edges[0].cluster, Some(0));
}

#[test]
fn test_run_surfaces_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"1,2,1\n7\n").unwrap();
    file.flush().unwrap();

    let cfg = PipelineConfig::new(file.path(), 1);
    let err = run(&cfg).unwrap_err();
    assert!(matches!(err, Error::EdgeFormat { row: 2, .. }));
}

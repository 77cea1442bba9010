//! `lapcut`: spectral clustering of an edge-list graph.
//!
//! ```text
//! lapcut <edge-file> <n-clusters> [delimiter]
//! ```
//!
//! Exit codes: 0 on success, 2 for malformed edge input, 1 for anything
//! else. Set `RUST_LOG` for per-stage diagnostics.

use std::process::ExitCode;

use lapcut_core::Error;
use lapcut_pipeline::{render_output, run, PipelineConfig};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: lapcut <edge-file> <n-clusters> [delimiter]");
        return ExitCode::from(1);
    }

    let n_clusters: usize = match args[2].parse() {
        Ok(k) => k,
        Err(_) => {
            eprintln!("n-clusters must be a non-negative integer, got {:?}", args[2]);
            return ExitCode::from(1);
        }
    };

    let mut config = PipelineConfig::new(&args[1], n_clusters);
    if let Some(delimiter) = args.get(3) {
        match delimiter.as_bytes() {
            [byte] => config = config.with_delimiter(*byte),
            _ => {
                eprintln!("delimiter must be a single byte, got {delimiter:?}");
                return ExitCode::from(1);
            }
        }
    }

    match run(&config) {
        Ok(output) => {
            println!(
                "{} vertices, {} edges, {} clusters requested",
                output.nnodes, output.nedges, n_clusters
            );
            println!("labels: {:?}", output.labels);
            for edge in &output.edges {
                println!(
                    "{} {} {}",
                    edge.source,
                    edge.target,
                    edge.sort_value()
                );
            }
            print!("{}", render_output(&output));
            ExitCode::SUCCESS
        }
        Err(error @ Error::EdgeFormat { .. }) => {
            eprintln!("wrong data format: {error}");
            ExitCode::from(2)
        }
        Err(error) => {
            eprintln!("lapcut failed: {error}");
            ExitCode::from(1)
        }
    }
}

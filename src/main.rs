//! Streamwatch notebook generator - demo entry point
//!
//! Builds a small watcher session (two tracked events, one customized
//! stream and one auto-named stream) and writes the notebook that
//! reconstructs its visualizations.
//!
//! Usage:
//! ```bash
//! cargo run [output.ipynb]
//! ```

use anyhow::Result;
use indexmap::IndexMap;
use std::path::Path;
use streamwatch::config::VisArgs;
use streamwatch::notebook::NotebookMaker;
use streamwatch::watch::{StreamCatalog, StreamInfo, StreamRequest, WatcherInfo};
use uuid::Uuid;

fn main() -> Result<()> {
    println!("streamwatch notebook generator v{}", env!("CARGO_PKG_VERSION"));

    // Optional explicit output path from the command line
    let output = std::env::args().nth(1);

    // A session as the watcher would describe it: default port, recording
    // to a log file
    let watcher = WatcherInfo {
        port: 0,
        filename: Some("demo_session.log".to_string()),
    };

    let catalog = demo_catalog();
    let total: usize = catalog.values().map(|streams| streams.len()).sum();
    println!("Registering {} streams...", total);

    let mut maker = NotebookMaker::new(&watcher, output.as_deref().map(Path::new));
    maker.add_streams(&catalog);
    maker.write()?;

    println!("{} cells written", maker.cell_count());
    Ok(())
}

/// A representative stream catalog: per-epoch loss with a line chart, an
/// anonymous auto-named stream, and a per-batch histogram with history
fn demo_catalog() -> StreamCatalog {
    let mut epoch_streams = IndexMap::new();
    epoch_streams.insert(
        "loss".to_string(),
        StreamInfo {
            req: StreamRequest {
                vis_args: Some(VisArgs {
                    vis_type: Some("line".to_string()),
                    ..VisArgs::default()
                }),
            },
        },
    );
    epoch_streams.insert(Uuid::new_v4().to_string(), StreamInfo::default());

    let mut batch_streams = IndexMap::new();
    batch_streams.insert(
        "grad_norms".to_string(),
        StreamInfo {
            req: StreamRequest {
                vis_args: Some(VisArgs {
                    vis_type: Some("histogram".to_string()),
                    history_len: 10,
                    ..VisArgs::default()
                }),
            },
        },
    );

    let mut catalog = StreamCatalog::new();
    catalog.insert("epoch".to_string(), epoch_streams);
    catalog.insert("batch".to_string(), batch_streams);
    catalog
}

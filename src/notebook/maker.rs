//! Notebook maker
//!
//! Builds a re-executable notebook from a watcher session: one bootstrap
//! cell that reconnects a client, then one cell per registered stream that
//! reopens the stream by name and shows a visualizer configured with only
//! the parameters that differ from the defaults.

use super::error::Result;
use super::nbformat::{self, CodeCell};
use crate::config::{ScalarValue, VisArgs};
use crate::utils;
use crate::watch::{StreamCatalog, StreamInfo, WatcherInfo};
use std::fs;
use std::path::{Path, PathBuf};

/// Fallback output name when neither an explicit filename nor a watcher
/// source filename is available
const DEFAULT_NOTEBOOK_NAME: &str = "streamwatch.ipynb";

/// Alias the generated cells import the client library under
const LIB_ALIAS: &str = "sw";

/// Max chars of sanitized stream name carried into a derived identifier
const IDENT_NAME_LEN: usize = 8;

/// Generates a notebook document for a watcher session
///
/// Lifecycle: seeded with the bootstrap cell at construction, grows through
/// `add_streams`, and is flushed once with `write`.
pub struct NotebookMaker {
    /// Resolved output path
    filename: PathBuf,

    /// Accumulated cells, bootstrap cell first
    cells: Vec<CodeCell>,

    /// Suppression baseline for per-stream parameter diffing
    default_vis_args: VisArgs,
}

impl NotebookMaker {
    /// Create a maker bound to a watcher session
    ///
    /// The output filename is the explicit one if given, else the watcher's
    /// source filename with its extension swapped for `.ipynb`, else
    /// `streamwatch.ipynb`. The bootstrap cell enables interactive plotting,
    /// imports the client library, and reconstructs the client with any
    /// non-default session options.
    pub fn new(watcher: &WatcherInfo, filename: Option<&Path>) -> Self {
        let filename = match filename {
            Some(explicit) => explicit.to_path_buf(),
            None => watcher
                .filename
                .as_ref()
                .map(|src| Path::new(src).with_extension("ipynb"))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTEBOOK_NAME)),
        };

        let bootstrap = [
            "%matplotlib notebook".to_string(),
            format!("import streamwatch as {LIB_ALIAS}"),
            format!("client = {LIB_ALIAS}.WatcherClient({})", watcher_args(watcher)),
        ];

        NotebookMaker {
            filename,
            cells: vec![nbformat::new_code_cell(bootstrap.join("\n"))],
            default_vis_args: VisArgs::default(),
        }
    }

    /// Resolved path the notebook will be written to
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Number of accumulated cells, bootstrap cell included
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Append one visualization cell per stream in the catalog
    ///
    /// Event groups are visited in catalog order and streams within a group
    /// in group order; a single running index numbers every stream across
    /// the whole catalog.
    pub fn add_streams(&mut self, catalog: &StreamCatalog) {
        let mut stream_index = 0usize;
        for (event_name, streams) in catalog {
            for (stream_name, info) in streams {
                let label = stream_identifier(event_name, stream_name, stream_index);
                eprintln!("  cell {}: stream '{}' [{}]", stream_index, stream_name, label);
                let lines = self.stream_code(stream_name, stream_index, info);
                self.cells.push(nbformat::new_code_cell(lines.join("\n")));
                stream_index += 1;
            }
        }
    }

    /// The three generated lines for one stream cell
    fn stream_code(&self, stream_name: &str, stream_index: usize, info: &StreamInfo) -> Vec<String> {
        let stream_var = format!("s{stream_index}");
        let vis_var = format!("v{stream_index}");

        let mut vis_params = vec![format!("stream={stream_var}")];
        if let Some(args) = &info.req.vis_args {
            push_changed_params(args, &self.default_vis_args, &mut vis_params);
        }

        vec![
            format!(
                "{stream_var} = client.open_stream(name={})",
                ScalarValue::from(stream_name).to_literal()
            ),
            format!("{vis_var} = {LIB_ALIAS}.Visualizer({})", vis_params.join(", ")),
            format!("{vis_var}.show()"),
        ]
    }

    /// Write the accumulated document to the resolved path
    ///
    /// Overwrites any previous file at that path. Terminal: the maker is not
    /// meant to be reused after a flush.
    pub fn write(&self) -> Result<()> {
        let notebook = nbformat::new_notebook(self.cells.clone(), "python");
        nbformat::write_notebook(&notebook, &self.filename)?;

        let resolved = fs::canonicalize(&self.filename).unwrap_or_else(|_| self.filename.clone());
        println!("✓ Notebook created: {}", resolved.display());
        Ok(())
    }
}

/// Derive a short human-readable identifier for a stream
///
/// Priority: a non-opaque stream name contributes its first sanitized
/// characters; otherwise a non-empty event name is used; otherwise the index
/// stands alone. Generated code always opens the stream by its true name, so
/// the derived identifier only labels diagnostics.
pub fn stream_identifier(event_name: &str, stream_name: &str, stream_index: usize) -> String {
    if !stream_name.is_empty() && !utils::is_generated_name(stream_name) {
        let short: String = utils::sanitize_identifier(stream_name)
            .chars()
            .take(IDENT_NAME_LEN)
            .collect();
        format!("s{stream_index}_{short}")
    } else if !event_name.is_empty() {
        format!("s_{event_name}_{stream_index}")
    } else {
        format!("s{stream_index}")
    }
}

/// Render the non-default session options for the client-construction call
fn watcher_args(watcher: &WatcherInfo) -> String {
    let actual = [
        ("port", ScalarValue::Int(i64::from(watcher.port))),
        ("filename", watcher.filename.clone().into()),
    ];
    let baseline = [
        ("port", ScalarValue::Int(0)),
        ("filename", ScalarValue::Absent),
    ];

    let mut params = Vec::new();
    for ((name, value), (_, default)) in actual.iter().zip(baseline.iter()) {
        if value != default {
            params.push(format!("{}={}", name, value.to_literal()));
        }
    }
    params.join(", ")
}

/// Append `name=value` pairs for every parameter that differs from the
/// baseline; parameters equal to the baseline (absent included) stay out of
/// generated code
fn push_changed_params(args: &VisArgs, baseline: &VisArgs, out: &mut Vec<String>) {
    for ((name, value), (_, default)) in args.params().into_iter().zip(baseline.params()) {
        if value != default {
            out.push(format!("{}={}", name, value.to_literal()));
        }
    }
}

//! Jupyter notebook interchange schema (nbformat v4)
//!
//! Serde model of the subset of the on-disk JSON schema the generator
//! emits: code cells, the document envelope, and a file writer pinned to
//! the schema version below. Kept as an in-crate module so it can be
//! extracted into its own crate later.

use super::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Schema major version written to disk
pub const NBFORMAT: u32 = 4;

/// Schema minor version written to disk
pub const NBFORMAT_MINOR: u32 = 4;

/// One executable code cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeCell {
    /// Always "code" for generated cells
    pub cell_type: String,

    /// Null until the notebook runtime executes the cell
    pub execution_count: Option<u32>,

    /// Cell-level metadata (empty for generated cells)
    pub metadata: serde_json::Map<String, serde_json::Value>,

    /// Execution outputs (empty for generated cells)
    pub outputs: Vec<serde_json::Value>,

    /// Newline-joined source text
    pub source: String,
}

/// Create a fresh, unexecuted code cell
pub fn new_code_cell(source: impl Into<String>) -> CodeCell {
    CodeCell {
        cell_type: "code".to_string(),
        execution_count: None,
        metadata: serde_json::Map::new(),
        outputs: Vec::new(),
        source: source.into(),
    }
}

/// Document-level metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotebookMetadata {
    /// Language of the generated cells
    pub language: String,
}

/// A complete notebook document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<CodeCell>,
    pub metadata: NotebookMetadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

/// Assemble a document from cells at the current schema version
pub fn new_notebook(cells: Vec<CodeCell>, language: &str) -> Notebook {
    Notebook {
        cells,
        metadata: NotebookMetadata {
            language: language.to_string(),
        },
        nbformat: NBFORMAT,
        nbformat_minor: NBFORMAT_MINOR,
    }
}

/// Write a document as UTF-8 JSON, overwriting any existing file
///
/// The document is serialized fully before the destination is touched, so a
/// serialization failure cannot truncate an existing notebook.
pub fn write_notebook(notebook: &Notebook, path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(notebook)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code_cell_shape() {
        let cell = new_code_cell("x = 1");
        assert_eq!(cell.cell_type, "code");
        assert_eq!(cell.execution_count, None);
        assert!(cell.metadata.is_empty());
        assert!(cell.outputs.is_empty());
        assert_eq!(cell.source, "x = 1");
    }

    #[test]
    fn test_notebook_serializes_schema_version() {
        let nb = new_notebook(vec![new_code_cell("pass")], "python");
        let json: serde_json::Value = serde_json::to_value(&nb).unwrap();
        assert_eq!(json["nbformat"], 4);
        assert_eq!(json["nbformat_minor"], 4);
        assert_eq!(json["metadata"]["language"], "python");
        // execution_count must be present as null, not omitted
        assert!(json["cells"][0]["execution_count"].is_null());
    }

    #[test]
    fn test_notebook_round_trips() {
        let nb = new_notebook(vec![new_code_cell("a = 1\nb = 2")], "python");
        let json = serde_json::to_string(&nb).unwrap();
        let back: Notebook = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cells.len(), 1);
        assert_eq!(back.cells[0].source, "a = 1\nb = 2");
        assert_eq!(back.metadata.language, "python");
    }
}

//! Streamwatch notebook generation library
//!
//! Turns a live watcher session (named data streams plus per-stream
//! visualization preferences) into a re-executable Jupyter notebook.
//!
//! Module organization:
//! - `watch`: session descriptor and stream catalog consumed from the watcher
//! - `config`: scalar values and the closed visualization parameter set
//! - `notebook`: the generator and the on-disk interchange schema
//! - `utils`: identifier helpers

pub mod config;
pub mod notebook;
pub mod utils;
pub mod watch;

//! Watcher session surface consumed by the notebook generator
//!
//! The live watching subsystem (stream creation, event dispatch, network
//! client) lives outside this crate; the generator only sees the session
//! descriptor and the stream catalog captured here.

use crate::config::VisArgs;
use indexmap::IndexMap;

/// Session descriptor for a live watcher
#[derive(Debug, Clone, Default)]
pub struct WatcherInfo {
    /// Port offset the watcher listens on (0 = default port)
    pub port: u16,

    /// Source filename the watcher was recording to, if any
    pub filename: Option<String>,
}

/// Display request a stream was registered with
#[derive(Debug, Clone, Default)]
pub struct StreamRequest {
    /// Visualization parameters, present only if the user customized any
    pub vis_args: Option<VisArgs>,
}

/// Descriptor for one named stream
#[derive(Debug, Clone, Default)]
pub struct StreamInfo {
    /// The display request attached to this stream
    pub req: StreamRequest,
}

/// Event name -> stream name -> descriptor, in registration order
pub type StreamCatalog = IndexMap<String, IndexMap<String, StreamInfo>>;

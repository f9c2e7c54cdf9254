//! Error types for the visualization engine
//!
//! Every failure ends the current request. Nothing here is fatal to the host:
//! the host turns an error into a [`ErrorReport`] and keeps running.

use crate::graph::GraphError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, rendering or configuring a graph view
#[derive(Error, Debug)]
pub enum VizError {
    /// The graph document does not exist at the expected path
    #[error("Graph file not found: {}", .0.display())]
    GraphNotFound(PathBuf),

    /// The graph document exists but is not valid GraphML
    #[error("Failed to parse graph file {}: {reason}", .path.display())]
    GraphParse { path: PathBuf, reason: String },

    /// Scene assembly or serialization failed
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Invalid caller-supplied options
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Graph invariant violation
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// I/O error other than a missing file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type VizResult<T> = Result<T, VizError>;

/// A failure converted for display: a short message and the technical detail
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ErrorReport {
    /// What the user sees first
    pub message: String,
    /// Expandable diagnostic detail
    pub detail: String,
}

impl VizError {
    /// Whether the user can fix this by regenerating or uploading the graph
    pub fn is_missing_graph(&self) -> bool {
        matches!(self, VizError::GraphNotFound(_))
    }

    /// Convert the error into a user-facing message plus technical detail
    pub fn report(&self) -> ErrorReport {
        let message = match self {
            VizError::GraphNotFound(path) => format!(
                "No knowledge graph found at {}. Upload documents to generate one.",
                path.display()
            ),
            VizError::GraphParse { .. } => {
                "The knowledge graph file could not be read.".to_string()
            }
            VizError::Render(_) | VizError::Graph(_) | VizError::Serialization(_) => {
                "Rendering the knowledge graph failed.".to_string()
            }
            VizError::Config(_) => "The visualization settings are invalid.".to_string(),
            VizError::Io(_) => "The knowledge graph file could not be opened.".to_string(),
        };

        let mut detail = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            detail.push_str("\ncaused by: ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }

        ErrorReport { message, detail }
    }
}

//! Session helpers for interactive computational notebooks.
//!
//! Covers the bootstrap and teardown cells of a notebook run: register the
//! project root on the module search path, stamp and time the run, and push
//! markdown to the rich-display surface. Each helper is a stateless leaf;
//! the only value flowing between them is the timestamp returned by
//! [`start_execution_time`].

pub mod display;
pub mod error;
pub mod search_path;
pub mod timer;

// Re-export key types for convenience
pub use display::{disp_md, MarkdownRenderer, WriterRenderer};
pub use error::NotebookError;
pub use search_path::{add_parent_dir_to_path, add_parent_dir_to_path_with, SearchPath};
pub use timer::{
    execution_time, execution_time_with, start_execution_time, start_execution_time_with, Clock,
    SystemClock, Timestamp,
};

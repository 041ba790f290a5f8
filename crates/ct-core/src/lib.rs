//! Core generators for Comedy Tools.
//!
//! Provides the static word tables, a uniform random selector, the four
//! generator handlers (scene, name, prompt, word), and the per-tool board
//! that holds the most recent result of each tool.

pub mod board;
pub mod config;
pub mod error;
pub mod generator;
pub mod marker;
pub mod select;
pub mod tables;
pub mod tool;

pub use board::{ToolBoard, ToolSlot};
pub use config::ToolsConfig;
pub use error::{CoreError, CoreResult};
pub use generator::{ToolTables, generate};
pub use marker::{Anchor, Marker};
pub use tables::WordList;
pub use tool::{NameResult, PromptResult, SceneResult, ToolId, ToolResult, WordResult};

/// Page heading shown above the tool cards.
pub const PAGE_TITLE: &str = "Comedy Tools";

/// Subtitle shown under the page heading.
pub const PAGE_SUBTITLE: &str =
    "Interactive generators to spark creativity for your improv and sketch writing.";

//! Terminal UI for Comedy Tools.
//!
//! Renders the four generator cards in a 2x2 grid with ratatui. Each card
//! has a trigger button and shows its latest result with a short entrance
//! animation.

pub mod animation;
pub mod app;
pub mod layout;
pub mod shared;
pub mod terminal;
pub mod widget;

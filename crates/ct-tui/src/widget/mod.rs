//! Widget toolkit for the tool cards.
//!
//! Provides the reusable pieces each card is built from: a titled card
//! container, a trigger button, the hidden marker, and the result region.

pub mod button;
pub mod card;
pub mod marker;
pub mod result;

pub use button::{Button, ButtonState};
pub use card::Card;
pub use marker::MarkerWidget;
pub use result::result_lines;

//! Hidden marker descriptor.
//!
//! A marker is a small decorative element hidden on a card for an
//! out-of-band collectible hunt. The core only describes where it sits;
//! what finding it means is up to whoever renders it.

use serde::{Deserialize, Serialize};

/// Corner a marker is pinned to, with an inset from both edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    /// Top-left corner.
    TopLeft {
        /// Cells (or pixels) from the top and left edges.
        inset: u16,
    },
    /// Top-right corner.
    TopRight {
        /// Cells (or pixels) from the top and right edges.
        inset: u16,
    },
    /// Bottom-left corner.
    BottomLeft {
        /// Cells (or pixels) from the bottom and left edges.
        inset: u16,
    },
    /// Bottom-right corner.
    BottomRight {
        /// Cells (or pixels) from the bottom and right edges.
        inset: u16,
    },
}

impl Anchor {
    /// Offset of a `mark_w` x `mark_h` box inside a `width` x `height`
    /// container, clamped so the box stays inside.
    pub fn offset(self, width: u16, height: u16, mark_w: u16, mark_h: u16) -> (u16, u16) {
        let max_x = width.saturating_sub(mark_w);
        let max_y = height.saturating_sub(mark_h);
        let (x, y) = match self {
            Self::TopLeft { inset } => (inset, inset),
            Self::TopRight { inset } => (max_x.saturating_sub(inset), inset),
            Self::BottomLeft { inset } => (inset, max_y.saturating_sub(inset)),
            Self::BottomRight { inset } => {
                (max_x.saturating_sub(inset), max_y.saturating_sub(inset))
            }
        };
        (x.min(max_x), y.min(max_y))
    }
}

/// An opaque hidden marker: identifier, size, and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Identifier within the collectible set.
    pub id: u32,
    /// Nominal size in pixels.
    pub size: u16,
    /// Where the marker is pinned on its card.
    pub anchor: Anchor,
}

/// Marker #8, tucked behind the scene generator card.
pub const SCENE_MARKER: Marker = Marker {
    id: 8,
    size: 14,
    anchor: Anchor::TopRight { inset: 2 },
};

//! Tick-based entrance animations for result regions.
//!
//! A terminal cannot fade or scale, so each entrance is approximated with a
//! colour ramp plus a row/column offset or a centre-out text reveal.

use ct_core::ToolId;

/// Ticks an entrance takes to settle.
pub const ENTRANCE_TICKS: u64 = 6;

/// Ticks the page header takes to fade in.
pub const HEADER_TICKS: u64 = 3;

/// How a tool's result enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceKind {
    /// Fade in while sliding up one row.
    SlideUp,
    /// Fade in while growing out from the centre.
    Grow,
    /// Fade in while sliding in from the left.
    SlideLeft,
    /// Fade in from a slight tilt (approximated by an indent).
    Tilt,
}

impl EntranceKind {
    /// The entrance used by each tool.
    pub fn for_tool(tool: ToolId) -> Self {
        match tool {
            ToolId::Scene => Self::SlideUp,
            ToolId::Name => Self::Grow,
            ToolId::Prompt => Self::SlideLeft,
            ToolId::Word => Self::Tilt,
        }
    }
}

/// Approximate opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Fade {
    /// Barely visible.
    Dim,
    /// Half way.
    Mid,
    /// Fully visible.
    Full,
}

impl Fade {
    /// Fade level for a progress in `0.0..=1.0`.
    pub fn at(progress: f32) -> Self {
        if progress < 0.34 {
            Self::Dim
        } else if progress < 0.67 {
            Self::Mid
        } else {
            Self::Full
        }
    }
}

/// Where and how visibly a result is drawn on a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Extra blank rows above the result.
    pub row_offset: u16,
    /// Extra blank columns left of the result.
    pub col_offset: u16,
    /// Fraction of the text shown, revealed from the centre out.
    pub reveal: f32,
    /// Approximate opacity.
    pub fade: Fade,
}

impl Pose {
    /// The final resting pose.
    pub fn settled() -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            reveal: 1.0,
            fade: Fade::Full,
        }
    }

    /// Whether this is the resting pose.
    pub fn is_settled(&self) -> bool {
        *self == Self::settled()
    }
}

/// A running entrance, started on a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    /// Which animation.
    pub kind: EntranceKind,
    /// Tick the animation started on.
    pub started_at: u64,
}

impl Entrance {
    /// Start an entrance on tick `now`.
    pub fn new(kind: EntranceKind, now: u64) -> Self {
        Self {
            kind,
            started_at: now,
        }
    }

    /// Progress in `0.0..=1.0` on tick `now`.
    pub fn progress(&self, now: u64) -> f32 {
        let elapsed = now.saturating_sub(self.started_at).min(ENTRANCE_TICKS);
        elapsed as f32 / ENTRANCE_TICKS as f32
    }

    /// Pose on tick `now`.
    pub fn pose(&self, now: u64) -> Pose {
        let p = self.progress(now);
        if p >= 1.0 {
            return Pose::settled();
        }
        let remaining = 1.0 - p;
        let fade = Fade::at(p);
        match self.kind {
            EntranceKind::SlideUp => Pose {
                row_offset: u16::from(p < 0.5),
                col_offset: 0,
                reveal: 1.0,
                fade,
            },
            EntranceKind::Grow => Pose {
                row_offset: 0,
                col_offset: 0,
                reveal: 0.5 + 0.5 * p,
                fade,
            },
            EntranceKind::SlideLeft => Pose {
                row_offset: 0,
                col_offset: (remaining * 4.0).round() as u16,
                reveal: 1.0,
                fade,
            },
            EntranceKind::Tilt => Pose {
                row_offset: 0,
                col_offset: (remaining * 2.0).round() as u16,
                reveal: 1.0,
                fade,
            },
        }
    }
}

/// Show the middle `fraction` of `text`, blanking the rest so the visible
/// part stays centred.
pub fn reveal_centre(text: &str, fraction: f32) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let shown = ((len as f32) * fraction.clamp(0.0, 1.0)).ceil() as usize;
    if shown >= len {
        return text.to_string();
    }
    let start = (len - shown) / 2;
    chars
        .iter()
        .enumerate()
        .map(|(i, c)| if i >= start && i < start + shown { *c } else { ' ' })
        .collect()
}

/// Whether the card at `index` has appeared by tick `now`.
pub fn card_visible(index: usize, now: u64, stagger_ticks: u32) -> bool {
    now >= index as u64 * u64::from(stagger_ticks)
}

/// Fade level of the page header on tick `now`.
pub fn header_fade(now: u64) -> Fade {
    Fade::at(now.min(HEADER_TICKS) as f32 / HEADER_TICKS as f32)
}

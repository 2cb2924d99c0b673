// SPDX-License-Identifier: MPL-2.0
//! Design tokens and label style helpers for the title strip.
//!
//! Tokens are a small, self-contained set so the widget looks reasonable
//! out of the box; hosts that render their own title elements ignore this
//! module entirely.

use iced::widget::text;
use iced::{Color, Theme};

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    /// Label color of the active page title.
    pub const ACTIVE: Color = Color::from_rgb(0.12, 0.46, 0.95);
    /// Label color of a title revealed past the threshold.
    pub const REVEALED: Color = Color::from_rgb(0.35, 0.35, 0.38);
    /// Label color of resting titles.
    pub const RESTING: Color = Color::from_rgb(0.55, 0.55, 0.58);
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Fallback cross-axis extent of the strip when no title declares one.
    pub const STRIP_CROSS_EXTENT: f32 = 32.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Font size of title labels.
    pub const LABEL: f32 = 14.0;
}

/// Label color for a title given its current prominence.
///
/// The active title always wins over the revealed accent.
#[must_use]
pub fn title_color(active: bool, revealed: bool) -> Color {
    if active {
        palette::ACTIVE
    } else if revealed {
        palette::REVEALED
    } else {
        palette::RESTING
    }
}

/// Text style closure for a title label.
pub fn title_label(active: bool, revealed: bool) -> impl Fn(&Theme) -> text::Style {
    let color = title_color(active, revealed);
    move |_theme: &Theme| text::Style { color: Some(color) }
}

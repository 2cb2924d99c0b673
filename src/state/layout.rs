// SPDX-License-Identifier: MPL-2.0
//! Title strip layout state
//!
//! Computes the spatial arrangement of page-title frames and answers the
//! geometric queries the indicator needs: hit testing, visible widths and
//! the strip's own scrollable extent.

use iced::{Point, Rectangle, Size};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TITLE_HEIGHT;

/// Axis along which page titles are arranged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Titles run left to right.
    #[default]
    Horizontal,
    /// Titles run top to bottom.
    Vertical,
}

impl Orientation {
    /// Extent of `size` along the layout axis.
    #[must_use]
    pub fn main(self, size: Size) -> f32 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Extent of `size` across the layout axis.
    #[must_use]
    pub fn cross(self, size: Size) -> f32 {
        match self {
            Orientation::Horizontal => size.height,
            Orientation::Vertical => size.width,
        }
    }

    /// Coordinate of `point` along the layout axis.
    #[must_use]
    pub fn main_of(self, point: Point) -> f32 {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }
}

/// One page label: its text and the size it should occupy in the strip.
///
/// The host owns rendering; the declared size drives all geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PageTitle {
    /// Label text shown for the page.
    pub text: String,
    /// Size of the label within the strip.
    pub size: Size,
}

impl PageTitle {
    /// Creates a page title with an explicit size.
    pub fn new(text: impl Into<String>, size: Size) -> Self {
        Self {
            text: text.into(),
            size,
        }
    }

    /// Creates a page title with an explicit width and the default height.
    pub fn with_width(text: impl Into<String>, width: f32) -> Self {
        Self::new(text, Size::new(width, DEFAULT_TITLE_HEIGHT))
    }
}

/// Computed frame of one title within the strip's content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleFrame {
    /// Position of the title in page order.
    pub index: usize,
    /// Frame in strip content coordinates (offset not applied).
    pub bounds: Rectangle,
}

impl TitleFrame {
    /// Start of the frame along the layout axis.
    #[must_use]
    pub fn start(&self, orientation: Orientation) -> f32 {
        orientation.main_of(self.bounds.position())
    }

    /// End of the frame along the layout axis.
    #[must_use]
    pub fn end(&self, orientation: Orientation) -> f32 {
        self.start(orientation) + orientation.main(self.bounds.size())
    }
}

/// Manages title frames and the strip's scrollable geometry.
#[derive(Debug, Clone)]
pub struct StripLayout {
    frames: Vec<TitleFrame>,
    spacing: f32,
    orientation: Orientation,
    viewport: Size,
}

impl StripLayout {
    /// Creates an empty layout with the given spacing and orientation.
    pub fn new(spacing: f32, orientation: Orientation) -> Self {
        Self {
            frames: Vec::new(),
            spacing: spacing.max(0.0),
            orientation,
            // Zero until the widget reports its bounds.
            viewport: Size::ZERO,
        }
    }

    /// Arranges the given titles along the main axis with no overlap,
    /// assigning each a stable index matching its position in the input.
    ///
    /// Replaces any previously held frames. An empty input clears the
    /// layout; subsequent offset queries become no-ops.
    pub fn layout_page_labels(&mut self, titles: &[PageTitle]) {
        self.frames.clear();
        self.frames.reserve(titles.len());

        let mut cursor = 0.0;
        for (index, title) in titles.iter().enumerate() {
            let bounds = match self.orientation {
                Orientation::Horizontal => Rectangle::new(
                    Point::new(cursor, 0.0),
                    title.size,
                ),
                Orientation::Vertical => Rectangle::new(
                    Point::new(0.0, cursor),
                    title.size,
                ),
            };
            self.frames.push(TitleFrame { index, bounds });
            cursor += self.orientation.main(title.size) + self.spacing;
        }
    }

    /// Records the strip's own visible size, reported by the widget.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// The strip's visible size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The layout axis.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Computed title frames, in index order.
    #[must_use]
    pub fn frames(&self) -> &[TitleFrame] {
        &self.frames
    }

    /// Number of laid-out titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the layout holds no titles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total length of the strip content along the main axis.
    #[must_use]
    pub fn content_extent(&self) -> f32 {
        self.frames
            .last()
            .map_or(0.0, |frame| frame.end(self.orientation))
    }

    /// Largest valid strip offset (content beyond the viewport).
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_extent() - self.orientation.main(self.viewport)).max(0.0)
    }

    /// Clamps a proposed strip offset to the valid range.
    #[must_use]
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        if offset.is_finite() {
            offset.clamp(0.0, self.max_offset())
        } else {
            0.0
        }
    }

    /// Resolves a point in widget-local coordinates to the title under it,
    /// accounting for the current strip offset.
    ///
    /// Points over spacing gaps or past the last title resolve to `None`.
    #[must_use]
    pub fn hit_test(&self, point: Point, strip_offset: f32) -> Option<usize> {
        let position = self.orientation.main_of(point) + strip_offset;

        self.frames
            .iter()
            .find(|frame| {
                position >= frame.start(self.orientation) && position < frame.end(self.orientation)
            })
            .map(|frame| frame.index)
    }

    /// Visible length of the title at `index` (in points) for the given
    /// strip offset, clipped to the strip viewport.
    #[must_use]
    pub fn visible_width(&self, index: usize, strip_offset: f32) -> Option<f32> {
        let frame = self.frames.get(index)?;
        let window_start = strip_offset;
        let window_end = strip_offset + self.orientation.main(self.viewport);

        let visible = frame.end(self.orientation).min(window_end)
            - frame.start(self.orientation).max(window_start);

        Some(visible.max(0.0))
    }
}

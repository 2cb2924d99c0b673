// SPDX-License-Identifier: MPL-2.0
//! Pan gesture state
//!
//! Tracks an in-flight drag over the title strip: where it started, the
//! strip and reference offsets at that moment, and the finger-tracking
//! offset computation. The stored origin lets an interrupted gesture
//! restore the pre-drag offsets instead of applying a partial one.

use iced::widget::scrollable::AbsoluteOffset;
use iced::Point;

use super::layout::Orientation;

/// Offsets captured when a drag begins, restored on cancellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOrigin {
    /// Strip offset at the moment the drag began.
    pub strip_offset: f32,
    /// Reference content offset at the moment the drag began.
    pub reference_offset: AbsoluteOffset,
}

/// Manages pan-drag state for the title strip.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag is currently active.
    pub is_dragging: bool,

    start_position: Option<Point>,
    origin: Option<DragOrigin>,
}

impl DragState {
    /// Starts a drag at `position`, capturing the offsets to restore on
    /// cancellation.
    pub fn start(&mut self, position: Point, strip_offset: f32, reference_offset: AbsoluteOffset) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.origin = Some(DragOrigin {
            strip_offset,
            reference_offset,
        });
    }

    /// Ends the drag and clears its bookkeeping.
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.origin = None;
    }

    /// The offsets captured when the drag began, while it is active.
    #[must_use]
    pub fn origin(&self) -> Option<DragOrigin> {
        if self.is_dragging {
            self.origin
        } else {
            None
        }
    }

    /// Strip offset that keeps the titles under the pointer, unclamped.
    ///
    /// The strip follows the finger: moving the pointer towards the start
    /// of the axis scrolls later titles into view.
    #[must_use]
    pub fn target_offset(&self, current: Point, orientation: Orientation) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }

        let start = self.start_position?;
        let origin = self.origin?;

        let delta = orientation.main_of(current) - orientation.main_of(start);

        Some(origin.strip_offset - delta)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Reference scroll synchronization
//!
//! Maps the reference scroll area's content offset onto the title strip's
//! own scrollable extent and back, and resolves which page is active.
//! All inputs are defensively clamped; degenerate extents never divide.

use iced::widget::scrollable::AbsoluteOffset;
use iced::Size;

use super::layout::{Orientation, StripLayout};

/// Latest state reported by the reference scroll area.
///
/// The indicator does not own the scroll area; this is a read-only mirror
/// of what the host forwards from its `on_scroll`.
#[derive(Debug, Clone)]
pub struct ReferenceSync {
    offset: AbsoluteOffset,
    content: Size,
    viewport: Size,
}

impl Default for ReferenceSync {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            content: Size::ZERO,
            viewport: Size::ZERO,
        }
    }
}

impl ReferenceSync {
    /// Records a content-offset change reported by the reference area.
    ///
    /// Non-finite offset components keep their previous value; finite ones
    /// are clamped to the reported scrollable range.
    pub fn reference_scrolled(&mut self, offset: AbsoluteOffset, content: Size, viewport: Size) {
        self.content = sanitize_size(content);
        self.viewport = sanitize_size(viewport);

        let max_x = (self.content.width - self.viewport.width).max(0.0);
        let max_y = (self.content.height - self.viewport.height).max(0.0);

        self.offset = AbsoluteOffset {
            x: sanitize(offset.x, self.offset.x).clamp(0.0, max_x),
            y: sanitize(offset.y, self.offset.y).clamp(0.0, max_y),
        };
    }

    /// Last known reference content offset.
    #[must_use]
    pub fn offset(&self) -> AbsoluteOffset {
        self.offset
    }

    /// Scrollable length of the reference content along the given axis.
    #[must_use]
    pub fn scroll_extent(&self, orientation: Orientation) -> f32 {
        (orientation.main(self.content) - orientation.main(self.viewport)).max(0.0)
    }

    /// Length of one page along the given axis (the reference viewport).
    #[must_use]
    pub fn page_length(&self, orientation: Orientation) -> f32 {
        orientation.main(self.viewport)
    }

    /// Proportional scroll position within the reference extent, in `[0, 1]`.
    /// Zero when the content does not scroll.
    #[must_use]
    pub fn progress(&self, orientation: Orientation) -> f32 {
        let extent = self.scroll_extent(orientation);
        if extent > 0.0 {
            (self.main_offset(orientation) / extent).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Maps the current reference position onto the strip's scrollable
    /// extent.
    ///
    /// `None` when the reference content does not scroll; the caller keeps
    /// its previous valid strip offset in that case.
    #[must_use]
    pub fn strip_offset_for(&self, layout: &StripLayout) -> Option<f32> {
        if self.scroll_extent(layout.orientation()) > 0.0 {
            Some(self.progress(layout.orientation()) * layout.max_offset())
        } else {
            None
        }
    }

    /// Reference offset at the given proportional position, preserving the
    /// cross-axis component. `None` when the content does not scroll.
    #[must_use]
    pub fn offset_at_progress(
        &self,
        orientation: Orientation,
        progress: f32,
    ) -> Option<AbsoluteOffset> {
        let extent = self.scroll_extent(orientation);
        if extent <= 0.0 || !progress.is_finite() {
            return None;
        }

        Some(self.with_main(orientation, progress.clamp(0.0, 1.0) * extent))
    }

    /// Reference offset that brings the page at `index` fully into view,
    /// clamped to the scrollable range. Degenerate page lengths leave the
    /// offset unchanged.
    #[must_use]
    pub fn page_offset(&self, orientation: Orientation, index: usize) -> AbsoluteOffset {
        let page = self.page_length(orientation);
        if page <= 0.0 {
            return self.offset;
        }

        let main = (index as f32 * page).clamp(0.0, self.scroll_extent(orientation));
        self.with_main(orientation, main)
    }

    /// Page index owning the given main-axis offset, for `count` pages.
    ///
    /// A position straddling two pages at exactly 50% resolves to the
    /// earlier index, so the answer is stable while crossing boundaries.
    #[must_use]
    pub fn page_at(&self, orientation: Orientation, main_offset: f32, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }

        let page = self.page_length(orientation);
        if page <= 0.0 || !main_offset.is_finite() {
            return Some(0);
        }

        let position = (main_offset / page).max(0.0);
        let lower = position.floor();
        let index = lower as usize + usize::from(position - lower > 0.5);

        Some(index.min(count - 1))
    }

    /// Page index considered active for the current reference offset.
    #[must_use]
    pub fn active_page(&self, orientation: Orientation, count: usize) -> Option<usize> {
        self.page_at(orientation, self.main_offset(orientation), count)
    }

    /// Resolves the page boundary nearest to the given proportional
    /// position, for snapping a released drag.
    ///
    /// `None` when the content does not scroll or there are no pages.
    /// Equidistant positions resolve to the earlier page, consistent with
    /// the active-page tie-break.
    #[must_use]
    pub fn snap_target(
        &self,
        orientation: Orientation,
        progress: f32,
        count: usize,
    ) -> Option<SnapTarget> {
        let current = self.offset_at_progress(orientation, progress)?;
        let main = match orientation {
            Orientation::Horizontal => current.x,
            Orientation::Vertical => current.y,
        };
        let index = self.page_at(orientation, main, count)?;
        let offset = self.page_offset(orientation, index);
        let snapped_main = match orientation {
            Orientation::Horizontal => offset.x,
            Orientation::Vertical => offset.y,
        };

        // offset_at_progress already guaranteed a positive extent.
        let extent = self.scroll_extent(orientation);

        Some(SnapTarget {
            index,
            offset,
            progress: (snapped_main / extent).clamp(0.0, 1.0),
        })
    }

    fn main_offset(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.offset.x,
            Orientation::Vertical => self.offset.y,
        }
    }

    fn with_main(&self, orientation: Orientation, main: f32) -> AbsoluteOffset {
        match orientation {
            Orientation::Horizontal => AbsoluteOffset {
                x: main,
                y: self.offset.y,
            },
            Orientation::Vertical => AbsoluteOffset {
                x: self.offset.x,
                y: main,
            },
        }
    }
}

/// Outcome of snapping a released drag to the nearest page boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTarget {
    /// Page the position snapped to.
    pub index: usize,
    /// Reference offset of that page.
    pub offset: AbsoluteOffset,
    /// Proportional position of the snapped offset, in `[0, 1]`.
    pub progress: f32,
}

fn sanitize(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn sanitize_size(size: Size) -> Size {
    Size::new(sanitize(size.width, 0.0).max(0.0), sanitize(size.height, 0.0).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PageTitle;
    use crate::test_utils::assert_abs_diff_eq;

    const H: Orientation = Orientation::Horizontal;

    fn paged(offset_x: f32, pages: usize) -> ReferenceSync {
        let mut sync = ReferenceSync::default();
        sync.reference_scrolled(
            AbsoluteOffset { x: offset_x, y: 0.0 },
            Size::new(320.0 * pages as f32, 240.0),
            Size::new(320.0, 240.0),
        );
        sync
    }

    fn strip(viewport_width: f32) -> StripLayout {
        let mut layout = StripLayout::new(0.0, H);
        let titles: Vec<PageTitle> = (0..5)
            .map(|i| PageTitle::with_width(format!("{i}"), 60.0))
            .collect();
        layout.layout_page_labels(&titles);
        layout.set_viewport(Size::new(viewport_width, 32.0));
        layout
    }

    #[test]
    fn progress_maps_proportionally() {
        let sync = paged(640.0, 5);
        // Extent is 4 pages of 320; half way through.
        assert_abs_diff_eq!(sync.progress(H), 0.5);
    }

    #[test]
    fn zero_extent_does_not_divide() {
        let mut sync = ReferenceSync::default();
        sync.reference_scrolled(
            AbsoluteOffset { x: 50.0, y: 0.0 },
            Size::ZERO,
            Size::new(320.0, 240.0),
        );

        assert_abs_diff_eq!(sync.progress(H), 0.0);
        assert!(sync.strip_offset_for(&strip(100.0)).is_none());
        assert!(sync.offset_at_progress(H, 0.5).is_none());
        // Offset clamps into the empty range instead of going NaN.
        assert_abs_diff_eq!(sync.offset().x, 0.0);
    }

    #[test]
    fn non_finite_offset_keeps_previous_value() {
        let mut sync = paged(320.0, 5);
        sync.reference_scrolled(
            AbsoluteOffset {
                x: f32::NAN,
                y: 0.0,
            },
            Size::new(1600.0, 240.0),
            Size::new(320.0, 240.0),
        );

        assert_abs_diff_eq!(sync.offset().x, 320.0);
    }

    #[test]
    fn strip_offset_scales_to_strip_extent() {
        let sync = paged(640.0, 5);
        let layout = strip(100.0);

        // Strip extent is 300 - 100 = 200; progress 0.5 lands at 100.
        assert_abs_diff_eq!(sync.strip_offset_for(&layout).unwrap(), 100.0);
    }

    #[test]
    fn page_offset_clamps_to_extent() {
        let sync = paged(0.0, 5);
        assert_abs_diff_eq!(sync.page_offset(H, 3).x, 960.0);
        // Past the last page clamps to the scrollable extent.
        assert_abs_diff_eq!(sync.page_offset(H, 40).x, 1280.0);
    }

    #[test]
    fn page_offset_preserves_cross_axis() {
        let mut sync = ReferenceSync::default();
        sync.reference_scrolled(
            AbsoluteOffset { x: 0.0, y: 12.0 },
            Size::new(1600.0, 500.0),
            Size::new(320.0, 240.0),
        );

        assert_abs_diff_eq!(sync.page_offset(H, 2).y, 12.0);
    }

    #[test]
    fn active_page_ties_resolve_to_lower_index() {
        // Exactly half way between page 0 and page 1.
        let sync = paged(160.0, 5);
        assert_eq!(sync.active_page(H, 5), Some(0));

        // A hair past the midpoint promotes to page 1.
        let sync = paged(160.5, 5);
        assert_eq!(sync.active_page(H, 5), Some(1));
    }

    #[test]
    fn active_page_clamps_to_last_index() {
        let sync = paged(1280.0, 5);
        assert_eq!(sync.active_page(H, 5), Some(4));
        assert_eq!(sync.active_page(H, 3), Some(2));
    }

    #[test]
    fn active_page_is_none_without_pages() {
        let sync = paged(0.0, 5);
        assert_eq!(sync.active_page(H, 0), None);
    }

    #[test]
    fn degenerate_viewport_resolves_to_first_page() {
        let mut sync = ReferenceSync::default();
        sync.reference_scrolled(
            AbsoluteOffset { x: 10.0, y: 0.0 },
            Size::new(100.0, 0.0),
            Size::ZERO,
        );

        assert_eq!(sync.active_page(H, 4), Some(0));
    }

    #[test]
    fn snap_target_resolves_nearest_page() {
        let sync = paged(0.0, 5);

        // Progress 0.1 of the 1280 extent is offset 128, within page 0.
        let snap = sync.snap_target(H, 0.1, 5).unwrap();
        assert_eq!(snap.index, 0);
        assert_abs_diff_eq!(snap.offset.x, 0.0);
        assert_abs_diff_eq!(snap.progress, 0.0);

        // Progress 0.25 is offset 320, exactly page 1.
        let snap = sync.snap_target(H, 0.25, 5).unwrap();
        assert_eq!(snap.index, 1);
        assert_abs_diff_eq!(snap.offset.x, 320.0);
        assert_abs_diff_eq!(snap.progress, 0.25);
    }

    #[test]
    fn snap_target_ties_resolve_to_lower_page() {
        let sync = paged(0.0, 5);

        // Offset 160 straddles pages 0 and 1 exactly.
        let snap = sync.snap_target(H, 0.125, 5).unwrap();
        assert_eq!(snap.index, 0);
    }

    #[test]
    fn snap_target_is_none_for_degenerate_extent() {
        let mut sync = ReferenceSync::default();
        sync.reference_scrolled(
            AbsoluteOffset { x: 0.0, y: 0.0 },
            Size::new(320.0, 240.0),
            Size::new(320.0, 240.0),
        );

        assert!(sync.snap_target(H, 0.5, 5).is_none());
    }

    #[test]
    fn vertical_axis_uses_y_components() {
        let mut sync = ReferenceSync::default();
        sync.reference_scrolled(
            AbsoluteOffset { x: 0.0, y: 480.0 },
            Size::new(320.0, 1200.0),
            Size::new(320.0, 240.0),
        );

        let v = Orientation::Vertical;
        assert_abs_diff_eq!(sync.progress(v), 0.5);
        assert_eq!(sync.active_page(v, 5), Some(2));
    }
}

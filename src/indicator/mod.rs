// SPDX-License-Identifier: MPL-2.0
//! Paging indicator component encapsulating state and update logic.
//!
//! The indicator tracks an external scrollable content view: its title
//! strip scrolls proportionally with the reference offset, and user
//! gestures over the strip navigate the reference area. Two mutually
//! exclusive interaction modes exist per instance: tap-based delegated
//! navigation (the default) and pan-based direct manipulation.

use crate::config::StripConfig;
use crate::delegate::{TapDecision, TapNavigation};
use crate::state::{
    DragState, Orientation, PageTitle, ReferenceSync, RevealThreshold, StripLayout, TitleFrame,
    TitleVisibility,
};
use crate::style;
use crate::widgets::title_strip::{Axis, Interaction, TitleStrip};
use iced::advanced::renderer;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::{operation, text, Id};
use iced::{Element, Point, Size, Task};

/// Messages consumed by the indicator.
///
/// Gesture messages are produced by the strip widget; the host forwards
/// `ReferenceScrolled` from its content scrollable's `on_scroll`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The reference scroll area reported a content-offset change.
    ReferenceScrolled {
        offset: AbsoluteOffset,
        content: Size,
        viewport: Size,
    },
    /// The strip widget's visible size changed.
    StripResized(Size),
    /// A title was tapped (widget-local coordinates).
    Tapped(Point),
    /// A pan drag began over the strip.
    DragStarted(Point),
    /// The pointer moved during a pan drag.
    DragMoved(Point),
    /// The pan drag ended normally.
    DragEnded,
    /// The pan drag was interrupted by the toolkit.
    DragCancelled,
}

impl Message {
    /// Builds a [`Message::ReferenceScrolled`] from a scrollable viewport,
    /// for direct use in the host's `on_scroll` closure.
    #[must_use]
    pub fn reference_scrolled(viewport: &Viewport) -> Self {
        Self::ReferenceScrolled {
            offset: viewport.absolute_offset(),
            content: viewport.content_bounds().size(),
            viewport: viewport.bounds().size(),
        }
    }

    fn from_interaction(interaction: Interaction) -> Self {
        match interaction {
            Interaction::Tapped(point) => Self::Tapped(point),
            Interaction::DragStarted(point) => Self::DragStarted(point),
            Interaction::DragMoved(point) => Self::DragMoved(point),
            Interaction::DragEnded => Self::DragEnded,
            Interaction::DragCancelled => Self::DragCancelled,
            Interaction::Resized(size) => Self::StripResized(size),
        }
    }
}

/// Effects produced by indicator updates, for the host to act on.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// A different page became active while tracking the reference area.
    ActiveChanged(usize),
    /// The reference scroll area should move to the given offset.
    ///
    /// When a reference handle is set, the accompanying task already
    /// performs the jump; `animated` tells hosts that drive their own
    /// eased scrolling whether to use it.
    ScrollReference {
        offset: AbsoluteOffset,
        animated: bool,
    },
}

/// Paging indicator state: a strip of page titles synchronized with an
/// external scrollable content view.
#[derive(Debug)]
pub struct PagingIndicator {
    titles: Vec<PageTitle>,
    layout: StripLayout,
    sync: ReferenceSync,
    drag: DragState,
    reveal_threshold: RevealThreshold,
    use_swipe_gesture: bool,
    reference: Option<Id>,
    strip_offset: f32,
    active: Option<usize>,
}

impl PagingIndicator {
    /// Creates an indicator from the given configuration.
    #[must_use]
    pub fn new(config: &StripConfig) -> Self {
        Self {
            titles: Vec::new(),
            layout: StripLayout::new(config.title_spacing(), config.axis()),
            sync: ReferenceSync::default(),
            drag: DragState::default(),
            reveal_threshold: RevealThreshold::new(config.reveal()),
            use_swipe_gesture: config.swipe_gesture(),
            reference: None,
            strip_offset: 0.0,
            active: None,
        }
    }

    /// Replaces the page titles and lays out their frames.
    pub fn set_page_titles(&mut self, titles: Vec<PageTitle>) {
        self.layout.layout_page_labels(&titles);
        self.titles = titles;
        self.strip_offset = self.layout.clamp_offset(self.strip_offset);
        self.active = self.sync.active_page(self.orientation(), self.layout.len());
    }

    /// Sets the handle of the reference scrollable the indicator tracks.
    ///
    /// The indicator does not own the scrollable; callers must
    /// [`clear_reference_scrollable`](Self::clear_reference_scrollable)
    /// before tearing the scrollable down.
    pub fn set_reference_scrollable(&mut self, id: Id) {
        self.reference = Some(id);
    }

    /// Clears the reference handle; scroll pushes become no-ops.
    pub fn clear_reference_scrollable(&mut self) {
        self.reference = None;
    }

    /// Sets the reveal threshold (≤ 1.0 fraction, > 1.0 points).
    pub fn set_reveal_threshold(&mut self, value: f32) {
        self.reveal_threshold = RevealThreshold::new(value);
    }

    /// Switches between pan-drag and tap-delegate interaction.
    ///
    /// Leaving pan mode mid-drag abandons the gesture.
    pub fn set_use_swipe_gesture(&mut self, enabled: bool) {
        self.use_swipe_gesture = enabled;
        if !enabled {
            self.drag.stop();
        }
    }

    /// Whether pan-drag interaction is active.
    #[must_use]
    pub fn use_swipe_gesture(&self) -> bool {
        self.use_swipe_gesture
    }

    /// Index of the page currently considered active, if any.
    #[must_use]
    pub fn active_page(&self) -> Option<usize> {
        self.active
    }

    /// Current scroll offset of the title strip.
    #[must_use]
    pub fn strip_offset(&self) -> f32 {
        self.strip_offset
    }

    /// Whether a pan drag is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// The held page titles, in page order.
    #[must_use]
    pub fn titles(&self) -> &[PageTitle] {
        &self.titles
    }

    /// Computed title frames, in index order.
    #[must_use]
    pub fn frames(&self) -> &[TitleFrame] {
        self.layout.frames()
    }

    /// Resolved visibility of the title at `index` for the current strip
    /// offset and reveal threshold.
    #[must_use]
    pub fn title_visibility(&self, index: usize) -> Option<TitleVisibility> {
        let frame = self.layout.frames().get(index)?;
        let width = self.orientation().main(frame.bounds.size());
        let visible = self.layout.visible_width(index, self.strip_offset)?;

        let fraction = if width > 0.0 {
            (visible / width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let required = self.reveal_threshold.required_points(width);

        Some(TitleVisibility {
            fraction,
            revealed: visible > 0.0 && visible >= required,
        })
    }

    /// Handles a message, optionally consulting a tap delegate.
    ///
    /// The delegate is only ever invoked for taps in tap mode; in pan mode
    /// it is never consulted. Without a delegate, taps are a no-op.
    pub fn update(
        &mut self,
        message: Message,
        delegate: Option<&mut dyn TapNavigation>,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::ReferenceScrolled {
                offset,
                content,
                viewport,
            } => {
                self.sync.reference_scrolled(offset, content, viewport);

                // While a drag is in flight the strip follows the pointer;
                // mapping the echoed offset back would fight the finger.
                if !self.drag.is_dragging {
                    if let Some(mapped) = self.sync.strip_offset_for(&self.layout) {
                        self.strip_offset = self.layout.clamp_offset(mapped);
                    }
                }

                (self.refresh_active(), Task::none())
            }
            Message::StripResized(size) => {
                self.layout.set_viewport(size);
                self.strip_offset = self.layout.clamp_offset(self.strip_offset);
                (Effect::None, Task::none())
            }
            Message::Tapped(point) => self.handle_tap(point, delegate),
            Message::DragStarted(position) => {
                if self.use_swipe_gesture {
                    self.drag
                        .start(position, self.strip_offset, self.sync.offset());
                }
                (Effect::None, Task::none())
            }
            Message::DragMoved(position) => self.handle_drag_moved(position),
            Message::DragEnded => self.handle_drag_ended(),
            Message::DragCancelled => self.handle_drag_cancelled(),
        }
    }

    /// Builds the strip widget around host-provided title elements.
    ///
    /// Elements must be in page order and match the held titles; extras
    /// are collapsed to zero size.
    pub fn view<'a, Theme, Renderer>(
        &self,
        titles: Vec<Element<'a, Message, Theme, Renderer>>,
    ) -> Element<'a, Message, Theme, Renderer>
    where
        Theme: 'a,
        Renderer: renderer::Renderer + 'a,
    {
        let frames = self
            .layout
            .frames()
            .iter()
            .map(|frame| frame.bounds)
            .collect();

        TitleStrip::new(
            titles,
            frames,
            self.strip_offset,
            self.axis(),
            self.cross_extent(),
            self.use_swipe_gesture,
            Message::from_interaction,
        )
        .into()
    }

    /// Builds the strip with default text labels styled by prominence.
    #[must_use]
    pub fn labels(&self) -> Element<'_, Message> {
        let children = self
            .titles
            .iter()
            .enumerate()
            .map(|(index, title)| {
                let active = self.active == Some(index);
                let revealed = self
                    .title_visibility(index)
                    .is_some_and(|visibility| visibility.revealed);

                text(title.text.as_str())
                    .size(style::typography::LABEL)
                    .style(style::title_label(active, revealed))
                    .into()
            })
            .collect();

        self.view(children)
    }

    fn handle_tap(
        &mut self,
        point: Point,
        delegate: Option<&mut dyn TapNavigation>,
    ) -> (Effect, Task<Message>) {
        // The two interaction modes are exclusive per instance.
        if self.use_swipe_gesture {
            return (Effect::None, Task::none());
        }

        let Some(index) = self.layout.hit_test(point, self.strip_offset) else {
            return (Effect::None, Task::none());
        };

        // Documented no-op: without a delegate a tap navigates nowhere.
        let Some(delegate) = delegate else {
            return (Effect::None, Task::none());
        };

        let proposed = TapDecision {
            target_offset: self.sync.page_offset(self.orientation(), index),
            animate: true,
        };
        let decision = delegate.decide_navigation(index, proposed);

        (
            Effect::ScrollReference {
                offset: decision.target_offset,
                animated: decision.animate,
            },
            self.scroll_reference(decision.target_offset),
        )
    }

    fn handle_drag_moved(&mut self, position: Point) -> (Effect, Task<Message>) {
        let Some(raw) = self.drag.target_offset(position, self.orientation()) else {
            return (Effect::None, Task::none());
        };

        self.strip_offset = self.layout.clamp_offset(raw);

        let max = self.layout.max_offset();
        if max <= 0.0 {
            return (Effect::None, Task::none());
        }

        let Some(target) = self
            .sync
            .offset_at_progress(self.orientation(), self.strip_offset / max)
        else {
            return (Effect::None, Task::none());
        };

        (
            Effect::ScrollReference {
                offset: target,
                animated: false,
            },
            self.scroll_reference(target),
        )
    }

    fn handle_drag_ended(&mut self) -> (Effect, Task<Message>) {
        if !self.drag.is_dragging {
            return (Effect::None, Task::none());
        }
        self.drag.stop();

        let count = self.layout.len();
        let max = self.layout.max_offset();
        if count == 0 || max <= 0.0 {
            return (Effect::None, Task::none());
        }

        let Some(snap) = self
            .sync
            .snap_target(self.orientation(), self.strip_offset / max, count)
        else {
            return (Effect::None, Task::none());
        };

        self.strip_offset = self.layout.clamp_offset(snap.progress * max);
        self.active = Some(snap.index);

        (
            Effect::ScrollReference {
                offset: snap.offset,
                animated: true,
            },
            self.scroll_reference(snap.offset),
        )
    }

    fn handle_drag_cancelled(&mut self) -> (Effect, Task<Message>) {
        let Some(origin) = self.drag.origin() else {
            return (Effect::None, Task::none());
        };
        self.drag.stop();

        // Roll back to the offsets captured at the start of the gesture.
        self.strip_offset = self.layout.clamp_offset(origin.strip_offset);

        (
            Effect::ScrollReference {
                offset: origin.reference_offset,
                animated: false,
            },
            self.scroll_reference(origin.reference_offset),
        )
    }

    fn refresh_active(&mut self) -> Effect {
        let active = self.sync.active_page(self.orientation(), self.layout.len());
        if active != self.active {
            self.active = active;
            if let Some(index) = active {
                return Effect::ActiveChanged(index);
            }
        }
        Effect::None
    }

    fn scroll_reference(&self, offset: AbsoluteOffset) -> Task<Message> {
        match self.reference.clone() {
            Some(id) => operation::scroll_to(id, offset),
            None => Task::none(),
        }
    }

    fn orientation(&self) -> Orientation {
        self.layout.orientation()
    }

    fn axis(&self) -> Axis {
        match self.orientation() {
            Orientation::Horizontal => Axis::Horizontal,
            Orientation::Vertical => Axis::Vertical,
        }
    }

    fn cross_extent(&self) -> f32 {
        self.layout
            .frames()
            .iter()
            .map(|frame| self.orientation().cross(frame.bounds.size()))
            .fold(0.0, f32::max)
            .max(style::sizing::STRIP_CROSS_EXTENT)
    }
}

impl Default for PagingIndicator {
    fn default() -> Self {
        Self::new(&StripConfig::default())
    }
}

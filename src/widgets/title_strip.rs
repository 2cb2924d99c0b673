// SPDX-License-Identifier: MPL-2.0
//! The title strip widget.
//!
//! Hosts the page-title elements, positions them at their computed frames
//! shifted by the current strip offset, clips them to its bounds, and
//! translates raw pointer input into strip interactions. The widget holds
//! no geometry logic of its own; frames come from the indicator state.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Element, Event, Length, Point, Rectangle, Size, Vector};

/// Pointer movement (in points) past which a pending tap stops being a tap.
const TAP_MOVEMENT_SLOP: f32 = 10.0;

/// Interactions the strip reports to the indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// The strip was tapped at a point in widget-local coordinates.
    Tapped(Point),
    /// A pan drag began at a point in widget-local coordinates.
    DragStarted(Point),
    /// The pointer moved during a pan drag.
    DragMoved(Point),
    /// The pan drag ended normally.
    DragEnded,
    /// The pan drag was interrupted by the toolkit (e.g. touch lost).
    DragCancelled,
    /// The strip's visible size changed.
    Resized(Size),
}

/// Direction in which the strip lays out and scrolls its titles.
///
/// Mirrors [`crate::state::Orientation`] without dragging state types into
/// the widget layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A widget that shows title elements at offset-shifted frames and turns
/// pointer input into [`Interaction`]s.
pub struct TitleStrip<'a, Message, Theme, Renderer> {
    children: Vec<Element<'a, Message, Theme, Renderer>>,
    frames: Vec<Rectangle>,
    offset: f32,
    axis: Axis,
    cross_extent: f32,
    pan_enabled: bool,
    on_interaction: Box<dyn Fn(Interaction) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> TitleStrip<'a, Message, Theme, Renderer> {
    /// Creates a strip from title elements and their computed frames.
    ///
    /// `frames` positions are in strip content coordinates; the current
    /// `offset` shifts them along the axis. Elements without a frame are
    /// collapsed to zero size.
    pub fn new(
        children: Vec<Element<'a, Message, Theme, Renderer>>,
        frames: Vec<Rectangle>,
        offset: f32,
        axis: Axis,
        cross_extent: f32,
        pan_enabled: bool,
        on_interaction: impl Fn(Interaction) -> Message + 'a,
    ) -> Self {
        Self {
            children,
            frames,
            offset,
            axis,
            cross_extent,
            pan_enabled,
            on_interaction: Box::new(on_interaction),
        }
    }

    fn width(&self) -> Length {
        match self.axis {
            Axis::Horizontal => Length::Fill,
            Axis::Vertical => Length::Fixed(self.cross_extent),
        }
    }

    fn height(&self) -> Length {
        match self.axis {
            Axis::Horizontal => Length::Fixed(self.cross_extent),
            Axis::Vertical => Length::Fill,
        }
    }

    fn child_position(&self, frame: Rectangle) -> Point {
        match self.axis {
            Axis::Horizontal => Point::new(frame.x - self.offset, frame.y),
            Axis::Vertical => Point::new(frame.x, frame.y - self.offset),
        }
    }
}

/// Pointer bookkeeping kept in the widget tree between events.
#[derive(Debug, Clone, Copy, Default)]
struct Internal {
    pressed_at: Option<Point>,
    dragging: bool,
    bounds: Option<Rectangle>,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for TitleStrip<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<Internal>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(Internal::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width(), self.height())
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.resolve(self.width(), self.height(), Size::ZERO);

        let frames: Vec<Rectangle> = (0..self.children.len())
            .map(|index| {
                self.frames
                    .get(index)
                    .copied()
                    .unwrap_or(Rectangle::new(Point::ORIGIN, Size::ZERO))
            })
            .collect();
        let positions: Vec<Point> =
            frames.iter().map(|&frame| self.child_position(frame)).collect();

        let children = self
            .children
            .iter_mut()
            .zip(&mut tree.children)
            .enumerate()
            .map(|(index, (child, state))| {
                let frame = frames[index];
                let child_limits = layout::Limits::new(Size::ZERO, frame.size());

                child
                    .as_widget_mut()
                    .layout(state, renderer, &child_limits)
                    .move_to(positions[index])
            })
            .collect();

        layout::Node::with_children(size, children)
    }

    fn children(&self) -> Vec<widget::Tree> {
        self.children.iter().map(widget::Tree::new).collect()
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&self.children);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let Some(clipped) = bounds.intersection(viewport) else {
            return;
        };

        renderer.with_layer(clipped, |renderer| {
            for ((child, state), child_layout) in self
                .children
                .iter()
                .zip(&tree.children)
                .zip(layout.children())
            {
                if child_layout.bounds().intersects(&clipped) {
                    child
                        .as_widget()
                        .draw(state, renderer, theme, style, child_layout, cursor, &clipped);
                }
            }
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        {
            let internal = tree.state.downcast_mut::<Internal>();
            if internal.bounds != Some(bounds) {
                internal.bounds = Some(bounds);
                shell.publish((self.on_interaction)(Interaction::Resized(bounds.size())));
            }

            if self.handle_pointer(internal, event, bounds, cursor, shell) {
                return;
            }
        }

        // Non-gesture events pass through to the title elements.
        for ((child, state), child_layout) in self
            .children
            .iter_mut()
            .zip(&mut tree.children)
            .zip(layout.children())
        {
            child.as_widget_mut().update(
                state,
                event,
                child_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let internal = tree.state.downcast_ref::<Internal>();

        if internal.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            if self.pan_enabled {
                mouse::Interaction::Grab
            } else {
                mouse::Interaction::Pointer
            }
        } else {
            mouse::Interaction::default()
        }
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        for ((child, state), child_layout) in self
            .children
            .iter_mut()
            .zip(&mut tree.children)
            .zip(layout.children())
        {
            child
                .as_widget_mut()
                .operate(state, child_layout, renderer, operation);
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        overlay::from_children(
            &mut self.children,
            tree,
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<Message, Theme, Renderer> TitleStrip<'_, Message, Theme, Renderer> {
    /// Runs the gesture state machine for one event.
    ///
    /// Returns `true` when the event belonged to an interaction over the
    /// strip and must not reach the title elements.
    fn handle_pointer(
        &self,
        internal: &mut Internal,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
        shell: &mut Shell<'_, Message>,
    ) -> bool {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let Some(position) = cursor.position_in(bounds) else {
                    return false;
                };
                self.begin(internal, position, shell);
                true
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if !bounds.contains(*position) {
                    return false;
                }
                self.begin(internal, local_point(bounds, *position), shell);
                true
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.track(internal, local_point(bounds, *position), shell)
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                self.track(internal, local_point(bounds, *position), shell)
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let over = cursor.is_over(bounds);
                self.finish(internal, over, shell)
            }
            Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                self.finish(internal, bounds.contains(*position), shell)
            }
            Event::Touch(touch::Event::FingerLost { .. }) => {
                internal.pressed_at = None;
                if internal.dragging {
                    internal.dragging = false;
                    shell.publish((self.on_interaction)(Interaction::DragCancelled));
                    return true;
                }
                false
            }
            _ => false,
        }
    }

    fn begin(&self, internal: &mut Internal, position: Point, shell: &mut Shell<'_, Message>) {
        if self.pan_enabled {
            internal.dragging = true;
            shell.publish((self.on_interaction)(Interaction::DragStarted(position)));
        } else {
            internal.pressed_at = Some(position);
        }
    }

    fn track(
        &self,
        internal: &mut Internal,
        position: Point,
        shell: &mut Shell<'_, Message>,
    ) -> bool {
        if internal.dragging {
            shell.publish((self.on_interaction)(Interaction::DragMoved(position)));
            return true;
        }

        if let Some(pressed) = internal.pressed_at {
            if pressed.distance(position) > TAP_MOVEMENT_SLOP {
                internal.pressed_at = None;
            }
        }

        false
    }

    fn finish(
        &self,
        internal: &mut Internal,
        released_over: bool,
        shell: &mut Shell<'_, Message>,
    ) -> bool {
        if internal.dragging {
            internal.dragging = false;
            shell.publish((self.on_interaction)(Interaction::DragEnded));
            return true;
        }

        if let Some(pressed) = internal.pressed_at.take() {
            if released_over {
                shell.publish((self.on_interaction)(Interaction::Tapped(pressed)));
            }
            return true;
        }

        false
    }
}

impl<'a, Message, Theme, Renderer> From<TitleStrip<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(strip: TitleStrip<'a, Message, Theme, Renderer>) -> Self {
        Self::new(strip)
    }
}

fn local_point(bounds: Rectangle, position: Point) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn local_point_is_relative_to_bounds() {
        let bounds = Rectangle::new(Point::new(20.0, 10.0), Size::new(200.0, 32.0));
        let local = local_point(bounds, Point::new(50.0, 14.0));
        assert_abs_diff_eq!(local.x, 30.0);
        assert_abs_diff_eq!(local.y, 4.0);
    }

    #[test]
    fn internal_state_starts_idle() {
        let internal = Internal::default();
        assert!(!internal.dragging);
        assert!(internal.pressed_at.is_none());
        assert!(internal.bounds.is_none());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests exercising the indicator through its public surface.

use approx::assert_abs_diff_eq;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Size};
use iced_paging::config::{self, StripConfig};
use iced_paging::{Effect, Message, PageTitle, PagingIndicator, TapDecision, TapNavigation};
use tempfile::tempdir;

/// Delegate that records calls and can override the proposed decision.
#[derive(Default)]
struct HostScreen {
    taps: Vec<usize>,
    force_instant: bool,
}

impl TapNavigation for HostScreen {
    fn decide_navigation(&mut self, index: usize, proposed: TapDecision) -> TapDecision {
        self.taps.push(index);
        TapDecision {
            animate: proposed.animate && !self.force_instant,
            ..proposed
        }
    }
}

fn titles(count: usize, width: f32) -> Vec<PageTitle> {
    (0..count)
        .map(|i| PageTitle::with_width(format!("Page {i}"), width))
        .collect()
}

/// Five equal 60-point titles over a five-page reference area.
fn five_page_indicator(swipe: bool) -> PagingIndicator {
    let mut indicator = PagingIndicator::new(&StripConfig {
        use_swipe_gesture: Some(swipe),
        spacing: Some(0.0),
        ..StripConfig::default()
    });
    indicator.set_page_titles(titles(5, 60.0));
    let _ = indicator.update(Message::StripResized(Size::new(100.0, 32.0)), None);
    let _ = indicator.update(scrolled_to(0.0), None);
    indicator
}

fn scrolled_to(x: f32) -> Message {
    Message::ReferenceScrolled {
        offset: AbsoluteOffset { x, y: 0.0 },
        content: Size::new(1600.0, 240.0),
        viewport: Size::new(320.0, 240.0),
    }
}

#[test]
fn layout_assigns_unique_indices_without_overlap() {
    let mut indicator = PagingIndicator::default();
    indicator.set_page_titles(titles(7, 48.0));

    let frames = indicator.frames();
    assert_eq!(frames.len(), 7);
    for (position, frame) in frames.iter().enumerate() {
        assert_eq!(frame.index, position);
    }
    for pair in frames.windows(2) {
        assert!(pair[0].bounds.x + pair[0].bounds.width <= pair[1].bounds.x);
    }
}

#[test]
fn zero_reference_extent_keeps_the_displayed_offset() {
    let mut indicator = five_page_indicator(false);
    let _ = indicator.update(scrolled_to(640.0), None);
    let before = indicator.strip_offset();

    let _ = indicator.update(
        Message::ReferenceScrolled {
            offset: AbsoluteOffset { x: 25.0, y: 0.0 },
            content: Size::ZERO,
            viewport: Size::new(320.0, 240.0),
        },
        None,
    );

    assert!(indicator.strip_offset().is_finite());
    assert_abs_diff_eq!(indicator.strip_offset(), before);
}

#[test]
fn reveal_threshold_is_fraction_or_points_by_magnitude() {
    let mut indicator = five_page_indicator(false);

    // Strip window [30, 130): title 0 shows 30 of its 60 points.
    let _ = indicator.update(scrolled_to(192.0), None);

    indicator.set_reveal_threshold(0.5);
    assert!(indicator.title_visibility(0).unwrap().revealed);

    indicator.set_reveal_threshold(0.75);
    assert!(!indicator.title_visibility(0).unwrap().revealed);

    // 1.5 points, not 150% of the width.
    indicator.set_reveal_threshold(1.5);
    assert!(indicator.title_visibility(0).unwrap().revealed);
}

#[test]
fn swipe_mode_never_invokes_the_delegate() {
    let mut indicator = five_page_indicator(true);
    let mut host = HostScreen::default();

    for x in [10.0, 70.0, 190.0] {
        let (effect, _task) =
            indicator.update(Message::Tapped(Point::new(x, 10.0)), Some(&mut host));
        assert!(matches!(effect, Effect::None));
    }

    assert!(host.taps.is_empty());
}

#[test]
fn tap_mode_without_delegate_changes_nothing() {
    let mut indicator = five_page_indicator(false);

    for index in 0..5 {
        let x = index as f32 * 60.0 + 10.0;
        let (effect, _task) = indicator.update(Message::Tapped(Point::new(x, 10.0)), None);
        assert!(matches!(effect, Effect::None));
    }

    assert_eq!(indicator.active_page(), Some(0));
    assert_abs_diff_eq!(indicator.strip_offset(), 0.0);
}

#[test]
fn scrolling_one_page_in_activates_the_second_title() {
    let mut indicator = five_page_indicator(false);

    let (effect, _task) = indicator.update(scrolled_to(320.0), None);

    assert!(matches!(effect, Effect::ActiveChanged(1)));
    assert_eq!(indicator.active_page(), Some(1));

    // The strip scrolled title 0 fully out of view.
    let visibility = indicator.title_visibility(0).unwrap();
    assert_abs_diff_eq!(visibility.fraction, 0.0);
    assert!(!visibility.revealed);
}

#[test]
fn delegate_forcing_instant_jump_is_honored() {
    let mut indicator = five_page_indicator(false);
    let mut host = HostScreen {
        force_instant: true,
        ..HostScreen::default()
    };

    // Title 3 spans [180, 240).
    let (effect, _task) =
        indicator.update(Message::Tapped(Point::new(190.0, 10.0)), Some(&mut host));

    assert_eq!(host.taps, vec![3]);
    match effect {
        Effect::ScrollReference { offset, animated } => {
            assert_abs_diff_eq!(offset.x, 960.0);
            assert!(!animated);
        }
        other => panic!("expected ScrollReference, got {other:?}"),
    }
}

#[test]
fn pan_drag_tracks_and_snaps() {
    let mut indicator = five_page_indicator(true);

    let _ = indicator.update(Message::DragStarted(Point::new(90.0, 16.0)), None);
    let (effect, _task) = indicator.update(Message::DragMoved(Point::new(20.0, 16.0)), None);

    // The strip followed the finger and pushed a proportional offset.
    assert_abs_diff_eq!(indicator.strip_offset(), 70.0);
    assert!(matches!(
        effect,
        Effect::ScrollReference {
            animated: false,
            ..
        }
    ));

    let (effect, _task) = indicator.update(Message::DragEnded, None);
    match effect {
        Effect::ScrollReference { offset, .. } => assert_abs_diff_eq!(offset.x, 320.0),
        other => panic!("expected ScrollReference, got {other:?}"),
    }
    assert_eq!(indicator.active_page(), Some(1));
}

#[test]
fn config_round_trips_through_toml() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("indicator.toml");

    let saved = StripConfig {
        use_swipe_gesture: Some(true),
        reveal_threshold: Some(1.5),
        ..StripConfig::default()
    };
    config::save_to_path(&saved, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    assert_eq!(loaded, saved);
    assert!(loaded.swipe_gesture());

    dir.close().expect("failed to close temporary directory");
}

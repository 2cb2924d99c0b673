// SPDX-License-Identifier: MPL-2.0
//! Tap navigation delegate.
//!
//! When the indicator runs in tap mode, a tap on a title asks the host
//! where the reference scroll area should go. The indicator proposes a
//! default decision and the delegate returns the final one, overriding
//! whichever parts it wants.

use iced::widget::scrollable::AbsoluteOffset;

/// Outcome of a tap on a title, pre-filled with defaults.
///
/// The proposed `target_offset` brings the tapped page fully into view
/// and `animate` defaults to `true`. Return the value unchanged to accept
/// the proposal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapDecision {
    /// Content offset the reference scroll area should move to.
    pub target_offset: AbsoluteOffset,
    /// Whether the transition should animate. The flag is forwarded on
    /// [`Effect::ScrollReference`](crate::indicator::Effect); the built-in
    /// scroll task always jumps, which is exactly the `false` behavior.
    pub animate: bool,
}

/// Decides where tapping a page title navigates.
///
/// Implemented by the host screen. The indicator never retains the
/// implementor; it is borrowed for the duration of a single `update`
/// call, so no teardown bookkeeping is needed. Without a delegate, taps
/// are ignored entirely.
pub trait TapNavigation {
    /// Called synchronously when the title at `index` is tapped.
    ///
    /// `proposed` carries the default decision; the returned value is
    /// applied as-is.
    fn decide_navigation(&mut self, index: usize, proposed: TapDecision) -> TapDecision;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AcceptAll;

    impl TapNavigation for AcceptAll {
        fn decide_navigation(&mut self, _index: usize, proposed: TapDecision) -> TapDecision {
            proposed
        }
    }

    #[test]
    fn accepting_delegate_returns_the_proposal() {
        let mut delegate = AcceptAll;
        let proposed = TapDecision {
            target_offset: AbsoluteOffset { x: 640.0, y: 0.0 },
            animate: true,
        };

        let decision = delegate.decide_navigation(2, proposed);
        assert_eq!(decision, proposed);
    }
}

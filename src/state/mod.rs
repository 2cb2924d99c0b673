// SPDX-License-Identifier: MPL-2.0
//! Indicator state management modules
//!
//! This module contains the geometry and gesture logic separated from the
//! component struct, following the principle of separation of concerns.

pub mod drag;
pub mod layout;
pub mod reveal;
pub mod sync;

// Re-export commonly used types for convenience
pub use drag::{DragOrigin, DragState};
pub use layout::{Orientation, PageTitle, StripLayout, TitleFrame};
pub use reveal::{RevealThreshold, TitleVisibility};
pub use sync::{ReferenceSync, SnapTarget};

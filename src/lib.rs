// SPDX-License-Identifier: MPL-2.0
//! `iced_paging` is a paging indicator widget for the Iced GUI toolkit.
//!
//! It shows a strip of page-title labels synchronized with an external
//! scrollable content view, supporting tap-to-navigate with a delegate
//! override hook and pan gestures that scroll the strip and reveal a
//! partially visible neighboring title.

#![doc(html_root_url = "https://docs.rs/iced_paging/0.1.0")]

pub mod config;
pub mod delegate;
pub mod error;
pub mod indicator;
pub mod state;
pub mod style;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use config::StripConfig;
pub use delegate::{TapDecision, TapNavigation};
pub use indicator::{Effect, Message, PagingIndicator};
pub use state::{Orientation, PageTitle, RevealThreshold, TitleVisibility};

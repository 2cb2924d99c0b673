// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets backing the indicator.

pub mod title_strip;

pub use title_strip::{Axis, Interaction, TitleStrip};

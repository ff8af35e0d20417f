// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A [Masonry] widget which shows one line of text, and scrolls it when it doesn't fit.
//!
//! [`MarqueeLabel`] is meant for text which changes over time at a known pace,
//! such as lyrics, tickers or track titles. Each line comes with a *line display time*:
//! the time the line will stay on screen. A line which is too wide for the widget
//! is shown from its start, scrolled at a constant speed until its end is visible,
//! and then rests until it is replaced. Lines which fit never move.
//!
//! The edges of the label can fade out where text is hidden, using a gradient mask.
//!
//! # Example
//!
//! ```
//! use marquee_label::{MarqueeFont, MarqueeLabel};
//! use masonry::core::{NewWidget, WidgetMut};
//!
//! let font: MarqueeFont = "System 12".parse().unwrap();
//! let marquee = NewWidget::new(MarqueeLabel::new(font).with_gradient_mask(true));
//!
//! // Later, from an `AppDriver` or a `TestHarness`:
//! fn next_line(mut marquee: WidgetMut<'_, MarqueeLabel>, line: &str) {
//!     MarqueeLabel::set_text_and_timing(&mut marquee, line, 4.0).unwrap();
//! }
//! # let _ = (marquee, next_line);
//! ```
//!
//! [Masonry]: https://crates.io/crates/masonry

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![expect(missing_debug_implementations, reason = "Widgets hold Parley layouts")]

mod error;
mod font;
mod marquee_label;
mod mask;
mod timeline;

pub mod properties;
pub mod theme;

pub use error::InvalidArgument;
pub use font::{MarqueeFont, SYSTEM_FAMILY};
pub use marquee_label::MarqueeLabel;
pub use mask::EdgeMask;
pub use timeline::{AnimationStatus, LineDisplayTime, MarqueeTimeline, ScrollPhase};

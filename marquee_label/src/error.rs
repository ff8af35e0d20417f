// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The error type of this crate.

/// An argument passed to a marquee constructor or setter was rejected.
///
/// These are returned synchronously and leave the target untouched.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidArgument {
    /// The line display time was below zero.
    #[error("line display time must not be negative, got {0}s")]
    NegativeLineDisplayTime(f64),
    /// The line display time was NaN or infinite.
    #[error("line display time must be finite, got {0}")]
    NonFiniteLineDisplayTime(f64),
    /// The line display time was finite but too large to represent as a duration.
    #[error("line display time is too large, got {0}s")]
    LineDisplayTimeOutOfRange(f64),
    /// The font size was zero, negative, or not finite.
    #[error("font size must be a positive finite number, got {0}")]
    FontSize(f32),
    /// The font family name was empty or only whitespace.
    #[error("font family name is empty")]
    EmptyFontFamily,
    /// A font description did not have the `<family> <size>` shape.
    #[error("cannot parse font description {0:?}, expected \"<family> <size>\"")]
    FontDescription(String),
}

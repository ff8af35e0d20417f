// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The font a marquee is drawn with.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use masonry::core::{ArcStr, StyleProperty, StyleSet};
use masonry::parley::{FontFamily, FontStack, GenericFamily};

use crate::InvalidArgument;

/// The family name which resolves to the platform's UI font.
pub const SYSTEM_FAMILY: &str = "System";

/// A font family together with a point size.
///
/// This is the font handle used by [`MarqueeLabel`](crate::MarqueeLabel).
/// A value of this type is always valid: the family is non-empty and the
/// size is positive and finite.
///
/// ```
/// use marquee_label::MarqueeFont;
///
/// let font: MarqueeFont = "System 12".parse().unwrap();
/// assert_eq!(font.name(), "System");
/// assert_eq!(font.size(), 12.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeFont {
    name: ArcStr,
    size: f32,
}

impl MarqueeFont {
    /// Creates a font from a family name and a size in points.
    ///
    /// The name [`SYSTEM_FAMILY`] (in any case) selects the platform UI font.
    /// Any other name is interpreted as a CSS font-family list, so generic
    /// names such as `monospace` also work.
    pub fn new(name: impl Into<ArcStr>, size: f32) -> Result<Self, InvalidArgument> {
        let name: ArcStr = name.into();
        if name.trim().is_empty() {
            return Err(InvalidArgument::EmptyFontFamily);
        }
        if !size.is_finite() || size <= 0. {
            return Err(InvalidArgument::FontSize(size));
        }
        Ok(Self { name, size })
    }

    /// The platform UI font at `size` points.
    pub fn system(size: f32) -> Result<Self, InvalidArgument> {
        Self::new(SYSTEM_FAMILY, size)
    }

    /// The family name this font was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The size of this font, in points.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Whether this font is the platform UI font.
    pub fn is_system(&self) -> bool {
        self.name.trim().eq_ignore_ascii_case(SYSTEM_FAMILY)
    }

    /// The Parley font stack for this family.
    pub fn font_stack(&self) -> FontStack<'static> {
        if self.is_system() {
            FontStack::Single(FontFamily::Generic(GenericFamily::SystemUi))
        } else {
            FontStack::Source(Cow::Owned(self.name.trim().to_owned()))
        }
    }

    /// Writes the family and size of this font into `styles`.
    pub(crate) fn apply_to(&self, styles: &mut StyleSet) {
        styles.insert(StyleProperty::FontStack(self.font_stack()));
        styles.insert(StyleProperty::FontSize(self.size));
    }
}

impl fmt::Display for MarqueeFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.size)
    }
}

impl FromStr for MarqueeFont {
    type Err = InvalidArgument;

    /// Parses `"<family> <size>"`, e.g. `"System 12"` or `"Helvetica Neue 13.5"`.
    fn from_str(description: &str) -> Result<Self, Self::Err> {
        let parse_error = || InvalidArgument::FontDescription(description.to_owned());
        let (name, size) = description
            .trim()
            .rsplit_once(char::is_whitespace)
            .ok_or_else(parse_error)?;
        let size: f32 = size.parse().map_err(|_| parse_error())?;
        Self::new(name.trim_end(), size)
    }
}

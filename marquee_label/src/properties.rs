// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Properties configuring a [`MarqueeLabel`](crate::MarqueeLabel).
//!
//! The label also reads Masonry's [`ContentColor`](masonry::properties::ContentColor)
//! and [`DisabledContentColor`](masonry::properties::DisabledContentColor).

use std::any::TypeId;

use masonry::core::{Property, UpdateCtx};

/// How the line display time of a marquee is split between resting and scrolling.
///
/// Both fields are fractions of the line display time.
/// `lead_in` is spent showing the start of the text before it moves,
/// `lead_out` is spent showing its end once it has stopped.
/// The rest is spent scrolling at a constant speed.
///
/// Fractions are clamped to `0.0..=1.0`. If they add up to more than one,
/// they are scaled down proportionally, and the text jumps from its start
/// to its end without scrolling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueePacing {
    /// Fraction of the line display time before scrolling starts.
    pub lead_in: f64,
    /// Fraction of the line display time after scrolling ends.
    pub lead_out: f64,
}

impl Property for MarqueePacing {
    fn static_default() -> &'static Self {
        static DEFAULT: MarqueePacing = MarqueePacing::new(0.2, 0.2);
        &DEFAULT
    }
}

impl Default for MarqueePacing {
    fn default() -> Self {
        *Self::static_default()
    }
}

impl MarqueePacing {
    /// Create new `MarqueePacing` with given lead fractions.
    pub const fn new(lead_in: f64, lead_out: f64) -> Self {
        Self { lead_in, lead_out }
    }

    /// The lead fractions after clamping and scaling, as `(lead_in, lead_out)`.
    pub fn normalized(&self) -> (f64, f64) {
        fn clamp(fraction: f64) -> f64 {
            if fraction.is_nan() {
                0.
            } else {
                fraction.clamp(0., 1.)
            }
        }
        let lead_in = clamp(self.lead_in);
        let lead_out = clamp(self.lead_out);
        let sum = lead_in + lead_out;
        if sum > 1. {
            (lead_in / sum, lead_out / sum)
        } else {
            (lead_in, lead_out)
        }
    }

    /// Helper function to be called in [`Widget::property_changed`](masonry::core::Widget::property_changed).
    pub fn prop_changed(ctx: &mut UpdateCtx<'_>, property_type: TypeId) {
        if property_type != TypeId::of::<Self>() {
            return;
        }
        ctx.request_anim_frame();
        ctx.request_paint_only();
    }
}

/// What a marquee does once its line display time has passed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarqueeRepeat {
    /// Stop with the end of the text visible.
    #[default]
    Once,
    /// Start again from the beginning of the text.
    Loop,
}

impl Property for MarqueeRepeat {
    fn static_default() -> &'static Self {
        &Self::Once
    }
}

impl MarqueeRepeat {
    /// Helper function to be called in [`Widget::property_changed`](masonry::core::Widget::property_changed).
    pub fn prop_changed(ctx: &mut UpdateCtx<'_>, property_type: TypeId) {
        if property_type != TypeId::of::<Self>() {
            return;
        }
        ctx.request_anim_frame();
    }
}

/// The width of the gradient mask at each edge of a marquee, in multiples of the font size.
///
/// The resulting width is never more than a third of the label's width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeWidth {
    /// Width of the fade, relative to the font size.
    pub em: f64,
}

impl Property for FadeWidth {
    fn static_default() -> &'static Self {
        static DEFAULT: FadeWidth = FadeWidth { em: 1.0 };
        &DEFAULT
    }
}

impl Default for FadeWidth {
    fn default() -> Self {
        *Self::static_default()
    }
}

impl FadeWidth {
    /// Create new `FadeWidth` with given value.
    pub const fn new(em: f64) -> Self {
        Self { em }
    }

    /// Resolves this width in logical pixels for the given font size and label width.
    pub fn resolve(self, font_size: f32, label_width: f64) -> f64 {
        let em = if self.em.is_finite() {
            self.em.max(0.)
        } else {
            0.
        };
        (em * f64::from(font_size)).min(label_width / 3.).max(0.)
    }

    /// Helper function to be called in [`Widget::property_changed`](masonry::core::Widget::property_changed).
    pub fn prop_changed(ctx: &mut UpdateCtx<'_>, property_type: TypeId) {
        if property_type != TypeId::of::<Self>() {
            return;
        }
        ctx.request_paint_only();
    }
}

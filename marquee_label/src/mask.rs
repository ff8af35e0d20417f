// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The edge gradient mask of a marquee.

use masonry::kurbo::{Affine, Point, Rect, Size};
use masonry::peniko::{BlendMode, Color, Compose, Fill, Gradient};
use masonry::vello::Scene;

/// An alpha mask which fades out the edges of a marquee behind which text is hidden.
///
/// The leading edge fades once the text has scrolled away from its start;
/// the trailing edge fades while the end of the text is still out of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeMask {
    width: f64,
    leading: f64,
    trailing: f64,
}

impl EdgeMask {
    /// Computes the mask for a label `width` pixels wide, whose text overflows by `overflow`
    /// and is currently scrolled by `offset`.
    ///
    /// `fade` is the width of each faded edge.
    /// Returns `None` if neither edge needs to fade.
    pub fn new(width: f64, fade: f64, offset: f64, overflow: f64) -> Option<Self> {
        if !(width > 0. && fade > 0. && overflow > 0.) {
            return None;
        }
        let fade = fade.min(width / 2.);
        let leading = if offset > 0. { fade } else { 0. };
        let trailing = if offset < overflow { fade } else { 0. };
        if leading == 0. && trailing == 0. {
            return None;
        }
        Some(Self {
            width,
            leading,
            trailing,
        })
    }

    /// Width of the fade at the start of the line, zero if that edge is opaque.
    pub fn leading(&self) -> f64 {
        self.leading
    }

    /// Width of the fade at the end of the line, zero if that edge is opaque.
    pub fn trailing(&self) -> f64 {
        self.trailing
    }

    /// The gradient stops of the mask along the width of the label, as `(offset, alpha)`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Gradient stops are f32 in Peniko"
    )]
    pub fn stops(&self) -> [(f32, f32); 4] {
        let leading_alpha = if self.leading > 0. { 0. } else { 1. };
        let trailing_alpha = if self.trailing > 0. { 0. } else { 1. };
        [
            (0., leading_alpha),
            ((self.leading / self.width) as f32, 1.),
            ((1. - self.trailing / self.width) as f32, 1.),
            (1., trailing_alpha),
        ]
    }

    /// The mask as a horizontal gradient in the label's coordinate space.
    pub fn gradient(&self) -> Gradient {
        let stops = self
            .stops()
            .map(|(offset, alpha)| (offset, Color::BLACK.with_alpha(alpha)));
        Gradient::new_linear(Point::ORIGIN, Point::new(self.width, 0.)).with_stops(stops)
    }

    /// Applies the mask to everything drawn into the current layer of `scene`.
    pub(crate) fn paint(&self, scene: &mut Scene, size: Size) {
        let rect = Rect::from_origin_size(Point::ORIGIN, size);
        scene.push_layer(
            BlendMode::from(Compose::DestIn),
            1.,
            Affine::IDENTITY,
            &rect,
        );
        scene.fill(Fill::NonZero, Affine::IDENTITY, &self.gradient(), None, &rect);
        scene.pop_layer();
    }
}

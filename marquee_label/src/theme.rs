// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Default values for the marquee.

use masonry::core::DefaultProperties;
use masonry::properties::{ContentColor, DisabledContentColor};
use masonry::theme::{DISABLED_TEXT_COLOR, TEXT_COLOR};

use crate::MarqueeLabel;
use crate::properties::{FadeWidth, MarqueePacing, MarqueeRepeat};

/// Masonry's default property set, with defaults for [`MarqueeLabel`] added.
pub fn default_property_set() -> DefaultProperties {
    let mut properties = masonry::theme::default_property_set();
    add_marquee_properties(&mut properties);
    properties
}

/// Inserts the defaults for [`MarqueeLabel`] into an existing property set.
pub fn add_marquee_properties(properties: &mut DefaultProperties) {
    properties.insert::<MarqueeLabel, _>(ContentColor::new(TEXT_COLOR));
    properties.insert::<MarqueeLabel, _>(DisabledContentColor(ContentColor::new(
        DISABLED_TEXT_COLOR,
    )));
    properties.insert::<MarqueeLabel, _>(MarqueePacing::default());
    properties.insert::<MarqueeLabel, _>(MarqueeRepeat::default());
    properties.insert::<MarqueeLabel, _>(FadeWidth::default());
}

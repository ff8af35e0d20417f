// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A single-line label which scrolls text that doesn't fit.

use std::any::TypeId;
use std::time::Duration;

use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, ArcStr, BoxConstraints, BrushIndex, ChildrenIds, LayoutCtx, NoAction, PaintCtx,
    PropertiesMut, PropertiesRef, RegisterCtx, StyleSet, Update, UpdateCtx, Widget, WidgetId,
    WidgetMut, render_text,
};
use masonry::kurbo::{Affine, Size};
use masonry::parley::Layout;
use masonry::properties::{ContentColor, DisabledContentColor};
use masonry::theme::default_text_styles;
use masonry::vello::Scene;
use tracing::{Span, trace_span};

use crate::mask::EdgeMask;
use crate::properties::{FadeWidth, MarqueePacing, MarqueeRepeat};
use crate::timeline::{LineDisplayTime, MarqueeTimeline, ScrollPhase};
use crate::{InvalidArgument, MarqueeFont};

/// Text narrower than the label by less than this many pixels is considered to fit.
const OVERFLOW_TOLERANCE: f64 = 0.5;

/// A widget displaying one line of non-interactive text, which scrolls horizontally
/// when the text is wider than the widget.
///
/// The text is shown for its [line display time](LineDisplayTime):
/// it starts at rest, scrolls until its end is visible, and rests again,
/// as configured by the [`MarqueePacing`] and [`MarqueeRepeat`] properties.
/// Text which fits never moves.
///
/// If a gradient mask is requested, the edges behind which text is hidden fade out.
/// The width of the fade is set by the [`FadeWidth`] property.
///
/// The font and mask are always changed together with [`set_font_and_mask`](Self::set_font_and_mask),
/// as are the text and its line display time with [`set_text_and_timing`](Self::set_text_and_timing).
/// Like every Masonry widget, these can only be called through a [`WidgetMut`],
/// that is, from the thread which owns the widget tree.
///
/// You can customize the text color with the [`ContentColor`] and [`DisabledContentColor`] properties.
pub struct MarqueeLabel {
    text_layout: Layout<BrushIndex>,

    text: ArcStr,
    font: MarqueeFont,
    need_gradient_mask: bool,

    styles: StyleSet,
    /// Whether `text` or `styles` has been updated since `text_layout` was created.
    styles_changed: bool,

    timeline: MarqueeTimeline,
    /// The horizontal scroll offset drawn by the last paint.
    offset: f64,
    phase: ScrollPhase,
    /// The edge mask applied by the last paint.
    mask: Option<EdgeMask>,

    /// Whether to hint whilst drawing the text.
    ///
    /// Disabled while the text is moving.
    hint: bool,
}

// --- MARK: BUILDERS
impl MarqueeLabel {
    /// Creates an empty marquee drawn with `font`.
    pub fn new(font: MarqueeFont) -> Self {
        let mut styles = StyleSet::new(font.size());
        default_text_styles(&mut styles);
        font.apply_to(&mut styles);
        Self {
            text_layout: Layout::new(),
            text: "".into(),
            font,
            need_gradient_mask: false,
            styles,
            styles_changed: true,
            timeline: MarqueeTimeline::new(LineDisplayTime::ZERO),
            offset: 0.,
            phase: ScrollPhase::Idle,
            mask: None,
            hint: true,
        }
    }

    /// Sets the initial text.
    ///
    /// To update the text of an active marquee, use [`set_text_and_timing`](Self::set_text_and_timing).
    pub fn with_text(mut self, text: impl Into<ArcStr>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the initial line display time.
    ///
    /// The default is [`LineDisplayTime::ZERO`], which never scrolls.
    pub fn with_line_display_time(mut self, line_time: LineDisplayTime) -> Self {
        self.timeline = MarqueeTimeline::new(line_time);
        self
    }

    /// Sets whether the edges fade out when text is hidden behind them.
    ///
    /// To change this on an active marquee, use [`set_font_and_mask`](Self::set_font_and_mask).
    pub fn with_gradient_mask(mut self, need_gradient_mask: bool) -> Self {
        self.need_gradient_mask = need_gradient_mask;
        self
    }
}

// --- MARK: ACCESSORS
impl MarqueeLabel {
    /// The font the text is drawn with.
    pub fn font(&self) -> &MarqueeFont {
        &self.font
    }

    /// Whether the edges fade out when text is hidden behind them.
    pub fn need_gradient_mask(&self) -> bool {
        self.need_gradient_mask
    }

    /// The displayed text.
    pub fn text(&self) -> &ArcStr {
        &self.text
    }

    /// How long the current line stays on screen.
    pub fn line_display_time(&self) -> LineDisplayTime {
        self.timeline.line_time()
    }

    /// How far the text is currently scrolled, in logical pixels.
    pub fn scroll_offset(&self) -> f64 {
        self.offset
    }

    /// How far the text extends past the width of the widget, as of the last layout.
    pub fn overflow(&self) -> f64 {
        self.timeline.overflow()
    }

    /// Whether the text was wider than the widget at the last layout.
    pub fn is_overflowing(&self) -> bool {
        self.timeline.overflow() > 0.
    }

    /// Where the scroll currently is within the line display time.
    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }
}

// --- MARK: WIDGETMUT
impl MarqueeLabel {
    /// Replaces the font and the gradient mask setting.
    ///
    /// The scroll restarts from the beginning of the text, since its width has changed.
    pub fn set_font_and_mask(
        this: &mut WidgetMut<'_, Self>,
        font: MarqueeFont,
        need_gradient_mask: bool,
    ) {
        tracing::debug!(%font, need_gradient_mask, "set_font_and_mask");
        font.apply_to(&mut this.widget.styles);
        this.widget.font = font;
        this.widget.need_gradient_mask = need_gradient_mask;
        this.widget.styles_changed = true;

        let line_time = this.widget.timeline.line_time();
        this.widget.timeline.restart(line_time);
        this.ctx.request_layout();
        this.ctx.request_anim_frame();
    }

    /// Replaces the text, and the time in seconds it stays on screen.
    ///
    /// Fails without changing anything if `line_display_time` is negative or not finite.
    pub fn set_text_and_timing(
        this: &mut WidgetMut<'_, Self>,
        text: impl Into<ArcStr>,
        line_display_time: f64,
    ) -> Result<(), InvalidArgument> {
        let line_time = LineDisplayTime::from_secs_f64(line_display_time).inspect_err(|err| {
            tracing::warn!("set_text_and_timing: {err}");
        })?;
        Self::set_text_and_line_time(this, text, line_time);
        Ok(())
    }

    /// Replaces the text, and the time it stays on screen.
    ///
    /// This is [`set_text_and_timing`](Self::set_text_and_timing) for an already validated time.
    pub fn set_text_and_line_time(
        this: &mut WidgetMut<'_, Self>,
        text: impl Into<ArcStr>,
        line_time: LineDisplayTime,
    ) {
        this.widget.text = text.into();
        this.widget.timeline.restart(line_time);
        this.widget.styles_changed = true;
        tracing::trace!(
            text = &*this.widget.text,
            line_time = line_time.as_secs_f64(),
            "set_text_and_line_time"
        );

        this.ctx.request_layout();
        this.ctx.request_anim_frame();
    }
}

impl MarqueeLabel {
    /// Recomputes the offset and phase from the timeline.
    ///
    /// Returns whether the drawn offset changed.
    fn sync_with_timeline(&mut self, pacing: &MarqueePacing) -> bool {
        let offset = self.timeline.offset(pacing);
        let phase = self.timeline.phase(pacing);
        if phase != self.phase {
            tracing::trace!(from = ?self.phase, to = ?phase, "marquee phase changed");
            self.phase = phase;
        }
        let changed = offset != self.offset;
        self.offset = offset;
        changed
    }
}

// --- MARK: IMPL WIDGET
impl Widget for MarqueeLabel {
    type Action = NoAction;

    fn accepts_pointer_interaction(&self) -> bool {
        false
    }

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {}

    fn property_changed(&mut self, ctx: &mut UpdateCtx<'_>, property_type: TypeId) {
        ContentColor::prop_changed(ctx, property_type);
        DisabledContentColor::prop_changed(ctx, property_type);
        MarqueePacing::prop_changed(ctx, property_type);
        MarqueeRepeat::prop_changed(ctx, property_type);
        FadeWidth::prop_changed(ctx, property_type);
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, _props: &mut PropertiesMut<'_>, event: &Update) {
        match event {
            Update::WidgetAdded => {
                ctx.request_anim_frame();
            }
            Update::DisabledChanged(_) => {
                ctx.request_paint_only();
            }
            _ => {}
        }
    }

    fn on_anim_frame(
        &mut self,
        ctx: &mut UpdateCtx<'_>,
        props: &mut PropertiesMut<'_>,
        interval: u64,
    ) {
        let pacing = *props.get::<MarqueePacing>();
        let repeat = *props.get::<MarqueeRepeat>();

        let status = self
            .timeline
            .advance(Duration::from_nanos(interval), &pacing, repeat);
        if self.sync_with_timeline(&pacing) {
            ctx.request_paint_only();
        }

        let hint = status.is_completed();
        if hint != self.hint {
            self.hint = hint;
            ctx.request_paint_only();
        }
        if !status.is_completed() {
            ctx.request_anim_frame();
        }
    }

    fn layout(
        &mut self,
        ctx: &mut LayoutCtx<'_>,
        props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        if self.styles_changed || ctx.fonts_changed() {
            let (font_ctx, layout_ctx) = ctx.text_contexts();
            let mut builder = layout_ctx.ranged_builder(font_ctx, &self.text, 1.0, true);
            for prop in self.styles.inner().values() {
                builder.push_default(prop.to_owned());
            }
            builder.build_into(&mut self.text_layout, &self.text);
            // A marquee never wraps.
            self.text_layout.break_all_lines(None);
            self.styles_changed = false;
        }

        let text_width = f64::from(self.text_layout.width());
        let text_height = f64::from(self.text_layout.height());
        let width = if bc.is_width_bounded() {
            bc.max().width
        } else {
            text_width
        };
        let size = bc.constrain(Size::new(width, text_height));

        let overflow = text_width - size.width;
        let overflow = if overflow > OVERFLOW_TOLERANCE {
            overflow
        } else {
            0.
        };
        let pacing = *props.get::<MarqueePacing>();
        if self.timeline.set_overflow(overflow) && self.timeline.phase(&pacing).is_running() {
            // The text started overflowing after a resize, so the scroll has to resume.
            ctx.mutate_self_later(|mut this| this.ctx.request_anim_frame());
        }
        self.sync_with_timeline(&pacing);

        let baseline = self
            .text_layout
            .lines()
            .next()
            .map_or(0., |line| f64::from(line.metrics().baseline));
        let text_top = ((size.height - text_height) / 2.).max(0.);
        ctx.set_baseline_offset((size.height - text_top - baseline).max(0.));
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, props: &PropertiesRef<'_>, scene: &mut Scene) {
        let size = ctx.size();
        scene.push_clip_layer(Affine::IDENTITY, &size.to_rect());

        let text_color = if ctx.is_disabled() {
            &props.get::<DisabledContentColor>().0
        } else {
            props.get::<ContentColor>()
        };
        let text_top = ((size.height - f64::from(self.text_layout.height())) / 2.).max(0.);
        render_text(
            scene,
            Affine::translate((-self.offset, text_top)),
            &self.text_layout,
            &[text_color.color.into()],
            self.hint,
        );

        self.mask = if self.need_gradient_mask {
            let fade = props
                .get::<FadeWidth>()
                .resolve(self.font.size(), size.width);
            EdgeMask::new(size.width, fade, self.offset, self.timeline.overflow())
        } else {
            None
        };
        if let Some(mask) = &self.mask {
            mask.paint(scene, size);
        }

        scene.pop_layer();
    }

    fn accessibility_role(&self) -> Role {
        Role::Label
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_value(&*self.text);
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }

    fn make_trace_span(&self, id: WidgetId) -> Span {
        trace_span!("MarqueeLabel", id = id.trace())
    }

    fn get_debug_text(&self) -> Option<String> {
        Some(self.text.to_string())
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use float_cmp::approx_eq;
    use masonry::core::{NewWidget, Properties, WindowEvent};
    use masonry::dpi::PhysicalSize;
    use masonry_testing::TestHarness;

    use super::*;
    use crate::theme::default_property_set;

    const LONG_TEXT: &str = "The quick brown fox jumps over the lazy dog, then does it all again";

    fn harness_with(label: MarqueeLabel) -> TestHarness<MarqueeLabel> {
        TestHarness::create_with_size(
            default_property_set(),
            NewWidget::new(label),
            Size::new(100.0, 30.0),
        )
    }

    fn system_font(size: f32) -> MarqueeFont {
        MarqueeFont::system(size).unwrap()
    }

    #[test]
    fn set_font_and_mask() {
        let mut harness = harness_with(MarqueeLabel::new(system_font(15.)));
        assert!(!harness.root_widget().need_gradient_mask());

        harness.edit_root_widget(|mut label| {
            let font = "System 12".parse().unwrap();
            MarqueeLabel::set_font_and_mask(&mut label, font, true);
        });

        let label = harness.root_widget();
        assert_eq!(label.font().name(), "System");
        assert_eq!(label.font().size(), 12.);
        assert!(label.need_gradient_mask());
    }

    #[test]
    fn set_text_and_timing() {
        let mut harness = harness_with(MarqueeLabel::new(system_font(12.)));

        harness
            .edit_root_widget(|mut label| {
                MarqueeLabel::set_text_and_timing(&mut label, "Hello World", 2.0)
            })
            .unwrap();

        let label = harness.root_widget();
        assert_eq!(&**label.text(), "Hello World");
        assert_eq!(label.line_display_time().as_secs_f64(), 2.0);
    }

    #[test]
    fn empty_text_does_not_scroll() {
        let mut harness = harness_with(MarqueeLabel::new(system_font(12.)).with_text("Hi"));

        harness
            .edit_root_widget(|mut label| MarqueeLabel::set_text_and_timing(&mut label, "", 2.0))
            .unwrap();
        harness.animate_ms(500);

        let label = harness.root_widget();
        assert_eq!(&**label.text(), "");
        assert!(!label.is_overflowing());
        assert_eq!(label.phase(), ScrollPhase::Idle);
        assert_eq!(label.scroll_offset(), 0.);
    }

    #[test]
    fn invalid_timing_is_rejected() {
        let mut harness = harness_with(MarqueeLabel::new(system_font(12.)));
        harness
            .edit_root_widget(|mut label| MarqueeLabel::set_text_and_timing(&mut label, "a", 1.0))
            .unwrap();

        let result = harness
            .edit_root_widget(|mut label| MarqueeLabel::set_text_and_timing(&mut label, "b", -1.0));
        assert_matches!(result, Err(InvalidArgument::NegativeLineDisplayTime(_)));
        let result = harness.edit_root_widget(|mut label| {
            MarqueeLabel::set_text_and_timing(&mut label, "c", f64::NAN)
        });
        assert_matches!(result, Err(InvalidArgument::NonFiniteLineDisplayTime(_)));
        let result = harness
            .edit_root_widget(|mut label| MarqueeLabel::set_text_and_timing(&mut label, "d", 1e30));
        assert_matches!(result, Err(InvalidArgument::LineDisplayTimeOutOfRange(_)));

        let label = harness.root_widget();
        assert_eq!(&**label.text(), "a");
        assert_eq!(label.line_display_time().as_secs_f64(), 1.0);
    }

    #[test]
    fn short_text_fits() {
        let mut harness = harness_with(MarqueeLabel::new(system_font(12.)));
        harness
            .edit_root_widget(|mut label| MarqueeLabel::set_text_and_timing(&mut label, "Hi", 2.0))
            .unwrap();
        harness.animate_ms(1_000);

        let label = harness.root_widget();
        assert!(!label.is_overflowing());
        assert_eq!(label.phase(), ScrollPhase::Idle);
        assert_eq!(label.scroll_offset(), 0.);
    }

    #[test]
    fn overflowing_text_scrolls_once() {
        let mut harness = harness_with(MarqueeLabel::new(system_font(12.)));
        harness
            .edit_root_widget(|mut label| {
                MarqueeLabel::set_text_and_timing(&mut label, LONG_TEXT, 2.0)
            })
            .unwrap();
        assert!(harness.root_widget().is_overflowing());
        assert_eq!(harness.root_widget().phase(), ScrollPhase::LeadIn);

        // With the default pacing, a 2s line rests for 0.4s, scrolls for 1.2s and rests for 0.4s.
        harness.animate_ms(100);
        assert_eq!(harness.root_widget().phase(), ScrollPhase::LeadIn);
        assert_eq!(harness.root_widget().scroll_offset(), 0.);

        harness.animate_ms(900);
        let label = harness.root_widget();
        assert_eq!(label.phase(), ScrollPhase::Scrolling);
        assert!(approx_eq!(
            f64,
            label.scroll_offset(),
            label.overflow() / 2.,
            epsilon = 1e-6
        ));

        harness.animate_ms(1_500);
        let label = harness.root_widget();
        assert_eq!(label.phase(), ScrollPhase::Finished);
        assert_eq!(label.scroll_offset(), label.overflow());

        // The animation has stopped, so further frames don't move the text.
        harness.animate_ms(1_000);
        assert_eq!(harness.root_widget().phase(), ScrollPhase::Finished);
    }

    #[test]
    fn zero_line_display_time_with_overflow() {
        let mut harness = harness_with(MarqueeLabel::new(system_font(12.)));
        harness
            .edit_root_widget(|mut label| {
                MarqueeLabel::set_text_and_timing(&mut label, LONG_TEXT, 0.0)
            })
            .unwrap();
        harness.animate_ms(1_000);

        let label = harness.root_widget();
        assert!(label.is_overflowing());
        assert_eq!(label.phase(), ScrollPhase::Idle);
        assert_eq!(label.scroll_offset(), 0.);
    }

    #[test]
    fn new_text_restarts_scroll() {
        let mut harness = harness_with(MarqueeLabel::new(system_font(12.)));
        harness
            .edit_root_widget(|mut label| {
                MarqueeLabel::set_text_and_timing(&mut label, LONG_TEXT, 1.0)
            })
            .unwrap();
        harness.animate_ms(2_000);
        assert_eq!(harness.root_widget().phase(), ScrollPhase::Finished);

        harness
            .edit_root_widget(|mut label| {
                MarqueeLabel::set_text_and_timing(&mut label, "Another line that is far too long", 1.0)
            })
            .unwrap();
        let label = harness.root_widget();
        assert_eq!(label.phase(), ScrollPhase::LeadIn);
        assert_eq!(label.scroll_offset(), 0.);
    }

    #[test]
    fn new_font_restarts_scroll() {
        let label = MarqueeLabel::new(system_font(12.))
            .with_text(LONG_TEXT)
            .with_line_display_time(LineDisplayTime::from_secs_f64(1.0).unwrap());
        let mut harness = harness_with(label);
        harness.animate_ms(2_000);
        assert_eq!(harness.root_widget().phase(), ScrollPhase::Finished);

        harness.edit_root_widget(|mut label| {
            MarqueeLabel::set_font_and_mask(&mut label, system_font(14.), false);
        });
        let label = harness.root_widget();
        assert_eq!(label.phase(), ScrollPhase::LeadIn);
        assert!(!label.need_gradient_mask());
    }

    #[test]
    fn repeated_setters_keep_pairs_consistent() {
        let mut harness = harness_with(MarqueeLabel::new(system_font(12.)));
        let pairs = [("one", 1.0), ("two", 0.0), ("three", 3.5), ("", 0.25)];
        for (text, secs) in pairs {
            harness
                .edit_root_widget(|mut label| {
                    MarqueeLabel::set_text_and_timing(&mut label, text, secs)
                })
                .unwrap();
            let label = harness.root_widget();
            assert_eq!(&**label.text(), text);
            assert_eq!(label.line_display_time().as_secs_f64(), secs);
        }

        for (size, mask) in [(10., true), (20., false), (9.5, true)] {
            harness.edit_root_widget(|mut label| {
                MarqueeLabel::set_font_and_mask(&mut label, system_font(size), mask);
            });
            let label = harness.root_widget();
            assert_eq!(label.font().size(), size);
            assert_eq!(label.need_gradient_mask(), mask);
        }
    }

    #[test]
    fn looping_marquee_keeps_running() {
        let label = MarqueeLabel::new(system_font(12.))
            .with_text(LONG_TEXT)
            .with_line_display_time(LineDisplayTime::from_secs_f64(1.0).unwrap())
            .with_props(Properties::one(MarqueeRepeat::Loop));
        let mut harness = TestHarness::create_with_size(
            default_property_set(),
            label,
            Size::new(100.0, 30.0),
        );

        harness.animate_ms(1_100);
        let label = harness.root_widget();
        assert_eq!(label.phase(), ScrollPhase::LeadIn);
        assert_eq!(label.scroll_offset(), 0.);
    }

    #[test]
    fn pacing_property_changes_offset() {
        let mut harness = harness_with(MarqueeLabel::new(system_font(12.)));
        harness
            .edit_root_widget(|mut label| {
                label.insert_prop(MarqueePacing::new(0., 0.));
                MarqueeLabel::set_text_and_timing(&mut label, LONG_TEXT, 2.0)
            })
            .unwrap();

        harness.animate_ms(1_000);
        let label = harness.root_widget();
        assert_eq!(label.phase(), ScrollPhase::Scrolling);
        assert!(approx_eq!(
            f64,
            label.scroll_offset(),
            label.overflow() / 2.,
            epsilon = 1e-6
        ));
    }

    #[test]
    fn mask_follows_scroll() {
        let label = MarqueeLabel::new(system_font(12.))
            .with_text(LONG_TEXT)
            .with_line_display_time(LineDisplayTime::from_secs_f64(2.0).unwrap())
            .with_gradient_mask(true);
        let mut harness = harness_with(label);

        // At rest on the start of the text, only the trailing edge hides text.
        let _ = harness.render();
        let mask = harness.root_widget().mask.unwrap();
        assert_eq!(mask.leading(), 0.);
        assert_eq!(mask.trailing(), 12.);

        harness.animate_ms(1_000);
        let _ = harness.render();
        let label = harness.root_widget();
        assert_eq!(label.phase(), ScrollPhase::Scrolling);
        let mask = label.mask.unwrap();
        assert_eq!(mask.leading(), 12.);
        assert_eq!(mask.trailing(), 12.);

        harness.animate_ms(1_500);
        let _ = harness.render();
        let label = harness.root_widget();
        assert_eq!(label.phase(), ScrollPhase::Finished);
        let mask = label.mask.unwrap();
        assert_eq!(mask.leading(), 12.);
        assert_eq!(mask.trailing(), 0.);
    }

    #[test]
    fn mask_is_not_painted_when_disabled_or_fitting() {
        let label = MarqueeLabel::new(system_font(12.))
            .with_text(LONG_TEXT)
            .with_line_display_time(LineDisplayTime::from_secs_f64(2.0).unwrap())
            .with_gradient_mask(true);
        let mut harness = harness_with(label);
        let _ = harness.render();
        assert!(harness.root_widget().mask.is_some());

        harness.edit_root_widget(|mut label| {
            MarqueeLabel::set_font_and_mask(&mut label, system_font(12.), false);
        });
        let _ = harness.render();
        assert_eq!(harness.root_widget().mask, None);

        harness.edit_root_widget(|mut label| {
            MarqueeLabel::set_font_and_mask(&mut label, system_font(12.), true);
        });
        harness
            .edit_root_widget(|mut label| MarqueeLabel::set_text_and_timing(&mut label, "Hi", 2.0))
            .unwrap();
        let _ = harness.render();
        assert_eq!(harness.root_widget().mask, None);
    }

    #[test]
    fn accessibility_value_is_text() {
        let mut harness = harness_with(MarqueeLabel::new(system_font(12.)).with_text(LONG_TEXT));
        let _ = harness.render();
        let id = harness.root_id();

        let node = harness.access_node(id).unwrap();
        assert_eq!(node.role(), Role::Label);
        assert_eq!(node.value().as_deref(), Some(LONG_TEXT));

        harness
            .edit_root_widget(|mut label| {
                MarqueeLabel::set_text_and_timing(&mut label, "Hello World", 1.0)
            })
            .unwrap();
        let _ = harness.render();
        let node = harness.access_node(id).unwrap();
        assert_eq!(node.value().as_deref(), Some("Hello World"));
    }

    #[test]
    fn shrinking_window_starts_scroll() {
        let label = MarqueeLabel::new(system_font(12.))
            .with_text(LONG_TEXT)
            .with_line_display_time(LineDisplayTime::from_secs_f64(2.0).unwrap());
        let mut harness = TestHarness::create_with_size(
            default_property_set(),
            NewWidget::new(label),
            Size::new(1_000.0, 30.0),
        );
        harness.animate_ms(1_000);
        let label = harness.root_widget();
        assert!(!label.is_overflowing());
        assert_eq!(label.phase(), ScrollPhase::Idle);

        harness.process_window_event(WindowEvent::Resize(PhysicalSize::new(100, 30)));
        assert!(harness.root_widget().is_overflowing());

        // Nothing elapsed while the text fit, so the line starts from its lead-in.
        assert_eq!(harness.root_widget().phase(), ScrollPhase::LeadIn);
        harness.animate_ms(1_000);
        let label = harness.root_widget();
        assert_eq!(label.phase(), ScrollPhase::Scrolling);
        assert!(approx_eq!(
            f64,
            label.scroll_offset(),
            label.overflow() / 2.,
            epsilon = 1e-6
        ));

        harness.animate_ms(1_500);
        let label = harness.root_widget();
        assert_eq!(label.phase(), ScrollPhase::Finished);
        assert_eq!(label.scroll_offset(), label.overflow());
    }
}

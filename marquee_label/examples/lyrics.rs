// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Shows lines of a song in a narrow marquee, advancing on a button press.

// On Windows platform, don't show a console when opening the app.
#![cfg_attr(not(test), windows_subsystem = "windows")]

use marquee_label::theme::default_property_set;
use marquee_label::{MarqueeFont, MarqueeLabel};
use masonry::core::{ErasedAction, NewWidget, Widget, WidgetId, WidgetTag};
use masonry::dpi::LogicalSize;
use masonry::properties::types::Length;
use masonry::widgets::{Button, ButtonPress, Flex, SizedBox};
use masonry_winit::app::{AppDriver, DriverCtx, NewWindow, WindowId};
use masonry_winit::winit::window::Window;

const MARQUEE_TAG: WidgetTag<MarqueeLabel> = WidgetTag::new("marquee");
const WIDGET_SPACING: Length = Length::const_px(10.0);

/// Each line with the number of seconds it is sung for.
const LINES: &[(&str, f64)] = &[
    ("Row, row, row your boat", 3.0),
    ("Gently down the stream, never looking back at the shore", 5.0),
    ("Merrily, merrily, merrily, merrily", 4.0),
    ("Life is but a dream, or so the old song would have you believe", 6.0),
];

struct Driver {
    window_id: WindowId,
    next_line_button: WidgetId,
    mask_button: WidgetId,
    line: usize,
    need_gradient_mask: bool,
}

impl AppDriver for Driver {
    fn on_action(
        &mut self,
        window_id: WindowId,
        ctx: &mut DriverCtx<'_, '_>,
        widget_id: WidgetId,
        action: ErasedAction,
    ) {
        debug_assert_eq!(window_id, self.window_id, "unknown window");
        if !action.is::<ButtonPress>() {
            return;
        }

        let render_root = ctx.render_root(window_id);
        if widget_id == self.next_line_button {
            self.line = (self.line + 1) % LINES.len();
            let (text, secs) = LINES[self.line];
            render_root.edit_widget_with_tag(MARQUEE_TAG, |mut marquee| {
                if let Err(err) = MarqueeLabel::set_text_and_timing(&mut marquee, text, secs) {
                    tracing::error!("cannot show line {text:?}: {err}");
                }
            });
        } else if widget_id == self.mask_button {
            self.need_gradient_mask = !self.need_gradient_mask;
            let need_gradient_mask = self.need_gradient_mask;
            render_root.edit_widget_with_tag(MARQUEE_TAG, |mut marquee| {
                let font = marquee.widget.font().clone();
                MarqueeLabel::set_font_and_mask(&mut marquee, font, need_gradient_mask);
            });
        }
    }
}

fn make_widget_tree(driver: &Driver) -> NewWidget<impl Widget> {
    let font = MarqueeFont::system(18.).expect("valid font");
    let (text, secs) = LINES[driver.line];
    let marquee = MarqueeLabel::new(font)
        .with_text(text)
        .with_line_display_time(secs.try_into().expect("valid line display time"))
        .with_gradient_mask(driver.need_gradient_mask);

    let root = Flex::column()
        .with_spacer(WIDGET_SPACING)
        .with_child(
            SizedBox::new(NewWidget::new_with_tag(marquee, MARQUEE_TAG))
                .width(Length::px(240.))
                .with_auto_id(),
        )
        .with_spacer(WIDGET_SPACING)
        .with_child(NewWidget::new_with_id(
            Button::with_text("Next line"),
            driver.next_line_button,
        ))
        .with_spacer(WIDGET_SPACING)
        .with_child(NewWidget::new_with_id(
            Button::with_text("Toggle gradient mask"),
            driver.mask_button,
        ));

    NewWidget::new(root)
}

fn main() {
    let window_size = LogicalSize::new(320.0, 200.0);
    let window_attributes = Window::default_attributes()
        .with_title("Marquee")
        .with_resizable(true)
        .with_min_inner_size(window_size);
    let driver = Driver {
        window_id: WindowId::next(),
        next_line_button: WidgetId::next(),
        mask_button: WidgetId::next(),
        line: 0,
        need_gradient_mask: true,
    };
    let root = make_widget_tree(&driver).erased();

    let event_loop = masonry_winit::app::EventLoop::with_user_event()
        .build()
        .unwrap();
    masonry_winit::app::run_with(
        event_loop,
        vec![NewWindow::new_with_id(
            driver.window_id,
            window_attributes,
            root,
        )],
        driver,
        default_property_set(),
    )
    .unwrap();
}

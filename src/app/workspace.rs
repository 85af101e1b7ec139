//! Workspace - Main Shell
//!
//! The workspace is the container that holds the header bar and the
//! greeting content area.

use gpui::{
    Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*,
};
use std::sync::Arc;

use crate::constants::WINDOW_TITLE;
use crate::services::ApiClient;
use crate::theme::colors::GreetColors;
use crate::views::GreetingView;

/// Main workspace containing the application layout
pub struct Workspace {
    greeting: Entity<GreetingView>,
}

impl Workspace {
    pub fn new(client: Arc<ApiClient>, cx: &mut Context<Self>) -> Self {
        let greeting = cx.new(|cx| GreetingView::new(client, cx));
        Self { greeting }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(GreetColors::background())
            .child(
                // Header bar
                div()
                    .w_full()
                    .px_4()
                    .py_2()
                    .bg(GreetColors::header_bg())
                    .text_color(GreetColors::text_header())
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(WINDOW_TITLE),
            )
            .child(
                // Content area
                div()
                    .flex_1()
                    .overflow_hidden()
                    .bg(GreetColors::content_bg())
                    .child(self.greeting.clone()),
            )
    }
}

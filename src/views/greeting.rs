//! Greeting View
//!
//! Renders the display message. Spawns exactly one fetch on creation;
//! re-renders never spawn. The fetch task is detached, so tearing the
//! view down does not cancel the underlying request; a settle arriving
//! after teardown is dropped by the failed entity update.

use gpui::{Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*};
use std::sync::Arc;

use crate::constants::GREETING_PREFIX;
use crate::services::{ApiClient, run_in_tokio};
use crate::states::GreetingState;
use crate::theme::colors::GreetColors;

/// The greeting view component
pub struct GreetingView {
    state: Entity<GreetingState>,
}

impl GreetingView {
    /// Create the view and issue the single greeting request
    pub fn new(client: Arc<ApiClient>, cx: &mut Context<Self>) -> Self {
        let state = cx.new(|_| GreetingState::new());

        // Re-render when the request settles
        cx.observe(&state, |_this, _, cx| cx.notify()).detach();

        let fetch_state = state.clone();
        cx.spawn(async move |_this, cx| {
            let outcome = run_in_tokio(async move { client.fetch_greeting().await }).await;
            let _ = fetch_state.update(cx, |state, cx| {
                state.settle(outcome, cx);
            });
        })
        .detach();

        Self { state }
    }
}

impl Render for GreetingView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let message = self.state.read(cx).message().clone();

        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(GreetColors::text_primary())
                    .child(format!("{GREETING_PREFIX} {message}")),
            )
    }
}

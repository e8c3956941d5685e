//! Notice Bar Component
//!
//! Error alert shown after a blank submission.

use leptos::prelude::*;
use todo_core::{DismissReason, NOTICE_MESSAGE};

use crate::context::use_todo_context;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <Show when=move || ctx.notice_visible()>
            <div class="notice-bar error" role="alert" on:click=|ev| ev.stop_propagation()>
                <span class="notice-text">{NOTICE_MESSAGE}</span>
                <button
                    class="notice-close"
                    title="Close"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.dismiss(DismissReason::CloseButton);
                    }
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}

//! New Item Form Component
//!
//! Text input with Add and Reset buttons. Enter submits through the form.

use leptos::prelude::*;

use crate::context::use_todo_context;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_todo_context();
    let (new_text, set_new_text) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // a rejected submit keeps what was typed
        if ctx.submit(&new_text.get()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Enter Your Todo Here"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add"</button>
            // No confirmation step
            <button type="button" class="reset-btn" on:click=move |_| ctx.reset()>
                "Reset"
            </button>
        </form>
    }
}

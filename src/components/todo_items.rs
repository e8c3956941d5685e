//! Todo Items Component
//!
//! Renders the list in stored order; completed items are already grouped last.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_todo_context;

#[component]
pub fn TodoItems() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <ul class="todo-list">
            <For
                each=move || ctx.items()
                // completed is part of the key so a toggled row re-renders
                key=|item| (item.id, item.completed)
                children=move |item| view! { <TodoRow item=item /> }
            />
        </ul>
    }
}

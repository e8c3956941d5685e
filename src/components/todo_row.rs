//! Todo Row Component

use leptos::prelude::*;
use todo_core::Item;

use crate::context::use_todo_context;

/// One item; click toggles completion
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_todo_context();
    let id = item.id;

    view! {
        <li
            class=if item.completed { "todo-row completed" } else { "todo-row" }
            on:click=move |_| ctx.toggle(id)
        >
            {item.text}
        </li>
    }
}

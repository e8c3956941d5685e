//! Todo Frontend App
//!
//! Single card: input row, item list, summary and the validation notice.

use leptos::prelude::*;
use todo_core::DismissReason;

use crate::components::{NewItemForm, NoticeBar, TodoItems};
use crate::context::TodoContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = TodoContext::new();
    provide_context(ctx);

    let summary = move || {
        let (pending, done) = ctx.counts();
        format!("{} pending, {} done", pending, done)
    };

    view! {
        <div class="todo-page" on:click=move |_| ctx.dismiss(DismissReason::ClickAway)>
            <NoticeBar />
            <main class="todo-card">
                <h2 class="todo-title">"Todo App"</h2>
                <NewItemForm />
                <TodoItems />
                <p class="item-count">{summary}</p>
            </main>
        </div>
    }
}

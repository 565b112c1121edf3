//! Todo Table Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_todo_store, TodoStateStoreFields};

/// Table of whatever the store currently holds (full list or search result)
#[component]
pub fn TodoTable() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <table class="todo-table" aria-label="todo table">
            <thead>
                <tr>
                    <th>"ชื่อรายการ"</th>
                    <th class="right">"วันที่เริ่ม"</th>
                    <th class="right">"เสร็จแล้ว"</th>
                    <th class="right">"จัดการข้อมูล"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.todos().get()
                    // Every displayed field, so edits and toggles re-render the row
                    key=|todo| {
                        (todo.id.clone(), todo.name.clone(), todo.date_start.clone(), todo.finished)
                    }
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
            </tbody>
        </table>
    }
}

//! Todo Row Component
//!
//! One table row: name, start date, finished checkbox, edit/delete actions.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Todo;

#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let toggle_id = todo.id.clone();
    let delete_id = todo.id.clone();
    let name = todo.name.clone();
    let date_start = todo.date_start.clone();
    let finished = todo.finished;

    view! {
        <tr class=if finished { "todo-row finished" } else { "todo-row" }>
            <th scope="row">{name}</th>
            <td class="right">{date_start}</td>
            <td class="right">
                <input
                    type="checkbox"
                    prop:checked=finished
                    on:change=move |_| {
                        let id = toggle_id.clone();
                        ctx.run(move |controller| async move {
                            controller.toggle_finished(&id).await
                        });
                    }
                />
            </td>
            <td class="right">
                <div class="row-actions">
                    <button class="edit-btn" on:click=move |_| ctx.controller().edit(&todo)>
                        "แก้ไข"
                    </button>
                    <button
                        class="delete-btn"
                        on:click=move |_| {
                            let id = delete_id.clone();
                            ctx.run(move |controller| async move { controller.delete(&id).await });
                        }
                    >
                        "ลบ"
                    </button>
                </div>
            </td>
        </tr>
    }
}

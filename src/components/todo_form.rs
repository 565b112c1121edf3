//! Todo Form Component
//!
//! Name and start-date inputs with a single add/save button. The name input
//! also drives the live search.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::dates;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let on_name_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let query = input.value();
        ctx.run(move |controller| async move { controller.search(query).await });
    };

    let date_value = move || {
        dates::display_to_input(&store.date_start().get()).unwrap_or_default()
    };
    let submit_label = move || {
        if store.edit_target().with(Option::is_some) { "บันทึก" } else { "เพิ่ม" }
    };

    let on_date_change = move |ev: web_sys::Event| {
        let formatted = dates::input_to_display(&event_target_value(&ev)).unwrap_or_default();
        store.date_start().set(formatted);
    };

    view! {
        <div class="todo-form">
            <input
                type="text"
                class="name-input"
                placeholder="ชื่อรายการ"
                prop:value=move || store.name().get()
                on:input=on_name_input
            />
            <label class="date-field">
                <span>"วันที่เริ่ม"</span>
                <input
                    type="date"
                    prop:value=date_value
                    on:change=on_date_change
                />
            </label>
            <button
                class="submit-btn"
                on:click=move |_| {
                    ctx.run(|controller| async move { controller.add_or_update().await })
                }
            >
                {submit_label}
            </button>
        </div>
    }
}

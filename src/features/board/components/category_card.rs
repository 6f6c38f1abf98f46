use leptos::ev;
use leptos::prelude::*;

use super::TaskRow;
use crate::features::board::hooks::BoardHook;

#[component]
pub fn CategoryCard(category_id: i64) -> impl IntoView {
    let board = use_context::<BoardHook>().expect("board context");
    let state = board.state;

    let name = move || {
        state.with(|s| s.category(category_id).map(|c| c.name.clone()).unwrap_or_default())
    };
    // Rows are keyed by id so an in-progress edit keeps its input element
    let task_ids = move || {
        state.with(|s| {
            s.category(category_id)
                .map(|c| c.tasks.iter().map(|t| t.id).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="category-box">
            <h2>{name}</h2>
            <button
                class="btn-secondary delete-category-btn"
                on:click=move |_| board.delete_category(category_id)
            >"Delete this category"</button>
            <table class="task-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Task"</th>
                        <th>"Edit"</th>
                        <th>"Done"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=task_ids
                        key=|task_id| *task_id
                        children=move |task_id| view! { <TaskRow category_id=category_id task_id=task_id /> }
                    />
                </tbody>
            </table>
            <div class="add-task">
                <input
                    type="text"
                    placeholder="Add task"
                    prop:value=move || state.with(|s| s.task_input(category_id).to_string())
                    on:input=move |ev| board.stage_task_input(category_id, event_target_value(&ev))
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            board.add_task(category_id);
                        }
                    }
                />
                <button class="btn-primary" on:click=move |_| board.add_task(category_id)>"Add Task"</button>
            </div>
        </div>
    }
}

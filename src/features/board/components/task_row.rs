use leptos::ev;
use leptos::html::Tr;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::features::board::debounce::synced_draft;
use crate::features::board::hooks::BoardHook;

// Focus is moving onto another element of the same row (its Edit/Done button)
fn blur_stays_in_row(ev: &ev::FocusEvent, row_ref: NodeRef<Tr>) -> bool {
    let Some(row) = row_ref.get_untracked() else {
        return false;
    };
    ev.related_target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .map(|node| row.contains(Some(&node)))
        .unwrap_or(false)
}

#[component]
pub fn TaskRow(category_id: i64, task_id: i64) -> impl IntoView {
    let board = use_context::<BoardHook>().expect("board context");
    let row_ref = NodeRef::<Tr>::new();

    // Keystrokes edit a local draft; the server copy only changes when a commit succeeds
    let initial = board.state.with_untracked(|s| {
        s.task(category_id, task_id)
            .map(|t| t.description.clone())
            .unwrap_or_default()
    });
    let (draft, set_draft) = signal(initial);
    let (focused, set_focused) = signal(false);

    // Once edits settle and the field is left, show what the store holds
    Effect::new(move |_| {
        let confirmed = board
            .state
            .with(|s| s.task(category_id, task_id).map(|t| t.description.clone()));
        let idle = board.is_edit_idle(task_id);
        let focused = focused.get();
        let next = draft.with_untracked(|d| synced_draft(confirmed.as_deref(), d, focused, idle));
        if let Some(next) = next {
            set_draft.set(next);
        }
    });

    view! {
        <tr class="task-row" node_ref=row_ref>
            <td class="task-id">{task_id}</td>
            <td>
                <input
                    type="text"
                    class="task-input"
                    prop:value=move || draft.get()
                    on:focus=move |_| set_focused.set(true)
                    on:input=move |ev| {
                        let description = event_target_value(&ev);
                        set_draft.set(description.clone());
                        board.schedule_edit(category_id, task_id, description);
                    }
                    on:blur=move |ev: ev::FocusEvent| {
                        let toward_row_action = blur_stays_in_row(&ev, row_ref);
                        board.commit_edit(category_id, task_id, draft.get_untracked(), toward_row_action);
                        set_focused.set(false);
                    }
                />
            </td>
            <td>
                <button
                    class="btn-secondary"
                    on:click=move |_| board.submit_edit(category_id, task_id, draft.get_untracked())
                >"Edit"</button>
            </td>
            <td>
                <button
                    class="btn-primary"
                    on:click=move |_| board.delete_task(category_id, task_id)
                >"Done"</button>
            </td>
        </tr>
    }
}

use leptos::prelude::*;

use crate::features::board::hooks::BoardHook;

// Shows the most recent failure. Nothing ever clears it.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let board = use_context::<BoardHook>().expect("board context");

    move || {
        board.state.with(|s| s.error.clone()).map(|message| {
            view! { <p class="error-message" role="alert">{message}</p> }
        })
    }
}

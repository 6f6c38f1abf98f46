use leptos::ev;
use leptos::prelude::*;

use crate::core::config::ApiConfig;
use crate::features::board::{use_board, CategoryCard, ErrorBanner};

#[component]
pub fn Board() -> impl IntoView {
    let board = use_board(ApiConfig::from_build_env());
    provide_context(board);

    let state = board.state;
    let category_ids = move || state.with(|s| s.categories.iter().map(|c| c.id).collect::<Vec<_>>());

    view! {
        <div class="container">
            <p>"Add a category for tasks and then add a task."</p>
            <div class="add-category">
                <input
                    type="text"
                    placeholder="Add name of your category"
                    prop:value=move || state.with(|s| s.new_category_name.clone())
                    on:input=move |ev| board.stage_category_name(event_target_value(&ev))
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            board.add_category();
                        }
                    }
                />
                <button class="btn-primary" on:click=move |_| board.add_category()>"Add Category"</button>
            </div>
            <ErrorBanner />
            <For
                each=category_ids
                key=|category_id| *category_id
                children=move |category_id| view! { <CategoryCard category_id=category_id /> }
            />
        </div>
    }
}

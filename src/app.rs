use leptos::prelude::*;
use leptos_router::components::Router;

use crate::pages::Board;

// The router only wraps the page; the board renders at every path
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <h1>"Task Manager"</h1>
                <Board />
            </main>
        </Router>
    }
}

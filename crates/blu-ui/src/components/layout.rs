use leptos::prelude::*;

use crate::components::Nav;

#[component]
pub fn QobuzLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">{children()}</main>
        </div>
    }
}

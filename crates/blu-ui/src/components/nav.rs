use blu_types::routes;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::session::SessionContext;

#[component]
pub fn Nav() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let pathname = use_location().pathname;

    let linkClass = move |prefix: &'static str| {
        move || {
            if pathname.get().starts_with(prefix) {
                "nav-item active"
            } else {
                "nav-item"
            }
        }
    };

    let addAccountHref = format!("{}?{}", routes::LOGIN, routes::ADD_ACCOUNT_PARAM);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let signOut = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let navigate = navigate.clone();
            spawn_local(async move {
                if let Err(e) = crate::session::logout().await {
                    leptos::logging::warn!("qobuz logout failed: {e}");
                }
                session.clear();
                navigate(routes::LOGIN, Default::default());
            });
        }
    };

    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"Q"</div>
                <span class="brand-text">"Qobuz"</span>
            </div>
            <ul class="nav-links">
                <li class=linkClass(routes::BROWSE)>
                    <a href=routes::BROWSE>
                        <span class="nav-icon">"\u{25A3}"</span>
                        <span>"Browse"</span>
                    </a>
                </li>
                <li class=linkClass(routes::SEARCH)>
                    <a href=routes::SEARCH>
                        <span class="nav-icon">"\u{2315}"</span>
                        <span>"Search"</span>
                    </a>
                </li>
            </ul>
            <div class="nav-account">
                {move || {
                    session
                        .current_user()
                        .map(|user| {
                            view! {
                                <div class="account-name">{user.display_name}</div>
                                {user.subscription.map(|plan| view! { <div class="account-plan">{plan}</div> })}
                            }
                        })
                }}
                <a href=addAccountHref class="account-add">"Add another account"</a>
                <button class="btn btn-secondary" on:click=signOut>"Sign out"</button>
            </div>
        </nav>
    }
}

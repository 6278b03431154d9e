use blu_auth::guard::safe_return_url;
use blu_types::routes::{ADD_ACCOUNT_PARAM, RETURN_URL_PARAM};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::session::{Login, SessionContext};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let query = use_query_map();
    let navigate = use_navigate();

    let loginAction = ServerAction::<Login>::new();
    let loginValue = loginAction.value();
    let pending = loginAction.pending();

    let addingAccount = move || query.with(|q| q.get(ADD_ACCOUNT_PARAM).is_some());
    let returnUrl = move || safe_return_url(query.with(|q| q.get(RETURN_URL_PARAM)).as_deref());

    Effect::new(move |_| {
        if let Some(Ok(snapshot)) = loginValue.get() {
            session.apply(snapshot);
            navigate(&returnUrl(), Default::default());
        }
    });

    let errorMessage = move || {
        loginValue
            .get()
            .and_then(|result| result.err())
            .map(|e| e.to_string())
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"Q"</div>
                    <h1>
                        {move || if addingAccount() { "Add a Qobuz account" } else { "Sign in to Qobuz" }}
                    </h1>
                    <p>"Use your Qobuz email and password"</p>
                </div>

                {move || errorMessage().map(|message| view! { <div class="login-error">{message}</div> })}

                <ActionForm action=loginAction>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input type="email" id="email" name="email" autocomplete="username" required />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            required
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </ActionForm>
            </div>
        </div>
    }
}

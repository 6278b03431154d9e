use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            {message}
        </div>
    }
}

#[component]
pub fn ErrorState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-state">
            <p>"Something went wrong talking to Qobuz."</p>
            <p class="error-detail">{message}</p>
        </div>
    }
}

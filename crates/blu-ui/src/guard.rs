use blu_types::GuardOutcome;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::Loading;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    /// Pages that need a verified Qobuz session.
    Auth,
    /// The login page, which signed-in users skip unless adding an account.
    NoAuth,
}

/// Runs an access guard for the current location before rendering `children`.
///
/// The server-side page middleware applies the same guards, so this mainly
/// covers client-side navigation.
#[component]
pub fn Guarded(kind: GuardKind, children: ChildrenFn) -> impl IntoView {
    #[allow(unused_variables)]
    let (outcome, setOutcome) = signal(Option::<GuardOutcome>::None);

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::hooks::use_location;
        use wasm_bindgen_futures::spawn_local;

        let session = expect_context::<crate::session::SessionContext>();
        let location = use_location();

        Effect::new(move |_| {
            let path = location.pathname.get();
            let search = location.search.get();
            setOutcome.set(None);
            spawn_local(async move {
                let result = check(kind, session, &path, &search).await;
                setOutcome.set(Some(result));
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = kind;

    view! {
        {move || match outcome.get() {
            None => view! { <Loading message="Checking your Qobuz session..." /> }.into_any(),
            Some(GuardOutcome::Allow) => children().into_any(),
            Some(GuardOutcome::Redirect(target)) => view! { <Redirect path=target /> }.into_any(),
        }}
    }
}

#[cfg(feature = "hydrate")]
async fn check(
    kind: GuardKind,
    session: crate::session::SessionContext,
    path: &str,
    search: &str,
) -> GuardOutcome {
    use blu_auth::guard::attempted_url;
    use blu_auth::{require_auth, require_no_auth};

    if let Err(e) = session.ensure_loaded().await {
        leptos::logging::warn!("could not load qobuz session: {e}");
        session.clear();
    }

    match kind {
        GuardKind::Auth => require_auth(&session, &attempted_url(path, search)).await,
        GuardKind::NoAuth => require_no_auth(&session, search),
    }
}

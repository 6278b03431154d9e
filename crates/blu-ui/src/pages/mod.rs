pub mod album;
pub mod artist;
pub mod browse;
pub mod discography;
pub mod login;
pub mod playlist;
pub mod search;

use std::future::Future;

use leptos::prelude::*;

pub(crate) type Loaded<T> = Option<Result<T, String>>;

/// Fetches `fetch(key())` in the browser, again whenever `key` changes.
///
/// Stays `None` during server rendering; pages show their loading state until
/// the hydrated client fills it in.
pub(crate) fn use_server_data<K, T, Fut>(
    key: impl Fn() -> K + 'static,
    fetch: impl Fn(K) -> Fut + 'static,
) -> ReadSignal<Loaded<T>>
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ServerFnError>> + 'static,
{
    #[allow(unused_variables)]
    let (data, setData) = signal(Loaded::<T>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        Effect::new(move |_| {
            let pending = fetch(key());
            setData.set(None);
            spawn_local(async move {
                setData.set(Some(pending.await.map_err(|e| e.to_string())));
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, fetch);
    }

    data
}

/// Reads a route parameter, empty when absent.
pub(crate) fn route_param(name: &'static str) -> impl Fn() -> String + Copy + 'static {
    let params = leptos_router::hooks::use_params_map();
    move || params.with(|p| p.get(name)).unwrap_or_default()
}

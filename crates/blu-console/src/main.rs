#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use blu_auth::Account;
    use serde::Deserialize;

    #[derive(Deserialize, Clone, Debug)]
    pub struct Config {
        pub server: ServerConfig,
        pub qobuz: QobuzConfig,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct QobuzConfig {
        /// Base URL the UI's server functions use to reach `/api/qobuz`
        pub api_base: String,
        pub catalog_path: String,
        #[serde(default)]
        pub accounts: Vec<Account>,
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                server: ServerConfig {
                    bind: "0.0.0.0".into(),
                    port: 3000,
                },
                qobuz: QobuzConfig {
                    api_base: "http://127.0.0.1:3000".into(),
                    catalog_path: "catalog.json".into(),
                    accounts: Vec::new(),
                },
            }
        }
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::Router;
    use blu_api::middleware::auth::AppState;
    use blu_auth::AccountRegistry;
    use blu_catalog::{CatalogClient, CatalogStore};
    use blu_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse config path from args
    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: bind={}:{}, qobuz api={}",
        appConfig.server.bind,
        appConfig.server.port,
        appConfig.qobuz.api_base
    );

    let accounts = Arc::new(AccountRegistry::new(appConfig.qobuz.accounts.clone()));
    if accounts.is_empty() {
        tracing::warn!("no qobuz accounts configured, nobody will be able to sign in");
    }

    let catalog = Arc::new(CatalogStore::load(&appConfig.qobuz.catalog_path).await);
    let catalogClient = CatalogClient::new(appConfig.qobuz.api_base.clone());

    let appState = AppState {
        accounts: accounts.clone(),
        catalog,
    };

    // Get Leptos configuration
    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;
    let addr = format!("{}:{}", appConfig.server.bind, appConfig.server.port)
        .parse::<std::net::SocketAddr>()
        .unwrap_or(leptosOptions.site_addr);

    let routes = generate_route_list(App);

    let apiRouter = blu_api::api_router(appState.clone());

    // Server-side copy of the Qobuz page guards, keyed on the session cookies
    let pageAuthLayer = axum::middleware::from_fn_with_state(
        appState,
        blu_api::middleware::auth::require_page_auth,
    );

    // Server functions read the account registry and the catalog client from
    // context; the API router carries its own AppState.
    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            move || {
                provide_context(accounts.clone());
                provide_context(catalogClient.clone());
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(apiRouter)
        .layer(pageAuthLayer)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}

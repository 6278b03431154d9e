use blu_types::routes;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::components::QobuzLayout;
use crate::guard::{GuardKind, Guarded};
use crate::pages::album::AlbumPage;
use crate::pages::artist::ArtistPage;
use crate::pages::browse::BrowsePage;
use crate::pages::discography::DiscographyPage;
use crate::pages::login::LoginPage;
use crate::pages::playlist::PlaylistPage;
use crate::pages::search::SearchPage;
use crate::session::SessionContext;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SessionContext::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/blu-console.css" />
        <Title text="Qobuz \u{00B7} BluOS" />
        <Router>
            <Routes fallback=|| view! { <p>"Page not found."</p> }.into_any()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=routes::ROOT /> } />
                <Route path=StaticSegment("qobuz") view=QobuzRootView />
                <Route path=(StaticSegment("qobuz"), StaticSegment("login")) view=LoginView />
                <Route path=(StaticSegment("qobuz"), StaticSegment("browse")) view=BrowseView />
                <Route path=(StaticSegment("qobuz"), StaticSegment("search")) view=SearchView />
                <Route
                    path=(StaticSegment("qobuz"), StaticSegment("album"), ParamSegment("id"))
                    view=AlbumView
                />
                <Route
                    path=(StaticSegment("qobuz"), StaticSegment("playlist"), ParamSegment("id"))
                    view=PlaylistView
                />
                <Route
                    path=(StaticSegment("qobuz"), StaticSegment("artist"), ParamSegment("id"))
                    view=ArtistView
                />
                <Route
                    path=(
                        StaticSegment("qobuz"),
                        StaticSegment("artist"),
                        ParamSegment("id"),
                        StaticSegment("discography"),
                    )
                    view=DiscographyView
                />
            </Routes>
        </Router>
    }
}

#[component]
fn QobuzRootView() -> impl IntoView {
    view! {
        <Guarded kind=GuardKind::Auth>
            <Redirect path=routes::BROWSE />
        </Guarded>
    }
}

#[component]
fn LoginView() -> impl IntoView {
    view! {
        <Guarded kind=GuardKind::NoAuth>
            <LoginPage />
        </Guarded>
    }
}

#[component]
fn BrowseView() -> impl IntoView {
    view! {
        <Guarded kind=GuardKind::Auth>
            <QobuzLayout>
                <BrowsePage />
            </QobuzLayout>
        </Guarded>
    }
}

#[component]
fn SearchView() -> impl IntoView {
    view! {
        <Guarded kind=GuardKind::Auth>
            <QobuzLayout>
                <SearchPage />
            </QobuzLayout>
        </Guarded>
    }
}

#[component]
fn AlbumView() -> impl IntoView {
    view! {
        <Guarded kind=GuardKind::Auth>
            <QobuzLayout>
                <AlbumPage />
            </QobuzLayout>
        </Guarded>
    }
}

#[component]
fn PlaylistView() -> impl IntoView {
    view! {
        <Guarded kind=GuardKind::Auth>
            <QobuzLayout>
                <PlaylistPage />
            </QobuzLayout>
        </Guarded>
    }
}

#[component]
fn ArtistView() -> impl IntoView {
    view! {
        <Guarded kind=GuardKind::Auth>
            <QobuzLayout>
                <ArtistPage />
            </QobuzLayout>
        </Guarded>
    }
}

#[component]
fn DiscographyView() -> impl IntoView {
    view! {
        <Guarded kind=GuardKind::Auth>
            <QobuzLayout>
                <DiscographyPage />
            </QobuzLayout>
        </Guarded>
    }
}

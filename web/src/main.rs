use std::sync::Arc;

use api::fixtures::SampleTree;
use dioxus::prelude::*;

use ui::charts::world_map::register_geometry_url;
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::stats::Statistic;
use ui::views::{Births, Deaths, Overview, Places};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Overview {},
    #[route("/places")]
    Places {},
    #[route("/births")]
    Births {},
    #[route("/deaths")]
    Deaths {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");
// Simplified excerpt of the Natural Earth admin-0 countries set; a real
// deployment points `register_geometry_url` at the host's full asset.
const WORLD_GEOMETRY: Asset = asset!("/assets/world-map.geojson");

fn nav_overview(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Overview {},
        "{label}"
    })
}
fn nav_places(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Places {},
        "{label}"
    })
}
fn nav_births(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Births {},
        "{label}"
    })
}
fn nav_deaths(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Deaths {},
        "{label}"
    })
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code signal; AppNavbar updates it via context
    // when the user picks another locale.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Canned statistics provider standing in for the host's database-backed
    // repositories.
    let tree = Arc::new(SampleTree);
    use_context_provider(|| Statistic::new(tree.clone(), tree.clone(), tree.clone(), tree));

    // Register localized navigation builder and the bundled world geometry.
    register_nav(NavBuilder {
        overview: nav_overview,
        places: nav_places,
        births: nav_births,
        deaths: nav_deaths,
    });
    register_geometry_url(WORLD_GEOMETRY.to_string());

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        // Keyed wrapper forces a full remount on language change; the hidden
        // marker keeps an explicit reactive dependency on the signal.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}

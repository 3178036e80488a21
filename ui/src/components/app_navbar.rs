use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
/// `AppNavbar` renders localized labels inside each supplied link.
///
/// Setup in a platform crate:
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         overview: |label| rsx!( Link { class: "navbar__link", to: Route::Overview {}, "{label}" } ),
///         places: |label| rsx!( Link { class: "navbar__link", to: Route::Places {}, "{label}" } ),
///         births: |label| rsx!( Link { class: "navbar__link", to: Route::Births {}, "{label}" } ),
///         deaths: |label| rsx!( Link { class: "navbar__link", to: Route::Deaths {}, "{label}" } ),
///     });
/// }
/// ```
///
/// The language selector triggers a re-render via a shared signal; every
/// render pulls fresh localized strings.
pub struct NavBuilder {
    pub overview: fn(label: &str) -> Element,
    pub places: fn(label: &str) -> Element,
    pub births: fn(label: &str) -> Element,
    pub deaths: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, when the platform shell provides one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    // Localized nav links from the registered builder, when present.
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let overview = (b.overview)(&t!("nav-overview"));
        let places = (b.places)(&t!("nav-places"));
        let births = (b.births)(&t!("nav-births"));
        let deaths = (b.deaths)(&t!("nav-deaths"));

        rsx! {
            nav { class: "navbar__links",
                {overview}
                {places}
                {births}
                {deaths}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                // Navigation (internal builder or legacy children)
                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                // Locale switcher
                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("language-switcher-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::charts::{Chart, ChartRequest, DonutOptions};
use crate::core::format;
use crate::stats::Statistic;

/// How many of the most common names each name chart shows.
const TOP_NAMES_LIMIT: usize = 10;

#[component]
pub fn Overview() -> Element {
    let statistic = use_context::<Statistic>();

    // Subscribe to the global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|code| code());

    rsx! {
        section { class: "page statistics-page statistics-overview",
            h1 { {crate::t!("overview-title")} }

            div { class: "statistics-highlights",
                StatTile {
                    label: crate::t!("overview-individuals"),
                    value: statistic.total_individuals(),
                }
                StatTile {
                    label: crate::t!("overview-surnames"),
                    value: statistic.total_surnames(),
                }
                StatTile {
                    label: crate::t!("overview-births"),
                    value: statistic.total_births(),
                }
                StatTile {
                    label: crate::t!("overview-deaths"),
                    value: statistic.total_deaths(),
                }
            }

            div { class: "statistics-charts",
                ChartCard {
                    title: crate::t!("chart-sex-title"),
                    request: ChartRequest::Donut {
                        data: statistic.sex_distribution_data(),
                        options: DonutOptions::default(),
                    },
                }
                ChartCard {
                    title: crate::t!("chart-living-deceased-title"),
                    request: ChartRequest::Donut {
                        data: statistic.living_deceased_data(),
                        options: DonutOptions::default(),
                    },
                }
                ChartCard {
                    title: crate::t!("chart-family-status-title"),
                    request: ChartRequest::Donut {
                        data: statistic.family_status_data(),
                        options: DonutOptions::default(),
                    },
                }
                ChartCard {
                    title: crate::t!("chart-top-surnames-title"),
                    request: ChartRequest::Donut {
                        data: statistic.top_surnames_data(TOP_NAMES_LIMIT),
                        options: DonutOptions::default(),
                    },
                }
                ChartCard {
                    title: crate::t!("chart-given-names-male-title"),
                    request: ChartRequest::Donut {
                        data: statistic.top_male_given_names_data(TOP_NAMES_LIMIT),
                        options: DonutOptions::default(),
                    },
                }
                ChartCard {
                    title: crate::t!("chart-given-names-female-title"),
                    request: ChartRequest::Donut {
                        data: statistic.top_female_given_names_data(TOP_NAMES_LIMIT),
                        options: DonutOptions::default(),
                    },
                }
            }
        }
    }
}

/// One headline number.
#[component]
pub fn StatTile(label: String, value: u64) -> Element {
    rsx! {
        div { class: "statistics-highlight",
            span { class: "statistics-highlight__label", "{label}" }
            strong { class: "statistics-highlight__value", {format::group_thousands(value)} }
        }
    }
}

/// A titled chart block.
#[component]
pub fn ChartCard(title: String, request: ChartRequest) -> Element {
    rsx! {
        div { class: "statistics-chart",
            h2 { class: "statistics-chart__title", "{title}" }
            Chart { request }
        }
    }
}

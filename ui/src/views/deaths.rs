use dioxus::prelude::*;

use crate::charts::{Chart, ChartRequest, DonutOptions, WorldMapOptions};
use crate::stats::Statistic;
use crate::views::overview::{ChartCard, StatTile};
use crate::views::places::deaths_range;

#[component]
pub fn Deaths() -> Element {
    let statistic = use_context::<Statistic>();

    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|code| code());

    rsx! {
        section { class: "page statistics-page statistics-deaths",
            h1 { {crate::t!("deaths-title")} }

            div { class: "statistics-highlights",
                StatTile {
                    label: crate::t!("deaths-total"),
                    value: statistic.total_deaths(),
                }
            }

            div { class: "statistics-charts",
                ChartCard {
                    title: crate::t!("deaths-by-month-title"),
                    request: ChartRequest::Donut {
                        data: statistic.deaths_by_month_data(),
                        options: DonutOptions::default(),
                    },
                }
                ChartCard {
                    title: crate::t!("deaths-map-title"),
                    request: ChartRequest::WorldMap {
                        data: statistic.deaths_by_country(),
                        options: WorldMapOptions {
                            color: deaths_range(),
                            ..Default::default()
                        },
                    },
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::charts::{Chart, ChartRequest, DonutOptions, WorldMapOptions};
use crate::stats::Statistic;
use crate::views::overview::{ChartCard, StatTile};
use crate::views::places::births_range;

#[component]
pub fn Births() -> Element {
    let statistic = use_context::<Statistic>();

    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|code| code());

    rsx! {
        section { class: "page statistics-page statistics-births",
            h1 { {crate::t!("births-title")} }

            div { class: "statistics-highlights",
                StatTile {
                    label: crate::t!("births-total"),
                    value: statistic.total_births(),
                }
            }

            div { class: "statistics-charts",
                ChartCard {
                    title: crate::t!("births-by-month-title"),
                    request: ChartRequest::Donut {
                        data: statistic.births_by_month_data(),
                        options: DonutOptions::default(),
                    },
                }
                ChartCard {
                    title: crate::t!("births-map-title"),
                    request: ChartRequest::WorldMap {
                        data: statistic.births_by_country(),
                        options: WorldMapOptions {
                            color: births_range(),
                            ..Default::default()
                        },
                    },
                }
            }
        }
    }
}

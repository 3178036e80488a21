use dioxus::prelude::*;

use crate::charts::color::{Color, ColorRange};
use crate::charts::{Chart, ChartRequest, WorldMapOptions};
use crate::stats::Statistic;
use crate::views::overview::ChartCard;

#[component]
pub fn Places() -> Element {
    let statistic = use_context::<Statistic>();

    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|code| code());

    rsx! {
        section { class: "page statistics-page statistics-places",
            h1 { {crate::t!("places-title")} }

            ChartCard {
                title: crate::t!("places-births-map-title"),
                request: ChartRequest::WorldMap {
                    data: statistic.births_by_country(),
                    options: WorldMapOptions {
                        color: births_range(),
                        ..Default::default()
                    },
                },
            }
            ChartCard {
                title: crate::t!("places-deaths-map-title"),
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

pub(crate) fn births_range() -> ColorRange {
    ColorRange::default()
}

pub(crate) fn deaths_range() -> ColorRange {
    ColorRange {
        start: Color::new(255, 255, 255),
        end: Color::new(183, 28, 28),
    }
}

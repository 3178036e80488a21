//! The donut chart component.

use api::ChartDatum;
use dioxus::events::MountedEvent;
use dioxus::prelude::*;

use crate::charts::dimensions::{self, Dimensions, SizeOptions};
use crate::core::format;

use super::layout;

const DONUT_DEFAULTS: Dimensions = Dimensions::new(250.0, 250.0);
const DEFAULT_MARGIN: f64 = 1.0;

/// Presentation options of a donut chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonutOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Margin around the ring, defaults to 1.
    pub margin: Option<f64>,
    /// Inner radius override; defaults to a thin ring.
    pub hole_size: Option<f64>,
}

impl DonutOptions {
    fn size(&self) -> SizeOptions {
        SizeOptions {
            width: self.width,
            height: self.height,
        }
    }
}

/// Renders `data` as a ring of proportional slices, in input order.
///
/// Each slice carries the `slice` class plus the datum's own class, an
/// explicit fill when the datum supplies one, and a hover title of the form
/// `"label: value"`. Empty datasets render an empty chart.
#[component]
pub fn DonutChart(data: Vec<ChartDatum>, options: DonutOptions) -> Element {
    let mut measured = use_signal(|| Option::<Dimensions>::None);

    let resolved = dimensions::resolve(DONUT_DEFAULTS, options.size(), measured());
    let size = resolved.width.min(resolved.height);
    let half = size / 2.0;
    let margin = options.margin.unwrap_or(DEFAULT_MARGIN);
    let outer_radius = (size / 2.0).floor() - margin;
    let inner_radius = layout::hole_size(outer_radius, options.hole_size);

    let values: Vec<f64> = data.iter().map(|datum| datum.value as f64).collect();
    let segments = layout::pie_layout(&values, layout::pad_angle_for(outer_radius));

    rsx! {
        figure {
            class: "chart-container",
            onmounted: move |event: MountedEvent| async move {
                if let Ok(rect) = event.data().get_client_rect().await {
                    if rect.size.width > 0.0 || rect.size.height > 0.0 {
                        measured.set(Some(Dimensions::new(rect.size.width, rect.size.height)));
                    }
                }
            },
            svg {
                class: "donutChart",
                width: "{size}",
                height: "{size}",
                view_box: "{-half} {-half} {size} {size}",
                style: "max-width: 100%; height: auto;",
                g {
                    for (datum, segment) in data.iter().zip(segments.iter()) {
                        path {
                            key: "{segment.index}",
                            class: slice_class(datum),
                            d: layout::annular_sector_path(outer_radius, inner_radius, segment),
                            fill: datum.fill.clone(),
                            title { {format::slice_title(&datum.label, datum.value)} }
                        }
                    }
                }
            }
        }
    }
}

fn slice_class(datum: &ChartDatum) -> String {
    match &datum.css_class {
        Some(extra) => format!("slice {extra}"),
        None => "slice".to_string(),
    }
}

//! The world map chart component.
//!
//! The SVG root renders synchronously; country paths appear once the
//! geometry resource resolves. Callers must treat the returned element as
//! live, not as a final snapshot.

use api::CountryDatum;
use dioxus::events::{MountedEvent, PointerEvent, TouchEvent};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::warn;

use crate::charts::color::ColorRange;
use crate::charts::dimensions::{self, Dimensions, SizeOptions};
use crate::core::{format, net};
use crate::t;

use super::geometry::WorldMapModel;
use super::hover::{HoverState, TooltipLayout, TRANSITION_MS};

const MAP_DEFAULTS: Dimensions = Dimensions::new(900.0, 510.0);

/// Asset route the host serves the world geometry from.
pub const DEFAULT_GEOMETRY_URL: &str = "/assets/world-map.geojson";

static GEOMETRY_URL: OnceCell<String> = OnceCell::new();

/// Platform shells register the location of their bundled geometry asset
/// once at startup; maps created afterwards use it as their default URL.
/// Individual charts can still override per instance via
/// [`WorldMapOptions::geometry_url`].
pub fn register_geometry_url<T: Into<String>>(url: T) {
    let _ = GEOMETRY_URL.set(url.into());
}

fn default_geometry_url() -> String {
    GEOMETRY_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_GEOMETRY_URL.to_string())
}

/// Presentation options of a world map chart.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldMapOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Endpoint colors of the count scale.
    pub color: ColorRange,
    pub geometry_url: String,
}

impl Default for WorldMapOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            color: ColorRange::default(),
            geometry_url: default_geometry_url(),
        }
    }
}

impl WorldMapOptions {
    fn size(&self) -> SizeOptions {
        SizeOptions {
            width: self.width,
            height: self.height,
        }
    }
}

/// Renders per-country counts as a choropleth world map with a hover
/// tooltip. A failed geometry fetch leaves the map empty and is logged;
/// nothing propagates to the caller.
#[component]
pub fn WorldMap(data: Vec<CountryDatum>, options: WorldMapOptions) -> Element {
    let mut measured = use_signal(|| Option::<Dimensions>::None);
    let mut origin = use_signal(|| (0.0f64, 0.0f64));
    let mut hover = use_signal(HoverState::default);
    let mut pointer = use_signal(|| (0.0f64, 0.0f64));

    let geometry_url = options.geometry_url.clone();
    let geometry = use_resource(move || {
        let url = geometry_url.clone();
        async move {
            net::fetch_feature_collection(&url).await.map_err(|err| {
                warn!("world map geometry unavailable, rendering empty map: {err}");
            })
        }
    });

    let area = dimensions::resolve(MAP_DEFAULTS, options.size(), measured());

    // Pending or failed geometry keeps the country group empty.
    let shapes = match &*geometry.read() {
        Some(Ok(collection)) => WorldMapModel::new(collection, &data, options.color).shapes(area),
        _ => Vec::new(),
    };

    let state = hover();
    let (pointer_x, pointer_y) = pointer();

    let country_paths = shapes.iter().enumerate().map(|(index, shape)| {
        let has_count = shape.count.is_some();
        let on_pointer = move |event: PointerEvent| {
            let client = event.data().client_coordinates();
            let (origin_x, origin_y) = origin();
            pointer.set((client.x - origin_x, client.y - origin_y));
            hover.with_mut(|state| state.pointer_over(index, has_count));
        };

        rsx! {
            path {
                key: "{index}",
                class: "country",
                d: shape.path.clone(),
                fill: shape.fill.clone(),
                opacity: "{state.opacity_for(index)}",
                style: "transition: opacity {TRANSITION_MS}ms;",
                onpointerenter: on_pointer,
                onpointermove: on_pointer,
                onpointerleave: move |_| hover.with_mut(|state| state.pointer_leave()),
                ontouchstart: move |event: TouchEvent| event.prevent_default(),
            }
        }
    });

    let tooltip = state
        .hovered()
        .and_then(|index| shapes.get(index))
        .and_then(|shape| {
            shape.count.map(|count| {
                let title = shape.label.clone().unwrap_or_default();
                let detail = t!("map-tooltip-total", count = format::group_thousands(count));
                (title, detail)
            })
        })
        .map(|(title, detail)| {
            let layout = TooltipLayout::measure(&title, &detail);
            let shift = -layout.rect_height / 2.0;

            rsx! {
                g {
                    class: "tooltip-geo-map",
                    transform: "translate({pointer_x}, {pointer_y})",
                    rect {
                        rx: "5",
                        ry: "5",
                        x: "20",
                        y: "0",
                        transform: "translate(0, {shift})",
                        width: "{layout.rect_width}",
                        height: "{layout.rect_height}",
                        fill: "white",
                        stroke: "#ccc",
                        stroke_width: "1",
                    }
                    text {
                        tspan { x: "25", y: "0", font_weight: "bold", "{title}" }
                        tspan { x: "25", y: "0", dy: "1.25em", "{detail}" }
                    }
                }
            }
        });

    rsx! {
        figure {
            class: "chart-container chart-container--map",
            onmounted: move |event: MountedEvent| async move {
                if let Ok(rect) = event.data().get_client_rect().await {
                    origin.set((rect.origin.x, rect.origin.y));
                    if rect.size.width > 0.0 || rect.size.height > 0.0 {
                        measured.set(Some(Dimensions::new(rect.size.width, rect.size.height)));
                    }
                }
            },
            svg {
                class: "geoMap",
                width: "{area.width}",
                height: "{area.height}",
                view_box: "0 0 {area.width} {area.height}",
                style: "max-width: 100%; height: auto;",
                g {
                    {country_paths}
                    {tooltip}
                }
            }
        }
    }
}

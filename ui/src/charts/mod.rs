//! The charting layer: a donut chart, a choropleth world map, and the
//! facade dispatching between them.

pub mod color;
pub mod dimensions;
pub mod donut;
pub mod world_map;

use std::str::FromStr;

use api::{ChartDatum, CountryDatum};
use dioxus::prelude::*;
use thiserror::Error;

pub use donut::{DonutChart, DonutOptions};
pub use world_map::{WorldMap, WorldMapOptions};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("unsupported chart type `{0}`")]
    UnsupportedType(String),
    #[error("invalid color `{0}`")]
    InvalidColor(String),
}

/// The chart type discriminator, for configuration arriving as strings
/// from the host. Unknown names are an explicit error, not a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Donut,
    WorldMap,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Donut => "donut",
            ChartKind::WorldMap => "world-map",
        }
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "donut" => Ok(ChartKind::Donut),
            "world-map" => Ok(ChartKind::WorldMap),
            other => Err(ChartError::UnsupportedType(other.to_string())),
        }
    }
}

/// A fully-specified draw request: the chart type together with the data
/// and options that type understands. Cross-type option mixups are
/// unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartRequest {
    Donut {
        data: Vec<ChartDatum>,
        options: DonutOptions,
    },
    WorldMap {
        data: Vec<CountryDatum>,
        options: WorldMapOptions,
    },
}

/// Dispatches a draw request to the matching chart component.
#[component]
pub fn Chart(request: ChartRequest) -> Element {
    match request {
        ChartRequest::Donut { data, options } => rsx! {
            DonutChart { data, options }
        },
        ChartRequest::WorldMap { data, options } => rsx! {
            WorldMap { data, options }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_parse() {
        assert_eq!("donut".parse::<ChartKind>().unwrap(), ChartKind::Donut);
        assert_eq!(
            "world-map".parse::<ChartKind>().unwrap(),
            ChartKind::WorldMap
        );
    }

    #[test]
    fn unknown_kind_is_an_explicit_error() {
        let err = "bar-chart".parse::<ChartKind>().unwrap_err();
        assert_eq!(err, ChartError::UnsupportedType("bar-chart".to_string()));
        assert_eq!(err.to_string(), "unsupported chart type `bar-chart`");
    }

    #[test]
    fn kind_round_trips_through_its_name() {
        for kind in [ChartKind::Donut, ChartKind::WorldMap] {
            assert_eq!(kind.as_str().parse::<ChartKind>().unwrap(), kind);
        }
    }
}

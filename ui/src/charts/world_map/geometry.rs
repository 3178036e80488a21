//! World geometry intake and the country-code join.

use std::collections::HashMap;
use std::convert::TryInto;

use api::CountryDatum;
use geo_types::Geometry;
use geojson::FeatureCollection;
use tracing::debug;

use crate::charts::color::{ColorRange, LinearColorScale, NO_DATA_FILL};
use crate::charts::dimensions::Dimensions;

use super::projection::{self, Mercator};

/// Property carrying the two-letter country code in the geometry asset
/// (Natural Earth admin-0 naming).
pub const COUNTRY_CODE_PROPERTY: &str = "ISO_A2_EH";

/// Antarctica is excluded from the rendered feature set.
pub const ANTARCTICA_CODE: &str = "AQ";

/// One country outline, optionally carrying the joined statistics row.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryFeature {
    pub code: Option<String>,
    pub geometry: Geometry<f64>,
    pub datum: Option<CountryDatum>,
}

/// Everything needed to draw one country path.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryShape {
    pub path: String,
    pub fill: String,
    pub label: Option<String>,
    pub count: Option<u64>,
}

/// The joined, render-ready map state for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldMapModel {
    features: Vec<CountryFeature>,
    scale: LinearColorScale,
}

impl WorldMapModel {
    /// Builds the model for one render pass: takes the polygonal features
    /// of `collection` minus Antarctica, attaches each data row to every
    /// feature sharing its country code, and prepares the color scale over
    /// the dataset's maximum count.
    pub fn new(collection: &FeatureCollection, data: &[CountryDatum], range: ColorRange) -> Self {
        let mut features = intake(collection);
        join(&mut features, data);

        let scale = LinearColorScale::from_counts(data.iter().map(|datum| datum.count), range);

        Self { features, scale }
    }

    pub fn features(&self) -> &[CountryFeature] {
        &self.features
    }

    pub fn scale(&self) -> &LinearColorScale {
        &self.scale
    }

    /// Projects every feature into `area` and derives its fill.
    pub fn shapes(&self, area: Dimensions) -> Vec<CountryShape> {
        let projection =
            Mercator::fit_size(area, self.features.iter().map(|feature| &feature.geometry));

        self.features
            .iter()
            .map(|feature| self.shape(feature, &projection))
            .collect()
    }

    fn shape(&self, feature: &CountryFeature, projection: &Mercator) -> CountryShape {
        let count = feature.datum.as_ref().map(|datum| datum.count);
        let fill = match count {
            Some(count) => self.scale.color_at(count as f64).to_css(),
            None => NO_DATA_FILL.to_string(),
        };

        CountryShape {
            path: projection::path_d(&feature.geometry, projection),
            fill,
            label: feature.datum.as_ref().map(|datum| datum.label.clone()),
            count,
        }
    }
}

/// Converts the feature collection into country features, dropping
/// Antarctica, features without polygonal geometry, and anything whose
/// geometry fails conversion.
fn intake(collection: &FeatureCollection) -> Vec<CountryFeature> {
    collection
        .features
        .iter()
        .filter_map(|feature| {
            let code = feature
                .properties
                .as_ref()
                .and_then(|properties| properties.get(COUNTRY_CODE_PROPERTY))
                .and_then(|value| value.as_str())
                .map(str::to_string);

            if code.as_deref() == Some(ANTARCTICA_CODE) {
                return None;
            }

            let geometry: Geometry<f64> = feature
                .geometry
                .as_ref()
                .and_then(|geometry| geometry.value.clone().try_into().ok())?;

            match geometry {
                Geometry::Polygon(_) | Geometry::MultiPolygon(_) => Some(CountryFeature {
                    code,
                    geometry,
                    datum: None,
                }),
                _ => None,
            }
        })
        .collect()
}

/// Attaches each data row to all features with a matching code, through a
/// single keyed pass instead of rescanning the feature list per row. Rows
/// without any matching geometry are dropped.
fn join(features: &mut [CountryFeature], data: &[CountryDatum]) {
    let mut by_code: HashMap<String, Vec<usize>> = HashMap::new();
    for (index, feature) in features.iter().enumerate() {
        if let Some(code) = feature.code.as_deref() {
            by_code.entry(code.to_string()).or_default().push(index);
        }
    }

    for datum in data {
        match by_code.get(datum.country_code.as_str()) {
            Some(indices) => {
                for &index in indices {
                    features[index].datum = Some(datum.clone());
                }
            }
            None => {
                debug!(
                    country_code = datum.country_code.as_str(),
                    "dropping statistics row without matching geometry"
                );
            }
        }
    }
}

//! Loading of the world geometry resource.
//!
//! On the web the geometry is an HTTP GET against a host-provided asset
//! route. Native shells and tests read the same payload from disk instead,
//! so no network is involved there.

use geojson::{FeatureCollection, GeoJson};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("geometry request failed: {0}")]
    Fetch(String),
    #[error("failed to read geometry file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid geometry payload: {0}")]
    Decode(#[from] geojson::Error),
    #[error("geometry payload is not a feature collection")]
    NotAFeatureCollection,
}

/// Fetches and decodes the world geometry. Errors are reported to the
/// caller as a value; nothing is thrown across the rendering boundary.
pub async fn fetch_feature_collection(url: &str) -> Result<FeatureCollection, GeometryError> {
    let body = fetch_text(url).await?;
    parse_feature_collection(&body)
}

/// Decodes a GeoJSON feature collection from raw text.
pub fn parse_feature_collection(body: &str) -> Result<FeatureCollection, GeometryError> {
    match body.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        _ => Err(GeometryError::NotAFeatureCollection),
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, GeometryError> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|err| GeometryError::Fetch(err.to_string()))?;

    if !response.ok() {
        return Err(GeometryError::Fetch(format!(
            "unexpected status {} for {url}",
            response.status()
        )));
    }

    response
        .text()
        .await
        .map_err(|err| GeometryError::Fetch(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(url: &str) -> Result<String, GeometryError> {
    Ok(std::fs::read_to_string(url)?)
}

pub mod geometry;
pub mod hover;
pub mod projection;
mod view;

pub use geometry::{CountryShape, WorldMapModel};
pub use view::{register_geometry_url, WorldMap, WorldMapOptions, DEFAULT_GEOMETRY_URL};

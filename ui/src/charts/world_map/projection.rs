//! Spherical Mercator projection fitted to a drawing area, and the
//! conversion of projected country outlines into SVG path strings.

use std::f64::consts::FRAC_PI_4;
use std::fmt::Write;

use geo_types::{Coord, Geometry, LineString, Polygon};

use crate::charts::dimensions::Dimensions;

/// Latitudes beyond this collapse into the Mercator singularity.
const MAX_LATITUDE: f64 = 85.05113;

/// A Mercator projection scaled and translated so a given feature set
/// exactly covers the requested drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mercator {
    scale: f64,
    translate: (f64, f64),
}

/// Unit projection: longitude/latitude in degrees to unscaled plane
/// coordinates, y growing downwards.
fn raw(coord: Coord<f64>) -> (f64, f64) {
    let lambda = coord.x.to_radians();
    let phi = coord.y.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    (lambda, -(FRAC_PI_4 + phi / 2.0).tan().ln())
}

impl Mercator {
    /// Fits the projection to `area` over all coordinates of `geometries`,
    /// mirroring the fit-to-size behavior of common mapping toolkits: the
    /// projected bounding box is scaled uniformly to the limiting axis and
    /// centered on the other.
    pub fn fit_size<'a, I>(area: Dimensions, geometries: I) -> Self
    where
        I: IntoIterator<Item = &'a Geometry<f64>>,
    {
        let mut min = (f64::INFINITY, f64::INFINITY);
        let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);

        for geometry in geometries {
            for_each_coord(geometry, &mut |coord| {
                let (x, y) = raw(coord);
                min.0 = min.0.min(x);
                min.1 = min.1.min(y);
                max.0 = max.0.max(x);
                max.1 = max.1.max(y);
            });
        }

        let extent_x = max.0 - min.0;
        let extent_y = max.1 - min.1;

        if !(extent_x > 0.0) || !(extent_y > 0.0) {
            // No coordinates at all; render at unit scale, centered.
            return Self {
                scale: 1.0,
                translate: (area.width / 2.0, area.height / 2.0),
            };
        }

        let scale = (area.width / extent_x).min(area.height / extent_y);
        let translate = (
            (area.width - scale * (min.0 + max.0)) / 2.0,
            (area.height - scale * (min.1 + max.1)) / 2.0,
        );

        Self { scale, translate }
    }

    pub fn project(&self, coord: Coord<f64>) -> (f64, f64) {
        let (x, y) = raw(coord);
        (self.scale * x + self.translate.0, self.scale * y + self.translate.1)
    }
}

fn for_each_coord(geometry: &Geometry<f64>, visit: &mut impl FnMut(Coord<f64>)) {
    match geometry {
        Geometry::Polygon(polygon) => each_polygon_coord(polygon, visit),
        Geometry::MultiPolygon(multi) => {
            for polygon in &multi.0 {
                each_polygon_coord(polygon, visit);
            }
        }
        _ => {}
    }
}

fn each_polygon_coord(polygon: &Polygon<f64>, visit: &mut impl FnMut(Coord<f64>)) {
    for coord in &polygon.exterior().0 {
        visit(*coord);
    }
    for interior in polygon.interiors() {
        for coord in &interior.0 {
            visit(*coord);
        }
    }
}

/// SVG path of a projected polygon or multipolygon. Non-area geometries
/// produce an empty path.
pub fn path_d(geometry: &Geometry<f64>, projection: &Mercator) -> String {
    let mut d = String::new();

    match geometry {
        Geometry::Polygon(polygon) => write_polygon(&mut d, polygon, projection),
        Geometry::MultiPolygon(multi) => {
            for polygon in &multi.0 {
                write_polygon(&mut d, polygon, projection);
            }
        }
        _ => {}
    }

    d
}

fn write_polygon(d: &mut String, polygon: &Polygon<f64>, projection: &Mercator) {
    write_ring(d, polygon.exterior(), projection);
    for interior in polygon.interiors() {
        write_ring(d, interior, projection);
    }
}

fn write_ring(d: &mut String, ring: &LineString<f64>, projection: &Mercator) {
    let coords = &ring.0;
    if coords.is_empty() {
        return;
    }

    // GeoJSON rings repeat the first coordinate at the end; `Z` closes.
    let closed = coords.len() > 1 && coords.first() == coords.last();
    let emit = if closed {
        &coords[..coords.len() - 1]
    } else {
        &coords[..]
    };

    for (i, coord) in emit.iter().enumerate() {
        let (x, y) = projection.project(*coord);
        let command = if i == 0 { 'M' } else { 'L' };
        write!(d, "{command}{x:.2},{y:.2}").expect("writing to a String cannot fail");
    }

    d.push('Z');
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::polygon;

    fn square(min: f64, max: f64) -> Geometry<f64> {
        Geometry::Polygon(polygon![
            (x: min, y: min),
            (x: max, y: min),
            (x: max, y: max),
            (x: min, y: max),
            (x: min, y: min),
        ])
    }

    #[test]
    fn fitted_projection_keeps_coordinates_inside_the_area() {
        let area = Dimensions::new(900.0, 510.0);
        let geometries = [square(-60.0, 60.0)];
        let projection = Mercator::fit_size(area, geometries.iter());

        for lon in [-60.0, 0.0, 60.0] {
            for lat in [-60.0, 0.0, 60.0] {
                let (x, y) = projection.project(Coord { x: lon, y: lat });
                assert!((-1e-6..=area.width + 1e-6).contains(&x), "x = {x}");
                assert!((-1e-6..=area.height + 1e-6).contains(&y), "y = {y}");
            }
        }
    }

    #[test]
    fn fitted_extent_touches_the_limiting_axis() {
        let area = Dimensions::new(900.0, 510.0);
        let geometries = [square(-60.0, 60.0)];
        let projection = Mercator::fit_size(area, geometries.iter());

        // The square is taller than wide once Mercator-stretched, so the
        // vertical axis limits the fit.
        let (_, top) = projection.project(Coord { x: 0.0, y: 60.0 });
        let (_, bottom) = projection.project(Coord { x: 0.0, y: -60.0 });
        assert!(top.abs() < 1e-6);
        assert!((bottom - area.height).abs() < 1e-6);
    }

    #[test]
    fn north_maps_above_south() {
        let area = Dimensions::new(900.0, 510.0);
        let geometries = [square(-60.0, 60.0)];
        let projection = Mercator::fit_size(area, geometries.iter());

        let (_, y_north) = projection.project(Coord { x: 0.0, y: 50.0 });
        let (_, y_south) = projection.project(Coord { x: 0.0, y: -50.0 });
        assert!(y_north < y_south);
    }

    #[test]
    fn empty_feature_set_does_not_panic() {
        let projection = Mercator::fit_size(Dimensions::new(100.0, 100.0), std::iter::empty());
        let (x, y) = projection.project(Coord { x: 0.0, y: 0.0 });
        assert!((x - 50.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn ring_paths_are_closed_and_skip_the_duplicate_endpoint() {
        let area = Dimensions::new(100.0, 100.0);
        let geometry = square(-10.0, 10.0);
        let projection = Mercator::fit_size(area, std::iter::once(&geometry));

        let d = path_d(&geometry, &projection);
        assert!(d.starts_with('M'));
        assert!(d.ends_with('Z'));
        // Four distinct corners: one M plus three L commands.
        assert_eq!(d.matches('L').count(), 3);
    }
}

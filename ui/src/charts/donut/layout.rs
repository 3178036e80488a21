//! Pie partitioning and arc path generation for the donut chart.
//!
//! Slice order is strictly the input order; the full circle is divided
//! proportionally to each value with a small angular gap between adjacent
//! slices. The gap angle is `1 / outer_radius`, which keeps the visual gap
//! roughly constant in pixels across chart sizes.

use std::f64::consts::TAU;
use std::fmt::Write;

/// Angular extent of one slice, pad included in `[start_angle, end_angle]`.
/// Angle zero points at twelve o'clock, increasing clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub pad_angle: f64,
}

impl ArcSegment {
    /// Angular span actually filled by the slice, pad removed.
    pub fn sweep(&self) -> f64 {
        (self.end_angle - self.start_angle - self.pad_angle).max(0.0)
    }
}

/// Pad angle used for a donut of the given outer radius.
pub fn pad_angle_for(outer_radius: f64) -> f64 {
    1.0 / outer_radius
}

/// Inner radius, either the explicit override or a thin ring one tenth of
/// the outer radius wide.
pub fn hole_size(outer_radius: f64, option: Option<f64>) -> f64 {
    option.unwrap_or(outer_radius - outer_radius / 10.0)
}

/// Partitions the full circle among `values`, preserving order and never
/// sorting. Non-positive values produce zero-sweep segments; an all-zero
/// input degenerates to pure pad gaps without failing.
pub fn pie_layout(values: &[f64], pad_angle: f64) -> Vec<ArcSegment> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let pad = pad_angle.max(0.0).min(TAU / n as f64);
    let sum: f64 = values.iter().copied().filter(|value| *value > 0.0).sum();
    let k = if sum > 0.0 {
        (TAU - n as f64 * pad) / sum
    } else {
        0.0
    };

    let mut start = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let span = if value > 0.0 { value * k } else { 0.0 };
            let end = start + span + pad;
            let segment = ArcSegment {
                index,
                value,
                start_angle: start,
                end_angle: end,
                pad_angle: pad,
            };
            start = end;
            segment
        })
        .collect()
}

fn point(angle: f64, radius: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// SVG path of one annular sector between `inner_radius` and `outer_radius`.
/// Returns an empty path for zero-sweep segments.
pub fn annular_sector_path(outer_radius: f64, inner_radius: f64, segment: &ArcSegment) -> String {
    let half_pad = segment.pad_angle / 2.0;
    let mut a0 = segment.start_angle + half_pad;
    let mut a1 = segment.end_angle - half_pad;

    if a1 < a0 {
        let mid = (a0 + a1) / 2.0;
        a0 = mid;
        a1 = mid;
    }

    let sweep = a1 - a0;
    if sweep <= 1e-9 {
        return String::new();
    }

    if sweep >= TAU - 1e-6 {
        return annulus_path(outer_radius, inner_radius);
    }

    let large = u8::from(sweep > std::f64::consts::PI);
    let (x0, y0) = point(a0, outer_radius);
    let (x1, y1) = point(a1, outer_radius);

    let mut d = String::new();
    write!(
        d,
        "M{x0:.2},{y0:.2} A{outer_radius:.2},{outer_radius:.2} 0 {large} 1 {x1:.2},{y1:.2}"
    )
    .expect("writing to a String cannot fail");

    if inner_radius > 0.0 {
        let (xi1, yi1) = point(a1, inner_radius);
        let (xi0, yi0) = point(a0, inner_radius);
        write!(
            d,
            " L{xi1:.2},{yi1:.2} A{inner_radius:.2},{inner_radius:.2} 0 {large} 0 {xi0:.2},{yi0:.2} Z"
        )
        .expect("writing to a String cannot fail");
    } else {
        d.push_str(" L0.00,0.00 Z");
    }

    d
}

/// A full ring, drawn as two half arcs per radius so the sweep is
/// well-defined; the inner subpath runs counter-clockwise to cut the hole.
fn annulus_path(outer_radius: f64, inner_radius: f64) -> String {
    let ring = |radius: f64, sweep_flag: u8| {
        format!(
            "M0.00,{top:.2} A{r:.2},{r:.2} 0 1 {sweep_flag} 0.00,{bottom:.2} A{r:.2},{r:.2} 0 1 {sweep_flag} 0.00,{top:.2}",
            top = -radius,
            bottom = radius,
            r = radius,
        )
    };

    if inner_radius > 0.0 {
        format!("{} {} Z", ring(outer_radius, 1), ring(inner_radius, 0))
    } else {
        format!("{} Z", ring(outer_radius, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hole_defaults_to_nine_tenths_of_outer() {
        assert_eq!(hole_size(100.0, None), 90.0);
        assert_eq!(hole_size(100.0, Some(40.0)), 40.0);
    }

    #[test]
    fn slices_keep_insertion_order_and_proportions() {
        let segments = pie_layout(&[1.0, 3.0], 0.0);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].index, 0);
        assert_eq!(segments[0].start_angle, 0.0);
        assert!(segments[0].end_angle <= segments[1].start_angle + 1e-12);

        let ratio = segments[1].sweep() / segments[0].sweep();
        assert!((ratio - 3.0).abs() < 1e-9);
    }

    #[test]
    fn proportions_hold_with_pad_angle() {
        let pad = pad_angle_for(124.0);
        let segments = pie_layout(&[1.0, 3.0], pad);

        let ratio = segments[1].sweep() / segments[0].sweep();
        assert!((ratio - 3.0).abs() < 1e-9);

        let total: f64 = segments.iter().map(|s| s.sweep() + s.pad_angle).sum();
        assert!((total - TAU).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(pie_layout(&[], 0.01).is_empty());
    }

    #[test]
    fn all_zero_values_yield_degenerate_segments() {
        let segments = pie_layout(&[0.0, 0.0, 0.0], 0.01);

        assert_eq!(segments.len(), 3);
        for segment in &segments {
            assert_eq!(segment.sweep(), 0.0);
            assert!(annular_sector_path(100.0, 90.0, segment).is_empty());
        }
    }

    #[test]
    fn single_value_fills_the_full_ring() {
        let segments = pie_layout(&[5.0], 0.0);
        let d = annular_sector_path(100.0, 90.0, &segments[0]);

        // Two subpaths: outer ring clockwise, inner ring counter-clockwise.
        assert_eq!(d.matches('M').count(), 2);
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn sector_path_connects_outer_and_inner_radii() {
        let segments = pie_layout(&[1.0, 1.0], 0.0);
        let d = annular_sector_path(100.0, 90.0, &segments[0]);

        assert!(d.starts_with("M0.00,-100.00"));
        assert!(d.contains("A100.00,100.00"));
        assert!(d.contains("A90.00,90.00"));
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn zero_inner_radius_produces_a_pie_slice() {
        let segments = pie_layout(&[1.0, 1.0], 0.0);
        let d = annular_sector_path(100.0, 0.0, &segments[0]);
        assert!(d.contains("L0.00,0.00"));
    }
}

//! Color parsing and the linear two-color scale used by the world map.

use super::ChartError;

/// Fill used for countries without any data attached.
pub const NO_DATA_FILL: &str = "rgb(245, 245, 245)";

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Accepts `#rrggbb`, `rrggbb` and `rgb(r, g, b)` notations.
    pub fn parse(value: &str) -> Result<Self, ChartError> {
        let value = value.trim();

        if let Some(body) = value
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let mut channels = body.split(',').map(str::trim);
            let mut next = || {
                channels
                    .next()
                    .and_then(|part| part.parse::<u8>().ok())
                    .ok_or_else(|| ChartError::InvalidColor(value.to_string()))
            };

            let r = next()?;
            let g = next()?;
            let b = next()?;
            return Ok(Self::new(r, g, b));
        }

        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ChartError::InvalidColor(value.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ChartError::InvalidColor(value.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Channel-wise linear interpolation towards `other`, `t` clamped to [0, 1].
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;

        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// The two endpoint colors of a map's value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange {
    pub start: Color,
    pub end: Color,
}

impl Default for ColorRange {
    fn default() -> Self {
        // White towards the module's signature light blue.
        Self {
            start: Color::new(255, 255, 255),
            end: Color::new(132, 190, 255),
        }
    }
}

/// Linear scale mapping `[0, domain_max]` onto a [`ColorRange`].
///
/// A degenerate domain (empty data, or a maximum of zero) collapses every
/// input to the range's start color instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearColorScale {
    domain_max: f64,
    range: ColorRange,
}

impl LinearColorScale {
    pub fn new(domain_max: f64, range: ColorRange) -> Self {
        Self { domain_max, range }
    }

    /// Scale over the maximum count of `data`, zero when empty.
    pub fn from_counts<I: IntoIterator<Item = u64>>(counts: I, range: ColorRange) -> Self {
        let max = counts.into_iter().max().unwrap_or(0);
        Self::new(max as f64, range)
    }

    pub fn color_at(&self, value: f64) -> Color {
        if self.domain_max <= 0.0 {
            return self.range.start;
        }

        self.range.start.lerp(self.range.end, value / self.domain_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_rgb_notations() {
        assert_eq!(Color::parse("#84beff").unwrap(), Color::new(132, 190, 255));
        assert_eq!(Color::parse("84beff").unwrap(), Color::new(132, 190, 255));
        assert_eq!(
            Color::parse("rgb(245, 245, 245)").unwrap(),
            Color::new(245, 245, 245)
        );
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(Color::parse("#84be").is_err());
        assert!(Color::parse("rgb(1, 2)").is_err());
        assert!(Color::parse("rgb(300, 0, 0)").is_err());
        assert!(Color::parse("blue").is_err());
    }

    #[test]
    fn lerp_hits_both_endpoints() {
        let start = Color::new(0, 0, 0);
        let end = Color::new(200, 100, 50);

        assert_eq!(start.lerp(end, 0.0), start);
        assert_eq!(start.lerp(end, 1.0), end);
        assert_eq!(start.lerp(end, 0.5), Color::new(100, 50, 25));
    }

    #[test]
    fn degenerate_domain_collapses_to_start() {
        let scale = LinearColorScale::from_counts([], ColorRange::default());
        assert_eq!(scale.color_at(5.0), ColorRange::default().start);

        let scale = LinearColorScale::new(0.0, ColorRange::default());
        assert_eq!(scale.color_at(123.0), ColorRange::default().start);
    }

    #[test]
    fn scale_interpolates_linearly_over_domain() {
        let range = ColorRange {
            start: Color::new(0, 0, 0),
            end: Color::new(100, 100, 100),
        };
        let scale = LinearColorScale::new(10.0, range);

        assert_eq!(scale.color_at(0.0), range.start);
        assert_eq!(scale.color_at(5.0), Color::new(50, 50, 50));
        assert_eq!(scale.color_at(10.0), range.end);
        // Values above the domain clamp to the end color.
        assert_eq!(scale.color_at(40.0), range.end);
    }
}

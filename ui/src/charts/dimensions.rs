//! Resolution of the drawing area a chart renders into.

/// Effective width and height of a chart, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Explicit size overrides carried in the chart options.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Resolves the drawing area from the chart defaults, the options, and the
/// measured extent of the surrounding container.
///
/// Per axis, highest precedence wins: a positive measured container extent,
/// then a positive explicit option, then the default. This lets the host
/// page's CSS size charts responsively while hidden or zero-size containers
/// still get a usable area.
pub fn resolve(defaults: Dimensions, options: SizeOptions, measured: Option<Dimensions>) -> Dimensions {
    let mut width = defaults.width;
    let mut height = defaults.height;

    if let Some(value) = options.width.filter(|value| *value > 0.0) {
        width = value;
    }

    if let Some(value) = options.height.filter(|value| *value > 0.0) {
        height = value;
    }

    if let Some(rect) = measured {
        if rect.width > 0.0 {
            width = rect.width;
        }
        if rect.height > 0.0 {
            height = rect.height;
        }
    }

    Dimensions { width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: Dimensions = Dimensions::new(250.0, 250.0);

    #[test]
    fn measured_container_wins_over_options() {
        let resolved = resolve(
            DEFAULTS,
            SizeOptions {
                width: Some(400.0),
                height: Some(400.0),
            },
            Some(Dimensions::new(620.0, 310.0)),
        );

        assert_eq!(resolved, Dimensions::new(620.0, 310.0));
    }

    #[test]
    fn options_apply_when_container_reports_zero() {
        let resolved = resolve(
            DEFAULTS,
            SizeOptions {
                width: Some(400.0),
                height: None,
            },
            Some(Dimensions::new(0.0, 0.0)),
        );

        assert_eq!(resolved, Dimensions::new(400.0, 250.0));
    }

    #[test]
    fn defaults_apply_without_container_or_options() {
        let resolved = resolve(DEFAULTS, SizeOptions::default(), None);
        assert_eq!(resolved, DEFAULTS);
    }

    #[test]
    fn axes_resolve_independently() {
        let resolved = resolve(
            DEFAULTS,
            SizeOptions {
                width: None,
                height: Some(180.0),
            },
            Some(Dimensions::new(500.0, 0.0)),
        );

        assert_eq!(resolved, Dimensions::new(500.0, 180.0));
    }

    #[test]
    fn non_positive_options_are_ignored() {
        let resolved = resolve(
            DEFAULTS,
            SizeOptions {
                width: Some(-10.0),
                height: Some(0.0),
            },
            None,
        );

        assert_eq!(resolved, DEFAULTS);
    }
}

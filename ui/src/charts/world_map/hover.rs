//! Pointer-driven hover state of a world map instance.
//!
//! The state is re-derived entirely from pointer events and holds no
//! invariant beyond "at most one feature highlighted at a time". Features
//! without a joined count ignore pointer traffic.

/// Duration of the opacity transition when highlight changes.
pub const TRANSITION_MS: u32 = 100;

/// Opacity of the non-highlighted countries while one is hovered.
pub const DIMMED_OPACITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering {
        index: usize,
    },
}

impl HoverState {
    /// Pointer entered or moved over the feature at `index`. Features
    /// without data leave the state untouched, whatever it was.
    pub fn pointer_over(&mut self, index: usize, has_count: bool) {
        if has_count {
            *self = HoverState::Hovering { index };
        }
    }

    /// Pointer left the map. Safe to call from any state.
    pub fn pointer_leave(&mut self) {
        *self = HoverState::Idle;
    }

    pub fn hovered(&self) -> Option<usize> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering { index } => Some(*index),
        }
    }

    /// Opacity of the feature at `index` under the current state.
    pub fn opacity_for(&self, index: usize) -> f64 {
        match self.hovered() {
            Some(hovered) if hovered != index => DIMMED_OPACITY,
            _ => 1.0,
        }
    }
}

/// Size of the tooltip's backing rectangle around its two text lines.
///
/// Text extents are estimated from heuristic per-glyph advances; precise
/// glyph measurement is not available until the text is in the document,
/// and the estimate only has to fit a short label comfortably.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipLayout {
    pub text_width: f64,
    pub text_height: f64,
    pub rect_width: f64,
    pub rect_height: f64,
}

const FONT_SIZE: f64 = 16.0;
const LINE_SPACING_EM: f64 = 1.25;
const RECT_PADDING: f64 = 10.0;
const AVG_ADVANCE: f64 = 0.50;
const AVG_ADVANCE_BOLD: f64 = 0.56;

impl TooltipLayout {
    /// Layout for a bold title line above a regular detail line.
    pub fn measure(title: &str, detail: &str) -> Self {
        let title_width = title.chars().count() as f64 * FONT_SIZE * AVG_ADVANCE_BOLD;
        let detail_width = detail.chars().count() as f64 * FONT_SIZE * AVG_ADVANCE;

        let text_width = title_width.max(detail_width);
        let text_height = FONT_SIZE * (1.0 + LINE_SPACING_EM);

        Self {
            text_width,
            text_height,
            rect_width: text_width + RECT_PADDING,
            rect_height: text_height + RECT_PADDING,
        }
    }
}

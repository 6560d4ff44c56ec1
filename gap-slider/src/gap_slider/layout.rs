use glam::Vec2;

use super::RangeState;

/// Default width of each thumb, in pixels.
pub const DEFAULT_THUMB_WIDTH: f32 = 44.0;

/// An axis-aligned rectangle in control-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent, never negative.
    pub width: f32,
    /// Vertical extent, never negative.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle, flooring negative extents at zero.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Left edge.
    pub fn min_x(&self) -> f32 {
        self.x
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half-open containment: the left and top edges are inside, the right
    /// and bottom edges are not.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.max_x() && point.y >= self.y && point.y < self.max_y()
    }
}

/// Size of the area the slider is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Track width in pixels.
    pub width: f32,
    /// Control height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The control's full bounds.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Resolved geometry of the three draggable regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapSliderLayout {
    /// Full bounds of the control.
    pub bounds: Rect,
    /// Left thumb, anchored at its left edge to the lower bound.
    pub left_thumb: Rect,
    /// Right thumb, anchored at its right edge to the upper bound.
    pub right_thumb: Rect,
    /// Gap between the thumbs.
    pub center: Rect,
    /// Selected range including both thumbs; the hole in the dimmed overlay.
    pub selection: Rect,
}

/// Maps `value` to a fraction of the value range. Degenerate ranges map
/// everything to the start of the track.
pub(crate) fn value_fraction(state: &RangeState, value: f32) -> f32 {
    let span = state.span();
    if span > 0.0 {
        (value - state.minimum) / span
    } else {
        0.0
    }
}

/// Minimum distance between the bounds in value units: both thumb widths
/// expressed as a share of the track.
pub(crate) fn min_gap(state: &RangeState, thumb_width: f32, track_width: f32) -> f32 {
    if track_width <= 0.0 {
        return 0.0;
    }
    state.span() * (thumb_width * 2.0) / track_width
}

pub(crate) fn compute_layout(
    state: &RangeState,
    viewport: Viewport,
    thumb_width: f32,
) -> GapSliderLayout {
    let bounds = viewport.bounds();
    let height = bounds.height;

    let left_x = value_fraction(state, state.lower) * bounds.width;
    let right_max_x = value_fraction(state, state.upper) * bounds.width;

    let left_thumb = Rect::new(left_x, 0.0, thumb_width, height);
    let right_thumb = Rect::new(right_max_x - thumb_width, 0.0, thumb_width, height);
    let center = Rect::new(
        left_thumb.max_x(),
        0.0,
        right_thumb.min_x() - left_thumb.max_x(),
        height,
    );
    let selection = Rect::new(
        left_thumb.min_x(),
        0.0,
        right_thumb.max_x() - left_thumb.min_x(),
        height,
    );

    GapSliderLayout {
        bounds,
        left_thumb,
        right_thumb,
        center,
        selection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(lower: f32, upper: f32, minimum: f32, maximum: f32) -> RangeState {
        RangeState {
            lower,
            upper,
            minimum,
            maximum,
        }
    }

    #[test]
    fn thumbs_follow_bounds() {
        let layout = compute_layout(&state(0.2, 0.8, 0.0, 1.0), Viewport::new(500.0, 40.0), 44.0);
        assert_eq!(layout.left_thumb, Rect::new(100.0, 0.0, 44.0, 40.0));
        assert_eq!(layout.right_thumb, Rect::new(356.0, 0.0, 44.0, 40.0));
        assert_eq!(layout.center, Rect::new(144.0, 0.0, 212.0, 40.0));
        assert_eq!(layout.selection, Rect::new(100.0, 0.0, 300.0, 40.0));
        assert_eq!(layout.bounds, Rect::new(0.0, 0.0, 500.0, 40.0));
    }

    #[test]
    fn positions_scale_with_value_range() {
        let layout = compute_layout(&state(25.0, 75.0, 0.0, 100.0), Viewport::new(400.0, 10.0), 20.0);
        assert_eq!(layout.left_thumb.min_x(), 100.0);
        assert_eq!(layout.right_thumb.max_x(), 300.0);

        let shifted = compute_layout(&state(15.0, 20.0, 10.0, 20.0), Viewport::new(100.0, 10.0), 10.0);
        assert_eq!(shifted.left_thumb.min_x(), 50.0);
        assert_eq!(shifted.right_thumb.max_x(), 100.0);
    }

    #[test]
    fn overlapping_thumbs_leave_empty_center() {
        let layout = compute_layout(&state(0.5, 0.5, 0.0, 1.0), Viewport::new(100.0, 10.0), 20.0);
        assert_eq!(layout.center.width, 0.0);
        assert_eq!(layout.selection.width, 0.0);
    }

    #[test]
    fn degenerate_range_pins_to_start() {
        let s = state(3.0, 3.0, 3.0, 3.0);
        assert_eq!(value_fraction(&s, 3.0), 0.0);
        assert_eq!(min_gap(&s, 44.0, 200.0), 0.0);
    }

    #[test]
    fn min_gap_in_value_units() {
        assert_eq!(min_gap(&state(0.0, 1.0, 0.0, 1.0), 25.0, 500.0), 0.1);
        assert_eq!(min_gap(&state(0.0, 10.0, 0.0, 10.0), 25.0, 500.0), 1.0);
        assert_eq!(min_gap(&state(0.0, 1.0, 0.0, 1.0), 25.0, 0.0), 0.0);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(10.0, 0.0)));
        assert!(rect.contains(Vec2::new(19.9, 9.9)));
        assert!(!rect.contains(Vec2::new(20.0, 5.0)));
        assert!(!rect.contains(Vec2::new(15.0, 10.0)));
        assert_eq!(rect.center(), Vec2::new(15.0, 5.0));
    }
}

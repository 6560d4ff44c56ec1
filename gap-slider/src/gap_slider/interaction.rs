use glam::Vec2;

use super::{DragRegion, GapSliderLayout, RangeState};

/// Pointer input understood by [`super::GapSliderController::handle_pointer_event`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer went down at a control-local position.
    Pressed(Vec2),
    /// Pointer moved while down.
    Moved(Vec2),
    /// Pointer went up.
    Released,
    /// The platform cancelled the gesture.
    Cancelled,
}

/// Ephemeral state of one continuous drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct DragSession {
    pub region: DragRegion,
    pub last_pointer_x: f32,
}

/// Resolves which region, if any, lies under `point`.
///
/// Regions are tested in priority order left thumb, right thumb, center, so a
/// point never resolves to more than one of them.
pub fn hit_test(point: Vec2, layout: &GapSliderLayout) -> DragRegion {
    if layout.left_thumb.contains(point) {
        DragRegion::Left
    } else if layout.right_thumb.contains(point) {
        DragRegion::Right
    } else if layout.center.contains(point) {
        DragRegion::Center
    } else {
        DragRegion::None
    }
}

/// Converts a horizontal pointer movement into value units.
pub(super) fn value_delta(state: &RangeState, delta_x: f32, track_width: f32) -> f32 {
    if track_width <= 0.0 {
        return 0.0;
    }
    state.span() * delta_x / track_width
}

/// Computes the state after dragging `region` by `delta` value units.
///
/// Returns `None` for [`DragRegion::None`]. Thumb drags apply the track edge
/// first and the gap edge last, so the gap edge wins when caller-supplied state
/// leaves the two inverted; unlike `f32::clamp` this never panics.
pub(super) fn drag_step(
    state: RangeState,
    region: DragRegion,
    delta: f32,
    min_gap: f32,
) -> Option<RangeState> {
    let next = match region {
        DragRegion::None => return None,
        DragRegion::Left => RangeState {
            lower: (state.lower + delta)
                .max(state.minimum)
                .min(state.upper - min_gap),
            ..state
        },
        DragRegion::Right => RangeState {
            upper: (state.upper + delta)
                .min(state.maximum)
                .max(state.lower + min_gap),
            ..state
        },
        DragRegion::Center => scroll_range(state, delta),
    };
    Some(next)
}

/// Moves both bounds by the same amount, clamping the shift rather than the
/// bounds so `upper - lower` is unchanged.
fn scroll_range(state: RangeState, delta: f32) -> RangeState {
    let mut shift = delta;
    if state.lower + shift < state.minimum {
        shift = state.minimum - state.lower;
    }
    if state.upper + shift > state.maximum {
        shift = state.maximum - state.upper;
    }
    RangeState {
        lower: state.lower + shift,
        upper: state.upper + shift,
        ..state
    }
}

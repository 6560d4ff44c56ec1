//! A dual-handle range slider whose selected range can also be dragged as a
//! whole.
//!
//! ## Usage
//!
//! Feed pointer input into a [`GapSliderController`] and read the bounds back,
//! or subscribe to the change callbacks on [`GapSliderArgs`].
//!
//! ```
//! use gap_slider::{DragRegion, GapSliderArgs, GapSliderController, GapSliderEvent};
//!
//! let mut slider = GapSliderController::new(
//!     GapSliderArgs::default()
//!         .width(500.0)
//!         .thumb_width(25.0)
//!         .lower_value(0.2)
//!         .upper_value(0.8),
//! )?;
//!
//! assert!(slider.begin_drag(100.0, DragRegion::Left));
//! assert_eq!(slider.continue_drag(150.0), Some(GapSliderEvent::LeftChanged));
//! slider.end_drag();
//!
//! assert!((slider.lower() - 0.3).abs() < 1e-6);
//! # Ok::<(), gap_slider::GapSliderError>(())
//! ```
use derive_setters::Setters;
use glam::Vec2;

use crate::{
    CallbackWith, GapSliderError, GapSliderStyle,
    error::{ensure_finite, ensure_size},
};

use interaction::{DragSession, drag_step, value_delta};
use layout::{Viewport, compute_layout};

pub use interaction::{PointerEvent, hit_test};
pub use layout::{DEFAULT_THUMB_WIDTH, GapSliderLayout, Rect};
pub use render::{
    MeshRenderer, MeshVertex, NullRenderer, SliderMesh, SliderRenderError, SliderRenderer,
    SliderScene, tessellate_scene,
};

mod interaction;
mod layout;
mod render;

/// One of the three draggable regions, or none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragRegion {
    /// No region; the pointer is not claimed by the slider.
    #[default]
    None,
    /// The thumb bound to the lower value.
    Left,
    /// The thumb bound to the upper value.
    Right,
    /// The gap between the thumbs; moves both bounds together.
    Center,
}

impl DragRegion {
    /// The notification a drag of this region emits.
    pub fn event(self) -> Option<GapSliderEvent> {
        match self {
            DragRegion::None => None,
            DragRegion::Left => Some(GapSliderEvent::LeftChanged),
            DragRegion::Right => Some(GapSliderEvent::RightChanged),
            DragRegion::Center => Some(GapSliderEvent::RangeScrolled),
        }
    }
}

/// Change notification emitted by one drag step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GapSliderEvent {
    /// The lower bound was dragged.
    LeftChanged,
    /// The upper bound was dragged.
    RightChanged,
    /// The whole range was dragged.
    RangeScrolled,
}

/// The slider's numeric state.
///
/// Drags keep `minimum <= lower <= upper <= maximum`. The raw setters on
/// [`GapSliderController`] do not; callers using them own the invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeState {
    /// Lower bound of the selected range.
    pub lower: f32,
    /// Upper bound of the selected range.
    pub upper: f32,
    /// Smallest selectable value.
    pub minimum: f32,
    /// Largest selectable value.
    pub maximum: f32,
}

impl RangeState {
    /// Creates a validated state.
    pub fn new(lower: f32, upper: f32, minimum: f32, maximum: f32) -> Result<Self, GapSliderError> {
        let state = Self {
            lower: ensure_finite("lower", lower)?,
            upper: ensure_finite("upper", upper)?,
            minimum: ensure_finite("minimum", minimum)?,
            maximum: ensure_finite("maximum", maximum)?,
        };
        if minimum > maximum {
            return Err(GapSliderError::InvertedRange { minimum, maximum });
        }
        if !state.is_ordered() {
            return Err(GapSliderError::BoundsOutOfOrder {
                lower,
                upper,
                minimum,
                maximum,
            });
        }
        Ok(state)
    }

    /// Width of the value range.
    pub fn span(&self) -> f32 {
        self.maximum - self.minimum
    }

    /// Width of the selected range.
    pub fn selection(&self) -> f32 {
        self.upper - self.lower
    }

    /// Returns `true` when `minimum <= lower <= upper <= maximum`.
    pub fn is_ordered(&self) -> bool {
        self.minimum <= self.lower && self.lower <= self.upper && self.upper <= self.maximum
    }
}

impl Default for RangeState {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
            minimum: 0.0,
            maximum: 1.0,
        }
    }
}

/// Arguments for [`GapSliderController`].
#[derive(Clone, PartialEq, Setters)]
pub struct GapSliderArgs {
    /// Smallest selectable value.
    pub minimum_value: f32,
    /// Largest selectable value.
    pub maximum_value: f32,
    /// Initial lower bound.
    pub lower_value: f32,
    /// Initial upper bound.
    pub upper_value: f32,
    /// Visual style handed to the renderer.
    pub style: GapSliderStyle,
    /// Width of each thumb in pixels. Together the two thumbs define the
    /// minimum distance between the bounds.
    pub thumb_width: f32,
    /// Initial track width in pixels.
    pub width: f32,
    /// Initial control height in pixels.
    pub height: f32,
    /// Called after a drag moved the lower bound.
    #[setters(skip)]
    pub on_left_change: CallbackWith<RangeState>,
    /// Called after a drag moved the upper bound.
    #[setters(skip)]
    pub on_right_change: CallbackWith<RangeState>,
    /// Called after a drag moved the whole range.
    #[setters(skip)]
    pub on_scroll: CallbackWith<RangeState>,
}

impl GapSliderArgs {
    /// Sets the handler for lower bound drags.
    pub fn on_left_change<F>(mut self, on_left_change: F) -> Self
    where
        F: Fn(RangeState) + Send + Sync + 'static,
    {
        self.on_left_change = CallbackWith::new(on_left_change);
        self
    }

    /// Sets the handler for upper bound drags.
    pub fn on_right_change<F>(mut self, on_right_change: F) -> Self
    where
        F: Fn(RangeState) + Send + Sync + 'static,
    {
        self.on_right_change = CallbackWith::new(on_right_change);
        self
    }

    /// Sets the handler for whole-range drags.
    pub fn on_scroll<F>(mut self, on_scroll: F) -> Self
    where
        F: Fn(RangeState) + Send + Sync + 'static,
    {
        self.on_scroll = CallbackWith::new(on_scroll);
        self
    }
}

impl Default for GapSliderArgs {
    fn default() -> Self {
        let state = RangeState::default();
        Self {
            minimum_value: state.minimum,
            maximum_value: state.maximum,
            lower_value: state.lower,
            upper_value: state.upper,
            style: GapSliderStyle::default(),
            thumb_width: DEFAULT_THUMB_WIDTH,
            width: 320.0,
            height: 44.0,
            on_left_change: CallbackWith::default(),
            on_right_change: CallbackWith::default(),
            on_scroll: CallbackWith::default(),
        }
    }
}

/// Owns the slider's values and turns pointer samples into bound updates.
///
/// Every mutation commits a whole new [`RangeState`], recomputes the layout,
/// hands the resulting [`SliderScene`] to the renderer and only then fires the
/// matching callback, so observers never see a half-applied drag.
pub struct GapSliderController<R = NullRenderer> {
    state: RangeState,
    style: GapSliderStyle,
    thumb_width: f32,
    viewport: Viewport,
    layout: GapSliderLayout,
    session: Option<DragSession>,
    on_left_change: CallbackWith<RangeState>,
    on_right_change: CallbackWith<RangeState>,
    on_scroll: CallbackWith<RangeState>,
    renderer: R,
}

impl GapSliderController {
    /// Creates a controller that does not draw anything.
    pub fn new(args: GapSliderArgs) -> Result<Self, GapSliderError> {
        Self::with_renderer(args, NullRenderer)
    }
}

impl<R: SliderRenderer> GapSliderController<R> {
    /// Creates a controller drawing through `renderer`. The first scene is
    /// rendered before this returns.
    pub fn with_renderer(args: GapSliderArgs, renderer: R) -> Result<Self, GapSliderError> {
        let validated = RangeState::new(
            args.lower_value,
            args.upper_value,
            args.minimum_value,
            args.maximum_value,
        )
        .and_then(|state| {
            let thumb_width = ensure_size("thumb_width", args.thumb_width)?;
            let viewport = Viewport::new(
                ensure_size("width", args.width)?,
                ensure_size("height", args.height)?,
            );
            Ok((state, thumb_width, viewport))
        });
        let (state, thumb_width, viewport) =
            validated.inspect_err(|err| tracing::warn!("rejected gap slider args: {err}"))?;

        let mut controller = Self {
            state,
            style: args.style,
            thumb_width,
            viewport,
            layout: compute_layout(&state, viewport, thumb_width),
            session: None,
            on_left_change: args.on_left_change,
            on_right_change: args.on_right_change,
            on_scroll: args.on_scroll,
            renderer,
        };
        controller.relayout();
        Ok(controller)
    }

    /// Current values.
    pub fn state(&self) -> RangeState {
        self.state
    }

    /// Lower bound of the selected range.
    pub fn lower(&self) -> f32 {
        self.state.lower
    }

    /// Upper bound of the selected range.
    pub fn upper(&self) -> f32 {
        self.state.upper
    }

    /// Smallest selectable value.
    pub fn minimum(&self) -> f32 {
        self.state.minimum
    }

    /// Largest selectable value.
    pub fn maximum(&self) -> f32 {
        self.state.maximum
    }

    /// Minimum distance thumb drags keep between the bounds, in value units.
    pub fn min_gap(&self) -> f32 {
        layout::min_gap(&self.state, self.thumb_width, self.viewport.width)
    }

    /// Current style.
    pub fn style(&self) -> &GapSliderStyle {
        &self.style
    }

    /// Geometry of the three regions for the current state and viewport.
    pub fn layout(&self) -> &GapSliderLayout {
        &self.layout
    }

    /// The scene last handed to the renderer.
    pub fn scene(&self) -> SliderScene {
        SliderScene {
            state: self.state,
            layout: self.layout,
            style: self.style,
        }
    }

    /// The renderer this controller draws through.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Region of the active drag, [`DragRegion::None`] between gestures.
    pub fn active_region(&self) -> DragRegion {
        self.session
            .map_or(DragRegion::None, |session| session.region)
    }

    /// Returns `true` while a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Sets the lower bound as is. No clamping against the upper bound.
    pub fn set_lower(&mut self, value: f32) {
        self.commit(RangeState {
            lower: value,
            ..self.state
        });
    }

    /// Sets the upper bound as is. No clamping against the lower bound.
    pub fn set_upper(&mut self, value: f32) {
        self.commit(RangeState {
            upper: value,
            ..self.state
        });
    }

    /// Sets the smallest selectable value as is.
    pub fn set_minimum(&mut self, value: f32) {
        self.commit(RangeState {
            minimum: value,
            ..self.state
        });
    }

    /// Sets the largest selectable value as is.
    pub fn set_maximum(&mut self, value: f32) {
        self.commit(RangeState {
            maximum: value,
            ..self.state
        });
    }

    /// Replaces the value range, rejecting ranges that are inverted or do not
    /// contain the current bounds. The state is unchanged on error.
    pub fn set_range(&mut self, minimum: f32, maximum: f32) -> Result<(), GapSliderError> {
        let next = RangeState::new(self.state.lower, self.state.upper, minimum, maximum)?;
        self.commit(next);
        Ok(())
    }

    /// Replaces both bounds at once, rejecting out-of-order values. The state
    /// is unchanged on error.
    pub fn set_values(&mut self, lower: f32, upper: f32) -> Result<(), GapSliderError> {
        let next = RangeState::new(lower, upper, self.state.minimum, self.state.maximum)?;
        self.commit(next);
        Ok(())
    }

    /// Updates the viewport and recomputes the layout. Negative sizes are
    /// treated as zero.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width.max(0.0), height.max(0.0));
        self.relayout();
    }

    /// Replaces the style. Geometry is not recomputed.
    pub fn set_style(&mut self, style: GapSliderStyle) {
        self.style = style;
        self.renderer.apply_style(&self.style);
    }

    /// Starts a drag of `region` at `pointer_x`.
    ///
    /// Returns `false`, leaving everything untouched, when `region` is
    /// [`DragRegion::None`] or another drag is already in progress.
    pub fn begin_drag(&mut self, pointer_x: f32, region: DragRegion) -> bool {
        if region == DragRegion::None {
            tracing::debug!(pointer_x, "pointer down outside slider regions");
            return false;
        }
        if let Some(active) = self.session {
            tracing::debug!(active = ?active.region, "ignoring pointer down during active drag");
            return false;
        }
        self.session = Some(DragSession {
            region,
            last_pointer_x: pointer_x,
        });
        tracing::debug!(?region, pointer_x, "drag started");
        true
    }

    /// Hit-tests `point` against the current layout and starts a drag of the
    /// region under it.
    pub fn begin_drag_at(&mut self, point: Vec2) -> bool {
        let region = hit_test(point, &self.layout);
        self.begin_drag(point.x, region)
    }

    /// Moves the active region by the pointer's horizontal travel since the
    /// last sample and returns the notification that fired, if any.
    pub fn continue_drag(&mut self, pointer_x: f32) -> Option<GapSliderEvent> {
        let session = self.session.as_mut()?;
        let travel = pointer_x - session.last_pointer_x;
        session.last_pointer_x = pointer_x;
        let region = session.region;

        let event = region.event()?;
        let delta = value_delta(&self.state, travel, self.viewport.width);
        let next = drag_step(self.state, region, delta, self.min_gap())?;
        tracing::trace!(?region, delta, lower = next.lower, upper = next.upper, "drag step");

        self.commit(next);
        self.notify(event);
        Some(event)
    }

    /// Ends the active drag. Does nothing between gestures.
    pub fn end_drag(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(region = ?session.region, "drag ended");
        }
    }

    /// Routes one pointer event through the drag state machine. Returns
    /// whether the slider claimed the event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Pressed(point) => self.begin_drag_at(point),
            PointerEvent::Moved(point) => self.continue_drag(point.x).is_some(),
            PointerEvent::Released | PointerEvent::Cancelled => {
                let claimed = self.is_dragging();
                self.end_drag();
                claimed
            }
        }
    }

    fn commit(&mut self, next: RangeState) {
        self.state = next;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout = compute_layout(&self.state, self.viewport, self.thumb_width);
        let scene = self.scene();
        self.renderer.render(&scene);
    }

    fn notify(&self, event: GapSliderEvent) {
        let callback = match event {
            GapSliderEvent::LeftChanged => &self.on_left_change,
            GapSliderEvent::RightChanged => &self.on_right_change,
            GapSliderEvent::RangeScrolled => &self.on_scroll,
        };
        callback.call(self.state);
    }
}

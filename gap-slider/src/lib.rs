//! A dual-handle range slider with a draggable gap.
//!
//! The crate owns the value and gesture model of the control: two thumbs that
//! bound a selected range, and the gap between them, which drags the whole
//! range. Drawing is delegated to a [`SliderRenderer`]; [`MeshRenderer`]
//! tessellates each frame into colored triangles.
//!
//! # Example
//!
//! ```
//! use gap_slider::{GapSliderArgs, GapSliderController, MeshRenderer, PointerEvent};
//! use glam::Vec2;
//!
//! let mut slider = GapSliderController::with_renderer(
//!     GapSliderArgs::default()
//!         .width(400.0)
//!         .lower_value(0.25)
//!         .upper_value(0.75)
//!         .on_scroll(|state| println!("scrolled to {}..{}", state.lower, state.upper)),
//!     MeshRenderer::new(),
//! )?;
//!
//! // Grab the gap and drag it 40 px to the right.
//! slider.handle_pointer_event(PointerEvent::Pressed(Vec2::new(200.0, 22.0)));
//! slider.handle_pointer_event(PointerEvent::Moved(Vec2::new(240.0, 22.0)));
//! slider.handle_pointer_event(PointerEvent::Released);
//!
//! assert!((slider.lower() - 0.35).abs() < 1e-6);
//! assert!(!slider.renderer().mesh().indices.is_empty());
//! # Ok::<(), gap_slider::GapSliderError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod callback;
mod error;

pub mod color;
pub mod gap_slider;
pub mod style;

pub use callback::CallbackWith;
pub use color::Color;
pub use error::GapSliderError;
pub use gap_slider::{
    DEFAULT_THUMB_WIDTH, DragRegion, GapSliderArgs, GapSliderController, GapSliderEvent,
    GapSliderLayout, MeshRenderer, MeshVertex, NullRenderer, PointerEvent, RangeState, Rect,
    SliderMesh, SliderRenderError, SliderRenderer, SliderScene, hit_test, tessellate_scene,
};
pub use style::{GapSliderStyle, ThumbStyle};

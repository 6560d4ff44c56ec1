//! Scene description and lyon-based tessellation for the gap slider.
//!
//! The controller hands a [`SliderScene`] to its [`SliderRenderer`] after
//! every mutation. [`MeshRenderer`] turns scenes into one indexed triangle
//! list that any GPU backend can upload as is.

use bytemuck::{Pod, Zeroable};
use lyon_path::{
    Path, Winding,
    builder::BorderRadii,
    math::{Box2D, point},
};
use lyon_tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, LineCap, LineJoin, StrokeOptions,
    StrokeTessellator, StrokeVertex, VertexBuffers,
};
use thiserror::Error;

use super::{GapSliderLayout, RangeState, layout::Rect};
use crate::{Color, GapSliderStyle, ThumbStyle};

const GLYPH_STROKE_WIDTH: f32 = 2.0;

/// Errors that can occur while tessellating a scene.
#[derive(Debug, Error)]
pub enum SliderRenderError {
    /// Tessellation of the path geometry failed.
    #[error("tessellation error: {0}")]
    Tessellation(#[from] lyon_tessellation::TessellationError),
}

/// Everything a renderer needs to draw one frame of the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderScene {
    /// Values the geometry was computed from.
    pub state: RangeState,
    /// Resolved region geometry.
    pub layout: GapSliderLayout,
    /// Colors and thumb shape.
    pub style: GapSliderStyle,
}

/// Receives scenes and style changes from the controller.
pub trait SliderRenderer {
    /// Draws the scene. Called after every state, range or viewport change.
    fn render(&mut self, scene: &SliderScene);

    /// Re-applies a new style to what was last drawn. Geometry is unchanged.
    fn apply_style(&mut self, style: &GapSliderStyle) {
        let _ = style;
    }
}

/// Renderer that draws nothing. Used when the host only needs the values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl SliderRenderer for NullRenderer {
    fn render(&mut self, _scene: &SliderScene) {}
}

/// A tessellated vertex with its fill color.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct MeshVertex {
    /// Control-local position in pixels.
    pub position: [f32; 2],
    /// Straight-alpha fill color.
    pub color: Color,
}

/// Indexed triangle list for one frame, in draw order.
pub type SliderMesh = VertexBuffers<MeshVertex, u32>;

/// Tessellates `scene` into triangles.
///
/// Draw order is background, dimmed overlay, thumbs, thumb glyphs. The
/// overlay covers the bounds minus the selected range using the even-odd
/// fill rule.
pub fn tessellate_scene(scene: &SliderScene) -> Result<SliderMesh, SliderRenderError> {
    let mut mesh = SliderMesh::new();
    let layout = &scene.layout;
    let style = &scene.style;

    if !style.background_color.is_transparent() {
        let mut builder = Path::builder();
        builder.add_rectangle(&to_box(&layout.bounds), Winding::Positive);
        fill_path(&mut mesh, &builder.build(), style.background_color, FillOptions::non_zero())?;
    }

    if !style.tint_color.is_transparent() {
        let mut builder = Path::builder();
        builder.add_rectangle(&to_box(&layout.bounds), Winding::Positive);
        if layout.selection.width > 0.0 {
            builder.add_rectangle(&to_box(&layout.selection), Winding::Positive);
        }
        fill_path(&mut mesh, &builder.build(), style.tint_color, FillOptions::even_odd())?;
    }

    for thumb in [&layout.left_thumb, &layout.right_thumb] {
        if thumb.width <= 0.0 || thumb.height <= 0.0 {
            continue;
        }
        let mut builder = Path::builder();
        if style.corner_radius > 0.0 {
            builder.add_rounded_rectangle(
                &to_box(thumb),
                &BorderRadii::new(style.corner_radius),
                Winding::Positive,
            );
        } else {
            builder.add_rectangle(&to_box(thumb), Winding::Positive);
        }
        fill_path(&mut mesh, &builder.build(), style.foreground_color, FillOptions::non_zero())?;
    }

    if let Some(left) = glyph_path(style.thumb_style, &layout.left_thumb, -1.0) {
        stroke_path(&mut mesh, &left, style.tint_color)?;
    }
    if let Some(right) = glyph_path(style.thumb_style, &layout.right_thumb, 1.0) {
        stroke_path(&mut mesh, &right, style.tint_color)?;
    }

    Ok(mesh)
}

fn to_box(rect: &Rect) -> Box2D {
    Box2D::new(point(rect.x, rect.y), point(rect.max_x(), rect.max_y()))
}

/// Glyph outline for one thumb. `direction` is -1 for the left thumb so its
/// arrow points away from the selection.
fn glyph_path(style: ThumbStyle, thumb: &Rect, direction: f32) -> Option<Path> {
    if thumb.width <= 0.0 || thumb.height <= 0.0 {
        return None;
    }
    let center = thumb.center();
    let mut builder = Path::builder();
    match style {
        ThumbStyle::None => return None,
        ThumbStyle::Line => {
            let half = thumb.height * 0.2;
            builder.begin(point(center.x, center.y - half));
            builder.line_to(point(center.x, center.y + half));
            builder.end(false);
        }
        ThumbStyle::Arrow => {
            let reach = (thumb.height * 0.15).min(thumb.width * 0.25);
            let back = center.x - direction * reach / 2.0;
            builder.begin(point(back, center.y - reach));
            builder.line_to(point(center.x + direction * reach / 2.0, center.y));
            builder.line_to(point(back, center.y + reach));
            builder.end(false);
        }
    }
    Some(builder.build())
}

fn fill_path(
    mesh: &mut SliderMesh,
    path: &Path,
    color: Color,
    options: FillOptions,
) -> Result<(), SliderRenderError> {
    FillTessellator::new().tessellate_path(
        path,
        &options,
        &mut BuffersBuilder::new(mesh, |vertex: FillVertex| MeshVertex {
            position: vertex.position().to_array(),
            color,
        }),
    )?;
    Ok(())
}

fn stroke_path(mesh: &mut SliderMesh, path: &Path, color: Color) -> Result<(), SliderRenderError> {
    let options = StrokeOptions::default()
        .with_line_width(GLYPH_STROKE_WIDTH)
        .with_line_cap(LineCap::Round)
        .with_line_join(LineJoin::Round);

    StrokeTessellator::new().tessellate_path(
        path,
        &options,
        &mut BuffersBuilder::new(mesh, |vertex: StrokeVertex| MeshVertex {
            position: vertex.position().to_array(),
            color,
        }),
    )?;
    Ok(())
}

/// Renderer that keeps the tessellated mesh of the latest scene.
pub struct MeshRenderer {
    mesh: SliderMesh,
    last_scene: Option<SliderScene>,
}

impl Default for MeshRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshRenderer {
    /// Creates a renderer with an empty mesh.
    pub fn new() -> Self {
        Self {
            mesh: SliderMesh::new(),
            last_scene: None,
        }
    }

    /// The mesh of the last successfully tessellated scene.
    pub fn mesh(&self) -> &SliderMesh {
        &self.mesh
    }

    /// The last scene handed to this renderer.
    pub fn last_scene(&self) -> Option<&SliderScene> {
        self.last_scene.as_ref()
    }

    fn retessellate(&mut self, scene: SliderScene) {
        match tessellate_scene(&scene) {
            Ok(mesh) => self.mesh = mesh,
            Err(err) => tracing::warn!("keeping previous slider mesh: {err}"),
        }
        self.last_scene = Some(scene);
    }
}

impl SliderRenderer for MeshRenderer {
    fn render(&mut self, scene: &SliderScene) {
        self.retessellate(*scene);
    }

    fn apply_style(&mut self, style: &GapSliderStyle) {
        if let Some(scene) = self.last_scene {
            self.retessellate(SliderScene {
                style: *style,
                ..scene
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gap_slider::layout::{Viewport, compute_layout};

    fn scene(lower: f32, upper: f32, style: GapSliderStyle) -> SliderScene {
        let state = RangeState {
            lower,
            upper,
            minimum: 0.0,
            maximum: 1.0,
        };
        SliderScene {
            state,
            layout: compute_layout(&state, Viewport::new(500.0, 40.0), 44.0),
            style,
        }
    }

    fn area_of(mesh: &SliderMesh, color: Color) -> f32 {
        mesh.indices
            .chunks(3)
            .map(|tri| {
                let [a, b, c] = [0, 1, 2].map(|i| mesh.vertices[tri[i] as usize]);
                if a.color != color {
                    return 0.0;
                }
                let (ax, ay) = (a.position[0], a.position[1]);
                let (bx, by) = (b.position[0], b.position[1]);
                let (cx, cy) = (c.position[0], c.position[1]);
                ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay)).abs() / 2.0
            })
            .sum()
    }

    fn plain_style() -> GapSliderStyle {
        GapSliderStyle::default()
            .thumb_style(ThumbStyle::None)
            .corner_radius(0.0)
    }

    #[test]
    fn overlay_excludes_selection() {
        let style = plain_style();
        let mesh = tessellate_scene(&scene(0.2, 0.8, style)).expect("tessellation");
        // Bounds 500x40 minus the 300x40 selection.
        let overlay = area_of(&mesh, style.tint_color);
        assert!((overlay - 200.0 * 40.0).abs() < 1.0, "overlay area {overlay}");
    }

    #[test]
    fn thumbs_use_foreground_color() {
        let style = plain_style();
        let mesh = tessellate_scene(&scene(0.2, 0.8, style)).expect("tessellation");
        let thumbs = area_of(&mesh, style.foreground_color);
        assert!((thumbs - 2.0 * 44.0 * 40.0).abs() < 1.0, "thumb area {thumbs}");
    }

    #[test]
    fn transparent_background_is_skipped() {
        let style = plain_style();
        let with_clear = tessellate_scene(&scene(0.2, 0.8, style)).expect("tessellation");
        let painted = style.background_color(Color::WHITE);
        let with_white = tessellate_scene(&scene(0.2, 0.8, painted)).expect("tessellation");
        assert!(with_white.indices.len() > with_clear.indices.len());
        assert!((area_of(&with_white, Color::WHITE) - 500.0 * 40.0).abs() < 1.0);
    }

    #[test]
    fn glyphs_follow_thumb_style() {
        let none = tessellate_scene(&scene(0.2, 0.8, plain_style())).expect("tessellation");
        let line = tessellate_scene(&scene(0.2, 0.8, plain_style().thumb_style(ThumbStyle::Line)))
            .expect("tessellation");
        let arrow =
            tessellate_scene(&scene(0.2, 0.8, plain_style().thumb_style(ThumbStyle::Arrow)))
                .expect("tessellation");
        assert!(line.indices.len() > none.indices.len());
        assert!(arrow.indices.len() > line.indices.len());
    }

    #[test]
    fn arrows_point_away_from_selection() {
        let thumb = Rect::new(0.0, 0.0, 44.0, 40.0);
        let path = glyph_path(ThumbStyle::Arrow, &thumb, -1.0).expect("glyph");
        let tip_x = path
            .iter()
            .filter_map(|event| match event {
                lyon_path::PathEvent::Line { to, .. } => Some(to.x),
                _ => None,
            })
            .next()
            .expect("line segment");
        assert!(tip_x < thumb.center().x);
    }

    #[test]
    fn mesh_renderer_reapplies_style() {
        let mut renderer = MeshRenderer::new();
        renderer.apply_style(&plain_style());
        assert!(renderer.last_scene().is_none());

        renderer.render(&scene(0.2, 0.8, plain_style()));
        let before = renderer.mesh().indices.len();
        renderer.apply_style(&plain_style().thumb_style(ThumbStyle::Arrow));
        assert!(renderer.mesh().indices.len() > before);
        assert_eq!(
            renderer.last_scene().map(|s| s.style.thumb_style),
            Some(ThumbStyle::Arrow)
        );
    }
}

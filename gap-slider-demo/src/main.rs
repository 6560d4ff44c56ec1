use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gap_slider::{
    DragRegion, GapSliderArgs, GapSliderController, GapSliderStyle, MeshRenderer, PointerEvent,
    RangeState, ThumbStyle,
};
use glam::Vec2;
use parking_lot::Mutex;

#[derive(Parser)]
#[command(name = "gap-slider-demo")]
#[command(version, about = "Replay a drag gesture against a gap slider", long_about = None)]
struct Cli {
    /// Region to grab
    #[arg(short, long, value_enum, default_value_t = Region::Center)]
    region: Region,
    /// Horizontal pointer travel in pixels (negative drags left)
    #[arg(short, long, default_value_t = 80.0, allow_negative_numbers = true)]
    distance: f32,
    /// Number of move samples the travel is split into
    #[arg(short, long, default_value_t = 8)]
    steps: u32,
    /// Track width in pixels
    #[arg(long, default_value_t = 320.0)]
    width: f32,
    /// Control height in pixels
    #[arg(long, default_value_t = 44.0)]
    height: f32,
    /// Width of each thumb in pixels
    #[arg(long, default_value_t = gap_slider::DEFAULT_THUMB_WIDTH)]
    thumb_width: f32,
    /// Smallest selectable value
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    minimum: f32,
    /// Largest selectable value
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    maximum: f32,
    /// Initial lower bound
    #[arg(long, default_value_t = 0.25, allow_negative_numbers = true)]
    lower: f32,
    /// Initial upper bound
    #[arg(long, default_value_t = 0.75, allow_negative_numbers = true)]
    upper: f32,
    /// Glyph drawn on the thumbs
    #[arg(long, value_enum, default_value_t = Glyph::Arrow)]
    glyph: Glyph,
}

#[derive(Clone, Copy, ValueEnum)]
enum Region {
    Left,
    Right,
    Center,
}

impl From<Region> for DragRegion {
    fn from(region: Region) -> Self {
        match region {
            Region::Left => DragRegion::Left,
            Region::Right => DragRegion::Right,
            Region::Center => DragRegion::Center,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Glyph {
    Line,
    Arrow,
    None,
}

impl From<Glyph> for ThumbStyle {
    fn from(glyph: Glyph) -> Self {
        match glyph {
            Glyph::Line => ThumbStyle::Line,
            Glyph::Arrow => ThumbStyle::Arrow,
            Glyph::None => ThumbStyle::None,
        }
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "off,gap_slider=info,gap_slider_demo=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let notifications = Arc::new(Mutex::new(Vec::new()));
    let record = |label: &'static str| {
        let notifications = notifications.clone();
        move |state: RangeState| notifications.lock().push((label, state))
    };

    let args = GapSliderArgs::default()
        .minimum_value(cli.minimum)
        .maximum_value(cli.maximum)
        .lower_value(cli.lower)
        .upper_value(cli.upper)
        .thumb_width(cli.thumb_width)
        .width(cli.width)
        .height(cli.height)
        .style(GapSliderStyle::default().thumb_style(cli.glyph.into()))
        .on_left_change(record("left"))
        .on_right_change(record("right"))
        .on_scroll(record("scroll"));

    let mut slider = GapSliderController::with_renderer(args, MeshRenderer::new())
        .context("invalid slider configuration")?;

    let layout = *slider.layout();
    let grab = match cli.region {
        Region::Left => layout.left_thumb.center(),
        Region::Right => layout.right_thumb.center(),
        Region::Center => layout.center.center(),
    };

    let expected = DragRegion::from(cli.region);
    slider.handle_pointer_event(PointerEvent::Pressed(grab));
    if slider.active_region() != expected {
        anyhow::bail!(
            "pointer down at ({}, {}) hit {:?} instead of {expected:?}; the thumbs overlap",
            grab.x,
            grab.y,
            slider.active_region(),
        );
    }

    let steps = cli.steps.max(1);
    for i in 1..=steps {
        let x = grab.x + cli.distance * i as f32 / steps as f32;
        slider.handle_pointer_event(PointerEvent::Moved(Vec2::new(x, grab.y)));
        let state = slider.state();
        tracing::info!(step = i, x, lower = state.lower, upper = state.upper, "moved");
    }
    slider.handle_pointer_event(PointerEvent::Released);

    let mesh = slider.renderer().mesh();
    tracing::info!(
        vertices = mesh.vertices.len(),
        triangles = mesh.indices.len() / 3,
        notifications = notifications.lock().len(),
        "gesture finished"
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&slider.state()).context("failed to encode state")?
    );
    Ok(())
}

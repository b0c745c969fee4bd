//! `lumen` - render a scene file (or the built-in demo) to a PNG.

mod cli;
mod demo;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_core::{load_scene, ImageSettings, LoadResult, RenderConfig};
use lumen_renderer::{render, Scene};

use cli::Args;

/// Apply command line overrides on top of the scene's own settings.
fn apply_overrides(
    args: &Args,
    image: &mut ImageSettings,
    config: &mut RenderConfig,
) -> LoadResult<()> {
    if let Some(width) = args.width {
        image.width = width;
    }
    if let Some(height) = args.height {
        image.height = height;
    }
    if let Some(samples) = args.samples {
        config.samples_per_axis = samples;
    }
    if let Some(bounces) = args.bounces {
        config.max_bounces = bounces;
    }
    image.validate()
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting lumen");

    let (scene, mut image, mut config) = match &args.scene {
        Some(path) => {
            let description = load_scene(path)
                .with_context(|| format!("Failed to load scene {}", path.display()))?;
            let scene = Scene::from_description(&description)
                .context("Failed to build scene")?;
            (scene, description.image, description.render)
        }
        None => {
            log::info!("No scene given, rendering the demo scene");
            let (scene, image) = demo::demo_scene();
            (scene, image, RenderConfig::default())
        }
    };
    apply_overrides(&args, &mut image, &mut config).context("Invalid command line overrides")?;

    let buffer = render(&scene, image.width, image.height, &config);
    buffer
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}

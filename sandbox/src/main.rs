mod cli;
mod demo_scene;
mod output_template;
mod sequence;

use crate::cli::Arguments;
use crate::sequence::{FrameSequence, render_sequence};
use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use sdf_marcher::render::progress::ProgressObserver;
use sdf_marcher::render::renderer::Renderer;
use sdf_marcher::render::settings::RenderSettings;
use sdf_marcher::serialization::scene_loader::{SceneDocument, load_scene};
use sdf_marcher::utils::time_throttled_logger::TimeThrottledInfoLogger;
use std::time::Duration;

const PROGRESS_LOG_INTERVAL: Duration = Duration::from_secs(2);

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let arguments = Arguments::parse();

    let SceneDocument { mut scene, mut settings } = match &arguments.scene {
        Some(path) => {
            info!("loading scene from {}", path.display());
            load_scene(path).with_context(|| format!("failed to load scene {}", path.display()))?
        }
        None => {
            info!("no scene file given, rendering the demo room");
            SceneDocument { scene: demo_scene::make_demo_scene().context("failed to build the demo scene")?, settings: RenderSettings::default() }
        }
    };

    arguments.override_settings(&mut settings);
    arguments.override_camera(scene.camera_mut());
    info!(
        "{} objects, resolution {}, {} samples per pixel, depth {}",
        scene.objects().len(),
        settings.resolution,
        settings.spp,
        settings.maximum_depth
    );

    let progress_bar = settings.progress_bar;
    let renderer = Renderer::new(settings).context("invalid render settings")?;
    let sequence = FrameSequence::new(arguments.start, arguments.end, arguments.step, scene.time_span())?;

    let logger = TimeThrottledInfoLogger::new(PROGRESS_LOG_INTERVAL);
    let observer: Option<&dyn ProgressObserver> = if progress_bar { Some(&logger) } else { None };

    let written = render_sequence(&scene, &renderer, &sequence, observer)?;
    info!("done, {} frames written", written.len());
    Ok(())
}

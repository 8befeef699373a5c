use crate::geometry::alias::Float;
use crate::material::material::{Color, Material};
use crate::render::frame::{write_pixel, Frame, CHANNELS_PER_PIXEL};
use crate::render::pinhole::Pinhole;
use crate::render::progress::{ProgressCounter, ProgressObserver};
use crate::render::settings::RenderSettings;
use crate::scene::error::SceneError;
use crate::scene::frozen_scene::FrozenScene;
use crate::scene::scene::Scene;
use crate::tracer::path_tracer::PathTracer;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Renders frames of a scene; rows are traced in parallel, each with its own
/// generator so a fixed seed reproduces the image exactly.
pub struct Renderer {
    settings: RenderSettings,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Result<Self, SceneError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    #[must_use]
    pub fn render(&self, scene: &Scene, time: Float, frame_index: u64, observer: Option<&dyn ProgressObserver>) -> Frame {
        let frozen = scene.freeze(time);
        self.render_frozen(&frozen, frame_index, observer)
    }

    #[must_use]
    pub fn render_frozen(&self, scene: &FrozenScene, frame_index: u64, observer: Option<&dyn ProgressObserver>) -> Frame {
        let resolution = self.settings.resolution;
        let mut frame = Frame::new(resolution);
        let stride = frame.row_stride();

        let pinhole = Pinhole::new(scene.camera(), resolution);
        let tracer = PathTracer::new(scene, &self.settings);
        let progress = ProgressCounter::new(resolution.pixels_count());
        let grazing_samples = AtomicUsize::new(0);
        let discarded_samples = AtomicUsize::new(0);

        frame.pixels_mut().par_chunks_mut(stride).enumerate().for_each(|(row, line)| {
            let mut generator = Pcg64Mcg::seed_from_u64(row_seed(self.settings.seed, frame_index, row as u64));
            let mut row_statistics = RowStatistics::default();

            for (column, pixel) in line.chunks_mut(CHANNELS_PER_PIXEL).enumerate() {
                let color = self.sample_pixel(&tracer, &pinhole, column, row, &mut generator, &mut row_statistics);
                write_pixel(pixel, color);
            }

            grazing_samples.fetch_add(row_statistics.grazing, Ordering::Relaxed);
            discarded_samples.fetch_add(row_statistics.discarded, Ordering::Relaxed);
            let completed = progress.advance(resolution.width);
            if let Some(observer) = observer {
                observer.on_progress(completed, progress.total());
            }
        });

        debug!(
            "frame {frame_index} of {resolution}: {} of {} pixels, {} grazing and {} discarded samples",
            progress.completed(),
            progress.total(),
            grazing_samples.load(Ordering::Relaxed),
            discarded_samples.load(Ordering::Relaxed),
        );
        frame
    }

    #[must_use]
    fn sample_pixel<R: Rng + ?Sized>(
        &self,
        tracer: &PathTracer,
        pinhole: &Pinhole,
        column: usize,
        row: usize,
        generator: &mut R,
        statistics: &mut RowStatistics,
    ) -> Color {
        let samples = self.settings.spp;
        let mut accumulated = Material::BLACK;
        for _ in 0..samples {
            let ray = pinhole.ray(column, row, generator.random(), generator.random());
            let sample = tracer.trace_primary(&ray, pinhole.pixel_arc(), generator);
            if sample.grazing {
                statistics.grazing += 1;
            }
            let radiance = sample.radiance;
            if radiance.red.is_finite() && radiance.green.is_finite() && radiance.blue.is_finite() {
                accumulated += radiance;
            } else {
                statistics.discarded += 1;
            }
        }
        accumulated / samples as Float
    }
}

#[derive(Default)]
struct RowStatistics {
    grazing: usize,
    discarded: usize,
}

#[must_use]
fn mix(value: u64) -> u64 {
    let mut result = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
    result = (result ^ (result >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    result = (result ^ (result >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    result ^ (result >> 31)
}

#[must_use]
pub(crate) fn row_seed(seed: u64, frame_index: u64, row: u64) -> u64 {
    mix(mix(mix(seed) ^ frame_index) ^ row)
}

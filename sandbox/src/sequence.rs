use crate::output_template;
use anyhow::{Context, Result, bail};
use log::info;
use sdf_marcher::animation::animated::TimeSpan;
use sdf_marcher::geometry::alias::Float;
use sdf_marcher::render::progress::ProgressObserver;
use sdf_marcher::render::renderer::Renderer;
use sdf_marcher::scene::scene::Scene;
use sdf_marcher::utils::frame_timer::FrameTimer;
use std::path::PathBuf;

/// Frame times from `start` to `end` inclusive, `step` apart.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct FrameSequence {
    start: Float,
    end: Float,
    step: Float,
}

impl FrameSequence {
    /// Unset bounds fall back to the animated span of the scene; a still
    /// scene yields a single frame at time zero.
    pub(crate) fn new(start: Option<Float>, end: Option<Float>, step: Float, animation: Option<TimeSpan>) -> Result<Self> {
        let start = start.or(animation.map(|span| span.begin)).unwrap_or(0.0);
        let end = end.or(animation.map(|span| span.end)).unwrap_or(start);
        if false == (start.is_finite() && end.is_finite()) {
            bail!("frame times must be finite, got {start} to {end}");
        }
        if false == (step > 0.0 && step.is_finite()) {
            bail!("frame step must be positive, got {step}");
        }
        if end < start {
            bail!("animation ends at {end} before it starts at {start}");
        }
        Ok(Self { start, end, step })
    }

    #[must_use]
    pub(crate) fn times(&self) -> Vec<Float> {
        let tolerance = self.step * 1e-6;
        (0..)
            .map(|index| self.start + index as Float * self.step)
            .take_while(|time| *time <= self.end + tolerance)
            .collect()
    }
}

/// Renders and saves every frame; returns the written files in order.
pub(crate) fn render_sequence(
    scene: &Scene,
    renderer: &Renderer,
    sequence: &FrameSequence,
    observer: Option<&dyn ProgressObserver>,
) -> Result<Vec<PathBuf>> {
    let times = sequence.times();
    let mut timer = FrameTimer::new();
    let mut written = Vec::with_capacity(times.len());

    for (frame_index, time) in times.iter().enumerate() {
        let path = PathBuf::from(output_template::expand(&renderer.settings().output, frame_index, *time)?);
        info!("frame {frame_index} at time {time:.3} -> {}", path.display());

        timer.start();
        let frame = renderer.render(scene, *time, frame_index as u64, observer);
        let elapsed = timer.stop();
        frame.save(&path).with_context(|| format!("failed to save frame {frame_index}"))?;

        info!("frame {frame_index} took {:.2}s", elapsed.as_secs_f64());
        written.push(path);
    }

    if let (Some(min), Some(average), Some(max)) = (timer.min_time(), timer.average_time(), timer.max_time()) {
        info!(
            "{} frames rendered; frame time min={:.2}s average={:.2}s max={:.2}s",
            timer.frames(),
            min.as_secs_f64(),
            average.as_secs_f64(),
            max.as_secs_f64(),
        );
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sdf_marcher::geometry::alias::Vector;
    use sdf_marcher::material::material::{Material, MaterialClass};
    use sdf_marcher::render::settings::{RenderSettings, Resolution};
    use sdf_marcher::sdf::framework::sdf_node::SdfNode;
    use sdf_marcher::sdf::object::sdf_sphere::SdfSphere;

    #[rstest]
    #[case(None, None, 0.5, Some(TimeSpan::new(0.0, 2.0)), vec![0.0, 0.5, 1.0, 1.5, 2.0])]
    #[case(None, None, 0.1, None, vec![0.0])]
    #[case(Some(1.0), None, 0.3, Some(TimeSpan::new(0.0, 2.0)), vec![1.0, 1.3, 1.6, 1.9])]
    #[case(Some(0.0), Some(0.3), 0.1, None, vec![0.0, 0.1, 0.2, 0.3])]
    fn test_frame_times(
        #[case] start: Option<Float>,
        #[case] end: Option<Float>,
        #[case] step: Float,
        #[case] animation: Option<TimeSpan>,
        #[case] expected: Vec<Float>,
    ) {
        let system_under_test = FrameSequence::new(start, end, step, animation).unwrap();

        let actual = system_under_test.times();

        assert_eq!(actual.len(), expected.len());
        for (actual, expected) in actual.iter().zip(expected.iter()) {
            assert!((actual - expected).abs() < 1e-9);
        }
    }

    #[rstest]
    #[case(Some(2.0), Some(1.0), 0.1)]
    #[case(None, None, 0.0)]
    #[case(None, None, -1.0)]
    #[case(Some(Float::NAN), None, 0.1)]
    fn test_bad_sequences(#[case] start: Option<Float>, #[case] end: Option<Float>, #[case] step: Float) {
        assert!(FrameSequence::new(start, end, step, None).is_err());
    }

    #[test]
    fn test_sequence_written_to_disk() {
        let folder = tempfile::tempdir().unwrap();
        let mut scene = Scene::default();
        let light = scene.add_material(&Material::new().with_class(MaterialClass::Emissive).with_emission(1.0));
        scene
            .add_object(SdfNode::new(SdfSphere::new(2.0).unwrap()).translated(Vector::new(0.0, 0.0, 2.0)).with_material(light))
            .unwrap();
        let settings = RenderSettings {
            resolution: Resolution::new(6, 4),
            spp: 1,
            progress_bar: false,
            output: folder.path().join("frames").join("{frame:03}.png").to_string_lossy().into_owned(),
            ..RenderSettings::default()
        };
        let renderer = Renderer::new(settings).unwrap();
        let sequence = FrameSequence::new(Some(0.0), Some(0.2), 0.1, None).unwrap();

        let written = render_sequence(&scene, &renderer, &sequence, None).unwrap();

        assert_eq!(written.len(), 3);
        assert!(written[2].ends_with("002.png"));
        for path in &written {
            assert!(path.is_file(), "{} is missing", path.display());
        }
    }
}

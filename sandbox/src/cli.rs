use clap::Parser;
use sdf_marcher::animation::animated::Animated;
use sdf_marcher::geometry::alias::{Float, Point, Vector};
use sdf_marcher::render::settings::{RenderSettings, Resolution};
use sdf_marcher::scene::camera::Camera;
use std::path::PathBuf;
use std::str::FromStr;

/// Three comma separated numbers, `x,y,z`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Triple(pub [Float; 3]);

impl FromStr for Triple {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let components = text
            .split(',')
            .map(|part| part.trim().parse::<Float>().map_err(|error| format!("bad component in '{text}': {error}")))
            .collect::<Result<Vec<Float>, String>>()?;
        match components.as_slice() {
            [x, y, z] => Ok(Triple([*x, *y, *z])),
            _ => Err(format!("expected three components in '{text}', got {}", components.len())),
        }
    }
}

impl Triple {
    #[must_use]
    pub(crate) fn point(self) -> Point {
        Point::new(self.0[0], self.0[1], self.0[2])
    }

    #[must_use]
    pub(crate) fn vector(self) -> Vector {
        Vector::new(self.0[0], self.0[1], self.0[2])
    }
}

#[derive(Parser, Debug)]
#[command(name = "marcher", version, about = "Renders signed distance field scenes with a path tracer", long_about = None)]
pub(crate) struct Arguments {
    /// Scene description (JSON); renders the built-in demo scene when omitted
    pub(crate) scene: Option<PathBuf>,

    /// Output file name template; accepts {frame}, {frame:0N} and {time}
    #[arg(short, long)]
    pub(crate) output: Option<String>,

    /// Image size as WIDTHxHEIGHT or a single number
    #[arg(short, long)]
    pub(crate) resolution: Option<Resolution>,

    /// Samples per pixel
    #[arg(short, long)]
    pub(crate) spp: Option<usize>,

    /// Bounces before russian roulette starts
    #[arg(short, long)]
    pub(crate) depth: Option<usize>,

    /// Seed of the sampling sequence
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// Do not report render progress
    #[arg(long)]
    pub(crate) no_progress: bool,

    /// Camera position, x,y,z
    #[arg(short, long, allow_hyphen_values = true)]
    pub(crate) position: Option<Triple>,

    /// Point the camera looks at, x,y,z
    #[arg(short, long, allow_hyphen_values = true)]
    pub(crate) center: Option<Triple>,

    /// Camera up direction, x,y,z
    #[arg(short, long, allow_hyphen_values = true)]
    pub(crate) up: Option<Triple>,

    /// First frame time; defaults to the start of the scene animation
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) start: Option<Float>,

    /// Last frame time; defaults to the end of the scene animation
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) end: Option<Float>,

    /// Time between frames
    #[arg(long, default_value_t = 0.1)]
    pub(crate) step: Float,
}

impl Arguments {
    /// Flags take precedence over the scene file.
    pub(crate) fn override_settings(&self, settings: &mut RenderSettings) {
        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
        if let Some(resolution) = self.resolution {
            settings.resolution = resolution;
        }
        if let Some(spp) = self.spp {
            settings.spp = spp;
        }
        if let Some(depth) = self.depth {
            settings.maximum_depth = depth;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if self.no_progress {
            settings.progress_bar = false;
        }
    }

    pub(crate) fn override_camera(&self, camera: &mut Camera) {
        camera.set(
            self.position.map(|position| Animated::Fixed(position.point())),
            self.center.map(|center| Animated::Fixed(center.point())),
            self.up.map(|up| Animated::Fixed(up.vector())),
        );
    }
}

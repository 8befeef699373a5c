use crate::geometry::alias::Float;
use crate::material::material::Color;
use crate::render::settings::Resolution;
use crate::utils::file_system::ensure_parent_folders_exist;
use image::{ExtendedColorType, ImageFormat};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CHANNELS_PER_PIXEL: usize = 3;

/// Row-major RGB8 image; the first row is the top of the picture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Frame {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            width: resolution.width,
            height: resolution.height,
            pixels: vec![0; resolution.pixels_count() * CHANNELS_PER_PIXEL],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    #[must_use]
    pub fn pixel(&self, column: usize, row: usize) -> [u8; CHANNELS_PER_PIXEL] {
        assert!(column < self.width && row < self.height, "pixel ({column}, {row}) is out of the frame");
        let start = (row * self.width + column) * CHANNELS_PER_PIXEL;
        [self.pixels[start], self.pixels[start + 1], self.pixels[start + 2]]
    }

    #[must_use]
    pub(crate) fn row_stride(&self) -> usize {
        self.width * CHANNELS_PER_PIXEL
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Mean of all channels over all pixels, in `[0, 255]`.
    #[must_use]
    pub fn average_intensity(&self) -> Float {
        if self.pixels.is_empty() {
            return 0.0;
        }
        self.pixels.iter().map(|channel| *channel as Float).sum::<Float>() / self.pixels.len() as Float
    }
}

#[derive(Error, Debug)]
pub enum FrameSaveError {
    #[error("can not deduce image format of {path:?}")]
    UnknownFormat { path: PathBuf },
    #[error("failed to prepare folders for {path:?}: {what}")]
    FolderCreation { path: PathBuf, what: String },
    #[error("failed to write {path:?}: {what}")]
    Encoding { path: PathBuf, what: String },
}

impl Frame {
    /// The format follows the file extension; missing folders are created.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FrameSaveError> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path).map_err(|_| FrameSaveError::UnknownFormat { path: path.to_path_buf() })?;
        ensure_parent_folders_exist(path)
            .map_err(|error| FrameSaveError::FolderCreation { path: path.to_path_buf(), what: error.to_string() })?;
        image::save_buffer_with_format(path, &self.pixels, self.width as u32, self.height as u32, ExtendedColorType::Rgb8, format)
            .map_err(|error| FrameSaveError::Encoding { path: path.to_path_buf(), what: error.to_string() })
    }
}

#[must_use]
pub(crate) fn quantize(channel: Float) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    (channel.clamp(0.0, 1.0) * 255.0) as u8
}

pub(crate) fn write_pixel(target: &mut [u8], color: Color) {
    target[0] = quantize(color.red);
    target[1] = quantize(color.green);
    target[2] = quantize(color.blue);
}

//! Saving the canvas back to disk

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;
use tracing::info;

use crate::error::PaintError;

use super::RegionPainter;

impl RegionPainter {
    /// Encode the canvas as PNG bytes.
    ///
    /// The encoding is deterministic: encoding twice without intervening
    /// edits produces identical bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, PaintError> {
        let image = self.canvas.to_image();
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Encode the canvas and overwrite the original source image.
    ///
    /// The write is destructive and in-place, with no backup and no
    /// temp-then-rename step. Failures (permissions, missing directory)
    /// propagate; there is no retry.
    pub fn save(&self) -> Result<(), PaintError> {
        let bytes = self.encode_png()?;
        fs::write(&self.source_path, &bytes)?;
        info!("canvas saved to {}", self.source_path.display());
        Ok(())
    }

    /// Encode the canvas and write it to an alternate path, leaving the
    /// source image untouched.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<(), PaintError> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        fs::write(path, &bytes)?;
        info!("canvas saved to {}", path.display());
        Ok(())
    }
}

//! Cutting one sprite out of a decoded atlas.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage, imageops};
use tracing::debug;

use crate::error::{Result, SliceError};
use crate::model::{ExtractionTarget, PixelRect};
use crate::processor::transform;
use crate::tree;
use crate::writer::png;

/// Colour painted over consumed atlas pixels: dark red at half alpha, so the
/// leftover image shows claimed areas as a translucent wash.
pub const CONSUMED_MARKER: Rgba<u8> = Rgba([128, 0, 0, 128]);

impl ExtractionTarget {
    /// Maps this target's region onto an atlas of the given size.
    pub fn locate(&self, atlas_w: u32, atlas_h: u32) -> Result<PixelRect> {
        self.region
            .scale(atlas_w, atlas_h)
            .map_err(|source| SliceError::InvalidGeometry {
                target: self.path.clone(),
                source,
            })
    }

    /// Extracts, transforms and writes the sprite, then marks its source
    /// rectangle in `atlas` as consumed. Returns the written path.
    pub fn process(&self, atlas: &mut RgbaImage, output_root: &Path) -> Result<PathBuf> {
        let (atlas_w, atlas_h) = atlas.dimensions();
        let rect = self.locate(atlas_w, atlas_h)?;

        let sprite = imageops::crop_imm(&*atlas, rect.x, rect.y, rect.w, rect.h).to_image();
        let sprite = transform::apply_all(sprite, &self.transforms);

        let out_path = output_root.join(tree::normalize(&self.path));
        png::write(&out_path, &sprite)?;
        debug!(
            target_path = %self.path,
            x = rect.x,
            y = rect.y,
            w = rect.w,
            h = rect.h,
            "sprite extracted"
        );

        mark_consumed(atlas, rect);
        Ok(out_path)
    }
}

/// Overwrites `rect` with [`CONSUMED_MARKER`].
pub fn mark_consumed(atlas: &mut RgbaImage, rect: PixelRect) {
    for y in rect.y..rect.y + rect.h {
        for x in rect.x..rect.x + rect.w {
            atlas.put_pixel(x, y, CONSUMED_MARKER);
        }
    }
}

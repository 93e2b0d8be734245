//! Reference-grid coordinates and their mapping onto real atlas pixels.

use serde::Deserialize;

/// A rectangle declared against a nominal `ref_w × ref_h` grid.
///
/// Catalog coordinates never depend on the resolution of the atlas they end
/// up being applied to: a box declared as `(16, 0, 16, 16)` on a 256×256 grid
/// covers `(32, 0, 32, 32)` on a 512×512 texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceBox {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub ref_w: u32,
    pub ref_h: u32,
}

/// Scaled rectangle in actual pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("region {w}x{h} is empty")]
    Degenerate { w: u32, h: u32 },

    #[error("region ({x},{y}) {w}x{h} exceeds the {ref_w}x{ref_h} reference grid")]
    OutsideReference {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        ref_w: u32,
        ref_h: u32,
    },

    #[error("scaled region {rect:?} exceeds the {img_w}x{img_h} image")]
    OutOfBounds {
        rect: PixelRect,
        img_w: u32,
        img_h: u32,
    },
}

impl ReferenceBox {
    pub const fn new(x: u32, y: u32, w: u32, h: u32, ref_w: u32, ref_h: u32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            ref_w,
            ref_h,
        }
    }

    /// Checks the box against its own reference grid.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.w == 0 || self.h == 0 || self.ref_w == 0 || self.ref_h == 0 {
            return Err(GeometryError::Degenerate {
                w: self.w,
                h: self.h,
            });
        }

        let fits_x = u64::from(self.x) + u64::from(self.w) <= u64::from(self.ref_w);
        let fits_y = u64::from(self.y) + u64::from(self.h) <= u64::from(self.ref_h);
        if !fits_x || !fits_y {
            return Err(GeometryError::OutsideReference {
                x: self.x,
                y: self.y,
                w: self.w,
                h: self.h,
                ref_w: self.ref_w,
                ref_h: self.ref_h,
            });
        }

        Ok(())
    }

    /// Maps the box onto an `img_w × img_h` image.
    ///
    /// Each of x, y, w and h is scaled independently with floor division, so
    /// sizes that do not divide evenly lose the sub-pixel remainder rather
    /// than rounding up into a neighbouring sprite.
    pub fn scale(&self, img_w: u32, img_h: u32) -> Result<PixelRect, GeometryError> {
        if self.ref_w == 0 || self.ref_h == 0 {
            return Err(GeometryError::Degenerate { w: 0, h: 0 });
        }

        let rect = PixelRect {
            x: scale_axis(self.x, img_w, self.ref_w),
            y: scale_axis(self.y, img_h, self.ref_h),
            w: scale_axis(self.w, img_w, self.ref_w),
            h: scale_axis(self.h, img_h, self.ref_h),
        };

        if rect.w == 0 || rect.h == 0 {
            return Err(GeometryError::Degenerate {
                w: rect.w,
                h: rect.h,
            });
        }

        if u64::from(rect.x) + u64::from(rect.w) > u64::from(img_w)
            || u64::from(rect.y) + u64::from(rect.h) > u64::from(img_h)
        {
            return Err(GeometryError::OutOfBounds { rect, img_w, img_h });
        }

        Ok(rect)
    }
}

// coord * img / ref never overflows in u64 and the result never exceeds
// u32::MAX as long as coord <= ref; saturate for the coord > ref case, which
// the bounds check rejects anyway.
fn scale_axis(coord: u32, img: u32, reference: u32) -> u32 {
    let scaled = u64::from(coord) * u64::from(img) / u64::from(reference);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

impl PixelRect {
    fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.w)
    }

    fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.h)
    }

    pub fn intersects(&self, other: &PixelRect) -> bool {
        u64::from(self.x) < other.right()
            && u64::from(other.x) < self.right()
            && u64::from(self.y) < other.bottom()
            && u64::from(other.y) < self.bottom()
    }
}

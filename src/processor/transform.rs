//! Per-sprite post-processing.

use image::{RgbaImage, imageops};

use crate::model::Transform;

impl Transform {
    pub fn apply(&self, image: RgbaImage) -> RgbaImage {
        match self {
            Transform::PadToSquare => pad_to_square(image),
        }
    }
}

/// Runs `transforms` left to right, each on the previous one's output.
pub fn apply_all(image: RgbaImage, transforms: &[Transform]) -> RgbaImage {
    transforms.iter().fold(image, |img, t| t.apply(img))
}

/// Centres `image` on a transparent `max(w, h)` square. Odd padding puts the
/// extra pixel after the sprite (floor offset).
pub fn pad_to_square(image: RgbaImage) -> RgbaImage {
    let (w, h) = image.dimensions();
    if w == h {
        return image;
    }

    let dim = w.max(h);
    let dx = (dim - w) / 2;
    let dy = (dim - h) / 2;

    let mut canvas = RgbaImage::new(dim, dim);
    imageops::replace(&mut canvas, &image, i64::from(dx), i64::from(dy));
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn test_pad_wide_sprite_centres_vertically() {
        let sprite = RgbaImage::from_pixel(32, 16, Rgba([200, 100, 50, 255]));
        let out = pad_to_square(sprite);

        assert_eq!(out.dimensions(), (32, 32));
        for (_, y, px) in out.enumerate_pixels() {
            if (8..24).contains(&y) {
                assert_eq!(*px, Rgba([200, 100, 50, 255]), "row {y}");
            } else {
                assert_eq!(*px, CLEAR, "row {y}");
            }
        }
    }

    #[test]
    fn test_pad_tall_sprite_with_odd_padding() {
        // 2x5 -> 5x5, dx = 3 / 2 = 1, so columns 1..3 hold the sprite
        let sprite = RgbaImage::from_pixel(2, 5, Rgba([1, 1, 1, 255]));
        let out = pad_to_square(sprite);

        assert_eq!(out.dimensions(), (5, 5));
        for (x, _, px) in out.enumerate_pixels() {
            let expected = if x == 1 || x == 2 { Rgba([1, 1, 1, 255]) } else { CLEAR };
            assert_eq!(*px, expected, "column {x}");
        }
    }

    #[test]
    fn test_pad_is_idempotent_on_square_input() {
        let mut sprite = RgbaImage::new(4, 4);
        for (x, y, px) in sprite.enumerate_pixels_mut() {
            *px = Rgba([x as u8, y as u8, 7, 255]);
        }

        let once = pad_to_square(sprite.clone());
        assert_eq!(once, sprite);
        assert_eq!(pad_to_square(once), sprite);
    }

    #[test]
    fn test_apply_all_runs_in_order() {
        let sprite = RgbaImage::from_pixel(4, 2, Rgba([5, 5, 5, 255]));
        let out = apply_all(sprite.clone(), &[]);
        assert_eq!(out, sprite);

        let out = apply_all(sprite, &[Transform::PadToSquare, Transform::PadToSquare]);
        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(*out.get_pixel(0, 0), CLEAR);
        assert_eq!(*out.get_pixel(0, 1), Rgba([5, 5, 5, 255]));
    }
}

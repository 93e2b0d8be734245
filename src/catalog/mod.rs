//! Compiled-in sprite catalogs, one per supported game release.
//!
//! The helpers below describe the layout conventions shared by the atlases:
//! most sheets are declared on a 256×256 grid of fixed-size cells, the
//! explosion sheet on a 128×128 grid and the sweep strip on 128×32.

mod v1_14;
mod v1_20_5;

use clap::ValueEnum;

use crate::model::{Catalog, ExtractionTarget, ReferenceBox, SourceAtlas, Transform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameVersion {
    /// Split particle, painting, effect, explosion and sweep sheets.
    #[value(name = "1.14")]
    V1_14,
    /// Split the map decoration sheet.
    #[value(name = "1.20.5")]
    V1_20_5,
}

impl GameVersion {
    pub fn label(self) -> &'static str {
        match self {
            GameVersion::V1_14 => "1.14",
            GameVersion::V1_20_5 => "1.20.5",
        }
    }
}

pub fn builtin(version: GameVersion) -> Catalog {
    let atlases = match version {
        GameVersion::V1_14 => v1_14::atlases(),
        GameVersion::V1_20_5 => v1_20_5::atlases(),
    };
    Catalog::new(version.label(), atlases)
}

// ─────────────────────────────────────────────────────
// Layout helpers
// ─────────────────────────────────────────────────────

const TEXTURES: &str = "assets/minecraft/textures";

fn b256(x: u32, y: u32, w: u32, h: u32) -> ReferenceBox {
    ReferenceBox::new(x, y, w, h, 256, 256)
}

fn b128(x: u32, y: u32, w: u32, h: u32) -> ReferenceBox {
    ReferenceBox::new(x, y, w, h, 128, 128)
}

fn input(path: &str, targets: Vec<ExtractionTarget>) -> SourceAtlas {
    SourceAtlas::new(format!("{TEXTURES}/{path}"), targets)
}

/// Cell `(x, y)` spanning `w × h` cells of `cell_w × cell_h` pixels, with the
/// grid shifted by `(x_off, y_off)`, on a 256×256 sheet.
fn grid_sprite(
    path: String,
    (x, y): (u32, u32),
    (w, h): (u32, u32),
    (x_off, y_off): (u32, u32),
    (cell_w, cell_h): (u32, u32),
) -> ExtractionTarget {
    ExtractionTarget::new(
        path,
        b256(cell_w * x + x_off, cell_h * y + y_off, w * cell_w, h * cell_h),
    )
}

fn painting(name: &str, x: u32, y: u32, w: u32, h: u32) -> ExtractionTarget {
    grid_sprite(
        format!("{TEXTURES}/painting/{name}.png"),
        (x, y),
        (w, h),
        (0, 0),
        (16, 16),
    )
}

fn effect(name: &str, x: u32, y: u32) -> ExtractionTarget {
    grid_sprite(
        format!("{TEXTURES}/mob_effect/{name}.png"),
        (x, y),
        (1, 1),
        (0, 198),
        (18, 18),
    )
}

fn particle(name: &str, x: u32, y: u32) -> ExtractionTarget {
    particle_sized(name, x, y, 1, 1)
}

fn particle_sized(name: &str, x: u32, y: u32, w: u32, h: u32) -> ExtractionTarget {
    particle_offset(name, x, y, 0, 0, w, h)
}

fn particle_offset(
    name: &str,
    x: u32,
    y: u32,
    x_off: u32,
    y_off: u32,
    w: u32,
    h: u32,
) -> ExtractionTarget {
    grid_sprite(
        format!("{TEXTURES}/particle/{name}.png"),
        (x, y),
        (w, h),
        (x_off, y_off),
        (8, 8),
    )
}

/// `count` particles named `{prefix}_0..` laid out left to right on row `y`.
fn particle_row(prefix: &str, y: u32, count: u32) -> Vec<ExtractionTarget> {
    (0..count)
        .map(|i| particle(&format!("{prefix}_{i}"), i, y))
        .collect()
}

fn explosion(index: u32) -> ExtractionTarget {
    let (x, y) = (index % 4, index / 4);
    ExtractionTarget::new(
        format!("{TEXTURES}/particle/explosion_{index}.png"),
        b128(32 * x, 32 * y, 32, 32),
    )
}

/// Sweep frames are stored as 32×16 strips and padded to squares.
fn sweep(index: u32, x: u32, y: u32) -> ExtractionTarget {
    ExtractionTarget::new(
        format!("{TEXTURES}/particle/sweep_{index}.png"),
        ReferenceBox::new(32 * x, 16 * y, 32, 16, 128, 32),
    )
    .then(Transform::PadToSquare)
}

/// Map icons: 8×8 cells, 16 per row, on a 128×128 sheet.
fn map_decoration(name: &str, index: u32) -> ExtractionTarget {
    let (x, y) = (index % 16, index / 16);
    ExtractionTarget::new(
        format!("{TEXTURES}/map/decorations/{name}.png"),
        b128(x * 8, y * 8, 8, 8),
    )
}

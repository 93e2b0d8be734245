//! Declaration data: which sprites live where in which atlas.
//!
//! Everything here is built once (compiled-in catalog or JSON file) and never
//! mutated afterwards. The only mutable state in a run is the decoded atlas
//! buffer owned by `processor::atlas`.

pub mod region;

pub use region::{GeometryError, PixelRect, ReferenceBox};

use std::path::{Component, Path};

use serde::Deserialize;

use crate::error::{Result, SliceError};
use crate::tree;

/// Post-processing step applied to an extracted sprite before it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// Centre the sprite on a transparent square canvas.
    PadToSquare,
}

/// One output sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionTarget {
    /// Output path, relative to the output root.
    pub path: String,
    pub region: ReferenceBox,
    pub transforms: Vec<Transform>,
}

impl ExtractionTarget {
    pub fn new(path: impl Into<String>, region: ReferenceBox) -> Self {
        Self {
            path: path.into(),
            region,
            transforms: Vec::new(),
        }
    }

    /// Appends a transform; transforms run in the order they were added.
    pub fn then(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }
}

/// One input atlas and every sprite cut out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceAtlas {
    /// Path relative to the input root.
    pub path: String,
    pub targets: Vec<ExtractionTarget>,
}

impl SourceAtlas {
    pub fn new(path: impl Into<String>, targets: Vec<ExtractionTarget>) -> Self {
        Self {
            path: path.into(),
            targets,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub name: String,
    pub atlases: Vec<SourceAtlas>,
}

impl Catalog {
    pub fn new(name: impl Into<String>, atlases: Vec<SourceAtlas>) -> Self {
        Self {
            name: name.into(),
            atlases,
        }
    }

    /// Checks every declared path and every region against its reference
    /// grid.
    pub fn validate(&self) -> Result<()> {
        for atlas in &self.atlases {
            check_relative(&atlas.path)?;
            for target in &atlas.targets {
                check_relative(&target.path)?;
                target
                    .region
                    .validate()
                    .map_err(|source| SliceError::InvalidGeometry {
                        target: target.path.clone(),
                        source,
                    })?;
            }
        }
        Ok(())
    }

    pub fn target_count(&self) -> usize {
        self.atlases.iter().map(|a| a.targets.len()).sum()
    }
}

/// Accepts `/`-separated paths that stay below whatever root they are joined
/// onto once a leading `/` is dropped.
pub fn check_relative(path: &str) -> Result<()> {
    let rel = tree::normalize(path);
    let below_root = !rel.is_empty()
        && Path::new(rel)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if below_root {
        Ok(())
    } else {
        Err(SliceError::Catalog(format!("path `{path}` does not stay below its root")))
    }
}

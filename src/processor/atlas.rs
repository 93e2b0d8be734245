//! One atlas pass: decode once, cut every declared sprite, keep the leftovers.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, SliceError};
use crate::model::SourceAtlas;
use crate::processor::overlap;
use crate::tree::{self, FileTree};
use crate::writer::png;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtlasOutcome {
    /// Every target was written; `written` lists sprite files then, if
    /// requested, the leftover image.
    Processed { written: Vec<PathBuf> },
    /// The atlas is not in the input tree; nothing was written.
    Missing,
}

impl SourceAtlas {
    pub fn process(
        &self,
        tree: &mut dyn FileTree,
        output_root: &Path,
        leftover_root: Option<&Path>,
    ) -> Result<AtlasOutcome> {
        if !tree.exists(&self.path) {
            warn!("{}, skipping", SliceError::MissingAtlas(tree.describe(&self.path)));
            return Ok(AtlasOutcome::Missing);
        }

        let bytes = tree.read(&self.path)?;
        let mut atlas = png::decode(&bytes, &self.path)?;
        let (w, h) = atlas.dimensions();
        debug!(atlas = %self.path, w, h, targets = self.targets.len(), "atlas decoded");

        // Resolve every region up front so a bad one aborts before any write.
        let rects = self
            .targets
            .iter()
            .map(|t| t.locate(w, h))
            .collect::<Result<Vec<_>>>()?;

        for (i, j) in overlap::find_overlaps(&rects) {
            warn!(
                "{}: {} overlaps {}; the later sprite will contain consumed-marker pixels",
                self.path, self.targets[i].path, self.targets[j].path
            );
        }

        let mut written = Vec::with_capacity(self.targets.len() + 1);
        for target in &self.targets {
            written.push(target.process(&mut atlas, output_root)?);
        }

        if let Some(root) = leftover_root {
            let leftover_path = root.join(tree::normalize(&self.path));
            png::write(&leftover_path, &atlas)?;
            written.push(leftover_path);
        }

        Ok(AtlasOutcome::Processed { written })
    }
}

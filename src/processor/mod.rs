//! The slicing engine.
//!
//! Walks a catalog atlas by atlas. A missing atlas is a warning; anything
//! else (bad geometry, undecodable atlas, failed write) stops the run.
pub mod atlas;
pub mod overlap;
pub mod target;
pub mod transform;

pub use atlas::AtlasOutcome;
pub use target::CONSUMED_MARKER;

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::Result;
use crate::model::Catalog;
use crate::tree::FileTree;

/// Where results go.
#[derive(Debug, Clone)]
pub struct Outputs {
    pub output_root: PathBuf,
    /// When set, each processed atlas is written here with its consumed
    /// areas marked.
    pub leftover_root: Option<PathBuf>,
}

impl Outputs {
    /// Creates the output roots.
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.output_root)?;
        if let Some(leftover) = &self.leftover_root {
            fs::create_dir_all(leftover)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Source paths of atlases that were sliced.
    pub processed: Vec<String>,
    /// Source paths of atlases absent from the input tree.
    pub missing: Vec<String>,
    pub files_written: usize,
}

/// Runs every atlas of `catalog` against `tree`, in catalog order.
pub fn run(catalog: &Catalog, tree: &mut dyn FileTree, outputs: &Outputs) -> Result<RunReport> {
    catalog.validate()?;
    outputs.prepare()?;

    let mut report = RunReport::default();
    for atlas in &catalog.atlases {
        match atlas.process(tree, &outputs.output_root, outputs.leftover_root.as_deref())? {
            AtlasOutcome::Processed { written } => {
                report.files_written += written.len();
                report.processed.push(atlas.path.clone());
            }
            AtlasOutcome::Missing => report.missing.push(atlas.path.clone()),
        }
    }

    info!(
        catalog = %catalog.name,
        processed = report.processed.len(),
        missing = report.missing.len(),
        files = report.files_written,
        "slicing finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SliceError;
    use crate::model::{ExtractionTarget, ReferenceBox, SourceAtlas};
    use crate::tree::DirTree;

    #[test]
    fn test_run_validates_catalog_before_touching_outputs() {
        let input = tempfile::tempdir().unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let outputs = Outputs {
            output_root: scratch.path().join("out"),
            leftover_root: None,
        };

        let catalog = Catalog::new(
            "broken",
            vec![SourceAtlas::new(
                "atlas.png",
                vec![ExtractionTarget::new(
                    "x.png",
                    ReferenceBox::new(0, 0, 0, 4, 8, 8),
                )],
            )],
        );

        let mut tree = DirTree::new(input.path());
        let err = run(&catalog, &mut tree, &outputs).unwrap_err();
        assert!(matches!(err, SliceError::InvalidGeometry { .. }), "got {err}");
        assert!(!outputs.output_root.exists());
    }

    #[test]
    fn test_run_creates_roots_even_when_everything_is_missing() {
        let input = tempfile::tempdir().unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let outputs = Outputs {
            output_root: scratch.path().join("deep/out"),
            leftover_root: Some(scratch.path().join("deep/leftover")),
        };

        let catalog = Catalog::new(
            "empty-input",
            vec![
                SourceAtlas::new("one.png", vec![]),
                SourceAtlas::new("two.png", vec![]),
            ],
        );

        let mut tree = DirTree::new(input.path());
        let report = run(&catalog, &mut tree, &outputs).unwrap();

        assert_eq!(report.missing, vec!["one.png", "two.png"]);
        assert!(report.processed.is_empty());
        assert_eq!(report.files_written, 0);
        assert!(outputs.output_root.is_dir());
        assert!(scratch.path().join("deep/leftover").is_dir());
    }
}

use serde::Deserialize;

use crate::error::{Result, SliceError};
use crate::model::{
    Catalog, ExtractionTarget, ReferenceBox, SourceAtlas, Transform, check_relative,
};

/// On-disk catalog document, 1-to-1 with the JSON.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDoc {
    #[serde(default)]
    name: Option<String>,
    atlases: Vec<AtlasDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AtlasDoc {
    source: String,
    targets: Vec<TargetDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TargetDoc {
    path: String,
    region: ReferenceBox,
    #[serde(default)]
    transforms: Vec<Transform>,
}

/// Parse a JSON catalog.
///
/// The document holds an `atlases` array; each atlas names its `source`
/// path and the `targets` cut out of it. `fallback_name` is used when the
/// document has no `name` (usually the file stem).
///
/// Every region is checked against its reference grid here, and every path
/// must stay below its root, so a bad file is rejected before the input tree
/// is opened.
pub fn load_from_json(json: &str, fallback_name: &str) -> Result<Catalog> {
    let doc: CatalogDoc = serde_json::from_str(json)
        .map_err(|e| SliceError::Catalog(format!("failed to parse JSON: {e}")))?;

    let mut atlases = Vec::with_capacity(doc.atlases.len());
    for (i, atlas) in doc.atlases.into_iter().enumerate() {
        if atlas.source.trim().is_empty() {
            return Err(SliceError::Catalog(format!("atlas {i} has an empty `source`")));
        }
        check_relative(&atlas.source)?;

        let mut targets = Vec::with_capacity(atlas.targets.len());
        for (j, t) in atlas.targets.into_iter().enumerate() {
            if t.path.trim().is_empty() {
                return Err(SliceError::Catalog(format!(
                    "target {j} of `{}` has an empty `path`",
                    atlas.source
                )));
            }
            check_relative(&t.path)?;

            t.region
                .validate()
                .map_err(|source| SliceError::InvalidGeometry {
                    target: t.path.clone(),
                    source,
                })?;

            targets.push(
                t.transforms
                    .into_iter()
                    .fold(ExtractionTarget::new(t.path, t.region), ExtractionTarget::then),
            );
        }

        atlases.push(SourceAtlas::new(atlas.source, targets));
    }

    let name = doc.name.unwrap_or_else(|| fallback_name.to_string());
    Ok(Catalog::new(name, atlases))
}

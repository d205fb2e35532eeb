use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use anatomy::{Region, RegionBounds, RegionCatalog, RegionDef};
use foundation::color::Rgb;
use foundation::math::Vec3;

pub const CATALOG_VERSION: &str = "1.0";

/// On-disk region catalog document.
///
/// The region table is configuration data: fixed at startup, never edited at
/// runtime. A document must define every known region exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDoc {
    pub version: String,
    pub regions: Vec<RegionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionEntry {
    pub name: String,
    pub description: String,
    /// `#RRGGBB`.
    pub highlight_color: String,
    #[serde(default)]
    pub bounds: BoundsEntry,
    pub label_anchor: [f64; 3],
    pub label_text: String,
}

#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BoundsEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_z: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_z: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abs_x: Option<f64>,
}

#[derive(Debug)]
pub enum CatalogLoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    UnsupportedVersion(String),
    UnknownRegion(String),
    DuplicateRegion(String),
    MissingRegion(&'static str),
    BadColor {
        region: String,
        value: String,
    },
}

impl std::fmt::Display for CatalogLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogLoadError::Io { path, source } => {
                write!(f, "failed to read catalog {}: {source}", path.display())
            }
            CatalogLoadError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogLoadError::UnsupportedVersion(v) => {
                write!(f, "unsupported catalog version {v:?} (expected {CATALOG_VERSION:?})")
            }
            CatalogLoadError::UnknownRegion(name) => write!(f, "unknown region {name:?}"),
            CatalogLoadError::DuplicateRegion(name) => write!(f, "region {name:?} defined twice"),
            CatalogLoadError::MissingRegion(name) => write!(f, "region {name:?} is not defined"),
            CatalogLoadError::BadColor { region, value } => {
                write!(f, "region {region:?} has unparseable color {value:?}")
            }
        }
    }
}

impl std::error::Error for CatalogLoadError {}

pub fn load_catalog_from_path(path: impl AsRef<Path>) -> Result<RegionCatalog, CatalogLoadError> {
    let path = path.as_ref();
    let payload = fs::read_to_string(path).map_err(|e| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    load_catalog_from_str(&payload)
}

pub fn load_catalog_from_str(json: &str) -> Result<RegionCatalog, CatalogLoadError> {
    let doc: CatalogDoc = serde_json::from_str(json).map_err(CatalogLoadError::Parse)?;
    catalog_from_doc(&doc)
}

pub fn catalog_from_doc(doc: &CatalogDoc) -> Result<RegionCatalog, CatalogLoadError> {
    if doc.version != CATALOG_VERSION {
        return Err(CatalogLoadError::UnsupportedVersion(doc.version.clone()));
    }

    let mut defs: Vec<RegionDef> = Vec::with_capacity(doc.regions.len());
    for entry in &doc.regions {
        let Some(region) = Region::from_name(&entry.name) else {
            return Err(CatalogLoadError::UnknownRegion(entry.name.clone()));
        };
        if defs.iter().any(|d| d.region == region) {
            return Err(CatalogLoadError::DuplicateRegion(entry.name.clone()));
        }
        let Some(highlight_color) = Rgb::parse_hex_str(&entry.highlight_color) else {
            return Err(CatalogLoadError::BadColor {
                region: entry.name.clone(),
                value: entry.highlight_color.clone(),
            });
        };

        defs.push(RegionDef {
            region,
            description: entry.description.clone(),
            highlight_color,
            bounds: RegionBounds {
                min_x: entry.bounds.min_x,
                max_x: entry.bounds.max_x,
                min_y: entry.bounds.min_y,
                max_y: entry.bounds.max_y,
                min_z: entry.bounds.min_z,
                max_z: entry.bounds.max_z,
                abs_x: entry.bounds.abs_x,
            },
            label_anchor: Vec3::new(
                entry.label_anchor[0],
                entry.label_anchor[1],
                entry.label_anchor[2],
            ),
            label_text: entry.label_text.clone(),
        });
    }

    // Unknowns and duplicates are ruled out above; only gaps remain.
    if let Some(missing) = Region::ALL
        .into_iter()
        .find(|r| !defs.iter().any(|d| d.region == *r))
    {
        return Err(CatalogLoadError::MissingRegion(missing.name()));
    }

    RegionCatalog::from_defs(defs)
        .ok_or_else(|| unreachable!("validated entries form a complete catalog"))
}

/// Serializable document for an in-memory catalog (template export, tests).
pub fn doc_from_catalog(catalog: &RegionCatalog) -> CatalogDoc {
    CatalogDoc {
        version: CATALOG_VERSION.to_string(),
        regions: catalog
            .iter()
            .map(|def| RegionEntry {
                name: def.region.name().to_string(),
                description: def.description.clone(),
                highlight_color: def.highlight_color.to_hex_string(),
                bounds: BoundsEntry {
                    min_x: def.bounds.min_x,
                    max_x: def.bounds.max_x,
                    min_y: def.bounds.min_y,
                    max_y: def.bounds.max_y,
                    min_z: def.bounds.min_z,
                    max_z: def.bounds.max_z,
                    abs_x: def.bounds.abs_x,
                },
                label_anchor: [def.label_anchor.x, def.label_anchor.y, def.label_anchor.z],
                label_text: def.label_text.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogLoadError, catalog_from_doc, doc_from_catalog, load_catalog_from_str};
    use anatomy::{Region, RegionCatalog};

    #[test]
    fn builtin_round_trips_through_the_document_form() {
        let catalog = RegionCatalog::builtin();
        let doc = doc_from_catalog(&catalog);
        let json = serde_json::to_string_pretty(&doc).unwrap();
        let loaded = load_catalog_from_str(&json).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn rejects_unknown_region_names() {
        let mut doc = doc_from_catalog(&RegionCatalog::builtin());
        doc.regions[0].name = "hippocampus".to_string();
        match catalog_from_doc(&doc) {
            Err(CatalogLoadError::UnknownRegion(name)) => assert_eq!(name, "hippocampus"),
            other => panic!("expected UnknownRegion, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicates_and_gaps() {
        let mut dup = doc_from_catalog(&RegionCatalog::builtin());
        dup.regions[1].name = dup.regions[0].name.clone();
        assert!(matches!(
            catalog_from_doc(&dup),
            Err(CatalogLoadError::DuplicateRegion(_))
        ));

        let mut short = doc_from_catalog(&RegionCatalog::builtin());
        short.regions.retain(|r| r.name != Region::Brainstem.name());
        match catalog_from_doc(&short) {
            Err(CatalogLoadError::MissingRegion(name)) => assert_eq!(name, "brainstem"),
            other => panic!("expected MissingRegion, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_colors_and_versions() {
        let mut bad_color = doc_from_catalog(&RegionCatalog::builtin());
        bad_color.regions[2].highlight_color = "#f44".to_string();
        assert!(matches!(
            catalog_from_doc(&bad_color),
            Err(CatalogLoadError::BadColor { .. })
        ));

        let mut bad_version = doc_from_catalog(&RegionCatalog::builtin());
        bad_version.version = "2.0".to_string();
        assert!(matches!(
            catalog_from_doc(&bad_version),
            Err(CatalogLoadError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn parse_errors_surface_as_parse() {
        assert!(matches!(
            load_catalog_from_str("not json"),
            Err(CatalogLoadError::Parse(_))
        ));
    }
}

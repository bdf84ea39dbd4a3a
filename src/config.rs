use std::fs;

use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::scaffold::FolderSpec;

/// On-disk layout document, e.g.
///
/// ```toml
/// folders = ["Scripts", "UI", "UI/Fonts"]
/// ```
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutFile {
    pub folders: Vec<String>,
}

impl From<&FolderSpec> for LayoutFile {
    fn from(spec: &FolderSpec) -> Self {
        Self {
            folders: spec.folders().iter().map(|p| p.to_string()).collect(),
        }
    }
}

pub fn load_from_path(path: &Utf8Path) -> Result<FolderSpec> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading layout {}", path))?;
    parse_layout(&raw).with_context(|| format!("parsing layout {}", path))
}

pub fn parse_layout(raw: &str) -> Result<FolderSpec> {
    let file: LayoutFile = toml::from_str(raw)?;
    Ok(FolderSpec::new(&file.folders)?)
}

pub fn render_layout(spec: &FolderSpec) -> Result<String> {
    toml::to_string(&LayoutFile::from(spec)).context("serializing layout")
}

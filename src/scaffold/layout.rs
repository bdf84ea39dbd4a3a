use std::collections::HashSet;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

use super::ScaffoldError;

/// Folders created directly under the root, in creation order.
pub const TOP_LEVEL_FOLDERS: [&str; 11] = [
    "Animations",
    "Audio",
    "Editor",
    "Materials",
    "Meshes",
    "Prefabs",
    "Scripts",
    "Scenes",
    "Shaders",
    "Textures",
    "UI",
];

pub const UI_FOLDER: &str = "UI";

/// Folders created under `UI`, after every top-level folder.
pub const UI_SUBFOLDERS: [&str; 3] = ["Assets", "Fonts", "Icon"];

/// Ordered list of folders, relative to the root, that make up a scaffold.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FolderSpec {
    folders: Vec<Utf8PathBuf>,
}

impl FolderSpec {
    /// Build a layout from user-provided entries such as `Scripts` or `UI/Fonts`.
    pub fn new<I, S>(entries: I) -> Result<Self, ScaffoldError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut folders = Vec::new();
        for entry in entries {
            let entry = entry.as_ref();
            let path = validate_entry(entry)?;
            if !seen.insert(path.clone()) {
                return Err(invalid(entry, "listed more than once"));
            }
            folders.push(path);
        }
        if folders.is_empty() {
            return Err(invalid("", "layout must list at least one folder"));
        }
        Ok(Self { folders })
    }

    pub fn folders(&self) -> &[Utf8PathBuf] {
        &self.folders
    }
}

impl Default for FolderSpec {
    fn default() -> Self {
        let top = TOP_LEVEL_FOLDERS.iter().map(Utf8PathBuf::from);
        let ui = UI_SUBFOLDERS
            .iter()
            .map(|name| Utf8Path::new(UI_FOLDER).join(name));
        Self {
            folders: top.chain(ui).collect(),
        }
    }
}

fn validate_entry(entry: &str) -> Result<Utf8PathBuf, ScaffoldError> {
    if entry.trim().is_empty() {
        return Err(invalid(entry, "folder name is empty"));
    }
    let path = Utf8Path::new(entry);
    let mut normalized = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Normal(part) => normalized.push(part),
            Utf8Component::CurDir | Utf8Component::ParentDir => {
                return Err(invalid(entry, "`.` and `..` are not allowed"));
            }
            Utf8Component::RootDir | Utf8Component::Prefix(_) => {
                return Err(invalid(entry, "must be relative to the root folder"));
            }
        }
    }
    Ok(normalized)
}

fn invalid(entry: &str, reason: &'static str) -> ScaffoldError {
    ScaffoldError::InvalidLayout {
        entry: entry.to_owned(),
        reason,
    }
}

pub mod index;
pub mod layout;

use std::fmt;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::util::fs::{DirError, DirState, ensure_dir};

pub use index::{AssetIndex, CommandIndex, NoopIndex};
pub use layout::FolderSpec;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid root folder name {name:?}: {reason}")]
    InvalidRootName { name: String, reason: &'static str },
    #[error("invalid layout entry {entry:?}: {reason}")]
    InvalidLayout { entry: String, reason: &'static str },
    /// Creating `path` (a target or one of its parents) failed. `created` holds every
    /// directory this run made before the failure; nothing is rolled back.
    #[error("creating directory {path}")]
    Filesystem {
        path: Utf8PathBuf,
        created: Vec<Utf8PathBuf>,
        #[source]
        source: io::Error,
    },
}

/// Name of the top-level folder, used verbatim as a single path component.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RootName(String);

impl RootName {
    pub fn new(name: impl Into<String>) -> Result<Self, ScaffoldError> {
        let name = name.into();
        let reason = if name.trim().is_empty() {
            Some("name is empty")
        } else if name == "." || name == ".." {
            Some("`.` and `..` do not name a new folder")
        } else if name.contains(['/', '\\']) {
            Some("name must not contain path separators")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(ScaffoldError::InvalidRootName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RootName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One target directory of a dry run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlannedDir {
    pub path: Utf8PathBuf,
    pub exists: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Report {
    /// `<base_dir>/<root>`.
    pub root: Utf8PathBuf,
    /// Every directory this run made, implicit parents included, outermost first.
    pub created: Vec<Utf8PathBuf>,
    /// Layout targets that were already there before the run.
    pub existing: Vec<Utf8PathBuf>,
}

impl Report {
    pub fn is_unchanged(&self) -> bool {
        self.created.is_empty()
    }
}

/// Creates the folders of a [`FolderSpec`] under `<base_dir>/<root>`.
#[derive(Clone, Debug, Default)]
pub struct Scaffolder {
    layout: FolderSpec,
}

impl Scaffolder {
    pub fn new(layout: FolderSpec) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &FolderSpec {
        &self.layout
    }

    /// Target directories in creation order.
    pub fn targets(&self, root: &RootName, base_dir: &Utf8Path) -> Vec<Utf8PathBuf> {
        let root_dir = base_dir.join(root.as_str());
        self.layout
            .folders()
            .iter()
            .map(|folder| root_dir.join(folder))
            .collect()
    }

    pub fn plan(&self, root: &RootName, base_dir: &Utf8Path) -> Vec<PlannedDir> {
        self.targets(root, base_dir)
            .into_iter()
            .map(|path| {
                let exists = path.is_dir();
                debug!("planned {} (exists: {})", path, exists);
                PlannedDir { path, exists }
            })
            .collect()
    }

    /// Create every missing target directory. Existing ones are left alone, so running
    /// twice is harmless. Stops at the first failure.
    pub fn apply(&self, root: &RootName, base_dir: &Utf8Path) -> Result<Report, ScaffoldError> {
        let mut report = Report {
            root: base_dir.join(root.as_str()),
            ..Report::default()
        };

        for path in self.targets(root, base_dir) {
            let before = report.created.len();
            match ensure_dir(&path, &mut report.created) {
                Ok(state) => {
                    for dir in &report.created[before..] {
                        info!("created {}", dir);
                    }
                    // A target made earlier in this run as another target's parent is
                    // not "already present".
                    if state == DirState::Existing && !report.created.contains(&path) {
                        debug!("already present: {}", path);
                        report.existing.push(path);
                    }
                }
                Err(DirError { path, source }) => {
                    return Err(ScaffoldError::Filesystem {
                        path,
                        created: report.created,
                        source,
                    });
                }
            }
        }

        Ok(report)
    }
}

use crate::domain::ports::AssetBundle;
use std::path::{Path, PathBuf};

/// Accepts every path. Used when no bundle directory is configured and the
/// packaging step is trusted to have produced whatever content references.
#[derive(Debug, Clone, Default)]
pub struct OpenBundle;

impl AssetBundle for OpenBundle {
    fn contains(&self, _bundle_path: &str) -> bool {
        true
    }
}

/// Bundle backed by a directory on disk, e.g. the project root whose `src/`
/// holds the assets.
#[derive(Debug, Clone)]
pub struct DirectoryBundle {
    root: PathBuf,
}

impl DirectoryBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetBundle for DirectoryBundle {
    fn contains(&self, bundle_path: &str) -> bool {
        let full_path = bundle_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment));
        full_path.is_file()
    }
}

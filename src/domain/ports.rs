use crate::domain::model::IconHandle;
use std::fmt::Debug;

/// One icon library: a read-only set of glyphs keyed by name.
pub trait IconCatalog: Send + Sync {
    fn lookup(&self, name: &str) -> Option<IconHandle>;
}

/// The packaged asset bundle. Answers whether a bundle-relative path
/// (for example `src/assets/images/a.png`) is something it can serve.
pub trait AssetBundle: Send + Sync + Debug {
    fn contains(&self, bundle_path: &str) -> bool;
}

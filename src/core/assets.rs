use crate::adapters::bundle::{DirectoryBundle, OpenBundle};
use crate::config::toml_config::ShowcaseConfig;
use crate::domain::model::ImageHandle;
use crate::domain::ports::AssetBundle;
use crate::utils::error::{Result, ShowcaseError};
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

/// Why an image could not be resolved. Only ever reported alongside an
/// `ImageHandle::Empty`, never returned as a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("asset path is empty")]
    EmptyPath,

    #[error("asset path '{0}' contains characters that cannot appear in a bundle path")]
    InvalidCharacters(String),

    #[error("asset path '{0}' is not a local bundle reference")]
    RemoteReference(String),

    #[error("asset path '{0}' escapes the source root")]
    EscapesRoot(String),

    #[error("asset '{0}' is not in the bundle")]
    MissingAsset(String),

    #[error("cannot build a URL for '{path}': {reason}")]
    InvalidUrl { path: String, reason: String },

    #[error("no badge image registered for '{0}'")]
    UnknownBadge(String),
}

/// Turns logical asset paths into loadable URLs.
///
/// `@/assets/img/a.png` becomes `<base_url>/src/assets/img/a.png`. Every
/// public resolving method is infallible: failures come back as
/// `ImageHandle::Empty` and a warning in the log.
#[derive(Debug)]
pub struct AssetResolver {
    alias_marker: String,
    source_root: String,
    base_url: Url,
    bundle: Box<dyn AssetBundle>,
    badges: BTreeMap<String, String>,
}

impl AssetResolver {
    pub fn new(config: &ShowcaseConfig) -> Result<Self> {
        let assets = &config.assets;
        let mut base_url =
            Url::parse(&assets.base_url).map_err(|e| ShowcaseError::InvalidConfigValueError {
                field: "assets.base_url".to_string(),
                value: assets.base_url.clone(),
                reason: e.to_string(),
            })?;
        // Joining against a base without a trailing slash would drop its last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let bundle: Box<dyn AssetBundle> = match &assets.bundle_dir {
            Some(dir) => Box::new(DirectoryBundle::new(dir)),
            None => Box::new(OpenBundle),
        };

        Ok(Self {
            alias_marker: assets.alias_marker.clone(),
            source_root: assets.source_root.trim_matches('/').to_string(),
            base_url,
            bundle,
            badges: config.badges.clone(),
        })
    }

    pub fn with_bundle(mut self, bundle: impl AssetBundle + 'static) -> Self {
        self.bundle = Box::new(bundle);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn resolve_image(&self, path: &str) -> ImageHandle {
        self.resolve_image_with_diagnostic(path).0
    }

    /// Same as [`resolve_image`](Self::resolve_image), also handing back the
    /// reason when the handle is empty.
    pub fn resolve_image_with_diagnostic(&self, path: &str) -> (ImageHandle, Option<AssetError>) {
        match self.try_resolve(path) {
            Ok(url) => {
                tracing::debug!(path, url = %url, "resolved image");
                (ImageHandle::Url(url), None)
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "error loading image");
                (ImageHandle::Empty, Some(e))
            }
        }
    }

    /// Certification badge for an `imageKey`, via the configured badge table.
    pub fn resolve_badge(&self, image_key: &str) -> ImageHandle {
        match self.badges.get(image_key) {
            Some(path) => self.resolve_image(path),
            None => {
                let e = AssetError::UnknownBadge(image_key.to_string());
                tracing::warn!(image_key, error = %e, "error loading badge");
                ImageHandle::Empty
            }
        }
    }

    /// Bundle-relative path for a logical path, e.g. `src/assets/a.png`.
    pub fn bundle_path(&self, path: &str) -> std::result::Result<String, AssetError> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(AssetError::EmptyPath);
        }
        if trimmed
            .chars()
            .any(|c| c.is_control() || matches!(c, '\\' | '?' | '#'))
        {
            return Err(AssetError::InvalidCharacters(trimmed.to_string()));
        }
        if trimmed.contains("://") || trimmed.starts_with("//") || trimmed.starts_with("data:") {
            return Err(AssetError::RemoteReference(trimmed.to_string()));
        }

        let relative = trimmed
            .strip_prefix(self.alias_marker.as_str())
            .unwrap_or(trimmed);

        let mut segments: Vec<&str> = Vec::new();
        for segment in relative.split('/') {
            match dot_segment(segment) {
                Some(DotSegment::Current) => {}
                Some(DotSegment::Parent) => {
                    if segments.pop().is_none() {
                        return Err(AssetError::EscapesRoot(trimmed.to_string()));
                    }
                }
                None if segment.is_empty() => {}
                None => segments.push(segment),
            }
        }
        if segments.is_empty() {
            return Err(AssetError::EmptyPath);
        }

        if self.source_root.is_empty() {
            Ok(segments.join("/"))
        } else {
            Ok(format!("{}/{}", self.source_root, segments.join("/")))
        }
    }

    fn try_resolve(&self, path: &str) -> std::result::Result<Url, AssetError> {
        let bundle_path = self.bundle_path(path)?;
        if !self.bundle.contains(&bundle_path) {
            return Err(AssetError::MissingAsset(bundle_path));
        }
        let url = self
            .base_url
            .join(&bundle_path)
            .map_err(|e| AssetError::InvalidUrl {
                path: bundle_path.clone(),
                reason: e.to_string(),
            })?;

        let root = if self.source_root.is_empty() {
            self.base_url.path().to_string()
        } else {
            format!("{}{}/", self.base_url.path(), self.source_root)
        };
        if !url.path().starts_with(&root) {
            return Err(AssetError::EscapesRoot(path.trim().to_string()));
        }
        Ok(url)
    }
}

enum DotSegment {
    Current,
    Parent,
}

/// URL joining treats `%2e` as `.`, so `.%2E` and `%2e%2e` climb like `..`.
fn dot_segment(segment: &str) -> Option<DotSegment> {
    match segment.to_ascii_lowercase().replace("%2e", ".").as_str() {
        "." => Some(DotSegment::Current),
        ".." => Some(DotSegment::Parent),
        _ => None,
    }
}

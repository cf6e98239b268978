use crate::domain::model::IconLibrary;
use crate::utils::error::{Result, ShowcaseError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub assets: AssetConfig,
    pub icons: IconConfig,
    pub sections: SectionConfig,
    pub badges: BTreeMap<String, String>,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Prefix content authors use for "relative to the source root".
    pub alias_marker: String,
    pub source_root: String,
    pub base_url: String,
    /// Directory holding the packaged files. Without it every well-formed
    /// path is assumed to exist.
    pub bundle_dir: Option<String>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            alias_marker: "@/".to_string(),
            source_root: "src".to_string(),
            base_url: "http://localhost:5173/".to_string(),
            bundle_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub local_fallback: String,
    /// Library name to extra glyph names made available in that catalog.
    pub extra: HashMap<String, Vec<String>>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            local_fallback: crate::core::icons::DEFAULT_LOCAL_GLYPH.to_string(),
            extra: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    pub certifications_key: String,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            certifications_key: "certifications".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub experience_path: String,
    pub resume_path: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            experience_path: "data/experience.json".to_string(),
            resume_path: "data/data.json".to_string(),
        }
    }
}

const BADGE_DIR: &str = "@/assets/images/badge";

/// Badge images shipped with the site, keyed by the certification `imageKey`.
fn default_badges() -> BTreeMap<String, String> {
    [
        (
            "awsAcademyCloudFoundations",
            "aws-academy-graduate-aws-academy-cloud-foundations.png",
        ),
        (
            "awsAcademyCloudDeveloping",
            "aws-academy-graduate-aws-academy-cloud-developing.png",
        ),
        (
            "awsAcademyCloudSecurityFoundations",
            "aws-academy-graduate-aws-academy-cloud-security-foundations.png",
        ),
        (
            "awsAcademyIntroductionToCloud",
            "aws-academy-graduate-aws-academy-introduction-to-cloud-semester-1.png",
        ),
    ]
    .into_iter()
    .map(|(key, file)| (key.to_string(), format!("{}/{}", BADGE_DIR, file)))
    .collect()
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            assets: AssetConfig::default(),
            icons: IconConfig::default(),
            sections: SectionConfig::default(),
            badges: default_badges(),
            content: ContentConfig::default(),
        }
    }
}

impl ShowcaseConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ShowcaseError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ShowcaseError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShowcaseError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for ShowcaseConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("assets.alias_marker", &self.assets.alias_marker)?;
        validation::validate_path("assets.source_root", &self.assets.source_root)?;
        validation::validate_url("assets.base_url", &self.assets.base_url)?;
        if let Some(dir) = &self.assets.bundle_dir {
            validation::validate_path("assets.bundle_dir", dir)?;
        }

        validation::validate_non_empty_string("icons.local_fallback", &self.icons.local_fallback)?;
        for library in self.icons.extra.keys() {
            if IconLibrary::parse(library).is_none() {
                return Err(ShowcaseError::InvalidConfigValueError {
                    field: "icons.extra".to_string(),
                    value: library.clone(),
                    reason: "Unknown icon library. Valid libraries: si, fa, gi, lucide-react"
                        .to_string(),
                });
            }
        }

        validation::validate_section_key(
            "sections.certifications_key",
            &self.sections.certifications_key,
        )?;

        for (key, path) in &self.badges {
            validation::validate_non_empty_string("badges", key)?;
            validation::validate_path(&format!("badges.{}", key), path)?;
        }

        validation::validate_path("content.experience_path", &self.content.experience_path)?;
        validation::validate_path("content.resume_path", &self.content.resume_path)?;
        Ok(())
    }
}

use crate::config::toml_config::ContentConfig;
use crate::core::sections::SectionCatalog;
use crate::domain::model::{ExperienceDocument, Project, Resume, ResumeDocument};
use crate::utils::error::Result;
use std::path::Path;

/// The static content the site is built from: projects and the resume.
/// Loaded once; nothing here is mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    projects: Vec<Project>,
    resume: Resume,
}

impl ContentStore {
    pub fn new(projects: Vec<Project>, resume: Resume) -> Self {
        Self { projects, resume }
    }

    pub fn from_json_strs(experience: &str, resume: &str) -> Result<Self> {
        let experience: ExperienceDocument = serde_json::from_str(experience)?;
        let resume: ResumeDocument = serde_json::from_str(resume)?;
        Ok(Self::new(experience.experience.projects, resume.resume))
    }

    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(experience_path: P, resume_path: Q) -> Result<Self> {
        tracing::debug!(
            "Loading content from {} and {}",
            experience_path.as_ref().display(),
            resume_path.as_ref().display()
        );
        let experience = std::fs::read_to_string(experience_path)?;
        let resume = std::fs::read_to_string(resume_path)?;
        let store = Self::from_json_strs(&experience, &resume)?;
        tracing::info!(
            projects = store.projects.len(),
            technology_sections = store.resume.skills_technologies.len(),
            "content loaded"
        );
        Ok(store)
    }

    pub fn from_config(config: &ContentConfig) -> Result<Self> {
        Self::load(&config.experience_path, &config.resume_path)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    pub fn section_catalog(&self, certifications_key: &str) -> Result<SectionCatalog> {
        SectionCatalog::from_resume(&self.resume, certifications_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ShowcaseError;

    #[test]
    fn parses_both_documents() {
        let store = ContentStore::from_json_strs(
            r#"{ "experience": { "projects": [ { "name": "A", "media": [ { "url": "@/a.png" } ] } ] } }"#,
            r#"{ "resume": { "Skills_Technologies": { "cloud": { "skills": [] } }, "certifications": { "items": [] } } }"#,
        )
        .unwrap();
        assert_eq!(store.projects().len(), 1);
        assert_eq!(store.projects()[0].media.len(), 1);
        let catalog = store.section_catalog("certifications").unwrap();
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["cloud", "certifications"]);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = ContentStore::from_json_strs("{", "{}").unwrap_err();
        assert!(matches!(err, ShowcaseError::SerializationError(_)));
    }
}

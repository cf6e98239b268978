use crate::domain::model::{
    CertificationItem, IconReference, RawSection, Resume, SkillItem, TechnologySections,
};
use crate::utils::error::{Result, ShowcaseError};
use std::collections::HashSet;

/// `cloud_tools` -> `Cloud Tools`. Underscores become spaces, then the first
/// letter or digit of every word is upper-cased; nothing else changes.
/// Word starts are Unicode-aware, so `ética` becomes `Ética` rather than the
/// `éTica` an ASCII-only `\b\w` rule would produce.
pub fn format_section_title(key: &str) -> String {
    let mut title = String::with_capacity(key.len());
    let mut at_word_start = true;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphanumeric() {
            if at_word_start {
                title.extend(c.to_uppercase());
            } else {
                title.push(c);
            }
            at_word_start = false;
        } else {
            title.push(c);
            at_word_start = true;
        }
    }
    title
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Skills,
    Languages,
    Certifications,
}

#[derive(Debug, Clone)]
enum SectionBody {
    Skills(Vec<SkillItem>),
    Languages(Vec<SkillItem>),
    Certifications(Vec<CertificationItem>),
}

/// One entry of the skills browser sidebar.
#[derive(Debug, Clone)]
pub struct Section {
    key: String,
    title: String,
    icon: Option<IconReference>,
    body: SectionBody,
}

/// Uniform view over the items of any section kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionItem<'a> {
    Skill(&'a SkillItem),
    Certification(&'a CertificationItem),
}

impl SectionItem<'_> {
    pub fn name(&self) -> &str {
        match self {
            SectionItem::Skill(skill) => &skill.name,
            SectionItem::Certification(cert) => &cert.name,
        }
    }
}

impl Section {
    fn technology(key: String, raw: RawSection) -> Self {
        let body = match raw.languages_list {
            Some(languages) => SectionBody::Languages(languages),
            None => SectionBody::Skills(raw.skills.unwrap_or_default()),
        };
        Self::build(key, raw.section_icon, body)
    }

    fn certifications(key: String, raw: RawSection) -> Self {
        let body = SectionBody::Certifications(raw.items.unwrap_or_default());
        Self::build(key, raw.section_icon, body)
    }

    fn build(key: String, icon: Option<IconReference>, body: SectionBody) -> Self {
        Self {
            title: format_section_title(&key),
            key,
            icon,
            body,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&IconReference> {
        self.icon.as_ref()
    }

    pub fn kind(&self) -> SectionKind {
        match self.body {
            SectionBody::Skills(_) => SectionKind::Skills,
            SectionBody::Languages(_) => SectionKind::Languages,
            SectionBody::Certifications(_) => SectionKind::Certifications,
        }
    }

    pub fn len(&self) -> usize {
        match &self.body {
            SectionBody::Skills(items) | SectionBody::Languages(items) => items.len(),
            SectionBody::Certifications(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Items in source order, whichever field they were authored under.
    pub fn items(&self) -> Vec<SectionItem<'_>> {
        match &self.body {
            SectionBody::Skills(items) | SectionBody::Languages(items) => {
                items.iter().map(SectionItem::Skill).collect()
            }
            SectionBody::Certifications(items) => {
                items.iter().map(SectionItem::Certification).collect()
            }
        }
    }
}

/// Technology sections followed by the certifications section, keyed
/// uniquely. Built once per content load.
#[derive(Debug, Clone, Default)]
pub struct SectionCatalog {
    sections: Vec<Section>,
}

impl SectionCatalog {
    /// Fails with `CatalogMergeCollision` if any key appears twice, including
    /// a technology section using the certifications key.
    pub fn merge(
        technology: TechnologySections,
        certifications: Option<RawSection>,
        certifications_key: &str,
    ) -> Result<Self> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut sections = Vec::with_capacity(technology.len() + 1);

        for (key, raw) in technology.0 {
            if !seen.insert(key.clone()) {
                return Err(ShowcaseError::CatalogMergeCollision { key });
            }
            sections.push(Section::technology(key, raw));
        }

        if let Some(raw) = certifications {
            if seen.contains(certifications_key) {
                return Err(ShowcaseError::CatalogMergeCollision {
                    key: certifications_key.to_string(),
                });
            }
            sections.push(Section::certifications(certifications_key.to_string(), raw));
        }

        tracing::info!(sections = sections.len(), "section catalog built");
        Ok(Self { sections })
    }

    pub fn from_resume(resume: &Resume, certifications_key: &str) -> Result<Self> {
        Self::merge(
            resume.skills_technologies.clone(),
            resume.certifications.clone(),
            certifications_key,
        )
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.key == key)
    }
}

/// Which section the skills browser is showing. Starts on the first key.
#[derive(Debug, Clone)]
pub struct SectionSelector {
    catalog: SectionCatalog,
    selected: Option<usize>,
}

impl SectionSelector {
    pub fn new(catalog: SectionCatalog) -> Self {
        let selected = (!catalog.is_empty()).then_some(0);
        Self { catalog, selected }
    }

    pub fn catalog(&self) -> &SectionCatalog {
        &self.catalog
    }

    pub fn section_keys(&self) -> Vec<&str> {
        self.catalog.keys().collect()
    }

    pub fn select(&mut self, key: &str) -> Result<()> {
        let position = self
            .catalog
            .position(key)
            .ok_or_else(|| ShowcaseError::UnknownSection {
                key: key.to_string(),
            })?;
        self.selected = Some(position);
        tracing::debug!(key, "section selected");
        Ok(())
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.active_section().map(Section::key)
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected_key() == Some(key)
    }

    pub fn active_section(&self) -> Option<&Section> {
        self.selected.and_then(|i| self.catalog.sections.get(i))
    }

    /// Empty when the catalog is empty.
    pub fn active_items(&self) -> Vec<SectionItem<'_>> {
        self.active_section()
            .map(Section::items)
            .unwrap_or_default()
    }
}

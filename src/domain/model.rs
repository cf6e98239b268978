use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One image (or other media) attached to a project. Identity is positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MediaItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description for alt text, or `fallback` when the content has none.
    pub fn alt_text<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.description.as_deref().unwrap_or(fallback)
    }
}

/// Ordered media belonging to exactly one subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaSequence(Vec<MediaItem>);

impl MediaSequence {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.0.get(index)
    }

    pub fn first(&self) -> Option<&MediaItem> {
        self.0.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaItem> {
        self.0.iter()
    }
}

impl From<Vec<MediaItem>> for MediaSequence {
    fn from(items: Vec<MediaItem>) -> Self {
        Self(items)
    }
}

impl FromIterator<MediaItem> for MediaSequence {
    fn from_iter<I: IntoIterator<Item = MediaItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub media: MediaSequence,
}

/// Logical pointer into one of the icon catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconReference {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub library: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl IconReference {
    pub fn new(name: impl Into<String>, library: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            library: library.into(),
            color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub library: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// Proficiency label, only present on spoken-language entries.
    #[serde(default)]
    pub level: Option<String>,
}

impl SkillItem {
    pub fn icon_reference(&self) -> Option<IconReference> {
        match (&self.icon, &self.library) {
            (Some(name), Some(library)) => Some(IconReference {
                name: name.clone(),
                library: library.clone(),
                color: self.color.clone(),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationItem {
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(rename = "imageKey", default)]
    pub image_key: Option<String>,
}

/// Section as authored in the resume document. Which list is populated
/// depends on the kind of section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSection {
    #[serde(default)]
    pub section_icon: Option<IconReference>,
    #[serde(default)]
    pub skills: Option<Vec<SkillItem>>,
    #[serde(default)]
    pub languages_list: Option<Vec<SkillItem>>,
    #[serde(default)]
    pub items: Option<Vec<CertificationItem>>,
}

/// Technology sections in the order they appear in the source document.
///
/// Duplicate keys are kept so the catalog merge can reject them instead of
/// letting the last one win.
#[derive(Debug, Clone, Default)]
pub struct TechnologySections(pub Vec<(String, RawSection)>);

impl TechnologySections {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for TechnologySections {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedSections;

        impl<'de> Visitor<'de> for OrderedSections {
            type Value = TechnologySections;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of section key to section")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut sections = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, section)) = map.next_entry::<String, RawSection>()? {
                    sections.push((key, section));
                }
                Ok(TechnologySections(sections))
            }
        }

        deserializer.deserialize_map(OrderedSections)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Resume {
    #[serde(rename = "Skills_Technologies", default)]
    pub skills_technologies: TechnologySections,
    #[serde(default)]
    pub certifications: Option<RawSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeDocument {
    pub resume: Resume,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperienceDocument {
    pub experience: Experience,
}

/// The icon libraries content may reference. `Local` is the built-in set that
/// always renders something; the others are delegated catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconLibrary {
    SimpleIcons,
    FontAwesome,
    GameIcons,
    Local,
}

impl IconLibrary {
    pub const ALL: [IconLibrary; 4] = [
        IconLibrary::SimpleIcons,
        IconLibrary::FontAwesome,
        IconLibrary::GameIcons,
        IconLibrary::Local,
    ];

    /// Case-insensitive parse of the `library` field used in content.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "si" => Some(IconLibrary::SimpleIcons),
            "fa" => Some(IconLibrary::FontAwesome),
            "gi" => Some(IconLibrary::GameIcons),
            "lucide-react" => Some(IconLibrary::Local),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconLibrary::SimpleIcons => "si",
            IconLibrary::FontAwesome => "fa",
            IconLibrary::GameIcons => "gi",
            IconLibrary::Local => "lucide-react",
        }
    }
}

impl fmt::Display for IconLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A renderable icon: the library it came from plus the glyph name inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IconHandle {
    pub library: IconLibrary,
    pub glyph: String,
}

impl IconHandle {
    pub fn new(library: IconLibrary, glyph: impl Into<String>) -> Self {
        Self {
            library,
            glyph: glyph.into(),
        }
    }
}

impl Serialize for IconLibrary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Result of resolving an image. `Empty` means "show fallback UI".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageHandle {
    Url(url::Url),
    Empty,
}

impl ImageHandle {
    pub fn is_empty(&self) -> bool {
        matches!(self, ImageHandle::Empty)
    }

    pub fn as_url(&self) -> Option<&url::Url> {
        match self {
            ImageHandle::Url(url) => Some(url),
            ImageHandle::Empty => None,
        }
    }

    /// The `src` attribute a renderer would emit; empty for `Empty`.
    pub fn as_src(&self) -> &str {
        match self {
            ImageHandle::Url(url) => url.as_str(),
            ImageHandle::Empty => "",
        }
    }
}

use crate::core::assets::AssetResolver;
use crate::core::icons::IconResolver;
use crate::core::sections::{SectionItem, SectionSelector};
use crate::domain::model::{IconHandle, ImageHandle};
use crate::utils::error::Result;
use serde::Serialize;

const DEFAULT_ICON_COLOR: &str = "#000";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarEntry {
    pub key: String,
    pub title: String,
    pub icon: Option<IconHandle>,
    pub color: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Tile {
    Skill {
        name: String,
        icon: Option<IconHandle>,
        color: Option<String>,
        level: Option<String>,
    },
    Certification {
        name: String,
        link: Option<String>,
        badge: ImageHandle,
    },
}

impl Tile {
    pub fn name(&self) -> &str {
        match self {
            Tile::Skill { name, .. } | Tile::Certification { name, .. } => name,
        }
    }
}

/// Skills page state: the section selector with both resolvers applied to
/// whatever it currently shows.
#[derive(Debug)]
pub struct SkillsBrowser<'r> {
    selector: SectionSelector,
    icons: &'r IconResolver,
    assets: &'r AssetResolver,
}

impl<'r> SkillsBrowser<'r> {
    pub fn new(selector: SectionSelector, icons: &'r IconResolver, assets: &'r AssetResolver) -> Self {
        Self {
            selector,
            icons,
            assets,
        }
    }

    pub fn selector(&self) -> &SectionSelector {
        &self.selector
    }

    pub fn select(&mut self, key: &str) -> Result<()> {
        self.selector.select(key)
    }

    pub fn heading(&self) -> Option<&str> {
        self.selector.active_section().map(|s| s.title())
    }

    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        self.selector
            .catalog()
            .sections()
            .iter()
            .map(|section| {
                let icon = section.icon();
                SidebarEntry {
                    key: section.key().to_string(),
                    title: section.title().to_string(),
                    icon: icon.and_then(|reference| self.icons.resolve(reference)),
                    color: icon
                        .and_then(|reference| reference.color.clone())
                        .filter(|color| !color.is_empty())
                        .unwrap_or_else(|| DEFAULT_ICON_COLOR.to_string()),
                    active: self.selector.is_selected(section.key()),
                }
            })
            .collect()
    }

    pub fn tiles(&self) -> Vec<Tile> {
        self.selector
            .active_items()
            .into_iter()
            .map(|item| match item {
                SectionItem::Skill(skill) => Tile::Skill {
                    name: skill.name.clone(),
                    icon: skill
                        .icon_reference()
                        .and_then(|reference| self.icons.resolve(&reference)),
                    color: skill.color.clone(),
                    level: skill.level.clone(),
                },
                SectionItem::Certification(cert) => Tile::Certification {
                    name: cert.name.clone(),
                    link: cert.link.clone(),
                    badge: match &cert.image_key {
                        Some(key) => self.assets.resolve_badge(key),
                        None => {
                            tracing::warn!(certification = %cert.name, "certification has no imageKey");
                            ImageHandle::Empty
                        }
                    },
                },
            })
            .collect()
    }
}

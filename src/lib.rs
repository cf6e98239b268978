pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::bundle::{DirectoryBundle, OpenBundle};
pub use config::toml_config::ShowcaseConfig;
pub use crate::core::{
    assets::{AssetError, AssetResolver},
    carousel::CarouselController,
    content::ContentStore,
    icons::{IconResolver, LocalCatalog, NamedCatalog},
    sections::{format_section_title, Section, SectionCatalog, SectionItem, SectionKind, SectionSelector},
    showcase::{Direction, ProjectShowcase},
    skills::{SidebarEntry, SkillsBrowser, Tile},
};
pub use domain::model::{
    CertificationItem, IconHandle, IconLibrary, IconReference, ImageHandle, MediaItem,
    MediaSequence, Project, SkillItem,
};
pub use utils::error::{Result, ShowcaseError};

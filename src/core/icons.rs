use crate::config::toml_config::IconConfig;
use crate::domain::model::{IconHandle, IconLibrary, IconReference};
use crate::domain::ports::IconCatalog;
use std::collections::{BTreeSet, HashMap};

pub const DEFAULT_LOCAL_GLYPH: &str = "Code2";

const SIMPLE_ICONS: &[&str] = &[
    "SiAmazonaws",
    "SiAmazondynamodb",
    "SiAndroid",
    "SiAngular",
    "SiApache",
    "SiCplusplus",
    "SiCsharp",
    "SiCss3",
    "SiDart",
    "SiDocker",
    "SiDotnet",
    "SiExpress",
    "SiFigma",
    "SiFirebase",
    "SiFlutter",
    "SiGit",
    "SiGithub",
    "SiGithubactions",
    "SiGo",
    "SiGooglecloud",
    "SiGraphql",
    "SiHtml5",
    "SiJavascript",
    "SiJest",
    "SiJira",
    "SiKotlin",
    "SiKubernetes",
    "SiLinux",
    "SiMicrosoftazure",
    "SiMongodb",
    "SiMysql",
    "SiNestjs",
    "SiNextdotjs",
    "SiNginx",
    "SiNodedotjs",
    "SiPostgresql",
    "SiPostman",
    "SiPython",
    "SiReact",
    "SiRedis",
    "SiRust",
    "SiSpring",
    "SiSwift",
    "SiTailwindcss",
    "SiTerraform",
    "SiTypescript",
    "SiVite",
    "SiVuedotjs",
];

const FONT_AWESOME: &[&str] = &[
    "FaAws",
    "FaAndroid",
    "FaApple",
    "FaBrain",
    "FaCloud",
    "FaCode",
    "FaComments",
    "FaDatabase",
    "FaDocker",
    "FaFigma",
    "FaGitAlt",
    "FaGithub",
    "FaGlobe",
    "FaHandshake",
    "FaJava",
    "FaJs",
    "FaLanguage",
    "FaLightbulb",
    "FaLinux",
    "FaMobileAlt",
    "FaNodeJs",
    "FaPhp",
    "FaPython",
    "FaReact",
    "FaServer",
    "FaTerminal",
    "FaTools",
    "FaUsers",
    "FaWindows",
];

const GAME_ICONS: &[&str] = &[
    "GiBrain",
    "GiChessKnight",
    "GiCompass",
    "GiGears",
    "GiLightBulb",
    "GiPuzzle",
    "GiSpeaker",
    "GiTeamIdea",
    "GiTeamUpgrade",
    "GiTargetArrows",
];

/// Canonical spelling and the glyph it renders.
const LOCAL_ICONS: &[(&str, &str)] = &[
    ("Code", "Code2"),
    ("Cloud", "Cloud"),
    ("Database", "Database"),
    ("Smartphone", "Smartphone"),
    ("Server", "Server"),
    ("LayoutPanelLeft", "LayoutPanelLeft"),
    ("PocketKnife", "PocketKnife"),
    ("HeartHandshake", "HeartHandshake"),
    ("Speech", "Speech"),
    ("Award", "Award"),
];

/// Delegated catalog: exact-name lookup, unknown names resolve to nothing.
#[derive(Debug, Clone)]
pub struct NamedCatalog {
    library: IconLibrary,
    names: BTreeSet<String>,
}

impl NamedCatalog {
    pub fn new<I, S>(library: IconLibrary, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            library,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn builtin(library: IconLibrary) -> Self {
        let names: &[&str] = match library {
            IconLibrary::SimpleIcons => SIMPLE_ICONS,
            IconLibrary::FontAwesome => FONT_AWESOME,
            IconLibrary::GameIcons => GAME_ICONS,
            IconLibrary::Local => &[],
        };
        Self::new(library, names.iter().copied())
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl IconCatalog for NamedCatalog {
    fn lookup(&self, name: &str) -> Option<IconHandle> {
        self.names
            .contains(name)
            .then(|| IconHandle::new(self.library, name))
    }
}

/// Built-in catalog. Each name is registered under its PascalCase and its
/// all-lowercase spelling; anything else falls back to a default glyph.
#[derive(Debug, Clone)]
pub struct LocalCatalog {
    aliases: HashMap<String, String>,
    fallback: String,
}

impl LocalCatalog {
    pub fn builtin() -> Self {
        Self::with_fallback(DEFAULT_LOCAL_GLYPH)
    }

    pub fn with_fallback(fallback: impl Into<String>) -> Self {
        let mut catalog = Self {
            aliases: HashMap::new(),
            fallback: fallback.into(),
        };
        for (name, glyph) in LOCAL_ICONS {
            catalog.register(name, glyph);
        }
        catalog
    }

    pub fn register(&mut self, name: &str, glyph: &str) {
        self.aliases.insert(name.to_string(), glyph.to_string());
        self.aliases
            .insert(name.to_ascii_lowercase(), glyph.to_string());
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn resolve(&self, name: &str) -> IconHandle {
        match self.aliases.get(name) {
            Some(glyph) => IconHandle::new(IconLibrary::Local, glyph.as_str()),
            None => {
                tracing::debug!(name, fallback = %self.fallback, "unknown local icon, using fallback");
                IconHandle::new(IconLibrary::Local, self.fallback.as_str())
            }
        }
    }
}

impl IconCatalog for LocalCatalog {
    fn lookup(&self, name: &str) -> Option<IconHandle> {
        Some(self.resolve(name))
    }
}

/// Dispatches an icon reference to the catalog named by its library.
#[derive(Debug, Clone)]
pub struct IconResolver {
    simple_icons: NamedCatalog,
    font_awesome: NamedCatalog,
    game_icons: NamedCatalog,
    local: LocalCatalog,
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IconResolver {
    pub fn builtin() -> Self {
        Self {
            simple_icons: NamedCatalog::builtin(IconLibrary::SimpleIcons),
            font_awesome: NamedCatalog::builtin(IconLibrary::FontAwesome),
            game_icons: NamedCatalog::builtin(IconLibrary::GameIcons),
            local: LocalCatalog::builtin(),
        }
    }

    /// Built-in catalogs extended with the names listed under `[icons.extra]`.
    /// Library keys were checked by config validation; unknown ones are skipped.
    pub fn from_config(config: &IconConfig) -> Self {
        let mut resolver = Self::builtin();
        resolver.local = LocalCatalog::with_fallback(config.local_fallback.as_str());
        for (library, names) in &config.extra {
            match IconLibrary::parse(library) {
                Some(IconLibrary::SimpleIcons) => resolver.simple_icons.extend(names.iter().cloned()),
                Some(IconLibrary::FontAwesome) => resolver.font_awesome.extend(names.iter().cloned()),
                Some(IconLibrary::GameIcons) => resolver.game_icons.extend(names.iter().cloned()),
                Some(IconLibrary::Local) => {
                    for name in names {
                        resolver.local.register(name, name);
                    }
                }
                None => tracing::warn!(library = %library, "ignoring extra icons for unknown library"),
            }
        }
        resolver
    }

    pub fn catalog(&self, library: IconLibrary) -> &dyn IconCatalog {
        match library {
            IconLibrary::SimpleIcons => &self.simple_icons,
            IconLibrary::FontAwesome => &self.font_awesome,
            IconLibrary::GameIcons => &self.game_icons,
            IconLibrary::Local => &self.local,
        }
    }

    pub fn resolve(&self, reference: &IconReference) -> Option<IconHandle> {
        self.resolve_parts(&reference.name, &reference.library)
    }

    /// Never fails: an unknown library or a name missing from a delegated
    /// catalog yields `None`, a name missing from the local catalog yields its
    /// fallback glyph.
    pub fn resolve_parts(&self, name: &str, library: &str) -> Option<IconHandle> {
        let Some(library) = IconLibrary::parse(library) else {
            tracing::debug!(library, name, "unrecognized icon library");
            return None;
        };

        let handle = self.catalog(library).lookup(name);
        if handle.is_none() {
            tracing::warn!(%library, name, "icon not found in catalog");
        }
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_aliases_cover_both_spellings() {
        let catalog = LocalCatalog::builtin();
        assert_eq!(catalog.resolve("Code"), catalog.resolve("code"));
        assert_eq!(catalog.resolve("Code").glyph, "Code2");
        assert_eq!(catalog.resolve("layoutpanelleft").glyph, "LayoutPanelLeft");
        assert_eq!(catalog.resolve("HeartHandshake").glyph, "HeartHandshake");
    }

    #[test]
    fn local_alias_table_is_not_fully_case_insensitive() {
        let catalog = LocalCatalog::builtin();
        // "CLOUD" is neither the PascalCase nor the lowercase spelling.
        assert_eq!(catalog.resolve("CLOUD").glyph, DEFAULT_LOCAL_GLYPH);
    }

    #[test]
    fn named_catalog_is_exact_match() {
        let catalog = NamedCatalog::builtin(IconLibrary::SimpleIcons);
        assert!(catalog.lookup("SiRust").is_some());
        assert!(catalog.lookup("sirust").is_none());
    }

    #[test]
    fn extra_names_extend_delegated_catalogs() {
        let mut config = IconConfig::default();
        config
            .extra
            .insert("SI".to_string(), vec!["SiZig".to_string()]);
        config
            .extra
            .insert("lucide-react".to_string(), vec!["Rocket".to_string()]);
        let resolver = IconResolver::from_config(&config);

        assert_eq!(
            resolver.resolve_parts("SiZig", "si"),
            Some(IconHandle::new(IconLibrary::SimpleIcons, "SiZig"))
        );
        assert_eq!(resolver.resolve_parts("rocket", "lucide-react").unwrap().glyph, "Rocket");
    }

    #[test]
    fn configured_fallback_is_used() {
        let config = IconConfig {
            local_fallback: "Award".to_string(),
            ..IconConfig::default()
        };
        let resolver = IconResolver::from_config(&config);
        assert_eq!(
            resolver.resolve_parts("Nonexistent", "lucide-react").unwrap().glyph,
            "Award"
        );
    }
}

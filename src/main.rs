use clap::Parser;
use showcase::utils::error::ErrorSeverity;
use showcase::utils::{logger, validation::Validate};
use showcase::{
    AssetResolver, CliConfig, Command, ContentStore, IconResolver, ImageHandle, ProjectShowcase,
    SectionSelector, ShowcaseConfig, ShowcaseError, SkillsBrowser, Tile,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting showcase CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = match &cli.config {
        Some(path) => match ShowcaseConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => ShowcaseConfig::default(),
    };
    if let Some(path) = &cli.experience {
        config.content.experience_path = path.clone();
    }
    if let Some(path) = &cli.resume {
        config.content.resume_path = path.clone();
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli.command, &config) {
        tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(command: &Command, config: &ShowcaseConfig) -> Result<(), ShowcaseError> {
    let assets = AssetResolver::new(config)?;
    let icons = IconResolver::from_config(&config.icons);

    match command {
        Command::ResolveImage { path } => {
            let (handle, diagnostic) = assets.resolve_image_with_diagnostic(path);
            match (handle, diagnostic) {
                (ImageHandle::Url(url), _) => println!("{}", url),
                (ImageHandle::Empty, reason) => {
                    println!("(empty)");
                    if let Some(reason) = reason {
                        println!("reason: {}", reason);
                    }
                }
            }
        }
        Command::ResolveIcon { name, library } => match icons.resolve_parts(name, library) {
            Some(handle) => println!("{}:{}", handle.library, handle.glyph),
            None => println!("(none)"),
        },
        Command::Sections => {
            let store = ContentStore::from_config(&config.content)?;
            let catalog = store.section_catalog(&config.sections.certifications_key)?;
            let browser = SkillsBrowser::new(SectionSelector::new(catalog), &icons, &assets);
            for entry in browser.sidebar() {
                let icon = entry
                    .icon
                    .map(|h| format!("{}:{}", h.library, h.glyph))
                    .unwrap_or_else(|| "-".to_string());
                println!("{:<24} {:<28} {}", entry.key, entry.title, icon);
            }
        }
        Command::Section { key } => {
            let store = ContentStore::from_config(&config.content)?;
            let catalog = store.section_catalog(&config.sections.certifications_key)?;
            let mut browser = SkillsBrowser::new(SectionSelector::new(catalog), &icons, &assets);
            browser.select(key)?;
            println!("{}", browser.heading().unwrap_or_default());
            for tile in browser.tiles() {
                match tile {
                    Tile::Skill { name, icon, level, .. } => {
                        let icon = icon
                            .map(|h| format!("{}:{}", h.library, h.glyph))
                            .unwrap_or_else(|| "-".to_string());
                        match level {
                            Some(level) => println!("  {:<28} {:<24} {}", name, icon, level),
                            None => println!("  {:<28} {}", name, icon),
                        }
                    }
                    Tile::Certification { name, link, badge } => {
                        println!("  {:<28} {}", name, badge.as_src());
                        if let Some(link) = link {
                            println!("  {:<28} {}", "", link);
                        }
                    }
                }
            }
        }
        Command::Project { index, advance } => {
            let store = ContentStore::from_config(&config.content)?;
            let mut showcase = ProjectShowcase::new(store.projects().to_vec());
            showcase.show_project(*index)?;
            for _ in 0..*advance {
                showcase.carousel_mut().advance();
            }

            if let Some(project) = showcase.current_project() {
                println!("{} ({} – {})", project.name, project.start_date, project.end_date);
            }
            let carousel = showcase.carousel();
            match carousel.current() {
                Some(item) => {
                    println!(
                        "media {}/{}: {}",
                        carousel.current_index() + 1,
                        carousel.len(),
                        item.alt_text("Project Media")
                    );
                    let handle = assets.resolve_image(&item.url);
                    println!("{}", if handle.is_empty() { "(empty)" } else { handle.as_src() });
                }
                None => println!("No image available"),
            }
            if carousel.has_multiple() {
                let dots: String = (0..carousel.len())
                    .map(|i| if carousel.is_current(i) { '●' } else { '○' })
                    .collect();
                println!("{}", dots);
            }
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "showcase")]
#[command(about = "Inspect portfolio content: sections, project media and asset resolution")]
pub struct CliConfig {
    /// Path to a TOML configuration file; built-in defaults are used when absent
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override content.experience_path from the config
    #[arg(long)]
    pub experience: Option<String>,

    /// Override content.resume_path from the config
    #[arg(long)]
    pub resume: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List section keys in sidebar order
    Sections,

    /// Show the tiles of one section
    Section { key: String },

    /// Walk a project's media carousel
    Project {
        index: usize,

        /// Number of times to advance before printing the current item
        #[arg(long, default_value = "0")]
        advance: usize,
    },

    /// Resolve a logical image path to a URL
    ResolveImage { path: String },

    /// Resolve an icon name within a library (si, fa, gi, lucide-react)
    ResolveIcon { name: String, library: String },
}

use clap::{Parser, Subcommand};
use proverbs::commands::DEFAULT_LIMIT;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "proverbs", bin_name = "proverbs", version = get_version())]
#[command(about = "Go proverbs, official and community, on the web and in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Load proverbs from a JSON export instead of the built-in set
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub from: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true, env = "PROVERBS_CONFIG_DIR", value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Directory with official/ and community/ example files
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub examples_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the website and JSON API (default)
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind to
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// List proverbs
    #[command(alias = "ls")]
    List {
        #[arg(short, long)]
        category: Option<String>,

        /// official or community
        #[arg(short, long)]
        source: Option<String>,

        #[arg(short, long)]
        tag: Option<String>,

        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        #[arg(short, long, default_value_t = 0)]
        offset: usize,
    },

    /// Search titles, text, explanations and tags
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show one proverb with related ones
    #[command(alias = "view")]
    Show { id: String },

    /// Show a random proverb
    Random {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Collection statistics
    Stats,

    /// Check every proverb and report problems
    Validate,

    /// Write the collection to a JSON file
    Export { path: PathBuf },

    /// Example file statistics
    Examples,

    /// Print the effective configuration
    Config {
        /// Also write it to config.json in the config directory
        #[arg(long)]
        save: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            port: None,
            bind: None,
        }
    }
}

//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands;
use folio::commands::theme::ThemeAction;
use folio::Folio;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author = "Bhavanvir")]
#[command(version)]
#[command(about = "Static generator for a personal portfolio and blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Slug (file name) for the post; derived from the title if omitted
        #[arg(short, long)]
        slug: Option<String>,

        /// Create an .mdx file instead of .md
        #[arg(long)]
        mdx: bool,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Clean the public folder
    Clean,

    /// List site content
    List {
        /// Type of content to list (post, project)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only show the newest N posts
        #[arg(short, long)]
        latest: Option<usize>,
    },

    /// Show a single post and its neighbours
    Show {
        /// Slug of the post
        slug: String,
    },

    /// Show or change the color scheme (get, toggle, light, dark)
    Theme { action: Option<String> },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug { "folio=debug,info" } else { "folio=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { title, slug, mdx } => {
            let folio = Folio::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let path = commands::new::create_post(&folio, &title, slug.as_deref(), mdx)?;
            println!("Created: {:?}", path);
        }

        Commands::Generate => {
            let folio = Folio::new(&base_dir)?;
            tracing::info!("Generating static files...");
            folio.generate()?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let folio = Folio::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            folio.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type, latest } => {
            let folio = Folio::new(&base_dir)?;
            commands::list::run(&folio, &r#type, latest)?;
        }

        Commands::Show { slug } => {
            let folio = Folio::new(&base_dir)?;
            commands::show::run(&folio, &slug)?;
        }

        Commands::Theme { action } => {
            let folio = Folio::new(&base_dir)?;
            let action = ThemeAction::parse(action.as_deref())?;
            commands::theme::run(&folio, action)?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

//! CLI entry point for spacetravelling

use anyhow::Result;
use clap::{Parser, Subcommand};
use spacetravelling::commands::list::LoadMore;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "spacetravelling")]
#[command(version)]
#[command(about = "Browse the spacetravelling blog straight from its CMS", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Override the Prismic API endpoint
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Override the Prismic access token
    #[arg(long, global = true)]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default _config.yml
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// List the home feed
    #[command(alias = "ls")]
    List {
        /// Load this many extra pages after the first one
        #[arg(short, long, conflicts_with = "all")]
        pages: Option<usize>,

        /// Load every page
        #[arg(short, long)]
        all: bool,

        /// Print the pagination state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        /// Post uid
        uid: String,

        /// Print the post as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the post paths to pre-render
    Paths,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "spacetravelling=debug,info"
    } else {
        "spacetravelling=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let load_site = || -> Result<spacetravelling::Spacetravelling> {
        let mut site = spacetravelling::Spacetravelling::new(&base_dir)?;
        if let Some(endpoint) = &cli.endpoint {
            site.config.prismic.endpoint = endpoint.clone();
        }
        if let Some(token) = &cli.access_token {
            site.config.prismic.access_token = Some(token.clone());
        }
        site.config.validate()?;
        Ok(site)
    };

    match cli.command {
        Commands::Init { ref folder } => {
            let target_dir = if folder.is_absolute() {
                folder.clone()
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            spacetravelling::commands::init::init_site(&target_dir)?;
            println!("Initialized spacetravelling in {:?}", target_dir);
        }

        Commands::List {
            pages,
            all,
            json,
        } => {
            let site = load_site()?;
            let gateway = site.gateway()?;
            let load_more = match (all, pages) {
                (true, _) => LoadMore::All,
                (false, Some(pages)) => LoadMore::Pages(pages),
                (false, None) => LoadMore::None,
            };
            let out = spacetravelling::commands::list::run(&site, &gateway, load_more, json).await?;
            print!("{}", out);
        }

        Commands::Show { ref uid, json } => {
            let site = load_site()?;
            let gateway = site.gateway()?;
            let out = spacetravelling::commands::show::run(&site, &gateway, uid, json).await?;
            print!("{}", out);
        }

        Commands::Paths => {
            let site = load_site()?;
            let gateway = site.gateway()?;
            let out = spacetravelling::commands::paths::run(&site, &gateway).await?;
            print!("{}", out);
        }

        Commands::Version => {
            println!("spacetravelling version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

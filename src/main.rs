//! CLI entry point for microcms-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use microcms_blog::commands::list::ListKind;

#[derive(Parser)]
#[command(name = "microcms-blog")]
#[command(version)]
#[command(about = "Blog content from microCMS with a local Markdown fallback", long_about = None)]
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

    /// Create a new local post
    New {
        /// Title of the new post
        title: String,

        /// Slug (file name) for the post, derived from the title if omitted
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// List posts, categories or slugs
    List {
        #[arg(value_enum, default_value = "posts")]
        kind: ListKind,

        /// Number of posts for `latest`
        #[arg(short, default_value = "5")]
        n: usize,
    },

    /// Print a single post as JSON
    Show {
        slug: String,
    },

    /// Generate feeds and sitemaps
    #[command(alias = "g")]
    Generate,

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "microcms_blog=debug,info"
    } else {
        "microcms_blog=info"
    };

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
            microcms_blog::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { title, slug } => {
            let site = microcms_blog::Site::new(&base_dir)?;
            let path = microcms_blog::commands::new::create_post(&site, &title, slug.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::List { kind, n } => {
            let site = microcms_blog::Site::new(&base_dir)?;
            microcms_blog::commands::list::run(&site.blog(), kind, n).await?;
        }

        Commands::Show { slug } => {
            let site = microcms_blog::Site::new(&base_dir)?;
            microcms_blog::commands::show::run(&site.blog(), &slug).await?;
        }

        Commands::Generate => {
            let site = microcms_blog::Site::new(&base_dir)?;
            tracing::info!("Generating feeds...");
            microcms_blog::commands::generate::run(&site, &site.blog()).await?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip } => {
            let site = microcms_blog::Site::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            microcms_blog::server::start(&site, site.blog(), &ip, port).await?;
        }

        Commands::Clean => {
            let site = microcms_blog::Site::new(&base_dir)?;
            microcms_blog::commands::clean::run(&site)?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("microcms-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

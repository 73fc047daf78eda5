//! Bookstore CLI - Command-line administration of the book catalog

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the JSON catalog file
    #[arg(
        long,
        global = true,
        env = "BOOKSTORE_CATALOG",
        default_value = "./bookstore.json"
    )]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Fields shared by `add` and `update`
#[derive(Args)]
struct BookFields {
    /// Book title
    #[arg(short, long)]
    title: String,

    /// Book author
    #[arg(short, long)]
    author: String,

    /// Publication year
    #[arg(short, long)]
    year: Option<i32>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all books in the catalog
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a single book
    Show {
        /// Book identifier
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a book to the catalog
    Add {
        #[command(flatten)]
        fields: BookFields,
    },

    /// Replace the details of an existing book
    Update {
        /// Book identifier
        id: i64,

        #[command(flatten)]
        fields: BookFields,
    },

    /// Remove a book from the catalog
    Remove {
        /// Book identifier
        id: i64,
    },
}

impl From<BookFields> for bookstore_core::NewBook {
    fn from(fields: BookFields) -> Self {
        Self {
            title: fields.title,
            author: fields.author,
            published_year: fields.year,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookstore_cli=debug,bookstore_core=debug"
    } else {
        "bookstore_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let service = commands::open_catalog(&cli.catalog)?;

    match cli.command {
        Commands::List { json } => commands::list(&service, json),

        Commands::Show { id, json } => commands::show(&service, id, json),

        Commands::Add { fields } => commands::add(&service, fields.into()),

        Commands::Update { id, fields } => commands::update(&service, id, fields.into()),

        Commands::Remove { id } => commands::remove(&service, id),
    }
}

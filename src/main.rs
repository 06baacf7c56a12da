use clap::{Parser as ClapParser, Subcommand};
use esq_dsl::cli::{self, CliError, NormalizeOptions};
use std::io::{self, Read};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(ClapParser)]
#[command(name = "esq")]
#[command(about = "esq - Normalize and explore search-engine query documents")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print it in canonical form
    Normalize {
        /// Document text (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Indent the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show the offset a time zone resolves to
    Tz {
        /// Region name or literal offset (local zone if omitted)
        name: Option<String>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'esq docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    let result = match cli.command {
        Commands::Normalize { input, pretty } => run_normalize(input, pretty),
        Commands::Tz { name } => {
            println!("{}", cli::execute_tz(name.as_deref()));
            Ok(())
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_normalize(input: Option<String>, pretty: bool) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = NormalizeOptions { input, pretty };
    println!("{}", cli::execute_normalize(&options)?);
    Ok(())
}

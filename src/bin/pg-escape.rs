//! pg-escape — escape values into SQL text from the shell.
//!
//! # Usage
//!
//! ```bash
//! # Expand a template
//! pg-escape format 'select * from %I where name = %L' users "Tobi's"
//!
//! # Single values
//! pg-escape ident someStuff
//! pg-escape literal 'C:\temp'
//!
//! # JSON arguments (null, numbers, arrays)
//! pg-escape --json format 'where id in %L' '[1, 2, 3]'
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use pg_escape::prelude::*;
use pg_escape::{quote_dollar_with, quote_ident_with};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pg-escape")]
#[command(version)]
#[command(about = "Escape values into SQL literals, identifiers and dollar-quoted strings", long_about = None)]
#[command(after_help = "EXAMPLES:
    pg-escape format 'select %I from t where a = %L' desc \"it's\"
    pg-escape --json literal '[\"a\", null, 3]'
    pg-escape --seed 7 dollar \"Tobi's\"")]
struct Cli {
    /// Parse each argument as JSON instead of plain text
    #[arg(short, long, global = true)]
    json: bool,

    /// Config file (default: ./pg-escape.toml, then the user config dir)
    #[arg(short, long, global = true, env = "PG_ESCAPE_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for reproducible dollar-quote tags
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a %-template (%s, %I, %L, %Q, %%)
    Format {
        /// The template
        template: String,
        /// Arguments, bound in order
        args: Vec<String>,
    },
    /// Coerce a value to plain text (%s)
    #[command(name = "string")]
    Text {
        /// Omit for NULL
        value: Option<String>,
    },
    /// Quote a value as an identifier (%I)
    Ident {
        /// Omit for NULL
        value: Option<String>,
    },
    /// Quote a value as a literal (%L)
    Literal {
        /// Omit for NULL
        value: Option<String>,
    },
    /// Dollar-quote a value (%Q)
    Dollar {
        /// Omit for NULL
        value: Option<String>,
    },
    /// List the reserved words %I quotes
    Keywords,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "pg_escape=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::discover()?,
    };
    let formatter = config.formatter();

    let mut tags: Box<dyn TagSource> = match cli.seed {
        Some(seed) => Box::new(RandomTags(StdRng::seed_from_u64(seed))),
        None => Box::new(RandomTags(rand::thread_rng())),
    };

    let output = match &cli.command {
        Commands::Format { template, args } => {
            let values = args
                .iter()
                .map(|a| parse_value(Some(a.as_str()), cli.json))
                .collect::<anyhow::Result<Vec<_>>>()?;
            if cli.verbose {
                eprintln!("{} {}", "Template:".dimmed(), template.yellow());
                for (i, v) in values.iter().enumerate() {
                    eprintln!("  {} {:?}", format!("${}", i + 1).cyan(), v);
                }
            }
            formatter.format_with(template, &values, &mut *tags)?
        }
        Commands::Text { value } => coerce_string(&parse_value(value.as_deref(), cli.json)?),
        Commands::Ident { value } => quote_ident_with(
            &parse_value(value.as_deref(), cli.json)?,
            &formatter.options().keywords,
        )?,
        Commands::Literal { value } => quote_literal(&parse_value(value.as_deref(), cli.json)?),
        Commands::Dollar { value } => quote_dollar_with(
            &parse_value(value.as_deref(), cli.json)?,
            &mut *tags,
            &formatter.options().dollar,
        ),
        Commands::Keywords => {
            show_keywords(&formatter.options().keywords);
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}

/// Turn a CLI argument into a value. A missing argument is NULL.
fn parse_value(raw: Option<&str>, json: bool) -> anyhow::Result<Value> {
    let Some(raw) = raw else {
        return Ok(Value::Null);
    };
    if json {
        let parsed: serde_json::Value = serde_json::from_str(raw)
            .with_context(|| format!("Invalid JSON argument: {}", raw))?;
        Ok(parsed.into())
    } else {
        Ok(Value::Text(raw.to_string()))
    }
}

fn show_keywords(keywords: &Keywords) {
    println!("{}", "Reserved words (quoted by %I)".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let words: Vec<&str> = keywords.iter().collect();
    for row in words.chunks(6) {
        let cells: Vec<String> = row.iter().map(|w| format!("{:18}", w)).collect();
        println!("{}", cells.join(" ").trim_end());
    }

    println!();
    println!("{} word(s)", keywords.len().to_string().cyan());
}

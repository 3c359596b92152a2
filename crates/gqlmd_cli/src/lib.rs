//! Command-line interface for gqlmd.
//!
//! # Usage
//!
//! ```bash
//! # Render every page into a directory
//! gqlmd render schema.json --output docs/types --config gqlmd.json
//!
//! # Print one page
//! gqlmd print schema.json User
//!
//! # List the documented entities
//! gqlmd list schema.json
//! ```

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};
use colored::Colorize;
use gqlmd_core::{slugify, MARKDOWN_EOP};
use gqlmd_printer::{Entity, Printer, PrinterConfig};
use gqlmd_schema::{Schema, SchemaElement};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "gqlmd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a page for every type and directive
    Render {
        /// Schema document (JSON)
        schema: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "docs/types")]
        output: PathBuf,
    },

    /// Print the page of one type or directive
    Print {
        /// Schema document (JSON)
        schema: PathBuf,

        /// Type name, or `@name` for a directive
        name: String,
    },

    /// List the types and directives of a schema
    List {
        /// Schema document (JSON)
        schema: PathBuf,
    },
}

/// Runs a command, returning the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match &cli.command {
        Commands::Render { schema, output } => {
            let schema = load_schema(schema)?;
            render(&schema, &config, output, &cli)
        }
        Commands::Print { schema, name } => {
            let schema = load_schema(schema)?;
            let printer_config = config.resolve(&schema);
            let printer = Printer::new(&schema, &printer_config);
            let entity = printer
                .entity(name)
                .ok_or_else(|| CliError::UnknownEntity(name.clone()))?;
            let page = printer.print_entity(entity);
            if page.is_empty() {
                if !cli.quiet {
                    eprintln!("{} `{}` is excluded from the documentation", "Info:".blue(), name);
                }
                return Ok(0);
            }
            print!("{}", with_declaration(&config, page));
            Ok(0)
        }
        Commands::List { schema } => {
            let schema = load_schema(schema)?;
            let printer_config = PrinterConfig::default();
            let printer = Printer::new(&schema, &printer_config);
            for entity in printer.entities() {
                println!("{:<10} {}", entity.page_category().to_string().dimmed(), entity.name());
            }
            Ok(0)
        }
    }
}

/// Reads and parses a schema document.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let schema = Schema::from_json(&source).map_err(|source| CliError::Schema {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(types = schema.types.len(), directives = schema.directives.len(), "schema loaded");
    Ok(schema)
}

/// Path of an entity page below the output directory.
pub fn page_path(output: &Path, entity: Entity<'_>, config: &PrinterConfig) -> PathBuf {
    output
        .join(entity.page_category().directory())
        .join(format!("{}{}", slugify(entity.name()), config.link_extension))
}

fn with_declaration(config: &Config, page: String) -> String {
    match &config.mdx_declaration {
        Some(declaration) if !declaration.is_empty() => format!("{declaration}{MARKDOWN_EOP}{page}"),
        _ => page,
    }
}

fn render(schema: &Schema, config: &Config, output: &Path, cli: &Cli) -> Result<i32> {
    let printer_config = config.resolve(schema);
    let printer = Printer::new(schema, &printer_config);
    let entities: Vec<Entity<'_>> = printer.entities().collect();

    let pages: Vec<(Entity<'_>, PathBuf, String)> = entities
        .par_iter()
        .filter_map(|&entity| {
            let page = printer.print_entity(entity);
            (!page.is_empty()).then(|| (entity, page_path(output, entity, &printer_config), page))
        })
        .collect();
    check_collisions(&pages)?;

    pages
        .par_iter()
        .try_for_each(|(_, path, page)| write_page(path, &with_declaration(config, page.clone())))?;

    if cli.verbose {
        for (_, path, _) in &pages {
            println!("{} {}", "Wrote".green(), path.display());
        }
    }
    info!(pages = pages.len(), skipped = entities.len() - pages.len(), "render complete");
    if !cli.quiet {
        println!(
            "{} {} page(s) rendered into {}",
            "Success:".green().bold(),
            pages.len(),
            output.display()
        );
    }
    Ok(0)
}

/// Fails when two entities would be written to the same page, e.g. `UserId`
/// and `user_id`.
fn check_collisions(pages: &[(Entity<'_>, PathBuf, String)]) -> Result<()> {
    let mut owners: FxHashMap<&Path, &str> = FxHashMap::default();
    for (entity, path, _) in pages {
        if let Some(first) = owners.insert(path.as_path(), entity.name()) {
            warn!(path = %path.display(), first, second = entity.name(), "page path collision");
            return Err(CliError::PageCollision {
                path: path.clone(),
                first: first.to_string(),
                second: entity.name().to_string(),
            });
        }
    }
    Ok(())
}

fn write_page(path: &Path, page: &str) -> Result<()> {
    let write_error = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, page).map_err(write_error)
}

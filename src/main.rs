//! Doctext CLI - Inspect the text documents built from TypeScript doc comments

use clap::{Parser, Subcommand};
use doctext::config;
use doctext::processor::{self, ProcessorRegistry};
use doctext::ui;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "doctext")]
#[command(version)]
#[command(about = "Documentation comments of TypeScript sources as lintable text documents")]
#[command(long_about = r#"
Doctext extracts the JSDoc comments of TypeScript files into a flat text
document (a Document root with one Str node per comment) for prose linting.

Example usage:
  doctext extensions
  doctext ast src/index.ts
  doctext comments ./src --config doctext.toml
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file (defaults to ./doctext.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the file extensions that are processed
    Extensions,

    /// Print the document tree of each file as JSON
    Ast {
        /// Files or directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List the documentation comments of each file
    Comments {
        /// Files or directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let options = config::load_config(cli.config.as_deref())?.unwrap_or_default();
    let registry = processor::default_registry(options);

    match cli.command {
        Commands::Extensions => {
            for ext in registry.available_extensions() {
                println!("{}", ext);
            }
        }

        Commands::Ast { paths } => {
            let mut documents = Vec::new();
            for_each_file(&registry, &paths, |path, text| {
                if let Some(doc) = registry.pre_process(path, text)? {
                    documents.push(serde_json::json!({
                        "filePath": path.display().to_string(),
                        "ast": doc,
                    }));
                }
                Ok(())
            });
            println!("{}", serde_json::to_string_pretty(&documents)?);
        }

        Commands::Comments { paths } => {
            let mut files = 0;
            let mut comments = 0;
            for_each_file(&registry, &paths, |path, text| {
                let Some(doc) = registry.pre_process(path, text)? else {
                    return Ok(());
                };
                files += 1;
                comments += doc.children.len();
                if doc.is_empty() {
                    return Ok(());
                }
                ui::file_header(&path.display().to_string());
                for child in &doc.children {
                    ui::comment(&child.loc, &child.value);
                }
                Ok(())
            });

            ui::section("Summary");
            ui::summary_row("Files:", &files.to_string());
            ui::summary_row("Comments:", &comments.to_string());
        }
    }

    Ok(())
}

/// Run `handle` on every handled file under `paths`.
///
/// Read and processing failures are logged and skipped.
fn for_each_file<F>(registry: &ProcessorRegistry, paths: &[PathBuf], mut handle: F)
where
    F: FnMut(&Path, &str) -> doctext::Result<()>,
{
    for root in paths {
        for entry in ignore::WalkBuilder::new(root).build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::error!("Failed to walk {}: {}", root.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if registry.find_processor(path).is_none() {
                if path == root.as_path() {
                    ui::warn(&format!("No processor handles {}", path.display()));
                }
                continue;
            }

            let text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!("Failed to read {}: {}", path.display(), e);
                    continue;
                }
            };
            tracing::debug!("Processing {}", path.display());
            if let Err(e) = handle(path, &text) {
                tracing::error!("Failed to process {}: {}", path.display(), e);
                ui::error(&format!("{}: {}", path.display(), e));
            }
        }
    }
}

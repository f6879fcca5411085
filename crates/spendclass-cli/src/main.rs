//! `spendclass` command line: category inference and category management.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use spendclass_store::{CategorySource, SqliteStore};

#[derive(Parser)]
#[command(
    name = "spendclass",
    version,
    about = "Infer budget categories for transaction descriptions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank every configured category against a transaction description.
    CategoryInfer {
        /// Transaction description to classify.
        #[arg(long)]
        description: String,

        /// SQLite database holding the categories table.
        #[arg(long, default_value = "budget.db")]
        db_file: PathBuf,

        /// Directory containing model.onnx and tokenizer.json.
        #[arg(long, default_value = "models/bart-large-mnli")]
        model_dir: PathBuf,

        /// Keep only the N best matches.
        #[arg(long)]
        top_k: Option<usize>,
    },

    /// List configured categories.
    Categories {
        #[arg(long, default_value = "budget.db")]
        db_file: PathBuf,
    },

    /// Create a category, or update its description if the label exists.
    CreateCategory {
        #[arg(long)]
        label: String,

        #[arg(long)]
        description: String,

        #[arg(long, default_value = "budget.db")]
        db_file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Explicit, once, at startup — log verbosity is never a side effect of
    // importing a library.
    tracing_subscriber::fmt::init();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "spendclass");

    match Cli::parse().command {
        Command::CategoryInfer {
            description,
            db_file,
            model_dir,
            top_k,
        } => category_infer(&description, &db_file, &model_dir, top_k),
        Command::Categories { db_file } => list_categories(&db_file),
        Command::CreateCategory {
            label,
            description,
            db_file,
        } => {
            let store = SqliteStore::new(db_file);
            let id = store.upsert_category(&label, &description)?;
            println!("Category {id} created or updated: {label}");
            Ok(())
        }
    }
}

#[cfg(feature = "onnx")]
fn category_infer(
    description: &str,
    db_file: &Path,
    model_dir: &Path,
    top_k: Option<usize>,
) -> anyhow::Result<()> {
    use anyhow::Context;

    let store = SqliteStore::new(db_file);
    let mut engine =
        spendclass_ai::ZeroShotClassifier::load(model_dir).context("loading zero-shot model")?;

    let result = spendclass_ai::infer_top_k(description, &store, &mut engine, top_k)?;
    println!("{}", serde_json::to_string_pretty(&result.report())?);
    Ok(())
}

#[cfg(not(feature = "onnx"))]
fn category_infer(
    _description: &str,
    _db_file: &Path,
    _model_dir: &Path,
    _top_k: Option<usize>,
) -> anyhow::Result<()> {
    anyhow::bail!("this build has no classification engine; rebuild with the `onnx` feature")
}

fn list_categories(db_file: &Path) -> anyhow::Result<()> {
    let store = SqliteStore::new(db_file);
    let categories = store.list_categories()?;

    println!("Category ID | Category Label");
    println!("---------------------------");
    for category in &categories {
        println!("{:>11} | {}", category.id, category.label);
    }
    Ok(())
}

mod interactive;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sitefind_core::{DocumentList, SearchConfig, ThemeStore};
use sitefind_search::{QueryKind, SearchSession};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sitefind", version, about = "Query a static site search index")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a single query and print the ranked results
    Query {
        /// JSON array of {url, title, description?}
        index: PathBuf,
        query: String,
        /// Use fzf-style subsequence matching instead of typo-tolerant matching
        #[arg(long)]
        subsequence: bool,
        /// TOML search config
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read queries from stdin, one per line; a result number opens it
    Interactive {
        index: PathBuf,
        #[arg(long)]
        subsequence: bool,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Load an index file and report its size and duplicate URLs
    Check { index: PathBuf },
    /// Show or toggle the stored theme preference
    Theme {
        #[arg(long, default_value = "theme.toml")]
        store: PathBuf,
        #[arg(long)]
        toggle: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitefind=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Query {
            index,
            query,
            subsequence,
            config,
            json,
        } => {
            let documents = load_index(&index)?;
            let config = load_config(config.as_deref())?;
            let mut session =
                SearchSession::mount(documents, config, || {}).with_query_kind(kind(subsequence));
            let view = session.set_query(&query);
            if json {
                render::write_json(&mut out, view)?;
            } else {
                render::write_view(&mut out, view)?;
            }
        }
        Command::Interactive {
            index,
            subsequence,
            config,
        } => {
            let documents = load_index(&index)?;
            let config = load_config(config.as_deref())?;
            let selected = interactive::run(
                documents,
                config,
                kind(subsequence),
                io::stdin().lock(),
                &mut out,
            )?;
            if let Some(url) = selected {
                writeln!(out, "{url}")?;
            }
        }
        Command::Check { index } => {
            let documents = load_index(&index)?;
            render::write_check(&mut out, &documents)?;
        }
        Command::Theme { store, toggle } => {
            let mut theme = ThemeStore::init_from_storage(&store)
                .with_context(|| format!("reading theme preference from {}", store.display()))?;
            if toggle {
                theme
                    .toggle()
                    .with_context(|| format!("writing theme preference to {}", store.display()))?;
            }
            writeln!(out, "{}", theme.current())?;
        }
    }

    Ok(())
}

fn kind(subsequence: bool) -> QueryKind {
    if subsequence {
        QueryKind::Subsequence
    } else {
        QueryKind::Fuzzy
    }
}

fn load_index(path: &Path) -> Result<DocumentList> {
    DocumentList::load(path).with_context(|| format!("loading search index {}", path.display()))
}

/// Missing config means defaults; invalid values are reported and replaced.
fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };

    let config = SearchConfig::load(path)
        .with_context(|| format!("loading search config {}", path.display()))?;
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(config);
    }

    for error in &errors {
        tracing::warn!(path = %path.display(), "{error}; using default");
    }
    Ok(config.with_defaults_for_invalid())
}

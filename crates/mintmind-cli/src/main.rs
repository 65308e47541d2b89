//! MintMind CLI — a terminal C editor with keyword autocomplete.

mod runner;

use anyhow::{Context, Result};
use clap::Parser;
use mintmind_config::{CliOverrides, EditorConfig};
use mintmind_core::vocabulary::c_trie;
use mintmind_core::{EditorSession, TextBuffer};
use mintmind_terminal::highlight::CHighlighter;
use mintmind_terminal::{EditorExit, ScreenEditor};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Parser)]
#[command(name = "mintmind", version, about = "A C editor with keyword autocomplete")]
struct Cli {
    /// Open an existing file as the initial document
    #[arg(long)]
    open: Option<PathBuf>,

    /// File the document is saved to before compiling
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// C compiler to use (overrides MINTMIND_CC)
    #[arg(long)]
    compiler: Option<String>,

    /// Disable syntax highlighting
    #[arg(long)]
    no_highlight: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose/debug logging
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = EditorConfig::load(CliOverrides {
        output: cli.output,
        compiler: cli.compiler,
        no_highlight: cli.no_highlight,
    })
    .context("Failed to load configuration")?;

    let trie = c_trie(&config.extra_vocabulary);
    tracing::debug!(tokens = trie.len(), "vocabulary loaded");

    let session = match &cli.open {
        Some(path) => {
            let source = std::fs::read(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            let buffer = TextBuffer::from_source(&source, config.limits);
            EditorSession::with_buffer(buffer, trie, config.max_suggestions)
        }
        None => EditorSession::new(trie, config.limits, config.max_suggestions),
    };

    let highlighter = config.highlight.then(|| CHighlighter::new(&config.theme));
    let editor = ScreenEditor::new(session, highlighter);

    edit_loop(editor, &config).await
}

/// Set up logging. The editor owns the terminal, so `--log-file` is the way
/// to watch debug output while editing.
fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let log_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Run the editor, servicing save and run requests, until the user quits.
async fn edit_loop(mut editor: ScreenEditor, config: &EditorConfig) -> Result<()> {
    loop {
        let (returned, exit) = editor.run().await.context("Editor terminated")?;
        editor = returned;

        match exit {
            EditorExit::Quit => return Ok(()),
            EditorExit::Save => {
                let message = match runner::save(editor.session().buffer(), &config.output) {
                    Ok(()) => format!("Saved to {}", config.output.display()),
                    Err(e) => {
                        tracing::warn!("Save failed: {e}");
                        format!("Save failed: {e}")
                    }
                };
                editor.set_status(message);
            }
            EditorExit::Run => {
                if let Err(e) = runner::save(editor.session().buffer(), &config.output) {
                    tracing::warn!("Save failed: {e}");
                    editor.set_status(format!("Save failed: {e}"));
                    continue;
                }
                eprintln!(
                    "Compiling {} with {}...",
                    config.output.display(),
                    config.compiler
                );
                match runner::compile_and_run(config).await {
                    Ok(status) => eprintln!("\nProgram exited with {status}"),
                    Err(e) => {
                        tracing::warn!("Build failed: {e}");
                        eprintln!("\n{e}");
                    }
                }
                runner::wait_for_enter().await?;
            }
        }
    }
}

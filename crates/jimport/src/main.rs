//! Binary entry point for the jimport CLI.
//!
//! ## Usage
//!
//! ```bash
//! # Add a class import (applies changes by default)
//! jimport add java.util.List src/main/java/com/example/Foo.java
//!
//! # Add a static import across a directory tree
//! jimport add --static org.assertj.core.api.Assertions.assertThat src/test/java
//!
//! # Preview without writing (unified diff)
//! jimport add --dry-run java.util.List src/main/java
//!
//! # Machine-readable output
//! jimport add --format json java.util.List src/main/java
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use jimport::cli::{render_text, run_add, AddOptions};
use jimport_core::error::JimportError;
use jimport_core::output::{emit_response, ErrorResponse};
use jimport_core::statement::ImportKind;

// ============================================================================
// CLI Structure
// ============================================================================

/// Idempotent Java import insertion.
///
/// Inserts an import line into Java source files: after the last existing
/// import, else after the package declaration, else at the top of the file.
/// Files that already contain the import are left untouched.
#[derive(Parser, Debug)]
#[command(name = "jimport", version, about = "Idempotent Java import insertion")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

/// Global arguments shared by all subcommands.
#[derive(Parser, Debug)]
struct GlobalArgs {
    /// Log level for tracing output.
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Output format for the add command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable report (default).
    #[default]
    Text,
    /// Full JSON response.
    Json,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Add an import to one or more Java files (applies by default).
    Add {
        /// Fully-qualified name to import (e.g. `java.util.List`, or
        /// `java.util.Collections.emptyList` with `--static`).
        fqn: String,
        /// Target files or directories (directories are walked for `.java`
        /// files).
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Import a static member (`import static {fqn};`).
        #[arg(long = "static")]
        static_member: bool,
        /// Preview changes without writing files.
        #[arg(long)]
        dry_run: bool,
        /// Output format.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.log_level);
    run(cli)
}

fn run(cli: Cli) -> ExitCode {
    let Command::Add {
        fqn,
        paths,
        static_member,
        dry_run,
        format,
    } = cli.command;

    let opts = AddOptions {
        fqn,
        kind: if static_member {
            ImportKind::Static
        } else {
            ImportKind::Class
        },
        paths,
        dry_run,
    };

    match run_add(&opts) {
        Ok(response) => {
            match format {
                OutputFormat::Text => print!("{}", render_text(&response)),
                OutputFormat::Json => {
                    let _ = emit_response(&response, &mut io::stdout());
                }
            }
            let _ = io::stdout().flush();
            ExitCode::from(response.exit_code())
        }
        Err(err) => emit_error(&err, format),
    }
}

/// Report a whole-invocation failure and pick the exit code.
fn emit_error(err: &JimportError, format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Text => eprintln!("error: {}", err),
        OutputFormat::Json => {
            let response = ErrorResponse::from_error(err);
            let _ = emit_response(&response, &mut io::stdout());
            let _ = io::stdout().flush();
        }
    }
    ExitCode::from(err.error_code().code())
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

// ============================================================================
// Tests
// ============================================================================

//! # Bundle Shell Library
//!
//! A line-oriented host for the pricing engine. It stands in for the
//! presentation layer: every line on stdin is a user action, every answer on
//! stdout is what a UI would render.
//!
//! ## Module Organization
//! ```text
//! bundle_shell_lib/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Read-only catalog wrapper
//! │   ├── selection.rs◄─── Selection state management
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Parsing, dispatch, responses
//! │   ├── selection.rs◄─── toggle / clear / quote
//! │   ├── catalog.rs  ◄─── Product listing
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── render.rs       ◄─── Text / JSON output
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use bundle_core::Catalog;
use commands::{dispatch, Command};
use render::render;
use state::{CatalogState, ConfigState, SelectionState};

/// All state the commands run against.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    pub catalog: CatalogState,
    pub selection: SelectionState,
    pub config: ConfigState,
}

impl Shell {
    /// Creates a shell over `catalog` with an empty selection.
    pub fn new(catalog: Catalog, config: ConfigState) -> Self {
        Shell {
            catalog: CatalogState::new(catalog),
            selection: SelectionState::new(),
            config,
        }
    }
}

/// Runs the shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ── stderr, BUNDLE_LOG / RUST_LOG, default INFO  │
/// │  2. Load Configuration ── BUNDLE_* environment variables               │
/// │  3. Build State ───────── standard catalog, empty selection            │
/// │  4. Session Loop ──────── one command per line until EOF or `quit`     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Logging comes first so configuration warnings reach stderr.
pub fn run() -> io::Result<()> {
    init_tracing(ConfigState::log_filter_from_env().as_deref());

    info!("Starting bundle pricing shell");

    let config = ConfigState::from_env();
    let shell = Shell::new(Catalog::standard(), config);
    info!(products = shell.catalog.inner().len(), "Catalog loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&shell, stdin.lock(), stdout.lock())
}

/// Reads commands from `input` and writes rendered results to `output`.
///
/// Blank lines and `#` comments are skipped. A failing command is rendered as
/// an error and the session continues; only I/O errors end it early.
pub fn run_session<R, W>(shell: &Shell, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut quit = false;
        let result = match trimmed.parse::<Command>() {
            Ok(command) => {
                quit = command == Command::Quit;
                dispatch(shell, &command)
            }
            Err(e) => {
                warn!(line = %trimmed, error = %e, "invalid command");
                Err(e.into())
            }
        };

        let rendered = render(&shell.config, &result)
            .unwrap_or_else(|e| format!("error: {}", e.message));
        writeln!(output, "{}", rendered)?;
        output.flush()?;

        if quit {
            debug!("quit requested");
            break;
        }
    }

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `BUNDLE_LOG=debug` - Show engine transitions
/// - `RUST_LOG=bundle_core=debug` - Same, via the standard variable
/// - Default: INFO level
///
/// Events go to stderr so stdout stays parseable in JSON mode.
fn init_tracing(directive: Option<&str>) {
    let (filter, rejected) = env_filter(directive);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    if let Some(error) = rejected {
        warn!(directive = directive.unwrap_or_default(), %error, "ignoring invalid BUNDLE_LOG");
    }
}

/// Builds the log filter from a `BUNDLE_LOG` directive.
///
/// An unparseable directive falls back to `RUST_LOG`, then `info`, and the
/// parse error is handed back so it can be logged once a subscriber exists.
fn env_filter(directive: Option<&str>) -> (EnvFilter, Option<String>) {
    let fallback = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match directive.map(EnvFilter::try_new) {
        Some(Ok(filter)) => (filter, None),
        Some(Err(e)) => (fallback(), Some(e.to_string())),
        None => (fallback(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::OutputFormat;

    fn session(shell: &Shell, script: &str) -> String {
        let mut out = Vec::new();
        run_session(shell, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_session_scenario() {
        let shell = Shell::default();
        let out = session(&shell, "toggle stock\n\n# comment\ntoggle maps\nquote\n");

        assert_eq!(out.matches("Total $435").count(), 2);
        assert_eq!(shell.selection.snapshot().len(), 2);
    }

    #[test]
    fn test_session_stops_at_quit() {
        let shell = Shell::default();
        let out = session(&shell, "toggle gantt\nquit\ntoggle maps\n");

        assert!(out.contains("Total $222"));
        assert_eq!(out.lines().last(), Some("bye"));
        assert!(!shell.selection.snapshot().contains("maps"));
    }

    #[test]
    fn test_session_survives_errors() {
        let shell = Shell::default();
        let out = session(&shell, "dance\ntoggle charts\ntoggle core\n");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "error: unknown command 'dance', try 'help'");
        assert_eq!(lines[1], "error: Product not found: charts");
        assert!(out.contains("Total $185   bundle owner: core"));
    }

    #[test]
    fn test_bundle_log_directive() {
        let (_, rejected) = env_filter(Some("bundle_core=debug"));
        assert_eq!(rejected, None);

        let (_, rejected) = env_filter(Some("bundle_core=loud"));
        assert!(rejected.is_some());
    }

    #[test]
    fn test_session_json_lines() {
        let mut shell = Shell::default();
        shell.config.output = OutputFormat::Json;
        let out = session(&shell, "toggle core\ntoggle maps\nclear\n");

        let totals: Vec<i64> = out
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
            .map(|v| v["data"]["quote"]["total"].as_i64().unwrap())
            .collect();
        assert_eq!(totals, vec![185, 250, 0]);
    }
}

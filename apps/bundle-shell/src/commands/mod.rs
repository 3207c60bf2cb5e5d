//! # Commands Module
//!
//! All commands the shell understands, one per input line.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (parsing, dispatch, responses)
//! ├── selection.rs  ◄─── toggle / clear / quote
//! ├── catalog.rs    ◄─── product listing
//! └── config.rs     ◄─── configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line          Command              Handler                       │
//! │  ──────────          ───────              ───────                       │
//! │  "toggle maps"  ──►  Toggle("maps")  ──►  toggle_product(...)           │
//! │  "clear"        ──►  Clear           ──►  clear_selection(...)          │
//! │  "quote"        ──►  Quote           ──►  get_quote(...)                │
//! │  "catalog"      ──►  Catalog         ──►  list_products(...)            │
//! │  "config"       ──►  Config          ──►  get_config(...)               │
//! │                                                                         │
//! │  Handler returns Result<Response, ApiError> ──► render ──► stdout       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each handler declares only the state it needs.

pub mod catalog;
pub mod config;
pub mod selection;

use std::str::FromStr;

use bundle_core::Product;
use serde::Serialize;
use thiserror::Error;

use crate::error::ApiError;
use crate::state::ConfigState;
use crate::Shell;

pub use selection::SelectionResponse;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `toggle <id>`
    Toggle(String),
    /// `clear`
    Clear,
    /// `quote`
    Quote,
    /// `catalog`
    Catalog,
    /// `config`
    Config,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

/// Why an input line is not a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', try 'help'")]
    UnknownCommand(String),

    #[error("'{0}' expects a product id")]
    MissingArgument(String),

    #[error("'{command}' takes no argument, got '{argument}'")]
    UnexpectedArgument { command: String, argument: String },
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ParseError::Empty)?.to_ascii_lowercase();
        let argument = words.next();

        if let Some(extra) = words.next() {
            return Err(ParseError::UnexpectedArgument {
                command: name,
                argument: extra.to_string(),
            });
        }

        let command = match name.as_str() {
            "toggle" | "t" => {
                let id = argument.ok_or_else(|| ParseError::MissingArgument(name.clone()))?;
                return Ok(Command::Toggle(id.to_ascii_lowercase()));
            }
            "clear" => Command::Clear,
            "quote" | "q" => Command::Quote,
            "catalog" | "ls" => Command::Catalog,
            "config" => Command::Config,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(ParseError::UnknownCommand(name.clone())),
        };

        match argument {
            Some(argument) => Err(ParseError::UnexpectedArgument {
                command: name,
                argument: argument.to_string(),
            }),
            None => Ok(command),
        }
    }
}

/// Everything a command can answer with.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Response {
    Selection(SelectionResponse),
    Catalog(Vec<Product>),
    Config(ConfigState),
    Help(Vec<&'static str>),
    /// Acknowledges `quit`; the session ends after rendering it.
    Quit,
}

/// Usage lines shown by `help`.
pub const HELP: &[&str] = &[
    "toggle <id>   select or deselect a product (core, stock, maps, gantt)",
    "clear         drop every selection",
    "quote         show prices and total",
    "catalog       list products",
    "config        show shell configuration",
    "quit          leave the shell",
];

/// Runs a parsed command against the shell state.
pub fn dispatch(shell: &Shell, command: &Command) -> Result<Response, ApiError> {
    match command {
        Command::Toggle(id) => {
            selection::toggle_product(&shell.catalog, &shell.selection, id)
                .map(Response::Selection)
        }
        Command::Clear => Ok(Response::Selection(selection::clear_selection(
            &shell.catalog,
            &shell.selection,
        ))),
        Command::Quote => Ok(Response::Selection(selection::get_quote(
            &shell.catalog,
            &shell.selection,
        ))),
        Command::Catalog => Ok(Response::Catalog(catalog::list_products(&shell.catalog))),
        Command::Config => Ok(Response::Config(config::get_config(&shell.config))),
        Command::Help => Ok(Response::Help(HELP.to_vec())),
        Command::Quit => Ok(Response::Quit),
    }
}

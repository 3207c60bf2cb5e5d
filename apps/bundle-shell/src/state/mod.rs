//! # State Module
//!
//! Manages application state for the shell.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each concern
//! gets its own type and commands declare exactly the state they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌────────────────┐  ┌──────────────────┐            │
//! │  │ CatalogState │  │ SelectionState │  │   ConfigState    │            │
//! │  │              │  │                │  │                  │            │
//! │  │  Catalog     │  │  Arc<Mutex<    │  │  currency        │            │
//! │  │  (fixed)     │  │    Selection   │  │  output format   │            │
//! │  │              │  │  >>            │  │  log filter      │            │
//! │  └──────────────┘  └────────────────┘  └──────────────────┘            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: Immutable after startup                               │
//! │  • SelectionState: Each toggle/clear runs under one lock               │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod selection;

pub use catalog::CatalogState;
pub use config::{ConfigState, OutputFormat};
pub use selection::SelectionState;

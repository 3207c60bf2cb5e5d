//! # Config Commands
//!
//! Retrieval of the shell configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current shell configuration.
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

//! # Bundle Shell Entry Point
//!
//! ```text
//! $ printf 'toggle stock\ntoggle maps\n' | bundle-shell
//! selected
//!   [x] Core    Included (~$185~)
//!   [x] Stock   $370                 core inc.
//!   ...
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match bundle_shell_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "shell terminated");
            eprintln!("bundle-shell: {}", e);
            ExitCode::FAILURE
        }
    }
}

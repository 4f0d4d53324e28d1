//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use crate::error::PromptError;
use tracing::error;

/// Exit code for an error: the `PromptError` code when there is one, else 1
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<PromptError>()
        .map_or(1, PromptError::exit_code)
}

/// Handle fatal errors and exit with appropriate status code
///
/// - `verbose = 0`: user-friendly message only
/// - `verbose >= 1`: adds the full error chain
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    if let Some(prompt_err) = error.downcast_ref::<PromptError>() {
        eprintln!("{}", prompt_err.user_message());
        if verbose >= 1 {
            eprintln!("\nContext Chain:\n{}", prompt_err.developer_message());
        }
    } else {
        eprintln!("Error: {error}");
        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }
    }

    std::process::exit(exit_code_for(&error))
}

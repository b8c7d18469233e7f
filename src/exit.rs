// src/exit.rs
//! Process exit codes for `digraph`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DigraphExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (IO, config, render output).
    Error = 1,
    /// Input validation failed (parse error, unknown node in a connection).
    InvalidInput = 2,
}

impl DigraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Classifies a failed command by the graph error at the root of its chain.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        let invalid = err
            .chain()
            .filter_map(|cause| cause.downcast_ref::<GraphError>())
            .any(GraphError::is_invalid_input);
        if invalid {
            Self::InvalidInput
        } else {
            Self::Error
        }
    }
}

impl Termination for DigraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

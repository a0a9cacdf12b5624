//! CLI errors and their exit codes.
//!
//! | code | meaning                                         |
//! |------|-------------------------------------------------|
//! | 0    | success                                         |
//! | 2    | argument parse error (clap, before `run`)       |
//! | 10   | sketch error: unknown name, bad params or size  |
//! | 11   | snapshot could not be written                   |
//! | 12   | `--params` is not valid JSON                    |
//! | 13   | JSON report could not be serialized             |

use serde_json::json;
use thiserror::Error;
use undulate_core::EngineError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(EngineError),

    #[error("cannot write snapshot: {0}")]
    Io(String),

    #[error("invalid --params JSON: {0}")]
    Params(serde_json::Error),

    #[error("cannot serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine(_) => 10,
            CliError::Io(_) => 11,
            CliError::Params(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }

    /// The text written to stderr: plain, or a JSON object in `--json` mode.
    pub fn report(&self, json_mode: bool) -> String {
        if !json_mode {
            return format!("error: {self}");
        }
        let body = json!({"error": self.to_string(), "exit_code": self.exit_code()});
        serde_json::to_string_pretty(&body).unwrap_or_else(|_| format!("error: {self}"))
    }
}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Io(msg) => CliError::Io(msg),
            other => CliError::Engine(other),
        }
    }
}

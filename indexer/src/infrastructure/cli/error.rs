use thiserror::Error;

/// Error type for the validator tooling command line
#[derive(Debug, Error)]
pub enum CliError {
    /// The executable could not be started
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    /// The command ran but exited unsuccessfully
    #[error("`{command}` exited with {}: {stderr}", exit_label(.status))]
    NonZeroExit {
        command: String,
        status: Option<i32>,
        stderr: String,
    },
    /// Standard output was not JSON, or not the expected shape
    #[error("`{command}` produced unexpected output: {message}")]
    Decode { command: String, message: String },
}

impl CliError {
    /// The command line that failed
    pub fn command(&self) -> &str {
        match self {
            CliError::Spawn { command, .. }
            | CliError::NonZeroExit { command, .. }
            | CliError::Decode { command, .. } => command,
        }
    }
}

fn exit_label(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

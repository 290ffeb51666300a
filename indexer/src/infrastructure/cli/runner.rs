use log::debug;
use serde_json::Value;
use tokio::process::Command;

use crate::infrastructure::cli::error::CliError;

/// Runs one executable with an argv vector and parses its standard output as JSON
#[derive(Debug, Clone)]
pub struct CliRunner {
    binary: String,
}

impl CliRunner {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Execute the command and decode its standard output
    pub async fn run(&self, args: &[&str]) -> Result<Value, CliError> {
        let command = self.display(args);
        debug!("Running {}", command);

        let output = Command::new(&self.binary)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| CliError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CliError::NonZeroExit {
                command,
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|e| CliError::Decode {
            command,
            message: e.to_string(),
        })
    }

    fn display(&self, args: &[&str]) -> String {
        std::iter::once(self.binary.as_str())
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_run_parses_stdout() {
        let runner = CliRunner::new("sh");
        let value = runner
            .run(&["-c", r#"echo '{"validators": []}'"#])
            .await
            .unwrap();

        assert_eq!(value, json!({"validators": []}));
    }

    #[tokio::test]
    async fn test_run_reports_nonzero_exit() {
        let runner = CliRunner::new("sh");
        let err = runner
            .run(&["-c", "echo 'rpc unreachable' >&2; exit 3"])
            .await
            .unwrap_err();

        match err {
            CliError::NonZeroExit { status, stderr, .. } => {
                assert_eq!(status, Some(3));
                assert_eq!(stderr, "rpc unreachable");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_run_rejects_non_json_output() {
        let runner = CliRunner::new("sh");
        let err = runner.run(&["-c", "echo 'Error: not ready'"]).await.unwrap_err();

        assert!(matches!(err, CliError::Decode { .. }));
        assert!(err.command().starts_with("sh -c"));
    }

    #[tokio::test]
    async fn test_run_reports_missing_binary() {
        let runner = CliRunner::new("nexscan-no-such-binary");
        let err = runner.run(&["slot"]).await.unwrap_err();

        assert!(matches!(err, CliError::Spawn { .. }));
    }
}

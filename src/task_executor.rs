use crate::argg::CommandTemplate;
use std::fmt::{Display, Formatter};
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Spawn(#[from] std::io::Error),
    #[error("{0}")]
    Exited(ExitStatus),
}

/// One invocation of the external command with a single batch of piped
/// args appended after the template's fixed arguments.
pub struct TaskExecutor {
    command: Command,
    executable: String,
}

impl TaskExecutor {
    pub fn new(template: &CommandTemplate, batch: Vec<String>) -> Self {
        let mut command = Command::new(template.program());
        command
            .args(template.merge(batch))
            // stdin is the already-drained pipe, never hand it to children
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        Self {
            command,
            executable: template.program().to_owned(),
        }
    }

    pub async fn execute(mut self) -> TaskReport {
        tracing::debug!("executing: {}", self.executable);
        let result = self.run().await;
        TaskReport {
            executable: self.executable,
            result,
        }
    }

    async fn run(&mut self) -> Result<ExitStatus, TaskError> {
        let status = self.command.spawn()?.wait().await?;
        if status.success() {
            Ok(status)
        } else {
            Err(TaskError::Exited(status))
        }
    }
}

#[derive(Debug)]
pub struct TaskReport {
    pub executable: String,
    pub result: Result<ExitStatus, TaskError>,
}

impl TaskReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

impl Display for TaskReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.result {
            Ok(status) => write!(f, "[{}]: {}", self.executable, status),
            Err(error) => write!(f, "failed executing: {} with {}", self.executable, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn template(command: &[&str]) -> CommandTemplate {
        crate::argg::Argg::parse_from(
            ["argg", "--"].iter().copied().chain(command.iter().copied()),
        )
        .template()
    }

    #[tokio::test]
    async fn reports_success_for_a_zero_exit() {
        let report = TaskExecutor::new(&template(&["true"]), Vec::new())
            .execute()
            .await;
        assert!(report.is_success());
        assert_eq!(report.executable, "true");
    }

    #[tokio::test]
    async fn reports_a_non_zero_exit_as_failure() {
        let report = TaskExecutor::new(&template(&["false"]), Vec::new())
            .execute()
            .await;
        assert!(matches!(report.result, Err(TaskError::Exited(_))));
        assert!(report.to_string().starts_with("failed executing: false with "));
    }

    #[tokio::test]
    async fn reports_a_spawn_failure() {
        let report = TaskExecutor::new(&template(&["argg-no-such-executable"]), Vec::new())
            .execute()
            .await;
        assert!(matches!(report.result, Err(TaskError::Spawn(_))));
    }
}

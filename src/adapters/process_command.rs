use std::fs::File;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::StepStatus;
use crate::ports::{Invocation, ProcessRunner};

/// Runs invocations as blocking child processes.
#[derive(Debug, Clone, Default)]
pub struct CommandProcessRunner;

impl CommandProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for CommandProcessRunner {
    fn run(&self, invocation: &Invocation, stdout: Option<File>) -> StepStatus {
        debug!(command = %invocation, "spawning");

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(file) = stdout {
            command.stdout(Stdio::from(file));
        }

        let status = match command.spawn().and_then(|mut child| child.wait()) {
            Ok(status) => status,
            Err(e) => return StepStatus::NotLaunched { reason: e.to_string() },
        };

        debug!(command = %invocation, %status, "exited");
        if status.success() {
            StepStatus::Succeeded
        } else {
            StepStatus::Failed { code: status.code() }
        }
    }
}

//! External process port definition.

use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::path::PathBuf;

use crate::domain::StepStatus;

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, args: Vec<OsString>) -> Self {
        Self { program: program.into(), args }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

pub trait ProcessRunner {
    /// Run `invocation` to completion and report how it ended.
    ///
    /// When `stdout` is given, the child's standard output is written to it.
    /// Spawn failures are reported as [`StepStatus::NotLaunched`], never as errors.
    fn run(&self, invocation: &Invocation, stdout: Option<File>) -> StepStatus;
}

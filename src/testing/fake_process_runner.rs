use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::StepStatus;
use crate::ports::{Invocation, ProcessRunner};

/// In-process stand-in for a compiler and the programs it produces.
///
/// "Compiling" copies the source text into the artifact; "executing" an
/// artifact writes that text to stdout. Sources listed as broken fail to
/// compile and leave no artifact behind.
pub struct FakeProcessRunner {
    compiler: PathBuf,
    broken_sources: Vec<String>,
    pub invocations: Mutex<Vec<Invocation>>,
}

impl FakeProcessRunner {
    pub fn new(compiler: impl Into<PathBuf>) -> Self {
        Self {
            compiler: compiler.into(),
            broken_sources: Vec::new(),
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn with_broken_source(mut self, file_name: &str) -> Self {
        self.broken_sources.push(file_name.to_string());
        self
    }

    fn compile(&self, invocation: &Invocation) -> StepStatus {
        let n = invocation.args.len();
        let source = Path::new(&invocation.args[n - 3]);
        let artifact = Path::new(&invocation.args[n - 1]);

        let name = source.file_name().unwrap().to_string_lossy();
        if self.broken_sources.iter().any(|b| *b == name) {
            return StepStatus::Failed { code: Some(1) };
        }
        match fs::read(source) {
            Ok(text) => {
                fs::write(artifact, text).unwrap();
                StepStatus::Succeeded
            }
            Err(_) => StepStatus::Failed { code: Some(1) },
        }
    }

    fn execute(&self, artifact: &Path, stdout: Option<File>) -> StepStatus {
        let Ok(text) = fs::read(artifact) else {
            return StepStatus::NotLaunched { reason: "No such file or directory".into() };
        };
        if let Some(mut file) = stdout {
            file.write_all(&text).unwrap();
        }
        StepStatus::Succeeded
    }
}

impl ProcessRunner for FakeProcessRunner {
    fn run(&self, invocation: &Invocation, stdout: Option<File>) -> StepStatus {
        self.invocations.lock().unwrap().push(invocation.clone());
        if invocation.program == self.compiler {
            self.compile(invocation)
        } else {
            self.execute(&invocation.program, stdout)
        }
    }
}

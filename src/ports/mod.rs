mod process_runner;

pub use process_runner::{Invocation, ProcessRunner};

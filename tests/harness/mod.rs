#![allow(dead_code)]

pub(crate) mod fake_compiler;
pub(crate) mod test_context;

pub(crate) use test_context::TestContext;

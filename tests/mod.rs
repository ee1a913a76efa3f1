// Integration tests for tabledef

pub mod cli;

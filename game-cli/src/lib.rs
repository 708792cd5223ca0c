pub mod config;
pub mod presentation;
pub mod repl;

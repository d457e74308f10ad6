pub mod cli;
pub mod config;
pub mod credentials;
pub mod domain;
pub mod error;
pub mod git;
pub mod hosting;
pub mod logging;
pub mod publish;
pub mod resolver;
pub mod ui;

pub use error::{Result, TagError};

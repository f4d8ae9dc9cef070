//! `stockledger-cli` — interactive terminal shell around the inventory ledger.
//!
//! The shell is generic over `BufRead`/`Write` so sessions can be scripted in
//! tests exactly as an operator would type them.

pub mod config;
pub mod menu;
pub mod prompt;
pub mod render;
pub mod shell;

pub use config::{AppConfig, ConfigError, FromEnv};
pub use menu::MenuChoice;
pub use prompt::{PromptError, Prompter};
pub use shell::{Shell, run};

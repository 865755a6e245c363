//! Runtime abstraction for system operations.
//!
//! - `env` - Environment variables
//! - `fs` - File writes and stdout

mod env;
mod fs;

use anyhow::Result;
use std::env as std_env;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    // Output
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn print(&self, contents: &str) -> Result<()>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }

    fn print(&self, contents: &str) -> Result<()> {
        self.print_impl(contents)
    }
}

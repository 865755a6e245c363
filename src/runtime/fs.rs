//! File and stdout output.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn write_impl(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents)
            .with_context(|| format!("Failed to write to file {}", path.display()))?;
        Ok(())
    }

    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn print_impl(&self, contents: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(contents.as_bytes())
            .context("Failed to write to stdout")?;
        if !contents.ends_with('\n') {
            stdout.write_all(b"\n").context("Failed to write to stdout")?;
        }
        stdout.flush().context("Failed to flush stdout")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_write() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.html");

        runtime.write(&path, b"<html></html>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_real_runtime_write_missing_dir_fails() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("page.html");

        let err = runtime.write(&path, b"x").unwrap_err();
        assert!(err.to_string().contains("Failed to write to file"));
    }
}

//! Input and output plumbing: file or stdin in, file or stdout out.

use anyhow::Context;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::info;

/// Read the whole report from a file, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "reading scan report from file");
            fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            info!("reading scan report from stdin");
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read standard input")?;
            Ok(raw)
        }
    }
}

/// Write converted output to a file, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "writing output to file");
            fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(content.as_bytes())
                .and_then(|()| out.flush())
                .context("failed to write to standard output")
        }
    }
}

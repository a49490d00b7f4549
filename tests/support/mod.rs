#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// Throwaway theme checkout with an optional snippets/ folder.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Workspace without a snippets folder.
    pub fn bare() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().context("creating temp workspace")?,
        })
    }

    /// Workspace with an empty snippets folder.
    pub fn with_snippets() -> Result<Self> {
        let workspace = Self::bare()?;
        fs::create_dir(workspace.snippets()).context("creating snippets folder")?;
        Ok(workspace)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn snippets(&self) -> PathBuf {
        self.root().join("snippets")
    }

    pub fn add(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.snippets().join(name);
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    pub fn add_bytes(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = self.snippets().join(name);
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    // A directory that matches the naming convention cannot be read as text,
    // which stands in for a file that became unreadable after enumeration.
    pub fn add_unreadable(&self, name: &str) -> Result<PathBuf> {
        let path = self.snippets().join(name);
        fs::create_dir(&path).with_context(|| format!("creating {}", path.display()))?;
        Ok(path)
    }
}

pub fn svg_liquid() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_svg-liquid"));
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    if !output.status.success() {
        bail!(
            "command {:?} failed: {}\nstdout: {}\nstderr: {}",
            cmd.get_program(),
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

pub fn sorted_identifiers(entries: &[svg_liquid::IconEntry]) -> Vec<String> {
    let mut ids: Vec<String> = entries.iter().map(|e| e.identifier.clone()).collect();
    ids.sort();
    ids
}

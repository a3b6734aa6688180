//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::io::{BufRead, Write};
use std::path::Path;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents as bytes.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Write bytes to file, replacing any existing content.
    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Yes/no confirmation abstraction.
pub trait Confirmer: Send + Sync {
    /// Ask the user to confirm; `true` means proceed.
    fn confirm(&self, prompt: &str) -> io::Result<bool>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        std::fs::write(path, data)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Drive one confirmation dialog over the given streams.
///
/// Re-prompts until the answer is one of y/yes/n/no (case-insensitive).
/// EOF counts as a decline.
pub fn read_confirmation(
    prompt: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<bool> {
    loop {
        write!(output, "{} (y/n): ", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(false);
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "please answer y or n")?,
        }
    }
}

/// Interactive confirmer running the dialog on stdin/stdout.
#[derive(Debug, Default)]
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        read_confirmation(prompt, &mut io::stdin().lock(), &mut io::stdout())
    }
}

/// Confirmer that always proceeds (used by `--yes`).
#[derive(Debug, Default)]
pub struct AlwaysConfirm;

impl Confirmer for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> io::Result<bool> {
        Ok(true)
    }
}

//! Source file builder and artifact writer.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Line-oriented builder for a generated source file.
#[derive(Debug, Default)]
pub struct SourceFile {
    /// Accumulated text.
    pub buf: String,
}

impl SourceFile {
    /// Starts a file with a "generated" banner using `comment` as the line
    /// comment marker (`//`, `//!`).
    #[must_use]
    pub fn new(comment: &str, header: &str) -> Self {
        let mut f = Self {
            buf: String::with_capacity(16 * 1024),
        };
        for line in header.lines() {
            f.comment(comment, line);
        }
        f.comment(comment, "");
        f.comment(comment, "Generated by dymo-build. Do not edit.");
        f.blank();
        f
    }

    /// Appends one line.
    pub fn line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends `/// text`.
    pub fn doc_comment(&mut self, text: &str) {
        self.comment("///", text);
    }

    fn comment(&mut self, marker: &str, text: &str) {
        if text.is_empty() {
            let _ = writeln!(self.buf, "{marker}");
        } else {
            let _ = writeln!(self.buf, "{marker} {text}");
        }
    }

    /// Returns the finished text.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Writes `contents` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error naming `path` if a directory or the file cannot be written.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_uses_the_requested_marker() {
        let mut f = SourceFile::new("//", "URI constants.");
        f.line("export const A: string = \"a\";");
        let text = f.finish();
        assert!(text.starts_with("// URI constants.\n//\n// Generated by dymo-build."));
        assert!(text.ends_with("export const A: string = \"a\";\n"));
    }

    #[test]
    fn empty_doc_comment_has_no_trailing_space() {
        let mut f = SourceFile::default();
        f.doc_comment("");
        f.doc_comment("x");
        assert_eq!(f.finish(), "///\n/// x\n");
    }
}

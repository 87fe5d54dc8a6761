//! Template definition parsing
//!
//! A template resource is plain text: runs of exactly `side` non-blank lines, each
//! `side` characters wide, optionally separated by blank lines. Every run becomes
//! one fragment. Symbols are mapped one to one onto the tile alphabet without
//! further checks, so unknown characters survive as wall-like tiles.

use std::io::BufRead;
use std::path::Path;

use crate::io::configuration::{BUILTIN_TEMPLATES, FRAGMENT_SIDE};
use crate::io::error::{GeneratorError, Result, invalid_parameter, malformed_template};
use crate::spatial::tiles::TileFragment;

/// Immutable set of base fragments shared by every generation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLibrary {
    fragments: Vec<TileFragment>,
    side: usize,
}

impl TemplateLibrary {
    /// Build a library from fragments that all share one side length
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any fragment's side differs from `side`
    pub fn from_fragments(fragments: Vec<TileFragment>, side: usize) -> Result<Self> {
        if let Some(index) = fragments.iter().position(|f| f.side() != side) {
            return Err(invalid_parameter(
                "fragments",
                &index,
                &format!("fragment side does not match library side {side}"),
            ));
        }
        Ok(Self { fragments, side })
    }

    /// Parse the builtin template set
    ///
    /// # Errors
    ///
    /// Returns `MalformedTemplate` if the embedded resource is corrupt
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_TEMPLATES, FRAGMENT_SIDE)
    }

    /// Parse templates from text
    ///
    /// # Errors
    ///
    /// Returns `MalformedTemplate` if a row has the wrong width, a block is cut
    /// short by a blank line, or the text ends mid-block
    pub fn parse(source: &str, side: usize) -> Result<Self> {
        Self::load(source.as_bytes(), side)
    }

    /// Read a template file from disk
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be opened or read, and
    /// `MalformedTemplate` if its content is malformed
    pub fn from_path(path: &Path, side: usize) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| GeneratorError::FileSystem {
            path: path.to_path_buf(),
            operation: "open templates",
            source: e,
        })?;
        Self::load(std::io::BufReader::new(file), side).map_err(|e| match e {
            GeneratorError::FileSystem {
                operation, source, ..
            } => GeneratorError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            other => other,
        })
    }

    /// Parse templates from a buffered reader
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` on read failure and `MalformedTemplate` on any
    /// deviation from the block grammar
    pub fn load<R: BufRead>(reader: R, side: usize) -> Result<Self> {
        if side == 0 {
            return Err(invalid_parameter(
                "side",
                &side,
                &"fragment side must be positive",
            ));
        }

        let mut fragments = Vec::new();
        let mut block: Vec<String> = Vec::with_capacity(side);
        let mut last_line = 0;

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            last_line = line_number;
            let line = line.map_err(|e| GeneratorError::FileSystem {
                path: "<templates>".into(),
                operation: "read templates",
                source: e,
            })?;
            let row = line.strip_suffix('\r').unwrap_or(&line);

            if row.trim().is_empty() {
                if !block.is_empty() {
                    return Err(malformed_template(
                        fragments.len() + 1,
                        line_number,
                        &format!("expected {side} rows, found {}", block.len()),
                    ));
                }
                continue;
            }

            let width = row.chars().count();
            if width != side {
                return Err(malformed_template(
                    fragments.len() + 1,
                    line_number,
                    &format!("expected {side} columns, found {width}"),
                ));
            }

            block.push(row.to_string());
            if block.len() == side {
                fragments.push(TileFragment::from_rows(&block)?);
                block.clear();
            }
        }

        if !block.is_empty() {
            return Err(malformed_template(
                fragments.len() + 1,
                last_line,
                &format!("input ended after {} of {side} rows", block.len()),
            ));
        }

        Ok(Self { fragments, side })
    }

    /// All fragments in load order
    pub fn fragments(&self) -> &[TileFragment] {
        &self.fragments
    }

    /// Fragment at a library index
    pub fn get(&self, index: usize) -> Option<&TileFragment> {
        self.fragments.get(index)
    }

    /// Side length shared by every fragment
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Number of fragments
    pub const fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the library holds no fragments
    pub const fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

//! Content resolution
//!
//! Resolves markdown documents under a content root into records of
//! `{ frontmatter, html, body }`, filtered by a path pattern and sorted ascending by
//! the `date` frontmatter field.
//!
//! ```text
//! content/
//! ├── featured/spy-glass/index.md   ← matched by "^featured/"
//! └── jobs/acme.md                  ← matched by "^jobs/"
//! ```
//!
//! Patterns are matched against the path relative to the root, with `/`
//! separators on every platform.

mod frontmatter;
mod markdown;

pub use frontmatter::Frontmatter;
pub use markdown::render_html;

use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Component, Path, PathBuf};

/// A resolved content document
#[derive(Debug, Clone)]
pub struct ContentRecord {
    /// Path of the source file (root-joined)
    pub path: PathBuf,
    pub frontmatter: Frontmatter,
    /// Rendered body
    pub html: String,
    /// Markdown body as written, frontmatter stripped
    pub body: String,
}

/// A query over the content root
#[derive(Debug, Clone)]
pub struct ContentQuery {
    root: PathBuf,
    filter: Regex,
}

impl ContentQuery {
    /// Create a query for documents whose root-relative path matches `pattern`
    pub fn new(root: impl Into<PathBuf>, pattern: &str) -> Result<Self> {
        let filter = Regex::new(pattern)
            .with_context(|| format!("Invalid content path pattern: {pattern}"))?;
        Ok(Self {
            root: root.into(),
            filter,
        })
    }

    /// Resolve all matching documents, oldest first
    ///
    /// A missing root yields an empty list: a site without jobs simply has
    /// no jobs section entries.
    pub fn run(&self) -> Result<Vec<ContentRecord>> {
        if !self.root.exists() {
            tracing::warn!("Content root {:?} does not exist", self.root);
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for path in self.discover()? {
            let relative = relative_key(&self.root, &path);
            if !self.filter.is_match(&relative) {
                continue;
            }
            records.push(load(&path)?);
        }

        // Stable: undated documents keep discovery order, after dated ones
        records.sort_by_key(|r| match r.frontmatter.sort_date() {
            Some(date) => (0, Some(date)),
            None => (1, None),
        });

        tracing::debug!(
            "Resolved {} record(s) for {:?} under {:?}",
            records.len(),
            self.filter.as_str(),
            self.root
        );
        Ok(records)
    }

    /// All markdown files under the root, in path order
    fn discover(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.root.join("**").join("*.md");
        let pattern = pattern.to_string_lossy();

        let mut paths = Vec::new();
        for entry in glob::glob(&pattern).context("Invalid content glob")? {
            let path = entry.context("Failed to read content directory entry")?;
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

/// Load one document from disk
pub fn load(path: &Path) -> Result<ContentRecord> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file {}", path.display()))?;
    parse_document(path, &source)
}

/// Parse a document already in memory
pub fn parse_document(path: &Path, source: &str) -> Result<ContentRecord> {
    let (yaml, body) = frontmatter::split(source);
    let frontmatter = match yaml {
        Some(yaml) => frontmatter::parse(yaml)
            .with_context(|| format!("Invalid frontmatter in {}", path.display()))?,
        None => Frontmatter::default(),
    };

    Ok(ContentRecord {
        path: path.to_path_buf(),
        frontmatter,
        html: render_html(body),
        body: body.to_string(),
    })
}

/// Root-relative key with `/` separators; `./content` and `content` match alike
fn relative_key(root: &Path, path: &Path) -> String {
    let parts = |p: &Path| -> Vec<String> {
        p.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect()
    };
    let root = parts(root);
    let path = parts(path);
    let relative = if path.starts_with(&root) {
        &path[root.len()..]
    } else {
        &path[..]
    };
    relative.join("/")
}

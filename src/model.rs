// Content records - the immutable data both sections project into UI
//
// Records are built once from resolved content and never mutated afterwards.
// Optional frontmatter fields stay `Option` all the way to rendering so that
// "absent field suppresses UI element" is decided by the type, not by string
// checks scattered across templates.

use crate::content::{ContentRecord, Frontmatter};
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Pre-rendered HTML from the content pipeline
///
/// Trusted payload: nothing in this crate sanitizes or rewrites it. Whatever
/// the markdown renderer produced is embedded verbatim, so the trust boundary
/// is the content directory itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque handle to a cover image
///
/// Resolved relative to the content file that referenced it. Only the site
/// builder looks inside (to copy the file); views pass it through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    source: PathBuf,
}

impl ImageRef {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Absolute (or content-root relative) path of the original image
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Name the image is published under in the output directory
    ///
    /// Prefixed with the containing directory so `spy/cover.png` and
    /// `gal/cover.png` do not collide.
    pub fn file_name(&self) -> String {
        let name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cover".to_string());
        match self.source.parent().and_then(|p| p.file_name()) {
            Some(dir) => format!("{}-{}", dir.to_string_lossy(), name),
            None => name,
        }
    }

    /// Public URL of the published image
    pub fn public_path(&self) -> String {
        format!("static/{}", self.file_name())
    }
}

/// A featured project (one carousel slide)
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub title: String,
    pub tech_tags: Vec<String>,
    pub source_url: Option<String>,
    pub demo_url: Option<String>,
    pub external_url: Option<String>,
    pub course_url: Option<String>,
    pub cover: Option<ImageRef>,
    pub description: TrustedHtml,
    /// Markdown source of `description`, for the terminal preview
    pub body: String,
}

/// One entry of the action row under a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionLink<'a> {
    /// "Learn More" link to a course page
    LearnMore(&'a str),
    /// Source-code icon link
    Source(&'a str),
    /// "Demo" link, opens in a new browsing context
    Demo(&'a str),
    /// External-link icon
    External(&'a str),
}

impl ProjectRecord {
    /// Target of the cover image link: external, then source, then a no-op anchor
    pub fn cover_href(&self) -> &str {
        present(&self.external_url)
            .or(present(&self.source_url))
            .unwrap_or("#")
    }

    /// Action row, in display order
    ///
    /// Empty strings count as absent. The external icon is dropped when a
    /// course link already occupies the primary action.
    pub fn action_links(&self) -> Vec<ActionLink<'_>> {
        let mut links = Vec::with_capacity(4);
        let course = present(&self.course_url);
        if let Some(course) = course {
            links.push(ActionLink::LearnMore(course));
        }
        if let Some(source) = present(&self.source_url) {
            links.push(ActionLink::Source(source));
        }
        if let Some(demo) = present(&self.demo_url) {
            links.push(ActionLink::Demo(demo));
        }
        if let (Some(external), None) = (present(&self.external_url), course) {
            links.push(ActionLink::External(external));
        }
        links
    }

    /// Build from a resolved content record
    pub fn from_content(record: &ContentRecord) -> Result<Self> {
        let fm = &record.frontmatter;
        let title = required_title(fm, &record.path)?;
        let cover = fm
            .cover
            .as_deref()
            .map(|cover| ImageRef::new(resolve_relative(&record.path, cover)));

        Ok(Self {
            title,
            tech_tags: fm.tech.clone().unwrap_or_default(),
            source_url: non_empty(&fm.github),
            demo_url: non_empty(&fm.demo),
            external_url: non_empty(&fm.external),
            course_url: non_empty(&fm.cta),
            cover,
            description: TrustedHtml::new(record.html.clone()),
            body: record.body.clone(),
        })
    }
}

/// A position held (one tab + one panel)
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub date_range: String,
    pub url: String,
    pub description: TrustedHtml,
    /// Markdown source of `description`, for the terminal preview
    pub body: String,
}

impl JobRecord {
    /// Build from a resolved content record
    pub fn from_content(record: &ContentRecord) -> Result<Self> {
        let fm = &record.frontmatter;
        let title = required_title(fm, &record.path)?;

        Ok(Self {
            title,
            company: fm.company.clone().unwrap_or_default(),
            location: fm.location.clone().unwrap_or_default(),
            date_range: fm.range.clone().unwrap_or_default(),
            url: fm.url.clone().unwrap_or_default(),
            description: TrustedHtml::new(record.html.clone()),
            body: record.body.clone(),
        })
    }
}

/// Frontmatter links written as `''` mean "no link"
fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|s| !s.is_empty())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn required_title(fm: &Frontmatter, path: &Path) -> Result<String> {
    match fm.title.as_deref() {
        Some(title) if !title.trim().is_empty() => Ok(title.to_string()),
        _ => bail!("{}: frontmatter is missing required `title`", path.display()),
    }
}

/// Resolve `./cover.png` style references against the referencing file
fn resolve_relative(content_file: &Path, reference: &str) -> PathBuf {
    let reference = Path::new(reference.trim_start_matches("./"));
    if reference.is_absolute() {
        return reference.to_path_buf();
    }
    content_file
        .parent()
        .map(|dir| dir.join(reference))
        .unwrap_or_else(|| reference.to_path_buf())
}

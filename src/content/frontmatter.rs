//! YAML frontmatter extraction
//!
//! Content files look like:
//!
//! ```text
//! ---
//! title: Engineer
//! company: Acme
//! date: '2020-06-01'
//! ---
//! Body markdown...
//! ```

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// Every frontmatter key either section reads
///
/// All fields are optional at this layer; required-ness is decided when the
/// record is projected into a `JobRecord` / `ProjectRecord`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub date: Option<String>,

    // Jobs
    pub company: Option<String>,
    pub location: Option<String>,
    pub range: Option<String>,
    pub url: Option<String>,

    // Featured projects
    pub tech: Option<Vec<String>>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub external: Option<String>,
    pub cta: Option<String>,
    pub cover: Option<String>,
}

impl Frontmatter {
    /// Sort key: `YYYY-MM-DD` or RFC 3339, anything else counts as undated
    pub fn sort_date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
    }
}

/// Split a document into (frontmatter yaml, body)
///
/// Returns `None` for the yaml part when the document does not open with a
/// `---` fence or the fence is never closed; the whole input is then body.
pub fn split(source: &str) -> (Option<&str>, &str) {
    let rest = match source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))
    {
        Some(rest) => rest,
        None => return (None, source),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    (None, source)
}

/// Parse the yaml part; an empty block is an empty frontmatter
pub fn parse(yaml: &str) -> Result<Frontmatter, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    serde_yaml::from_str(yaml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_frontmatter() {
        let doc = "---\ntitle: Engineer\n---\nHello\n";
        let (yaml, body) = split(doc);
        assert_eq!(yaml, Some("title: Engineer\n"));
        assert_eq!(body, "Hello\n");
    }

    #[test]
    fn test_split_crlf() {
        let doc = "---\r\ntitle: Engineer\r\n---\r\nHello";
        let (yaml, body) = split(doc);
        assert_eq!(yaml, Some("title: Engineer\r\n"));
        assert_eq!(body, "Hello");
    }

    #[test]
    fn test_split_without_fence() {
        let doc = "# Just markdown";
        assert_eq!(split(doc), (None, doc));
    }

    #[test]
    fn test_split_unclosed_fence() {
        let doc = "---\ntitle: Engineer\nno closing";
        assert_eq!(split(doc), (None, doc));
    }

    #[test]
    fn test_parse_job_fields() {
        let fm = parse(
            "title: Engineer\ncompany: Acme\nrange: 2020–2022\nurl: https://acme.example\ndate: '2020-06-01'\n",
        )
        .unwrap();
        assert_eq!(fm.company.as_deref(), Some("Acme"));
        assert_eq!(fm.range.as_deref(), Some("2020–2022"));
        assert_eq!(fm.sort_date(), NaiveDate::from_ymd_opt(2020, 6, 1));
    }

    #[test]
    fn test_parse_project_fields() {
        let fm = parse("title: Spy\ntech:\n  - Rust\n  - ratatui\ndemo: ''\n").unwrap();
        assert_eq!(
            fm.tech,
            Some(vec!["Rust".to_string(), "ratatui".to_string()])
        );
        assert_eq!(fm.demo.as_deref(), Some(""));
        assert_eq!(fm.github, None);
    }

    #[test]
    fn test_sort_date_formats() {
        let mut fm = Frontmatter {
            date: Some("2021-03-04T10:00:00Z".to_string()),
            ..Frontmatter::default()
        };
        assert_eq!(fm.sort_date(), NaiveDate::from_ymd_opt(2021, 3, 4));

        fm.date = Some("sometime".to_string());
        assert_eq!(fm.sort_date(), None);
    }

    #[test]
    fn test_parse_empty_block() {
        assert_eq!(parse("  \n").unwrap(), Frontmatter::default());
    }
}

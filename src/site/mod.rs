// Site builder - resolves content, mounts both sections, writes the page
//
// One build is one pass: query content, construct the views with the
// configured motion preference, let each view register its reveal targets,
// then render and write everything under the output directory.

pub mod html;
mod icons;

use crate::components::{FeaturedProjectsView, ScriptReveal, WorkHistoryView};
use crate::config::Config;
use crate::content::ContentQuery;
use crate::model::{JobRecord, ProjectRecord};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const STYLESHEET: &str = include_str!("../../assets/style.css");
const SCRIPT: &str = include_str!("../../assets/site.js");

/// Summary of a finished build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub index: PathBuf,
    pub jobs: usize,
    pub projects: usize,
    pub covers_copied: usize,
    /// Number of reveal registrations emitted into the page
    pub reveals: usize,
}

/// Query both sections from the content tree, in display order
pub fn load_sections(config: &Config) -> Result<(Vec<JobRecord>, Vec<ProjectRecord>)> {
    let jobs = ContentQuery::new(&config.content_dir, &config.sections.jobs_pattern)?
        .run()?
        .iter()
        .map(JobRecord::from_content)
        .collect::<Result<Vec<_>>>()?;

    let projects = ContentQuery::new(&config.content_dir, &config.sections.featured_pattern)?
        .run()?
        .iter()
        .map(ProjectRecord::from_content)
        .collect::<Result<Vec<_>>>()?;

    Ok((jobs, projects))
}

/// Build the site into `config.output_dir`
pub fn build(config: &Config) -> Result<BuildReport> {
    let (jobs, projects) = load_sections(config)?;
    tracing::info!(
        "Loaded {} jobs and {} featured projects from {}",
        jobs.len(),
        projects.len(),
        config.content_dir.display()
    );

    let mut history = WorkHistoryView::new(jobs, config.motion, config.tabs.fade());
    let mut featured =
        FeaturedProjectsView::new(projects, config.motion, config.carousel.settings());

    let reveal_config = config.reveal.reveal_config();
    let mut revealer = ScriptReveal::new();
    featured.mount(&reveal_config, &mut revealer);
    history.mount(&reveal_config, &mut revealer);

    let script = if revealer.is_empty() {
        tracing::debug!("Reduced motion: no reveal script emitted");
        None
    } else {
        Some(revealer.to_script()?)
    };

    let markup = html::page(
        &config.title,
        html::featured(&featured),
        html::work_history(&history),
        script.as_deref(),
    );

    let out = &config.output_dir;
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory {}", out.display()))?;

    let index = out.join("index.html");
    write(&index, &markup.into_string())?;
    write(&out.join("style.css"), STYLESHEET)?;
    write(&out.join("site.js"), SCRIPT)?;

    let covers_copied = copy_covers(featured.projects(), &out.join("static"))?;

    let report = BuildReport {
        index,
        jobs: history.jobs().len(),
        projects: featured.projects().len(),
        covers_copied,
        reveals: revealer.registrations().len(),
    };
    tracing::info!("Wrote {}", report.index.display());
    Ok(report)
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

/// Copy cover images next to the page; a missing cover is logged, not fatal
fn copy_covers(projects: &[ProjectRecord], dir: &Path) -> Result<usize> {
    let covers: Vec<_> = projects.iter().filter_map(|p| p.cover.as_ref()).collect();
    if covers.is_empty() {
        return Ok(0);
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut copied = 0;
    for cover in covers {
        if !cover.source().is_file() {
            tracing::warn!("Cover image {} not found, skipping", cover.source().display());
            continue;
        }
        let target = dir.join(cover.file_name());
        fs::copy(cover.source(), &target).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                cover.source().display(),
                target.display()
            )
        })?;
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::MotionPreference;
    use tempfile::TempDir;

    fn write_file(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn fixture() -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        write_file(
            &content,
            "jobs/acme.md",
            "---\ntitle: Engineer\ncompany: Acme\nrange: 2019 - 2021\nurl: https://acme.example\ndate: 2019-01-01\n---\n- Built *things*\n",
        );
        write_file(
            &content,
            "jobs/globex.md",
            "---\ntitle: Lead\ncompany: Globex\nrange: 2021 - Present\nurl: https://globex.example\ndate: 2021-06-01\n---\nLed a team.\n",
        );
        write_file(
            &content,
            "featured/spy/index.md",
            "---\ntitle: Spy Glass\ntech: [Rust]\ngithub: https://github.com/x/spy\ncover: ./spy.png\n---\nA proxy.\n",
        );
        write_file(&content, "featured/spy/spy.png", "png");

        let config = Config {
            content_dir: content,
            output_dir: dir.path().join("public"),
            ..Config::default()
        };
        (dir, config)
    }

    #[test]
    fn test_build_writes_page_and_assets() {
        let (_dir, config) = fixture();
        let report = build(&config).unwrap();

        assert_eq!(report.jobs, 2);
        assert_eq!(report.projects, 1);
        assert_eq!(report.covers_copied, 1);
        assert_eq!(report.reveals, 3);
        assert!(config.output_dir.join("style.css").is_file());
        assert!(config.output_dir.join("site.js").is_file());
        assert!(config.output_dir.join("static/spy-spy.png").is_file());

        let page = fs::read_to_string(&report.index).unwrap();
        assert!(page.contains(r#"aria-controls="panel-1""#));
        assert!(page.contains("Spy Glass"));
        assert!(page.contains("<em>things</em>"));
        assert!(page.contains("sr.reveal"));
    }

    #[test]
    fn test_configured_tab_fade_reaches_page() {
        let (_dir, mut config) = fixture();
        config.tabs.fade_ms = 600;
        let report = build(&config).unwrap();
        let page = fs::read_to_string(&report.index).unwrap();
        assert!(page.contains("--tab-fade: 600ms"));
        let css = fs::read_to_string(config.output_dir.join("style.css")).unwrap();
        assert!(css.contains("var(--tab-fade"));
    }

    #[test]
    fn test_empty_external_link_falls_back_to_source() {
        let (_dir, config) = fixture();
        write_file(
            &config.content_dir,
            "featured/spy/index.md",
            "---\ntitle: Spy Glass\ngithub: https://github.com/x/spy\nexternal: ''\n---\nA proxy.\n",
        );
        let report = build(&config).unwrap();
        let page = fs::read_to_string(&report.index).unwrap();
        let cover = r#"<div class="project-image"><a href="https://github.com/x/spy">"#;
        assert!(page.contains(cover));
        assert!(!page.contains(r#"href="""#));
    }

    #[test]
    fn test_jobs_in_date_order() {
        let (_dir, config) = fixture();
        let (jobs, _) = load_sections(&config).unwrap();
        let companies: Vec<_> = jobs.iter().map(|j| j.company.as_str()).collect();
        assert_eq!(companies, vec!["Acme", "Globex"]);
    }

    #[test]
    fn test_reduced_motion_emits_no_reveal_script() {
        let (_dir, mut config) = fixture();
        config.motion = MotionPreference::Reduce;
        let report = build(&config).unwrap();

        assert_eq!(report.reveals, 0);
        let page = fs::read_to_string(&report.index).unwrap();
        assert!(!page.contains("scrollreveal"));
    }

    #[test]
    fn test_missing_content_builds_empty_sections() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            content_dir: dir.path().join("nothing-here"),
            output_dir: dir.path().join("public"),
            ..Config::default()
        };
        let report = build(&config).unwrap();
        assert_eq!(report.jobs, 0);
        assert_eq!(report.projects, 0);
        assert_eq!(report.covers_copied, 0);
    }

    #[test]
    fn test_missing_cover_is_skipped() {
        let (_dir, config) = fixture();
        fs::remove_file(config.content_dir.join("featured/spy/spy.png")).unwrap();
        let report = build(&config).unwrap();
        assert_eq!(report.covers_copied, 0);
    }

    #[test]
    fn test_missing_title_fails_build() {
        let (_dir, config) = fixture();
        write_file(
            &config.content_dir,
            "jobs/broken.md",
            "---\ncompany: Nope\n---\n",
        );
        let err = build(&config).unwrap_err();
        assert!(format!("{err:#}").contains("broken.md"));
    }
}

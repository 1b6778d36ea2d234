use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};

/// Only successfully loaded write-ups are cached, so the key set is bounded
/// by the embedded files.
pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Project>> =
    LazyLock::new(DashMap::new);
pub static GLOBAL_LIST_CACHE: LazyLock<DashMap<String, Vec<Project>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "projects"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    summary: String,
    date: DateTime<Utc>,
    tags: Vec<String>,
    #[serde(default)]
    repo: Option<String>,
    #[serde(default)]
    live: Option<String>,
    #[serde(default = "default_order")]
    order: u32,
}

#[cfg(feature = "ssr")]
fn default_order() -> u32 {
    u32::MAX
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub repo: Option<String>,
    pub live: Option<String>,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMeta,
    pub content: String,
}

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Project not found")]
    NotFound,
    #[error("Couldn't parse project write-ups")]
    Parse,
}

#[cfg(feature = "ssr")]
fn parse_project(file: &str, raw: &str) -> Option<Project> {
    let matter = Matter::<YAML>::new();
    let fm = matter.parse_with_struct::<FrontMatter>(raw)?;
    let meta = ProjectMeta {
        name: file.strip_suffix(".md").unwrap_or(file).to_string(),
        title: fm.data.title,
        summary: fm.data.summary,
        date: fm.data.date,
        tags: fm.data.tags,
        repo: fm.data.repo,
        live: fm.data.live,
        order: fm.data.order,
    };

    let parser = Parser::new_ext(&fm.content, Options::all());
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);

    Some(Project {
        meta,
        content: html_output,
    })
}

#[cfg(feature = "ssr")]
fn read_asset(file: &str) -> Option<String> {
    let content = Assets::get(file)?;
    String::from_utf8(content.data.into()).ok()
}

/// All write-ups, ordered by `order` and then newest first.
#[cfg(feature = "ssr")]
pub fn get_project_list() -> Result<Vec<Project>, ContentError> {
    let cache = &*GLOBAL_LIST_CACHE;
    if let Some(r) = cache.get("") {
        return Ok(r.clone());
    }
    let mut projects = Assets::iter()
        .map(|s| {
            let raw = read_asset(&s).ok_or(ContentError::Parse)?;
            parse_project(&s, &raw).ok_or(ContentError::Parse)
        })
        .collect::<Result<Vec<_>, _>>()?;
    sort_projects(&mut projects);
    cache.insert(String::new(), projects.clone());
    Ok(projects)
}

#[cfg(feature = "ssr")]
pub fn get_project(name: &str) -> Result<Project, ContentError> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    if let Some(p) = cache.get(name) {
        return Ok((*p).clone());
    }
    let file = format!("{name}.md");
    let raw = read_asset(&file).ok_or(ContentError::NotFound)?;
    let project = parse_project(&file, &raw).ok_or(ContentError::Parse)?;
    cache.insert(name.to_string(), project.clone());
    Ok(project)
}

pub fn sort_projects(projects: &mut [Project]) {
    projects.sort_by(|a, b| {
        a.meta
            .order
            .cmp(&b.meta.order)
            .then_with(|| b.meta.date.cmp(&a.meta.date))
    });
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn project(name: &str, order: u32, year: i32) -> Project {
        Project {
            meta: ProjectMeta {
                name: name.to_string(),
                title: name.to_uppercase(),
                summary: String::new(),
                date: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
                tags: vec![],
                repo: None,
                live: None,
                order,
            },
            content: String::new(),
        }
    }

    #[test]
    fn sorts_by_order_then_newest() {
        let mut projects = vec![
            project("old", 5, 2020),
            project("pinned", 1, 2019),
            project("new", 5, 2024),
        ];
        sort_projects(&mut projects);
        let names = projects.iter().map(|p| p.meta.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["pinned", "new", "old"]);
    }

    #[test]
    fn embeds_markdown_write_ups() {
        assert!(Assets::iter().count() > 0);
        assert!(Assets::iter().all(|f| f.ends_with(".md")));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn parses_every_write_up() {
        let projects = get_project_list().expect("write-ups should parse");
        assert_eq!(projects.len(), Assets::iter().count());
        for p in &projects {
            assert!(!p.meta.title.is_empty());
            assert!(!p.content.contains("title:"));
            assert!(p.content.contains("<p>"));
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn parse_rejects_missing_front_matter() {
        assert!(parse_project("broken.md", "# no front matter here").is_none());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn missing_project_is_not_found() {
        assert!(matches!(
            get_project("does-not-exist"),
            Err(ContentError::NotFound)
        ));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn unknown_names_are_not_cached() {
        for i in 0..16 {
            let name = format!("random-{i}");
            assert!(get_project(&name).is_err());
            assert!(!GLOBAL_PROJECT_CACHE.contains_key(&name));
        }
        let project = get_project("edge-cache").expect("embedded write-up should load");
        assert_eq!(
            GLOBAL_PROJECT_CACHE.get("edge-cache").map(|p| (*p).clone()),
            Some(project)
        );
    }
}

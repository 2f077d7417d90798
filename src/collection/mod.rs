//! Content collection loading.
//!
//! A collection is a directory of entries laid out as
//! `<root>/<slug>/index.mdx`. Each entry's slug comes from its folder name;
//! the file is split into frontmatter and body and assembled into a typed
//! [`BlogPost`] or [`Project`].
//!
//! Loading is lenient per entry: an unreadable or missing `index.mdx` is
//! logged and skipped, never fatal. Only the root directory scan itself can
//! fail.

mod slug;

pub use slug::slugify;

use crate::error::Result;
use crate::model::{BlogPost, Document, Project};
use crate::parser::{extract_frontmatter, ParseOptions};
use rayon::prelude::*;
use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "index.mdx";

/// Load all blog posts under `root`, sorted newest first by frontmatter
/// date. Posts with unparseable dates sort last.
pub fn load_blog_posts<P: AsRef<Path>>(root: P) -> Result<Vec<BlogPost>> {
    load_blog_posts_with_options(root, &ParseOptions::default())
}

/// Load all blog posts with custom options.
pub fn load_blog_posts_with_options<P: AsRef<Path>>(
    root: P,
    options: &ParseOptions,
) -> Result<Vec<BlogPost>> {
    let mut posts = load_entries(root.as_ref(), options, |slug, doc| {
        BlogPost::from_document(slug, doc)
    })?;
    posts.sort_by_key(|post| Reverse(post.parsed_date()));
    log::info!("loaded {} blog posts from {}", posts.len(), root.as_ref().display());
    Ok(posts)
}

/// Load all projects under `root`, in directory order.
pub fn load_projects<P: AsRef<Path>>(root: P) -> Result<Vec<Project>> {
    load_projects_with_options(root, &ParseOptions::default())
}

/// Load all projects with custom options.
pub fn load_projects_with_options<P: AsRef<Path>>(
    root: P,
    options: &ParseOptions,
) -> Result<Vec<Project>> {
    let projects = load_entries(root.as_ref(), options, |slug, doc| {
        Project::from_document(slug, doc)
    })?;
    log::info!(
        "loaded {} projects from {}",
        projects.len(),
        root.as_ref().display()
    );
    Ok(projects)
}

/// Load one blog post by slug.
pub fn blog_post_by_slug<P: AsRef<Path>>(root: P, slug: &str) -> Result<BlogPost> {
    let posts = load_blog_posts(root)?;
    posts
        .into_iter()
        .find(|post| post.slug == slug)
        .ok_or_else(|| crate::Error::NotFound(slug.to_string()))
}

/// Load one project by slug.
pub fn project_by_slug<P: AsRef<Path>>(root: P, slug: &str) -> Result<Project> {
    let projects = load_projects(root)?;
    projects
        .into_iter()
        .find(|project| project.slug == slug)
        .ok_or_else(|| crate::Error::NotFound(slug.to_string()))
}

/// Scan the collection root for entry folders, then parse each `index.mdx`
/// into a typed entry via `build`. Parsing runs on the rayon pool unless
/// the options ask for sequential loading.
fn load_entries<T, F>(root: &Path, options: &ParseOptions, build: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(String, &Document) -> T + Sync,
{
    let mut folders: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let index = path.join(INDEX_FILE);
        if !index.is_file() {
            log::debug!("skipping {}: no {INDEX_FILE}", path.display());
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            log::warn!("skipping {}: non-UTF-8 folder name", path.display());
            continue;
        };
        let slug = if options.normalize_slugs {
            slugify(name)
        } else {
            name.to_string()
        };
        if slug.is_empty() {
            log::warn!("skipping {}: folder name yields an empty slug", path.display());
            continue;
        }
        folders.push((slug, index));
    }

    // Deterministic output order regardless of read_dir ordering.
    folders.sort_by(|a, b| a.0.cmp(&b.0));

    let parse_one = |(slug, index): &(String, PathBuf)| -> Option<T> {
        match fs::read_to_string(index) {
            Ok(raw) => {
                let doc = extract_frontmatter(&raw);
                Some(build(slug.clone(), &doc))
            }
            Err(err) => {
                log::warn!("skipping {}: {err}", index.display());
                None
            }
        }
    };

    let entries = if options.parallel {
        folders.par_iter().filter_map(parse_one).collect()
    } else {
        folders.iter().filter_map(parse_one).collect()
    };
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_entry(root: &Path, folder: &str, content: &str) {
        let dir = root.join(folder);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(INDEX_FILE), content).unwrap();
    }

    #[test]
    fn test_load_blog_posts_sorted_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        write_entry(tmp.path(), "older", "---\ntitle: Old\ndate: 2023-01-10\n---\nold");
        write_entry(tmp.path(), "newer", "---\ntitle: New\ndate: 2024-06-01\n---\nnew");
        write_entry(tmp.path(), "undated", "---\ntitle: NoDate\n---\nx");

        let posts = load_blog_posts(tmp.path()).unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].title, "New");
        assert_eq!(posts[1].title, "Old");
        assert_eq!(posts[2].title, "NoDate");
    }

    #[test]
    fn test_slug_from_folder_name() {
        let tmp = tempfile::tempdir().unwrap();
        write_entry(tmp.path(), "My First Post", "---\ntitle: T\n---\n");

        let posts = load_blog_posts(tmp.path()).unwrap();
        assert_eq!(posts[0].slug, "my-first-post");

        let raw = load_blog_posts_with_options(
            tmp.path(),
            &ParseOptions::new().keep_folder_names(),
        )
        .unwrap();
        assert_eq!(raw[0].slug, "My First Post");
    }

    #[test]
    fn test_folders_without_index_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        write_entry(tmp.path(), "real", "---\ntitle: T\n---\n");
        fs::create_dir_all(tmp.path().join("empty-folder")).unwrap();
        fs::write(tmp.path().join("stray-file.md"), "not an entry").unwrap();

        let posts = load_blog_posts(tmp.path()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "real");
    }

    #[test]
    fn test_missing_root_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("does-not-exist");
        assert!(load_blog_posts(&missing).is_err());
    }

    #[test]
    fn test_projects_fields() {
        let tmp = tempfile::tempdir().unwrap();
        write_entry(
            tmp.path(),
            "parser",
            "---\ntitle: Parser\ntech: [Rust, regex]\nimage: ./images/shot.png\n---\nAbout.",
        );

        let projects = load_projects(tmp.path()).unwrap();
        assert_eq!(projects.len(), 1);
        let p = &projects[0];
        assert_eq!(p.tech, vec!["Rust", "regex"]);
        assert_eq!(p.image, "/content/projects/parser/images/shot.png");
        assert_eq!(p.content, "About.");
    }

    #[test]
    fn test_lookup_by_slug() {
        let tmp = tempfile::tempdir().unwrap();
        write_entry(tmp.path(), "hello", "---\ntitle: Hello\n---\n");

        let post = blog_post_by_slug(tmp.path(), "hello").unwrap();
        assert_eq!(post.title, "Hello");

        let missing = blog_post_by_slug(tmp.path(), "nope");
        assert!(matches!(missing, Err(crate::Error::NotFound(_))));
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let tmp = tempfile::tempdir().unwrap();
        write_entry(tmp.path(), "a", "---\ntitle: A\ndate: 2024-01-01\n---\n");
        write_entry(tmp.path(), "b", "---\ntitle: B\ndate: 2024-02-01\n---\n");

        let parallel = load_blog_posts(tmp.path()).unwrap();
        let sequential =
            load_blog_posts_with_options(tmp.path(), &ParseOptions::new().sequential()).unwrap();
        let titles = |posts: &[BlogPost]| posts.iter().map(|p| p.title.clone()).collect::<Vec<_>>();
        assert_eq!(titles(&parallel), titles(&sequential));
    }
}

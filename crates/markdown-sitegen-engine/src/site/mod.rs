//! # Site Generation
//!
//! File-level glue around the parser: mirrors static assets, renders every
//! markdown page through a [`Template`] and writes the result under the
//! output root with the same relative layout.

pub mod template;

use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};
use thiserror::Error;

use crate::io::{self, IoError};
use crate::parsing::{ParseError, markdown_to_html};
use crate::title::{TitleError, extract_title};

pub use template::Template;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to render {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
    #[error("Failed to find a title in {path}: {source}")]
    Title { path: PathBuf, source: TitleError },
    #[error("Template is missing the {0} placeholder")]
    MissingPlaceholder(&'static str),
}

/// Where a site's inputs live and where its output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub public_dir: PathBuf,
    pub template: PathBuf,
    /// Remove `public_dir` before copying static assets.
    pub clean: bool,
}

/// What a build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub files_copied: usize,
    /// Generated pages, relative to the output root.
    pub pages: Vec<RelativePathBuf>,
}

/// Renders `source` (relative to `content_root`) through `template`.
///
/// The page is written to the same relative path under `dest_root` with an
/// `.html` extension, which is returned.
pub fn generate_page(
    source: &RelativePath,
    content_root: &Path,
    template: &Template,
    dest_root: &Path,
) -> Result<RelativePathBuf, SiteError> {
    let markdown = io::read_file(source, content_root)?;

    let content = markdown_to_html(&markdown).map_err(|err| SiteError::Parse {
        path: source.to_path(content_root),
        source: err,
    })?;
    let title = extract_title(&markdown).map_err(|err| SiteError::Title {
        path: source.to_path(content_root),
        source: err,
    })?;

    let page = source.with_extension("html");
    io::write_file(&page, dest_root, &template.apply(&title, &content))?;

    log::info!(
        "Generated {} from {}",
        page.to_path(dest_root).display(),
        source.to_path(content_root).display()
    );
    Ok(page)
}

/// Renders every markdown file under `content_root` that `include` accepts.
///
/// `content_root/a/b.md` becomes `dest_root/a/b.html`. Stops at the first page
/// that fails.
pub fn generate_pages_recursive(
    content_root: &Path,
    template: &Template,
    dest_root: &Path,
    include: impl Fn(&RelativePath) -> bool,
) -> Result<Vec<RelativePathBuf>, SiteError> {
    let mut pages = Vec::new();

    for file in io::scan_markdown_files(content_root)? {
        let relative = io::relative_to(content_root, &file)?;
        if !include(&relative) {
            log::warn!("Skipping excluded page {relative}");
            continue;
        }

        pages.push(generate_page(&relative, content_root, template, dest_root)?);
    }

    Ok(pages)
}

/// Copies static assets, then generates every page.
pub fn build(
    layout: &SiteLayout,
    include: impl Fn(&RelativePath) -> bool,
) -> Result<BuildSummary, SiteError> {
    let files_copied = io::copy_dir_recursive(&layout.static_dir, &layout.public_dir, layout.clean)?;
    let template = Template::load(&layout.template)?;
    let pages = generate_pages_recursive(
        &layout.content_dir,
        &template,
        &layout.public_dir,
        include,
    )?;

    log::info!(
        "Built {} pages and copied {} static files into {}",
        pages.len(),
        files_copied,
        layout.public_dir.display()
    );

    Ok(BuildSummary {
        files_copied,
        pages,
    })
}

use crate::error::{EngineError, Result};
use crate::page::{NavLink, PageContext, render_page};
use crate::paths;
use crate::render::SectionRenderer;
use sidedoc_core::{CommentSyntax, Prologue, Section, Segmenter};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// One input file and where its page goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path the file is read from.
    pub source: PathBuf,
    /// Path relative to the base directory, used for labels.
    pub relative: PathBuf,
    /// Page path relative to the output directory.
    pub output: PathBuf,
}

impl Document {
    #[must_use]
    pub fn extension(&self) -> String {
        paths::extension(&self.relative)
    }

    #[must_use]
    pub fn label(&self) -> String {
        paths::to_slash(&self.relative)
    }
}

/// Normalizes `inputs` against `base`, keeping the first occurrence of
/// each file.
///
/// # Errors
///
/// Fails on the first input that cannot be resolved, and with
/// [`EngineError::OutputCollision`] when two different files map to the
/// same page (`../lib/x.php` and `lib/x.php` both land on `lib/x.php.html`).
pub fn collect_documents(inputs: &[PathBuf], base: &Path) -> Result<Vec<Document>> {
    let mut seen = HashSet::new();
    let mut pages: HashMap<PathBuf, PathBuf> = HashMap::new();
    let mut documents = Vec::with_capacity(inputs.len());
    for input in inputs {
        let relative = paths::normalize_input(input, base)?;
        if !seen.insert(relative.clone()) {
            log::debug!("skipping duplicate input {}", input.display());
            continue;
        }
        let output = paths::output_relative(&relative);
        if let Some(first) = pages.insert(output.clone(), relative.clone()) {
            return Err(EngineError::OutputCollision {
                first,
                second: relative,
                output,
            });
        }
        documents.push(Document {
            source: base.join(input),
            output,
            relative,
        });
    }
    Ok(documents)
}

/// Reads and segments one document.
///
/// Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] if the file cannot be read.
pub fn segment_document(document: &Document, prologue: &Prologue) -> Result<Vec<Section>> {
    let bytes = std::fs::read(&document.source).map_err(|e| EngineError::FileRead {
        path: document.source.clone(),
        source: e,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let segmenter = Segmenter::new(
        CommentSyntax::from_extension(&document.extension()),
        prologue.clone(),
    );
    Ok(segmenter.segment(&text))
}

/// Navigation list as seen from `current`.
#[must_use]
pub fn navigation_for(current: &Document, documents: &[Document]) -> Vec<NavLink> {
    documents
        .iter()
        .map(|d| NavLink {
            label: d.label(),
            href: paths::link_href(&current.output, &d.output),
        })
        .collect()
}

/// Shared state for rendering the pages of one run.
pub struct PageJob<'a> {
    pub renderer: &'a dyn SectionRenderer,
    pub assets: &'a crate::assets::Assets,
    pub prologue: &'a Prologue,
}

/// Segments, renders and assembles the page for `document`.
///
/// Returns the HTML and the number of sections.
///
/// # Errors
///
/// Propagates read failures.
pub fn build_page(
    job: &PageJob<'_>,
    document: &Document,
    documents: &[Document],
) -> Result<(String, usize)> {
    let sections = segment_document(document, job.prologue)?;
    let extension = document.extension();
    let rendered: Vec<_> = sections
        .iter()
        .map(|s| job.renderer.render(s, &extension))
        .collect();

    let navigation = navigation_for(document, documents);
    let display_name = paths::display_name(&document.relative);
    let ctx = PageContext {
        display_name: &display_name,
        navigation: &navigation,
        assets: job.assets,
    };
    Ok((render_page(&ctx, &rendered)?, sections.len()))
}

/// Writes `html` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`EngineError::CreateDir`] or [`EngineError::FileWrite`].
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| EngineError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, html).map_err(|e| EngineError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// crates/engine/src/lib.rs
use serde::Serialize;
use std::path::PathBuf;

pub mod assets;
pub mod config;
pub mod error;
pub mod options;
pub mod page;
pub mod paths;
pub mod processor;
pub mod render;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::processor::{Document, PageJob};
use sidedoc_core::Section;

/// Outcome for one documented file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Input path relative to the base directory.
    pub input: PathBuf,
    /// Where the page was (or, on a dry run, would have been) written.
    pub output: PathBuf,
    pub sections: usize,
    pub written: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    pub files: Vec<FileReport>,
}

/// Sections of one file, for dumping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSections {
    pub path: PathBuf,
    pub sections: Vec<Section>,
}

/// Documents every configured input, one file after another.
///
/// The run stops at the first file that cannot be read or written; pages
/// written before that point are left in place.
///
/// # Errors
///
/// Returns [`EngineError::NoInputs`] for an empty input list, otherwise the
/// first I/O or configuration error.
pub fn run(config: &Config) -> Result<RunResult> {
    let (base, documents) = prepare(config)?;
    let prologue = config.build_prologue()?;
    let assets = config.assets();
    let renderer = render::renderer_for(config.markdown);
    let job = PageJob {
        renderer: renderer.as_ref(),
        assets: &assets,
        prologue: &prologue,
    };
    let output_root = base.join(&config.output_dir);

    let mut result = RunResult::default();
    for document in &documents {
        log::info!("Generating documentation: {}", document.label());
        let (html, sections) = processor::build_page(&job, document, &documents)?;
        let output = output_root.join(&document.output);
        if !config.dry_run {
            processor::write_page(&output, &html)?;
        }
        log::debug!("{}: {sections} sections -> {}", document.label(), output.display());
        result.files.push(FileReport {
            input: document.relative.clone(),
            output,
            sections,
            written: !config.dry_run,
        });
    }
    Ok(result)
}

/// Segments every configured input without rendering anything.
///
/// # Errors
///
/// Same failure modes as [`run`], minus writing.
pub fn segment_files(config: &Config) -> Result<Vec<DocumentSections>> {
    let (_, documents) = prepare(config)?;
    let prologue = config.build_prologue()?;
    documents
        .iter()
        .map(|d| {
            Ok(DocumentSections {
                path: d.relative.clone(),
                sections: processor::segment_document(d, &prologue)?,
            })
        })
        .collect()
}

/// Pretty JSON listing of segmented files.
///
/// # Errors
///
/// Returns [`EngineError::Json`] if serialization fails.
pub fn sections_json(documents: &[DocumentSections]) -> Result<String> {
    Ok(serde_json::to_string_pretty(documents)?)
}

fn prepare(config: &Config) -> Result<(PathBuf, Vec<Document>)> {
    if config.inputs.is_empty() {
        return Err(EngineError::NoInputs);
    }
    let base = config.resolve_base_dir()?;
    let documents = processor::collect_documents(&config.inputs, &base)?;
    Ok((base, documents))
}

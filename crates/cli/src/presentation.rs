// crates/cli/src/presentation.rs
use sidedoc_engine::{DocumentSections, RunResult};

pub fn print_sections(documents: &[DocumentSections]) -> anyhow::Result<()> {
    println!("{}", sidedoc_engine::sections_json(documents)?);
    Ok(())
}

/// One-line summary after a run, logged so `--quiet` hides it.
pub fn report_run(result: &RunResult) {
    let sections: usize = result.files.iter().map(|f| f.sections).sum();
    let written = result.files.iter().filter(|f| f.written).count();
    if written == result.files.len() {
        log::info!("Documented {} files ({sections} sections)", result.files.len());
    } else {
        log::info!(
            "Dry run: {} files ({sections} sections), nothing written",
            result.files.len()
        );
    }
}

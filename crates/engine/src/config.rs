use crate::assets::Assets;
use crate::error::{EngineError, Result};
use crate::options::{MarkdownMode, PrologueSetting};
use derive_builder::Builder;
use sidedoc_core::Prologue;
use std::path::PathBuf;

/// Output directory used when none is configured, relative to the base dir.
pub const DEFAULT_OUTPUT_DIR: &str = "docs";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Files to document, in the order given.
    #[builder(default)]
    pub inputs: Vec<PathBuf>,
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT_DIR)")]
    pub output_dir: PathBuf,
    /// Directory inputs and `output_dir` are resolved against. Defaults to
    /// the process working directory.
    #[builder(default)]
    pub base_dir: Option<PathBuf>,
    #[builder(default)]
    pub prologue: PrologueSetting,
    #[builder(default)]
    pub markdown: MarkdownMode,
    #[builder(default)]
    pub stylesheet: Option<String>,
    /// Segment and render but write nothing.
    #[builder(default)]
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: vec![],
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            base_dir: None,
            prologue: PrologueSetting::default(),
            markdown: MarkdownMode::default(),
            stylesheet: None,
            dry_run: false,
        }
    }
}

impl Config {
    /// Compiles the configured prologue patterns.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPrologue`] for a pattern that does not compile.
    pub fn build_prologue(&self) -> Result<Prologue> {
        match &self.prologue {
            PrologueSetting::Builtin => Ok(Prologue::default()),
            PrologueSetting::Disabled => Ok(Prologue::none()),
            PrologueSetting::Custom(patterns) => Ok(Prologue::new(patterns)?),
        }
    }

    /// # Errors
    ///
    /// Fails when no base dir is configured and the working directory is unavailable.
    pub fn resolve_base_dir(&self) -> Result<PathBuf> {
        match &self.base_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(EngineError::WorkingDir),
        }
    }

    #[must_use]
    pub fn assets(&self) -> Assets {
        match &self.stylesheet {
            Some(url) => Assets::default().with_stylesheet(url.clone()),
            None => Assets::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        let default = Config::default();
        assert_eq!(built.output_dir, default.output_dir);
        assert_eq!(built.prologue, default.prologue);
        assert_eq!(built.markdown, MarkdownMode::Client);
        assert!(!built.dry_run);
    }

    #[test]
    fn test_build_prologue_variants() {
        let builtin = Config::default().build_prologue().unwrap();
        assert_eq!(builtin.strip("#!/x\ncode"), "code");

        let disabled = ConfigBuilder::default()
            .prologue(PrologueSetting::Disabled)
            .build()
            .unwrap()
            .build_prologue()
            .unwrap();
        assert!(disabled.is_empty());

        let custom = ConfigBuilder::default()
            .prologue(PrologueSetting::Custom(vec!["%%.*\n".to_string()]))
            .build()
            .unwrap()
            .build_prologue()
            .unwrap();
        assert_eq!(custom.strip("%% header\nbody"), "body");
    }

    #[test]
    fn test_invalid_prologue_is_an_error() {
        let config = ConfigBuilder::default()
            .prologue(PrologueSetting::Custom(vec!["[".to_string()]))
            .build()
            .unwrap();
        assert!(matches!(
            config.build_prologue(),
            Err(EngineError::InvalidPrologue(_))
        ));
    }

    #[test]
    fn test_stylesheet_override() {
        let config = ConfigBuilder::default()
            .stylesheet(Some("style.css".to_string()))
            .build()
            .unwrap();
        assert_eq!(config.assets().stylesheet, "style.css");
    }
}

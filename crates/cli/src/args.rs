// crates/cli/src/args.rs
use crate::options::MarkdownArg;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sidedoc",
    version,
    about = "Generates side-by-side HTML documentation from commented source files"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub source: SourceOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// Source files to document
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Directory the pages are written to
    #[arg(
        short,
        long,
        default_value = sidedoc_engine::config::DEFAULT_OUTPUT_DIR,
        value_hint = ValueHint::DirPath,
        help_heading = "Output"
    )]
    pub output: PathBuf,

    /// Where comment Markdown is converted to HTML
    #[arg(long, value_enum, default_value = "client", help_heading = "Output")]
    pub markdown: MarkdownArg,

    /// Stylesheet URL linked from every page
    #[arg(long, value_name = "URL", help_heading = "Output")]
    pub stylesheet: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct SourceOptions {
    /// Pattern stripped from the start of each file (repeatable, replaces the defaults)
    #[arg(long, value_name = "REGEX", conflicts_with = "no_prologue", help_heading = "Source")]
    pub prologue: Vec<String>,

    /// Keep shebang lines and opening tags
    #[arg(long, help_heading = "Source")]
    pub no_prologue: bool,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// Only report warnings and errors
    #[arg(short, long, help_heading = "Behavior")]
    pub quiet: bool,

    /// Render everything but write no files
    #[arg(long, help_heading = "Behavior")]
    pub dry_run: bool,

    /// Print the sections of each file as JSON instead of writing pages
    #[arg(long, help_heading = "Behavior")]
    pub dump_sections: bool,
}

// crates/cli/src/config.rs
use crate::args::Args;
use crate::options;
pub use sidedoc_engine::config::{Config, ConfigBuilder};
use sidedoc_engine::options::{self as engine_options, PrologueSetting};

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let prologue = if args.source.no_prologue {
            PrologueSetting::Disabled
        } else if args.source.prologue.is_empty() {
            PrologueSetting::Builtin
        } else {
            PrologueSetting::Custom(args.source.prologue)
        };
        let markdown: engine_options::MarkdownMode = args.output.markdown.into();

        ConfigBuilder::default()
            .inputs(args.files)
            .output_dir(args.output.output)
            .prologue(prologue)
            .markdown(markdown)
            .stylesheet(args.output.stylesheet)
            .dry_run(args.behavior.dry_run)
            .build()
            .expect("Failed to build config")
    }
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::MarkdownArg, engine_options::MarkdownMode, Client, Server);

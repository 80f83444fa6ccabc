use clap::Parser;
use sidedoc_cli::args::Args;
use sidedoc_cli::config::Config;
use sidedoc_cli::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.behavior.quiet);
    let dump = args.behavior.dump_sections;
    let config = Config::from(args);

    match run(&config, dump) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, dump: bool) -> anyhow::Result<()> {
    if dump {
        let documents = sidedoc_engine::segment_files(config)?;
        return presentation::print_sections(&documents);
    }
    let result = sidedoc_engine::run(config)?;
    presentation::report_run(&result);
    Ok(())
}

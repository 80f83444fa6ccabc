use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum MarkdownArg {
    /// Converted in the browser by the page script
    #[default]
    Client,
    /// Converted while generating
    Server,
}

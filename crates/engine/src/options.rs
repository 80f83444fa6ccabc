/// Where comment prose is turned from Markdown into HTML.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkdownMode {
    /// Emit the raw prose; the page converts it in the browser.
    #[default]
    Client,
    /// Convert at generation time.
    Server,
}

/// Which leading lines are stripped before segmentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PrologueSetting {
    /// Shebang line, then an opening `<?php` tag.
    #[default]
    Builtin,
    /// Keep every line.
    Disabled,
    /// User patterns, applied in order.
    Custom(Vec<String>),
}

//! Section rendering.
//!
//! Code is only escaped and tagged with a brush name; colouring happens in
//! the browser. Prose is either left for the in-page Markdown converter or
//! converted here with `comrak`.

use crate::assets::FALLBACK_BRUSH;
use crate::options::MarkdownMode;
use sidedoc_core::Section;

/// HTML for one section, ready to be dropped into a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub comment_html: String,
    pub code_html: String,
}

pub trait SectionRenderer {
    /// Renders `section` of a file with the given extension (no dot).
    fn render(&self, section: &Section, extension: &str) -> RenderedSection;
}

/// Leaves the prose for the page script to convert.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientSideRenderer;

impl SectionRenderer for ClientSideRenderer {
    fn render(&self, section: &Section, extension: &str) -> RenderedSection {
        RenderedSection {
            comment_html: format!("<div class=\"doc\">{}</div>", escape_html(&section.comment)),
            code_html: code_block(&section.code, extension),
        }
    }
}

/// Converts the prose to HTML at generation time.
pub struct MarkdownRenderer {
    options: comrak::Options<'static>,
}

impl MarkdownRenderer {
    #[must_use]
    pub fn new() -> Self {
        let mut options = comrak::Options::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.extension.autolink = true;
        Self { options }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRenderer for MarkdownRenderer {
    fn render(&self, section: &Section, extension: &str) -> RenderedSection {
        let html = comrak::markdown_to_html(&section.comment, &self.options);
        RenderedSection {
            comment_html: format!("<div class=\"doc rendered\">{html}</div>"),
            code_html: code_block(&section.code, extension),
        }
    }
}

/// Renderer for the configured Markdown mode.
#[must_use]
pub fn renderer_for(mode: MarkdownMode) -> Box<dyn SectionRenderer> {
    match mode {
        MarkdownMode::Client => Box::new(ClientSideRenderer),
        MarkdownMode::Server => Box::new(MarkdownRenderer::new()),
    }
}

/// Brush name the highlighter should use for `extension`.
#[must_use]
pub fn brush_name(extension: &str) -> String {
    if extension.is_empty() {
        FALLBACK_BRUSH.to_string()
    } else {
        extension.to_ascii_lowercase()
    }
}

fn code_block(code: &str, extension: &str) -> String {
    format!(
        "<pre class=\"brush: {}\">{}</pre>",
        escape_html(&brush_name(extension)),
        escape_html(code)
    )
}

/// Escapes the characters HTML reserves in text and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

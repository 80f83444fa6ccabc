//! Page assembly.
//!
//! A page is the section table of one file, the optional "Jump To" list of
//! its siblings and the script wiring for the in-browser Markdown converter
//! and highlighter.

use crate::assets::{
    Assets, BRUSH_BASE, BRUSHES, HIGHLIGHTER_SCRIPTS, JQUERY, SHOWDOWN, THEME_STYLESHEETS,
};
use crate::render::{RenderedSection, escape_html};
use std::fmt::{self, Write};

/// Entry of the navigation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Everything a page needs besides its sections.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub display_name: &'a str,
    /// Links to every documented file, the current one included.
    pub navigation: &'a [NavLink],
    pub assets: &'a Assets,
}

/// Anchor id of the section at `index`.
#[must_use]
pub fn section_anchor(index: usize) -> String {
    format!("section-{index}")
}

/// Builds the complete HTML document.
///
/// # Errors
///
/// Only fails if formatting into the buffer fails.
pub fn render_page(ctx: &PageContext<'_>, sections: &[RenderedSection]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let title = escape_html(ctx.display_name);

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta http-equiv=\"content-type\" content=\"text/html;charset=utf-8\">")?;
    writeln!(out, "<title>{title}</title>")?;
    writeln!(out, "<link rel=\"stylesheet\" href=\"{}\">", escape_html(&ctx.assets.stylesheet))?;
    for href in THEME_STYLESHEETS {
        writeln!(out, "<link rel=\"stylesheet\" type=\"text/css\" href=\"{href}\">")?;
    }
    writeln!(out, "<style type=\"text/css\">")?;
    writeln!(
        out,
        ".syntaxhighlighter, .syntaxhighlighter .line.alt1, .syntaxhighlighter .line.alt2 {{ background: none !important; }}"
    )?;
    writeln!(out, "td.code td.code {{ padding: 0; border: none; }}")?;
    writeln!(out, "</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<div id=\"container\">")?;
    writeln!(out, "<div id=\"background\"></div>")?;
    write_navigation(&mut out, ctx.navigation)?;
    write_sections(&mut out, &title, sections)?;
    writeln!(out, "</div>")?;
    write_scripts(&mut out)?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(out)
}

fn write_navigation(out: &mut String, links: &[NavLink]) -> fmt::Result {
    if links.len() < 2 {
        return Ok(());
    }
    writeln!(out, "<div id=\"jump_to\">")?;
    writeln!(out, "<a id=\"jump_handle\" href=\"#\">Jump&nbsp;To&hellip;</a>")?;
    writeln!(out, "<div id=\"jump_wrapper\">")?;
    writeln!(out, "<div id=\"jump_page\">")?;
    for link in links {
        writeln!(
            out,
            "<a class=\"source\" href=\"{}\">{}</a>",
            escape_html(&link.href),
            escape_html(&link.label)
        )?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")
}

// Prose and code are written flush left: leading whitespace inside them is
// significant to the Markdown converter and the highlighter.
fn write_sections(out: &mut String, title: &str, sections: &[RenderedSection]) -> fmt::Result {
    writeln!(out, "<table cellspacing=\"0\" cellpadding=\"0\">")?;
    writeln!(out, "<thead>")?;
    writeln!(out, "<tr>")?;
    writeln!(out, "<th class=\"docs\"><h1>{title}</h1></th>")?;
    writeln!(out, "<th class=\"code\"></th>")?;
    writeln!(out, "</tr>")?;
    writeln!(out, "</thead>")?;
    writeln!(out, "<tbody>")?;
    for (index, section) in sections.iter().enumerate() {
        let anchor = section_anchor(index);
        writeln!(out, "<tr id=\"{anchor}\">")?;
        writeln!(out, "<td class=\"docs\">")?;
        writeln!(out, "<div class=\"pilwrap\">")?;
        writeln!(out, "<a class=\"pilcrow\" href=\"#{anchor}\">&#182;</a>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "{}", section.comment_html)?;
        writeln!(out, "</td>")?;
        writeln!(out, "<td class=\"code\">")?;
        writeln!(out, "<div class=\"highlight\">")?;
        writeln!(out, "{}", section.code_html)?;
        writeln!(out, "</div>")?;
        writeln!(out, "</td>")?;
        writeln!(out, "</tr>")?;
    }
    writeln!(out, "</tbody>")?;
    writeln!(out, "</table>")
}

fn write_scripts(out: &mut String) -> fmt::Result {
    writeln!(out, "<script src=\"{JQUERY}\"></script>")?;
    writeln!(out, "<script src=\"{SHOWDOWN}\"></script>")?;
    writeln!(out, "<script>")?;
    writeln!(out, "var converter = new Showdown.converter();")?;
    writeln!(out, "$(\".doc\").not(\".rendered\").each(function() {{")?;
    writeln!(out, "  $(this).html(converter.makeHtml($(this).text()));")?;
    writeln!(out, "}});")?;
    writeln!(out, "$(\"#jump_handle\").click(function(e) {{")?;
    writeln!(out, "  $(\"#jump_wrapper\").toggle();")?;
    writeln!(out, "  e.preventDefault();")?;
    writeln!(out, "}});")?;
    writeln!(out, "</script>")?;
    for src in HIGHLIGHTER_SCRIPTS {
        writeln!(out, "<script type=\"text/javascript\" src=\"{src}\"></script>")?;
    }
    writeln!(out, "<script type=\"text/javascript\">")?;
    writeln!(out, "SyntaxHighlighter.autoloader(")?;
    for (i, (aliases, script)) in BRUSHES.iter().enumerate() {
        let sep = if i + 1 == BRUSHES.len() { "" } else { "," };
        writeln!(out, "  \"{aliases} {BRUSH_BASE}{script}\"{sep}")?;
    }
    writeln!(out, ");")?;
    writeln!(out, "SyntaxHighlighter.defaults[\"light\"] = true;")?;
    writeln!(out, "SyntaxHighlighter.defaults[\"unindent\"] = false;")?;
    writeln!(out, "SyntaxHighlighter.all();")?;
    writeln!(out, "</script>")
}

//! Remotely hosted page assets.
//!
//! Pages carry no inline CSS framework or highlighter of their own; they link
//! these URLs and let the browser do Markdown conversion and highlighting.

/// Main page stylesheet.
pub const STYLESHEET: &str = "http://markhuot.github.com/phocco/resources/phocco.css";

/// Highlighter themes, linked after the main stylesheet.
pub const THEME_STYLESHEETS: [&str; 2] = [
    "http://google-code-prettify.googlecode.com/svn/trunk/src/prettify.css",
    "http://alexgorbatchev.com/pub/sh/current/styles/shThemeDefault.css",
];

pub const JQUERY: &str = "http://code.jquery.com/jquery-1.7.1.min.js";
pub const SHOWDOWN: &str = "http://markhuot.github.com/phocco/resources/showdown.js";

/// Highlighter core scripts, in load order.
pub const HIGHLIGHTER_SCRIPTS: [&str; 3] = [
    "https://raw.github.com/alexgorbatchev/SyntaxHighlighter/master/scripts/XRegExp.js",
    "https://raw.github.com/alexgorbatchev/SyntaxHighlighter/master/scripts/shCore.js",
    "http://alexgorbatchev.com/pub/sh/current/scripts/shAutoloader.js",
];

/// Base URL the brush files are loaded from.
pub const BRUSH_BASE: &str = "http://alexgorbatchev.com/pub/sh/current/scripts/";

/// Brush aliases (space separated) and the script providing them.
pub const BRUSHES: [(&str, &str); 24] = [
    ("applescript", "shBrushAppleScript.js"),
    ("actionscript3 as3", "shBrushAS3.js"),
    ("bash shell", "shBrushBash.js"),
    ("coldfusion cf", "shBrushColdFusion.js"),
    ("cpp c", "shBrushCpp.js"),
    ("c# c-sharp csharp", "shBrushCSharp.js"),
    ("css", "shBrushCss.js"),
    ("delphi pascal", "shBrushDelphi.js"),
    ("diff patch pas", "shBrushDiff.js"),
    ("erl erlang", "shBrushErlang.js"),
    ("groovy", "shBrushGroovy.js"),
    ("java", "shBrushJava.js"),
    ("jfx javafx", "shBrushJavaFX.js"),
    ("js jscript javascript", "shBrushJScript.js"),
    ("perl pl", "shBrushPerl.js"),
    ("php", "shBrushPhp.js"),
    ("text plain", "shBrushPlain.js"),
    ("py python", "shBrushPython.js"),
    ("ruby rails ror rb", "shBrushRuby.js"),
    ("sass scss", "shBrushSass.js"),
    ("scala", "shBrushScala.js"),
    ("sql", "shBrushSql.js"),
    ("vb vbnet", "shBrushVb.js"),
    ("xml xhtml xslt html", "shBrushXml.js"),
];

/// Brush used for files without an extension.
pub const FALLBACK_BRUSH: &str = "plain";

/// Asset set referenced by a generated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    pub stylesheet: String,
}

impl Assets {
    #[must_use]
    pub fn with_stylesheet(mut self, url: impl Into<String>) -> Self {
        self.stylesheet = url.into();
        self
    }
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            stylesheet: STYLESHEET.to_string(),
        }
    }
}

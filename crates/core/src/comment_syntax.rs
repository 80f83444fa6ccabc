//! Comment marker sets.
//!
//! The segmenter only ever looks at three kinds of comment intro: a block
//! opener, a block continuation/closer pair and a line prefix. Which strings
//! play those roles is picked from the file extension, the same way the
//! line counter used to pick a comment style.

/// Markers of a documentation block comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMarkers {
    /// Opens a block (`/**`).
    pub open: &'static str,
    /// Optional leading marker on continuation lines (`*`).
    pub body: &'static str,
    /// Closes a block when it stands alone on a line (`*/`).
    pub close: &'static str,
}

/// Comment syntax understood by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    /// Block comment markers, if the language has documentation blocks.
    pub block: Option<BlockMarkers>,
    /// Line comment prefix.
    pub line: &'static str,
}

impl CommentSyntax {
    /// `/** ... */` blocks and `//` line comments.
    #[must_use]
    pub const fn c_style() -> Self {
        Self {
            block: Some(BlockMarkers {
                open: "/**",
                body: "*",
                close: "*/",
            }),
            line: "//",
        }
    }

    /// `#` line comments only (shell, Python, Ruby, config files).
    #[must_use]
    pub const fn hash_style() -> Self {
        Self {
            block: None,
            line: "#",
        }
    }

    /// `--` line comments only (SQL, Lua, Haskell).
    #[must_use]
    pub const fn dash_style() -> Self {
        Self {
            block: None,
            line: "--",
        }
    }

    /// Picks the comment syntax for a file extension (without the dot).
    ///
    /// Unknown extensions fall back to [`CommentSyntax::c_style`].
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "py" | "pyw" | "rb" | "sh" | "bash" | "zsh" | "pl" | "pm" | "yml" | "yaml"
            | "toml" | "r" | "mk" => Self::hash_style(),
            "sql" | "lua" | "hs" => Self::dash_style(),
            _ => Self::c_style(),
        }
    }
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self::c_style()
    }
}

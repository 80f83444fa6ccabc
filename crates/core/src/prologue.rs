//! Leading-line stripping applied once before segmentation.
//!
//! Scripts often start with lines that are not worth documenting: a shebang,
//! an opening `<?php` tag. Each configured pattern is tried in order against
//! the start of whatever text the previous patterns left behind.

use alloc::format;
use alloc::vec::Vec;
use regex::Regex;

/// `#!` interpreter line and the line breaks after it.
pub const SHEBANG: &str = r"#!.*[\r\n]+";

/// Opening PHP tag with the whitespace around it.
pub const PHP_OPEN_TAG: &str = r"\s*<\?php\s*";

/// Ordered list of anchored prefix patterns.
#[derive(Debug, Clone)]
pub struct Prologue {
    patterns: Vec<Regex>,
}

impl Prologue {
    /// Compiles `patterns`, anchoring each one at the start of the text.
    ///
    /// # Errors
    ///
    /// Returns the first pattern that fails to compile.
    pub fn new<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Regex::new(&format!(r"\A(?:{})", p.as_ref())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// A prologue that strips nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Number of configured patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Removes every matching prefix, in pattern order.
    #[must_use]
    pub fn strip<'a>(&self, text: &'a str) -> &'a str {
        let mut rest = text;
        for re in &self.patterns {
            if let Some(m) = re.find(rest) {
                rest = &rest[m.end()..];
            }
        }
        rest
    }
}

impl Default for Prologue {
    /// Shebang, then opening PHP tag.
    ///
    /// # Panics
    ///
    /// Panics if the built-in patterns fail to compile (they are constants).
    fn default() -> Self {
        Self::new([SHEBANG, PHP_OPEN_TAG]).expect("built-in prologue patterns are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strips_shebang_and_open_tag() {
        let p = Prologue::default();
        assert_eq!(p.strip("#!/usr/bin/php\n\n<?php\n\ncode();\n"), "code();\n");
    }

    #[test]
    fn test_default_strips_open_tag_without_shebang() {
        let p = Prologue::default();
        assert_eq!(p.strip("  <?php\n// doc\n"), "// doc\n");
    }

    #[test]
    fn test_shebang_without_line_break_is_kept() {
        let p = Prologue::default();
        assert_eq!(p.strip("#!/bin/sh"), "#!/bin/sh");
    }

    #[test]
    fn test_patterns_only_match_at_start() {
        let p = Prologue::default();
        assert_eq!(p.strip("code();\n<?php\n"), "code();\n<?php\n");
    }

    #[test]
    fn test_none_is_identity() {
        let p = Prologue::none();
        assert!(p.is_empty());
        assert_eq!(p.strip("#!/x\n<?php\n"), "#!/x\n<?php\n");
    }

    #[test]
    fn test_custom_patterns_apply_in_order() {
        let p = Prologue::new([r"---\n", r"title: .*\n"]).unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.strip("---\ntitle: x\nbody\n"), "body\n");
        // A pattern that misses does not stop the ones after it.
        assert_eq!(p.strip("title: x\n---\n"), "---\n");
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        assert!(Prologue::new(["("]).is_err());
    }
}

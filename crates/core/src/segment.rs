//! Single-pass segmentation of source text into [`Section`]s.
//!
//! ## Line splitting
//!
//! Lines are split with [`str::lines`]: blank lines are kept one for one, a
//! trailing line break ends the last line instead of adding an empty one,
//! and a `\r` before the break is dropped.
//!
//! ## Section boundaries
//!
//! A documentation block opener always starts a new section. A line comment
//! starts one unless the line before it was a line comment too. Code never
//! starts a section: it joins the prose right above it. A boundary
//! only emits the pending section when that section holds at least one line
//! (a blank code line counts), and the pending section is always emitted at
//! end of input, so the result is never empty.
//!
//! ```rust
//! use sidedoc_core::{Section, segment};
//!
//! let sections = segment("// a\n// b\ncode();\n");
//! assert_eq!(
//!     sections,
//!     vec![Section::new("a\nb", "code();")]
//! );
//! ```

use alloc::vec::Vec;

use crate::comment_syntax::CommentSyntax;
use crate::prologue::Prologue;
use crate::rules::{self, ClassifierState, LineKind};
use crate::section::Section;

/// Segments `source` with C-style comments and the default prologue.
#[must_use]
pub fn segment(source: &str) -> Vec<Section> {
    Segmenter::default().segment(source)
}

/// Configured segmenter. Holds no per-file state, so one value can segment
/// any number of files.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    syntax: CommentSyntax,
    prologue: Prologue,
}

impl Segmenter {
    #[must_use]
    pub const fn new(syntax: CommentSyntax, prologue: Prologue) -> Self {
        Self { syntax, prologue }
    }

    /// Comment syntax picked from `extension`, default prologue.
    #[must_use]
    pub fn for_extension(extension: &str) -> Self {
        Self::new(CommentSyntax::from_extension(extension), Prologue::default())
    }

    #[must_use]
    pub fn with_prologue(mut self, prologue: Prologue) -> Self {
        self.prologue = prologue;
        self
    }

    /// Kind the classifier gives `line` when it is reached in `state`.
    #[must_use]
    pub fn classify(&self, state: ClassifierState, line: &str) -> LineKind {
        rules::select(&self.syntax, state, line).kind
    }

    /// Splits `source` into sections, in file order.
    #[must_use]
    pub fn segment(&self, source: &str) -> Vec<Section> {
        let body = self.prologue.strip(source);
        let mut run = Run::default();
        for line in body.lines() {
            run.step(&self.syntax, line);
        }
        run.finish()
    }
}

/// Buffers of one segmentation pass.
#[derive(Debug, Default)]
pub(crate) struct Run<'a> {
    pub(crate) state: ClassifierState,
    pub(crate) previous: Option<LineKind>,
    pub(crate) comment: Vec<&'a str>,
    pub(crate) code: Vec<&'a str>,
    sections: Vec<Section>,
}

impl<'a> Run<'a> {
    fn step(&mut self, syntax: &CommentSyntax, line: &'a str) {
        let rule = rules::select(syntax, self.state, line);
        (rule.apply)(self, syntax, line);
        self.previous = Some(rule.kind);
    }

    /// Emits the pending section if it holds any line.
    pub(crate) fn flush(&mut self) {
        if self.comment.is_empty() && self.code.is_empty() {
            return;
        }
        let section = self.take();
        self.sections.push(section);
    }

    fn take(&mut self) -> Section {
        let section = Section::new(self.comment.join("\n"), self.code.join("\n"));
        self.comment.clear();
        self.code.clear();
        section
    }

    fn finish(mut self) -> Vec<Section> {
        let last = self.take();
        self.sections.push(last);
        self.sections
    }
}

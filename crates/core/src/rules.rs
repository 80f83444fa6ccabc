//! Ordered line classification table.
//!
//! Each rule pairs a predicate with the action that applies it to the
//! running segmentation. [`select`] walks [`RULES`] top to bottom and takes
//! the first rule whose predicate holds, so the order of the table is the
//! priority order of the classifier.

use crate::comment_syntax::CommentSyntax;
use crate::segment::Run;

/// Classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    BlockCommentOpen,
    BlockCommentBody,
    BlockCommentClose,
    LineComment,
    Code,
}

/// Block comment state carried from one line to the next.
///
/// `Normal` covers both plain code and runs of line comments; whether a line
/// comment continues the current prose is decided by the previous line's
/// [`LineKind`], not by this state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClassifierState {
    #[default]
    Normal,
    InBlockComment,
}

type Predicate = fn(&CommentSyntax, ClassifierState, &str) -> bool;
type Action = for<'a> fn(&mut Run<'a>, &CommentSyntax, &'a str);

/// One entry of the classification table.
pub struct Rule {
    pub kind: LineKind,
    pub matches: Predicate,
    pub(crate) apply: Action,
}

/// Classification rules in priority order. The last rule matches anything.
pub static RULES: [Rule; 5] = [
    Rule {
        kind: LineKind::BlockCommentClose,
        matches: closes_block,
        apply: apply_block_close,
    },
    Rule {
        kind: LineKind::BlockCommentBody,
        matches: continues_block,
        apply: apply_block_body,
    },
    Rule {
        kind: LineKind::BlockCommentOpen,
        matches: opens_block,
        apply: apply_block_open,
    },
    Rule {
        kind: LineKind::LineComment,
        matches: starts_line_comment,
        apply: apply_line_comment,
    },
    Rule {
        kind: LineKind::Code,
        matches: any_line,
        apply: apply_code,
    },
];

/// Returns the first rule of [`RULES`] that accepts `line` in `state`.
#[must_use]
pub fn select(syntax: &CommentSyntax, state: ClassifierState, line: &str) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.matches)(syntax, state, line))
        .unwrap_or(&RULES[RULES.len() - 1])
}

// --- marker matching -------------------------------------------------------

/// Line is nothing but the block close marker, surrounded by whitespace.
#[must_use]
pub fn is_block_close(syntax: &CommentSyntax, line: &str) -> bool {
    syntax.block.is_some_and(|b| line.trim() == b.close)
}

#[must_use]
pub fn is_block_open(syntax: &CommentSyntax, line: &str) -> bool {
    syntax
        .block
        .is_some_and(|b| line.trim_start().starts_with(b.open))
}

#[must_use]
pub fn is_line_comment(syntax: &CommentSyntax, line: &str) -> bool {
    line.trim_start().starts_with(syntax.line)
}

/// Text after the block open marker, kept as is.
#[must_use]
pub fn strip_block_open<'a>(syntax: &CommentSyntax, line: &'a str) -> &'a str {
    syntax
        .block
        .and_then(|b| line.trim_start().strip_prefix(b.open))
        .unwrap_or(line)
}

/// Drops a leading continuation marker and one whitespace character after it.
/// Lines without the marker are returned untouched.
#[must_use]
pub fn strip_block_body<'a>(syntax: &CommentSyntax, line: &'a str) -> &'a str {
    syntax
        .block
        .and_then(|b| line.trim_start().strip_prefix(b.body))
        .map_or(line, skip_one_space)
}

/// Drops the line comment marker and one whitespace character after it.
#[must_use]
pub fn strip_line_comment<'a>(syntax: &CommentSyntax, line: &'a str) -> &'a str {
    line.trim_start()
        .strip_prefix(syntax.line)
        .map_or(line, skip_one_space)
}

fn skip_one_space(s: &str) -> &str {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => s,
    }
}

// --- predicates ------------------------------------------------------------

fn closes_block(syntax: &CommentSyntax, state: ClassifierState, line: &str) -> bool {
    state == ClassifierState::InBlockComment && is_block_close(syntax, line)
}

fn continues_block(syntax: &CommentSyntax, state: ClassifierState, _line: &str) -> bool {
    state == ClassifierState::InBlockComment && syntax.block.is_some()
}

fn opens_block(syntax: &CommentSyntax, state: ClassifierState, line: &str) -> bool {
    state == ClassifierState::Normal && is_block_open(syntax, line)
}

fn starts_line_comment(syntax: &CommentSyntax, state: ClassifierState, line: &str) -> bool {
    state == ClassifierState::Normal && is_line_comment(syntax, line)
}

fn any_line(_syntax: &CommentSyntax, _state: ClassifierState, _line: &str) -> bool {
    true
}

// --- actions ---------------------------------------------------------------

fn apply_block_close<'a>(run: &mut Run<'a>, _syntax: &CommentSyntax, _line: &'a str) {
    // Only the marker is on this line, so it contributes an empty line.
    run.comment.push("");
    run.state = ClassifierState::Normal;
}

fn apply_block_body<'a>(run: &mut Run<'a>, syntax: &CommentSyntax, line: &'a str) {
    run.comment.push(strip_block_body(syntax, line));
}

fn apply_block_open<'a>(run: &mut Run<'a>, syntax: &CommentSyntax, line: &'a str) {
    run.flush();
    run.comment.push(strip_block_open(syntax, line));
    run.state = ClassifierState::InBlockComment;
}

fn apply_line_comment<'a>(run: &mut Run<'a>, syntax: &CommentSyntax, line: &'a str) {
    if run.previous != Some(LineKind::LineComment) {
        run.flush();
    }
    run.comment.push(strip_line_comment(syntax, line));
}

fn apply_code<'a>(run: &mut Run<'a>, _syntax: &CommentSyntax, line: &'a str) {
    run.code.push(line);
}

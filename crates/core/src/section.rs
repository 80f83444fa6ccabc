use alloc::string::String;
use serde::Serialize;

/// One row of the side-by-side view: prose on the left, code on the right.
///
/// Both halves are the accumulated lines joined with `\n`, comment markers
/// already stripped from the prose.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub comment: String,
    pub code: String,
}

impl Section {
    #[must_use]
    pub fn new(comment: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            code: code.into(),
        }
    }
}

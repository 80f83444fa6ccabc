//! Comment/code segmentation for side-by-side documentation.
//!
//! Nothing in this crate touches the filesystem: text goes in, an ordered
//! list of [`Section`]s comes out.

#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod comment_syntax;
pub mod prologue;
pub mod rules;
pub mod section;
pub mod segment;

pub use comment_syntax::{BlockMarkers, CommentSyntax};
pub use prologue::Prologue;
pub use rules::{ClassifierState, LineKind};
pub use section::Section;
pub use segment::{Segmenter, segment};

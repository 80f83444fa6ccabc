use proptest::prelude::*;
use sidedoc_core::{Segmenter, segment};

/// Code line that cannot be mistaken for a comment or a prologue line.
fn code_line() -> impl Strategy<Value = String> {
    "[a-z(){};=$][a-z(){};=$ ]{0,16}"
}

#[derive(Debug, Clone)]
enum Chunk {
    Code(String),
    LineComment(String),
    /// A `/** ... */` block that always closes.
    Block(Vec<String>),
}

impl Chunk {
    fn lines(&self) -> Vec<String> {
        match self {
            Self::Code(line) => vec![line.clone()],
            Self::LineComment(text) => vec![format!("// {text}")],
            Self::Block(body) => {
                let mut lines = vec!["/**".to_string()];
                lines.extend(body.iter().map(|t| format!(" * {t}")));
                lines.push(" */".to_string());
                lines
            }
        }
    }
}

/// Code lines mixed with `//` comments and closed block comments.
fn mixed_chunks() -> impl Strategy<Value = Vec<Chunk>> {
    prop::collection::vec(
        prop_oneof![
            3 => code_line().prop_map(Chunk::Code),
            2 => "[a-z ]{0,12}".prop_map(Chunk::LineComment),
            1 => prop::collection::vec("[a-z ]{0,12}", 0..4).prop_map(Chunk::Block),
        ],
        0..40,
    )
}

fn source_of(chunks: &[Chunk]) -> String {
    chunks.iter().flat_map(Chunk::lines).collect::<Vec<_>>().join("\n")
}

proptest! {
    #[test]
    fn test_always_at_least_one_section(source in any::<String>()) {
        prop_assert!(!segment(&source).is_empty());
    }

    #[test]
    fn test_segmentation_is_deterministic(source in any::<String>()) {
        let seg = Segmenter::default();
        prop_assert_eq!(seg.segment(&source), seg.segment(&source));
    }

    #[test]
    fn test_code_lines_survive_in_order(chunks in mixed_chunks()) {
        let expected: Vec<&str> = chunks
            .iter()
            .filter_map(|c| match c {
                Chunk::Code(line) => Some(line.as_str()),
                _ => None,
            })
            .collect();

        let sections = segment(&source_of(&chunks));
        let actual: Vec<&str> = sections
            .iter()
            .filter(|s| !s.code.is_empty())
            .flat_map(|s| s.code.split('\n'))
            .collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_comment_runs_never_split(chunks in mixed_chunks()) {
        // Sections can only start at a block opener or at a line comment
        // that does not follow another line comment.
        let boundaries = chunks
            .iter()
            .enumerate()
            .filter(|(i, c)| match c {
                Chunk::Block(_) => true,
                Chunk::LineComment(_) => {
                    *i == 0 || !matches!(chunks[i - 1], Chunk::LineComment(_))
                }
                Chunk::Code(_) => false,
            })
            .count();
        prop_assert!(segment(&source_of(&chunks)).len() <= boundaries + 1);
    }

    #[test]
    fn test_closed_blocks_keep_every_body_line(chunks in mixed_chunks()) {
        let body_lines: usize = chunks
            .iter()
            .map(|c| match c {
                Chunk::Block(body) => body.len(),
                _ => 0,
            })
            .sum();
        let line_comments = chunks
            .iter()
            .filter(|c| matches!(c, Chunk::LineComment(_)))
            .count();
        let blocks = chunks.iter().filter(|c| matches!(c, Chunk::Block(_))).count();

        // Each block also contributes its opener remainder and its closer.
        let comment_lines: usize = segment(&source_of(&chunks))
            .iter()
            .map(|s| s.comment.split('\n').count())
            .sum();
        prop_assert!(comment_lines >= body_lines + line_comments + 2 * blocks);
    }

    #[test]
    fn test_code_without_markers_is_one_section(lines in prop::collection::vec(code_line(), 1..20)) {
        let source = lines.join("\n");
        let sections = segment(&source);
        prop_assert_eq!(sections.len(), 1);
        prop_assert!(sections[0].comment.is_empty());
        prop_assert_eq!(&sections[0].code, &source);
    }
}

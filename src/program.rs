//! Program loading: source text plus its pre-computed loop bounds.

use log::debug;

use crate::error::{BracketKind, Error};

/// A validated program, immutable once built.
///
/// Positions are byte indices into the source text. Any byte that is not one
/// of `><+-.,[]` is a comment and is carried through untouched.
#[derive(Debug, Clone)]
pub struct Program {
    text: String,
    // jump_map[i] holds the matching index for '[' or ']' at index i.
    // For non-bracket positions, it is None.
    jump_map: Vec<Option<usize>>,
}

impl Program {
    /// Validate `text` and pair up every `[` with its `]`.
    ///
    /// Scanning stops at the first `]` with no pending `[`, which is reported
    /// at its own index. If the text ends with brackets still open, the error
    /// points at the innermost one (the last `[` pushed).
    pub fn build(text: impl Into<String>) -> Result<Self, Error> {
        let text = text.into();
        let mut jump_map: Vec<Option<usize>> = vec![None; text.len()];
        let mut stack: Vec<usize> = Vec::new();

        for (i, &b) in text.as_bytes().iter().enumerate() {
            if b == b'[' {
                stack.push(i);
            } else if b == b']' {
                let Some(open_index) = stack.pop() else {
                    return Err(Error::UnmatchedBracket {
                        ip: i,
                        kind: BracketKind::Close,
                    });
                };
                jump_map[open_index] = Some(i);
                jump_map[i] = Some(open_index);
            }
        }

        if let Some(unmatched_open) = stack.last().copied() {
            return Err(Error::UnmatchedBracket {
                ip: unmatched_open,
                kind: BracketKind::Open,
            });
        }

        let program = Self { text, jump_map };
        debug!(
            "loaded program: {} bytes, {} loop(s)",
            program.len(),
            program.loop_bounds().count()
        );
        Ok(program)
    }

    /// Given either end of a loop, return the other end.
    ///
    /// Returns `None` for any index that is not a matched bracket, including
    /// indices past the end of the text.
    pub fn other_end(&self, index: usize) -> Option<usize> {
        self.jump_map.get(index).copied().flatten()
    }

    /// Matched `(open, close)` pairs in ascending order of `open`.
    pub fn loop_bounds(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.jump_map
            .iter()
            .enumerate()
            .filter_map(|(i, &j)| j.filter(|&close| i < close).map(|close| (i, close)))
    }

    /// A program with no loop bounds at all, skipping validation.
    #[cfg(test)]
    pub(crate) fn unchecked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            jump_map: vec![None; text.len()],
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn byte_at(&self, index: usize) -> Option<u8> {
        self.text.as_bytes().get(index).copied()
    }

    /// Source length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unmatched(text: &str) -> (usize, BracketKind) {
        match Program::build(text) {
            Err(Error::UnmatchedBracket { ip, kind }) => (ip, kind),
            other => panic!("expected unmatched bracket for {text:?}, got {other:?}"),
        }
    }

    #[test]
    fn nested_loops_pair_up() {
        let program = Program::build("+[>[-]<[.]]").unwrap();
        let pairs: Vec<_> = program.loop_bounds().collect();
        assert_eq!(pairs, vec![(1, 10), (3, 5), (7, 9)]);
    }

    #[test]
    fn pairs_partition_bracket_positions() {
        let text = "a[b[]c]d[[[]]]e[]";
        let program = Program::build(text).unwrap();

        let mut covered: Vec<usize> = program
            .loop_bounds()
            .inspect(|(open, close)| assert!(open < close))
            .flat_map(|(open, close)| [open, close])
            .collect();
        covered.sort_unstable();

        let brackets: Vec<usize> = text
            .bytes()
            .enumerate()
            .filter(|(_, b)| matches!(b, b'[' | b']'))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(covered, brackets);
    }

    #[test]
    fn other_end_is_symmetric() {
        let program = Program::build("[[]]").unwrap();
        assert_eq!(program.other_end(0), Some(3));
        assert_eq!(program.other_end(3), Some(0));
        assert_eq!(program.other_end(1), Some(2));
        assert_eq!(program.other_end(2), Some(1));
    }

    #[test]
    fn other_end_rejects_non_brackets() {
        let program = Program::build("+[-]").unwrap();
        assert_eq!(program.other_end(0), None);
        assert_eq!(program.other_end(2), None);
        assert_eq!(program.other_end(99), None);
    }

    #[test]
    fn stray_close_reported_at_its_index() {
        assert_eq!(unmatched("]"), (0, BracketKind::Close));
        assert_eq!(unmatched("+[-]]["), (4, BracketKind::Close));
    }

    #[test]
    fn stray_close_stops_scanning_before_later_opens() {
        // The trailing '[' is never reached.
        assert_eq!(unmatched("++]+["), (2, BracketKind::Close));
    }

    #[test]
    fn unmatched_open_reports_innermost() {
        assert_eq!(unmatched("[[]"), (0, BracketKind::Open));
        assert_eq!(unmatched("[["), (1, BracketKind::Open));
        assert_eq!(unmatched("[+[-]+[>"), (6, BracketKind::Open));
    }

    #[test]
    fn positions_are_byte_indices() {
        // 'é' is two bytes, so the bracket sits at byte 2.
        assert_eq!(unmatched("é]"), (2, BracketKind::Close));
        let program = Program::build("é[]").unwrap();
        assert_eq!(program.other_end(2), Some(3));
        assert_eq!(program.len(), 4);
    }

    #[test]
    fn comments_and_empty_text_load() {
        assert!(Program::build("").unwrap().is_empty());
        let program = Program::build("just some words").unwrap();
        assert_eq!(program.loop_bounds().count(), 0);
        assert_eq!(program.text(), "just some words");
    }
}

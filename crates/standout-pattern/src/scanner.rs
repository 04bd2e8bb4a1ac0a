//! Character-level scanner.
//!
//! The scanner walks a pattern once, left to right, and tags every content
//! character with the group it belongs to and whether it sits inside a
//! placeholder. Braces are structural: they switch state and bump the group
//! counter but are never emitted.
//!
//! ```text
//!            '{'                    '}'
//! Literal ---------> InPlaceholder ---------> Literal
//!    |  '}' -> UnmatchedClosingBrace   |  '{' -> NestedOpeningBrace
//!    |                                 |  EOF -> UnclosedOpeningBrace
//! ```

use crate::error::{PatternError, Result};

const OPEN: char = '{';
const CLOSE: char = '}';

/// A content character tagged with its symbol group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TaggedChar {
    /// Characters sharing a group belong to the same symbol.
    pub group: usize,
    pub value: char,
    pub is_placeholder: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Literal,
    InPlaceholder,
}

/// Scanner state, threaded by value through the fold in [`scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scanner {
    state: State,
    group: usize,
}

impl Scanner {
    fn new() -> Self {
        Self {
            state: State::Literal,
            group: 0,
        }
    }

    /// Consumes one character at `position`, returning the next state and
    /// the tagged character to emit, if any.
    fn step(self, position: usize, ch: char) -> Result<(Self, Option<TaggedChar>)> {
        match (ch, self.state) {
            (OPEN, State::InPlaceholder) => Err(PatternError::NestedOpeningBrace { position }),
            (OPEN, State::Literal) => Ok((self.transition(State::InPlaceholder), None)),
            (CLOSE, State::Literal) => Err(PatternError::UnmatchedClosingBrace { position }),
            (CLOSE, State::InPlaceholder) => Ok((self.transition(State::Literal), None)),
            (value, state) => {
                let tagged = TaggedChar {
                    group: self.group,
                    value,
                    is_placeholder: state == State::InPlaceholder,
                };
                Ok((self, Some(tagged)))
            }
        }
    }

    fn transition(self, state: State) -> Self {
        Self {
            state,
            group: self.group + 1,
        }
    }

    /// Accepts only when the input ended outside a placeholder.
    fn finish(self, length: usize) -> Result<()> {
        match self.state {
            State::Literal => Ok(()),
            State::InPlaceholder => Err(PatternError::UnclosedOpeningBrace { position: length }),
        }
    }
}

/// Tags every content character of `pattern`, validating brace structure.
///
/// Stops at the first syntax error. Positions are character indices.
pub(crate) fn scan(pattern: &str) -> Result<Vec<TaggedChar>> {
    let mut tagged = Vec::with_capacity(pattern.len());

    let (scanner, length) = pattern.chars().enumerate().try_fold(
        (Scanner::new(), 0),
        |(scanner, _), (position, ch)| {
            let (next, emitted) = scanner.step(position, ch)?;
            tagged.extend(emitted);
            Ok::<_, PatternError>((next, position + 1))
        },
    )?;

    scanner.finish(length)?;
    Ok(tagged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(group: usize, value: char) -> TaggedChar {
        TaggedChar {
            group,
            value,
            is_placeholder: false,
        }
    }

    fn sub(group: usize, value: char) -> TaggedChar {
        TaggedChar {
            group,
            value,
            is_placeholder: true,
        }
    }

    mod tagging {
        use super::*;

        #[test]
        fn empty_input() {
            assert!(scan("").unwrap().is_empty());
        }

        #[test]
        fn plain_text_is_one_literal_group() {
            assert_eq!(scan("ab").unwrap(), vec![lit(0, 'a'), lit(0, 'b')]);
        }

        #[test]
        fn placeholder_content_is_tagged() {
            assert_eq!(
                scan("a{bc}d").unwrap(),
                vec![lit(0, 'a'), sub(1, 'b'), sub(1, 'c'), lit(2, 'd')]
            );
        }

        #[test]
        fn leading_placeholder() {
            assert_eq!(scan("{x}").unwrap(), vec![sub(1, 'x')]);
        }

        #[test]
        fn adjacent_placeholders_get_distinct_groups() {
            assert_eq!(scan("{a}{b}").unwrap(), vec![sub(1, 'a'), sub(3, 'b')]);
        }

        #[test]
        fn empty_placeholder_emits_nothing() {
            assert_eq!(scan("a{}b").unwrap(), vec![lit(0, 'a'), lit(2, 'b')]);
        }

        #[test]
        fn whitespace_is_content() {
            assert_eq!(scan("{ }").unwrap(), vec![sub(1, ' ')]);
        }

        #[test]
        fn multibyte_characters() {
            assert_eq!(scan("é{ß}").unwrap(), vec![lit(0, 'é'), sub(1, 'ß')]);
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn nested_opening_brace() {
            assert_eq!(
                scan("{a{b}}"),
                Err(PatternError::NestedOpeningBrace { position: 2 })
            );
        }

        #[test]
        fn unmatched_closing_brace() {
            assert_eq!(
                scan("text }"),
                Err(PatternError::UnmatchedClosingBrace { position: 5 })
            );
        }

        #[test]
        fn unclosed_opening_brace_reports_length() {
            assert_eq!(
                scan("text {x"),
                Err(PatternError::UnclosedOpeningBrace { position: 7 })
            );
        }

        #[test]
        fn lone_opening_brace() {
            assert_eq!(
                scan("{"),
                Err(PatternError::UnclosedOpeningBrace { position: 1 })
            );
        }

        #[test]
        fn first_error_wins() {
            // The stray '}' comes before the unclosed '{'.
            assert_eq!(
                scan("}{"),
                Err(PatternError::UnmatchedClosingBrace { position: 0 })
            );
        }

        #[test]
        fn positions_count_characters_not_bytes() {
            assert_eq!(
                scan("héllo }"),
                Err(PatternError::UnmatchedClosingBrace { position: 6 })
            );
            assert_eq!(
                scan("ü{"),
                Err(PatternError::UnclosedOpeningBrace { position: 2 })
            );
        }
    }
}

//! Folds tagged characters into symbols.

use crate::scanner::TaggedChar;
use crate::symbol::Symbol;

/// Groups consecutive characters that share a group id into one [`Symbol`].
///
/// A character closes its symbol when it is the last one, or when the next
/// character belongs to a different group. Placeholder groups become
/// substitutions, everything else becomes a literal. Groups without any
/// characters (an empty `{}`) produce nothing.
pub(crate) fn build_symbols(tagged: &[TaggedChar]) -> Vec<Symbol> {
    let mut symbols = Vec::new();
    let mut text = String::new();

    for (index, current) in tagged.iter().enumerate() {
        text.push(current.value);

        let ends_symbol = match tagged.get(index + 1) {
            None => true,
            Some(next) => next.group != current.group,
        };

        if ends_symbol {
            let text = std::mem::take(&mut text);
            symbols.push(if current.is_placeholder {
                Symbol::Substitution(text)
            } else {
                Symbol::Literal(text)
            });
        }
    }

    symbols
}

// Boundary decision for a terminal punctuation run, evaluated on a lookahead window

use unicode_general_category::{get_general_category, GeneralCategory};

/// Characters that can close a sentence. Runs of any mix count as one candidate.
pub const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Check whether a rune belongs to the terminal punctuation set
#[inline]
pub fn is_terminal_punctuation(ch: char) -> bool {
    TERMINAL_PUNCTUATION.contains(&ch)
}

/// Decide whether a terminal punctuation run ends a sentence.
///
/// `lookahead` holds the runes immediately after the run. Only the first rune and,
/// when that rune is whitespace, the first non-whitespace rune after it are inspected,
/// so passing the whole remaining text is fine.
///
/// Returns true only for whitespace followed by an upper-case letter, meaning general
/// category `Lu`. Diacritic capitals such as `Š` qualify. Symbols that merely carry
/// the `Uppercase` property (`Ⓐ`, `Ⅻ`) and titlecase digraphs (`ǅ`) do not.
/// An empty window returns false: the end of the stream is handled by the caller's
/// final flush, not by this predicate.
///
/// ```
/// use aggtext::is_sentence_end;
///
/// assert!(is_sentence_end(&[' ', 'Š']));
/// assert!(!is_sentence_end(&['.', 'Š']));
/// assert!(!is_sentence_end(&[' ', 'a']));
/// ```
pub fn is_sentence_end(lookahead: &[char]) -> bool {
    let Some((&first, rest)) = lookahead.split_first() else {
        return false;
    };

    // Punctuation glued to the next rune: decimals, ellipses mid-word, "1.10.32"
    if !first.is_whitespace() {
        return false;
    }

    rest.iter()
        .find(|ch| !ch.is_whitespace())
        .is_some_and(|&ch| is_uppercase_letter(ch))
}

#[inline]
fn is_uppercase_letter(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::UppercaseLetter
}

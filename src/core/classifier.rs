// File: src/core/classifier.rs
//! Vowel/consonant decisions for a single letter in the context of its word.
//!
//! Every function here has the shape `(letter, prev, next) -> bool` so it can be
//! handed straight to [`sum_letters`](crate::core::summation::sum_letters).

use crate::core::tables::VOWELS_EXCEPT_Y;

fn is_plain_vowel(letter: char) -> bool {
    VOWELS_EXCEPT_Y.contains(&letter)
}

/// Whether `letter` counts as a vowel. `prev` and `next` are the neighbouring
/// characters inside the same word, `None` at the word boundaries.
///
/// Y is a vowel when it ends the word without a vowel before it, or when it
/// follows a non-vowel and is not followed by a vowel.
pub fn is_vowel(letter: char, prev: Option<char>, next: Option<char>) -> bool {
    if letter != 'Y' {
        return is_plain_vowel(letter);
    }

    let prev_is_vowel = prev.is_some_and(is_plain_vowel);
    let next_is_vowel = next.is_some_and(is_plain_vowel);

    // Last letter of the word with no vowel right before it.
    if next.is_none() && !prev_is_vowel {
        return true;
    }
    // After a consonant and not leading into a vowel.
    prev.is_some() && !prev_is_vowel && !next_is_vowel
}

/// Accepts every character; non-letters still contribute 0 downstream.
pub fn any_letter(_letter: char, _prev: Option<char>, _next: Option<char>) -> bool {
    true
}

/// Consonant filter used by the attitude number.
///
/// The vowel test runs without lookahead, as though every letter ended its
/// word, so a Y in front of a vowel counts as a vowel here. Passing `next`
/// through would change attitude results for names like "YEN".
pub fn is_attitude_consonant(letter: char, prev: Option<char>, _next: Option<char>) -> bool {
    !is_vowel(letter, prev, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_vowels_ignore_context() {
        for v in ['A', 'E', 'I', 'O', 'U', 'Ă', 'Ư'] {
            assert!(is_vowel(v, None, None));
            assert!(is_vowel(v, Some('B'), Some('C')));
        }
        assert!(!is_vowel('B', None, None));
        assert!(!is_vowel('-', Some('A'), None));
    }

    #[test]
    fn y_after_vowel_at_end_is_consonant() {
        // "AY"
        assert!(!is_vowel('Y', Some('A'), None));
    }

    #[test]
    fn y_after_consonant_at_end_is_vowel() {
        // "BY"
        assert!(is_vowel('Y', Some('B'), None));
    }

    #[test]
    fn lone_y_is_vowel() {
        assert!(is_vowel('Y', None, None));
    }

    #[test]
    fn leading_y_is_consonant() {
        // "YEN", "YB"
        assert!(!is_vowel('Y', None, Some('E')));
        assert!(!is_vowel('Y', None, Some('B')));
    }

    #[test]
    fn y_between_consonants_is_vowel() {
        // "LYNN"
        assert!(is_vowel('Y', Some('L'), Some('N')));
    }

    #[test]
    fn y_between_consonant_and_vowel_is_consonant() {
        // "UYEN" is vowel-led; "NYA" leads into a vowel.
        assert!(!is_vowel('Y', Some('U'), Some('E')));
        assert!(!is_vowel('Y', Some('N'), Some('A')));
    }

    #[test]
    fn attitude_filter_ignores_lookahead() {
        // Full context would call this Y a consonant.
        assert!(!is_vowel('Y', Some('N'), Some('A')));
        assert!(!is_attitude_consonant('Y', Some('N'), Some('A')));
        assert!(!is_attitude_consonant('Y', None, Some('E')));
        assert!(is_attitude_consonant('Y', Some('U'), Some('E')));
        assert!(is_attitude_consonant('N', Some('A'), Some('A')));
        assert!(!is_attitude_consonant('A', None, None));
    }
}

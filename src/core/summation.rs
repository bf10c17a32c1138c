// File: src/core/summation.rs
use crate::core::reducer::reduce_to_single_digit;
use crate::core::tables::letter_value;
use tracing::trace;

/// Uppercase form of `c` when it is a single char. Letters whose uppercase
/// spans several chars (e.g. 'ß') are kept as-is, so they stay outside the
/// table and never read as a vowel.
pub(crate) fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Sums the letter values of one word, keeping only the letters `accepts` lets through.
fn sum_word<F>(word: &str, accepts: &F) -> u32
where
    F: Fn(char, Option<char>, Option<char>) -> bool,
{
    let letters: Vec<char> = word.chars().map(to_upper).collect();
    letters
        .iter()
        .enumerate()
        .filter(|&(idx, &letter)| {
            let prev = idx.checked_sub(1).map(|i| letters[i]);
            let next = letters.get(idx + 1).copied();
            accepts(letter, prev, next)
        })
        .map(|(_, &letter)| letter_value(letter).unwrap_or(0))
        .sum()
}

/// Walks `name` word by word (split on single spaces), sums the accepted letters
/// of each word, reduces every word total to a single digit and adds them up.
///
/// The grand total is returned as-is; callers decide how to reduce it.
pub fn sum_letters<F>(name: &str, accepts: F) -> u32
where
    F: Fn(char, Option<char>, Option<char>) -> bool,
{
    name.split(' ')
        .map(|word| {
            let raw = sum_word(word, &accepts);
            let reduced = reduce_to_single_digit(raw);
            trace!(word, raw, reduced, "word sum");
            reduced
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::{any_letter, is_attitude_consonant, is_vowel};

    #[test]
    fn sums_all_letters_of_a_single_word() {
        assert_eq!(sum_letters("ABC", any_letter), 6);
    }

    #[test]
    fn reduces_each_word_before_adding() {
        // NGUYEN = 32 -> 5, VAN = 10 -> 1, AN = 6
        assert_eq!(sum_letters("NGUYEN VAN AN", any_letter), 12);
    }

    #[test]
    fn word_totals_keep_master_numbers() {
        // KIM = 2 + 9 + 4 = 15 -> 6
        assert_eq!(sum_letters("KIM", any_letter), 6);
        // RB = 9 + 2 = 11 stays 11
        assert_eq!(sum_letters("RB RB", any_letter), 22);
    }

    #[test]
    fn lowercase_input_is_uppercased() {
        assert_eq!(sum_letters("abc", any_letter), 6);
    }

    #[test]
    fn vowel_filter_uses_word_context() {
        // U + E = 8, Y after U is not a vowel
        assert_eq!(sum_letters("NGUYEN", is_vowel), 8);
        // Y after a consonant at the end of the word counts: A + Y = 1 + 7
        assert_eq!(sum_letters("MARY", is_vowel), 8);
    }

    #[test]
    fn attitude_filter_counts_consonants() {
        // N5 G7 Y7 N5 = 24 -> 6
        assert_eq!(sum_letters("NGUYEN", is_attitude_consonant), 6);
    }

    #[test]
    fn characters_outside_the_table_add_nothing() {
        assert_eq!(sum_letters("A-B", any_letter), 3);
        assert_eq!(sum_letters("", any_letter), 0);
        // Double space yields an empty word worth 0.
        assert_eq!(sum_letters("AB  C", any_letter), 6);
    }

    #[test]
    fn multi_char_uppercase_letters_add_nothing() {
        assert_eq!(sum_letters("ß", any_letter), 0);
        assert_eq!(sum_letters("aßc", any_letter), 4);
        // Y after 'ß' sits after a non-vowel at the end of the word.
        assert_eq!(sum_letters("ßy", is_vowel), 7);
    }
}

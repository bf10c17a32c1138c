// File: src/core/calculators.rs
//! The individual numbers of a reading. Name-based functions expect a name that
//! has already been uppercased and stripped of diacritics.

use crate::core::classifier::{any_letter, is_attitude_consonant, is_vowel};
use crate::core::reducer::{reduce_to_karmic_or_single_digit, reduce_to_single_digit};
use crate::core::summation::{sum_letters, to_upper};
use crate::core::tables::{karmic_digit, letter_value};
use crate::core::types::{DateOfBirth, Reduced};

const DOMINANT_LETTER_COUNT: usize = 3;

fn last_word(name: &str) -> &str {
    name.split(' ').next_back().unwrap_or("")
}

pub fn life_path(dob: DateOfBirth) -> Reduced {
    let sum = reduce_to_single_digit(dob.day)
        + reduce_to_single_digit(dob.month)
        + reduce_to_single_digit(dob.year);
    reduce_to_karmic_or_single_digit(sum)
}

pub fn expression(name: &str) -> Reduced {
    reduce_to_karmic_or_single_digit(sum_letters(name, any_letter))
}

pub fn soul_urge(name: &str) -> Reduced {
    reduce_to_karmic_or_single_digit(sum_letters(name, is_vowel))
}

pub fn attitude(name: &str) -> Reduced {
    reduce_to_karmic_or_single_digit(sum_letters(name, is_attitude_consonant))
}

/// All letters of the given name (the last word). The total is not reduced.
pub fn personality(name: &str) -> u32 {
    sum_letters(last_word(name), any_letter)
}

/// Vowels of the given name (the last word). The total is not reduced.
pub fn destiny(name: &str) -> u32 {
    sum_letters(last_word(name), is_vowel)
}

/// Initials of every word.
pub fn balance(name: &str) -> u32 {
    let total: u32 = name
        .split(' ')
        .filter_map(|word| word.chars().next())
        .map(to_upper)
        .filter_map(letter_value)
        .sum();
    reduce_to_single_digit(total)
}

/// Digits of the letters that occur at least three times anywhere in the name,
/// without repeats, in order of first appearance.
pub fn core_strength(name: &str) -> Vec<u32> {
    let mut counts: Vec<(char, usize)> = Vec::new();
    for letter in name.to_uppercase().chars() {
        if letter_value(letter).is_none() {
            continue;
        }
        match counts.iter_mut().find(|(c, _)| *c == letter) {
            Some((_, count)) => *count += 1,
            None => counts.push((letter, 1)),
        }
    }

    let mut digits = Vec::new();
    for (letter, count) in counts {
        if count < DOMINANT_LETTER_COUNT {
            continue;
        }
        if let Some(digit) = letter_value(letter) {
            if !digits.contains(&digit) {
                digits.push(digit);
            }
        }
    }
    digits
}

pub fn personal_year(dob: DateOfBirth, current_year: u32) -> u32 {
    let sum = reduce_to_single_digit(dob.day)
        + reduce_to_single_digit(dob.month)
        + reduce_to_single_digit(current_year);
    reduce_to_single_digit(sum)
}

/// Digits 1 to 9 that no letter of the name maps to, ascending.
pub fn lesson_debt(name: &str) -> Vec<u32> {
    let present: Vec<u32> = name.to_uppercase().chars().filter_map(letter_value).collect();
    (1..=9).filter(|d| !present.contains(d)).collect()
}

/// Karmic debt carried by a single reported number.
///
/// Only a bare 13, 14, 16 or 19 qualifies. The karmic-aware reducer never
/// produces one (it turns those into [`Reduced::Karmic`]), so this currently
/// never matches. Matching `Reduced::Karmic { source, .. }` as well would
/// report the debt the reducer already found.
pub fn karmic_debt_of(number: Reduced) -> Option<u32> {
    match number {
        Reduced::Digit(n) | Reduced::Master(n) if karmic_digit(n).is_some() => Some(n),
        _ => None,
    }
}

/// Karmic debts among life path, expression, soul urge and attitude.
pub fn karmic_debt(numbers: &[Reduced]) -> Vec<u32> {
    numbers.iter().copied().filter_map(karmic_debt_of).collect()
}

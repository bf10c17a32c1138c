// File: src/core/reducer.rs
use crate::core::tables::{is_master, karmic_digit};
use crate::core::types::Reduced;

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Collapses `n` to a single digit, stopping early on the master numbers 11 and 22.
pub fn reduce_to_single_digit(mut n: u32) -> u32 {
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    n
}

/// Like [`reduce_to_single_digit`], but also stops on a karmic number
/// (13, 14, 16, 19) and reports it together with the digit it stands for.
pub fn reduce_to_karmic_or_single_digit(mut n: u32) -> Reduced {
    while n > 9 {
        if karmic_digit(n).is_some() || is_master(n) {
            break;
        }
        n = digit_sum(n);
    }

    if let Some(digit) = karmic_digit(n) {
        Reduced::Karmic { digit, source: n }
    } else if is_master(n) {
        Reduced::Master(n)
    } else {
        Reduced::Digit(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digit_reduction() {
        assert_eq!(reduce_to_single_digit(0), 0);
        assert_eq!(reduce_to_single_digit(7), 7);
        assert_eq!(reduce_to_single_digit(1990), 1);
        assert_eq!(reduce_to_single_digit(2026), 1);
        assert_eq!(reduce_to_single_digit(999_999), 9);
    }

    #[test]
    fn master_numbers_are_kept() {
        assert_eq!(reduce_to_single_digit(29), 11);
        assert_eq!(reduce_to_single_digit(11), 11);
        assert_eq!(reduce_to_single_digit(1993), 22);
        // 13 is not special for the plain reducer.
        assert_eq!(reduce_to_single_digit(13), 4);
    }

    #[test]
    fn karmic_numbers_are_reported_with_their_digit() {
        assert_eq!(reduce_to_karmic_or_single_digit(13), Reduced::Karmic { digit: 4, source: 13 });
        assert_eq!(reduce_to_karmic_or_single_digit(49), Reduced::Karmic { digit: 4, source: 13 });
        assert_eq!(reduce_to_karmic_or_single_digit(199), Reduced::Karmic { digit: 1, source: 19 });
        assert_eq!(reduce_to_karmic_or_single_digit(16), Reduced::Karmic { digit: 7, source: 16 });
        assert_eq!(reduce_to_karmic_or_single_digit(14).to_string(), "5 (14)");
    }

    #[test]
    fn karmic_reducer_stops_on_master_numbers() {
        assert_eq!(reduce_to_karmic_or_single_digit(22), Reduced::Master(22));
        assert_eq!(reduce_to_karmic_or_single_digit(38), Reduced::Master(11));
    }

    #[test]
    fn karmic_reducer_passes_non_karmic_values_through() {
        assert_eq!(reduce_to_karmic_or_single_digit(23), Reduced::Digit(5));
        // 28 -> 10 -> 1 never lands on 19.
        assert_eq!(reduce_to_karmic_or_single_digit(28), Reduced::Digit(1));
        assert_eq!(reduce_to_karmic_or_single_digit(0), Reduced::Digit(0));
    }
}

// File: src/core/tables.rs
//! Static lookup data shared by every calculation.

/// Vietnamese accented letters grouped under the base letter they collapse to.
/// The groups are disjoint, so the order they are applied in does not matter.
pub const ACCENT_TABLE: [(char, &str); 7] = [
    ('A', "ÁÀẠẢÃÂẤẦẬẨẪĂẰẲẴẠ"),
    ('E', "ÉÈẸẺẼÊẾỀỆỂỄ"),
    ('I', "ÍÌỊỈĨ"),
    ('O', "ÓÒỌỎÕÔỐỒỘỔỖƠỚỜỢỞỠ"),
    ('U', "ÚÙỤỦŨƯỨỪỰỬỮ"),
    ('Y', "ÝỲỴỶỸ"),
    ('D', "Đ"),
];

/// Vowels other than Y. The Vietnamese vowel letters are listed too, even though
/// they never survive diacritic stripping.
pub const VOWELS_EXCEPT_Y: [char; 11] = ['A', 'E', 'I', 'O', 'U', 'Ă', 'Â', 'Ê', 'Ô', 'Ơ', 'Ư'];

pub const MASTER_NUMBERS: [u32; 2] = [11, 22];

/// Karmic numbers paired with the digit they reduce to.
pub const KARMIC_NUMBERS: [(u32, u32); 4] = [(13, 4), (14, 5), (16, 7), (19, 1)];

/// Pythagorean value of an uppercase letter, `None` for anything outside the table.
pub fn letter_value(letter: char) -> Option<u32> {
    match letter {
        'A' | 'J' | 'S' | 'Ă' | 'Â' => Some(1),
        'B' | 'K' | 'T' => Some(2),
        'C' | 'L' | 'U' | 'Ư' => Some(3),
        'D' | 'M' | 'V' => Some(4),
        'E' | 'N' | 'W' | 'Ê' => Some(5),
        'F' | 'O' | 'X' | 'Ô' | 'Ơ' => Some(6),
        'G' | 'P' | 'Y' => Some(7),
        'H' | 'Q' | 'Z' => Some(8),
        'I' | 'R' => Some(9),
        _ => None,
    }
}

pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Reduced digit for a karmic number.
pub fn karmic_digit(n: u32) -> Option<u32> {
    KARMIC_NUMBERS
        .iter()
        .find(|&&(karmic, _)| karmic == n)
        .map(|&(_, digit)| digit)
}

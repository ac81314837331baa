//! Static digit tables shared by the hexadecimal and Roman codecs.

use crate::domain::model::Magnitude;

pub const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Value of an uppercase hexadecimal digit.
pub fn hex_value(c: char) -> Option<u32> {
    HEX_DIGITS.iter().position(|d| *d == c).map(|v| v as u32)
}

/// Roman symbols paired with their values, smallest first.
pub const ROMAN_SYMBOLS: [(char, Magnitude); 7] = [
    ('I', 1),
    ('V', 5),
    ('X', 10),
    ('L', 50),
    ('C', 100),
    ('D', 500),
    ('M', 1000),
];

/// Greedy encode table, largest first, including the subtractive pairs.
pub const ROMAN_ENCODE_TABLE: [(Magnitude, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Value of an uppercase Roman symbol.
pub fn roman_value(c: char) -> Option<Magnitude> {
    ROMAN_SYMBOLS
        .iter()
        .find(|(symbol, _)| *symbol == c)
        .map(|(_, value)| *value)
}

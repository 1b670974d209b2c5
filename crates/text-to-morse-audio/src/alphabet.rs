//! International Morse code lookup table.
//!
//! Patterns are strings over `.` (dit), `-` (dah) and ` ` (word space).
//! Bytes without an entry map to the empty pattern and produce no audio.

/// One element of a Morse pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Short tone.
    Dit,
    /// Long tone.
    Dah,
    /// Word gap.
    WordSpace,
}

impl Symbol {
    /// Parses one pattern character.
    pub fn from_pattern_char(c: u8) -> Option<Self> {
        match c {
            b'.' => Some(Symbol::Dit),
            b'-' => Some(Symbol::Dah),
            b' ' => Some(Symbol::WordSpace),
            _ => None,
        }
    }

    /// The pattern character for this symbol.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Dit => '.',
            Symbol::Dah => '-',
            Symbol::WordSpace => ' ',
        }
    }
}

const fn entry(byte: u8) -> &'static str {
    match byte.to_ascii_uppercase() {
        b'A' => ".-",
        b'B' => "-...",
        b'C' => "-.-.",
        b'D' => "-..",
        b'E' => ".",
        b'F' => "..-.",
        b'G' => "--.",
        b'H' => "....",
        b'I' => "..",
        b'J' => ".---",
        b'K' => "-.-",
        b'L' => ".-..",
        b'M' => "--",
        b'N' => "-.",
        b'O' => "---",
        b'P' => ".--.",
        b'Q' => "--.-",
        b'R' => ".-.",
        b'S' => "...",
        b'T' => "-",
        b'U' => "..-",
        b'V' => "...-",
        b'W' => ".--",
        b'X' => "-..-",
        b'Y' => "-.--",
        b'Z' => "--..",
        b'0' => "-----",
        b'1' => ".----",
        b'2' => "..---",
        b'3' => "...--",
        b'4' => "....-",
        b'5' => ".....",
        b'6' => "-....",
        b'7' => "--...",
        b'8' => "---..",
        b'9' => "----.",
        b'.' => ".-.-.-",
        b',' => "--..--",
        b'?' => "..--..",
        b'\'' => ".----.",
        b'!' => "-.-.--",
        b'/' => "-..-.",
        b'(' => "-.--.",
        b')' => "-.--.-",
        b'&' => ".-...",
        b':' => "---...",
        b';' => "-.-.-.",
        b'=' => "-...-",
        b'+' => ".-.-.",
        b'-' => "-....-",
        b'_' => "..--.-",
        b'"' => ".-..-.",
        b'$' => "...-..-",
        b'@' => ".--.-.",
        b' ' => " ",
        _ => "",
    }
}

const fn build_table() -> [&'static str; 256] {
    let mut table = [""; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = entry(i as u8);
        i += 1;
    }
    table
}

/// Pattern for every byte value.
pub static MORSE_ALPHABET: [&str; 256] = build_table();

/// Looks up the pattern for `byte`; empty when unmapped.
pub fn pattern(byte: u8) -> &'static str {
    MORSE_ALPHABET[byte as usize]
}

/// Iterates the symbols of `byte`'s pattern.
pub fn symbols(byte: u8) -> impl Iterator<Item = Symbol> {
    pattern(byte).bytes().filter_map(Symbol::from_pattern_char)
}

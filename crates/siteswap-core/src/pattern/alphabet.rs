//! Symbol table for throw heights.
//!
//! Heights 0-9 are written as digits and 10-35 as the letters `a`-`z`.

/// Symbols in height order.
pub const SYMBOLS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest height the notation can express.
pub const MAX_HEIGHT: u8 = 35;

/// Map a symbol to its throw height.
///
/// Expects an already lower-cased character; uppercase letters return `None`.
pub fn height_of(ch: char) -> Option<u8> {
    match ch {
        '0'..='9' => Some(ch as u8 - b'0'),
        'a'..='z' => Some(ch as u8 - b'a' + 10),
        _ => None,
    }
}

/// Map a throw height back to its symbol.
pub fn symbol_of(height: u8) -> Option<char> {
    SYMBOLS.get(height as usize).map(|&b| b as char)
}

//! Hex rendering for frame logging and UID display, plus a lenient parser
//! for keys and fixtures typed by hand.

use std::fmt::Write;

/// Lowercase hex without separators: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Lowercase hex, one space between bytes: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a bit frame for logs. Only the bytes covered by `bit_len` are
/// printed; a trailing partial byte is suffixed with its bit count.
///
/// Example: `(&[0x26], 7)` -> `"26(7)"`
pub fn bits_to_hex(bits: &[u8], bit_len: usize) -> String {
    let full = bit_len / 8;
    let rest = bit_len % 8;
    let mut s = bytes_to_hex_spaced(&bits[..full.min(bits.len())]);
    if rest != 0 {
        if let Some(last) = bits.get(full) {
            if !s.is_empty() {
                s.push(' ');
            }
            let _ = write!(s, "{:02x}({})", last, rest);
        }
    }
    s
}

/// Parse hex into bytes. ASCII whitespace and `:` separators are ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<char> = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();

    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let pair: String = pair.iter().collect();
            u8::from_str_radix(&pair, 16).map_err(|e| format!("invalid hex pair '{}': {}", pair, e))
        })
        .collect()
}

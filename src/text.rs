/// Split `s` after `index` characters.
///
/// The index counts characters, not bytes, and is clamped to the length of
/// the string, so splitting never panics.
///
/// ```rust
/// use accrue::split_at;
///
/// assert_eq!(split_at("12345678", 0), ("", "12345678"));
/// assert_eq!(split_at("12345678", 3), ("123", "45678"));
/// assert_eq!(split_at("12345678", 10), ("12345678", ""));
/// ```
pub fn split_at(s: &str, index: usize) -> (&str, &str) {
    match s.char_indices().nth(index) {
        Some((byte, _)) => s.split_at(byte),
        None => (s, ""),
    }
}

/// Compares two names, ignoring case.
///
/// Both sides are lowercased with full Unicode case mapping,
/// with a fast path for ASCII.
///
/// ```
/// use sw_reflect::ops::eq_ignore_case;
///
/// assert!(eq_ignore_case("FooBar", "foobar"));
/// assert!(eq_ignore_case("ÄRGER", "ärger"));
/// assert!(!eq_ignore_case("foo", "fo"));
/// ```
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

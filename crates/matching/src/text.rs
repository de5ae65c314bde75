/// Byte offset of the first occurrence of `needle` in `haystack`, ignoring
/// ASCII case.
///
/// Query words only ever contain ASCII letters, digits and underscores, so a
/// match always starts on a char boundary of `haystack`.
pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

pub(crate) fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    find_ignore_ascii_case(haystack, needle).is_some()
}

use crate::split::trim_blank;

/// Characters that break filenames on at least one common filesystem.
const FORBIDDEN: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Turns a heading title into a filename slug.
///
/// Spaces become underscores, forbidden characters are dropped and the result
/// is cut to `max_len` characters. An all-forbidden title yields an empty slug.
pub fn make_safe_filename(title: &str, max_len: usize) -> String {
    trim_blank(title)
        .chars()
        .filter(|ch| !FORBIDDEN.contains(ch))
        .map(|ch| if ch == ' ' { '_' } else { ch })
        .take(max_len)
        .collect()
}

/// Anchor id of a heading: lowercased, whitespace and `_` become `_`, anything else that
/// is not an ASCII letter or digit is dropped.
pub fn anchor_id(title: &str) -> String {
    title
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() || c == '_' {
                Some('_')
            } else if c.is_ascii_alphanumeric() {
                Some(c.to_ascii_lowercase())
            } else {
                None
            }
        })
        .collect()
}

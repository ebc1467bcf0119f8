/// ASCII whitespace, as used to split `class` attribute values
pub const WHITESPACES: &[char] = &[' ', '\t', '\n', '\x0c', '\r'];

/// Elements that cannot have content
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Returns true when serialized content carries angle-bracket markup.
///
/// This is the heuristic that decides whether a replacement is written as
/// markup or as plain text.
pub fn has_markup(content: &str) -> bool {
    content.contains('<') && content.contains('>')
}

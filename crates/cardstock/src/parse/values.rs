//! Value-level text decoding helpers.

/// Unescapes a text value.
///
/// Recognized escapes: `\n` / `\N` (newline), `\,` (comma), `\;` (semicolon)
/// and `\\` (backslash). Unknown escapes keep their backslash untouched.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.peek() {
            Some('n' | 'N') => {
                chars.next();
                result.push('\n');
            }
            Some(escaped @ (',' | ';' | '\\')) => {
                result.push(*escaped);
                chars.next();
            }
            _ => result.push(c),
        }
    }

    result
}

/// Splits a raw value on unescaped semicolons.
///
/// Escape sequences are left intact in the returned slices; callers unescape
/// each component afterwards.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == ';' {
            parts.push(&s[start..i]);
            start = i + 1;
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Splits a component on unescaped commas, unescaping each item.
///
/// An empty input yields an empty list, so empty structured components stay
/// empty through a round trip.
#[must_use]
pub fn split_component(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    current.push('\n');
                }
                Some(escaped @ (',' | ';' | '\\')) => {
                    current.push(*escaped);
                    chars.next();
                }
                _ => current.push(c),
            }
        } else if c == ',' {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

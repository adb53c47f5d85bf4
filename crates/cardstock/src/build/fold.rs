//! Output line folding.
//!
//! Folding is a pure formatting concern layered on top of the serializer;
//! the codec core never folds, so round trips stay byte-stable.

/// Folds a logical line at the given column (octets, not characters).
///
/// Lines longer than `width` are split by inserting a newline plus a single
/// leading space, always at a UTF-8 character boundary. Widths below 2 are
/// clamped so the continuation prefix still leaves room for content.
#[must_use]
pub fn fold_line(line: &str, width: usize) -> String {
    let width = width.max(2);
    if line.len() <= width {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / width * 2);
    let mut current_len = 0;
    let mut first_segment = true;

    for c in line.chars() {
        let char_len = c.len_utf8();

        // Continuation lines carry a one-space prefix.
        let effective_max = if first_segment { width } else { width - 1 };

        // current_len is zero only before the first character; a break
        // never precedes it.
        if current_len > 0 && current_len + char_len > effective_max {
            result.push_str("\n ");
            current_len = 1;
            first_segment = false;
        }

        result.push(c);
        current_len += char_len;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_unchanged() {
        assert_eq!(fold_line("FN:Joe Strummer", 75), "FN:Joe Strummer");
    }

    #[test]
    fn folds_at_width() {
        let line = "X".repeat(80);
        let folded = fold_line(&line, 75);
        let first: &str = folded.split('\n').next().unwrap();
        assert_eq!(first.len(), 75);
        assert!(folded.contains("\n "));
    }

    #[test]
    fn folds_at_custom_width() {
        let line = "X".repeat(30);
        let folded = fold_line(&line, 10);
        assert_eq!(folded.split('\n').next().unwrap().len(), 10);
    }

    #[test]
    fn respects_utf8_boundaries() {
        let line = format!("NOTE:{}", "日".repeat(30));
        let folded = fold_line(&line, 75);
        for part in folded.split("\n ") {
            assert!(part.is_char_boundary(part.len()));
        }
    }

    #[test]
    fn oversized_first_char_stays_on_first_line() {
        let folded = fold_line("日本", 2);
        assert!(!folded.starts_with('\n'));
        assert_eq!(folded, "日\n 本");
    }

    #[test]
    fn folds_repeatedly() {
        let line = "X".repeat(200);
        assert!(fold_line(&line, 75).matches("\n ").count() >= 2);
    }
}

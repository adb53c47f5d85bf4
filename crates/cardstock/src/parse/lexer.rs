//! Line cursor, unfolding, and content-line splitting.

use std::iter::Peekable;
use std::str::Lines;

use crate::error::{EncodingError, EncodingResult};
use crate::model::Parameter;

/// Marker left by a quoted-printable value whose soft line break was never
/// terminated (legacy 2.1 convention).
const QP_MARKER: &str = "ENCODING=QUOTED-PRINTABLE:";

/// A shared cursor over the physical lines of one input.
///
/// Strict unfolding stops consuming at `END:VCARD`, so the same cursor can
/// feed several card parses in sequence. A cursor is single-consumer and not
/// restartable.
pub struct Cursor<'a> {
    lines: Peekable<Lines<'a>>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over the input text (CRLF or LF line endings).
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().peekable(),
        }
    }

    /// Returns whether all input has been consumed.
    pub fn is_exhausted(&mut self) -> bool {
        self.lines.peek().is_none()
    }

    fn next_line(&mut self) -> Option<&'a str> {
        self.lines.next()
    }

    /// Advances past everything up to the next `BEGIN:VCARD` line.
    ///
    /// Used to resynchronize a multi-card stream after a swallowed error.
    pub fn skip_to_next_begin(&mut self) {
        while let Some(line) = self.lines.peek() {
            if is_begin(line) {
                break;
            }
            self.lines.next();
        }
    }
}

fn is_begin(line: &str) -> bool {
    line.eq_ignore_ascii_case("BEGIN:VCARD")
}

fn is_end(line: &str) -> bool {
    line.eq_ignore_ascii_case("END:VCARD")
}

/// Unterminated quoted-printable: the marker plus a trailing `=`.
fn is_unterminated_qp(line: &str) -> bool {
    line.ends_with('=') && line.to_ascii_uppercase().contains(QP_MARKER)
}

/// Consumes physical lines from the cursor and produces logical lines.
///
/// Continuation lines (leading space or tab) are joined to the previous
/// logical line, blank lines are dropped, and content lines outside the
/// BEGIN/END bracket are discarded. An unterminated quoted-printable line
/// absorbs the following raw line as a soft line break.
///
/// In strict mode, consumption stops at `END:VCARD` so the remaining input
/// is left for the next card.
///
/// ## Errors
/// In strict mode only: [`EncodingError::UnexpectedBegin`] if a second
/// `BEGIN:VCARD` appears before the matching END, and
/// [`EncodingError::MissingEnd`] if input runs out after a BEGIN with no END.
pub fn unfold(cursor: &mut Cursor<'_>, strict: bool) -> EncodingResult<Vec<String>> {
    let mut unfolded: Vec<String> = Vec::new();
    let mut begins = 0_u32;
    let mut ends = 0_u32;

    while let Some(line) = cursor.next_line() {
        if let Some(rest) = line.strip_prefix([' ', '\t']) {
            if begins == 0 || ends > 0 {
                continue;
            }
            if let Some(last) = unfolded.last_mut() {
                last.push_str(rest);
            }
        } else if is_begin(line) {
            begins += 1;
            if strict && begins > 1 {
                return Err(EncodingError::UnexpectedBegin);
            }
        } else if is_end(line) {
            ends += 1;
            if strict {
                break;
            }
        } else if unfolded.last().is_some_and(|prior| is_unterminated_qp(prior)) {
            if ends > 0 {
                continue;
            }
            if let Some(last) = unfolded.last_mut() {
                last.pop();
                last.push_str(line);
            }
        } else if line.is_empty() {
            // Tolerated for human-readable formatting.
        } else {
            if begins == 0 || ends > 0 {
                tracing::trace!(line, "dropping content line outside BEGIN/END");
                continue;
            }
            unfolded.push(line.to_string());
        }
    }

    if strict && begins > 0 && ends == 0 {
        return Err(EncodingError::MissingEnd);
    }

    Ok(unfolded)
}

/// A split content line before value interpretation.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Property group (e.g. "item1" in `item1.TEL`).
    pub group: Option<String>,
    /// Property name (lowercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw (still escaped) value string.
    pub value: String,
}

/// Splits one logical line into group, name, parameters, and raw value.
///
/// Format: `[group.]name[;param[=value]]*:value`. Returns `None` for lines
/// with no unquoted colon or an invalid property name; such lines are
/// silently dropped by the caller per the best-effort tolerance policy.
#[must_use]
pub fn parse_content_line(line: &str) -> Option<ContentLine> {
    let colon_pos = find_value_separator(line)?;
    let (prefix, value) = line.split_at(colon_pos);
    let value = &value[1..];

    let (group, prefix) = parse_group(prefix);

    let (name, params_str) = match prefix.find(';') {
        Some(semi_pos) => (&prefix[..semi_pos], Some(&prefix[semi_pos + 1..])),
        None => (prefix, None),
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }

    let params = params_str.map(parse_parameters).unwrap_or_default();

    Some(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_lowercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon separating the prefix from the value, skipping quoted
/// parameter values that may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Splits an optional dot-prefixed group label off the prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    if let Some(dot_pos) = s.find('.') {
        let candidate = &s[..dot_pos];
        if !candidate.is_empty()
            && candidate.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return (Some(candidate), &s[dot_pos + 1..]);
        }
    }
    (None, s)
}

/// Parses the semicolon-separated parameter list.
fn parse_parameters(s: &str) -> Vec<Parameter> {
    let mut params = Vec::new();
    let mut remaining = s;

    while !remaining.is_empty() {
        let (param, rest) = parse_single_parameter(remaining);
        if let Some(param) = param {
            params.push(param);
        }
        remaining = rest;
    }

    params
}

/// Parses one `name=value` pair or bare flag, returning the remainder.
fn parse_single_parameter(s: &str) -> (Option<Parameter>, &str) {
    // Bare flag: no '=' before the next ';' (legacy 2.1, e.g. ";HOME").
    let eq_pos = match (s.find('='), s.find(';')) {
        (Some(eq), Some(semi)) if semi < eq => {
            let name = &s[..semi];
            let param = (!name.is_empty()).then(|| Parameter::flag(name));
            return (param, &s[semi + 1..]);
        }
        (Some(eq), _) => eq,
        (None, Some(semi)) => {
            let name = &s[..semi];
            let param = (!name.is_empty()).then(|| Parameter::flag(name));
            return (param, &s[semi + 1..]);
        }
        (None, None) => {
            let param = (!s.is_empty()).then(|| Parameter::flag(s));
            return (param, "");
        }
    };

    let name = &s[..eq_pos];
    let (values, remaining) = parse_param_values(&s[eq_pos + 1..]);
    (Some(Parameter::multi(name, values)), remaining)
}

/// Parses comma-separated, possibly quoted parameter values, decoding RFC
/// 6868 caret escapes.
fn parse_param_values(s: &str) -> (Vec<String>, &str) {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = s.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current)),
            ';' if !in_quotes => {
                values.push(current);
                return (values, &s[i + 1..]);
            }
            '^' => match chars.peek() {
                Some(&(_, 'n')) => {
                    chars.next();
                    current.push('\n');
                }
                Some(&(_, '\'')) => {
                    chars.next();
                    current.push('"');
                }
                Some(&(_, '^')) => {
                    chars.next();
                    current.push('^');
                }
                _ => current.push('^'),
            },
            _ => current.push(c),
        }
    }

    values.push(current);
    (values, "")
}

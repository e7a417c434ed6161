//! Query string module
//!
//! Extracts the `offset` parameter and coerces it to an integer the lenient
//! way: anything that is not a number becomes [`DEFAULT_OFFSET`].

/// Query parameter carrying the requested offset
pub const OFFSET_PARAM: &str = "offset";

/// Offset used when the parameter is missing, empty, or non-numeric
pub const DEFAULT_OFFSET: i64 = 0;

/// Parse the `offset` parameter from a raw query string (without leading `?`).
///
/// When the key repeats, the last occurrence wins.
///
/// # Examples
/// ```ignore
/// assert_eq!(parse_offset(Some("offset=42")), 42);
/// assert_eq!(parse_offset(Some("offset=abc")), 0);
/// assert_eq!(parse_offset(None), 0);
/// ```
pub fn parse_offset(query: Option<&str>) -> i64 {
    query
        .and_then(|q| find_param(q, OFFSET_PARAM))
        .map_or(DEFAULT_OFFSET, |value| coerce_int(&value))
}

/// Decoded value of the last `name=value` pair whose key equals `name`
pub fn find_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .rev()
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (form_decode(key) == name).then(|| form_decode(value))
        })
}

/// Lenient string-to-integer conversion.
///
/// Skips leading ASCII whitespace, accepts one optional sign, then consumes the
/// longest run of digits (single underscores between digits allowed).
/// Trailing input is ignored. No digits yields [`DEFAULT_OFFSET`].
/// Out-of-range values saturate at the `i64` bounds.
pub fn coerce_int(input: &str) -> i64 {
    let mut chars = input
        .trim_start_matches(|c: char| c.is_ascii_whitespace())
        .chars()
        .peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;

    while let Some(&c) = chars.peek() {
        if let Some(digit) = c.to_digit(10) {
            chars.next();
            seen_digit = true;
            let digit = i64::from(digit);
            value = value.saturating_mul(10);
            value = if negative {
                value.saturating_sub(digit)
            } else {
                value.saturating_add(digit)
            };
        } else if c == '_' && seen_digit {
            chars.next();
            match chars.peek() {
                Some(next) if next.is_ascii_digit() => {}
                _ => break,
            }
        } else {
            break;
        }
    }

    if seen_digit {
        value
    } else {
        DEFAULT_OFFSET
    }
}

/// Decode `application/x-www-form-urlencoded` text.
///
/// `+` becomes a space; malformed escapes are kept as-is; invalid UTF-8 is
/// replaced.
fn form_decode(input: &str) -> String {
    let spaced = input.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

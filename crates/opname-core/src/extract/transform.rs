//! Operator token -> runtime operator name.
//!
//! `i32x4.trunc_sat_f32x4` becomes `I32x4TruncSatF32x4`: split on `.` and `_`,
//! upper-case the first char of every segment, concatenate.

fn is_separator(c: char) -> bool {
    c == '.' || c == '_'
}

/// Derives the runtime name for an operator token.
///
/// Only the first char of each segment changes; the rest keep their casing.
/// Adjacent, leading or trailing separators yield empty segments, which
/// contribute nothing.
pub fn runtime_name(token: &str) -> String {
    let mut name = String::with_capacity(token.len());
    for segment in token.split(is_separator) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

//! Session name derivation

/// Separator used to find the final path segment
pub const PATH_SEPARATOR: char = '/';

/// Derive a multiplexer session name from a selected path.
///
/// Ignores trailing `/` (as left by shell completion), takes everything
/// after the last `/` (or the whole string if there is none) and replaces
/// every `.` with `_`, since multiplexers tend to reject dots in session names.
pub fn derive_session_name(selection: &str) -> String {
    let trimmed = selection.trim_end_matches(PATH_SEPARATOR);
    let name = match trimmed.rfind(PATH_SEPARATOR) {
        Some(idx) => &trimmed[idx + PATH_SEPARATOR.len_utf8()..],
        None => trimmed,
    };
    name.replace('.', "_")
}

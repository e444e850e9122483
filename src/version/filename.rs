//! Version inference from archive file names

/// Extension identifying a versioned archive
pub const ARCHIVE_EXTENSION: &str = ".jar";

/// Derive a version token from an archive path.
///
/// The extension and directories are dropped, then everything up to the first
/// hyphen, then further hyphen-delimited segments until the remainder starts
/// with a digit or no hyphen is left.
///
/// Only a lowercase `.jar` suffix carries a version token. The filesystem
/// catalog also searches `.zip` and upper-case extensions for resources, but
/// those artifacts resolve through their manifest or the default.
///
/// Examples:
/// - "lib/bar-lib-core-1.2.3.jar" -> "1.2.3"
/// - "lib/bar-lib.jar" -> "lib"
/// - "lib/bar.jar" -> "bar"
/// - "lib/classes" -> None (not an archive)
/// - "lib/---.jar" -> None (nothing left)
pub fn version_from_archive_name(path: &str) -> Option<String> {
    let stem = path.strip_suffix(ARCHIVE_EXTENSION)?;
    let name = stem.rsplit(['/', '\\']).next().unwrap_or(stem);

    let mut token = name.split_once('-').map_or(name, |(_, rest)| rest);
    // Each step strictly shortens `token`, so this terminates
    while !token.starts_with(|c: char| c.is_ascii_digit()) {
        match token.split_once('-') {
            Some((_, rest)) => token = rest,
            None => break,
        }
    }

    if token.is_empty() || token.chars().all(|c| c == '-') {
        return None;
    }
    Some(token.to_string())
}

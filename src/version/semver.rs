use semver::Version;

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros.
/// A leading 'v' is accepted and ignored.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "v1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.strip_prefix('v').unwrap_or(version);
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some((1, 0, 0)))]
    #[case("1.2", Some((1, 2, 0)))]
    #[case("1.2.3", Some((1, 2, 3)))]
    #[case("v2.0.0", Some((2, 0, 0)))]
    #[case("lib", None)]
    #[case("4.1.9.Final", None)]
    fn parse_version_returns_expected(#[case] input: &str, #[case] expected: Option<(u64, u64, u64)>) {
        let parsed = parse_version(input).map(|v| (v.major, v.minor, v.patch));
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_version_keeps_prerelease() {
        let parsed = parse_version("1.0.0-SNAPSHOT").unwrap();
        assert_eq!(parsed.pre.as_str(), "SNAPSHOT");
    }
}

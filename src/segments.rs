//! Dot-segment resolution and segment comparison for URL paths.

/// Resolves `.` and `..` in a `/`-delimited path into a clean segment list.
///
/// - Empty segments from doubled slashes are dropped
/// - `.` is dropped
/// - `..` removes the preceding segment; with nothing left to remove it is
///   absorbed, so the result never climbs past the start
pub(crate) fn resolve_dot_segments(path: &str) -> Vec<String> {
    let mut resolved: Vec<String> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(segment.to_string()),
        }
    }

    resolved
}

/// Length of the longest common segment prefix, compared segment-by-segment
/// and case-sensitively.
pub(crate) fn common_prefix_len(a: &[String], b: &[String]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

//! Shortest relative reference from a base URL to a target URL.

use crate::error::InvalidArgumentError;
use crate::segments::{common_prefix_len, resolve_dot_segments};
use crate::split::{has_authority, split_authority, split_query};

/// Computes the relative reference that leads from `base_url` to `url`.
///
/// `base_url` must be absolute (`scheme://…`). The target may be:
/// - absolute, with the same authority as the base (compared ASCII
///   case-insensitively),
/// - root-relative (leading `/`), adopting the base's authority, or
/// - already relative, in which case its dot-segment-resolved form is
///   returned and the base path plays no part.
///
/// The base path is treated as a directory: every base segment outside the
/// shared prefix becomes one `../` climb. The target's query string is
/// re-appended verbatim.
///
/// # Examples
///
/// - `make_relative("http://example.com/a/b/style.css", "http://example.com/a/b")` → `"style.css"`
/// - `make_relative("/a/css/style.css", "http://example.com/a/b")` → `"../css/style.css"`
/// - `make_relative("http://example.com/a", "http://example.com/a")` → `""`
///
/// # Errors
///
/// [`InvalidArgumentError`] when `base_url` carries no authority or when
/// the two authorities differ.
pub fn make_relative(url: &str, base_url: &str) -> Result<String, InvalidArgumentError> {
    if !has_authority(base_url) {
        return Err(InvalidArgumentError::BaseUrlNotAbsolute {
            base_url: base_url.to_string(),
        });
    }

    let (base_host, base_path) = split_authority(base_url);

    let (host, path) = if has_authority(url) {
        split_authority(url)
    } else {
        (String::new(), url.to_string())
    };

    if !host.is_empty() && !host.eq_ignore_ascii_case(&base_host) {
        return Err(InvalidArgumentError::HostMismatch {
            url_host: host,
            base_host,
        });
    }

    let (path, query) = split_query(&path);
    let target = resolve_dot_segments(path);

    // A target with neither an authority nor a leading slash is already
    // relative; its resolved form stands on its own.
    let mut relative = if host.is_empty() && !path.starts_with('/') {
        target.join("/")
    } else {
        let (base_path, _) = split_query(&base_path);
        let base = resolve_dot_segments(base_path);
        let shared = common_prefix_len(&target, &base);

        let mut rendered = "../".repeat(base.len() - shared);
        rendered.push_str(&target[shared..].join("/"));
        rendered.trim_end_matches('/').to_string()
    };

    if let Some(query) = query {
        relative.push_str(query);
    }

    tracing::trace!("\"{}\" relative to \"{}\" is \"{}\"", url, base_url, relative);

    Ok(relative)
}

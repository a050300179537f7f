//! Error type for relative URL computation.

use thiserror::Error;

/// Invalid input reported by [`make_relative`](crate::make_relative) before
/// any transformation starts.
///
/// Both variants are contract violations on the caller's side, not
/// transient conditions; retrying with the same arguments fails the same
/// way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgumentError {
    /// The base URL carries no `scheme://` authority, so there is no host
    /// context to relativize against.
    #[error("\"{base_url}\" is not an absolute Url.")]
    BaseUrlNotAbsolute { base_url: String },

    /// The target URL and the base URL live on different hosts. Each side
    /// is reported as its `scheme://host` part only, never the path.
    #[error("The URL \"{url_host}\" cannot be made relative to \"{base_host}\" since their host names are different.")]
    HostMismatch { url_host: String, base_host: String },
}

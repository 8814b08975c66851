//! Structured tracing for connection string decoding and encoding.
//!
//! Every function is compiled behind the `tracing` feature flag and becomes an
//! inline no-op when it is disabled. Credentials are never recorded; SMB
//! remotes only report their host.

use crate::error::RemoteField;

/// Target name for tracing events emitted by the codec.
#[cfg(feature = "tracing")]
const REMOTE_TARGET: &str = "remote::url";

// ============================================================================
// Tracing functions (feature-gated)
// ============================================================================

/// Traces a successfully decoded connection string.
///
/// # Arguments
///
/// * `scheme` - The recognised scheme (`file`, `nfs`, `smb`)
/// * `host` - Server host for network remotes
/// * `invalid_url` - Whether the lenient NFS fallback was used
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_decoded(scheme: &str, host: Option<&str>, invalid_url: bool) {
    tracing::debug!(
        target: REMOTE_TARGET,
        scheme = %scheme,
        host = host.unwrap_or_default(),
        invalid_url = invalid_url,
        "remote_decoded"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_decoded(_scheme: &str, _host: Option<&str>, _invalid_url: bool) {}

/// Traces an NFS string that failed the `host[:port]:path` grammar.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_nfs_fallback(rest: &str) {
    tracing::warn!(
        target: REMOTE_TARGET,
        address = %rest,
        "nfs address does not match host[:port]:path, using lenient split"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_nfs_fallback(_rest: &str) {}

/// Traces a connection string with an unsupported scheme.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_unknown_scheme(scheme: &str) {
    tracing::debug!(target: REMOTE_TARGET, scheme = %scheme, "remote_unknown_scheme");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_unknown_scheme(_scheme: &str) {}

/// Traces a placeholder emitted for an absent descriptor field.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_placeholder(scheme: &str, field: RemoteField) {
    tracing::warn!(
        target: REMOTE_TARGET,
        scheme = %scheme,
        field = %field,
        "missing remote field encoded as placeholder"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_placeholder(_scheme: &str, _field: RemoteField) {}

/// Traces an encoded connection string.
///
/// Only the scheme and output length are recorded since the string may embed
/// SMB credentials.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_encoded(scheme: &str, length: usize) {
    tracing::trace!(target: REMOTE_TARGET, scheme = %scheme, length = length, "remote_encoded");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_encoded(_scheme: &str, _length: usize) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_functions_do_not_panic() {
        trace_decoded("nfs", Some("filer"), false);
        trace_decoded("file", None, false);
        trace_nfs_fallback("my:host:/export");
        trace_unknown_scheme("s3");
        trace_placeholder("smb", RemoteField::Password);
        trace_encoded("smb", 42);
    }
}

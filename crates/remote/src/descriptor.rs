//! Structured form of a remote connection string.

use std::fmt;
use std::str::FromStr;

use crate::decode::parse_remote_url;
use crate::encode::format_remote;
use crate::error::RemoteUrlError;

/// Storage protocols understood by the codec.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RemoteScheme {
    /// Local filesystem path on the backup host.
    File,
    /// NFS export.
    Nfs,
    /// SMB/CIFS share.
    Smb,
}

impl RemoteScheme {
    /// Returns the scheme name as written before `://`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Nfs => "nfs",
            Self::Smb => "smb",
        }
    }

    /// Resolves a scheme name found in a connection string.
    ///
    /// Matching is exact; `local` is not accepted here because persisted
    /// strings always carry `file`.
    #[must_use]
    pub fn from_scheme(name: &str) -> Option<Self> {
        match name {
            "file" => Some(Self::File),
            "nfs" => Some(Self::Nfs),
            "smb" => Some(Self::Smb),
            _ => None,
        }
    }

    /// Resolves a descriptor `type` name, accepting `local` as a legacy
    /// synonym of `file`.
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "local" => Some(Self::File),
            other => Self::from_scheme(other),
        }
    }
}

impl fmt::Display for RemoteScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A local filesystem remote.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileRemote {
    path: String,
}

impl FileRemote {
    /// Creates a file remote rooted at `path`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path on the backup host.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns a copy pointing at a different path.
    #[must_use]
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self::new(path)
    }
}

/// An NFS export.
///
/// `invalid_url` records that the connection string did not follow the
/// `host[:port]:path` grammar and was split leniently. Such remotes usually
/// need to be re-entered by the user.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NfsRemote {
    host: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    port: Option<String>,
    path: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_false"))]
    invalid_url: bool,
}

#[cfg(feature = "serde")]
#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

impl NfsRemote {
    /// Creates an NFS remote without an explicit port.
    #[must_use]
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
            path: path.into(),
            invalid_url: false,
        }
    }

    /// Returns a copy with the given port.
    ///
    /// The port is kept verbatim; the codec never interprets it numerically.
    #[must_use]
    pub fn with_port(&self, port: impl Into<String>) -> Self {
        Self {
            port: Some(port.into()),
            ..self.clone()
        }
    }

    /// Returns a copy without an explicit port.
    #[must_use]
    pub fn without_port(&self) -> Self {
        Self {
            port: None,
            ..self.clone()
        }
    }

    /// Returns a copy with a different host.
    #[must_use]
    pub fn with_host(&self, host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with a different export path.
    #[must_use]
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..self.clone()
        }
    }

    pub(crate) fn lenient(host: String, path: String) -> Self {
        Self {
            host,
            port: None,
            path,
            invalid_url: true,
        }
    }

    /// Returns the server host name or address.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port exactly as it appeared in the connection string.
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Returns the exported path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reports whether the lenient fallback produced this value.
    #[must_use]
    pub const fn invalid_url(&self) -> bool {
        self.invalid_url
    }
}

/// An SMB/CIFS share.
///
/// Decoded paths are kept exactly as carried after the NUL separator, which
/// means they use `\` between segments when written by [`format_remote`].
/// [`SmbRemote::segments`] yields the individual components regardless of
/// the separator in use.
#[derive(Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmbRemote {
    host: String,
    path: String,
    domain: String,
    username: String,
    password: String,
}

impl SmbRemote {
    /// Creates an SMB share remote.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        path: impl Into<String>,
        domain: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
            domain: domain.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the server host name.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the share path as stored.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the authentication domain (may be empty).
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the user name (may be empty).
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password (may be empty).
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Iterates over the path components, splitting on both `\` and `/`.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path
            .split(['\\', '/'])
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
    }

    /// Returns a copy with a different host.
    #[must_use]
    pub fn with_host(&self, host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with a different share path.
    #[must_use]
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with a different domain.
    #[must_use]
    pub fn with_domain(&self, domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with different credentials.
    #[must_use]
    pub fn with_credentials(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..self.clone()
        }
    }
}

impl fmt::Debug for SmbRemote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmbRemote")
            .field("host", &self.host)
            .field("path", &self.path)
            .field("domain", &self.domain)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A connection string whose scheme is not recognised.
///
/// The text after `://` is kept so the value can be written back unchanged.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnknownRemote {
    scheme: String,
    rest: String,
}

impl UnknownRemote {
    pub(crate) fn new(scheme: impl Into<String>, rest: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            rest: rest.into(),
        }
    }

    /// Returns the unrecognised scheme text.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns everything after `://`.
    #[must_use]
    pub fn rest(&self) -> &str {
        &self.rest
    }
}

/// Decoded backup remote.
///
/// Values are produced by [`parse_remote_url`] or assembled by callers and
/// turned back into a connection string with [`format_remote`] (also
/// available through [`fmt::Display`]).
///
/// # Examples
///
/// ```
/// use remote::{RemoteDescriptor, parse_remote_url};
///
/// let remote = parse_remote_url("nfs://filer:2049:/export/vm");
/// let RemoteDescriptor::Nfs(nfs) = &remote else { panic!("nfs remote") };
/// assert_eq!(nfs.host(), "filer");
/// assert_eq!(nfs.port(), Some("2049"));
/// assert_eq!(remote.to_string(), "nfs://filer:2049:/export/vm");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum RemoteDescriptor {
    /// Local filesystem.
    File(FileRemote),
    /// NFS export.
    Nfs(NfsRemote),
    /// SMB/CIFS share.
    Smb(SmbRemote),
    /// Unrecognised scheme; no operation can be performed on it.
    Unknown(UnknownRemote),
}

impl RemoteDescriptor {
    /// Returns the scheme, or `None` for [`RemoteDescriptor::Unknown`].
    #[must_use]
    pub const fn scheme(&self) -> Option<RemoteScheme> {
        match self {
            Self::File(_) => Some(RemoteScheme::File),
            Self::Nfs(_) => Some(RemoteScheme::Nfs),
            Self::Smb(_) => Some(RemoteScheme::Smb),
            Self::Unknown(_) => None,
        }
    }

    /// Returns the path on the remote, if the scheme carries one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::File(file) => Some(file.path()),
            Self::Nfs(nfs) => Some(nfs.path()),
            Self::Smb(smb) => Some(smb.path()),
            Self::Unknown(_) => None,
        }
    }

    /// Returns the server host for network remotes.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        match self {
            Self::Nfs(nfs) => Some(nfs.host()),
            Self::Smb(smb) => Some(smb.host()),
            Self::File(_) | Self::Unknown(_) => None,
        }
    }

    /// Returns `true` when the scheme was not recognised.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Returns `true` when the value came from a non-conforming NFS string.
    #[must_use]
    pub const fn is_invalid_url(&self) -> bool {
        matches!(self, Self::Nfs(nfs) if nfs.invalid_url)
    }
}

impl From<FileRemote> for RemoteDescriptor {
    fn from(remote: FileRemote) -> Self {
        Self::File(remote)
    }
}

impl From<NfsRemote> for RemoteDescriptor {
    fn from(remote: NfsRemote) -> Self {
        Self::Nfs(remote)
    }
}

impl From<SmbRemote> for RemoteDescriptor {
    fn from(remote: SmbRemote) -> Self {
        Self::Smb(remote)
    }
}

impl fmt::Display for RemoteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_remote(self))
    }
}

/// Strict parsing: unrecognised schemes become an error instead of
/// [`RemoteDescriptor::Unknown`].
impl FromStr for RemoteDescriptor {
    type Err = RemoteUrlError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match parse_remote_url(text) {
            Self::Unknown(unknown) => Err(RemoteUrlError::UnrecognizedScheme {
                scheme: unknown.scheme,
            }),
            descriptor => Ok(descriptor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_names_round_trip() {
        for scheme in [RemoteScheme::File, RemoteScheme::Nfs, RemoteScheme::Smb] {
            assert_eq!(RemoteScheme::from_scheme(scheme.as_str()), Some(scheme));
        }
    }

    #[test]
    fn local_is_only_a_type_alias() {
        assert_eq!(RemoteScheme::from_scheme("local"), None);
        assert_eq!(RemoteScheme::from_type_name("local"), Some(RemoteScheme::File));
    }

    #[test]
    fn builders_leave_original_untouched() {
        let original = NfsRemote::new("filer", "/export");
        let edited = original.with_port("2049").with_host("filer2");

        assert_eq!(original.port(), None);
        assert_eq!(original.host(), "filer");
        assert_eq!(edited.port(), Some("2049"));
        assert_eq!(edited.host(), "filer2");
        assert_eq!(edited.without_port().port(), None);
    }

    #[test]
    fn smb_debug_redacts_password() {
        let smb = SmbRemote::new("srv", "", "WORKGROUP", "backup", "hunter2");
        let rendered = format!("{smb:?}");

        assert!(rendered.contains("backup"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn smb_segments_accept_either_separator() {
        let smb = SmbRemote::new("srv", "share\\vm/daily", "", "", "");
        let parts: Vec<&str> = smb.segments().collect();
        assert_eq!(parts, ["share", "vm", "daily"]);
    }

    #[test]
    fn accessors_cover_every_variant() {
        let file = RemoteDescriptor::from(FileRemote::new("/srv"));
        assert_eq!(file.scheme(), Some(RemoteScheme::File));
        assert_eq!(file.path(), Some("/srv"));
        assert_eq!(file.host(), None);

        let unknown = RemoteDescriptor::Unknown(UnknownRemote::new("s3", "bucket"));
        assert!(unknown.is_unknown());
        assert_eq!(unknown.scheme(), None);
        assert_eq!(unknown.path(), None);
    }

    #[test]
    fn from_str_rejects_unknown_scheme() {
        let error = "s3://bucket".parse::<RemoteDescriptor>().unwrap_err();
        assert_eq!(
            error,
            RemoteUrlError::UnrecognizedScheme {
                scheme: "s3".to_owned()
            }
        );

        let parsed: RemoteDescriptor = "file:///srv".parse().expect("file remote");
        assert_eq!(parsed, RemoteDescriptor::File(FileRemote::new("/srv")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_type_tag_and_camel_case() {
        let nfs = RemoteDescriptor::Nfs(NfsRemote::lenient("my".into(), "/host:/export".into()));
        let json = serde_json::to_value(&nfs).expect("serialize");

        assert_eq!(json["type"], "nfs");
        assert_eq!(json["host"], "my");
        assert_eq!(json["invalidUrl"], true);
        assert!(json.get("port").is_none());

        let back: RemoteDescriptor = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, nfs);
    }
}

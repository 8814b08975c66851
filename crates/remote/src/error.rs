use std::fmt;

use thiserror::Error;

/// Error returned by [`RemoteDescriptor::from_str`](crate::RemoteDescriptor).
///
/// [`parse_remote_url`](crate::parse_remote_url) itself never fails; only the
/// strict [`FromStr`](std::str::FromStr) entry point reports problems.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RemoteUrlError {
    /// The text before `://` named no supported storage protocol.
    #[error("unrecognized remote scheme '{scheme}'")]
    UnrecognizedScheme {
        /// The scheme text found in the connection string.
        scheme: String,
    },
}

/// Descriptor field consulted by the encoder.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RemoteField {
    /// The `type` discriminant.
    Type,
    /// Server host (NFS, SMB).
    Host,
    /// Authentication domain (SMB).
    Domain,
    /// User name (SMB).
    Username,
    /// Password (SMB).
    Password,
}

impl RemoteField {
    /// Returns the field name as used in loose descriptors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Host => "host",
            Self::Domain => "domain",
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for RemoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`format_fields`](crate::format_fields) under
/// [`MissingFieldPolicy::Reject`](crate::MissingFieldPolicy::Reject).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FormatError {
    /// A field required by the remote type was absent.
    #[error("{scheme} remote is missing required field '{field}'")]
    MissingField {
        /// Scheme being encoded.
        scheme: String,
        /// The absent field.
        field: RemoteField,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        assert_eq!(
            RemoteUrlError::UnrecognizedScheme {
                scheme: "s3".to_owned()
            }
            .to_string(),
            "unrecognized remote scheme 's3'"
        );
        assert_eq!(
            FormatError::MissingField {
                scheme: "smb".to_owned(),
                field: RemoteField::Domain,
            }
            .to_string(),
            "smb remote is missing required field 'domain'"
        );
    }

    #[test]
    fn missing_type_reads_naturally() {
        let error = FormatError::MissingField {
            scheme: "undefined".to_owned(),
            field: RemoteField::Type,
        };
        assert!(error.to_string().ends_with("'type'"));
    }
}

//! Persisted remote entries.
//!
//! Storage of records is left to the caller. A record only pairs a display
//! name with its connection string and the status fields maintained by the
//! backup scheduler.

use crate::decode::parse_remote_url;
use crate::descriptor::RemoteDescriptor;
use crate::encode::format_remote;

/// A named backup remote as stored by the record collection.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoteRecord {
    name: String,
    url: String,
    enabled: bool,
    error: String,
}

impl RemoteRecord {
    /// Creates a record for a newly added remote.
    ///
    /// New remotes start disabled with an empty error until they have been
    /// tested.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            enabled: false,
            error: String::new(),
        }
    }

    /// Creates a record whose connection string encodes `descriptor`.
    #[must_use]
    pub fn from_descriptor(name: impl Into<String>, descriptor: &RemoteDescriptor) -> Self {
        Self::new(name, format_remote(descriptor))
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stored connection string.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Reports whether the remote may be used by backup jobs.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the last recorded error, empty when none.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Decodes the stored connection string.
    #[must_use]
    pub fn descriptor(&self) -> RemoteDescriptor {
        parse_remote_url(&self.url)
    }

    /// Replaces the connection string with the encoding of `descriptor`.
    ///
    /// The record is disabled again since the new location has not been
    /// tested yet.
    pub fn set_descriptor(&mut self, descriptor: &RemoteDescriptor) {
        self.url = format_remote(descriptor);
        self.enabled = false;
        self.error.clear();
    }

    /// Renames the remote.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Marks the remote usable and clears the last error.
    pub fn enable(&mut self) {
        self.enabled = true;
        self.error.clear();
    }

    /// Marks the remote unusable, recording why.
    pub fn disable_with_error(&mut self, error: impl Into<String>) {
        self.enabled = false;
        self.error = error.into();
    }

    /// Reports whether backup jobs can target this remote: it is enabled and
    /// its connection string names a supported scheme.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.descriptor().is_unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FileRemote, NfsRemote};

    #[test]
    fn new_record_starts_disabled_without_error() {
        let record = RemoteRecord::new("nightly", "file:///srv/backups");

        assert_eq!(record.name(), "nightly");
        assert_eq!(record.url(), "file:///srv/backups");
        assert!(!record.enabled());
        assert_eq!(record.error(), "");
    }

    #[test]
    fn descriptor_round_trips_through_record() {
        let nfs = RemoteDescriptor::Nfs(NfsRemote::new("filer", "/export").with_port("2049"));
        let record = RemoteRecord::from_descriptor("filer", &nfs);

        assert_eq!(record.url(), "nfs://filer:2049:/export");
        assert_eq!(record.descriptor(), nfs);
    }

    #[test]
    fn set_descriptor_resets_status() {
        let mut record = RemoteRecord::new("r", "file:///old");
        record.disable_with_error("ENOENT");
        record.enable();
        assert!(record.enabled());

        record.set_descriptor(&RemoteDescriptor::File(FileRemote::new("/new")));

        assert_eq!(record.url(), "file:///new");
        assert!(!record.enabled());
        assert_eq!(record.error(), "");
    }

    #[test]
    fn disable_records_error() {
        let mut record = RemoteRecord::new("r", "nfs://filer:/x");
        record.enable();
        record.disable_with_error("mount failed");

        assert!(!record.enabled());
        assert_eq!(record.error(), "mount failed");
    }

    #[test]
    fn unknown_scheme_is_never_usable() {
        let mut record = RemoteRecord::new("r", "s3://bucket");
        record.enable();
        assert!(!record.is_usable());

        record.rename("renamed");
        record.set_descriptor(&RemoteDescriptor::File(FileRemote::new("/srv")));
        record.enable();
        assert!(record.is_usable());
        assert_eq!(record.name(), "renamed");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_flat_record() {
        let record = RemoteRecord::new("nightly", "file:///srv");
        let json = serde_json::to_value(&record).expect("serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "name": "nightly",
                "url": "file:///srv",
                "enabled": false,
                "error": "",
            })
        );
    }
}

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Design
//!
//! - [`parse_remote_url`] decodes a connection string into a
//!   [`RemoteDescriptor`], one variant per supported scheme plus
//!   [`RemoteDescriptor::Unknown`]. It never fails: NFS strings that do not
//!   follow `host[:port]:path` are split leniently and flagged through
//!   [`NfsRemote::invalid_url`].
//! - [`format_remote`] encodes a descriptor. [`format_fields`] encodes a loose
//!   [`RemoteFields`] record as edited by user interfaces, where missing
//!   fields are governed by [`MissingFieldPolicy`].
//! - [`sanitize_path`] normalises one or more path fragments into a
//!   `/`-joined path without empty segments. It backs both directions.
//!
//! # Invariants
//!
//! - Decoded `file` and `nfs` paths always start with exactly one `/`.
//! - Decoded `smb` paths are passed through as stored; encoded SMB paths use
//!   `\` between segments after a NUL byte.
//! - SMB credentials split at the last `@`, then at the first `:`, so
//!   passwords may contain either character.
//! - `parse_remote_url(&format_remote(d)) == d` for `file` and `nfs`
//!   descriptors whose fields contain no separator characters.
//!
//! # Errors
//!
//! Decoding is infallible. [`RemoteUrlError`] is only produced by the strict
//! [`FromStr`](std::str::FromStr) implementation on [`RemoteDescriptor`], and
//! [`FormatError`] only under [`MissingFieldPolicy::Reject`].

mod debug_remote;
mod decode;
mod descriptor;
mod encode;
mod error;
mod path;
mod record;

pub use crate::decode::parse_remote_url;
pub use crate::descriptor::{
    FileRemote, NfsRemote, RemoteDescriptor, RemoteScheme, SmbRemote, UnknownRemote,
};
pub use crate::encode::{
    FormatOptions, MISSING_FIELD_PLACEHOLDER, MissingFieldPolicy, RemoteFields, format_fields,
    format_remote,
};
pub use crate::error::{FormatError, RemoteField, RemoteUrlError};
pub use crate::path::{
    PathFragment, join_browse_path, parent_path, root_path, sanitize_path, segments,
};
pub use crate::record::RemoteRecord;

//! Text rendering of descriptors and escaping of connection strings.
//!
//! SMB connection strings embed a NUL byte, which cannot be passed as a
//! process argument. The escaped form writes it as `\0` and doubles every
//! backslash so the transformation is reversible.

use std::fmt::Write as _;

use remote::RemoteDescriptor;

/// Replacement shown for SMB passwords unless explicitly requested.
pub(crate) const MASKED_PASSWORD: &str = "********";

/// Escapes NUL bytes and backslashes.
pub(crate) fn escape_connection_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\0' => escaped.push_str("\\0"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Reverses [`escape_connection_string`].
///
/// Unknown escapes and a trailing lone backslash are kept literally.
pub(crate) fn unescape_connection_string(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            unescaped.push(ch);
            continue;
        }

        match chars.next() {
            Some('\\') => unescaped.push('\\'),
            Some('0') => unescaped.push('\0'),
            Some(other) => {
                unescaped.push('\\');
                unescaped.push(other);
            }
            None => unescaped.push('\\'),
        }
    }

    unescaped
}

/// Renders a descriptor as `key: value` lines.
pub(crate) fn render_text(descriptor: &RemoteDescriptor, show_password: bool) -> String {
    let mut out = String::new();
    let mut line = |key: &str, value: &str| {
        let _ = writeln!(out, "{key}: {value}");
    };

    match descriptor {
        RemoteDescriptor::File(file) => {
            line("type", "file");
            line("path", file.path());
        }
        RemoteDescriptor::Nfs(nfs) => {
            line("type", "nfs");
            line("host", nfs.host());
            if let Some(port) = nfs.port() {
                line("port", port);
            }
            line("path", nfs.path());
            if nfs.invalid_url() {
                line("invalid-url", "true");
            }
        }
        RemoteDescriptor::Smb(smb) => {
            line("type", "smb");
            line("host", smb.host());
            line("domain", smb.domain());
            line("username", smb.username());
            line("password", visible_password(smb.password(), show_password));
            line("path", &escape_connection_string(smb.path()));
        }
        RemoteDescriptor::Unknown(unknown) => {
            line("type", "unknown");
            line("scheme", unknown.scheme());
        }
    }

    out
}

/// Renders a descriptor as pretty-printed JSON.
pub(crate) fn render_json(
    descriptor: &RemoteDescriptor,
    show_password: bool,
) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(descriptor)?;

    if let (RemoteDescriptor::Smb(smb), Some(object)) = (descriptor, value.as_object_mut()) {
        object.insert(
            "password".to_owned(),
            visible_password(smb.password(), show_password).into(),
        );
    }

    serde_json::to_string_pretty(&value)
}

fn visible_password(password: &str, show_password: bool) -> &str {
    if show_password || password.is_empty() {
        password
    } else {
        MASKED_PASSWORD
    }
}

//! Path helpers shared by the decoder, the encoder and browsing consumers.
//!
//! Remote paths are stored without leading or trailing separators on the wire
//! and rooted at `/` once decoded. [`sanitize_path`] produces the former,
//! [`root_path`] the latter.

/// A value that may contribute a fragment to [`sanitize_path`].
///
/// Implemented for string slices, owned strings and `Option`s of either, so
/// callers can pass descriptor fields directly. `None` contributes nothing.
pub trait PathFragment {
    /// Returns the raw fragment text, if any.
    fn as_fragment(&self) -> Option<&str>;
}

impl PathFragment for str {
    fn as_fragment(&self) -> Option<&str> {
        Some(self)
    }
}

impl PathFragment for String {
    fn as_fragment(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: PathFragment + ?Sized> PathFragment for &T {
    fn as_fragment(&self) -> Option<&str> {
        (**self).as_fragment()
    }
}

impl<T: PathFragment> PathFragment for Option<T> {
    fn as_fragment(&self) -> Option<&str> {
        self.as_ref().and_then(PathFragment::as_fragment)
    }
}

/// Joins one or more path fragments into a single `/`-separated path.
///
/// Every fragment is split on `/`, each segment is trimmed of surrounding
/// whitespace and empty segments are dropped. The result never starts or ends
/// with a separator, and sanitizing it again returns the same value.
///
/// # Examples
///
/// ```
/// use remote::sanitize_path;
///
/// assert_eq!(sanitize_path(["/a//b/", "", "c/"]), "a/b/c");
/// assert_eq!(sanitize_path([Some(" backups "), None]), "backups");
/// assert_eq!(sanitize_path(["///"]), "");
/// ```
pub fn sanitize_path<I>(fragments: I) -> String
where
    I: IntoIterator,
    I::Item: PathFragment,
{
    let mut joined = String::new();

    for fragment in fragments {
        let Some(text) = fragment.as_fragment() else {
            continue;
        };

        for segment in segments(text) {
            if !joined.is_empty() {
                joined.push('/');
            }
            joined.push_str(segment);
        }
    }

    joined
}

/// Iterates over the trimmed, non-empty `/`-separated segments of `path`.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

/// Roots `path` at exactly one leading `/`.
///
/// All leading slashes are removed before a single one is added, so the
/// operation is idempotent and tolerates legacy values that omitted the
/// slash entirely.
pub fn root_path(path: &str) -> String {
    let relative = path.trim_start_matches('/');
    let mut rooted = String::with_capacity(relative.len() + 1);
    rooted.push('/');
    rooted.push_str(relative);
    rooted
}

/// Returns the parent directory of a browsed path, with a trailing slash.
///
/// Trailing separators on `path` are ignored, and the root (or a path with a
/// single component) yields `/`.
///
/// ```
/// use remote::parent_path;
///
/// assert_eq!(parent_path("/etc/nginx/"), "/etc/");
/// assert_eq!(parent_path("/etc/nginx"), "/etc/");
/// assert_eq!(parent_path("/etc"), "/");
/// assert_eq!(parent_path("/"), "/");
/// ```
pub fn parent_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');

    match trimmed.rfind('/') {
        Some(index) => {
            let parent = trimmed[..index].trim_end_matches('/');
            let mut result = String::with_capacity(parent.len() + 1);
            result.push_str(parent);
            result.push('/');
            result
        }
        None => String::from("/"),
    }
}

/// Appends an entry name to a browsed directory path.
///
/// Directory listings report names relative to the directory being browsed;
/// this joins them with exactly one separator.
pub fn join_browse_path(directory: &str, name: &str) -> String {
    let name = name.trim_start_matches('/');
    let mut joined = String::with_capacity(directory.len() + name.len() + 1);
    joined.push_str(directory);
    if !directory.ends_with('/') {
        joined.push('/');
    }
    joined.push_str(name);
    joined
}

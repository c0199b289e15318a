//! Root references as stored in a library model
//!
//! Archives are referenced as `jar://<absolute path>!/`, everything else as
//! `file://<absolute path>`. Paths always use forward slashes. A literal `%`
//! and bytes that are not valid UTF-8 are written as `%XX`, so every local
//! path maps back to exactly the file it came from.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const JAR_PROTOCOL: &str = "jar";
pub const FILE_PROTOCOL: &str = "file";
pub const PROTOCOL_SEPARATOR: &str = "://";
/// Separates the archive path from an entry inside it
pub const ARCHIVE_SEPARATOR: &str = "!/";

const ARCHIVE_EXTENSIONS: &[&str] = &["jar", "zip", "war", "ear", "aar"];

/// Reference to a root entry in a library model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootUrl(String);

impl RootUrl {
    /// Build the reference for a local file
    ///
    /// Relative paths are made absolute against the current directory.
    pub fn for_file(path: &Path) -> Self {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let path_str = encode_path(&absolute);

        if is_archive(path) {
            RootUrl(format!(
                "{JAR_PROTOCOL}{PROTOCOL_SEPARATOR}{path_str}{ARCHIVE_SEPARATOR}"
            ))
        } else {
            RootUrl(format!("{FILE_PROTOCOL}{PROTOCOL_SEPARATOR}{path_str}"))
        }
    }

    /// Wrap an existing reference as read from a host model
    pub fn from_raw(raw: impl Into<String>) -> Self {
        RootUrl(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Plain filesystem path this reference points at, if it can be extracted
    pub fn presentable_path(&self) -> Option<&str> {
        presentable_path(&self.0)
    }
}

impl fmt::Display for RootUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RootUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ARCHIVE_EXTENSIONS
                .iter()
                .any(|archive| archive.eq_ignore_ascii_case(ext))
        })
}

/// Strip the protocol and any archive entry from a root reference.
///
/// Plain paths are returned unchanged and `%XX` escapes are kept. Returns
/// `None` for empty references, references containing NUL, unknown
/// protocols, or an empty path part.
pub fn presentable_path(reference: &str) -> Option<&str> {
    if reference.is_empty() || reference.contains('\0') {
        return None;
    }

    let path = match reference.split_once(PROTOCOL_SEPARATOR) {
        Some((JAR_PROTOCOL, rest)) => archive_path(rest),
        Some((FILE_PROTOCOL, rest)) => rest,
        Some(_) => return None,
        None => reference,
    };

    if path.is_empty() { None } else { Some(path) }
}

/// Archive part of `<archive>!/<entry>`.
///
/// Directories may themselves end in `!`, so the archive ends at the first
/// separator whose prefix has an archive extension. Without one, a trailing
/// separator is dropped before falling back to the first separator.
fn archive_path(rest: &str) -> &str {
    let mut from = 0;
    while let Some(offset) = rest[from..].find(ARCHIVE_SEPARATOR) {
        let end = from + offset;
        if is_archive(Path::new(&rest[..end])) {
            return &rest[..end];
        }
        from = end + ARCHIVE_SEPARATOR.len();
    }

    if let Some(root) = rest.strip_suffix(ARCHIVE_SEPARATOR) {
        return root;
    }
    match rest.find(ARCHIVE_SEPARATOR) {
        Some(end) => &rest[..end],
        None => rest.strip_suffix('!').unwrap_or(rest),
    }
}

#[cfg(unix)]
fn encode_path(path: &Path) -> String {
    use std::fmt::Write as _;
    use std::os::unix::ffi::OsStrExt;

    let mut encoded = String::new();
    for chunk in path.as_os_str().as_bytes().utf8_chunks() {
        push_escaped(&mut encoded, chunk.valid());
        for byte in chunk.invalid() {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}

#[cfg(not(unix))]
fn encode_path(path: &Path) -> String {
    let mut encoded = String::new();
    push_escaped(&mut encoded, &path.to_string_lossy().replace('\\', "/"));
    encoded
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        if c == '%' {
            out.push_str("%25");
        } else {
            out.push(c);
        }
    }
}

/// Decode the `%XX` escapes written by [`RootUrl::for_file`].
///
/// A `%` not followed by two hex digits is kept literally. Returns `None`
/// if the decoded path would contain NUL.
pub fn decode_path(encoded: &str) -> Option<PathBuf> {
    let bytes = encoded.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let Some(byte) = bytes.get(i + 1..i + 3).and_then(hex_byte) {
                decoded.push(byte);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    if decoded.contains(&0) {
        return None;
    }
    bytes_to_path(decoded)
}

fn hex_byte(hex: &[u8]) -> Option<u8> {
    if !hex.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    u8::from_str_radix(std::str::from_utf8(hex).ok()?, 16).ok()
}

#[cfg(unix)]
#[allow(clippy::unnecessary_wraps)]
fn bytes_to_path(bytes: Vec<u8>) -> Option<PathBuf> {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    Some(PathBuf::from(OsString::from_vec(bytes)))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: Vec<u8>) -> Option<PathBuf> {
    String::from_utf8(bytes).ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_url() {
        let url = RootUrl::for_file(Path::new("/repo/acme-core-1.0.jar"));
        assert_eq!(url.as_str(), "jar:///repo/acme-core-1.0.jar!/");
    }

    #[test]
    fn test_archive_extension_case_insensitive() {
        let url = RootUrl::for_file(Path::new("/repo/LEGACY.ZIP"));
        assert!(url.as_str().starts_with("jar://"));
    }

    #[test]
    fn test_plain_file_url() {
        let url = RootUrl::for_file(Path::new("/repo/docs/index.html"));
        assert_eq!(url.as_str(), "file:///repo/docs/index.html");
    }

    #[test]
    fn test_relative_path_made_absolute() {
        let url = RootUrl::for_file(Path::new("lib/a.jar"));
        let path = url.presentable_path().unwrap();
        assert!(Path::new(path).is_absolute());
        assert!(path.ends_with("lib/a.jar"));
    }

    #[test]
    fn test_presentable_path_jar_root() {
        assert_eq!(
            presentable_path("jar:///repo/a.jar!/"),
            Some("/repo/a.jar")
        );
    }

    #[test]
    fn test_presentable_path_jar_entry() {
        assert_eq!(
            presentable_path("jar:///repo/a.jar!/org/acme/Core.class"),
            Some("/repo/a.jar")
        );
    }

    #[test]
    fn test_presentable_path_jar_without_separator() {
        assert_eq!(presentable_path("jar:///repo/a.jar!"), Some("/repo/a.jar"));
        assert_eq!(presentable_path("jar:///repo/a.jar"), Some("/repo/a.jar"));
    }

    #[test]
    fn test_presentable_path_file_and_plain() {
        assert_eq!(presentable_path("file:///repo/a.jar"), Some("/repo/a.jar"));
        assert_eq!(presentable_path("/repo/a.jar"), Some("/repo/a.jar"));
    }

    #[test]
    fn test_presentable_path_bang_directory() {
        assert_eq!(
            presentable_path("jar:///repo/weird!/core.jar!/"),
            Some("/repo/weird!/core.jar")
        );
        assert_eq!(
            presentable_path("jar:///repo/weird!/core.jar!/org/acme/Core.class"),
            Some("/repo/weird!/core.jar")
        );
        assert_eq!(
            presentable_path("jar:///repo/weird!/bundle!/"),
            Some("/repo/weird!/bundle")
        );
    }

    #[test]
    fn test_percent_is_escaped() {
        let url = RootUrl::for_file(Path::new("/repo/100%/core.jar"));
        assert_eq!(url.as_str(), "jar:///repo/100%25/core.jar!/");
        assert_eq!(
            url.presentable_path().and_then(decode_path),
            Some(PathBuf::from("/repo/100%/core.jar"))
        );
    }

    #[test]
    fn test_decode_keeps_stray_percent() {
        assert_eq!(decode_path("/repo/a%zz.jar"), Some(PathBuf::from("/repo/a%zz.jar")));
        assert_eq!(decode_path("/repo/a%2"), Some(PathBuf::from("/repo/a%2")));
        assert_eq!(decode_path("/repo/a%+1"), Some(PathBuf::from("/repo/a%+1")));
        assert_eq!(decode_path("/repo/a%00.jar"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_round_trips() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new("/repo").join(OsStr::from_bytes(b"core\xff.jar"));
        let url = RootUrl::for_file(&path);

        assert_eq!(url.as_str(), "jar:///repo/core%FF.jar!/");
        assert_eq!(url.presentable_path().and_then(decode_path), Some(path));
    }

    #[test]
    fn test_presentable_path_malformed() {
        assert_eq!(presentable_path(""), None);
        assert_eq!(presentable_path("jar://!/"), None);
        assert_eq!(presentable_path("http://example.com/a.jar"), None);
        assert_eq!(presentable_path("/repo/a\0.jar"), None);
    }
}

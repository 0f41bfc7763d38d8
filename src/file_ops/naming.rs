//! Filename matching and destination name derivation
//!
//! Names are handled as `OsStr` so that entries whose names are not valid
//! Unicode are still converted. On unix the comparison works on the raw
//! bytes of the name.

use std::ffi::{OsStr, OsString};

/// Whether `name` ends with `extension` (exact, case-sensitive)
#[cfg(unix)]
pub fn has_extension(name: &OsStr, extension: &str) -> bool {
    use std::os::unix::ffi::OsStrExt;
    name.as_bytes().ends_with(extension.as_bytes())
}

/// Whether `name` ends with `extension` (exact, case-sensitive)
#[cfg(not(unix))]
pub fn has_extension(name: &OsStr, extension: &str) -> bool {
    name.to_str().is_some_and(|name| name.ends_with(extension))
}

/// Derives the name of the copy produced for `name`
///
/// Only the first occurrence of `source_extension` is replaced, wherever it
/// appears in the name. For `a.dart.dart` this yields `a.txt.dart`, not
/// `a.dart.txt`. A name without the extension is returned unchanged.
///
/// # Examples
/// ```
/// use std::ffi::OsStr;
/// use ext_convert::file_ops::destination_name;
///
/// assert_eq!(destination_name(OsStr::new("main.dart"), ".dart", ".txt"), "main.txt");
/// assert_eq!(destination_name(OsStr::new("x.dart.dart"), ".dart", ".txt"), "x.txt.dart");
/// ```
#[cfg(unix)]
pub fn destination_name(name: &OsStr, source_extension: &str, target_extension: &str) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = name.as_bytes();
    let pattern = source_extension.as_bytes();
    match find_first(bytes, pattern) {
        Some(start) => {
            let mut renamed = Vec::with_capacity(bytes.len() + target_extension.len());
            renamed.extend_from_slice(&bytes[..start]);
            renamed.extend_from_slice(target_extension.as_bytes());
            renamed.extend_from_slice(&bytes[start + pattern.len()..]);
            OsString::from_vec(renamed)
        }
        None => name.to_os_string(),
    }
}

/// Derives the name of the copy produced for `name`
///
/// Only the first occurrence of `source_extension` is replaced. Names that
/// are not valid Unicode are returned unchanged.
#[cfg(not(unix))]
pub fn destination_name(name: &OsStr, source_extension: &str, target_extension: &str) -> OsString {
    match name.to_str() {
        Some(name) => OsString::from(name.replacen(source_extension, target_extension, 1)),
        None => name.to_os_string(),
    }
}

/// Position of the first occurrence of `needle` in `haystack`
#[cfg(unix)]
fn find_first(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

//! Local file naming for downloaded scripts.
//!
//! Derives a deterministic, filesystem-safe name from a URL. Names only depend
//! on the URL; collisions with files already on disk are resolved by the
//! downloader through [`disambiguated_filename`].

use std::sync::LazyLock;

use regex::Regex;
use sha1::{Digest, Sha1};
use url::Url;

use crate::config::{
    COLLISION_HASH_LEN, FALLBACK_FILENAME, MAX_FILENAME_LEN, QUERY_HASH_LEN,
    SYNTHETIC_NAME_HASH_LEN,
};

const JS_EXTENSION: &str = ".js";

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_.\-]+").expect("static filename pattern is valid")
});

/// First `len` hex characters of the SHA-1 of `input`.
pub fn short_hash(input: &str, len: usize) -> String {
    let mut digest = hex::encode(Sha1::digest(input.as_bytes()));
    digest.truncate(len);
    digest
}

/// Builds the local file name for a URL.
///
/// 1. Last path segment (trailing slashes ignored), or `script_<hash12>.js`
///    when the path has none.
/// 2. `.js` appended unless already present (case-insensitive).
/// 3. `_<hash6>` of the query string inserted before the extension, so the
///    same path with different queries maps to different files.
/// 4. Sanitized by [`sanitize_filename`].
///
/// # Examples
///
/// ```
/// use js_status::naming::filename_from_url;
///
/// assert_eq!(filename_from_url("https://cdn.example.com/lib/jquery.min.js"), "jquery.min.js");
/// assert_eq!(filename_from_url("http://a/path/app"), "app.js");
/// assert_eq!(filename_from_url("http://a/x.js?v=2"), "x_f67bbd.js");
/// ```
pub fn filename_from_url(url: &str) -> String {
    let (path, query) = split_path_and_query(url);

    let segment = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    let mut base = if segment.is_empty() {
        format!(
            "script_{}{}",
            short_hash(url, SYNTHETIC_NAME_HASH_LEN),
            JS_EXTENSION
        )
    } else {
        segment.to_string()
    };

    if !has_js_extension(&base) {
        base.push_str(JS_EXTENSION);
    }

    if let Some(query) = query {
        let (stem, ext) = split_js_extension(&base);
        base = format!("{}_{}{}", stem, short_hash(query, QUERY_HASH_LEN), ext);
    }

    sanitize_filename(&base)
}

/// Makes a file name safe for any filesystem.
///
/// Every run of characters outside `[A-Za-z0-9_.-]` becomes one underscore,
/// leading and trailing underscores are stripped and the result is capped at
/// `MAX_FILENAME_LEN` characters. A trailing `.js` survives truncation. An
/// empty result becomes `file.js`.
pub fn sanitize_filename(name: &str) -> String {
    let replaced = UNSAFE_FILENAME_CHARS.replace_all(name, "_");
    let trimmed = replaced.trim_matches('_');
    if trimmed.is_empty() {
        return FALLBACK_FILENAME.to_string();
    }

    // Only ASCII is left, so byte offsets are char offsets.
    if trimmed.len() <= MAX_FILENAME_LEN {
        return trimmed.to_string();
    }
    if has_js_extension(trimmed) {
        let (stem, ext) = split_js_extension(trimmed);
        format!("{}{}", &stem[..MAX_FILENAME_LEN - ext.len()], ext)
    } else {
        trimmed[..MAX_FILENAME_LEN].to_string()
    }
}

/// Inserts `_<hash8>` of the URL before the extension of `name`.
///
/// Used when a file with the resolved name already exists. Only the name is
/// compared, never the content.
pub fn disambiguated_filename(name: &str, url: &str) -> String {
    let hash = short_hash(url, COLLISION_HASH_LEN);
    match name.rfind('.') {
        Some(idx) if idx > 0 => format!("{}_{}{}", &name[..idx], hash, &name[idx..]),
        _ => format!("{name}_{hash}"),
    }
}

fn has_js_extension(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= JS_EXTENSION.len()
        && bytes[bytes.len() - JS_EXTENSION.len()..].eq_ignore_ascii_case(JS_EXTENSION.as_bytes())
}

/// Splits `name` into stem and its (already verified) `.js` extension.
fn split_js_extension(name: &str) -> (&str, &str) {
    name.split_at(name.len() - JS_EXTENSION.len())
}

/// Raw path and non-empty raw query of a URL, as written in the input.
///
/// The `url` crate only locates the scheme and decides whether an authority
/// follows; path and query are sliced from the original text so percent
/// escapes are never introduced. Unparseable strings are treated as a bare
/// path.
fn split_path_and_query(url: &str) -> (&str, Option<&str>) {
    let without_fragment = url.split('#').next().unwrap_or_default();
    let (head, query) = match without_fragment.split_once('?') {
        Some((head, query)) => (head, Some(query).filter(|q| !q.is_empty())),
        None => (without_fragment, None),
    };
    (strip_scheme_and_authority(url, head), query)
}

fn strip_scheme_and_authority<'a>(url: &str, head: &'a str) -> &'a str {
    let Ok(parsed) = Url::parse(url) else {
        return head;
    };
    let Some(rest) = head
        .get(parsed.scheme().len()..)
        .and_then(|rest| rest.strip_prefix(':'))
    else {
        return head;
    };
    if !parsed.has_authority() {
        return rest;
    }
    let authority_and_path = rest.strip_prefix("//").unwrap_or(rest);
    authority_and_path
        .find('/')
        .map_or("", |idx| &authority_and_path[idx..])
}

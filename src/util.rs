use indexmap::IndexMap;

pub(crate) fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_lowercase();
        owned
    } else {
        value.to_lowercase()
    }
}

/// Trims every entry, drops empty ones and removes case-insensitive duplicates.
///
/// The first spelling seen for each entry wins and the original order is kept, so
/// `["GET", "get", " GET "]` collapses to `["GET"]`.
pub fn normalize_values<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: IndexMap<String, String> = IndexMap::new();
    for value in values {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        seen.entry(normalize_lower(trimmed))
            .or_insert_with(|| trimmed.to_owned());
    }

    seen.into_values().collect()
}

/// Canonical HTTP header-name casing: the first letter and every letter following a hyphen
/// upper-cased, the rest lower-cased (`content-type` becomes `Content-Type`).
///
/// Names that are not valid tokens are returned unchanged.
pub fn canonical_header_name(name: &str) -> String {
    if !is_http_token(name) {
        return name.to_owned();
    }

    let mut upper = true;
    name.chars()
        .map(|ch| {
            let mapped = if upper {
                ch.to_ascii_uppercase()
            } else {
                ch.to_ascii_lowercase()
            };
            upper = ch == '-';
            mapped
        })
        .collect()
}

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

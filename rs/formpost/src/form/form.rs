use std::collections::BTreeMap;

use uuid::Uuid;

/// Form fields by name. Parts are written in key order.
pub type FormData = BTreeMap<String, String>;

pub const BOUNDARY_PREFIX: &str = "----formpost";
pub const MAX_BOUNDARY_LEN: usize = 70;

const CRLF: &str = "\r\n";

/// A fresh boundary token. Values that happen to contain it are not detected.
pub fn generate_boundary() -> String {
    format!("{BOUNDARY_PREFIX}{}", Uuid::new_v4().simple())
}

fn is_bchar(c: char) -> bool {
    c.is_ascii_alphanumeric() || "'()+_,-./:=? ".contains(c)
}

/// RFC 2046 boundary: 1 to 70 `bchars`, not ending in a space.
pub fn is_valid_boundary(boundary: &str) -> bool {
    (1..=MAX_BOUNDARY_LEN).contains(&boundary.len())
        && boundary.chars().all(is_bchar)
        && !boundary.ends_with(' ')
}

fn is_token(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c))
}

/// The `Content-Type` header value. Boundaries holding characters outside
/// an HTTP token are quoted.
pub fn content_type(boundary: &str) -> String {
    if is_token(boundary) {
        format!("multipart/form-data; boundary={boundary}")
    } else {
        format!("multipart/form-data; boundary=\"{boundary}\"")
    }
}

fn part(boundary: &str, name: &str, value: &str) -> String {
    format!(
        "--{boundary}{CRLF}Content-Disposition: form-data; name=\"{name}\"{CRLF}{CRLF}{value}{CRLF}"
    )
}

/// Serializes `form_data` into a `multipart/form-data` body.
///
/// Every field becomes one text part opened by `--<boundary>`, carrying a
/// `Content-Disposition: form-data; name="<field>"` header. The body ends
/// with `--<boundary>--`. An empty form still gets an opening delimiter, so
/// the body is never just the closing line.
pub fn get_form_data(boundary: &str, form_data: &FormData) -> String {
    let mut body: String = form_data
        .iter()
        .map(|(name, value)| part(boundary, name, value))
        .collect();

    if form_data.is_empty() {
        body.push_str(&format!("--{boundary}{CRLF}"));
    }
    body.push_str(&format!("--{boundary}--{CRLF}"));
    body
}

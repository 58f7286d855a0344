use generator::naming::slugify;

/// Download filename for a stored plugin, e.g. `My Plugin` -> `my-plugin.zip`.
pub fn archive_filename(plugin_name: &str) -> String {
    let slug = slugify(plugin_name.trim());
    if slug.is_empty() {
        "plugin.zip".to_string()
    } else {
        format!("{slug}.zip")
    }
}

/// `Content-Disposition` value offering `filename` as a download.
///
/// Carries an ASCII `filename` for old clients and the exact name as an
/// RFC 5987 `filename*`.
pub fn content_disposition_value(filename: &str) -> String {
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii_fallback(filename),
        encode_ext_value(filename)
    )
}

/// Printable ASCII subset of `filename` that is safe inside a quoted string.
fn ascii_fallback(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .filter(|c| c.is_ascii_graphic() && !matches!(c, '"' | ';' | '\\'))
        .collect();
    if fallback.is_empty() {
        "plugin.zip".to_string()
    } else {
        fallback
    }
}

/// RFC 5987 `attr-char` set; every other byte is percent-encoded.
fn is_attr_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&b)
}

fn encode_ext_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        if is_attr_char(b) {
            out.push(char::from(b));
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

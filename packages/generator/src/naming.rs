/// Upper-case the first character and lower-case the rest (`myCmd` -> `Mycmd`).
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Handler class identifier for a command, e.g. `hello` -> `HelloCommand`.
pub fn handler_class_name(command_name: &str) -> String {
    format!("{}Command", capitalize(command_name.trim()))
}

/// Lowercase a display name and replace spaces with hyphens.
pub fn slugify(display_name: &str) -> String {
    display_name.to_lowercase().replace(' ', "-")
}

/// Convert a dotted package name into a relative directory path.
pub fn package_path(package_name: &str) -> String {
    package_name.replace('.', "/")
}

/// Escape a value for use inside a Java string literal.
pub fn escape_java_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

/// Escape a value for use as XML character data.
pub fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

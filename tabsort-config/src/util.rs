/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Non-empty, trimmed value of an environment variable.
pub fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

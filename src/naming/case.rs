//! Identifier case conversion.

/// Convert a camel-case or hyphenated identifier to kebab-case.
///
/// Every uppercase letter starts a new word; words are lowercased and joined
/// with `-`. Existing hyphens are kept and never doubled, so lowercase or
/// already-hyphenated input comes back unchanged.
///
/// # Example
///
/// ```
/// use stackname::naming::kebab_case;
///
/// assert_eq!(kebab_case("LambdaStack"), "lambda-stack");
/// assert_eq!(kebab_case("foo-bar"), "foo-bar");
/// assert_eq!(kebab_case("gin-serverEndpoint"), "gin-server-endpoint");
/// ```
pub fn kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);

    for c in input.chars() {
        if c.is_uppercase() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Convert a hyphenated identifier to PascalCase.
///
/// Each hyphen-separated part is lowercased and its first letter
/// capitalized; empty parts disappear.
///
/// # Example
///
/// ```
/// use stackname::naming::pascal_case;
///
/// assert_eq!(pascal_case("gin-server"), "GinServer");
/// assert_eq!(pascal_case("BLANK-go"), "BlankGo");
/// ```
pub fn pascal_case(input: &str) -> String {
    input
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let lower = part.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Render a string as a DNS label.
///
/// Lowercases, replaces every character outside `[a-z0-9-]` with `-`, and
/// trims leading and trailing hyphens.
pub fn dns_label(input: &str) -> String {
    let label: String = input
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();
    label.trim_matches('-').to_string()
}

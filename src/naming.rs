//! Identifier casing for generated Rust items.
//!
//! Registry names are `UpperCamel` type names. Generated functions and
//! fields use their snake case form, scheduling-function types their
//! lower-camel form.

/// Keywords that can still be used as identifiers through `r#`.
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be identifiers at all, not even as raw identifiers.
pub const FORBIDDEN_IDENTS: &[&str] = &["crate", "self", "super"];

/// Lowercases the first character when it is an ASCII capital.
///
/// Anything else is returned untouched, so `HTTPGet` becomes `hTTPGet`.
#[must_use]
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            let mut out = String::with_capacity(name.len());
            out.push(first.to_ascii_lowercase());
            out.push_str(chars.as_str());
            out
        }
        _ => name.to_string(),
    }
}

/// Converts an `UpperCamel` name into `snake_case`.
///
/// Acronym runs stay together: `ContentMD5` is `content_md5` and
/// `HTTPServer` is `http_server`.
#[must_use]
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_uppercase() {
            out.push(c);
            continue;
        }
        if i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Snake-case field identifier, escaped with `r#` when it is a keyword.
#[must_use]
pub fn field_ident(name: &str) -> String {
    let snake = snake_case(name);
    if RAW_KEYWORDS.contains(&snake.as_str()) {
        format!("r#{snake}")
    } else {
        snake
    }
}

/// Returns `true` for `UpperCamel` ASCII identifiers (`[A-Z][A-Za-z0-9]*`).
#[must_use]
pub fn is_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase()) && chars.all(|c| c.is_ascii_alphanumeric())
}

//! Naming helpers used to infer display names from reflected identifiers.

/// Short name of a fully-qualified type name.
///
/// `Demo.Sales.Customer` → `Customer`, ``System.Collections.Generic.IList`1`` → `IList`.
pub fn short_name(full_name: &str) -> &str {
    let simple = full_name.rsplit('.').next().unwrap_or(full_name);
    match simple.find('`') {
        Some(tick) => &simple[..tick],
        None => simple,
    }
}

/// Convert an identifier into a human-readable name.
///
/// Word breaks are inserted before an uppercase letter that follows a lowercase
/// letter or digit, before the last capital of an acronym run, and between a
/// letter and a digit. Underscores become spaces and the first letter is
/// capitalised: `NumberOfOrders` → `Number Of Orders`, `XMLFile2` → `XML File 2`.
pub fn natural_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    let mut capitalize = true;

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            capitalize = true;
            continue;
        }

        if i > 0 && !out.is_empty() && !out.ends_with(' ') {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let breaks = (c.is_uppercase() && (prev.is_lowercase() || prev.is_ascii_digit()))
                || (c.is_uppercase()
                    && prev.is_uppercase()
                    && next.is_some_and(|n| n.is_lowercase()))
                || (c.is_ascii_digit() && prev.is_alphabetic())
                || (c.is_alphabetic() && prev.is_ascii_digit());
            if breaks {
                out.push(' ');
            }
        }

        if capitalize {
            out.extend(c.to_uppercase());
            capitalize = false;
        } else {
            out.push(c);
        }
    }

    out.trim_end().to_string()
}

/// English plural of a singular display name.
pub fn plural_name(singular: &str) -> String {
    let lower = singular.to_ascii_lowercase();
    if let Some(stem) = singular.strip_suffix('y') {
        let before = stem.chars().last();
        if before.is_some_and(|c| !"aeiouAEIOU".contains(c)) {
            return format!("{stem}ies");
        }
    }
    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{singular}es");
    }
    format!("{singular}s")
}

/// Strip a complementary prefix (`Hide`, `Choices`, ...) from a method name.
///
/// Returns the remainder when the name starts with `prefix` followed by at
/// least one more character.
pub fn strip_prefix<'a>(method_name: &'a str, prefix: &str) -> Option<&'a str> {
    method_name
        .strip_prefix(prefix)
        .filter(|rest| !rest.is_empty())
}

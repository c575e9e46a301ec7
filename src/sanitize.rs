//! Markup escaping for free-text fields
//!
//! Only `<` and `>` are escaped. This blocks tag injection when the stored
//! text is painted into the page; it is not general HTML escaping.

/// Replace every `<` with `&lt;` and every `>` with `&gt;`.
///
/// All other characters (including `&` and quotes) pass through unchanged.
/// Not meant to be applied twice: sanitize once, before the value is stored.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

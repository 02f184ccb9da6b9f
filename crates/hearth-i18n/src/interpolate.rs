//! `{{name}}` placeholder substitution.

use std::collections::HashMap;

/// Replaces every `{{name}}` in `template` whose `name` is a key of
/// `values`.
///
/// - Substitution is a single left-to-right pass. Inserted values are
///   never scanned again, so a value containing `{{other}}` stays literal.
/// - Placeholders with no matching key are left exactly as written.
/// - Names are matched verbatim: `{{ name }}` only matches the key
///   `" name "`.
///
/// ```rust
/// use std::collections::HashMap;
/// use hearth_i18n::interpolate;
///
/// let values = HashMap::from([("name".to_owned(), "Sam".to_owned())]);
/// assert_eq!(interpolate("Hello {{name}}", &values), "Hello Sam");
/// assert_eq!(interpolate("Hi {{who}}", &values), "Hi {{who}}");
/// ```
pub fn interpolate(template: &str, values: &HashMap<String, String>) -> String {
    if values.is_empty() || !template.contains("{{") {
        return template.to_owned();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        let Some(close) = after_open.find("}}") else {
            // No closing braces anywhere after this point.
            out.push_str(&rest[open..]);
            return out;
        };

        match values.get(&after_open[..close]) {
            Some(value) => {
                out.push_str(value);
                rest = &after_open[close + 2..];
            }
            None => {
                // Not a known placeholder. Keep one brace and rescan, so
                // `{{{name}}}` still finds the `{{name}}` inside it.
                out.push('{');
                rest = &rest[open + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

use std::{borrow::Cow, sync::OnceLock};

use regex::{Captures, Regex};

use crate::template::context::RenderContext;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ name }}`: whitespace around the name is insignificant.
    RE.get_or_init(|| Regex::new(r"\{\{\s*([^{}]*?)\s*\}\}").unwrap())
}

/// Replace every `{{ name }}` whose name is a scalar context entry.
///
/// Unknown names and structured entries are left verbatim. Substituted values
/// are not scanned again, so a value containing `{{x}}` stays literal.
pub fn substitute<'t>(text: &'t str, ctx: &RenderContext) -> Cow<'t, str> {
    if !text.contains("{{") {
        return Cow::Borrowed(text);
    }
    placeholder_re().replace_all(text, |caps: &Captures<'_>| {
        let whole = caps.get(0).map_or("", |m| m.as_str());
        let name = caps.get(1).map_or("", |m| m.as_str());
        match ctx.scalar(name) {
            Some(v) => v.to_string(),
            None => whole.to_string(),
        }
    })
}

/// Names of all placeholders in `text`, in order of appearance.
pub fn placeholders(text: &str) -> Vec<&str> {
    placeholder_re()
        .captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/template/interpolate.rs"]
mod tests;

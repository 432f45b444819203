//! Two-stage placeholder substitution.
//!
//! Placeholders are written `{{name}}`. Stage one fills a document
//! skeleton from the [`TemplateDescriptor`]; the values it inserts carry
//! their own `{{status/.../label}}` placeholders, which stage two fills
//! from the [`StatisticsMap`]. Each stage is a single non-recursive pass.
use crate::aggregate::{StatisticsMap, TemplateDescriptor};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.+?)\}\}").expect("placeholder pattern is valid"));

/// Wrap `name` in placeholder delimiters.
pub fn placeholder(name: &str) -> String {
    format!("{{{{{name}}}}}")
}

/// Replace every placeholder in `text` with `lookup(name)`.
pub fn substitute<'a>(text: &str, lookup: impl Fn(&str) -> &'a str) -> String {
    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &Captures<'_>| lookup(&caps[1]).to_owned())
        .into_owned()
}

/// Stage one: structural fields. Unknown field names become empty.
pub fn fill_template(skeleton: &str, descriptor: &TemplateDescriptor) -> String {
    substitute(skeleton, |name| descriptor.field(name).unwrap_or(""))
}

/// Stage two: counts. Composite keys no source produced become `"0"`.
pub fn fill_statistics(intermediate: &str, stats: &StatisticsMap) -> String {
    substitute(intermediate, |key| stats.lookup(key))
}

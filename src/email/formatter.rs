//! Summary text to HTML fragment rewriting.
//!
//! The model is asked for a small markdown-like dialect (bold, italic, `-`
//! bullets, `#`/`##` headings, blank-line paragraphs). This module turns that
//! dialect into inline-styled HTML with a fixed, ordered list of regex
//! substitutions. It is deliberately not a markdown parser: there is no
//! escaping, no nesting beyond what the patterns allow, and anything the rules
//! do not recognise is passed through as-is.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

pub const BULLET_STYLE: &str = "margin: 8px 0; padding-left: 20px; position: relative;";
pub const BULLET_GLYPH_STYLE: &str =
    "position: absolute; left: 0; color: #3b82f6; font-weight: bold;";
pub const H2_STYLE: &str = "color: #1e40af; font-size: 18px; margin: 25px 0 15px 0; padding-bottom: 8px; border-bottom: 2px solid #e2e8f0;";
pub const H1_STYLE: &str = "color: #1e40af; font-size: 22px; margin: 30px 0 20px 0;";

/// One pattern/replacement pair. Each rule rewrites the output of the previous one.
#[derive(Debug)]
pub struct FormattingRule {
    pub name: &'static str,
    pattern: Regex,
    replacement: String,
}

impl FormattingRule {
    fn new(name: &'static str, pattern: &str, replacement: String) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("static regex compile"),
            replacement,
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Replaces every non-overlapping match, scanning left to right.
    #[must_use]
    pub fn apply<'t>(&self, input: &'t str) -> Cow<'t, str> {
        self.pattern
            .replace_all(input, self.replacement.as_str())
    }
}

// Order matters: bold must consume `**` before italic sees single `*`, and the
// inline rules run before the line rules so headings and bullets embed
// already-rewritten text. `R` keeps `.` and `$` from swallowing a trailing `\r`.
static RULES: Lazy<Vec<FormattingRule>> = Lazy::new(|| {
    vec![
        FormattingRule::new("bold", r"(?R)\*\*(.*?)\*\*", "<strong>${1}</strong>".to_string()),
        FormattingRule::new("italic", r"(?R)\*(.*?)\*", "<em>${1}</em>".to_string()),
        FormattingRule::new(
            "bullet",
            r"(?mR)^- (.*)$",
            format!(
                r#"<div style="{BULLET_STYLE}"><span style="{BULLET_GLYPH_STYLE}">•</span>${{1}}</div>"#
            ),
        ),
        FormattingRule::new(
            "heading2",
            r"(?mR)^## (.*)$",
            format!(r#"<h2 style="{H2_STYLE}">${{1}}</h2>"#),
        ),
        FormattingRule::new(
            "heading1",
            r"(?mR)^# (.*)$",
            format!(r#"<h1 style="{H1_STYLE}">${{1}}</h1>"#),
        ),
        FormattingRule::new("paragraph", r"\n\n", "<br><br>".to_string()),
    ]
});

/// The shared, ordered rule set.
#[must_use]
pub fn rules() -> &'static [FormattingRule] {
    RULES.as_slice()
}

/// Rewrites a summary into an HTML fragment. Never fails; `""` maps to `""`.
///
/// ```
/// use minutemind::email::formatter::format_summary;
///
/// assert_eq!(format_summary("**Owner**: Ana"), "<strong>Owner</strong>: Ana");
/// ```
#[must_use]
pub fn format_summary(input: &str) -> String {
    rules()
        .iter()
        .fold(input.to_string(), |acc, rule| rule.apply(&acc).into_owned())
}

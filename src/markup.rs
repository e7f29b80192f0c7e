//! Interpolation of caller-supplied text into generated markup.
//!
//! Every value a caller controls (content, variant, attribute keys and values,
//! theme) reaches the HTML templates through [`Interpolation`]. The default
//! emits text verbatim, which reproduces historical output byte for byte and
//! lets attribute values inject arbitrary markup. [`Interpolation::Escaped`]
//! is the hardened alternative.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde_json::Value;

/// How caller-supplied text is written into markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Emit text unchanged
    #[default]
    Verbatim,
    /// HTML-escape `& < > " '`
    Escaped,
}

impl Interpolation {
    pub fn from_escape_flag(escape_html: bool) -> Self {
        if escape_html {
            Interpolation::Escaped
        } else {
            Interpolation::Verbatim
        }
    }

    /// Apply this interpolation policy to `text`.
    pub fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Interpolation::Verbatim => Cow::Borrowed(text),
            Interpolation::Escaped => escape_html(text),
        }
    }

    /// Apply the policy to a JSON scalar. Strings are used as-is; other values
    /// use their JSON text (`3`, `true`).
    pub fn value(&self, value: &Value) -> String {
        match value {
            Value::String(s) => self.text(s).into_owned(),
            other => self.text(&other.to_string()).into_owned(),
        }
    }

    /// Render `key="value"` pairs separated by single spaces.
    pub fn attributes(&self, attributes: &IndexMap<String, Value>) -> String {
        attributes
            .iter()
            .map(|(key, value)| format!("{}=\"{}\"", self.text(key), self.value(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// HTML-escape the five significant characters.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

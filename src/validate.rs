//! Heuristic design-system validation
//!
//! Checks markup for design-system class names, a theme attribute, a few
//! accessibility markers and design-token references. Every check is a
//! substring or pattern match; nothing is parsed. Missing accessibility
//! markers are not reported, only present ones.

use std::fmt;
use std::sync::OnceLock;

use indexmap::IndexSet;
use regex::Regex;

use crate::catalog::{DISPLAY_NAME, NAMESPACE};

fn class_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"{}-[\w-]+", NAMESPACE)).expect("class pattern is valid")
    })
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"var\(--{}-[\w-]+\)", NAMESPACE)).expect("token pattern is valid")
    })
}

/// A single validation observation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Design-system class names were found
    Classes { count: usize, distinct: Vec<String> },
    NoClasses,
    ThemeAttribute,
    NoThemeAttribute,
    AltText,
    AriaAttributes,
    FormLabels,
    /// `var(--vita-...)` references were found
    Tokens { count: usize, distinct: Vec<String> },
    NoTokens,
}

impl Finding {
    /// True for findings that report something done right.
    pub fn is_positive(&self) -> bool {
        !matches!(self, Finding::NoClasses | Finding::NoThemeAttribute | Finding::NoTokens)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Classes { count, distinct } => {
                write!(f, "✅ Found {} {} classes: {}", count, DISPLAY_NAME, distinct.join(", "))
            }
            Finding::NoClasses => write!(f, "❌ No {} design system classes found", DISPLAY_NAME),
            Finding::ThemeAttribute => write!(f, "✅ Theme attribute found"),
            Finding::NoThemeAttribute => write!(
                f,
                "⚠️ No theme attribute found (recommended: data-theme='light' or 'dark')"
            ),
            Finding::AltText => write!(f, "✅ Alt text found for images"),
            Finding::AriaAttributes => write!(f, "✅ ARIA attributes found"),
            Finding::FormLabels => write!(f, "✅ Proper form labels found"),
            Finding::Tokens { count, distinct } => {
                write!(f, "✅ Using {} design tokens: {}", count, distinct.join(", "))
            }
            Finding::NoTokens => write!(f, "⚠️ No design tokens (CSS custom properties) found"),
        }
    }
}

/// Ordered findings for one piece of markup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Design Validation Results:\n\n")?;
        for (i, finding) in self.findings.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", finding)?;
        }
        Ok(())
    }
}

/// All matches of `pattern`, plus the distinct ones in first-seen order.
fn collect_matches(pattern: &Regex, code: &str) -> (usize, Vec<String>) {
    let mut count = 0;
    let mut distinct = IndexSet::new();
    for m in pattern.find_iter(code) {
        count += 1;
        distinct.insert(m.as_str());
    }
    (count, distinct.into_iter().map(str::to_string).collect())
}

/// Run every check over `code`.
pub fn validate_design(code: &str, check_accessibility: bool) -> ValidationReport {
    let mut findings = Vec::new();

    let (count, distinct) = collect_matches(class_pattern(), code);
    findings.push(if count == 0 {
        Finding::NoClasses
    } else {
        Finding::Classes { count, distinct }
    });

    findings.push(if code.contains("data-theme=") {
        Finding::ThemeAttribute
    } else {
        Finding::NoThemeAttribute
    });

    if check_accessibility {
        if code.contains("alt=") && code.contains("img") {
            findings.push(Finding::AltText);
        }
        if code.contains("aria-") {
            findings.push(Finding::AriaAttributes);
        }
        if code.contains("<label") && code.contains("for=") {
            findings.push(Finding::FormLabels);
        }
    }

    let (count, distinct) = collect_matches(token_pattern(), code);
    findings.push(if count == 0 {
        Finding::NoTokens
    } else {
        Finding::Tokens { count, distinct }
    });

    ValidationReport { findings }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_markup_gets_negative_findings() {
        let report = validate_design("<div class=\"box\">Hello</div>", true);
        assert_eq!(
            report.findings,
            vec![Finding::NoClasses, Finding::NoThemeAttribute, Finding::NoTokens]
        );
        let text = report.to_string();
        assert!(text.starts_with("Design Validation Results:\n\n❌ No ViTA design system classes found\n"));
        assert!(text.ends_with("⚠️ No design tokens (CSS custom properties) found"));
    }

    #[test]
    fn test_classes_counted_and_deduplicated() {
        let code = r#"<button class="vita-button vita-button-primary">A</button>
<button class="vita-button">B</button>"#;
        let report = validate_design(code, false);
        assert_eq!(
            report.findings[0],
            Finding::Classes {
                count: 3,
                distinct: vec!["vita-button".into(), "vita-button-primary".into()],
            }
        );
        assert_eq!(
            report.findings[0].to_string(),
            "✅ Found 3 ViTA classes: vita-button, vita-button-primary"
        );
    }

    #[test]
    fn test_token_references() {
        let code = "<p style=\"color: var(--vita-color-brand-primary); margin: var(--vita-spacing-4); \
                    padding: var(--vita-spacing-4)\">x</p>";
        let report = validate_design(code, false);
        let last = report.findings.last().unwrap();
        assert_eq!(
            last,
            &Finding::Tokens {
                count: 3,
                distinct: vec![
                    "var(--vita-color-brand-primary)".into(),
                    "var(--vita-spacing-4)".into()
                ],
            }
        );
    }

    #[test]
    fn test_accessibility_findings_only_when_present() {
        let code = r#"<img src="a.png" alt="Logo"><label for="email">Email</label><div aria-live="polite"></div>"#;
        let report = validate_design(code, true);
        assert!(report.findings.contains(&Finding::AltText));
        assert!(report.findings.contains(&Finding::AriaAttributes));
        assert!(report.findings.contains(&Finding::FormLabels));

        let report = validate_design(code, false);
        assert!(!report.findings.contains(&Finding::AltText));
        assert_eq!(report.findings.len(), 3);

        let report = validate_design("<img src=\"a.png\">", true);
        assert_eq!(report.findings.len(), 3);
    }

    #[test]
    fn test_theme_attribute() {
        let report = validate_design("<html data-theme=\"dark\">", true);
        assert_eq!(report.findings[1], Finding::ThemeAttribute);
        assert!(report.findings[1].is_positive());
        assert!(!Finding::NoTokens.is_positive());
    }
}

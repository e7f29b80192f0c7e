//! CSS custom-property token extraction
//!
//! Scans a stylesheet for `--vita-<key>: <value>;` declarations and files them
//! into the catalog's token tables:
//!
//! - `color-*` → `colors`, named `color_<rest>`
//! - `font-*` → `typography`, named `font_<rest>`
//! - `spacing-*` → `spacing`, named `spacing_<rest>`
//!
//! Any other key is ignored. This is pattern matching, not CSS parsing:
//! declarations inside comments are picked up like any other.

use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::{Catalog, Category, TokenOrigin, TokenRecord, DISPLAY_NAME, NAMESPACE};

fn declaration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"--{}-([^:]+):\s*([^;]+);", NAMESPACE))
            .expect("token declaration pattern is valid")
    })
}

/// One `--vita-<key>: <value>;` declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Property name without the `--vita-` prefix
    pub key: &'a str,
    /// Trimmed value
    pub value: &'a str,
}

/// Counts from one extraction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractReport {
    pub matched: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub ignored: usize,
}

/// Iterate over every namespaced declaration in `text`.
pub fn scan(text: &str) -> impl Iterator<Item = Declaration<'_>> {
    declaration_pattern().captures_iter(text).filter_map(|caps| {
        let key = caps.get(1)?.as_str().trim();
        let value = caps.get(2)?.as_str().trim();
        Some(Declaration { key, value })
    })
}

/// A recognised declaration prefix and where its tokens go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenClass {
    pub category: Category,
    /// Key prefix, also the token-name prefix
    pub prefix: &'static str,
    /// Word used in generated descriptions
    pub label: &'static str,
}

const TOKEN_CLASSES: [TokenClass; 3] = [
    TokenClass { category: Category::Colors, prefix: "color", label: "color" },
    TokenClass { category: Category::Typography, prefix: "font", label: "typography" },
    TokenClass { category: Category::Spacing, prefix: "spacing", label: "spacing" },
];

/// Map a declaration key to its token class and the key remainder.
pub fn classify(key: &str) -> Option<(TokenClass, &str)> {
    TOKEN_CLASSES.into_iter().find_map(|class| {
        key.strip_prefix(class.prefix)
            .and_then(|rest| rest.strip_prefix('-'))
            .map(|rest| (class, rest))
    })
}

/// Build the token record for a classified declaration.
fn to_record(class: &TokenClass, rest: &str, decl: &Declaration<'_>) -> (String, TokenRecord) {
    let name = format!("{}_{}", class.prefix, rest.replace('-', "_"));
    let words = rest.replace(['-', '_'], " ");
    let record = TokenRecord {
        value: decl.value.to_string(),
        origin: TokenOrigin::CssVar(format!("--{}-{}", NAMESPACE, decl.key)),
        description: format!("{} {} token for {}", DISPLAY_NAME, class.label, words),
    };
    (name, record)
}

/// Add every classifiable declaration in `text` to `catalog`.
///
/// The first declaration of a key wins; later ones (theme overrides) are
/// counted as duplicates.
pub fn extract_into(catalog: &mut Catalog, text: &str) -> ExtractReport {
    let mut report = ExtractReport::default();

    for decl in scan(text) {
        report.matched += 1;
        let Some((class, rest)) = classify(decl.key) else {
            report.ignored += 1;
            continue;
        };
        let (name, record) = to_record(&class, rest, &decl);
        let inserted = catalog
            .tokens_mut(class.category)
            .map(|table| table.insert(name, record))
            .unwrap_or(false);
        if inserted {
            report.inserted += 1;
        } else {
            report.duplicates += 1;
        }
    }

    report
}

/// Parse `text` into a new catalog and add the built-in descriptors.
pub fn extract(text: &str) -> Catalog {
    let mut catalog = Catalog::empty();
    let report = extract_into(&mut catalog, text);
    tracing::debug!(
        matched = report.matched,
        inserted = report.inserted,
        duplicates = report.duplicates,
        ignored = report.ignored,
        "extracted css tokens"
    );
    catalog.seed_descriptors();
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
:root {
  --vita-color-brand-primary: #003965;
  --vita-color-text-on-surface:   rgba(0, 0, 0, 0.87) ;
  --vita-font-family-primary: 'Poppins', sans-serif;
  --vita-spacing-4: 16px;
  --vita-radius-md: 8px;
}
[data-theme="dark"] {
  --vita-color-brand-primary: #4FA3E0;
}
"#;

    #[test]
    fn test_scan_trims_values() {
        let decls: Vec<_> = scan(SAMPLE).collect();
        assert_eq!(decls.len(), 6);
        assert_eq!(decls[1], Declaration { key: "color-text-on-surface", value: "rgba(0, 0, 0, 0.87)" });
    }

    #[test]
    fn test_classify() {
        let (class, rest) = classify("color-brand-primary").unwrap();
        assert_eq!((class.category, class.prefix, rest), (Category::Colors, "color", "brand-primary"));
        let (class, rest) = classify("font-size-lg").unwrap();
        assert_eq!((class.category, class.prefix, rest), (Category::Typography, "font", "size-lg"));
        let (class, rest) = classify("spacing-4").unwrap();
        assert_eq!((class.category, class.prefix, rest), (Category::Spacing, "spacing", "4"));
        assert_eq!(classify("radius-md"), None);
        assert_eq!(classify("colorful"), None);
    }

    #[test]
    fn test_every_class_labels_its_own_table() {
        for class in TOKEN_CLASSES {
            assert!(Category::TOKEN_TABLES.contains(&class.category));
            let expected = match class.category {
                Category::Colors => "color",
                Category::Typography => "typography",
                Category::Spacing => "spacing",
                other => panic!("{} is not a token table", other),
            };
            assert_eq!(class.label, expected);
        }
        let catalog = extract("--vita-font-weight-bold: 700;");
        assert_eq!(
            catalog.typography.get("font_weight_bold").unwrap().description,
            "ViTA typography token for weight bold"
        );
    }

    #[test]
    fn test_extract_color_record() {
        let catalog = extract(SAMPLE);
        let record = catalog.colors.get("color_brand_primary").expect("brand color");
        assert_eq!(record.value, "#003965");
        assert_eq!(record.css_var(), Some("--vita-color-brand-primary"));
        assert_eq!(record.description, "ViTA color token for brand primary");
    }

    #[test]
    fn test_extract_typography_and_spacing() {
        let catalog = extract(SAMPLE);
        let font = catalog.typography.get("font_family_primary").unwrap();
        assert_eq!(font.value, "'Poppins', sans-serif");
        assert_eq!(font.description, "ViTA typography token for family primary");

        let spacing = catalog.spacing.get("spacing_4").unwrap();
        assert_eq!(spacing.value, "16px");
        assert_eq!(spacing.css_var(), Some("--vita-spacing-4"));
    }

    #[test]
    fn test_extract_report_counts() {
        let mut catalog = Catalog::empty();
        let report = extract_into(&mut catalog, SAMPLE);
        assert_eq!(report, ExtractReport { matched: 6, inserted: 4, duplicates: 1, ignored: 1 });
        // dark override does not replace the first declaration
        assert_eq!(catalog.colors.get("color_brand_primary").unwrap().value, "#003965");
    }

    #[test]
    fn test_extract_always_seeds_descriptors() {
        let catalog = extract("");
        assert_eq!(catalog.token_count(), 0);
        assert!(catalog.themes.light.is_some());
        assert!(catalog.guidelines.accessibility.is_some());
    }

    #[test]
    fn test_other_namespaces_ignored() {
        let catalog = extract("--md-color-primary: red; --vitality-color-x: blue;");
        assert!(catalog.colors.is_empty());
    }
}

//! Figma token export merging
//!
//! The export nests colors as `tokens.color[category][name][theme]`, each leaf
//! an object with a `value` and optional `description`. Leaves become
//! `color_<category>_<name>_<theme>` records in the colors table unless that
//! name is already taken. Anything that does not have the expected shape is
//! skipped.

use serde_json::Value;

use crate::catalog::{Catalog, TokenOrigin, TokenRecord};

/// Outcome of a merge pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub inserted: usize,
    pub skipped_existing: usize,
    pub skipped_malformed: usize,
}

/// Parse a Figma token export.
pub fn parse(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(text)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Merge the color tokens of `doc` into `catalog` without overwriting.
pub fn merge(catalog: &mut Catalog, doc: &Value) -> MergeReport {
    let mut report = MergeReport::default();

    let Some(categories) = doc.pointer("/tokens/color").and_then(Value::as_object) else {
        tracing::warn!("figma export has no tokens.color object");
        report.skipped_malformed += 1;
        return report;
    };

    for (category, colors) in categories {
        let Some(colors) = colors.as_object() else {
            report.skipped_malformed += 1;
            continue;
        };
        for (name, themes) in colors {
            let Some(themes) = themes.as_object() else {
                report.skipped_malformed += 1;
                continue;
            };
            for (theme, leaf) in themes {
                let Some(value) = leaf.as_object().and_then(|leaf| leaf.get("value")) else {
                    report.skipped_malformed += 1;
                    continue;
                };

                let key = format!("color_{}_{}_{}", category, name, theme);
                let record = TokenRecord {
                    value: scalar_text(value),
                    origin: TokenOrigin::FigmaPath(format!(
                        "color.{}.{}.{}",
                        category, name, theme
                    )),
                    description: leaf.get("description").map(scalar_text).unwrap_or_default(),
                };
                if catalog.colors.insert(key, record) {
                    report.inserted += 1;
                } else {
                    report.skipped_existing += 1;
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn export() -> Value {
        json!({
            "tokens": {
                "color": {
                    "brand": {
                        "primary": {
                            "light": { "value": "#003965", "description": "Brand" },
                            "dark": { "value": "#4FA3E0" }
                        }
                    },
                    "semantic": {
                        "error": { "light": { "value": "#D32F2F" } }
                    }
                }
            }
        })
    }

    #[test]
    fn test_merge_inserts_leaves() {
        let mut catalog = Catalog::empty();
        let report = merge(&mut catalog, &export());
        assert_eq!(report.inserted, 3);

        let record = catalog.colors.get("color_brand_primary_light").unwrap();
        assert_eq!(record.value, "#003965");
        assert_eq!(record.description, "Brand");
        assert_eq!(record.origin, TokenOrigin::FigmaPath("color.brand.primary.light".into()));

        let dark = catalog.colors.get("color_brand_primary_dark").unwrap();
        assert_eq!(dark.description, "");
        assert_eq!(dark.css_var(), None);
    }

    #[test]
    fn test_merge_never_overwrites() {
        let mut catalog = Catalog::empty();
        catalog.colors.insert(
            "color_semantic_error_light",
            TokenRecord {
                value: "#B00020".into(),
                origin: TokenOrigin::CssVar("--vita-color-semantic-error-light".into()),
                description: "from css".into(),
            },
        );

        let report = merge(&mut catalog, &export());
        assert_eq!(report.skipped_existing, 1);
        let kept = catalog.colors.get("color_semantic_error_light").unwrap();
        assert_eq!(kept.value, "#B00020");
        assert_eq!(kept.description, "from css");
    }

    #[test]
    fn test_merge_without_color_section() {
        let mut catalog = Catalog::empty();
        let report = merge(&mut catalog, &json!({ "tokens": { "spacing": {} } }));
        assert_eq!(report.inserted, 0);
        assert_eq!(report.skipped_malformed, 1);
        assert!(catalog.colors.is_empty());
    }

    #[test]
    fn test_merge_skips_malformed_levels() {
        let doc = json!({
            "tokens": {
                "color": {
                    "broken": "not an object",
                    "brand": {
                        "flat": "#000",
                        "accent": {
                            "light": "#fff",
                            "dark": { "description": "no value" },
                            "hc": { "value": 12 }
                        }
                    }
                }
            }
        });
        let mut catalog = Catalog::empty();
        let report = merge(&mut catalog, &doc);
        assert_eq!(report, MergeReport { inserted: 1, skipped_existing: 0, skipped_malformed: 4 });
        assert_eq!(catalog.colors.get("color_brand_accent_hc").unwrap().value, "12");
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse("{ nope").is_err());
        assert!(parse("{}").is_ok());
    }
}

//! Quiz theme model and JavaScript serialization
//!
//! A theme is the `[prefix.theme]` sub-table of `quizzes.toml`. It is parsed
//! into an ordered association list of tagged values and serialized into a
//! JavaScript object-literal block that the page template embeds verbatim.

use anyhow::{Result, anyhow, bail};
use toml::Value;

/// Indentation for top-level theme fields inside the generated script block.
const FIELD_INDENT: &str = "            ";
/// Indentation for individual rank records.
const RANK_INDENT: &str = "                ";
/// Indentation for the closing brace.
const CLOSE_INDENT: &str = "        ";

/// A scoring tier: score threshold plus display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Rank {
    /// Minimum score for this tier
    pub min: i64,

    /// Display label shown to the player
    pub label: String,
}

/// A numeric theme value. Integers and floats print differently
/// (`42` vs `1.5`), so the distinction is kept through serialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{i}"),
            // Whole floats keep their decimal point (2.0, not 2)
            Number::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

/// One theme field value. A closed set: anything else in the config
/// is a malformed-theme error at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeValue {
    String(String),
    Number(Number),
    StringList(Vec<String>),
    NumberList(Vec<Number>),
    Ranks(Vec<Rank>),
}

/// An ordered theme record. Field order is the order of appearance in
/// `quizzes.toml` and is preserved through serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    fields: Vec<(String, ThemeValue)>,
}

/// Format a string as a JS single-quoted string literal.
///
/// Backslashes are escaped before quotes so the output always parses back
/// to the original string under JS string-literal rules.
pub fn js_string(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

impl Theme {
    /// Build a theme from its TOML table, validating value shapes.
    ///
    /// The table must be non-empty. `ranks` must be an array of tables with
    /// an integer `min` and a string `label`; every other field must be a
    /// string, a number, or a homogeneous list of strings or numbers.
    pub fn from_table(table: &toml::Table) -> Result<Self> {
        if table.is_empty() {
            bail!("theme table is empty");
        }

        let mut fields = Vec::with_capacity(table.len());
        for (key, value) in table {
            let parsed = if key == "ranks" {
                ThemeValue::Ranks(parse_ranks(value)?)
            } else {
                parse_value(key, value)?
            };
            fields.push((key.clone(), parsed));
        }

        Ok(Self { fields })
    }

    /// Iterate fields in configuration order.
    pub fn fields(&self) -> impl Iterator<Item = &(String, ThemeValue)> {
        self.fields.iter()
    }

    /// Serialize the theme as a JS object literal, formatted for embedding
    /// inside the page template's script block.
    ///
    /// One line per field in configuration order, each terminated with a
    /// comma except the last. `ranks` becomes a bracketed block with the
    /// `min` values padded so every `label:` starts in the same column.
    pub fn to_js(&self) -> String {
        let mut lines = vec!["{".to_string()];
        let last = self.fields.len().saturating_sub(1);

        for (i, (key, value)) in self.fields.iter().enumerate() {
            let trailing = if i < last { "," } else { "" };
            match value {
                ThemeValue::Ranks(ranks) if !ranks.is_empty() => {
                    lines.push(format!("{FIELD_INDENT}{key}: ["));
                    let width = ranks
                        .iter()
                        .map(|r| r.min.to_string().len())
                        .max()
                        .unwrap_or(0);
                    for rank in ranks {
                        let min = rank.min.to_string();
                        let padding = " ".repeat(width - min.len());
                        lines.push(format!(
                            "{RANK_INDENT}{{ min: {min},{padding} label: {} }},",
                            js_string(&rank.label)
                        ));
                    }
                    lines.push(format!("{FIELD_INDENT}]{trailing}"));
                }
                other => {
                    lines.push(format!(
                        "{FIELD_INDENT}{key}: {}{trailing}",
                        render_value(other)
                    ));
                }
            }
        }

        lines.push(format!("{CLOSE_INDENT}}}"));
        lines.join("\n")
    }
}

/// Render a single-line theme value. Empty `ranks` lists fall through to
/// here and render as `[]`, same as any other empty list.
fn render_value(value: &ThemeValue) -> String {
    match value {
        ThemeValue::String(s) => js_string(s),
        ThemeValue::Number(n) => n.to_string(),
        ThemeValue::StringList(items) => {
            let inner: Vec<String> = items.iter().map(|s| js_string(s)).collect();
            format!("[{}]", inner.join(", "))
        }
        ThemeValue::NumberList(items) => {
            let inner: Vec<String> = items.iter().map(Number::to_string).collect();
            format!("[{}]", inner.join(", "))
        }
        ThemeValue::Ranks(_) => "[]".to_string(),
    }
}

/// Parse a non-ranks theme value, rejecting anything outside the closed set.
fn parse_value(key: &str, value: &Value) -> Result<ThemeValue> {
    match value {
        Value::String(s) => Ok(ThemeValue::String(s.clone())),
        Value::Integer(i) => Ok(ThemeValue::Number(Number::Int(*i))),
        Value::Float(f) => Ok(ThemeValue::Number(Number::Float(*f))),
        Value::Array(items) => parse_list(key, items),
        other => Err(anyhow!(
            "theme field '{key}' has unsupported type: {}",
            other.type_str()
        )),
    }
}

/// Parse a homogeneous list of strings or numbers.
fn parse_list(key: &str, items: &[Value]) -> Result<ThemeValue> {
    let Some(first) = items.first() else {
        return Ok(ThemeValue::StringList(Vec::new()));
    };

    match first {
        Value::String(_) => {
            let mut strings = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => strings.push(s.clone()),
                    other => bail!(
                        "theme field '{key}' mixes strings with {}",
                        other.type_str()
                    ),
                }
            }
            Ok(ThemeValue::StringList(strings))
        }
        Value::Integer(_) | Value::Float(_) => {
            let mut numbers = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Integer(i) => numbers.push(Number::Int(*i)),
                    Value::Float(f) => numbers.push(Number::Float(*f)),
                    other => bail!(
                        "theme field '{key}' mixes numbers with {}",
                        other.type_str()
                    ),
                }
            }
            Ok(ThemeValue::NumberList(numbers))
        }
        other => Err(anyhow!(
            "theme field '{key}' has a list of unsupported type: {}",
            other.type_str()
        )),
    }
}

/// Parse the `ranks` array: each entry needs an integer `min` and a
/// string `label`.
fn parse_ranks(value: &Value) -> Result<Vec<Rank>> {
    let Value::Array(items) = value else {
        bail!("theme field 'ranks' must be an array of tables");
    };

    let mut ranks = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let Value::Table(table) = item else {
            bail!("ranks[{i}] is not a table");
        };

        let min = match table.get("min") {
            Some(Value::Integer(min)) => *min,
            Some(other) => bail!("ranks[{i}].min must be an integer, got {}", other.type_str()),
            None => bail!("ranks[{i}] is missing 'min'"),
        };

        let label = match table.get("label") {
            Some(Value::String(label)) => label.clone(),
            Some(other) => bail!(
                "ranks[{i}].label must be a string, got {}",
                other.type_str()
            ),
            None => bail!("ranks[{i}] is missing 'label'"),
        };

        ranks.push(Rank { min, label });
    }

    Ok(ranks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn theme_from(toml_src: &str) -> Theme {
        let table: toml::Table = toml::from_str(toml_src).unwrap();
        Theme::from_table(&table).unwrap()
    }

    /// Parse a JS single-quoted string literal back to its source string.
    fn unescape_js(literal: &str) -> String {
        let inner = literal
            .strip_prefix('\'')
            .and_then(|s| s.strip_suffix('\''))
            .unwrap();
        let mut out = String::new();
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                out.push(chars.next().unwrap());
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_js_string_plain() {
        assert_eq!(js_string("hello"), "'hello'");
    }

    #[test]
    fn test_js_string_escapes_quote() {
        assert_eq!(js_string("A's Quiz"), r"'A\'s Quiz'");
    }

    #[test]
    fn test_js_string_escapes_backslash_before_quote() {
        // A backslash followed by a quote must not collapse into an
        // escaped quote
        assert_eq!(js_string(r"a\'b"), r"'a\\\'b'");
    }

    #[test]
    fn test_simple_theme_output() {
        let theme = theme_from(
            r##"
title = "Greek Myth"
accent = "#c9a227"
question_count = 20
"##,
        );

        let expected = [
            "{",
            "            title: 'Greek Myth',",
            "            accent: '#c9a227',",
            "            question_count: 20",
            "        }",
        ]
        .join("\n");
        assert_eq!(theme.to_js(), expected);
    }

    #[test]
    fn test_spec_shape_with_ranks() {
        let theme = theme_from(
            r#"
title = "A's Quiz"
tags = ["x", "y"]

[[ranks]]
min = 0
label = "Novice"

[[ranks]]
min = 50
label = "Pro"
"#,
        );

        let expected = [
            "{",
            r"            title: 'A\'s Quiz',",
            "            tags: ['x', 'y'],",
            "            ranks: [",
            "                { min: 0,  label: 'Novice' },",
            "                { min: 50, label: 'Pro' },",
            "            ]",
            "        }",
        ]
        .join("\n");
        assert_eq!(theme.to_js(), expected);
    }

    #[test]
    fn test_rank_labels_align_across_digit_lengths() {
        let theme = theme_from(
            r#"
[[ranks]]
min = 0
label = "a"
[[ranks]]
min = 10
label = "b"
[[ranks]]
min = 100
label = "c"
"#,
        );

        let columns: Vec<usize> = theme
            .to_js()
            .lines()
            .filter(|l| l.contains("label:"))
            .map(|l| l.find("label:").unwrap())
            .collect();
        assert_eq!(columns.len(), 3);
        assert!(columns.iter().all(|&c| c == columns[0]));
    }

    #[test]
    fn test_field_order_matches_input_order() {
        let theme = theme_from("zebra = 1\nalpha = 2\nmike = 3\n");
        let keys: Vec<&str> = theme.fields().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zebra", "alpha", "mike"]);

        let body = theme.to_js();
        let z = body.find("zebra").unwrap();
        let a = body.find("alpha").unwrap();
        let m = body.find("mike").unwrap();
        assert!(z < a && a < m);
    }

    #[test]
    fn test_one_line_per_field_without_ranks() {
        let theme = theme_from("a = \"x\"\nb = 2\nc = [1, 2]\n");
        let js = theme.to_js();
        let lines: Vec<&str> = js.lines().collect();
        // opening brace + 3 fields + closing brace
        assert_eq!(lines.len(), 5);
        assert!(lines[1].ends_with(','));
        assert!(lines[2].ends_with(','));
        assert!(!lines[3].ends_with(','));
    }

    #[test]
    fn test_number_list_and_float_formatting() {
        let theme = theme_from("sizes = [1, 2.5, 3.0]\n");
        assert!(theme.to_js().contains("sizes: [1, 2.5, 3.0]"));
    }

    #[test]
    fn test_empty_list_renders_empty_brackets() {
        let theme = theme_from("tags = []\n");
        assert!(theme.to_js().contains("tags: []"));
    }

    #[test]
    fn test_empty_ranks_renders_empty_brackets() {
        let theme = theme_from("title = \"t\"\nranks = []\n");
        let js = theme.to_js();
        assert!(js.contains("ranks: []"));
        // Still a single line, not a bracketed block
        assert_eq!(js.lines().count(), 4);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let theme = theme_from(
            r#"
title = "t"
tags = ["a", "b"]
[[ranks]]
min = 3
label = "x"
"#,
        );
        assert_eq!(theme.to_js(), theme.to_js());
    }

    #[test]
    fn test_empty_theme_rejected() {
        let table: toml::Table = toml::from_str("").unwrap();
        assert!(Theme::from_table(&table).is_err());
    }

    #[test]
    fn test_rank_missing_min_rejected() {
        let table: toml::Table = toml::from_str(
            r#"
[[ranks]]
label = "x"
"#,
        )
        .unwrap();
        let err = Theme::from_table(&table).unwrap_err();
        assert!(err.to_string().contains("missing 'min'"));
    }

    #[test]
    fn test_rank_missing_label_rejected() {
        let table: toml::Table = toml::from_str(
            r#"
[[ranks]]
min = 5
"#,
        )
        .unwrap();
        let err = Theme::from_table(&table).unwrap_err();
        assert!(err.to_string().contains("missing 'label'"));
    }

    #[test]
    fn test_rank_float_min_rejected() {
        let table: toml::Table = toml::from_str(
            r#"
[[ranks]]
min = 1.5
label = "x"
"#,
        )
        .unwrap();
        assert!(Theme::from_table(&table).is_err());
    }

    #[test]
    fn test_mixed_list_rejected() {
        let table: toml::Table = toml::from_str("bad = [\"a\", 1]\n").unwrap();
        let err = Theme::from_table(&table).unwrap_err();
        assert!(err.to_string().contains("mixes"));
    }

    #[test]
    fn test_boolean_field_rejected() {
        let table: toml::Table = toml::from_str("flag = true\n").unwrap();
        let err = Theme::from_table(&table).unwrap_err();
        assert!(err.to_string().contains("unsupported type"));
    }

    proptest! {
        #[test]
        fn prop_js_string_round_trips(s in ".*") {
            let literal = js_string(&s);
            prop_assert_eq!(unescape_js(&literal), s);
        }

        #[test]
        fn prop_rank_labels_always_align(
            mins in proptest::collection::vec(0i64..1_000_000, 1..10)
        ) {
            let ranks: Vec<Rank> = mins
                .iter()
                .map(|&min| Rank { min, label: "r".to_string() })
                .collect();
            let theme = Theme {
                fields: vec![("ranks".to_string(), ThemeValue::Ranks(ranks))],
            };
            let columns: Vec<usize> = theme
                .to_js()
                .lines()
                .filter(|l| l.contains("label:"))
                .map(|l| l.find("label:").unwrap())
                .collect();
            prop_assert_eq!(columns.len(), mins.len());
            prop_assert!(columns.iter().all(|&c| c == columns[0]));
        }
    }
}

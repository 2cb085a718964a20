//! # JSON Templates
//!
//! A template is a JSON document with the page format, an optional list of
//! placeholder names and the template lines:
//!
//! ```json
//! {
//!   "pageFormat": { "pageLength": 30, "pageWidth": 80, "typeface": "roman" },
//!   "placeholder": ["id", "nickname"],
//!   "template": ["Your id is ${id}, Mr. ${nickname}."]
//! }
//! ```
//!
//! `template` is either a plain list of lines, or an object with `header`,
//! `detail` and `footer` lists. Header and footer are repeated on every page
//! and may use the reserved `${pageNumber}` placeholder.
//!
//! ```
//! use std::collections::HashMap;
//! use estampa::template::Template;
//!
//! let template = Template::from_json(r#"{"template": ["Hello ${name}"]}"#)?;
//! assert_eq!(template.placeholders(), vec!["name"]);
//!
//! let values = HashMap::from([("name".to_string(), "World".to_string())]);
//! let report = template.fill(&values)?;
//! assert_eq!(report.pages()[0].get(1)?.render(), "Hello World");
//! # Ok::<(), estampa::EstampaError>(())
//! ```

mod scan;

pub use scan::{Segment, Segments, find_placeholders, interpolate, normalize, segments};

use std::collections::HashMap;

use serde::Deserialize;

use crate::EstampaError;
use crate::protocol::format::PageFormat;
use crate::report::{PAGE_NUMBER, Report};

// ============================================================================
// JSON SCHEMA
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateDocument {
    #[serde(default)]
    page_format: Option<serde_json::Value>,
    #[serde(default)]
    placeholder: Vec<String>,
    template: TemplateBody,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TemplateBody {
    Lines(Vec<String>),
    Sections {
        #[serde(default)]
        header: Vec<String>,
        #[serde(default)]
        detail: Vec<String>,
        #[serde(default)]
        footer: Vec<String>,
    },
}

// ============================================================================
// TEMPLATE
// ============================================================================

/// A parsed template, ready to be filled with values.
#[derive(Debug, Clone, Default)]
pub struct Template {
    original_text: String,
    pub page_format: PageFormat,
    declared_placeholders: Vec<String>,
    pub header: Vec<String>,
    pub detail: Vec<String>,
    pub footer: Vec<String>,
}

impl Template {
    /// Parse a JSON template.
    ///
    /// # Errors
    ///
    /// `Template` if the text is not a valid template document, `Validation`
    /// if a page format setting names an unknown value.
    pub fn from_json(text: &str) -> Result<Self, EstampaError> {
        let doc: TemplateDocument = serde_json::from_str(text)?;
        let page_format = match doc.page_format {
            Some(value) => PageFormat::from_json_value(value)?,
            None => PageFormat::default(),
        };
        let (header, detail, footer) = match doc.template {
            TemplateBody::Lines(lines) => (Vec::new(), lines, Vec::new()),
            TemplateBody::Sections {
                header,
                detail,
                footer,
            } => (header, detail, footer),
        };
        log::debug!(
            "parsed template: {} header, {} detail, {} footer lines",
            header.len(),
            detail.len(),
            footer.len()
        );

        Ok(Self {
            original_text: text.to_string(),
            page_format,
            declared_placeholders: doc.placeholder,
            header,
            detail,
            footer,
        })
    }

    /// Template made of detail lines only, with the default page format.
    pub fn from_lines<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            detail: lines.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// The JSON text this template was parsed from (empty for `from_lines`).
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Detail lines joined with `\n`, each line terminated.
    pub fn parsed_text(&self) -> String {
        normalize(&self.detail)
    }

    /// Placeholder names the template needs values for.
    ///
    /// The declared `placeholder` list wins when present. Otherwise every
    /// distinct name found in header, detail and footer, in order of first
    /// appearance, except the reserved page number.
    pub fn placeholders(&self) -> Vec<String> {
        if !self.declared_placeholders.is_empty() {
            return self.declared_placeholders.clone();
        }

        let mut names: Vec<String> = Vec::new();
        for line in self.header.iter().chain(&self.detail).chain(&self.footer) {
            for name in find_placeholders(line) {
                if name != PAGE_NUMBER && !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute `values` into every line and paginate the result.
    ///
    /// Detail lines are filled here. Header and footer are filled once per
    /// page, together with `${pageNumber}`. Missing values are not an error:
    /// their placeholders stay in the text.
    ///
    /// # Errors
    ///
    /// `Capacity` if header and footer leave no room for content on a page.
    pub fn fill(&self, values: &HashMap<String, String>) -> Result<Report, EstampaError> {
        for name in self.placeholders() {
            if !values.contains_key(&name) {
                log::warn!("no value for placeholder '{}'", name);
            }
        }

        let detail = self
            .detail
            .iter()
            .map(|line| interpolate(line, values))
            .collect();
        Report::paginate_with_values(
            self.page_format.clone(),
            self.header.clone(),
            detail,
            self.footer.clone(),
            values.clone(),
        )
    }
}

/// Read placeholder values from a flat JSON object.
///
/// Strings are used as-is, other scalars by their JSON text, `null` as an
/// empty string.
///
/// # Errors
///
/// `Template` if the text is not a JSON object.
pub fn values_from_json(text: &str) -> Result<HashMap<String, String>, EstampaError> {
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(text)?;
    Ok(map
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            (key, text)
        })
        .collect())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::format::Typeface;

    #[test]
    fn test_parse_lines() {
        let json = r#"{"template": ["This is the first line", "This is the second line"]}"#;
        let template = Template::from_json(json).unwrap();
        assert_eq!(template.original_text(), json);
        assert_eq!(
            template.parsed_text(),
            "This is the first line\nThis is the second line\n"
        );
        assert!(template.header.is_empty());
        assert_eq!(template.page_format, PageFormat::default());
    }

    #[test]
    fn test_parse_sections_and_format() {
        let json = r#"{
            "pageFormat": {"pageLength": 20, "typeface": "sans-serif"},
            "template": {
                "header": ["INVOICE ${invoiceNo}", "page ${pageNumber}"],
                "detail": ["${item}"],
                "footer": ["--"]
            }
        }"#;
        let template = Template::from_json(json).unwrap();
        assert_eq!(template.page_format.page_length, Some(20));
        assert_eq!(template.page_format.typeface, Some(Typeface::SansSerif));
        assert_eq!(template.header.len(), 2);
        assert_eq!(template.footer, vec!["--"]);
        assert_eq!(template.placeholders(), vec!["invoiceNo", "item"]);
    }

    #[test]
    fn test_declared_placeholders_win() {
        let json = r#"{
            "placeholder": ["id", "nickname"],
            "template": ["Your id is ${id}, Mr. ${nickname}. ${extra}"]
        }"#;
        let template = Template::from_json(json).unwrap();
        assert_eq!(template.placeholders(), vec!["id", "nickname"]);
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            Template::from_json("not json"),
            Err(EstampaError::Template(_))
        ));
        assert!(matches!(
            Template::from_json(r#"{"placeholder": []}"#),
            Err(EstampaError::Template(_))
        ));
        assert!(matches!(
            Template::from_json(r#"{"pageFormat": {"lineSpacing": "1/5"}, "template": []}"#),
            Err(EstampaError::Validation(_))
        ));
        assert!(matches!(
            Template::from_json(r#"{"pageFormat": {"pageLength": -1}, "template": []}"#),
            Err(EstampaError::Template(_))
        ));
    }

    #[test]
    fn test_fill() {
        let template = Template::from_lines(["Your id is ${id}, Mr. ${nickname}."]);
        let values = HashMap::from([
            ("id".to_string(), "42".to_string()),
            ("nickname".to_string(), "Smith".to_string()),
        ]);
        let report = template.fill(&values).unwrap();
        assert_eq!(report.pages().len(), 1);
        assert_eq!(
            report.pages()[0].get(1).unwrap().render(),
            "Your id is 42, Mr. Smith."
        );
    }

    #[test]
    fn test_fill_with_missing_values_keeps_placeholder() {
        let template = Template::from_lines(["${a}-${b}"]);
        let values = HashMap::from([("a".to_string(), "x".to_string())]);
        let report = template.fill(&values).unwrap();
        assert_eq!(report.pages()[0].get(1).unwrap().render(), "x-${b}");
    }

    #[test]
    fn test_fill_substitutes_header_and_footer_once() {
        let json = r#"{
            "template": {
                "header": ["Hi ${who}"],
                "detail": ["${body}"],
                "footer": ["Page ${pageNumber}"]
            }
        }"#;
        let template = Template::from_json(json).unwrap();
        let values = HashMap::from([
            ("who".to_string(), "${pageNumber}".to_string()),
            ("body".to_string(), "${who}".to_string()),
        ]);
        let report = template.fill(&values).unwrap();
        let page = &report.pages()[0];
        assert_eq!(page.get(1).unwrap().render(), "Hi ${pageNumber}");
        assert_eq!(page.get(2).unwrap().render(), "${who}");
        assert_eq!(page.get(3).unwrap().render(), "Page 1");
    }

    #[test]
    fn test_fill_page_number_is_reserved() {
        let json = r#"{"template": {"header": ["p${pageNumber}"], "detail": ["x"]}}"#;
        let template = Template::from_json(json).unwrap();
        let values = HashMap::from([("pageNumber".to_string(), "99".to_string())]);
        let report = template.fill(&values).unwrap();
        assert_eq!(report.pages()[0].get(1).unwrap().render(), "p1");
    }

    #[test]
    fn test_values_from_json() {
        let values =
            values_from_json(r#"{"name": "Ann", "qty": 3, "paid": true, "note": null}"#).unwrap();
        assert_eq!(values["name"], "Ann");
        assert_eq!(values["qty"], "3");
        assert_eq!(values["paid"], "true");
        assert_eq!(values["note"], "");
        assert!(values_from_json("[1, 2]").is_err());
    }
}

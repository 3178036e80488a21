//! Record types exchanged with the host. Field names follow the host's JSON
//! conventions so datasets can cross the boundary unchanged.

use serde::{Deserialize, Serialize};

/// One labelled value of a proportional (donut) dataset. Order of a dataset
/// is meaningful and preserved all the way into the rendered chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub label: String,
    pub value: u64,
    /// Extra CSS class attached to the rendered slice, e.g. `male`.
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    /// Explicit fill color. When absent the slice is styled via CSS only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

impl ChartDatum {
    pub fn new<T: Into<String>>(label: T, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
            css_class: None,
            fill: None,
        }
    }

    pub fn with_class<T: Into<String>>(mut self, css_class: T) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    pub fn with_fill<T: Into<String>>(mut self, fill: T) -> Self {
        self.fill = Some(fill.into());
        self
    }
}

/// Per-country aggregate, joined against the world geometry by the
/// two-letter ISO code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDatum {
    /// Two-letter ISO 3166-1 code, upper case.
    pub country_code: String,
    /// Localized display name supplied by the host.
    pub label: String,
    pub count: u64,
}

impl CountryDatum {
    pub fn new<T: Into<String>>(country_code: T, label: T, count: u64) -> Self {
        Self {
            country_code: country_code.into(),
            label: label.into(),
            count,
        }
    }
}

/// A name (surname or given name) with its number of bearers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCount {
    pub name: String,
    pub count: u64,
}

impl NameCount {
    pub fn new<T: Into<String>>(name: T, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_datum_serializes_with_host_field_names() {
        let datum = ChartDatum::new("Male", 42).with_class("male");
        let json = serde_json::to_value(&datum).unwrap();

        assert_eq!(json["label"], "Male");
        assert_eq!(json["value"], 42);
        assert_eq!(json["class"], "male");
        assert!(json.get("fill").is_none());
    }

    #[test]
    fn country_datum_uses_camel_case() {
        let datum = CountryDatum::new("DE", "Germany", 7);
        let json = serde_json::to_value(&datum).unwrap();

        assert_eq!(json["countryCode"], "DE");
        assert_eq!(json["count"], 7);
    }

    #[test]
    fn chart_datum_round_trips_optional_fields() {
        let raw = r##"{"label":"Living","value":3,"class":"living","fill":"#84beff"}"##;
        let datum: ChartDatum = serde_json::from_str(raw).unwrap();

        assert_eq!(datum.css_class.as_deref(), Some("living"));
        assert_eq!(datum.fill.as_deref(), Some("#84beff"));
    }
}

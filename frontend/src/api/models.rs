//! Records as the backend returns them. Every field defaults, so older or
//! partial rows still decode.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::cases::{CaseStudy, ComparisonPoint, Metric, TrendPoint};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingRecord {
    pub id: u64,
    pub key: String,
    pub value: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentRecord {
    pub id: u64,
    pub section: String,
    pub key: String,
    pub locale: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricRecord {
    pub id: u64,
    pub label: String,
    pub value: String,
    pub change: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplementationRecord {
    pub id: u64,
    pub step: String,
    pub sort_order: i32,
}

/// `data` is an array of trend points for `"trend"` charts and of
/// before/after pairs for `"comparison"` charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartRecord {
    pub id: u64,
    pub chart_type: String,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseRecord {
    pub id: u64,
    pub slug: String,
    pub locale: String,
    pub company: String,
    pub title: String,
    pub category: String,
    pub image: String,
    pub duration: String,
    pub summary: String,
    pub challenge: String,
    pub solution: String,
    pub results_description: String,
    pub published: bool,
    pub metrics: Vec<MetricRecord>,
    pub implementations: Vec<ImplementationRecord>,
    pub charts: Vec<ChartRecord>,
}

impl ShowcaseRecord {
    pub fn into_case_study(self) -> CaseStudy {
        let mut metrics = self.metrics;
        metrics.sort_by_key(|m| m.sort_order);
        let mut implementations = self.implementations;
        implementations.sort_by_key(|i| i.sort_order);

        let chart = |kind: &str| self.charts.iter().find(|c| c.chart_type == kind).map(|c| c.data.clone());
        let trend = chart("trend").and_then(|data| serde_json::from_value::<Vec<TrendPoint>>(data).ok());
        let comparison =
            chart("comparison").and_then(|data| serde_json::from_value::<Vec<ComparisonPoint>>(data).ok());

        let image = if self.image.is_empty() { format!("/cases/{}.svg", self.slug) } else { self.image };

        CaseStudy {
            slug: self.slug,
            company: self.company,
            title: self.title,
            category: self.category,
            image,
            duration: self.duration,
            summary: self.summary,
            challenge: self.challenge,
            solution: self.solution,
            results_description: self.results_description,
            implementation: implementations.into_iter().map(|i| i.step).collect(),
            metrics: metrics
                .into_iter()
                .map(|m| Metric { label: m.label, value: m.value, change: m.change })
                .collect(),
            trend,
            comparison,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub revenue: String,
    pub business_type: String,
    pub message: String,
    pub read: bool,
    pub created_at: String,
}

impl ContactRecord {
    /// `created_at` as `YYYY-MM-DD HH:MM`, or verbatim when it is not a
    /// recognised timestamp.
    pub fn received_at(&self) -> String {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&self.created_at) {
            return parsed.format("%Y-%m-%d %H:%M").to_string();
        }
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%d %H:%M:%S") {
            return parsed.format("%Y-%m-%d %H:%M").to_string();
        }
        self.created_at.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_showcase_decodes() {
        let record: ShowcaseRecord = serde_json::from_str(r#"{"slug":"acme","company":"Acme"}"#).unwrap();
        let case = record.into_case_study();
        assert_eq!(case.slug, "acme");
        assert_eq!(case.image, "/cases/acme.svg");
        assert!(case.metrics.is_empty());
        assert!(!case.has_charts());
    }

    #[test]
    fn showcase_children_are_ordered_and_charts_typed() {
        let json = r#"{
            "slug": "adidas",
            "metrics": [
                {"label": "B", "value": "2", "change": "-2%", "sort_order": 2},
                {"label": "A", "value": "1", "change": "+1%", "sort_order": 1}
            ],
            "implementations": [
                {"step": "second", "sort_order": 2},
                {"step": "first", "sort_order": 1}
            ],
            "charts": [
                {"chart_type": "trend", "data": [{"period": "Jan", "value": 65}]},
                {"chart_type": "comparison", "data": [{"name": "Stock", "before": 100, "after": 53}]},
                {"chart_type": "pie", "data": 3}
            ]
        }"#;
        let case = serde_json::from_str::<ShowcaseRecord>(json).unwrap().into_case_study();
        assert_eq!(case.metrics[0].label, "A");
        assert_eq!(case.implementation, vec!["first".to_string(), "second".to_string()]);
        assert_eq!(case.trend, Some(vec![TrendPoint { period: "Jan".into(), value: 65.0 }]));
        assert_eq!(
            case.comparison,
            Some(vec![ComparisonPoint { name: "Stock".into(), before: 100.0, after: 53.0 }])
        );
    }

    #[test]
    fn malformed_chart_data_is_dropped() {
        let json = r#"{"charts": [{"chart_type": "trend", "data": {"oops": true}}]}"#;
        let case = serde_json::from_str::<ShowcaseRecord>(json).unwrap().into_case_study();
        assert_eq!(case.trend, None);
    }

    #[test]
    fn contact_timestamps_are_shortened() {
        let mut contact = ContactRecord { created_at: "2026-03-04T10:20:30Z".into(), ..Default::default() };
        assert_eq!(contact.received_at(), "2026-03-04 10:20");
        contact.created_at = "2026-03-04 10:20:30".into();
        assert_eq!(contact.received_at(), "2026-03-04 10:20");
        contact.created_at = "yesterday".into();
        assert_eq!(contact.received_at(), "yesterday");
    }
}

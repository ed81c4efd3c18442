use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    /// Signed delta as displayed, e.g. `+38%` or `-47%`.
    pub change: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

impl Metric {
    pub fn new(label: &str, value: &str, change: &str) -> Self {
        Self { label: label.to_string(), value: value.to_string(), change: change.to_string() }
    }

    pub fn direction(&self) -> Direction {
        match self.change.trim_start().chars().next() {
            Some('+') => Direction::Up,
            Some('-') => Direction::Down,
            _ => Direction::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub period: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub name: String,
    pub before: f64,
    pub after: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub slug: String,
    pub company: String,
    pub title: String,
    pub category: String,
    pub image: String,
    pub duration: String,
    pub summary: String,
    pub challenge: String,
    pub solution: String,
    pub results_description: String,
    pub implementation: Vec<String>,
    pub metrics: Vec<Metric>,
    pub trend: Option<Vec<TrendPoint>>,
    pub comparison: Option<Vec<ComparisonPoint>>,
}

impl CaseStudy {
    pub fn has_charts(&self) -> bool {
        self.trend.as_ref().map_or(false, |t| !t.is_empty())
            || self.comparison.as_ref().map_or(false, |c| !c.is_empty())
    }

    /// Metrics shown on summary cards.
    pub fn headline_metrics(&self) -> &[Metric] {
        &self.metrics[..self.metrics.len().min(2)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_sign_drives_direction() {
        assert_eq!(Metric::new("Accuracy", "92%", "+38%").direction(), Direction::Up);
        assert_eq!(Metric::new("Stock", "47%", "-47%").direction(), Direction::Down);
        assert_eq!(Metric::new("Ticket", "3x", "3x").direction(), Direction::Neutral);
        assert_eq!(Metric::new("Empty", "", "").direction(), Direction::Neutral);
    }
}

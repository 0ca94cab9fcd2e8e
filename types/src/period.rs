use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// The active payroll period as returned by `periods/current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub period_name: String,
    pub period_start: Date,
    pub period_end: Date,
}

impl Period {
    /// Date range as shown next to the period name, e.g. `01/06/2025 - 15/06/2025`.
    pub fn date_range(&self) -> String {
        format!(
            "{} - {}",
            self.period_start.strftime("%d/%m/%Y"),
            self.period_end.strftime("%d/%m/%Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_shape_and_formats_range() {
        let period: Period = serde_json::from_str(
            r#"{
                "period_name": "Quincena 11",
                "period_start": "2025-06-01",
                "period_end": "2025-06-15"
            }"#,
        )
        .unwrap();
        assert_eq!(period.period_name, "Quincena 11");
        assert_eq!(period.date_range(), "01/06/2025 - 15/06/2025");
    }
}

//! Stock-health classification into ordered status bands.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StockwatchError};
use crate::project::NormalizedRecord;

/// A named percentage range: `[lower_pct, upper_pct)`, upper `None` meaning
/// unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBand {
    /// Band name shown by the render layer.
    pub name: String,
    /// Inclusive lower bound, in percent.
    pub lower_pct: f64,
    /// Exclusive upper bound, in percent; `None` for the top band.
    pub upper_pct: Option<f64>,
    /// Color token for the render layer.
    pub color: String,
}

impl StatusBand {
    /// Create a bounded band.
    pub fn new(name: impl Into<String>, lower_pct: f64, upper_pct: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower_pct,
            upper_pct: Some(upper_pct),
            color: color.into(),
        }
    }

    /// Create the unbounded top band.
    pub fn open(name: impl Into<String>, lower_pct: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower_pct,
            upper_pct: None,
            color: color.into(),
        }
    }

    /// Half-open containment check.
    pub fn contains(&self, ratio_pct: f64) -> bool {
        ratio_pct >= self.lower_pct && self.upper_pct.map_or(true, |upper| ratio_pct < upper)
    }
}

/// An ordered band sequence, validated to partition `[0, +∞)` with no gaps
/// and no overlaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandSet {
    bands: Vec<StatusBand>,
}

impl BandSet {
    /// Validate and build a band set.
    ///
    /// The sequence must start at 0, each band's upper bound must equal the
    /// next band's lower bound, and only the last band may be unbounded.
    pub fn new(bands: Vec<StatusBand>) -> Result<Self> {
        if bands.is_empty() {
            return Err(StockwatchError::Config(
                "band set must contain at least one band".to_string(),
            ));
        }
        if bands[0].lower_pct != 0.0 {
            return Err(StockwatchError::Config(format!(
                "first band '{}' must start at 0%, starts at {}%",
                bands[0].name, bands[0].lower_pct
            )));
        }
        for pair in bands.windows(2) {
            let upper = pair[0].upper_pct.ok_or_else(|| {
                StockwatchError::Config(format!(
                    "band '{}' is unbounded but is not the last band",
                    pair[0].name
                ))
            })?;
            if upper <= pair[0].lower_pct {
                return Err(StockwatchError::Config(format!(
                    "band '{}' has an empty range",
                    pair[0].name
                )));
            }
            if pair[1].lower_pct != upper {
                return Err(StockwatchError::Config(format!(
                    "gap or overlap between bands '{}' and '{}'",
                    pair[0].name, pair[1].name
                )));
            }
        }
        let last = bands.last().expect("checked non-empty");
        if last.upper_pct.is_some() {
            return Err(StockwatchError::Config(format!(
                "last band '{}' must be unbounded",
                last.name
            )));
        }
        Ok(Self { bands })
    }

    /// The stock-level scheme used by the inventory summary pages:
    /// Critical/Low/Good/Excess against a maximum-level reference.
    pub fn stock_levels() -> Self {
        Self::new(vec![
            StatusBand::new("Critical", 0.0, 33.0, "red"),
            StatusBand::new("Low", 33.0, 66.0, "amber"),
            StatusBand::new("Good", 66.0, 100.0, "emerald"),
            StatusBand::open("Excess", 100.0, "purple"),
        ])
        .expect("static band set is well-formed")
    }

    /// The demand-cover scheme used by the finished-goods table: stock
    /// against pending sales orders.
    pub fn demand_cover() -> Self {
        Self::new(vec![
            StatusBand::new("Insufficient", 0.0, 80.0, "red"),
            StatusBand::new("Low", 80.0, 100.0, "amber"),
            StatusBand::new("Adequate", 100.0, 120.0, "blue"),
            StatusBand::open("Sufficient", 120.0, "emerald"),
        ])
        .expect("static band set is well-formed")
    }

    /// The bands in order.
    pub fn bands(&self) -> &[StatusBand] {
        &self.bands
    }

    /// The lowest band.
    pub fn first(&self) -> &StatusBand {
        &self.bands[0]
    }

    /// Find the band containing a ratio.
    ///
    /// Ratios below zero clamp to the first band; by the partition
    /// invariant everything else lands in exactly one band.
    pub fn band_for(&self, ratio_pct: f64) -> &StatusBand {
        self.bands
            .iter()
            .find(|band| band.contains(ratio_pct))
            .unwrap_or_else(|| {
                if ratio_pct < self.bands[0].lower_pct {
                    self.first()
                } else {
                    self.bands.last().expect("band set is non-empty")
                }
            })
    }

    /// Classify one record by its current/reference ratio.
    pub fn classify(
        &self,
        record: &NormalizedRecord,
        current_field: &str,
        reference_field: &str,
    ) -> &StatusBand {
        self.band_for(stock_ratio_pct(record, current_field, reference_field))
    }
}

/// Ratio of current to reference stock, in percent.
///
/// The reference is floored at 1: a zero reference means "reference of 1",
/// never a division by zero, never "treat as 100%". Text field values
/// coerce through the shared numeric normalizer, so pass-through datasets
/// classify the same way positional ones do.
pub fn stock_ratio_pct(
    record: &NormalizedRecord,
    current_field: &str,
    reference_field: &str,
) -> f64 {
    let current = field_number(record, current_field);
    let reference = field_number(record, reference_field);
    (current / reference.max(1.0)) * 100.0
}

fn field_number(record: &NormalizedRecord, field: &str) -> f64 {
    record
        .get(field)
        .map(|value| value.coerce_number())
        .unwrap_or(0.0)
}

/// Per-band tally over a record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BandTally {
    /// Number of records in the band.
    pub count: usize,
    /// Share of the whole record set, 0 when the set is empty.
    pub percent_of_total: f64,
}

/// Count records per band, in band order.
///
/// Every band appears in the output even at zero, and an empty record set
/// yields zero percentages rather than NaN.
pub fn aggregate_by_band(
    records: &[NormalizedRecord],
    current_field: &str,
    reference_field: &str,
    bands: &BandSet,
) -> IndexMap<String, BandTally> {
    let mut tallies: IndexMap<String, BandTally> = bands
        .bands()
        .iter()
        .map(|band| (band.name.clone(), BandTally::default()))
        .collect();

    for record in records {
        let band = bands.classify(record, current_field, reference_field);
        if let Some(tally) = tallies.get_mut(&band.name) {
            tally.count += 1;
        }
    }

    let total = records.len();
    if total > 0 {
        for tally in tallies.values_mut() {
            tally.percent_of_total = (tally.count as f64 / total as f64) * 100.0;
        }
    }

    tallies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::FieldValue;

    fn record(current: f64, reference: f64) -> NormalizedRecord {
        let mut r = NormalizedRecord::new();
        r.insert("name".to_string(), FieldValue::Text("Steel".to_string()));
        r.insert("current".to_string(), FieldValue::Number(current));
        r.insert("reference".to_string(), FieldValue::Number(reference));
        r
    }

    #[test]
    fn test_zero_over_zero_is_critical() {
        let bands = BandSet::stock_levels();
        let band = bands.classify(&record(0.0, 0.0), "current", "reference");
        assert_eq!(band.name, "Critical");
    }

    #[test]
    fn test_boundaries_are_half_open() {
        let bands = BandSet::stock_levels();
        assert_eq!(bands.band_for(32.999).name, "Critical");
        assert_eq!(bands.band_for(33.0).name, "Low");
        assert_eq!(bands.band_for(66.0).name, "Good");
        assert_eq!(bands.band_for(100.0).name, "Excess");
        assert_eq!(bands.band_for(450.0).name, "Excess");
    }

    #[test]
    fn test_seventy_five_percent_depends_on_scheme() {
        let r = record(150.0, 200.0);
        assert_eq!(
            BandSet::stock_levels().classify(&r, "current", "reference").name,
            "Good"
        );
        assert_eq!(
            BandSet::demand_cover().classify(&r, "current", "reference").name,
            "Insufficient"
        );
    }

    #[test]
    fn test_zero_reference_floors_to_one() {
        let bands = BandSet::stock_levels();
        // 50 / max(1, 0) = 5000%, not infinity.
        let band = bands.classify(&record(50.0, 0.0), "current", "reference");
        assert_eq!(band.name, "Excess");
        assert!(stock_ratio_pct(&record(50.0, 0.0), "current", "reference").is_finite());
    }

    #[test]
    fn test_negative_ratio_clamps_to_first_band() {
        let bands = BandSet::stock_levels();
        assert_eq!(bands.band_for(-10.0).name, "Critical");
    }

    #[test]
    fn test_missing_fields_classify_as_zero() {
        let bands = BandSet::stock_levels();
        let band = bands.classify(&NormalizedRecord::new(), "current", "reference");
        assert_eq!(band.name, "Critical");
    }

    #[test]
    fn test_text_fields_coerce_before_classifying() {
        let mut r = NormalizedRecord::new();
        r.insert("current".to_string(), FieldValue::Text("150".to_string()));
        r.insert("reference".to_string(), FieldValue::Text("200".to_string()));

        let bands = BandSet::stock_levels();
        let band = bands.classify(&r, "current", "reference");
        assert_eq!(band.name, "Good");
    }

    #[test]
    fn test_band_set_rejects_gap() {
        let err = BandSet::new(vec![
            StatusBand::new("a", 0.0, 30.0, "red"),
            StatusBand::open("b", 40.0, "green"),
        ])
        .unwrap_err();
        assert!(matches!(err, StockwatchError::Config(_)));
    }

    #[test]
    fn test_band_set_rejects_bounded_top() {
        let err = BandSet::new(vec![
            StatusBand::new("a", 0.0, 50.0, "red"),
            StatusBand::new("b", 50.0, 100.0, "green"),
        ])
        .unwrap_err();
        assert!(matches!(err, StockwatchError::Config(_)));
    }

    #[test]
    fn test_band_set_rejects_nonzero_start() {
        let err = BandSet::new(vec![StatusBand::open("a", 10.0, "red")]).unwrap_err();
        assert!(matches!(err, StockwatchError::Config(_)));
    }

    #[test]
    fn test_aggregate_counts_and_percentages() {
        let bands = BandSet::stock_levels();
        let records = vec![
            record(10.0, 100.0),  // 10% Critical
            record(50.0, 100.0),  // 50% Low
            record(80.0, 100.0),  // 80% Good
            record(120.0, 100.0), // 120% Excess
        ];
        let tallies = aggregate_by_band(&records, "current", "reference", &bands);

        assert_eq!(tallies["Critical"].count, 1);
        assert_eq!(tallies["Low"].count, 1);
        assert_eq!(tallies["Good"].count, 1);
        assert_eq!(tallies["Excess"].count, 1);
        assert_eq!(tallies["Low"].percent_of_total, 25.0);
    }

    #[test]
    fn test_aggregate_empty_has_no_nan() {
        let bands = BandSet::demand_cover();
        let tallies = aggregate_by_band(&[], "current", "reference", &bands);

        assert_eq!(tallies.len(), 4);
        for tally in tallies.values() {
            assert_eq!(tally.count, 0);
            assert_eq!(tally.percent_of_total, 0.0);
        }
    }

    #[test]
    fn test_aggregate_preserves_band_order() {
        let bands = BandSet::stock_levels();
        let tallies = aggregate_by_band(&[], "current", "reference", &bands);
        let names: Vec<&str> = tallies.keys().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["Critical", "Low", "Good", "Excess"]);
    }
}

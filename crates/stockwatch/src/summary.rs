//! Corpus-level rollups over normalized records.

use crate::project::NormalizedRecord;

/// Sum a numeric field across all records.
///
/// Text values coerce through the shared numeric normalizer; missing
/// fields contribute 0, and the sum of an empty set is 0.
pub fn sum(records: &[NormalizedRecord], field: &str) -> f64 {
    records
        .iter()
        .map(|record| {
            record
                .get(field)
                .map(|value| value.coerce_number())
                .unwrap_or(0.0)
        })
        .sum()
}

/// Count records matching a predicate.
pub fn count_where<F>(records: &[NormalizedRecord], predicate: F) -> usize
where
    F: Fn(&NormalizedRecord) -> bool,
{
    records.iter().filter(|record| predicate(record)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::stock_ratio_pct;
    use crate::project::FieldValue;

    fn record(value: f64, current: f64, max: f64) -> NormalizedRecord {
        let mut r = NormalizedRecord::new();
        r.insert("stock_value".to_string(), FieldValue::Number(value));
        r.insert("current_level".to_string(), FieldValue::Number(current));
        r.insert("max_level".to_string(), FieldValue::Number(max));
        r
    }

    #[test]
    fn test_sum_field() {
        let records = vec![record(75000.0, 150.0, 200.0), record(45000.0, 80.0, 120.0)];
        assert_eq!(sum(&records, "stock_value"), 120000.0);
    }

    #[test]
    fn test_sum_empty_and_missing() {
        assert_eq!(sum(&[], "stock_value"), 0.0);
        let records = vec![record(10.0, 0.0, 0.0)];
        assert_eq!(sum(&records, "no_such_field"), 0.0);
    }

    #[test]
    fn test_sum_coerces_text_values() {
        let mut r = NormalizedRecord::new();
        r.insert(
            "stock_value".to_string(),
            FieldValue::Text("₹75,000".to_string()),
        );
        assert_eq!(sum(&[r], "stock_value"), 75000.0);
    }

    #[test]
    fn test_count_below_threshold() {
        let records = vec![
            record(0.0, 10.0, 100.0), // 10%
            record(0.0, 50.0, 100.0), // 50%
            record(0.0, 90.0, 100.0), // 90%
        ];
        let low = count_where(&records, |r| {
            stock_ratio_pct(r, "current_level", "max_level") < 33.0
        });
        assert_eq!(low, 1);
    }

    #[test]
    fn test_count_empty() {
        assert_eq!(count_where(&[], |_| true), 0);
    }
}

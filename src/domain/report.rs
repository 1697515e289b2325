//! Area aggregation
//!
//! One pass over decoded input records: every record that the factory
//! accepts contributes its area to the total and its kind to the
//! tally; every record it rejects becomes a skip diagnostic. One bad
//! record never aborts the batch.

use super::factory::ShapeRecord;
use super::shape::{Shape, ShapeKind};

/// A record that could not be turned into a shape
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Zero-based position in the input sequence
    pub index: usize,
    /// Human-readable reason, suitable for a stderr diagnostic
    pub reason: String,
}

/// The result of aggregating one input sequence
#[derive(Debug, Clone, PartialEq)]
pub struct AreaReport {
    /// Sum of the areas of all accepted shapes, in input order
    pub total_area: f64,
    /// Per-kind counts, in first-seen order
    pub counts: Vec<(ShapeKind, usize)>,
    /// Records the factory rejected
    pub skipped: Vec<SkippedRecord>,
}

impl AreaReport {
    /// The total-area line as reported on stdout and in the artifact file
    pub fn total_line(&self) -> String {
        format!("Total area: {:.1}", self.total_area)
    }
}

/// Aggregates a sequence of raw input records into an [`AreaReport`]
pub fn aggregate(records: &[serde_json::Value]) -> AreaReport {
    let mut total_area = 0.0;
    let mut counts: Vec<(ShapeKind, usize)> = Vec::new();
    let mut skipped = Vec::new();

    for (index, value) in records.iter().enumerate() {
        // The only way an object fails to decode is a non-string tag
        let outcome = if !value.is_object() {
            Err("Record is not a JSON object".to_string())
        } else {
            serde_json::from_value::<ShapeRecord>(value.clone())
                .map_err(|_| "Record \"type\" field is not a string".to_string())
                .and_then(|record| Shape::from_record(&record).map_err(|e| e.to_string()))
        };

        match outcome {
            Ok(shape) => {
                total_area += shape.area();
                let kind = shape.kind();
                match counts.iter_mut().find(|(k, _)| *k == kind) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((kind, 1)),
                }
            }
            Err(reason) => skipped.push(SkippedRecord { index, reason }),
        }
    }

    AreaReport {
        total_area,
        counts,
        skipped,
    }
}

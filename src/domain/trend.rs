// Voltage trend domain model
use super::error::DeckError;
use serde::Serialize;

/// Smallest bar height, so low readings stay visible.
pub const MIN_HEIGHT: f64 = 24.0;
/// Height of the bar holding the peak reading.
pub const MAX_HEIGHT: f64 = 90.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub value: f64,
    pub height: f64,
    pub label: String,
}

/// Chart text around the bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendCopy {
    pub title: String,
    pub hint: String,
    pub unit: String,
    pub footer_hint: String,
    pub footer_chip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trend {
    #[serde(flatten)]
    pub copy: TrendCopy,
    pub peak: f64,
    pub bars: Vec<Bar>,
}

impl Trend {
    pub fn new(copy: TrendCopy, readings: &[f64]) -> Result<Self, DeckError> {
        let peak = peak(readings)?;
        let bars = normalize(readings)?;
        Ok(Self { copy, peak, bars })
    }
}

/// Largest reading in the sequence.
///
/// Fails on an empty sequence, on non-finite readings, and when the maximum
/// is not positive (the normalizer divides by it).
pub fn peak(readings: &[f64]) -> Result<f64, DeckError> {
    if readings.is_empty() {
        return Err(DeckError::InvalidInput("no readings to normalize".to_string()));
    }

    if let Some(bad) = readings.iter().find(|r| !r.is_finite()) {
        return Err(DeckError::InvalidInput(format!("reading {} is not finite", bad)));
    }

    let max = readings.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= 0.0 {
        return Err(DeckError::InvalidInput(format!(
            "peak reading must be positive, got {}",
            max
        )));
    }

    Ok(max)
}

/// Map readings to bar heights relative to the peak.
///
/// `height = max(MIN_HEIGHT, value / peak * MAX_HEIGHT)`; labels are `T1..Tn`.
pub fn normalize(readings: &[f64]) -> Result<Vec<Bar>, DeckError> {
    let max = peak(readings)?;

    Ok(readings
        .iter()
        .enumerate()
        .map(|(idx, &value)| Bar {
            value,
            height: f64::max(MIN_HEIGHT, (value / max) * MAX_HEIGHT),
            label: format!("T{}", idx + 1),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 7] = [12.1, 11.9, 12.3, 12.6, 12.4, 12.7, 12.5];

    #[test]
    fn test_normalize_sample_readings() {
        let bars = normalize(&SAMPLE).unwrap();

        assert_eq!(bars.len(), SAMPLE.len());
        for (bar, value) in bars.iter().zip(SAMPLE) {
            assert_eq!(bar.value, value);
            assert!(bar.height >= MIN_HEIGHT && bar.height <= MAX_HEIGHT);
        }

        assert_eq!(bars[5].value, 12.7);
        assert_eq!(bars[5].height, 90.0);
        assert!((bars[1].height - 84.33).abs() < 0.01);
    }

    #[test]
    fn test_labels_are_one_based() {
        let bars = normalize(&SAMPLE).unwrap();
        let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["T1", "T2", "T3", "T4", "T5", "T6", "T7"]);
    }

    #[test]
    fn test_equal_readings_all_reach_max_height() {
        let bars = normalize(&[3.3, 3.3, 3.3]).unwrap();
        assert!(bars.iter().all(|b| b.height == MAX_HEIGHT));
    }

    #[test]
    fn test_small_readings_floor_at_min_height() {
        let bars = normalize(&[0.0, 1.0, 100.0]).unwrap();
        assert_eq!(bars[0].height, MIN_HEIGHT);
        assert_eq!(bars[1].height, MIN_HEIGHT);
        assert_eq!(bars[2].height, MAX_HEIGHT);
    }

    #[test]
    fn test_single_reading() {
        let bars = normalize(&[5.0]).unwrap();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].height, MAX_HEIGHT);
        assert_eq!(bars[0].label, "T1");
    }

    #[test]
    fn test_rejects_empty_and_non_positive_input() {
        assert!(matches!(normalize(&[]), Err(DeckError::InvalidInput(_))));
        assert!(matches!(normalize(&[0.0, 0.0]), Err(DeckError::InvalidInput(_))));
        assert!(matches!(normalize(&[-1.0, -2.0]), Err(DeckError::InvalidInput(_))));
        assert!(matches!(normalize(&[1.0, f64::NAN]), Err(DeckError::InvalidInput(_))));
    }

    #[test]
    fn test_normalize_is_deterministic() {
        assert_eq!(normalize(&SAMPLE).unwrap(), normalize(&SAMPLE).unwrap());
    }

    #[test]
    fn test_trend_carries_peak() {
        let copy = TrendCopy {
            title: "Power trend".to_string(),
            hint: "Voltage over last syncs".to_string(),
            unit: "V".to_string(),
            footer_hint: "Holding smooth across recent samples".to_string(),
            footer_chip: "Safe load".to_string(),
        };
        let trend = Trend::new(copy, &SAMPLE).unwrap();

        assert_eq!(trend.peak, 12.7);
        assert_eq!(trend.bars.len(), 7);

        let json = serde_json::to_value(&trend).unwrap();
        assert_eq!(json["footer_chip"], "Safe load");
        assert_eq!(json["title"], "Power trend");
        assert!(json.get("copy").is_none());
    }
}

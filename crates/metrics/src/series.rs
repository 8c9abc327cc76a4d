use serde::Serialize;

/// Result of a "current value" lookup. Empty series read as `NoData` so the
/// presentation layer can show a placeholder instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reading<T> {
    Value(T),
    NoData,
}

impl<T> Reading<T> {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Reading::NoData)
    }

    pub fn value(self) -> Option<T> {
        match self {
            Reading::Value(v) => Some(v),
            Reading::NoData => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reading<U> {
        match self {
            Reading::Value(v) => Reading::Value(f(v)),
            Reading::NoData => Reading::NoData,
        }
    }

    /// Formats the value, or returns `placeholder` when there is no data.
    pub fn display_or(self, placeholder: &str, f: impl FnOnce(T) -> String) -> String {
        match self {
            Reading::Value(v) => f(v),
            Reading::NoData => placeholder.to_string(),
        }
    }
}

impl<T> From<Option<T>> for Reading<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Reading::NoData, Reading::Value)
    }
}

/// Most recent element of a chronologically ordered series.
pub fn latest<T>(series: &[T]) -> Reading<&T> {
    series.last().into()
}

/// The last `min(window_size, series.len())` elements, in their original order.
pub fn select_recent_samples<T>(series: &[T], window_size: usize) -> &[T] {
    let start = series.len().saturating_sub(window_size);
    &series[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series() {
        let empty: [u32; 0] = [];
        assert!(select_recent_samples(&empty, 7).is_empty());
        assert!(latest(&empty).is_no_data());
    }

    #[test]
    fn test_window_takes_tail_in_order() {
        let series: Vec<u32> = (1..=10).collect();
        assert_eq!(select_recent_samples(&series, 7), &[4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(series.len(), 10);
    }

    #[test]
    fn test_window_larger_than_series() {
        let series = [1, 2, 3];
        assert_eq!(select_recent_samples(&series, 7), &[1, 2, 3]);
        assert!(select_recent_samples(&series, 0).is_empty());
    }

    #[test]
    fn test_latest_and_display() {
        let series = [0.1, 0.25, 0.5];
        assert_eq!(latest(&series), Reading::Value(&0.5));
        assert_eq!(
            latest(&series).display_or("—", |v| format!("{:.1} kWh", v)),
            "0.5 kWh"
        );

        let empty: [f64; 0] = [];
        assert_eq!(latest(&empty).display_or("—", |v| v.to_string()), "—");
    }
}

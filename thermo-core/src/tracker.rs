//! Temperature tracker
//!
//! Keeps the current, minimum and maximum readings. Only the sample-tick
//! and wake-timer handlers call [`TemperatureTracker::sample`].

use crate::traits::{Celsius, TemperatureSensor};

/// Which tracked reading a UI state shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrackedField {
    Maximum,
    Current,
    Minimum,
}

/// Running current/minimum/maximum temperatures
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureTracker {
    /// Last reading, `None` until the first sample
    current: Option<Celsius>,
    /// Lowest reading, starts at the largest representable value
    minimum: Celsius,
    /// Highest reading, starts at the smallest representable value
    maximum: Celsius,
}

impl Default for TemperatureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl TemperatureTracker {
    /// Create a tracker with no samples
    pub const fn new() -> Self {
        Self {
            current: None,
            minimum: Celsius::MAX,
            maximum: Celsius::MIN,
        }
    }

    /// Read the sensor once and fold the reading in
    pub fn sample<S: TemperatureSensor>(&mut self, sensor: &mut S) -> Celsius {
        let reading = sensor.read_celsius();
        self.record(reading);
        reading
    }

    /// Fold a reading into the tracked values
    ///
    /// A new minimum takes priority: a reading that lowers the minimum is
    /// never also checked against the maximum. The first reading seeds both
    /// bounds, since there is no range yet for the check to run against.
    pub fn record(&mut self, reading: Celsius) {
        if self.current.is_none() {
            self.minimum = reading;
            self.maximum = reading;
        } else if reading < self.minimum {
            self.minimum = reading;
        } else if reading > self.maximum {
            self.maximum = reading;
        }
        self.current = Some(reading);
    }

    /// Whether at least one sample has been taken
    pub fn has_sample(&self) -> bool {
        self.current.is_some()
    }

    /// Last reading
    pub fn current(&self) -> Option<Celsius> {
        self.current
    }

    /// Raw minimum, `Celsius::MAX` before the first sample
    pub fn minimum(&self) -> Celsius {
        self.minimum
    }

    /// Raw maximum, `Celsius::MIN` before the first sample
    pub fn maximum(&self) -> Celsius {
        self.maximum
    }

    /// The value a UI state should show, `None` before the first sample
    pub fn reading(&self, field: TrackedField) -> Option<Celsius> {
        let current = self.current?;
        Some(match field {
            TrackedField::Maximum => self.maximum,
            TrackedField::Current => current,
            TrackedField::Minimum => self.minimum,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSensor;
    use proptest::prelude::*;

    #[test]
    fn test_initial_bounds() {
        let tracker = TemperatureTracker::new();
        assert!(!tracker.has_sample());
        assert_eq!(tracker.minimum(), i8::MAX);
        assert_eq!(tracker.maximum(), i8::MIN);
        assert_eq!(tracker.reading(TrackedField::Current), None);
        assert_eq!(tracker.reading(TrackedField::Maximum), None);
    }

    #[test]
    fn test_single_sample_sets_all_fields() {
        let mut tracker = TemperatureTracker::new();
        let mut sensor = MockSensor::new(&[7]);

        assert_eq!(tracker.sample(&mut sensor), 7);
        assert_eq!(tracker.reading(TrackedField::Minimum), Some(7));
        assert_eq!(tracker.reading(TrackedField::Current), Some(7));
        assert_eq!(tracker.reading(TrackedField::Maximum), Some(7));
    }

    #[test]
    fn test_mixed_sequence() {
        let mut tracker = TemperatureTracker::new();
        let mut sensor = MockSensor::new(&[-12, 30, 5, 30]);
        for _ in 0..4 {
            tracker.sample(&mut sensor);
        }

        assert_eq!(tracker.minimum(), -12);
        assert_eq!(tracker.maximum(), 30);
        assert_eq!(tracker.current(), Some(30));
    }

    #[test]
    fn test_new_minimum_skips_maximum_check() {
        let mut tracker = TemperatureTracker::new();
        tracker.record(20);
        tracker.record(10);
        assert_eq!(tracker.minimum(), 10);
        assert_eq!(tracker.maximum(), 20);

        tracker.record(25);
        assert_eq!(tracker.minimum(), 10);
        assert_eq!(tracker.maximum(), 25);
    }

    #[test]
    fn test_out_of_range_reading_is_kept() {
        let mut tracker = TemperatureTracker::new();
        tracker.record(-50);
        tracker.record(102);
        assert_eq!(tracker.minimum(), -50);
        assert_eq!(tracker.maximum(), 102);
    }

    proptest! {
        #[test]
        fn prop_tracks_extremes(samples in prop::collection::vec(any::<i8>(), 1..64)) {
            let mut tracker = TemperatureTracker::new();
            for &s in &samples {
                tracker.record(s);
            }

            prop_assert_eq!(tracker.maximum(), *samples.iter().max().unwrap());
            prop_assert_eq!(tracker.minimum(), *samples.iter().min().unwrap());
            prop_assert_eq!(tracker.current(), samples.last().copied());

            let current = tracker.current().unwrap();
            prop_assert!(tracker.minimum() <= current && current <= tracker.maximum());
        }
    }
}

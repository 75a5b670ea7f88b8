// Weather samples feeding the automatic theme
use rand::seq::SliceRandom;
use shared::models::WeatherKind;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of the weather value used on each theme refresh.
pub trait WeatherSource: Send + Sync {
    fn sample(&self) -> WeatherKind;
}

/// Picks uniformly among the known weather kinds. Stands in for a real sensor.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomWeather;

impl WeatherSource for RandomWeather {
    fn sample(&self) -> WeatherKind {
        *WeatherKind::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&WeatherKind::Cloudy)
    }
}

/// Always reports the same weather.
#[derive(Debug, Clone, Copy)]
pub struct FixedWeather(pub WeatherKind);

impl WeatherSource for FixedWeather {
    fn sample(&self) -> WeatherKind {
        self.0
    }
}

/// Replays a list of samples in order, wrapping after the last one.
#[derive(Debug)]
pub struct SequenceWeather {
    samples: Vec<WeatherKind>,
    next: AtomicUsize,
}

impl SequenceWeather {
    /// Panics if `samples` is empty.
    pub fn new(samples: Vec<WeatherKind>) -> Self {
        assert!(!samples.is_empty(), "SequenceWeather needs at least one sample");
        Self {
            samples,
            next: AtomicUsize::new(0),
        }
    }

    /// Number of samples handed out so far.
    pub fn draws(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

impl WeatherSource for SequenceWeather {
    fn sample(&self) -> WeatherKind {
        let idx = self.next.fetch_add(1, Ordering::SeqCst);
        self.samples[idx % self.samples.len()]
    }
}

impl<T: WeatherSource + ?Sized> WeatherSource for std::sync::Arc<T> {
    fn sample(&self) -> WeatherKind {
        (**self).sample()
    }
}

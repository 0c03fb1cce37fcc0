#![allow(dead_code)]

use std::cell::Cell;
use std::time::Duration;
use towersort::prelude::*;

/// Clock that advances one microsecond per reading.
pub struct StepClock {
    readings: Cell<u64>,
}

impl StepClock {
    pub fn new() -> Self {
        Self {
            readings: Cell::new(0),
        }
    }

    /// Number of times the clock has been read.
    pub fn reads(&self) -> u64 {
        self.readings.get()
    }
}

impl Clock for StepClock {
    fn now(&self) -> Duration {
        let n = self.readings.get();
        self.readings.set(n + 1);
        Duration::from_micros(n)
    }
}

pub fn component(name: &str, kind: &str, priority: i64) -> Component {
    Component::new(name, kind, priority).unwrap()
}

pub fn names<T: Labeled>(data: &[T]) -> Vec<String> {
    data.iter().map(|c| c.name().to_string()).collect()
}

pub fn snapshot<T: Labeled>(data: &[T]) -> Vec<(String, String, u8)> {
    data.iter()
        .map(|c| (c.name().to_string(), c.kind().to_string(), c.priority()))
        .collect()
}

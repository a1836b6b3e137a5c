//! HSE key performance indicators recorded per weekly report

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Hours-worked base for the lost-time injury frequency rate
const LTIFR_BASE_HOURS: f64 = 1_000_000.0;

/// Hours-worked base for the total recordable incident rate
const TRIR_BASE_HOURS: f64 = 200_000.0;

/// Safety counters and exposure hours for one reporting period
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KpiMetrics {
    /// Total hours worked (exposure)
    #[serde(default)]
    pub man_hours: f64,
    /// Injuries resulting in lost work time
    #[serde(default)]
    pub lost_time_injuries: u32,
    /// OSHA-style recordable injuries (includes lost-time injuries)
    #[serde(default)]
    pub recordable_injuries: u32,
    #[serde(default)]
    pub first_aid_cases: u32,
    #[serde(default)]
    pub near_misses: u32,
    /// Site inspections carried out
    #[serde(default)]
    pub inspections: u32,
    /// Toolbox talks and training sessions held
    #[serde(default)]
    pub trainings: u32,
}

impl KpiMetrics {
    /// Lost-time injury frequency rate per million hours worked
    pub fn ltifr(&self) -> f64 {
        rate(self.lost_time_injuries, self.man_hours, LTIFR_BASE_HOURS)
    }

    /// Total recordable incident rate per 200,000 hours worked
    pub fn trir(&self) -> f64 {
        rate(self.recordable_injuries, self.man_hours, TRIR_BASE_HOURS)
    }

    /// Validate the metrics
    pub fn validate(&self) -> Result<(), String> {
        if !self.man_hours.is_finite() || self.man_hours < 0.0 {
            return Err(format!(
                "man-hours must be a non-negative number, got {}",
                self.man_hours
            ));
        }
        if self.lost_time_injuries > self.recordable_injuries {
            return Err(format!(
                "lost-time injuries ({}) cannot exceed recordable injuries ({})",
                self.lost_time_injuries, self.recordable_injuries
            ));
        }
        Ok(())
    }
}

fn rate(count: u32, man_hours: f64, base: f64) -> f64 {
    if man_hours <= 0.0 {
        0.0
    } else {
        f64::from(count) * base / man_hours
    }
}

/// Counters saturate at `u32::MAX` instead of overflowing.
impl AddAssign for KpiMetrics {
    fn add_assign(&mut self, other: Self) {
        self.man_hours += other.man_hours;
        self.lost_time_injuries = self.lost_time_injuries.saturating_add(other.lost_time_injuries);
        self.recordable_injuries = self
            .recordable_injuries
            .saturating_add(other.recordable_injuries);
        self.first_aid_cases = self.first_aid_cases.saturating_add(other.first_aid_cases);
        self.near_misses = self.near_misses.saturating_add(other.near_misses);
        self.inspections = self.inspections.saturating_add(other.inspections);
        self.trainings = self.trainings.saturating_add(other.trainings);
    }
}

impl Add for KpiMetrics {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Sum for KpiMetrics {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a KpiMetrics> for KpiMetrics {
    fn sum<I: Iterator<Item = &'a KpiMetrics>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

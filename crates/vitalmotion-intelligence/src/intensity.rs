// ABOUTME: Pain-adjusted intensity selection over a trailing window of pain reports
// ABOUTME: Filters, validates, and orders reports, then maps the latest matching level to intensity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use crate::config::IntensityThresholds;
use chrono::{Days, NaiveDate};
use tracing::debug;
use vitalmotion_core::models::{Intensity, MuscleGroup, PainLevel, PainReport, RawPainReport};

/// Valid pain reports dated within the window, most recent first
///
/// Reports sharing a date keep the order they were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentPainWindow {
    reports: Vec<PainReport>,
}

impl RecentPainWindow {
    /// Validate raw reports and keep those dated `today - window_days` or later
    ///
    /// Reports with a missing or malformed field are skipped.
    #[must_use]
    pub fn from_reports(raw: &[RawPainReport], today: NaiveDate, window_days: u32) -> Self {
        let cutoff = today
            .checked_sub_days(Days::new(u64::from(window_days)))
            .unwrap_or(NaiveDate::MIN);

        let mut reports: Vec<PainReport> = raw
            .iter()
            .filter_map(|report| match report.validate() {
                Ok(valid) => Some(valid),
                Err(reason) => {
                    debug!(%reason, "Skipping malformed pain report");
                    None
                }
            })
            .filter(|report| report.date >= cutoff)
            .collect();

        // Vec::sort_by is stable
        reports.sort_by(|a, b| b.date.cmp(&a.date));

        Self { reports }
    }

    /// Most recent report for `muscle`
    #[must_use]
    pub fn latest_for(&self, muscle: MuscleGroup) -> Option<&PainReport> {
        self.reports
            .iter()
            .find(|report| report.muscle_group == muscle)
    }

    /// Reports in window order
    #[must_use]
    pub fn reports(&self) -> &[PainReport] {
        &self.reports
    }

    /// Number of reports in the window
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether no report fell inside the window
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Maps the latest pain for a muscle to an intensity directive
#[derive(Debug, Clone, Copy, Default)]
pub struct PainIntensitySelector {
    thresholds: IntensityThresholds,
}

impl PainIntensitySelector {
    /// Selector with custom thresholds
    #[must_use]
    pub const fn new(thresholds: IntensityThresholds) -> Self {
        Self { thresholds }
    }

    /// Directive for a single pain level; both thresholds are inclusive
    #[must_use]
    pub const fn intensity_for_level(&self, level: PainLevel) -> Intensity {
        let value = level.value();
        if value <= self.thresholds.higher_max_pain {
            Intensity::Higher
        } else if value >= self.thresholds.lower_min_pain {
            Intensity::Lower
        } else {
            Intensity::Same
        }
    }

    /// Directive for `target`, `Same` when the window has no report for it
    #[must_use]
    pub fn select(&self, window: &RecentPainWindow, target: MuscleGroup) -> Intensity {
        window
            .latest_for(target)
            .map_or(Intensity::Same, |report| {
                self.intensity_for_level(report.pain_level)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, body_part: &str, level: i64) -> RawPainReport {
        RawPainReport {
            date: Some(date.to_owned()),
            body_part: Some(body_part.to_owned()),
            pain_level: Some(level),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_threshold_boundaries_are_inclusive() {
        let selector = PainIntensitySelector::default();
        let level = |value| PainLevel::new(value).unwrap();
        assert_eq!(selector.intensity_for_level(level(1)), Intensity::Higher);
        assert_eq!(selector.intensity_for_level(level(3)), Intensity::Higher);
        assert_eq!(selector.intensity_for_level(level(4)), Intensity::Same);
        assert_eq!(selector.intensity_for_level(level(6)), Intensity::Same);
        assert_eq!(selector.intensity_for_level(level(7)), Intensity::Lower);
        assert_eq!(selector.intensity_for_level(level(10)), Intensity::Lower);
    }

    #[test]
    fn test_window_is_inclusive_of_cutoff_day() {
        let reports = [
            raw("2025-06-08", "Abs", 2),
            raw("2025-06-07", "Back", 2),
        ];
        let window = RecentPainWindow::from_reports(&reports, today(), 7);
        assert_eq!(window.len(), 1);
        assert!(window.latest_for(MuscleGroup::Abs).is_some());
        assert!(window.latest_for(MuscleGroup::Back).is_none());
    }

    #[test]
    fn test_future_dated_reports_count_and_sort_first() {
        let reports = [raw("2025-06-14", "Abs", 2), raw("2025-06-20", "Abs", 8)];
        let window = RecentPainWindow::from_reports(&reports, today(), 7);
        assert_eq!(window.len(), 2);
        assert_eq!(window.reports()[0].date.to_string(), "2025-06-20");

        let selector = PainIntensitySelector::default();
        assert_eq!(selector.select(&window, MuscleGroup::Abs), Intensity::Lower);
    }

    #[test]
    fn test_window_orders_most_recent_first() {
        let reports = [
            raw("2025-06-09", "Abs", 10),
            raw("2025-06-14", "Abs", 2),
            raw("2025-06-12", "Biceps", 5),
        ];
        let window = RecentPainWindow::from_reports(&reports, today(), 7);
        let dates: Vec<_> = window.reports().iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-06-14", "2025-06-12", "2025-06-09"]);

        let selector = PainIntensitySelector::default();
        assert_eq!(selector.select(&window, MuscleGroup::Abs), Intensity::Higher);
    }

    #[test]
    fn test_same_day_reports_keep_supplied_order() {
        let reports = [raw("2025-06-14", "Chest", 8), raw("2025-06-14", "Chest", 1)];
        let window = RecentPainWindow::from_reports(&reports, today(), 7);
        let selector = PainIntensitySelector::default();
        assert_eq!(selector.select(&window, MuscleGroup::Chest), Intensity::Lower);
    }

    #[test]
    fn test_malformed_reports_are_skipped() {
        let reports = [
            RawPainReport {
                date: None,
                body_part: Some("Abs".to_owned()),
                pain_level: Some(9),
            },
            raw("yesterday", "Abs", 9),
            raw("2025-06-14", "Abs", 11),
            raw("2025-06-13", "Abs", 2),
        ];
        let window = RecentPainWindow::from_reports(&reports, today(), 7);
        assert_eq!(window.len(), 1);
        let selector = PainIntensitySelector::default();
        assert_eq!(selector.select(&window, MuscleGroup::Abs), Intensity::Higher);
    }

    #[test]
    fn test_no_matching_report_is_same() {
        let window = RecentPainWindow::from_reports(&[raw("2025-06-14", "Abs", 9)], today(), 7);
        let selector = PainIntensitySelector::default();
        assert_eq!(selector.select(&window, MuscleGroup::Glutes), Intensity::Same);
        assert_eq!(
            selector.select(&RecentPainWindow::default(), MuscleGroup::Abs),
            Intensity::Same
        );
    }
}

use chrono::{Datelike, NaiveDate};

/// Assumed lifespan in years for the life-in-weeks grid.
pub const LIFE_EXPECTANCY_YEARS: u32 = 80;

/// Weeks per grid row.
pub const WEEKS_PER_YEAR: u32 = 52;

/// Total cell count of the life grid.
pub const TOTAL_LIFE_WEEKS: u32 = LIFE_EXPECTANCY_YEARS * WEEKS_PER_YEAR;

/// The three wallpaper kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Life-in-weeks grid.
    Life,
    /// Current-year progress (day grid or hourglass).
    Year,
    /// Goal countdown ring.
    Goal,
}

impl Variant {
    /// Lossy parse of a query/CLI value. Unrecognized input falls back to
    /// [`Variant::Life`]; the same fallback drives palette and layout
    /// selection, so an unknown variant renders as a life calendar.
    pub fn from_query(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "year" => Self::Year,
            "goal" => Self::Goal,
            _ => Self::Life,
        }
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Life => "life",
            Self::Year => "year",
            Self::Goal => "goal",
        }
    }
}

/// Computed progress for one wallpaper.
///
/// `elapsed + remaining == total` is the intended relationship; providers in
/// this module uphold it and clamp `elapsed` into `[0, total]`. The scene
/// generator trusts its input and re-clamps only where a fraction is derived.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProgressData {
    /// Total unit count (weeks or days).
    pub total: u32,
    /// Units already passed.
    pub elapsed: u32,
    /// Units still ahead.
    pub remaining: u32,
    /// Human-readable caption (year number, grid title).
    pub label: Option<String>,
    /// Which wallpaper this progress feeds.
    pub variant: Variant,
}

impl ProgressData {
    /// `elapsed / total`, 0 when `total == 0`, clamped to `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (f64::from(self.elapsed) / f64::from(self.total)).clamp(0.0, 1.0)
    }

    /// `remaining / total`, 0 when `total == 0`, clamped to `[0, 1]`.
    pub fn remaining_fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (f64::from(self.remaining) / f64::from(self.total)).clamp(0.0, 1.0)
    }
}

/// Weeks lived out of an 80-year lifespan.
pub fn life_progress(birth_date: NaiveDate, today: NaiveDate) -> ProgressData {
    let days = (today - birth_date).num_days().max(0);
    let weeks = u32::try_from(days / 7).unwrap_or(u32::MAX);
    let elapsed = weeks.min(TOTAL_LIFE_WEEKS);
    ProgressData {
        total: TOTAL_LIFE_WEEKS,
        elapsed,
        remaining: TOTAL_LIFE_WEEKS - elapsed,
        label: Some(format!("{LIFE_EXPECTANCY_YEARS} Years in Weeks")),
        variant: Variant::Life,
    }
}

/// Days elapsed in the current calendar year.
pub fn year_progress(today: NaiveDate) -> ProgressData {
    let total = if today.leap_year() { 366 } else { 365 };
    let elapsed = today.ordinal().min(total);
    ProgressData {
        total,
        elapsed,
        remaining: total - elapsed,
        label: Some(today.year().to_string()),
        variant: Variant::Year,
    }
}

/// Days until a target date.
///
/// `elapsed` stays 0 and `total` re-anchors to `remaining + 1` on every call,
/// so the countdown ring renders empty until the goal passes.
pub fn goal_progress(target_date: NaiveDate, today: NaiveDate) -> ProgressData {
    let remaining = u32::try_from((target_date - today).num_days().max(0)).unwrap_or(u32::MAX);
    ProgressData {
        total: remaining.saturating_add(1),
        elapsed: 0,
        remaining,
        label: Some("Days Until Goal".to_string()),
        variant: Variant::Goal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn variant_parse_is_lossy_and_case_insensitive() {
        assert_eq!(Variant::from_query("life"), Variant::Life);
        assert_eq!(Variant::from_query("YEAR"), Variant::Year);
        assert_eq!(Variant::from_query(" goal "), Variant::Goal);
        assert_eq!(Variant::from_query("bogus"), Variant::Life);
        assert_eq!(Variant::from_query(""), Variant::Life);
    }

    #[test]
    fn life_clamps_to_grid_bounds() {
        let p = life_progress(date(1900, 1, 1), date(2026, 1, 1));
        assert_eq!(p.elapsed, TOTAL_LIFE_WEEKS);
        assert_eq!(p.remaining, 0);

        // Birth date in the future clamps at zero rather than going negative.
        let p = life_progress(date(2100, 1, 1), date(2026, 1, 1));
        assert_eq!(p.elapsed, 0);
        assert_eq!(p.remaining, TOTAL_LIFE_WEEKS);
    }

    #[test]
    fn life_counts_whole_weeks() {
        let p = life_progress(date(2000, 1, 1), date(2000, 1, 15));
        assert_eq!(p.elapsed, 2);
        assert_eq!(p.total, 4160);
        assert_eq!(p.elapsed + p.remaining, p.total);
    }

    #[test]
    fn year_handles_leap_years() {
        let p = year_progress(date(2024, 12, 31));
        assert_eq!(p.total, 366);
        assert_eq!(p.elapsed, 366);
        assert_eq!(p.remaining, 0);

        let p = year_progress(date(2025, 1, 1));
        assert_eq!(p.total, 365);
        assert_eq!(p.elapsed, 1);
        assert_eq!(p.label.as_deref(), Some("2025"));
    }

    #[test]
    fn goal_countdown_reanchors_total() {
        let p = goal_progress(date(2025, 12, 31), date(2025, 12, 21));
        assert_eq!(p.remaining, 10);
        assert_eq!(p.total, 11);
        assert_eq!(p.elapsed, 0);

        // Past goals clamp at zero days remaining.
        let p = goal_progress(date(2020, 1, 1), date(2025, 1, 1));
        assert_eq!(p.remaining, 0);
        assert_eq!(p.total, 1);
    }

    #[test]
    fn fraction_guards_division_by_zero() {
        let p = ProgressData {
            total: 0,
            elapsed: 0,
            remaining: 0,
            label: None,
            variant: Variant::Goal,
        };
        assert_eq!(p.fraction(), 0.0);
        assert_eq!(p.remaining_fraction(), 0.0);
    }

    #[test]
    fn progress_round_trips_through_json() {
        let p = year_progress(date(2025, 6, 1));
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains(r#""variant":"year""#));
        let back: ProgressData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn fraction_clamps_overshoot() {
        let p = ProgressData {
            total: 10,
            elapsed: 15,
            remaining: 0,
            label: None,
            variant: Variant::Goal,
        };
        assert_eq!(p.fraction(), 1.0);
    }
}

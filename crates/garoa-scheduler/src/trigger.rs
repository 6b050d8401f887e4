//! Pure fire-time arithmetic for the two trigger shapes.

use chrono::{DateTime, Days, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use garoa_core::config::ScheduleConfig;
use garoa_core::JobKind;

use crate::error::{Result, SchedulerError};

/// When a job recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Every day at the given wall-clock time in `tz`. Anchored to civil
    /// time, so the UTC fire instant shifts with DST instead of drifting.
    Daily { hour: u32, minute: u32, tz: Tz },

    /// Every `period_secs` seconds, first fire after `initial_delay_secs`.
    Every {
        period_secs: u64,
        initial_delay_secs: u64,
    },
}

/// Compute the next fire instant strictly after `after`.
///
/// For `Daily` the candidate is built in the trigger's zone day by day;
/// a nonexistent local time (spring-forward gap) pushes to the next day,
/// an ambiguous one (fall-back overlap) resolves to the earlier instant.
pub fn next_fire(trigger: &Trigger, after: DateTime<Utc>) -> DateTime<Utc> {
    match trigger {
        Trigger::Every { period_secs, .. } => after + TimeDelta::seconds(*period_secs as i64),

        Trigger::Daily { hour, minute, tz } => {
            let local_after = after.with_timezone(tz);
            for days_ahead in 0..3u64 {
                let Some(date) = local_after
                    .date_naive()
                    .checked_add_days(Days::new(days_ahead))
                else {
                    continue;
                };
                let Some(naive) = date.and_hms_opt(*hour, *minute, 0) else {
                    continue;
                };
                if let Some(candidate) = tz.from_local_datetime(&naive).earliest() {
                    let candidate = candidate.with_timezone(&Utc);
                    if candidate > after {
                        return candidate;
                    }
                }
            }
            // Unreachable for any real zone: a valid HH:MM exists within
            // three civil days of every instant.
            after + TimeDelta::days(1)
        }
    }
}

/// Like [`next_fire`] but for a job's very first arm, where the interval
/// shape honours its initial delay instead of a full period.
pub fn first_fire(trigger: &Trigger, after: DateTime<Utc>) -> DateTime<Utc> {
    match trigger {
        Trigger::Every {
            initial_delay_secs, ..
        } => after + TimeDelta::seconds(*initial_delay_secs as i64),
        daily => next_fire(daily, after),
    }
}

/// The three concrete triggers derived from config, one per [`JobKind`].
#[derive(Debug, Clone, Copy)]
pub struct SchedulePlan {
    pub morning: Trigger,
    pub evening: Trigger,
    pub watch: Trigger,
}

impl SchedulePlan {
    /// Validate the configured timezone and clock times once, at startup.
    pub fn from_config(config: &ScheduleConfig) -> Result<Self> {
        let tz: Tz = config
            .timezone
            .parse()
            .map_err(|_| SchedulerError::InvalidTimezone(config.timezone.clone()))?;

        let daily = |hour: u8, minute: u8| -> Result<Trigger> {
            if hour > 23 || minute > 59 {
                return Err(SchedulerError::InvalidClockTime { hour, minute });
            }
            Ok(Trigger::Daily {
                hour: hour as u32,
                minute: minute as u32,
                tz,
            })
        };

        Ok(Self {
            morning: daily(config.morning.hour, config.morning.minute)?,
            evening: daily(config.evening.hour, config.evening.minute)?,
            watch: Trigger::Every {
                period_secs: config.watch_interval_secs,
                initial_delay_secs: config.watch_initial_delay_secs,
            },
        })
    }

    pub fn for_kind(&self, kind: JobKind) -> Trigger {
        match kind {
            JobKind::MorningDigest => self.morning,
            JobKind::EveningDigest => self.evening,
            JobKind::RainWatch => self.watch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sao_paulo() -> Tz {
        "America/Sao_Paulo".parse().unwrap()
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn daily_fires_later_the_same_day() {
        // 05:00 in São Paulo (UTC-3); the 06:30 slot is still ahead.
        let trigger = Trigger::Daily {
            hour: 6,
            minute: 30,
            tz: sao_paulo(),
        };
        let next = next_fire(&trigger, utc(2026, 6, 1, 8, 0));
        assert_eq!(next, utc(2026, 6, 1, 9, 30));
    }

    #[test]
    fn daily_rolls_over_to_tomorrow() {
        // 07:00 local is already past 06:30.
        let trigger = Trigger::Daily {
            hour: 6,
            minute: 30,
            tz: sao_paulo(),
        };
        let next = next_fire(&trigger, utc(2026, 6, 1, 10, 0));
        assert_eq!(next, utc(2026, 6, 2, 9, 30));
    }

    #[test]
    fn daily_is_strictly_after() {
        // Exactly at the fire instant; next fire is tomorrow, never "now".
        let trigger = Trigger::Daily {
            hour: 6,
            minute: 30,
            tz: sao_paulo(),
        };
        let next = next_fire(&trigger, utc(2026, 6, 1, 9, 30));
        assert_eq!(next, utc(2026, 6, 2, 9, 30));
    }

    #[test]
    fn daily_skips_a_spring_forward_gap() {
        // US Eastern, 2026-03-08: 02:30 local does not exist. The next
        // valid 02:30 is on March 9th (EDT, UTC-4).
        let tz: Tz = "America/New_York".parse().unwrap();
        let trigger = Trigger::Daily {
            hour: 2,
            minute: 30,
            tz,
        };
        let next = next_fire(&trigger, utc(2026, 3, 8, 6, 0));
        assert_eq!(next, utc(2026, 3, 9, 6, 30));
    }

    #[test]
    fn daily_tracks_civil_time_across_dst() {
        // Same civil time, different UTC offsets either side of the
        // US Eastern fall-back on 2026-11-01.
        let tz: Tz = "America/New_York".parse().unwrap();
        let trigger = Trigger::Daily {
            hour: 6,
            minute: 30,
            tz,
        };
        let before = next_fire(&trigger, utc(2026, 10, 31, 0, 0));
        let after = next_fire(&trigger, utc(2026, 11, 2, 0, 0));
        assert_eq!(before, utc(2026, 10, 31, 10, 30)); // EDT, UTC-4
        assert_eq!(after, utc(2026, 11, 2, 11, 30)); // EST, UTC-5
    }

    #[test]
    fn interval_honours_initial_delay_then_period() {
        let trigger = Trigger::Every {
            period_secs: 3600,
            initial_delay_secs: 10,
        };
        let t0 = utc(2026, 6, 1, 12, 0);
        assert_eq!(first_fire(&trigger, t0), t0 + TimeDelta::seconds(10));
        assert_eq!(next_fire(&trigger, t0), t0 + TimeDelta::seconds(3600));
    }

    #[test]
    fn plan_rejects_bad_timezone_and_clock() {
        let mut config = ScheduleConfig::default();
        config.timezone = "America/Springfield".to_string();
        assert!(matches!(
            SchedulePlan::from_config(&config),
            Err(SchedulerError::InvalidTimezone(_))
        ));

        let mut config = ScheduleConfig::default();
        config.morning.hour = 24;
        assert!(matches!(
            SchedulePlan::from_config(&config),
            Err(SchedulerError::InvalidClockTime { .. })
        ));
    }

    #[test]
    fn plan_maps_kinds_to_their_triggers() {
        let plan = SchedulePlan::from_config(&ScheduleConfig::default()).unwrap();
        assert!(matches!(
            plan.for_kind(JobKind::MorningDigest),
            Trigger::Daily { hour: 6, minute: 30, .. }
        ));
        assert!(matches!(
            plan.for_kind(JobKind::EveningDigest),
            Trigger::Daily { hour: 20, minute: 30, .. }
        ));
        assert!(matches!(
            plan.for_kind(JobKind::RainWatch),
            Trigger::Every { period_secs: 3600, .. }
        ));
    }
}

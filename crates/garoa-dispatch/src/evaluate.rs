//! The alert predicate, kept free of I/O so the edge-triggering is testable
//! on its own.

/// A rain watch alerts only above this precipitation probability (strict).
pub const RAIN_PROBABILITY_THRESHOLD: u8 = 70;

/// Outcome of one watch evaluation: whether to notify now, and the latch
/// value to persist for the next firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchDecision {
    pub notify: bool,
    pub alert_active: bool,
}

/// Edge-triggered rain evaluation.
///
/// Exactly one notification per contiguous high-probability episode: the
/// latch sets on the rising edge and only a reading at or below the
/// threshold re-arms it. Digest firings bypass this entirely; they notify
/// unconditionally on any successful fetch.
pub fn evaluate_watch(rain_probability: u8, alert_active: bool) -> WatchDecision {
    let high = rain_probability > RAIN_PROBABILITY_THRESHOLD;
    WatchDecision {
        notify: high && !alert_active,
        alert_active: high,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rising_edge_notifies_and_latches() {
        let d = evaluate_watch(85, false);
        assert!(d.notify);
        assert!(d.alert_active);
    }

    #[test]
    fn latched_episode_stays_silent() {
        let d = evaluate_watch(95, true);
        assert!(!d.notify);
        assert!(d.alert_active);
    }

    #[test]
    fn falling_edge_rearms_silently() {
        let d = evaluate_watch(40, true);
        assert!(!d.notify);
        assert!(!d.alert_active);
    }

    #[test]
    fn quiet_weather_is_a_no_op() {
        let d = evaluate_watch(10, false);
        assert!(!d.notify);
        assert!(!d.alert_active);
    }

    #[test]
    fn threshold_itself_does_not_alert() {
        // strictly greater than 70
        assert!(!evaluate_watch(RAIN_PROBABILITY_THRESHOLD, false).notify);
        assert!(evaluate_watch(RAIN_PROBABILITY_THRESHOLD + 1, false).notify);
    }

    #[test]
    fn one_notification_per_episode() {
        let mut latch = false;
        let mut notified = Vec::new();
        for p in [80u8, 85, 90, 40, 95] {
            let d = evaluate_watch(p, latch);
            if d.notify {
                notified.push(p);
            }
            latch = d.alert_active;
        }
        // first episode announces at 80; 40 re-arms; second at 95
        assert_eq!(notified, vec![80, 95]);
    }
}

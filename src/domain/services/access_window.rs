use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::domain::models::pass_profile::{PassProfile, WindowStrategy};

/// Concrete validity window for a pass. Invariant for all valid inputs:
/// `valid_from < valid_until`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessWindow {
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WindowInput<'a> {
    /// Guest-selected start. The caller decides whether booking mode is
    /// honored (`future_booking_enabled` gating happens there); this
    /// calculator simply uses whatever it is handed.
    pub booked_from: Option<DateTime<Utc>>,
    pub booked_to: Option<DateTime<Utc>>,
    pub nights: Option<i64>,
    /// Pass-type fallback when no profile duration applies.
    pub duration_hours: f64,
    pub profile: Option<&'a PassProfile>,
}

/// Replaces the time-of-day of a UTC instant, keeping its calendar date.
/// Explicit assignment rather than additive offsetting so the checkout
/// anchor never drifts across a day boundary.
pub(crate) fn at_time(anchor: DateTime<Utc>, time: NaiveTime) -> DateTime<Utc> {
    anchor.date_naive().and_time(time).and_utc()
}

pub(crate) fn duration_from_hours(hours: f64) -> Duration {
    Duration::milliseconds((hours * 3_600_000.0) as i64)
}

/// Computes `{valid_from, valid_until}` for a pass purchase.
///
/// Pure over its inputs; `now` is injected so windows are deterministic
/// under test. Interval ordering (`booked_from < booked_to`) is validated by
/// the caller before this is invoked.
pub fn compute_access_window(input: &WindowInput, now: DateTime<Utc>) -> AccessWindow {
    // Pass types never migrated to profiles: fixed duration from now.
    let Some(profile) = input.profile else {
        return AccessWindow {
            valid_from: now,
            valid_until: now + duration_from_hours(input.duration_hours),
        };
    };

    let entry_buffer = Duration::minutes(profile.entry_buffer_minutes.max(0));
    let exit_buffer = Duration::minutes(profile.exit_buffer_minutes.max(0));
    let fallback_minutes = profile
        .duration_minutes
        .unwrap_or((input.duration_hours * 60.0) as i64);

    let strategy = profile.strategy();

    let (valid_from, valid_until) = match strategy {
        WindowStrategy::EndOfDay => {
            let from = input.booked_from.unwrap_or(now);
            (from, at_time(from, profile.checkout_time_of_day()))
        }
        WindowStrategy::NightsCheckout => {
            let from = input.booked_from.unwrap_or(now);
            // Zero nights collapses to one, mirroring the legacy default.
            let nights = match input.nights {
                Some(n) if n != 0 => n,
                _ => 1,
            };
            let checkout_day = from + Duration::days(nights);
            (from, at_time(checkout_day, profile.checkout_time_of_day()))
        }
        WindowStrategy::InstantAccess => {
            (now, now + Duration::minutes(fallback_minutes))
        }
        WindowStrategy::GenericBuffered => {
            if let (Some(from), Some(to)) = (input.booked_from, input.booked_to) {
                // Buffers wrap the guest-selected range directly.
                return AccessWindow {
                    valid_from: from - entry_buffer,
                    valid_until: to + exit_buffer,
                };
            }
            (now, now + Duration::minutes(fallback_minutes))
        }
    };

    AccessWindow {
        valid_from: valid_from - entry_buffer,
        valid_until: if strategy.exit_buffer_applies() {
            valid_until + exit_buffer
        } else {
            valid_until
        },
    }
}

use std::time::Duration;

use gloo_timers::callback::Timeout;
use your_energy_domain::text::is_blank;

const SHORT_QUERY_DELAY: Duration = Duration::from_millis(50);
const QUERY_DELAY: Duration = Duration::from_millis(200);

/// Returns how long to wait after a keystroke before computing suggestions for the query.
///
/// Blank queries get no suggestions at all.
#[must_use]
pub fn suggestion_delay(query: &str) -> Option<Duration> {
    if is_blank(query) {
        return None;
    }
    if query.trim().chars().count() == 1 {
        Some(SHORT_QUERY_DELAY)
    } else {
        Some(QUERY_DELAY)
    }
}

/// Delays suggestion requests until typing pauses.
///
/// Only the callback of the most recent query runs. Dropping the debouncer cancels a pending
/// callback.
#[derive(Default)]
pub struct SuggestionDebouncer {
    timeout: Option<Timeout>,
}

impl SuggestionDebouncer {
    /// Schedules the callback for the query and cancels any pending one.
    ///
    /// Returns `false` if the query is blank, in which case nothing is scheduled.
    pub fn schedule(&mut self, query: &str, callback: impl FnOnce(String) + 'static) -> bool {
        self.cancel();
        let Some(delay) = suggestion_delay(query) else {
            return false;
        };
        let query = query.trim().to_string();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        self.timeout = Some(Timeout::new(millis, move || callback(query)));
        true
    }

    pub fn cancel(&mut self) {
        // Dropping a timeout clears it.
        self.timeout = None;
    }
}

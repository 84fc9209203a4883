//! Completion timing and best-time records.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Emitted once, when the last outstanding word of a puzzle is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Time from the start of the puzzle to the finding gesture.
    pub elapsed: Duration,
}

impl Completion {
    /// Returns the elapsed time in whole seconds.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }
}

/// The fastest recorded completion.
///
/// This is the record handed to whatever store the front end persists it in,
/// so it serializes to a flat structure.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, SystemTime};
///
/// use wordsearch_game::{BestTime, Completion};
///
/// let now = SystemTime::now();
/// let first = Completion { elapsed: Duration::from_secs(95) };
/// let best = BestTime::improved(None, &first, now).unwrap();
/// assert_eq!(best.elapsed_secs, 95);
///
/// // Slower runs do not replace the record.
/// let slower = Completion { elapsed: Duration::from_secs(125) };
/// assert_eq!(BestTime::improved(Some(&best), &slower, now), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTime {
    /// Completion time in whole seconds.
    pub elapsed_secs: u64,
    /// When the record was set, in seconds since the Unix epoch.
    pub completed_at_unix: u64,
}

impl BestTime {
    /// Creates a record from a completion at time `now`.
    #[must_use]
    pub fn from_completion(completion: &Completion, now: SystemTime) -> Self {
        let completed_at_unix = now
            .duration_since(UNIX_EPOCH)
            .map_or(0, |since| since.as_secs());
        Self {
            elapsed_secs: completion.elapsed_secs(),
            completed_at_unix,
        }
    }

    /// Returns the new record if `completion` beats `previous`.
    ///
    /// There is a new record when there was none before or when the completion
    /// is strictly faster, compared in whole seconds. Ties keep the existing
    /// record.
    #[must_use]
    pub fn improved(
        previous: Option<&Self>,
        completion: &Completion,
        now: SystemTime,
    ) -> Option<Self> {
        match previous {
            Some(best) if best.elapsed_secs <= completion.elapsed_secs() => None,
            _ => Some(Self::from_completion(completion, now)),
        }
    }

    /// Returns the record time as a duration.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_secs(self.elapsed_secs)
    }
}

/// Formats a duration as `m:ss`.
///
/// Minutes are not capped, so an hour renders as `60:00`.
///
/// ```
/// use std::time::Duration;
///
/// use wordsearch_game::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_secs(7)), "0:07");
/// assert_eq!(format_elapsed(Duration::from_millis(125_900)), "2:05");
/// ```
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion(secs: u64) -> Completion {
        Completion {
            elapsed: Duration::from_secs(secs),
        }
    }

    #[test]
    fn test_first_completion_sets_record() {
        let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let best = BestTime::improved(None, &completion(42), now).unwrap();
        assert_eq!(
            best,
            BestTime {
                elapsed_secs: 42,
                completed_at_unix: 1_700_000_000,
            }
        );
        assert_eq!(best.elapsed(), Duration::from_secs(42));
    }

    #[test]
    fn test_only_strictly_faster_replaces_record() {
        let now = UNIX_EPOCH + Duration::from_secs(10);
        let best = BestTime::from_completion(&completion(60), now);

        assert_eq!(BestTime::improved(Some(&best), &completion(61), now), None);
        assert_eq!(BestTime::improved(Some(&best), &completion(60), now), None);

        // Sub-second differences do not count.
        let almost = Completion {
            elapsed: Duration::from_millis(60_400),
        };
        assert_eq!(BestTime::improved(Some(&best), &almost, now), None);

        let faster = BestTime::improved(Some(&best), &completion(59), now).unwrap();
        assert_eq!(faster.elapsed_secs, 59);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::ZERO), "0:00");
        assert_eq!(format_elapsed(Duration::from_secs(59)), "0:59");
        assert_eq!(format_elapsed(Duration::from_secs(61)), "1:01");
        assert_eq!(format_elapsed(Duration::from_secs(3661)), "61:01");
    }
}

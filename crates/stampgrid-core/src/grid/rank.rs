use stampgrid_model::{RankedStamp, Width};

use super::StampTimes;

/// Keep the `width` stamps with the latest earliest-start times, oldest first.
///
/// The sort is stable over discovery order, so stamps with equal times keep the order in
/// which they were first seen; when a tie straddles the cut, the later-seen stamp stays.
pub fn rank_recent(times: StampTimes, width: Width) -> Vec<RankedStamp> {
    let mut entries = times.into_entries();
    entries.sort_by_key(|(_, first_seen)| *first_seen);

    let skip = entries.len().saturating_sub(width.get());
    entries
        .into_iter()
        .skip(skip)
        .map(|(stamp, first_seen)| RankedStamp { stamp, first_seen })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stampgrid_model::SourceStamp;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    fn times(items: &[(&str, u64)]) -> StampTimes {
        let mut t = StampTimes::new();
        for (rev, secs) in items {
            t.record(&SourceStamp::new(*rev), at(*secs));
        }
        t
    }

    fn revs(ranked: &[RankedStamp]) -> Vec<&str> {
        ranked
            .iter()
            .map(|r| r.stamp.revision.as_deref().unwrap())
            .collect()
    }

    #[test]
    fn keeps_most_recent_in_ascending_order() {
        let ranked = rank_recent(
            times(&[("c", 30), ("a", 10), ("d", 40), ("b", 20)]),
            Width::new(3).unwrap(),
        );
        assert_eq!(revs(&ranked), vec!["b", "c", "d"]);
        assert!(ranked.windows(2).all(|w| w[0].first_seen <= w[1].first_seen));
    }

    #[test]
    fn width_larger_than_available() {
        let ranked = rank_recent(times(&[("a", 10), ("b", 20)]), Width::new(5).unwrap());
        assert_eq!(revs(&ranked), vec!["a", "b"]);
    }

    #[test]
    fn empty_input() {
        let ranked = rank_recent(StampTimes::new(), Width::new(5).unwrap());
        assert!(ranked.is_empty());
    }

    #[test]
    fn ties_follow_discovery_order() {
        let ranked = rank_recent(
            times(&[("x", 10), ("y", 10), ("z", 10)]),
            Width::new(2).unwrap(),
        );
        assert_eq!(revs(&ranked), vec!["y", "z"]);
    }
}

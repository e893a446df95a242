use stampgrid_model::{Build, RankedStamp};

/// Match builds to stamp slots.
///
/// `history` must yield newest first. Each build fills the first empty slot whose stamp
/// equals its own, so the newest build for a stamp wins. Iteration stops as soon as every
/// slot is filled; with no stamps, `history` is not touched.
pub fn align_builds<I>(history: I, stamps: &[RankedStamp]) -> Vec<Option<Build>>
where
    I: IntoIterator<Item = Build>,
{
    let mut slots: Vec<Option<Build>> = stamps.iter().map(|_| None).collect();
    let mut empty = slots.len();
    if empty == 0 {
        return slots;
    }

    for build in history {
        let hit = stamps
            .iter()
            .zip(&slots)
            .position(|(ranked, slot)| slot.is_none() && ranked.stamp == build.source_stamp);

        if let Some(i) = hit {
            slots[i] = Some(build);
            empty -= 1;
            if empty == 0 {
                break;
            }
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use stampgrid_model::SourceStamp;
    use std::{
        cell::Cell,
        time::{Duration, UNIX_EPOCH},
    };

    fn ranked(rev: &str) -> RankedStamp {
        RankedStamp {
            stamp: SourceStamp::new(rev),
            first_seen: UNIX_EPOCH,
        }
    }

    fn build(number: u32, rev: &str) -> Build {
        Build {
            builder: "linux".to_string(),
            number,
            source_stamp: SourceStamp::new(rev),
            started_at: Some(UNIX_EPOCH + Duration::from_secs(number as u64)),
            finished_at: None,
            result: None,
            text: vec![],
            steps: vec![],
        }
    }

    #[test]
    fn newest_build_for_stamp_wins() {
        let history = vec![build(3, "b"), build(2, "a"), build(1, "b"), build(0, "a")];
        let slots = align_builds(history, &[ranked("a"), ranked("b")]);

        assert_eq!(slots[0].as_ref().map(|b| b.number), Some(2));
        assert_eq!(slots[1].as_ref().map(|b| b.number), Some(3));
    }

    #[test]
    fn unmatched_slots_stay_empty() {
        let slots = align_builds(vec![build(0, "z")], &[ranked("a"), ranked("b")]);
        assert!(slots.iter().all(Option::is_none));
        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn stops_once_all_slots_filled() {
        let pulled = Cell::new(0);
        let history = vec![build(4, "a"), build(3, "b"), build(2, "a"), build(1, "c")]
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1));

        let slots = align_builds(history, &[ranked("a"), ranked("b")]);
        assert!(slots.iter().all(Option::is_some));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn no_stamps_reads_no_history() {
        let pulled = Cell::new(0);
        let history = vec![build(0, "a")]
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1));

        let slots = align_builds(history, &[]);
        assert!(slots.is_empty());
        assert_eq!(pulled.get(), 0);
    }
}

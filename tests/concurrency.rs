//! Concurrency Integration Tests
//!
//! Many readers share one loaded snapshot; publishing a new snapshot never
//! disturbs readers holding the old one.

mod common;

use std::sync::Arc;

use almanac::core::{random_fact_summary, DataSource};
use almanac::{Almanac, AlmanacHandle};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_readers() {
    let temp = common::data_dir();
    let almanac = Arc::new(Almanac::load(&DataSource::new(temp.path())).unwrap());

    let mut tasks = Vec::new();
    for _ in 0..16 {
        let almanac = Arc::clone(&almanac);
        tasks.push(tokio::spawn(async move {
            for _ in 0..500 {
                let facts = almanac.facts_for_day(1, 1).unwrap();
                let summary = random_fact_summary(&facts).unwrap();
                assert!(summary.date.ends_with("-01-1550") || summary.date.ends_with("-01-1600"));
                assert!(almanac.day_has_facts(5, 3));
                assert_eq!(almanac.person("Zygmunt August").unwrap().len(), 3);
            }
        }));
    }

    for task in tasks {
        task.await.unwrap();
    }
}

#[test]
fn test_reader_threads() {
    let temp = common::data_dir();
    let almanac = Arc::new(Almanac::load(&DataSource::new(temp.path())).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let almanac = Arc::clone(&almanac);
            std::thread::spawn(move || {
                (0..1000)
                    .map(|_| almanac.facts_for_day(5, 3).map_or(0, |f| f.len()))
                    .sum::<usize>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1000);
    }
}

#[test]
fn test_publish_swaps_whole_snapshot() {
    let temp = common::data_dir();
    let source = DataSource::new(temp.path());
    let handle = AlmanacHandle::new(Almanac::load(&source).unwrap());

    let old = handle.current();
    assert!(old.facts_for_day(12, 24).is_none());

    common::write(
        temp.path(),
        "12-24.yaml",
        "id: eve\nday: 24\nmonth: 12\nyear: 1580\ntitle: Wigilia\npeople: Stefan Batory\n",
    );
    let previous = handle.publish(Almanac::load(&source).unwrap());

    assert!(Arc::ptr_eq(&old, &previous));
    assert!(old.facts_for_day(12, 24).is_none());
    assert!(old.person("Stefan Batory").is_none());

    let new = handle.current();
    assert_eq!(new.facts_for_day(12, 24).unwrap()[0].id, "eve");
    assert_eq!(new.person("Stefan Batory").unwrap().len(), 1);
}

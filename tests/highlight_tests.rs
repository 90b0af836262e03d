use chrono::NaiveDate;
use planner::core::HighlightIndex;
use std::collections::BTreeSet;

mod common;
use common::memory_store;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn attach_seeds_from_existing_events() {
    let (mut store, _) = memory_store("2024-05-01 08:00");
    store.add("2024-05-01 09:00", "A").unwrap();
    store.add("2024-05-01 10:00", "B").unwrap();
    store.add("2024-05-07 10:00", "C").unwrap();

    let index = HighlightIndex::attach(&mut store).unwrap();
    let index = index.borrow();

    assert_eq!(index.count(date("2024-05-01")), 2);
    assert_eq!(
        index.highlighted_dates(),
        BTreeSet::from([date("2024-05-01"), date("2024-05-07")])
    );
    assert_eq!(store.subscriber_count(), 1);
}

#[test]
fn removing_one_of_two_keeps_the_day_marked() {
    let (mut store, _) = memory_store("2024-05-01 08:00");
    let index = HighlightIndex::attach(&mut store).unwrap();
    let d = date("2024-05-01");

    let a = store.add("2024-05-01 09:00", "A").unwrap();
    let b = store.add("2024-05-01 17:00", "B").unwrap();

    store.remove(a.id).unwrap();
    assert!(index.borrow().is_highlighted(d));

    store.remove(b.id).unwrap();
    assert!(!index.borrow().is_highlighted(d));
    assert_eq!(index.borrow().len(), 0);
}

#[test]
fn moving_across_days_updates_both_days() {
    let (mut store, _) = memory_store("2024-05-01 08:00");
    let index = HighlightIndex::attach(&mut store).unwrap();
    let (d1, d2) = (date("2024-05-01"), date("2024-05-02"));

    let only = store.add("2024-05-01 09:00", "Only").unwrap();
    store.add("2024-05-02 12:00", "Already there").unwrap();

    store.edit(only.id, Some("2024-05-02 08:00"), None).unwrap();

    let index = index.borrow();
    assert!(!index.is_highlighted(d1));
    assert_eq!(index.count(d2), 2);
}

#[test]
fn same_day_and_description_edits_leave_counts_alone() {
    let (mut store, _) = memory_store("2024-05-01 08:00");
    let index = HighlightIndex::attach(&mut store).unwrap();
    let d = date("2024-05-01");

    let e = store.add("2024-05-01 09:00", "A").unwrap();
    store.edit(e.id, Some("2024-05-01 23:59"), Some("Later")).unwrap();
    store.edit(e.id, None, Some("Renamed")).unwrap();

    assert_eq!(index.borrow().count(d), 1);
    assert_eq!(index.borrow().len(), 1);
}

#[test]
fn index_matches_store_after_mixed_mutations() {
    let (mut store, _) = memory_store("2024-05-01 08:00");
    let index = HighlightIndex::attach(&mut store).unwrap();

    let a = store.add("2024-05-01 09:00", "A").unwrap();
    let b = store.add("2024-05-03 09:00", "B").unwrap();
    let c = store.add("2024-05-03 11:00", "C").unwrap();
    store.add("2024-06-10 00:00", "D").unwrap();
    store.edit(a.id, Some("2024-05-04 09:00"), None).unwrap();
    store.remove(b.id).unwrap();
    store.edit(c.id, Some("2024-05-03 23:00"), None).unwrap();

    let expected: BTreeSet<NaiveDate> = store.list_all().unwrap().iter().map(|e| e.day()).collect();
    assert_eq!(index.borrow().highlighted_dates(), expected);

    // a second, late-attached index agrees with the live one
    let fresh = HighlightIndex::attach(&mut store).unwrap();
    assert_eq!(*fresh.borrow(), *index.borrow());
    assert!(store.take_listener_failures().is_empty());
}

#[test]
fn dropped_subscription_stops_updates() {
    let (mut store, _) = memory_store("2024-05-01 08:00");
    let index = std::rc::Rc::new(std::cell::RefCell::new(HighlightIndex::new()));
    let id = store.subscribe(index.clone());

    store.add("2024-05-01 09:00", "A").unwrap();
    store.unsubscribe(id);
    store.add("2024-05-02 09:00", "B").unwrap();

    assert_eq!(index.borrow().len(), 1);
}

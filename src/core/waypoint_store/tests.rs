use super::*;
use glam::DVec3;

fn store_with(ids: &[u64]) -> WaypointStore {
    let mut store = WaypointStore::new();
    for &id in ids {
        store.insert(Waypoint::new(id, DVec3::new(id as f64, 0.0, 0.0), id as f64 * 10.0));
    }
    store
}

#[test]
fn test_traversierung_sortiert_nach_id() {
    // Einfüge-Reihenfolge darf die Traversierung nicht beeinflussen
    let store = store_with(&[7, 2, 5]);
    assert_eq!(store.ids(), vec![2, 5, 7]);

    let snapshot = store.snapshot().expect("Snapshot erwartet");
    assert_eq!(
        snapshot.positions,
        vec![
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(5.0, 0.0, 0.0),
            DVec3::new(7.0, 0.0, 0.0)
        ]
    );
}

#[test]
fn test_snapshot_headings_aus_erstem_und_letztem_wegpunkt() {
    let mut store = store_with(&[1, 2, 3]);
    let snapshot = store.snapshot().expect("Snapshot erwartet");
    assert_eq!(snapshot.start_heading, 10.0);
    assert_eq!(snapshot.end_heading, 30.0);

    // Letzten Wegpunkt löschen → End-Heading folgt dem neuen letzten Wegpunkt
    store.remove(3);
    let snapshot = store.snapshot().expect("Snapshot erwartet");
    assert_eq!(snapshot.end_heading, 20.0);
}

#[test]
fn test_snapshot_leer_ist_none() {
    let store = WaypointStore::new();
    assert!(store.snapshot().is_none());
}

#[test]
fn test_insert_bestehende_id_ersetzt() {
    let mut store = store_with(&[1]);
    let is_new = store.insert(Waypoint::new(1, DVec3::new(5.0, 1.0, 2.0), 45.0));
    assert!(!is_new);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(1).map(|w| w.heading), Some(45.0));
}

#[test]
fn test_update_unbekannte_id_ist_noop() {
    let mut store = store_with(&[1]);
    assert!(!store.update(99, DVec3::ONE, 0.0));
    assert_eq!(store.len(), 1);
    assert!(store.update(1, DVec3::ONE, f64::NAN));
    assert_eq!(store.get(1).map(|w| w.heading), Some(0.0));
}

#[test]
fn test_snapshot_anchor_ist_erster_wegpunkt() {
    let store = store_with(&[4, 3]);
    let snapshot = store.snapshot().expect("Snapshot erwartet");
    assert_eq!(snapshot.anchor(), DVec3::new(3.0, 0.0, 0.0));
}

//! Integration tests for the rotation resolver and index stepping.

use std::collections::HashSet;
use volleyball_rotation_web::{
    default_roster, lineup, next_rotation, normalize_rotation, previous_rotation, resolve,
    rotation_chart, Player, PlayerId, RotationCycle, RotationResolver, Seat, ROTATION_COUNT,
};

fn seat(n: u8) -> Seat {
    Seat::from_number(n).unwrap()
}

fn name_at(rotation: i64, s: u8, roster: &[Player]) -> Option<String> {
    resolve(rotation, seat(s), roster).map(|p| p.name.clone())
}

#[test]
fn rotation_one_is_identity() {
    let roster = default_roster();
    for s in Seat::ALL {
        let p = resolve(1, s, &roster).unwrap();
        assert_eq!(p.home_seat, s);
    }
}

#[test]
fn periodic_with_period_eleven() {
    let roster = default_roster();
    for r in -22..=22i64 {
        for s in Seat::ALL {
            let here = resolve(r, s, &roster).map(|p| p.id);
            assert_eq!(here, resolve(r + 11, s, &roster).map(|p| p.id));
            assert_eq!(here, resolve(r - 11, s, &roster).map(|p| p.id));
        }
    }
}

#[test]
fn every_rotation_is_a_bijection() {
    let roster = default_roster();
    for r in 1..=11 {
        let ids: HashSet<PlayerId> = Seat::ALL
            .iter()
            .map(|&s| resolve(r, s, &roster).expect("seat empty with full roster").id)
            .collect();
        assert_eq!(ids.len(), 11, "rotation {r}");
    }
}

#[test]
fn next_and_previous_are_inverse() {
    for r in 1..=ROTATION_COUNT {
        assert_eq!(previous_rotation(next_rotation(r)), r);
        assert_eq!(next_rotation(previous_rotation(r)), r);
        let n = next_rotation(r);
        assert!((1..=ROTATION_COUNT).contains(&n));
    }
}

#[test]
fn wrap_boundaries() {
    assert_eq!(next_rotation(11), 1);
    assert_eq!(previous_rotation(1), 11);
    assert_eq!(next_rotation(5), 6);
    assert_eq!(previous_rotation(5), 4);
}

#[test]
fn concrete_positions_on_default_roster() {
    let roster = default_roster();
    assert_eq!(name_at(1, 2, &roster).as_deref(), Some("C"));
    // P2 occupant moves to B5 at rotation 2.
    assert_eq!(name_at(2, 11, &roster).as_deref(), Some("C"));
    assert_eq!(name_at(11, 3, &roster).as_deref(), Some("C"));
    // B1 feeds P1: G (home B1) serves at rotation 2.
    assert_eq!(name_at(2, 1, &roster).as_deref(), Some("G"));
    // P3 -> P2: B (home P3) is front-right at rotation 2.
    assert_eq!(name_at(2, 2, &roster).as_deref(), Some("B"));
}

#[test]
fn negative_rotation_uses_euclidean_wrap() {
    let roster = default_roster();
    // Rotation 0 is the same as rotation 11.
    assert_eq!(name_at(0, 3, &roster), name_at(11, 3, &roster));
    assert_eq!(name_at(-10, 2, &roster), name_at(1, 2, &roster));
}

#[test]
fn missing_home_seat_leaves_exactly_one_empty_rotation_per_seat() {
    let roster: Vec<Player> = default_roster()
        .into_iter()
        .filter(|p| p.home_seat != seat(9))
        .collect();
    for s in Seat::ALL {
        let empty: Vec<i64> = (1..=11).filter(|&r| resolve(r, s, &roster).is_none()).collect();
        assert_eq!(empty.len(), 1, "seat {s}");
    }
    // At rotation 1 the hole sits in B3 itself.
    assert!(resolve(1, seat(9), &roster).is_none());
    assert!(resolve(2, seat(9), &roster).is_some());
}

#[test]
fn lineup_lists_all_seats_in_number_order() {
    let roster = default_roster();
    let l = lineup(4, &roster);
    assert_eq!(l.len(), 11);
    for (a, s) in l.iter().zip(Seat::ALL) {
        assert_eq!(a.seat, s);
        assert_eq!(a.label, s.label());
        assert_eq!(a.player.as_ref().map(|p| p.id), resolve(4, s, &roster).map(|p| p.id));
    }
}

#[test]
fn chart_covers_eleven_rotations() {
    let chart = rotation_chart(&default_roster());
    let rotations: Vec<u8> = chart.iter().map(|l| l.rotation).collect();
    assert_eq!(rotations, (1..=11).collect::<Vec<u8>>());
}

#[test]
fn custom_cycle_drives_resolver() {
    // Identity-ordered cycle: each player steps to the next seat number.
    let resolver = RotationResolver::new(RotationCycle::new(Seat::ALL).unwrap());
    let roster = default_roster();
    assert_eq!(resolver.source_seat(2, Seat::P2), Seat::P1);
    let at_p2 = resolver.resolve(2, Seat::P2, &roster).unwrap();
    assert_eq!(at_p2.name, "D");
}

#[test]
fn extreme_rotations_resolve_like_their_canonical_index() {
    let roster = default_roster();
    for r in [i64::MIN, i64::MIN + 1, i64::MAX, i64::MAX - 1] {
        let canonical = i64::from(normalize_rotation(r));
        for s in Seat::ALL {
            let here = resolve(r, s, &roster).map(|p| p.id);
            assert_eq!(here, resolve(canonical, s, &roster).map(|p| p.id), "rotation {r}, seat {s}");
        }
    }
    // i64::MIN is rotation 3: P3 holds whoever started two cycle steps back (P5 -> F).
    assert_eq!(name_at(i64::MIN, 3, &roster), name_at(3, 3, &roster));
    assert_eq!(name_at(3, 3, &roster).as_deref(), Some("F"));
}

//! Properties every catalog component must hold.

use enigma_core::{Direction, Letter, ReflectorId, RotorId, catalog};

use crate::common::letter;

#[test]
fn catalog_rotors_are_permutations() {
    for id in RotorId::ALL {
        let rotor = id.rotor();
        let mut seen = [false; 26];
        for wired in rotor.wiring().letters() {
            assert!(!seen[wired.index()], "rotor {id} repeats {wired}");
            seen[wired.index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "rotor {id} misses a letter");
    }
}

#[test]
fn catalog_reflectors_are_involutions() {
    for id in ReflectorId::ALL {
        let reflector = id.reflector();
        assert!(reflector.wiring().is_involution(), "reflector {id}");
        for x in Letter::ALL {
            assert_eq!(reflector.reflect(reflector.reflect(x)), x, "reflector {id}");
            assert_ne!(reflector.reflect(x), x, "reflector {id} wires {x} to itself");
        }
    }
}

#[test]
fn rotor_round_trips_for_every_state() {
    for id in RotorId::ALL {
        let base = id.rotor();
        for offset in Letter::ALL {
            for ring in Letter::ALL {
                let rotor = base.clone().with_offset(offset).with_ring(ring);
                for x in Letter::ALL {
                    let out = rotor.step(x, Direction::Forward);
                    assert_eq!(
                        rotor.step(out, Direction::Inverse),
                        x,
                        "rotor {id} offset {offset} ring {ring} letter {x}"
                    );
                }
            }
        }
    }
}

#[test]
fn rotor_i_notch_only_at_q() {
    let mut rotor = catalog::rotor("I").unwrap();
    for offset in Letter::ALL {
        rotor.set_offset(offset);
        assert_eq!(rotor.at_notch(), offset.index() == 16, "offset {offset}");
    }
}

#[test]
fn notch_ignores_ring_setting() {
    for ring in Letter::ALL {
        let rotor = RotorId::I
            .rotor()
            .with_ring(ring)
            .with_offset(letter('Q'));
        assert!(rotor.at_notch(), "ring {ring}");
    }
}

#[test]
fn two_notch_rotors_trip_at_both() {
    let mut rotor = RotorId::VI.rotor();
    let mut tripped = Vec::new();
    for _ in 0..26 {
        if rotor.at_notch() {
            tripped.push(rotor.offset().to_char());
        }
        rotor.advance();
    }
    assert_eq!(tripped, vec!['M', 'Z']);
    assert_eq!(rotor.offset(), Letter::A);
}

#[test]
fn known_answers() {
    let rotor = catalog::rotor("I").unwrap();
    assert_eq!(rotor.step(letter('A'), Direction::Forward), letter('E'));
    let reflector = catalog::reflector("B").unwrap();
    assert_eq!(reflector.reflect(letter('A')), letter('Y'));
}

#[test]
fn thin_reflectors_and_greek_rotors_resolve() {
    assert!(catalog::reflector("B-Thin").is_some());
    assert!(catalog::reflector("C-Thin").is_some());
    assert!(catalog::rotor("Beta").is_some());
    assert!(catalog::rotor("Gamma").is_some());
    assert_eq!(catalog::rotor_names().count(), 10);
    assert_eq!(catalog::reflector_names().count(), 5);
}

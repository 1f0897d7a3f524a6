//! Rotors and a reflector composed into a three-rotor stack.

use enigma_core::{Direction, ReflectorId, RotorId};

use crate::common::{Stack, letter};

#[test]
fn still_pass_through_iii_ii_i_and_b_is_self_consistent() {
    let rotors = [RotorId::III, RotorId::II, RotorId::I].map(RotorId::rotor);
    let reflector = ReflectorId::B.reflector();

    let mut signal = letter('A');
    for rotor in &rotors {
        signal = rotor.step(signal, Direction::Forward);
    }
    signal = reflector.reflect(signal);
    for rotor in rotors.iter().rev() {
        signal = rotor.step(signal, Direction::Inverse);
    }
    assert_eq!(signal, letter('U'));

    // Unwind: undo each inverse step with a forward step, reflect, then undo
    // each forward step with an inverse step.
    let mut back = signal;
    for rotor in &rotors {
        back = rotor.step(back, Direction::Forward);
    }
    back = reflector.reflect(back);
    for rotor in rotors.iter().rev() {
        back = rotor.step(back, Direction::Inverse);
    }
    assert_eq!(back, letter('A'));
}

#[test]
fn stack_never_encodes_a_letter_as_itself() {
    let stack = Stack::new(
        [RotorId::I, RotorId::II, RotorId::III],
        ReflectorId::B.reflector(),
    );
    for c in 'A'..='Z' {
        assert_ne!(stack.pass(letter(c)), letter(c));
    }
}

#[test]
fn encodes_reference_message() {
    let mut stack = Stack::new(
        [RotorId::I, RotorId::II, RotorId::III],
        ReflectorId::B.reflector(),
    );
    assert_eq!(stack.encode("AAAAA"), "BDZGO");
    assert_eq!(stack.window(), "AAF");
}

#[test]
fn ring_settings_change_the_output() {
    let mut stack = Stack::new(
        [RotorId::I, RotorId::II, RotorId::III],
        ReflectorId::B.reflector(),
    )
    .with_rings("BBB");
    assert_eq!(stack.encode("AAAAA"), "EWTYX");
}

#[test]
fn middle_rotor_double_steps() {
    let mut stack = Stack::new(
        [RotorId::I, RotorId::II, RotorId::III],
        ReflectorId::B.reflector(),
    )
    .with_window("ADU");
    let mut windows = Vec::new();
    for _ in 0..3 {
        stack.advance();
        windows.push(stack.window());
    }
    assert_eq!(windows, ["ADV", "AEW", "BFX"]);
}

#[test]
fn decoding_with_same_settings_restores_plaintext() {
    let setup = || {
        Stack::new(
            [RotorId::IV, RotorId::VIII, RotorId::Beta],
            ReflectorId::C.reflector(),
        )
        .with_window("QEV")
        .with_rings("DKZ")
    };
    let plaintext = "ATTACKATDAWNXTHEWEATHERISCLEAR";
    let ciphertext = setup().encode(plaintext);
    assert_ne!(ciphertext, plaintext);
    assert_eq!(setup().encode(&ciphertext), plaintext);
}

#[test]
fn catalog_copies_do_not_share_rotation() {
    let mut first = Stack::new(
        [RotorId::I, RotorId::II, RotorId::III],
        ReflectorId::B.reflector(),
    );
    first.encode("AAAAAAAAAA");
    let second = Stack::new(
        [RotorId::I, RotorId::II, RotorId::III],
        ReflectorId::B.reflector(),
    );
    assert_eq!(second.window(), "AAA");
}

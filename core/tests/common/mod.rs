//! Shared test helpers.
//!
//! `Stack` is a minimal three-rotor machine used to exercise the mechanisms
//! end to end: stepping with the double-step rule, a forward pass through the
//! rotors, the reflector, and the inverse pass back.

use enigma_core::{Direction, Letter, Reflector, Rotor, RotorId};

pub fn letter(c: char) -> Letter {
    Letter::from_char(c).unwrap()
}

/// Rotors are stored left to right, as they sit in the machine. The signal
/// enters on the right.
pub struct Stack {
    pub rotors: [Rotor; 3],
    pub reflector: Reflector,
}

impl Stack {
    pub fn new(ids: [RotorId; 3], reflector: Reflector) -> Self {
        Self {
            rotors: ids.map(RotorId::rotor),
            reflector,
        }
    }

    pub fn with_window(mut self, window: &str) -> Self {
        for (rotor, c) in self.rotors.iter_mut().zip(window.chars()) {
            rotor.set_offset(letter(c));
        }
        self
    }

    pub fn with_rings(mut self, rings: &str) -> Self {
        for (rotor, c) in self.rotors.iter_mut().zip(rings.chars()) {
            rotor.set_ring(letter(c));
        }
        self
    }

    pub fn window(&self) -> String {
        self.rotors.iter().map(|r| r.offset().to_char()).collect()
    }

    /// Advance before each key press. A middle rotor at its notch turns both
    /// itself and the left rotor (the double step).
    pub fn advance(&mut self) {
        let [left, middle, right] = &mut self.rotors;
        if middle.at_notch() {
            middle.advance();
            left.advance();
        } else if right.at_notch() {
            middle.advance();
        }
        right.advance();
    }

    /// One signal pass with the rotors held still.
    pub fn pass(&self, input: Letter) -> Letter {
        let mut signal = input;
        for rotor in self.rotors.iter().rev() {
            signal = rotor.step(signal, Direction::Forward);
        }
        signal = self.reflector.reflect(signal);
        for rotor in &self.rotors {
            signal = rotor.step(signal, Direction::Inverse);
        }
        signal
    }

    pub fn encode(&mut self, text: &str) -> String {
        text.chars()
            .map(|c| {
                self.advance();
                self.pass(letter(c)).to_char()
            })
            .collect()
    }
}

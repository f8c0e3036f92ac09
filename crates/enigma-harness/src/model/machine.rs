//! Model machine.
//!
//! Each keystroke builds the full 26-entry substitution table of the machine
//! at its current rotor positions by composing permutations, then looks the
//! key up in that table. A rotor at offset `k = position - ring` is the
//! wiring conjugated by a rotation of `k`.

use enigma_core::{ReflectorKind, RotorKind, SteppingMode};

use super::{operation::OperationError, plugboard::ModelPlugboard};

type Permutation = [u8; 26];

fn table(wiring: &str) -> Permutation {
    let mut table = [0u8; 26];
    for (slot, byte) in table.iter_mut().zip(wiring.bytes()) {
        *slot = byte - b'A';
    }
    table
}

fn invert(p: &Permutation) -> Permutation {
    let mut inverse = [0u8; 26];
    for (i, &v) in p.iter().enumerate() {
        inverse[usize::from(v)] = i as u8;
    }
    inverse
}

/// `then(first, second)[x] == second[first[x]]`.
fn then(first: &Permutation, second: &Permutation) -> Permutation {
    let mut out = [0u8; 26];
    for (slot, &mid) in out.iter_mut().zip(first.iter()) {
        *slot = second[usize::from(mid)];
    }
    out
}

fn rotated(wiring: &Permutation, offset: u8) -> Permutation {
    let k = usize::from(offset);
    let mut out = [0u8; 26];
    for (x, slot) in out.iter_mut().enumerate() {
        let w = usize::from(wiring[(x + k) % 26]);
        *slot = ((w + 26 - k) % 26) as u8;
    }
    out
}

#[derive(Debug, Clone)]
struct ModelRotor {
    wiring: Permutation,
    notch: u8,
    ring: u8,
    position: u8,
}

/// Reference machine.
#[derive(Debug, Clone)]
pub struct ModelMachine {
    rotors: Vec<ModelRotor>,
    reflector: Permutation,
    plugboard: ModelPlugboard,
    stepping: SteppingMode,
}

impl ModelMachine {
    /// Create a model with catalog parts, all rotors at `A`.
    pub fn new(rotors: &[RotorKind], reflector: ReflectorKind, stepping: SteppingMode) -> Self {
        let rotors = rotors
            .iter()
            .map(|kind| ModelRotor {
                wiring: table(kind.wiring()),
                notch: kind.notch() as u8 - b'A',
                ring: 0,
                position: 0,
            })
            .collect();

        Self { rotors, reflector: table(reflector.wiring()), plugboard: ModelPlugboard::new(), stepping }
    }

    /// The model plugboard.
    pub fn plugboard(&self) -> &ModelPlugboard {
        &self.plugboard
    }

    /// Mutable access to the model plugboard.
    pub fn plugboard_mut(&mut self) -> &mut ModelPlugboard {
        &mut self.plugboard
    }

    /// Rotor positions, left to right.
    pub fn positions(&self) -> Vec<u8> {
        self.rotors.iter().map(|r| r.position).collect()
    }

    /// Ring settings, left to right.
    pub fn rings(&self) -> Vec<u8> {
        self.rotors.iter().map(|r| r.ring).collect()
    }

    fn check_values(&self, values: &[u8]) -> Result<(), OperationError> {
        if values.len() != self.rotors.len() {
            return Err(OperationError::MismatchedCount);
        }
        if values.iter().any(|&v| v >= 26) {
            return Err(OperationError::InvalidPosition);
        }
        Ok(())
    }

    /// Set positions by index.
    pub fn set_positions(&mut self, values: &[u8]) -> Result<(), OperationError> {
        self.check_values(values)?;
        for (rotor, &v) in self.rotors.iter_mut().zip(values) {
            rotor.position = v;
        }
        Ok(())
    }

    /// Set ring settings by index.
    pub fn set_rings(&mut self, values: &[u8]) -> Result<(), OperationError> {
        self.check_values(values)?;
        for (rotor, &v) in self.rotors.iter_mut().zip(values) {
            rotor.ring = v;
        }
        Ok(())
    }

    fn advance(&mut self) {
        let n = self.rotors.len();
        let at_notch: Vec<bool> = self.rotors.iter().map(|r| r.position == r.notch).collect();

        let moves: Vec<bool> = match self.stepping {
            SteppingMode::SingleCarry => {
                // Rotor i moves iff every rotor to its right sat at its notch.
                (0..n).map(|i| at_notch[i + 1..].iter().all(|&b| b)).collect()
            },
            SteppingMode::DoubleStep => (0..n)
                .map(|i| i == n - 1 || at_notch[i + 1] || (i > 0 && at_notch[i]))
                .collect(),
        };

        for (rotor, moved) in self.rotors.iter_mut().zip(moves) {
            if moved {
                rotor.position = (rotor.position + 1) % 26;
            }
        }
    }

    fn substitution(&self) -> Permutation {
        let mut plug = [0u8; 26];
        for (i, slot) in plug.iter_mut().enumerate() {
            let letter = char::from(b'A' + i as u8);
            *slot = self.plugboard.swap(letter) as u8 - b'A';
        }

        let stack: Vec<Permutation> = self
            .rotors
            .iter()
            .map(|r| rotated(&r.wiring, (r.position + 26 - r.ring) % 26))
            .collect();

        let mut total = plug;
        for p in stack.iter().rev() {
            total = then(&total, p);
        }
        total = then(&total, &self.reflector);
        for p in &stack {
            total = then(&total, &invert(p));
        }
        then(&total, &plug)
    }

    /// Press one key.
    pub fn press(&mut self, letter: char) -> Result<char, OperationError> {
        if !letter.is_ascii_uppercase() {
            return Err(OperationError::InvalidLetter);
        }
        self.advance();
        let table = self.substitution();
        Ok(char::from(b'A' + table[usize::from(letter as u8 - b'A')]))
    }

    /// Encrypt a message: fold case, drop whitespace, reject anything else.
    pub fn type_message(&mut self, message: &str) -> Result<String, OperationError> {
        let letters: Vec<char> =
            message.chars().filter(|c| !c.is_whitespace()).map(|c| c.to_ascii_uppercase()).collect();
        if letters.iter().any(|c| !c.is_ascii_uppercase()) {
            return Err(OperationError::InvalidCharacter);
        }
        letters.into_iter().map(|c| self.press(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ModelMachine {
        ModelMachine::new(
            &[RotorKind::III, RotorKind::II, RotorKind::I],
            ReflectorKind::B,
            SteppingMode::SingleCarry,
        )
    }

    #[test]
    fn model_reproduces_known_ciphertext() {
        let mut model = model();
        assert_eq!(model.type_message("bootdev rocks").unwrap(), "WLQUCDIFFVVH");
    }

    #[test]
    fn model_reproduces_ring_setting_ciphertext() {
        let mut model = model();
        model.set_rings(&[13, 2, 8]).unwrap();
        assert_eq!(model.type_message("bootdev rocks").unwrap(), "TRRWVHPZVLMJ");
    }

    #[test]
    fn model_double_steps() {
        let mut model = ModelMachine::new(
            &[RotorKind::I, RotorKind::II, RotorKind::III],
            ReflectorKind::B,
            SteppingMode::DoubleStep,
        );
        model.set_positions(&[0, 3, 20]).unwrap();
        for _ in 0..3 {
            model.press('A').unwrap();
        }
        assert_eq!(model.positions(), vec![1, 5, 23]);
    }

    #[test]
    fn invert_undoes_permutation() {
        let p = table(RotorKind::IV.wiring());
        let identity: Permutation = std::array::from_fn(|i| i as u8);
        assert_eq!(then(&p, &invert(&p)), identity);
    }
}

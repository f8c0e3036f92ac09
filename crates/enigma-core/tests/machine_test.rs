//! Machine tests against known ciphertexts.

use enigma_core::{
    EnigmaError, HISTORICAL_BLOCK_SIZE, Machine, MachineSettings, Plugboard, ReflectorKind,
    RotorKind, SteppingMode, group_blocks,
};

fn machine(rotors: [RotorKind; 3]) -> Machine {
    let rotors = rotors.into_iter().map(|kind| kind.build().unwrap()).collect();
    let reflector = ReflectorKind::B.build().unwrap();
    Machine::new(rotors, reflector, Plugboard::new()).unwrap()
}

fn default_machine() -> Machine {
    machine([RotorKind::III, RotorKind::II, RotorKind::I])
}

fn encrypt_letters(machine: &mut Machine, input: &str) -> String {
    input.chars().map(|c| machine.encrypt_letter(c).unwrap()).collect()
}

#[test]
fn letters_are_reciprocal() {
    let mut machine = default_machine();
    assert_eq!(encrypt_letters(&mut machine, "AAA"), "FTZ");

    machine.set_rotor_positions(&['A', 'A', 'A']).unwrap();
    assert_eq!(encrypt_letters(&mut machine, "FTZ"), "AAA");
}

#[test]
fn first_letter_maps_a_to_f_and_back() {
    let mut machine = default_machine();
    assert_eq!(machine.encrypt_letter('A'), Ok('F'));

    machine.set_rotor_positions(&[0u8, 0, 0]).unwrap();
    assert_eq!(machine.encrypt_letter('F'), Ok('A'));
}

#[test]
fn plugboard_swaps_on_both_sides() {
    let mut machine = default_machine();
    machine.set_plugboard_connections(&[('M', 'F')]).unwrap();
    assert_eq!(encrypt_letters(&mut machine, "AAA"), "MTZ");

    machine.set_rotor_positions(&['A', 'A', 'A']).unwrap();
    assert_eq!(encrypt_letters(&mut machine, "MTZ"), "AAA");

    machine.add_plugboard_connection('N', 'Z').unwrap();
    machine.set_rotor_positions(&['A', 'A', 'A']).unwrap();
    assert_eq!(encrypt_letters(&mut machine, "AAA"), "MTN");
}

#[test]
fn encrypts_bootdev_rocks() {
    let mut machine = default_machine();
    assert_eq!(machine.encrypt_string("bootdev rocks").unwrap(), "WLQUCDIFFVVH");
    assert_eq!(machine.rotor_position_letters(), "AAM");
}

#[test]
fn decrypts_bootdev_rocks() {
    let mut machine = default_machine();
    assert_eq!(machine.decrypt_string("WLQUC DIFFV VH").unwrap(), "BOOTDEVROCKS");
}

#[test]
fn ring_settings_change_ciphertext() {
    let mut machine = default_machine();
    machine.set_rotor_ring_settings(&['B', 'C', 'B']).unwrap();
    assert_eq!(machine.encrypt_string("bootdev rocks").unwrap(), "FDFBLXNBTKUH");

    let mut machine = default_machine();
    machine.set_rotor_ring_settings(&['N', 'C', 'I']).unwrap();
    assert_eq!(machine.encrypt_string("bootdev rocks").unwrap(), "TRRWVHPZVLMJ");
}

#[test]
fn plugboard_pairs_change_ciphertext() {
    let mut machine = default_machine();
    machine.set_plugboard_connections(&[('A', 'B'), ('C', 'D'), ('E', 'F')]).unwrap();
    assert_eq!(machine.encrypt_string("bootdev rocks").unwrap(), "ELQUCUIEEMVH");
}

#[test]
fn historical_service_machine_check() {
    // Rotors I-II-III, reflector B, AAA: the well-known AAAAA -> BDZGO.
    let mut machine = machine([RotorKind::I, RotorKind::II, RotorKind::III]);
    assert_eq!(machine.encrypt_string("AAAAA").unwrap(), "BDZGO");
    assert_eq!(machine.rotor_position_letters(), "AAF");
}

#[test]
fn double_step_advances_middle_rotor_twice() {
    let mut machine = machine([RotorKind::I, RotorKind::II, RotorKind::III])
        .with_stepping(SteppingMode::DoubleStep);
    machine.set_rotor_positions(&['A', 'D', 'U']).unwrap();

    let mut seen = Vec::new();
    for _ in 0..3 {
        machine.encrypt_letter('A').unwrap();
        seen.push(machine.rotor_position_letters());
    }
    assert_eq!(seen, ["ADV", "AEW", "BFX"]);
}

#[test]
fn single_carry_does_not_double_step() {
    let mut machine = machine([RotorKind::I, RotorKind::II, RotorKind::III]);
    machine.set_rotor_positions(&['A', 'D', 'U']).unwrap();

    let mut seen = Vec::new();
    for _ in 0..3 {
        machine.encrypt_letter('A').unwrap();
        seen.push(machine.rotor_position_letters());
    }
    assert_eq!(seen, ["ADV", "AEW", "AEX"]);
}

#[test]
fn stepping_modes_diverge_after_double_step() {
    let mut single = machine([RotorKind::I, RotorKind::II, RotorKind::III]);
    single.set_rotor_positions(&['A', 'D', 'U']).unwrap();
    assert_eq!(single.encrypt_string("HELLOWORLD").unwrap(), "IBKRCXLABG");

    let mut double = machine([RotorKind::I, RotorKind::II, RotorKind::III])
        .with_stepping(SteppingMode::DoubleStep);
    double.set_rotor_positions(&['A', 'D', 'U']).unwrap();
    assert_eq!(double.encrypt_string("HELLOWORLD").unwrap(), "IBXXXNVDFL");
}

#[test]
fn no_letter_encrypts_to_itself() {
    let mut machine = default_machine();
    for letter in ('A'..='Z').cycle().take(26 * 30) {
        assert_ne!(machine.encrypt_letter(letter).unwrap(), letter);
    }
}

#[test]
fn invalid_message_is_rejected() {
    let mut machine = default_machine();
    assert_eq!(
        machine.encrypt_string("BootDev Rocks@#"),
        Err(EnigmaError::InvalidCharacter('@'))
    );
}

#[test]
fn settings_build_matches_manual_assembly() {
    let mut from_settings = MachineSettings::default().build().unwrap();
    let mut manual = default_machine();
    assert_eq!(from_settings, manual);
    assert_eq!(
        from_settings.encrypt_string("attack at dawn").unwrap(),
        manual.encrypt_string("attack at dawn").unwrap()
    );
}

#[test]
fn grouped_output_for_display() {
    let mut machine = default_machine();
    let ciphertext = machine.encrypt_string("bootdev rocks").unwrap();
    insta::assert_snapshot!(group_blocks(&ciphertext, HISTORICAL_BLOCK_SIZE), @"WLQUC DIFFV VH");
}

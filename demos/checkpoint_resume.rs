//! Checkpoint and Resume
//!
//! This example drives a push_swap machine with a naive solver, saves a
//! checkpoint halfway through, and resumes the run from the saved copy.
//!
//! Key concepts:
//! - Solver-style driving through the public primitives
//! - Serialization formats (JSON for readability, bincode for compactness)
//! - Resuming keeps the full move log, so the final script verifies against
//!   the original input
//!
//! Run with: cargo run --example checkpoint_resume

use pushswap::checkpoint::{Checkpoint, CheckpointError};
use pushswap::core::PushSwap;
use pushswap::script::verify;

// Push the smallest element of A onto B, rotating the shorter way.
fn push_minimum(machine: &mut PushSwap) {
    let a = machine.stack_a();
    let Some(index) = a
        .iter()
        .enumerate()
        .min_by_key(|(_, value)| **value)
        .map(|(index, _)| index)
    else {
        return;
    };

    if index <= a.len() / 2 {
        for _ in 0..index {
            machine.ra();
        }
    } else {
        for _ in index..a.len() {
            machine.rra();
        }
    }
    machine.pb();
}

fn main() -> Result<(), CheckpointError> {
    println!("=== Checkpoint and Resume ===\n");

    let input = [8, -3, 5, 0, 12, 7, 1];
    let mut machine = PushSwap::new(&input);
    println!("Stack A: {:?}", machine.stack_a());

    // Phase 1: move half the elements to B
    for _ in 0..input.len() / 2 {
        push_minimum(&mut machine);
    }
    println!(
        "After phase 1: A = {:?}, B = {:?}, {} moves",
        machine.stack_a(),
        machine.stack_b(),
        machine.move_count()
    );

    let checkpoint = Checkpoint::capture(&machine);
    let json = checkpoint.to_json()?;
    let bytes = checkpoint.to_binary()?;
    println!(
        "  [Checkpoint] {} saved ({} bytes json, {} bytes bincode)",
        checkpoint.id,
        json.len(),
        bytes.len()
    );

    // Simulate a restart: the original machine is gone
    drop(machine);

    let mut resumed = Checkpoint::from_binary(&bytes)?.restore();
    println!("  [Checkpoint] Resumed at {} moves\n", resumed.move_count());

    // Phase 2: finish the selection and bring everything back
    while !resumed.stack_a().is_empty() {
        push_minimum(&mut resumed);
    }
    while !resumed.stack_b().is_empty() {
        resumed.pa();
    }

    println!("Stack A: {:?}", resumed.stack_a());
    println!("Solved: {}", resumed.is_solved());
    println!("Moves: {}", resumed.move_count());

    match verify(&input, &resumed.log().render()) {
        Ok(verdict) => println!("Checker: {} ({} moves)", verdict.label(), verdict.moves()),
        Err(err) => println!("Checker rejected script: {err}"),
    }

    Ok(())
}

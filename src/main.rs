use std::process;

use phase_gate::{PhaseGate, TRIALS};

fn main() {
    let gate = PhaseGate::new();

    for _ in 0..TRIALS {
        match gate.run_trial() {
            Ok(report) => println!("{}", report.value),
            Err(err) => {
                eprintln!("trial failed: {err}");
                process::exit(1);
            }
        }
    }
}

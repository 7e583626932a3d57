//! Example: a narrated session with the standard catalog
//!
//! Replays a short sequence of user actions (focus, drag, solute selection,
//! "show values", reset) and prints what a screen reader would announce after
//! each one, next to the model state.
//!
//! Run with `RUST_LOG=debug` to see recomputations and region transitions.

use molarity::model::{Solution, SolutionChange};
use molarity::narration::Control;
use molarity::simulation::MolaritySimulation;

fn print_state(simulation: &MolaritySimulation) {
    let solution = simulation.solution();
    println!(
        "  state      : {} | {:.3} mol | {:.3} L | {:.3} mol/L | {:.3} mol solids | {}",
        solution.solute().name(),
        solution.solute_amount(),
        solution.volume(),
        solution.concentration(),
        solution.precipitate_amount(),
        solution.color()
    );
}

fn announce(action: &str, narration: Option<String>) {
    println!("▶ {}", action);
    match narration {
        Some(text) => println!("  narration  : \"{}\"", text),
        None => println!("  narration  : (silent)"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Molarity - Narrated Session");
    println!("═══════════════════════════════════════════════════════\n");

    let mut simulation = MolaritySimulation::standard()?;

    // Stand-in for a sound producer
    simulation.add_observer(Box::new(|change: &SolutionChange, solution: &Solution| {
        if change.saturation_changed() {
            let cue = if solution.is_saturated() { "precipitate" } else { "dissolve" };
            println!("  sound      : {}", cue);
        }
    }));

    print_state(&simulation);

    announce("focus volume slider", simulation.focus(Control::Volume));
    for volume in [0.55, 0.6, 0.8, 0.95] {
        announce(&format!("drag volume to {} L", volume), simulation.set_volume(volume)?);
        print_state(&simulation);
    }
    simulation.blur(Control::Volume);

    announce("focus solute amount slider", simulation.focus(Control::SoluteAmount));
    for amount in [1.0, 3.0, 5.5, 7.33] {
        announce(
            &format!("drag solute amount to {} mol", amount),
            simulation.set_solute_amount(amount)?,
        );
        print_state(&simulation);
    }
    simulation.blur(Control::SoluteAmount);

    for name in ["Potassium permanganate", "Nickel (II) chloride", "Drink mix"] {
        announce(&format!("select {}", name), simulation.select_solute_by_name(name)?);
        print_state(&simulation);
    }

    simulation.set_show_values(true);
    announce("drag volume to 0.4 L (values shown)", simulation.set_volume(0.4)?);
    print_state(&simulation);

    announce("reset", simulation.reset());
    print_state(&simulation);

    Ok(())
}

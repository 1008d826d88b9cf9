//! skywave demo — play the solar-storm journey in the terminal.
//!
//! Usage:
//!   cargo run [--tick <ms>]

use std::io::Write;
use std::{env, process};

use sw_master::{Controller, StepCatalog, DEFAULT_TICK_MS};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let tick_ms = args
        .iter()
        .position(|a| a == "--tick")
        .and_then(|i| args.get(i + 1))
        .map(|v| {
            v.parse::<u64>().unwrap_or_else(|_| {
                eprintln!("Usage: skywave [--tick <ms>]");
                process::exit(1);
            })
        })
        .unwrap_or(DEFAULT_TICK_MS);

    let catalog = StepCatalog::solar_storm();
    println!("Cosmic Journey: From Sun to You");
    println!("Steps: {}", catalog.step_count());
    for step in catalog.steps() {
        println!(
            "  [{}] {} ({} ms, {} effects)",
            step.stage.label(),
            step.title,
            step.duration_ms,
            step.effects.len()
        );
    }
    println!();

    let mut ctrl = Controller::with_cadence(catalog, tick_ms).unwrap_or_else(|e| {
        eprintln!("Invalid catalog: {}", e);
        process::exit(1);
    });

    ctrl.play();
    log::info!("journey started at {} ms cadence", tick_ms);

    let mut last_step = usize::MAX;
    while !ctrl.is_finished() {
        if let Some(snap) = ctrl.drain() {
            let step = ctrl.current_step();
            if snap.step_index != last_step {
                last_step = snap.step_index;
                println!("\n{} — {}", step.title, step.description);
            }
            let revealed: Vec<&str> = step
                .effects
                .iter()
                .take(snap.effects_revealed)
                .map(|e| e.as_str())
                .collect();
            print!(
                "\r  {} {:5.1}% | wave {:5.1}% | intensity {:5.1} | {}",
                progress_bar(snap.progress),
                snap.progress,
                snap.wave_position,
                snap.intensity,
                revealed.join(", ")
            );
            let _ = std::io::stdout().flush();
        }
        std::thread::sleep(std::time::Duration::from_millis((tick_ms / 2).max(1)));
    }

    println!("\n\nJourney complete.");
}

/// A 20-cell text progress bar.
fn progress_bar(progress: f32) -> String {
    let filled = (progress / 5.0) as usize;
    let mut bar = String::with_capacity(22);
    bar.push('[');
    for i in 0..20 {
        bar.push(if i < filled { '#' } else { '-' });
    }
    bar.push(']');
    bar
}

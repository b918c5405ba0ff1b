//! Terminal rendering of simulation snapshots.
use colored::{ColoredString, Colorize};

use pippet_game::{DirtTier, Snapshot};

const BAR_CELLS: i32 = 20;
const SEVERITY_BAD: i32 = 70;
const SEVERITY_WARN: i32 = 40;

/// Draw the full status panel for one snapshot.
pub fn draw(snap: &Snapshot) {
    let sky = if snap.night {
        "Night".blue().bold()
    } else {
        "Day".yellow().bold()
    };
    println!();
    let time_label = format!("{:<12}", "time");
    println!("  {} {}{}", time_label.dimmed(), sky, dirt_marker(snap));

    // Hunger reads raw (higher is worse); the rest invert for severity.
    println!("{}", bar_line("hunger", snap.hunger, false));
    println!("{}", bar_line("happiness", snap.happiness, true));
    println!("{}", bar_line("energy", snap.energy, true));
    println!("{}", bar_line("cleanliness", snap.cleanliness, true));
    println!("{}", bar_line("health", snap.health, true));

    let mut status = snap.message.clone();
    if snap.sleeping {
        status.push_str(" (zzz)");
    } else if snap.excited {
        status.push_str(" (!)");
    }
    println!("  {}", status.bold());
}

fn dirt_marker(snap: &Snapshot) -> ColoredString {
    match snap.dirt_tier {
        DirtTier::Clean => "".normal(),
        DirtTier::Dirty => "  ~ dirty".dimmed(),
        DirtTier::VeryDirty => "  ~ very dirty".dimmed(),
    }
}

fn bar_line(label: &str, value: i32, inverted: bool) -> String {
    let filled = filled_cells(value);
    let empty = (BAR_CELLS - filled) as usize;
    let cells = format!("{}{}", "█".repeat(filled as usize), "░".repeat(empty));
    let painted = paint(cells, severity(value, inverted));
    let label = format!("{label:<12}");
    format!("  {} {} {:>3}", label.dimmed(), painted, value)
}

fn filled_cells(value: i32) -> i32 {
    (value * BAR_CELLS + 50) / 100
}

/// Severity of a reading: the raw value for higher-is-worse attributes,
/// inverted for higher-is-better ones.
fn severity(value: i32, inverted: bool) -> i32 {
    if inverted { 100 - value } else { value }
}

fn paint(cells: String, severity: i32) -> ColoredString {
    if severity >= SEVERITY_BAD {
        cells.red()
    } else if severity >= SEVERITY_WARN {
        cells.yellow()
    } else {
        cells.green()
    }
}

/// One-line command reference for the interactive loop.
pub fn print_help() {
    println!(
        "  commands: feed (f) | play (p) | bathe (b) | med (m) | sleep (s) | reset | status | quit"
    );
}

//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::pattern::ThrowPattern;
use crate::plan::{Flight, Hand, SimulationPlan};

/// One-line summary of a validated pattern.
pub fn format_pattern_console(pattern: &ThrowPattern) -> String {
    format!(
        "{} {} ({} balls, period {}, max height {})",
        "✓".green(),
        pattern.to_notation().bold(),
        pattern.ball_count(),
        pattern.period(),
        pattern.max_throw_height()
    )
}

/// Boxed flight table, one row per throw.
pub fn format_plan_console(pattern: &ThrowPattern, plan: &SimulationPlan) -> String {
    let mut output = String::new();
    let border = "━".repeat(44);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  {}  {} balls, {} beats ({} x {})",
        pattern.to_notation().bold(),
        plan.ball_count(),
        plan.total_beats(),
        plan.repetitions(),
        plan.period()
    );
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  {:>5}  {:>4}  {:>6}  {:>5}  HANDS", "BEAT", "BALL", "HEIGHT", "LAND");

    for flight in plan.flights() {
        let _ = writeln!(output, "{}", format_flight_row(flight));
    }
    let _ = write!(output, "{}", border_dim);

    output
}

fn format_flight_row(flight: &Flight) -> String {
    format!(
        "  {:>5}  {}  {:>6}  {:>5}  {} → {}",
        flight.start_beat,
        format_colored_ball(flight.ball_id),
        flight.throw_height,
        flight.end_beat,
        format_hand(flight.from_hand),
        format_hand(flight.to_hand),
    )
}

/// Ball ids cycle through a fixed palette so repeated balls are easy to follow.
fn format_colored_ball(ball_id: usize) -> String {
    let label = format!("{:>4}", ball_id);
    match ball_id % 6 {
        0 => label.red().to_string(),
        1 => label.green().to_string(),
        2 => label.blue().to_string(),
        3 => label.yellow().to_string(),
        4 => label.magenta().to_string(),
        _ => label.cyan().to_string(),
    }
}

fn format_hand(hand: Hand) -> &'static str {
    match hand {
        Hand::Left => "L",
        Hand::Right => "R",
    }
}

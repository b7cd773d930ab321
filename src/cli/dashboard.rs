//! Dashboard and day completion commands

use reconnect::App;
use reconnect::catalogue::{DASHBOARD_TIPS, QuoteRotator};
use reconnect::routes::Route;

use super::allowed;

const BAR_WIDTH: usize = 20;

pub fn dashboard_command(app: &App) {
    if !allowed(app.navigate(Route::Dashboard)) {
        return;
    }

    let progress = app.progress();
    let record = progress.record();

    println!("Your dashboard");
    match record.target {
        0 => println!("Challenge: -"),
        target => println!("Challenge: {} days", target),
    }
    println!();
    println!(
        "Overall progress: {:.0}%  ({} of {} days)",
        progress.percent_complete(),
        record.days,
        record.target
    );
    println!();

    println!("Daily progress");
    for line in render_bars(&progress.chart_series()) {
        println!("  {}", line);
    }
    println!();

    println!("Leaderboard");
    for (rank, entry) in app.leaderboard().iter().enumerate() {
        println!(
            "  {}. {:<8} {:>3}d {:>4}%",
            rank + 1,
            entry.name,
            entry.days,
            entry.progress
        );
    }
    println!();

    println!("Motivation: {}", QuoteRotator::new().current());
    println!();

    println!("Tips");
    for tip in DASHBOARD_TIPS {
        println!("  - {}", tip);
    }
}

pub fn complete_command(app: &mut App) {
    if !allowed(app.navigate(Route::Dashboard)) {
        return;
    }
    let Some(record) = app.complete_today() else {
        return;
    };
    let (days, target) = (record.days, record.target);

    if target == 0 {
        println!("Day logged. Run `reconnect onboard` to get a challenge assigned.");
    } else if days == target {
        println!("Challenge complete: {} of {} days. Well done!", days, target);
    } else {
        println!("Day logged: {} of {} days.", days, target);
    }
}

/// Horizontal bars scaled to the largest value, one line per slot (`D1`..)
fn render_bars(series: &[u8]) -> Vec<String> {
    let max = series.iter().copied().max().unwrap_or(0).max(1);
    series
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let filled = usize::from(value) * BAR_WIDTH / usize::from(max);
            format!(
                "D{} {}{} {:>3}%",
                i + 1,
                "#".repeat(filled),
                ".".repeat(BAR_WIDTH - filled),
                value
            )
        })
        .collect()
}

//! Open a view by its page path

use anyhow::{Result, bail};

use reconnect::App;
use reconnect::onboarding::{MAX_RATING, MIN_RATING, QUESTIONS};
use reconnect::routes::Route;

use super::allowed;
use super::content::{blog_command, challenges_command};
use super::dashboard::dashboard_command;

const FEATURES: [(&str, &str); 3] = [
    (
        "Mindful Onboarding",
        "A short questionnaire assigns a 7, 14, or 21-day detox challenge.",
    ),
    (
        "Visual Progress",
        "Calm charts show your completion and daily streaks.",
    ),
    (
        "Community",
        "A friendly leaderboard and rotating motivation keep you inspired.",
    ),
];

/// Resolve a page path such as `/dashboard`; the leading slash is optional
fn parse_route(path: &str) -> Result<Route> {
    let path = path.trim();
    let normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    match Route::from_path(&normalized) {
        Some(route) => Ok(route),
        None => {
            let known: Vec<_> = Route::ALL.iter().map(Route::path).collect();
            bail!("Unknown page '{}'. Known pages: {}", path, known.join(", "))
        }
    }
}

pub fn open_command(app: &App, path: &str) -> Result<()> {
    let route = parse_route(path)?;
    if !allowed(app.navigate(route)) {
        return Ok(());
    }

    match route {
        Route::Home => print_home(),
        Route::Login => print_login(app),
        Route::Onboarding => print_questions(),
        Route::Dashboard => dashboard_command(app),
        Route::Blog => blog_command(app),
        Route::Challenges => challenges_command(app),
    }
    Ok(())
}

fn print_home() {
    println!("Disconnect to Reconnect");
    println!(
        "Create calm, intentional distance from screens and return with clarity. \
         Gentle challenges, thoughtful stories, and visual progress."
    );
    println!();
    for (title, desc) in FEATURES {
        println!("  {}", title);
        println!("    {}", desc);
    }
    println!();
    println!("Get started with `reconnect login`, or browse `reconnect challenges`.");
}

fn print_login(app: &App) {
    if let Some(profile) = app.session().current() {
        println!("Signed in as {} <{}>.", profile.name, profile.email);
        return;
    }
    println!("Welcome back");
    println!("Sign in to begin your gentle detox journey. Replace screen autopilot with intention.");
    println!("Run `reconnect login` for the demo guest, or pass --name and --email.");
}

fn print_questions() {
    println!("A few quick questions");
    println!(
        "Rate each from {} (rarely) to {} (very often):",
        MIN_RATING, MAX_RATING
    );
    for (i, question) in QUESTIONS.iter().enumerate() {
        println!("  {}. {}", i + 1, question);
    }
    println!();
    println!("Answer with `reconnect onboard <six ratings>`.");
}

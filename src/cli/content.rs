//! Blog, challenge catalogue and quote commands

use std::time::Duration;

use reconnect::App;
use reconnect::catalogue::{QuoteRotator, catalogue_for};

pub fn blog_command(app: &App) {
    let posts = app.blog_posts();
    if posts.is_empty() {
        println!("No posts yet.");
        return;
    }

    println!("Mindful tech, simply told\n");
    for post in posts {
        println!("{}  {}", post.date.format("%b %-d, %Y"), post.title);
        println!("  {}", post.excerpt);
        println!("  {}", post.content);
        println!("  By {}", post.author);
        println!();
    }
}

pub fn challenges_command(app: &App) {
    let target = app.current_target();
    match target {
        0 => println!("Pick your pace. Your current plan: - days.\n"),
        days => println!("Pick your pace. Your current plan: {} days.\n", days),
    }

    for (info, current) in catalogue_for(target) {
        let marker = if current { "*" } else { " " };
        println!("{} {}", marker, info.length.label());
        for tip in info.tips {
            println!("    - {}", tip);
        }
    }
}

/// Print one quote, or keep rotating on the configured interval
pub async fn quotes_command(app: &App, follow: bool) {
    let mut rotator = QuoteRotator::new();
    println!("{}", rotator.current());
    if !follow {
        return;
    }

    let secs = app.config().dashboard.quote_interval_secs.max(1);
    let mut interval = tokio::time::interval(Duration::from_secs(secs));
    // The first tick completes immediately
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => println!("{}", rotator.advance()),
            _ = tokio::signal::ctrl_c() => break,
        }
    }
}

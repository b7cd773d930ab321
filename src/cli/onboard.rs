//! Onboarding questionnaire command

use anyhow::{Result, bail};

use reconnect::App;
use reconnect::onboarding::{Answers, MAX_RATING, QUESTIONS};
use reconnect::routes::Route;

use super::allowed;

/// Score six ratings and start the assigned challenge
pub fn onboard_command(app: &mut App, ratings: &[u8]) -> Result<()> {
    if !allowed(app.navigate(Route::Onboarding)) {
        return Ok(());
    }

    let Ok(ratings) = <[u8; 6]>::try_from(ratings) else {
        bail!("Expected {} ratings, got {}", QUESTIONS.len(), ratings.len());
    };
    let answers = Answers::new(ratings);

    for (question, rating) in QUESTIONS.iter().zip(answers.ratings()) {
        println!("  [{}/{}] {}", rating, MAX_RATING, question);
    }

    if let Some(record) = app.complete_onboarding(&answers) {
        println!();
        println!(
            "Score {} -> your challenge: {} days",
            answers.total(),
            record.target
        );
        println!("Track it with `reconnect dashboard`.");
    }
    Ok(())
}

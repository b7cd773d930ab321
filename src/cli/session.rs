//! Login and logout commands

use chrono::Utc;

use reconnect::App;
use reconnect::Profile;
use reconnect::routes::Route;

/// Sign in, as the guest placeholder unless a name or email is given
pub fn login_command(app: &mut App, name: Option<String>, email: Option<String>) {
    let next = match (name, email) {
        (None, None) => app.sign_in_guest(),
        (name, email) => {
            let name = name.unwrap_or_else(|| "Guest".to_string());
            let email = email.unwrap_or_else(|| "guest@example.com".to_string());
            app.sign_in(Profile::new(name, email, Utc::now()))
        }
    };

    if let Some(profile) = app.session().current() {
        println!("Welcome, {} <{}>", profile.name, profile.email);
    }
    if next == Route::Onboarding {
        println!("Next: answer 6 quick questions with `reconnect onboard <r1> .. <r6>`");
    }
}

pub fn logout_command(app: &mut App) {
    if !app.session().is_authenticated() {
        println!("Not signed in.");
        return;
    }
    app.sign_out();
    println!("Signed out.");
}

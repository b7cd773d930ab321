//! CLI command implementations

pub mod content;
pub mod dashboard;
pub mod init;
pub mod navigate;
pub mod onboard;
pub mod session;

use reconnect::routes::{Route, RouteDecision};

/// Print the guard's redirect; returns true when the view may render
pub(crate) fn allowed(decision: RouteDecision) -> bool {
    match decision {
        RouteDecision::Render(_) => true,
        RouteDecision::Redirect(to) => {
            println!("Please sign in first: redirecting to {}", to);
            if to == Route::Login {
                println!("Run `reconnect login` to continue.");
            }
            false
        }
    }
}

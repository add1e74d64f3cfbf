//! Registration, login, and session commands.

use tracing::info;

use mangastore_storefront::state::AppState;

/// Register a new user. Does not start a session.
///
/// # Errors
///
/// Returns an error on invalid input or a duplicate username/email.
pub fn register(
    state: &AppState,
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = state.auth().register(username, email, password)?;
    info!(username = %user.username, "registered");
    println!("registered {}", user.username);
    Ok(())
}

/// Log in, replacing any active session.
///
/// # Errors
///
/// Returns an error for an unknown user or a wrong password.
pub fn login(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = state.auth().login(username, password)?;
    println!("logged in as {} ({})", session.username, session.email);
    Ok(())
}

/// Clear the active session. Succeeds even when nobody is logged in.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn logout(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    state.auth().logout()?;
    println!("logged out");
    Ok(())
}

/// Show the active session, if any.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn whoami(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    match state.auth().session()? {
        Some(session) => println!(
            "{} ({}) since {}",
            session.username, session.email, session.since
        ),
        None => println!("no active session"),
    }
    Ok(())
}

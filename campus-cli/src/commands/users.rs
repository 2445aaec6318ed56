use anyhow::{Context, Result};
use campus_core::config::CampusConfig;
use campus_core::users::UserStore;
use owo_colors::OwoColorize;

pub fn list(config: &CampusConfig) -> Result<()> {
    let store = UserStore::new(config.users_path());
    let users = store.list()?;

    if users.is_empty() {
        println!("{}", "No users found".dimmed());
        return Ok(());
    }

    for user in &users {
        println!("  {}", user.email);
    }
    println!("{}", format!("  {} user(s) in {}", users.len(), store.path().display()).dimmed());

    Ok(())
}

pub fn add(config: &CampusConfig, email: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => rpassword::prompt_password("  Password: ").context("Failed to read password")?,
    };

    let store = UserStore::new(config.users_path());
    store.add(email, &password)?;

    println!("{}", format!("  Added: {}", email.trim()).green());
    Ok(())
}

pub fn remove(config: &CampusConfig, email: &str) -> Result<()> {
    let store = UserStore::new(config.users_path());
    store.remove(email)?;

    println!("{}", format!("  Removed: {}", email.trim()).red());
    Ok(())
}

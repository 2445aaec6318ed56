use anyhow::{Context, Result};
use campus_core::config::CampusConfig;
use campus_core::users::UserStore;
use dialoguer::Input;
use owo_colors::OwoColorize;

pub fn run(config: &CampusConfig, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(e) => e,
        None => Input::<String>::new().with_prompt("  Email").interact_text()?,
    };
    let password = rpassword::prompt_password("  Password: ").context("Failed to read password")?;

    let store = UserStore::new(config.users_path());
    let user = store.authenticate(&email, &password)?;

    println!("{}", format!("  Login successful: {}", user.email).green());

    Ok(())
}

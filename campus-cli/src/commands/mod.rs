pub mod browse;
pub mod config;
pub mod day;
pub mod login;
pub mod month;
pub mod users;

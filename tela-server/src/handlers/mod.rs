pub mod account;
pub mod content;
pub mod favorites;
pub mod slider;
pub mod tmdb;
pub mod users;

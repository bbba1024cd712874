pub mod discord;
pub mod faceit;

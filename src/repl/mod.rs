//! REPL Module
//!
//! Parses Pokedex commands and runs them against a [`PokeApiClient`](crate::api::PokeApiClient).

mod command;
mod session;

pub use command::{clean_input, Command, COMMANDS};
pub use session::{is_caught, Outcome, Session, CATCH_THRESHOLD};

//! REPL session state and command execution

use std::collections::BTreeMap;

use rand::Rng;

use crate::api::PokeApiClient;
use crate::error::{ApiError, Result};
use crate::models::Pokemon;
use crate::repl::{Command, COMMANDS};

/// Highest roll that still catches the pokemon.
pub const CATCH_THRESHOLD: u32 = 40;

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print, one entry per line
    Output(Vec<String>),
    /// Leave the REPL
    Exit,
}

/// Returns true when a catch roll succeeds.
pub fn is_caught(roll: u32) -> bool {
    roll <= CATCH_THRESHOLD
}

/// Per-user REPL state: pagination cursors and caught pokemon.
#[derive(Debug, Clone)]
pub struct Session {
    next: Option<String>,
    previous: Option<String>,
    pokedex: BTreeMap<String, Pokemon>,
}

impl Session {
    /// Starts a session whose first `map` shows `first_page_url`.
    pub fn new(first_page_url: impl Into<String>) -> Self {
        Self {
            next: Some(first_page_url.into()),
            previous: None,
            pokedex: BTreeMap::new(),
        }
    }

    /// Caught pokemon, sorted by name.
    pub fn pokedex(&self) -> &BTreeMap<String, Pokemon> {
        &self.pokedex
    }

    /// Runs `command`, fetching through `client` as needed.
    pub async fn execute<R: Rng>(
        &mut self,
        command: Command,
        client: &PokeApiClient,
        rng: &mut R,
    ) -> Result<Outcome> {
        let lines = match command {
            Command::Help => help(),
            Command::Map => match self.next.clone() {
                Some(url) => self.show_page(client, &url).await?,
                None => vec!["you're on the last page".to_string()],
            },
            Command::MapBack => match self.previous.clone() {
                Some(url) => self.show_page(client, &url).await?,
                None => vec!["you're on the first page".to_string()],
            },
            Command::Explore(area) => {
                let area = area.ok_or(ApiError::MissingArgument("location area name"))?;
                explore(client, &area).await?
            }
            Command::Catch(name) => {
                let name = name.ok_or(ApiError::MissingArgument("pokemon name"))?;
                self.catch(client, &name, rng).await?
            }
            Command::Inspect(name) => {
                let name = name.ok_or(ApiError::MissingArgument("pokemon name"))?;
                self.inspect(&name)
            }
            Command::Pokedex => self.list_pokedex(),
            Command::Exit => return Ok(Outcome::Exit),
            Command::Unknown(_) => vec!["Unknown command".to_string()],
        };

        Ok(Outcome::Output(lines))
    }

    async fn show_page(&mut self, client: &PokeApiClient, url: &str) -> Result<Vec<String>> {
        let page = client.location_areas(Some(url)).await?;

        self.next = page.next;
        self.previous = page.previous;

        Ok(page.results.into_iter().map(|area| area.name).collect())
    }

    async fn catch<R: Rng>(
        &mut self,
        client: &PokeApiClient,
        name: &str,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        let pokemon = client.pokemon(name).await?;
        let difficulty = pokemon.base_experience.unwrap_or(0).max(1);
        let roll = rng.gen_range(0..difficulty);

        let mut lines = vec![format!("Throwing a Pokeball at {}...", pokemon.name)];
        if is_caught(roll) {
            lines.push(format!("{} was caught!", pokemon.name));
            self.pokedex.insert(pokemon.name.clone(), pokemon);
        } else {
            lines.push(format!("{} escaped!", pokemon.name));
        }

        Ok(lines)
    }

    fn inspect(&self, name: &str) -> Vec<String> {
        let Some(pokemon) = self.pokedex.get(name) else {
            return vec!["you have not caught that pokemon".to_string()];
        };

        let mut lines = vec![
            format!("Name: {}", pokemon.name),
            format!("Height: {}", pokemon.height),
            format!("Weight: {}", pokemon.weight),
            "Stats:".to_string(),
        ];
        lines.extend(
            pokemon
                .stats
                .iter()
                .map(|stat| format!("  - {}: {}", stat.stat.name, stat.base_stat)),
        );
        lines.push("Types:".to_string());
        lines.extend(pokemon.types.iter().map(|t| format!("  - {}", t.kind.name)));

        lines
    }

    fn list_pokedex(&self) -> Vec<String> {
        let mut lines = vec!["Your Pokedex:".to_string()];
        lines.extend(self.pokedex.keys().map(|name| format!(" - {}", name)));
        lines
    }
}

fn help() -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "Welcome to the Pokedex!".to_string(),
        "Usage:".to_string(),
        String::new(),
    ];
    lines.extend(
        COMMANDS
            .iter()
            .map(|(name, description)| format!("{}: {}", name, description)),
    );
    lines.push(String::new());
    lines
}

async fn explore(client: &PokeApiClient, area: &str) -> Result<Vec<String>> {
    let location = client.location_area(area).await?;

    let mut lines = vec![format!("Exploring {}...", location.name), "Found Pokemon:".to_string()];
    lines.extend(location.pokemon_names().map(|name| format!(" - {}", name)));

    Ok(lines)
}

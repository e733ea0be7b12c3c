//! Command parsing

/// Every command with its help text, in the order `help` lists them.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("map", "Displays the names of the next 20 locations"),
    ("mapb", "Displays the names of the previous 20 locations"),
    ("explore", "Displays the names of all the pokemon in an area"),
    ("catch", "Attempt to catch a pokemon"),
    ("inspect", "Inspect a pokemon you have caught"),
    ("pokedex", "List all of your pokemon"),
    ("exit", "Exit the Pokedex"),
];

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Map,
    MapBack,
    Explore(Option<String>),
    Catch(Option<String>),
    Inspect(Option<String>),
    Pokedex,
    Exit,
    Unknown(String),
}

impl Command {
    /// Parses one line of input. Returns `None` for blank lines.
    ///
    /// Input is lower-cased; the first word selects the command and the
    /// second, if any, is its argument. Further words are ignored.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = clean_input(line).into_iter();
        let name = words.next()?;
        let arg = words.next();

        let command = match name.as_str() {
            "help" => Self::Help,
            "map" => Self::Map,
            "mapb" => Self::MapBack,
            "explore" => Self::Explore(arg),
            "catch" => Self::Catch(arg),
            "inspect" => Self::Inspect(arg),
            "pokedex" => Self::Pokedex,
            "exit" => Self::Exit,
            _ => Self::Unknown(name),
        };

        Some(command)
    }
}

/// Lower-cases `line` and splits it on whitespace.
pub fn clean_input(line: &str) -> Vec<String> {
    line.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

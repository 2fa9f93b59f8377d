#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub position: String,
    pub name: String,
}

impl Player {
    pub fn new(position: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            name: name.into(),
        }
    }

    pub fn is_named(&self, guess: &str) -> bool {
        names_match(&self.name, guess)
    }
}

/// Case-insensitive name comparison used for guesses and depth lookups.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

use std::fmt;

/// The token marking which player owns a cell
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Mark {
    Hollow,
    Solid,
}

impl Mark {
    pub fn symbol(&self) -> char {
        match self {
            Mark::Hollow => '◌',
            Mark::Solid => '●',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A participant in a round, fixed for the round's duration
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    pub fn new<S: Into<String>>(name: S, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}

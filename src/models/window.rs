use clap::ValueEnum;

/// Named time window used to filter the cached brew list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Window {
    Today,
    Week,
    All,
}

impl Window {
    /// Parse a window name coming from the config file.
    /// Anything unrecognized falls back to `All` (show everything rather
    /// than hide records behind a typo).
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "today" => Window::Today,
            "week" => Window::Week,
            _ => Window::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Window::Today => "today",
            Window::Week => "week",
            Window::All => "all",
        }
    }
}

use std::fmt;

#[derive(Debug)]
pub enum RosterError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty marker, missing path, etc.).
    ConfigValidation(String),
    /// No column label in the roster contains the marker.
    MissingColumn { marker: String },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::MissingColumn { marker } => {
                write!(f, "no roster column label contains '{marker}'")
            }
        }
    }
}

impl std::error::Error for RosterError {}

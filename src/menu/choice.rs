use crate::error::InvalidMenuChoice;
use std::str::FromStr;

/// Options offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// "1"
    AddSongs,
    /// "2"
    ViewPlaylist,
    /// "3"
    Exit,
}

impl FromStr for MenuChoice {
    type Err = InvalidMenuChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::AddSongs),
            "2" => Ok(Self::ViewPlaylist),
            "3" => Ok(Self::Exit),
            other => Err(InvalidMenuChoice(other.to_string())),
        }
    }
}

//! Player pool - the selectable players loaded from CSV

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Pool shipped with the binary, used when no `players_file` is configured
const BUNDLED_PLAYERS: &str = include_str!("../../data/players.csv");

#[derive(Debug, Error)]
pub enum PlayerDataError {
    #[error("failed to open player file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to read player record: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown position '{position}' for player '{name}'")]
    UnknownPosition { name: String, position: String },

    #[error("duplicate player id {id} ({name})")]
    DuplicateId { id: u32, name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Center,
    LeftWing,
    RightWing,
    Defense,
    Goalie,
}

impl Position {
    pub fn all() -> [Position; 5] {
        [
            Position::Center,
            Position::LeftWing,
            Position::RightWing,
            Position::Defense,
            Position::Goalie,
        ]
    }

    pub fn parse(s: &str) -> Option<Position> {
        match s.trim().to_uppercase().as_str() {
            "C" => Some(Position::Center),
            "LW" | "L" => Some(Position::LeftWing),
            "RW" | "R" => Some(Position::RightWing),
            "D" => Some(Position::Defense),
            "G" => Some(Position::Goalie),
            _ => None,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Position::Center => "C",
            Position::LeftWing => "LW",
            Position::RightWing => "RW",
            Position::Defense => "D",
            Position::Goalie => "G",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: u32,
    pub name: String,
    /// Club abbreviation, e.g. "EDM"
    pub team: String,
    pub position: Position,
    pub games_played: u32,
    pub goals: u32,
    pub assists: u32,
}

impl Player {
    pub fn points(&self) -> u32 {
        self.goals + self.assists
    }
}

#[derive(Debug, Deserialize)]
struct PlayerRecord {
    id: u32,
    name: String,
    team: String,
    position: String,
    #[serde(default)]
    games_played: u32,
    #[serde(default)]
    goals: u32,
    #[serde(default)]
    assists: u32,
}

impl TryFrom<PlayerRecord> for Player {
    type Error = PlayerDataError;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        let position =
            Position::parse(&record.position).ok_or_else(|| PlayerDataError::UnknownPosition {
                name: record.name.clone(),
                position: record.position.clone(),
            })?;

        Ok(Player {
            id: record.id,
            name: record.name,
            team: record.team,
            position,
            games_played: record.games_played,
            goals: record.goals,
            assists: record.assists,
        })
    }
}

/// Parse a player pool from any CSV source with a header row
pub fn read_players<R: Read>(source: R) -> Result<Vec<Player>, PlayerDataError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut players: Vec<Player> = Vec::new();
    let mut seen = HashSet::new();
    for result in reader.deserialize::<PlayerRecord>() {
        let player = Player::try_from(result?)?;
        // Drafted players are matched by id
        if !seen.insert(player.id) {
            return Err(PlayerDataError::DuplicateId {
                id: player.id,
                name: player.name,
            });
        }
        players.push(player);
    }
    Ok(players)
}

/// Load the configured pool, or the bundled one when `path` is `None`
pub fn load_players(path: Option<&Path>) -> Result<Vec<Player>, PlayerDataError> {
    let players = match path {
        Some(path) => {
            let file = fs::File::open(path).map_err(|source| PlayerDataError::Io {
                path: path.display().to_string(),
                source,
            })?;
            read_players(file)?
        }
        None => read_players(BUNDLED_PLAYERS.as_bytes())?,
    };

    tracing::info!("loaded {} players", players.len());
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,name,team,position,games_played,goals,assists
1,Connor McDavid,EDM,C,82,32,100
2,Cale Makar,COL, d ,77,21,69
3,Igor Shesterkin,NYR,G,58,0,1
";

    #[test]
    fn test_read_players() {
        let players = read_players(SAMPLE.as_bytes()).unwrap();
        assert_eq!(players.len(), 3);
        assert_eq!(players[0].name, "Connor McDavid");
        assert_eq!(players[0].points(), 132);
        assert_eq!(players[1].position, Position::Defense);
        assert_eq!(players[2].position.abbreviation(), "G");
    }

    #[test]
    fn test_unknown_position_is_an_error() {
        let csv = "id,name,team,position,games_played,goals,assists\n9,Someone,BOS,QB,1,0,0\n";
        let err = read_players(csv.as_bytes()).unwrap_err();
        match err {
            PlayerDataError::UnknownPosition { name, position } => {
                assert_eq!(name, "Someone");
                assert_eq!(position, "QB");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_player_id_is_an_error() {
        let csv = "id,name,team,position,games_played,goals,assists\n\
                   5,First,BOS,C,1,0,0\n\
                   5,Second,TOR,D,1,0,0\n";
        match read_players(csv.as_bytes()).unwrap_err() {
            PlayerDataError::DuplicateId { id, name } => {
                assert_eq!(id, 5);
                assert_eq!(name, "Second");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_number_is_a_csv_error() {
        let csv = "id,name,team,position,games_played,goals,assists\nx,Someone,BOS,C,1,0,0\n";
        assert!(matches!(
            read_players(csv.as_bytes()),
            Err(PlayerDataError::Csv(_))
        ));
    }

    #[test]
    fn test_bundled_pool_loads() {
        let players = load_players(None).unwrap();
        assert!(!players.is_empty());

        let mut ids: Vec<u32> = players.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), players.len(), "bundled player ids must be unique");

        for position in Position::all() {
            assert!(
                players.iter().any(|p| p.position == position),
                "bundled pool has no {}",
                position
            );
        }
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_players(Some(Path::new("/nonexistent/players.csv"))).unwrap_err();
        assert!(matches!(err, PlayerDataError::Io { .. }));
    }
}

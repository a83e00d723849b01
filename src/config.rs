//! League settings - teams, draft positions, and roster slot counts
//!
//! Settings live in `~/.draft-tui/settings.json`. A missing file is replaced
//! with the defaults so there is always something on disk to customize.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the settings file location
pub const SETTINGS_PATH_ENV: &str = "DRAFT_TUI_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine the settings directory (is $HOME set?)")]
    NoSettingsDir,

    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// A fantasy team taking part in the draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    /// Rank used to order the first round (lowest picks first)
    pub draft_position: u32,
}

/// Number of roster slots per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSettings {
    #[serde(default)]
    pub bench: u32,
    #[serde(default)]
    pub center: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub goalie: u32,
    #[serde(default)]
    pub left_wing: u32,
    #[serde(default)]
    pub right_wing: u32,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            bench: 4,
            center: 2,
            defense: 4,
            goalie: 2,
            left_wing: 2,
            right_wing: 2,
        }
    }
}

impl RosterSettings {
    /// Every roster slot is filled by one pick, so the slot total is the round count
    pub fn rounds(&self) -> usize {
        [
            self.bench,
            self.center,
            self.defense,
            self.goalie,
            self.left_wing,
            self.right_wing,
        ]
        .iter()
        .map(|&count| count as usize)
        .sum()
    }

    /// (label, count) pairs in display order
    pub fn slots(&self) -> [(&'static str, u32); 6] {
        [
            ("Center", self.center),
            ("Left Wing", self.left_wing),
            ("Right Wing", self.right_wing),
            ("Defense", self.defense),
            ("Goalie", self.goalie),
            ("Bench", self.bench),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub teams: Vec<Team>,
    #[serde(default)]
    pub roster: RosterSettings,
    /// Optional CSV player pool; the bundled pool is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            teams: (1..=10)
                .map(|n| Team {
                    id: n,
                    name: format!("Team {}", n),
                    draft_position: n,
                })
                .collect(),
            roster: RosterSettings::default(),
            players_file: None,
        }
    }
}

impl Settings {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".draft-tui"))
    }

    /// Settings file path, honoring `DRAFT_TUI_SETTINGS`
    pub fn settings_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(SETTINGS_PATH_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        Self::config_dir().map(|dir| dir.join("settings.json"))
    }

    /// Load settings from the default location, writing defaults on first run
    pub fn load() -> Result<Settings, SettingsError> {
        let path = Self::settings_path().ok_or(SettingsError::NoSettingsDir)?;
        Self::load_or_init(&path)
    }

    pub fn load_or_init(path: &Path) -> Result<Settings, SettingsError> {
        if !path.exists() {
            let settings = Settings::default();
            settings.save_to(path)?;
            tracing::info!("wrote default settings to {}", path.display());
            return Ok(settings);
        }

        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings = Self::from_json(&contents).map_err(|e| match e {
            SettingsError::Parse { source, .. } => SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        if let Some(dir) = path.parent() {
            settings.resolve_players_file(dir);
        }

        tracing::info!(
            "loaded settings from {}: {} teams, {} rounds",
            path.display(),
            settings.teams.len(),
            settings.roster.rounds()
        );
        Ok(settings)
    }

    pub fn from_json(contents: &str) -> Result<Settings, SettingsError> {
        let settings: Settings =
            serde_json::from_str(contents).map_err(|source| SettingsError::Parse {
                path: PathBuf::new(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Team ids must be unique; everything else is a valid (possibly empty) draft
    pub fn validate(&self) -> Result<(), SettingsError> {
        let mut seen = HashSet::new();
        for team in &self.teams {
            if !seen.insert(team.id) {
                return Err(SettingsError::Invalid(format!(
                    "duplicate team id {} ({})",
                    team.id, team.name
                )));
            }
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|source| SettingsError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }

        let contents = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, contents).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// A relative `players_file` is relative to the settings file's directory
    pub fn resolve_players_file(&mut self, settings_dir: &Path) {
        if let Some(file) = &self.players_file {
            if file.is_relative() {
                self.players_file = Some(settings_dir.join(file));
            }
        }
    }

    /// Teams ordered by draft position (stable for ties)
    pub fn teams_by_draft_position(&self) -> Vec<Team> {
        let mut teams = self.teams.clone();
        teams.sort_by_key(|t| t.draft_position);
        teams
    }

    pub fn total_picks(&self) -> usize {
        self.teams.len() * self.roster.rounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_sums_every_slot() {
        let roster = RosterSettings {
            bench: 1,
            center: 2,
            defense: 3,
            goalie: 4,
            left_wing: 5,
            right_wing: 6,
        };
        assert_eq!(roster.rounds(), 21);
        assert_eq!(RosterSettings::default().rounds(), 16);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.teams.len(), 10);
        assert_eq!(settings.teams[0].draft_position, 1);
        assert_eq!(settings.total_picks(), 160);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_missing_roster_fields_default_to_zero() {
        let json = r#"{
            "teams": [
                { "id": 1, "name": "Sharks", "draft_position": 2 },
                { "id": 2, "name": "Bears", "draft_position": 1 }
            ],
            "roster": { "center": 1, "goalie": 1 }
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.roster.rounds(), 2);
        assert_eq!(settings.roster.bench, 0);
        assert!(settings.players_file.is_none());

        let ordered = settings.teams_by_draft_position();
        assert_eq!(ordered[0].name, "Bears");
        assert_eq!(ordered[1].name, "Sharks");
    }

    #[test]
    fn test_from_json_rejects_duplicate_team_ids() {
        let json = r#"{
            "teams": [
                { "id": 7, "name": "A", "draft_position": 1 },
                { "id": 7, "name": "B", "draft_position": 2 }
            ]
        }"#;
        let err = Settings::from_json(json).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn test_empty_team_list_is_valid() {
        let settings = Settings::from_json(r#"{ "teams": [] }"#).unwrap();
        assert_eq!(settings.total_picks(), 0);
    }

    #[test]
    fn test_relative_players_file_follows_settings_dir() {
        let json = r#"{ "teams": [], "players_file": "pool.csv" }"#;
        let mut settings = Settings::from_json(json).unwrap();
        settings.resolve_players_file(Path::new("/leagues/home"));
        assert_eq!(
            settings.players_file,
            Some(PathBuf::from("/leagues/home/pool.csv"))
        );

        let json = r#"{ "teams": [], "players_file": "/data/pool.csv" }"#;
        let mut settings = Settings::from_json(json).unwrap();
        settings.resolve_players_file(Path::new("/leagues/home"));
        assert_eq!(settings.players_file, Some(PathBuf::from("/data/pool.csv")));
    }

    #[test]
    fn test_load_or_init_resolves_players_file() {
        let dir = env::temp_dir().join(format!("draft-tui-players-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        fs::write(&path, r#"{ "teams": [], "players_file": "pool.csv" }"#).unwrap();

        let settings = Settings::load_or_init(&path).unwrap();
        assert_eq!(settings.players_file, Some(dir.join("pool.csv")));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let dir = env::temp_dir().join(format!("draft-tui-test-{}", std::process::id()));
        let path = dir.join("settings.json");
        let _ = fs::remove_file(&path);

        let settings = Settings::load_or_init(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());

        let reloaded = Settings::load_or_init(&path).unwrap();
        assert_eq!(reloaded, settings);

        let _ = fs::remove_dir_all(&dir);
    }
}

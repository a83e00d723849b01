//! UI state - presentation state separate from draft data

use super::player::{Player, Position};

/// Position filter tabs above the player table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionTab {
    #[default]
    All,
    Only(Position),
}

impl PositionTab {
    pub fn all() -> Vec<PositionTab> {
        std::iter::once(PositionTab::All)
            .chain(Position::all().into_iter().map(PositionTab::Only))
            .collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            PositionTab::All => "All",
            PositionTab::Only(position) => position.abbreviation(),
        }
    }

    pub fn matches(&self, player: &Player) -> bool {
        match self {
            PositionTab::All => true,
            PositionTab::Only(position) => player.position == *position,
        }
    }

    pub fn next(&self) -> PositionTab {
        let tabs = Self::all();
        let index = tabs.iter().position(|t| t == self).unwrap_or(0);
        tabs[(index + 1) % tabs.len()]
    }

    pub fn previous(&self) -> PositionTab {
        let tabs = Self::all();
        let index = tabs.iter().position(|t| t == self).unwrap_or(0);
        if index == 0 {
            tabs[tabs.len() - 1]
        } else {
            tabs[index - 1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_cycle_both_ways() {
        assert_eq!(PositionTab::All.next(), PositionTab::Only(Position::Center));
        assert_eq!(PositionTab::All.previous(), PositionTab::Only(Position::Goalie));
        assert_eq!(PositionTab::Only(Position::Goalie).next(), PositionTab::All);
        assert_eq!(PositionTab::all().len(), 6);
    }
}

//! Snake draft order and the draft state machine
//!
//! The pick list is shared through an `Rc<[DraftPick]>` and never mutated in
//! place: every change produces a new list, so anything holding the previous
//! `Rc` can detect the update with `Rc::ptr_eq`.

use super::player::Player;
use crate::config::{Settings, Team};
use std::rc::Rc;

/// One slot in the draft order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftPick {
    /// 1-based overall pick number
    pub pick_number: usize,
    pub team: Team,
    pub player_selected: Option<Player>,
}

/// Build the full snake order: odd rounds by ascending draft position, even
/// rounds reversed.
pub fn create_draft_order(settings: &Settings) -> Vec<DraftPick> {
    let rounds = settings.roster.rounds();
    let mut teams = settings.teams_by_draft_position();
    let mut picks = Vec::with_capacity(rounds * teams.len());

    let mut pick_number = 1;
    for _ in 0..rounds {
        for team in &teams {
            picks.push(DraftPick {
                pick_number,
                team: team.clone(),
                player_selected: None,
            });
            pick_number += 1;
        }
        teams.reverse();
    }

    picks
}

/// 1-based round containing `pick_number`
pub fn round_of(pick_number: usize, team_count: usize) -> usize {
    if team_count == 0 || pick_number == 0 {
        return 0;
    }
    (pick_number - 1) / team_count + 1
}

/// Coarse draft phase, derived from the started flag and the pick pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    NotStarted,
    InProgress,
    Complete,
}

impl DraftPhase {
    pub fn label(&self) -> &'static str {
        match self {
            DraftPhase::NotStarted => "Not started",
            DraftPhase::InProgress => "In progress",
            DraftPhase::Complete => "Complete",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DraftState {
    picks: Rc<[DraftPick]>,
    current_pick_number: usize,
    draft_started: bool,
    reset_pending: bool,
}

impl DraftState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            picks: create_draft_order(settings).into(),
            current_pick_number: 1,
            draft_started: false,
            reset_pending: false,
        }
    }

    pub fn picks(&self) -> &Rc<[DraftPick]> {
        &self.picks
    }

    pub fn current_pick_number(&self) -> usize {
        self.current_pick_number
    }

    pub fn draft_started(&self) -> bool {
        self.draft_started
    }

    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    pub fn phase(&self) -> DraftPhase {
        if !self.draft_started {
            DraftPhase::NotStarted
        } else if self.current_pick_number > self.picks.len() {
            DraftPhase::Complete
        } else {
            DraftPhase::InProgress
        }
    }

    /// Gate for the player table: started and at least one pick left
    pub fn can_draft_players(&self) -> bool {
        self.draft_started && self.current_pick_number <= self.picks.len()
    }

    /// The pick waiting for a player, if the draft is not complete
    pub fn current_pick(&self) -> Option<&DraftPick> {
        self.picks.get(self.current_pick_number.checked_sub(1)?)
    }

    pub fn on_the_clock(&self) -> Option<&Team> {
        if !self.draft_started {
            return None;
        }
        self.current_pick().map(|pick| &pick.team)
    }

    pub fn start(&mut self) {
        if self.draft_started {
            return;
        }
        self.draft_started = true;
        tracing::info!("draft started with {} picks", self.picks.len());
    }

    pub fn is_drafted(&self, player_id: u32) -> bool {
        self.picks
            .iter()
            .filter_map(|pick| pick.player_selected.as_ref())
            .any(|p| p.id == player_id)
    }

    /// Assign `player` to the current pick and advance the pointer.
    ///
    /// Returns `false` and leaves the state untouched when drafting is not
    /// allowed right now or the player has already been taken.
    pub fn draft_player(&mut self, player: Player) -> bool {
        if !self.can_draft_players() {
            tracing::warn!(
                "ignoring pick of {}: drafting is closed (pick {})",
                player.name,
                self.current_pick_number
            );
            return false;
        }
        if self.is_drafted(player.id) {
            tracing::warn!("ignoring pick of {}: already drafted", player.name);
            return false;
        }

        let index = self.current_pick_number - 1;
        tracing::info!(
            "pick {}: {} selects {}",
            self.current_pick_number,
            self.picks[index].team.name,
            player.name
        );

        let mut player = Some(player);
        self.picks = self
            .picks
            .iter()
            .enumerate()
            .map(|(i, pick)| {
                if i == index {
                    DraftPick {
                        player_selected: player.take(),
                        ..pick.clone()
                    }
                } else {
                    pick.clone()
                }
            })
            .collect();
        self.current_pick_number += 1;

        true
    }

    /// Open the reset confirmation; only meaningful once the draft started
    pub fn request_reset(&mut self) -> bool {
        if !self.draft_started {
            return false;
        }
        self.reset_pending = true;
        true
    }

    /// Close the reset confirmation. A confirmed reset rebuilds the order from
    /// `settings` and returns `true`.
    pub fn resolve_reset(&mut self, confirmed: bool, settings: &Settings) -> bool {
        self.reset_pending = false;
        if !confirmed {
            return false;
        }

        self.draft_started = false;
        self.current_pick_number = 1;
        self.picks = create_draft_order(settings).into();
        tracing::info!("draft reset");
        true
    }
}

/// Selected players in draft order
pub fn drafted_players(picks: &[DraftPick]) -> Vec<Player> {
    picks
        .iter()
        .filter_map(|pick| pick.player_selected.clone())
        .collect()
}

/// Memoized drafted-player projection, recomputed only when the pick list
/// identity changes.
#[derive(Debug, Default)]
pub struct DraftedPlayers {
    source: Option<Rc<[DraftPick]>>,
    players: Vec<Player>,
}

impl DraftedPlayers {
    pub fn get(&mut self, picks: &Rc<[DraftPick]>) -> &[Player] {
        let stale = match &self.source {
            Some(source) => !Rc::ptr_eq(source, picks),
            None => true,
        };
        if stale {
            self.players = drafted_players(picks);
            self.source = Some(Rc::clone(picks));
        }
        &self.players
    }
}

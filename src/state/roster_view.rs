//! Roster view state: the render target for roster snapshots.
//!
//! DESIGN
//! ======
//! The roster keeps no state beyond what is on screen, so this struct is the
//! whole cache. `render` and `render_load_error` are its only mutators and
//! each replaces everything it touches; nothing here diffs against the
//! previous snapshot.

#[cfg(test)]
#[path = "roster_view_test.rs"]
mod roster_view_test;

use crate::net::types::{ActivityRecord, RosterSnapshot};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const EMPTY_ROSTER_TEXT: &str = "No activities available.";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

/// One rendered activity card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: Option<String>,
    pub max_participants: u32,
    pub participants: Vec<String>,
    /// Signed; negative means oversubscribed.
    pub spots_left: i64,
}

impl ActivityCardView {
    fn from_record(name: &str, record: &ActivityRecord) -> Self {
        Self {
            name: name.to_owned(),
            description: record.description.clone(),
            schedule: record.schedule.clone(),
            max_participants: record.max_participants,
            participants: record.participants.clone(),
            spots_left: record.spots_left(),
        }
    }

    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Placeholder shown instead of the participant list, if it is empty.
    #[must_use]
    pub fn participants_placeholder(&self) -> Option<&'static str> {
        self.participants.is_empty().then_some(NO_PARTICIPANTS_TEXT)
    }

    #[must_use]
    pub fn is_oversubscribed(&self) -> bool {
        self.spots_left < 0
    }
}

/// One entry of the activity selection control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityOption {
    pub value: String,
    pub label: String,
}

impl ActivityOption {
    fn for_card(card: &ActivityCardView) -> Self {
        Self {
            value: card.name.clone(),
            label: format!("{} ({} spots left)", card.name, card.spots_left),
        }
    }
}

/// What the roster area currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RosterBody {
    /// Before the first snapshot arrives.
    #[default]
    Loading,
    /// The last snapshot had no activities.
    Empty,
    /// The snapshot fetch failed.
    LoadFailed,
    Activities(Vec<ActivityCardView>),
}

impl RosterBody {
    /// Inline text shown in place of the card list, if any.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_TEXT),
            Self::Empty => Some(EMPTY_ROSTER_TEXT),
            Self::LoadFailed => Some(LOAD_FAILED_TEXT),
            Self::Activities(_) => None,
        }
    }
}

/// Everything the roster area and selection control display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterViewState {
    body: RosterBody,
    options: Vec<ActivityOption>,
    renders: u64,
}

impl RosterViewState {
    /// Replace the cards and the selection options with `snapshot`.
    pub fn render(&mut self, snapshot: &RosterSnapshot) {
        let cards: Vec<ActivityCardView> = snapshot
            .iter()
            .map(|(name, record)| ActivityCardView::from_record(name, record))
            .collect();
        self.options = cards.iter().map(ActivityOption::for_card).collect();
        self.body = if cards.is_empty() {
            RosterBody::Empty
        } else {
            RosterBody::Activities(cards)
        };
        self.renders += 1;
    }

    /// Replace the cards with the inline load-failure message.
    ///
    /// Selection options from the last good snapshot stay in place.
    pub fn render_load_error(&mut self) {
        self.body = RosterBody::LoadFailed;
        self.renders += 1;
    }

    #[must_use]
    pub fn body(&self) -> &RosterBody {
        &self.body
    }

    #[must_use]
    pub fn options(&self) -> &[ActivityOption] {
        &self.options
    }

    #[must_use]
    pub fn cards(&self) -> &[ActivityCardView] {
        match &self.body {
            RosterBody::Activities(cards) => cards,
            _ => &[],
        }
    }

    /// Number of rendered activity cards.
    #[must_use]
    pub fn activity_count(&self) -> usize {
        self.cards().len()
    }

    #[must_use]
    pub fn card(&self, name: &str) -> Option<&ActivityCardView> {
        self.cards().iter().find(|c| c.name == name)
    }

    /// Total renders so far, including error renders.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.renders
    }
}

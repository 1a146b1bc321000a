//! System card gallery
//!
//! Cards are filtered by title and category badge (case-insensitive). Each
//! card carries an explicit presence state that moves on a virtual clock:
//!
//! - matching card: `Entering` now, `Visible` after [`SHOW_DELAY_MS`]
//! - non-matching card: `Leaving` now, `Removed` after [`HIDE_DELAY_MS`]
//!
//! While a filter pass is settling (for [`SETTLE_MS`]) further filter
//! requests are dropped. The front end drives the clock with
//! [`Gallery::advance`].

use serde::Serialize;

use crate::error::{ConsoleError, ConsoleResult};
use crate::filter::{CategoryMatch, FilterState};
use crate::store::RecordStore;
use crate::types::{Record, SystemCard};

pub const SHOW_DELAY_MS: u64 = 10;
pub const HIDE_DELAY_MS: u64 = 300;
pub const SETTLE_MS: u64 = 350;
/// Minimum visible fraction for a card to count as in view
pub const VISIBILITY_THRESHOLD: f32 = 0.2;

/// Category option that clears the category filter
pub const ALL_CATEGORIES: &str = "All";

/// Presentation state of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Entering,
    Visible,
    Leaving,
    Removed,
}

impl Presence {
    /// Whether the card occupies space in the layout
    pub fn is_displayed(self) -> bool {
        !matches!(self, Self::Removed)
    }
}

/// Whether a filter request ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    Applied,
    /// Dropped because the previous pass was still settling
    Dropped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    due_ms: u64,
    to: Presence,
}

#[derive(Debug, Clone)]
struct CardSlot {
    presence: Presence,
    pending: Option<Pending>,
    in_view: bool,
}

/// Snapshot of one card for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub card: &'a SystemCard,
    pub presence: Presence,
    pub in_view: bool,
}

/// Filterable card gallery with a virtual-time transition scheduler
#[derive(Debug, Clone)]
pub struct Gallery {
    store: RecordStore<SystemCard>,
    slots: Vec<CardSlot>,
    filter: FilterState,
    now_ms: u64,
    settle_until: Option<u64>,
    stale: bool,
}

impl Gallery {
    pub fn new(store: RecordStore<SystemCard>) -> Self {
        let slots = store
            .iter()
            .map(|_| CardSlot {
                presence: Presence::Visible,
                pending: None,
                in_view: false,
            })
            .collect();
        Self {
            store,
            slots,
            filter: FilterState::default(),
            now_ms: 0,
            settle_until: None,
            stale: false,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn is_settling(&self) -> bool {
        self.settle_until.is_some()
    }

    /// A request was dropped since the last applied pass
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn cards(&self) -> impl Iterator<Item = CardView<'_>> {
        self.store.iter().zip(&self.slots).map(|(card, slot)| CardView {
            card,
            presence: slot.presence,
            in_view: slot.in_view,
        })
    }

    /// Cards that currently occupy layout space
    pub fn displayed(&self) -> impl Iterator<Item = CardView<'_>> {
        self.cards().filter(|view| view.presence.is_displayed())
    }

    /// `All` followed by every distinct category, in card order
    pub fn category_options(&self) -> Vec<String> {
        let mut options = vec![ALL_CATEGORIES.to_string()];
        for card in self.store.iter() {
            let seen = options
                .iter()
                .any(|o| CategoryMatch::IgnoreCase.same(o, &card.category));
            if !seen {
                options.push(card.category.clone());
            }
        }
        options
    }

    pub fn set_query(&mut self, query: &str) -> FilterOutcome {
        self.filter.set_query(query);
        self.run()
    }

    /// Select a category option; `All` (any case) clears the filter
    pub fn set_category(&mut self, option: &str) -> FilterOutcome {
        let option = option.trim();
        if option.eq_ignore_ascii_case(ALL_CATEGORIES) {
            self.filter.set_category(None);
        } else {
            self.filter.set_category(Some(&option.to_lowercase()));
        }
        self.run()
    }

    /// Re-run the filter with the current inputs
    pub fn refresh(&mut self) -> FilterOutcome {
        self.run()
    }

    fn run(&mut self) -> FilterOutcome {
        if self.is_settling() {
            log::debug!("Gallery filter dropped while settling");
            self.stale = true;
            return FilterOutcome::Dropped;
        }
        self.stale = false;

        if !self.filter.is_active() {
            for slot in &mut self.slots {
                slot.presence = Presence::Visible;
                slot.pending = None;
            }
            return FilterOutcome::Applied;
        }

        let now = self.now_ms;
        for (card, slot) in self.store.iter().zip(&mut self.slots) {
            if self.filter.matches(card, CategoryMatch::IgnoreCase) {
                if slot.presence != Presence::Visible {
                    slot.presence = Presence::Entering;
                    slot.pending = Some(Pending {
                        due_ms: now + SHOW_DELAY_MS,
                        to: Presence::Visible,
                    });
                }
            } else if slot.presence != Presence::Removed {
                slot.presence = Presence::Leaving;
                slot.pending = Some(Pending {
                    due_ms: now + HIDE_DELAY_MS,
                    to: Presence::Removed,
                });
            }
        }
        self.settle_until = Some(now + SETTLE_MS);
        FilterOutcome::Applied
    }

    /// Move the virtual clock forward, firing due transitions
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let now = self.now_ms;

        for slot in &mut self.slots {
            if let Some(pending) = slot.pending {
                if pending.due_ms <= now {
                    slot.presence = pending.to;
                    slot.pending = None;
                }
            }
        }

        if self.settle_until.is_some_and(|until| until <= now) {
            self.settle_until = None;
        }
    }

    /// Record how much of a card is inside the viewport (0.0 to 1.0)
    pub fn observe(&mut self, title: &str, ratio: f32) -> ConsoleResult<bool> {
        let index = self
            .store
            .position(title)
            .ok_or_else(|| ConsoleError::RecordNotFound(title.to_string()))?;
        let in_view = ratio >= VISIBILITY_THRESHOLD;
        if let Some(slot) = self.slots.get_mut(index) {
            slot.in_view = in_view;
        }
        Ok(in_view)
    }

    pub fn find(&self, title: &str) -> Option<CardView<'_>> {
        self.cards().find(|view| view.card.id() == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn gallery() -> Gallery {
        Gallery::new(RecordStore::new(sample::system_cards()).unwrap())
    }

    fn presence(g: &Gallery, title: &str) -> Presence {
        g.find(title).unwrap().presence
    }

    #[test]
    fn all_cards_start_visible() {
        let g = gallery();
        assert!(g.cards().all(|c| c.presence == Presence::Visible));
        assert!(!g.is_settling());
    }

    #[test]
    fn transitions_follow_virtual_time() {
        let mut g = gallery();
        assert_eq!(g.set_query("admission"), FilterOutcome::Applied);

        assert_eq!(presence(&g, "Admission System"), Presence::Visible);
        assert_eq!(presence(&g, "Library System"), Presence::Leaving);
        assert!(g.is_settling());

        g.advance(299);
        assert_eq!(presence(&g, "Library System"), Presence::Leaving);
        g.advance(1);
        assert_eq!(presence(&g, "Library System"), Presence::Removed);
        assert!(g.is_settling());

        g.advance(50);
        assert!(!g.is_settling());
    }

    #[test]
    fn hidden_card_enters_then_becomes_visible() {
        let mut g = gallery();
        g.set_query("library");
        g.advance(SETTLE_MS);
        assert_eq!(presence(&g, "Admission System"), Presence::Removed);

        g.set_query("admission");
        assert_eq!(presence(&g, "Admission System"), Presence::Entering);
        g.advance(9);
        assert_eq!(presence(&g, "Admission System"), Presence::Entering);
        g.advance(1);
        assert_eq!(presence(&g, "Admission System"), Presence::Visible);
    }

    #[test]
    fn requests_while_settling_are_dropped() {
        let mut g = gallery();
        g.set_query("library");
        g.advance(100);
        assert_eq!(g.set_query("admission"), FilterOutcome::Dropped);
        assert!(g.is_stale());
        assert_eq!(presence(&g, "Admission System"), Presence::Leaving);

        g.advance(250);
        assert_eq!(g.refresh(), FilterOutcome::Applied);
        assert!(!g.is_stale());
        assert_eq!(presence(&g, "Admission System"), Presence::Entering);
    }

    #[test]
    fn clearing_everything_shows_all_immediately() {
        let mut g = gallery();
        g.set_category("Academic");
        g.advance(SETTLE_MS);
        g.set_category("all");
        assert!(g.cards().all(|c| c.presence == Presence::Visible));
        assert!(!g.is_settling());
    }

    #[test]
    fn category_match_ignores_case() {
        let mut g = gallery();
        g.set_category("ACADEMIC");
        g.advance(SETTLE_MS);
        assert!(g
            .displayed()
            .all(|c| c.card.category.eq_ignore_ascii_case("academic")));
        assert!(g.displayed().count() > 0);
    }

    #[test]
    fn category_options_start_with_all() {
        let options = gallery().category_options();
        assert_eq!(options[0], "All");
        assert!(options.len() > 1);
    }

    #[test]
    fn category_options_merge_case_variants_beyond_ascii() {
        let card = |title: &str, category: &str| SystemCard {
            title: title.to_string(),
            category: category.to_string(),
            description: String::new(),
        };
        let g = Gallery::new(
            RecordStore::new(vec![
                card("Ärzte", "Ämter"),
                card("Büro", "ÄMTER"),
                card("Mensa", "Campus"),
            ])
            .unwrap(),
        );
        assert_eq!(g.category_options(), vec!["All", "Ämter", "Campus"]);
    }

    #[test]
    fn observe_uses_threshold() {
        let mut g = gallery();
        assert!(!g.observe("Admission System", 0.1).unwrap());
        assert!(g.observe("Admission System", 0.2).unwrap());
        assert!(g.find("Admission System").unwrap().in_view);
        assert!(g.observe("Nope", 1.0).is_err());
    }
}

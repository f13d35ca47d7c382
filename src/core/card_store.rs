//! Card storage
//!
//! This module provides the CardStore component that holds every card of the
//! session in insertion order. The order matters: exports are written in it,
//! and ties in the hardest-card listing are reported in it.
//!
//! # Uniqueness
//!
//! No two cards share a term and no two cards share a definition. Lookups are
//! linear scans with exact, case-sensitive comparison.

use crate::types::{Card, FlashcardError};
use std::collections::HashSet;

/// Ordered, uniqueness-enforcing collection of cards
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    /// Create a new empty card store
    pub fn new() -> Self {
        CardStore { cards: Vec::new() }
    }

    /// Add a new card with zero errors
    ///
    /// # Arguments
    ///
    /// * `term` - The term of the new card
    /// * `definition` - The definition of the new card
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the card was appended
    /// * `Err(FlashcardError)` - If the term or the definition is already taken;
    ///   the store is left unchanged
    pub fn add(&mut self, term: &str, definition: &str) -> Result<(), FlashcardError> {
        if self.contains_term(term) {
            return Err(FlashcardError::duplicate_term(term));
        }
        if self.find_by_definition(definition).is_some() {
            return Err(FlashcardError::duplicate_definition(definition));
        }

        self.cards.push(Card::new(term, definition));
        Ok(())
    }

    /// Remove the card with the given term
    ///
    /// The relative order of the remaining cards is preserved.
    ///
    /// # Returns
    ///
    /// * `Ok(Card)` - The removed card
    /// * `Err(FlashcardError)` - If no card has this term
    pub fn remove(&mut self, term: &str) -> Result<Card, FlashcardError> {
        let index = self
            .position_of(term)
            .ok_or_else(|| FlashcardError::not_found(term))?;
        Ok(self.cards.remove(index))
    }

    /// Insert or replace a card by term
    ///
    /// A card whose term already exists replaces the old card at the same
    /// position; otherwise it is appended. Used by import, so the error count
    /// of the incoming card is kept as is.
    ///
    /// Definitions are not checked here. A batch of upserts can move a
    /// definition from one term to another, so callers check the end result
    /// with [`duplicate_definition`](Self::duplicate_definition).
    pub fn upsert(&mut self, card: Card) {
        match self.position_of(&card.term) {
            Some(index) => self.cards[index] = card,
            None => self.cards.push(card),
        }
    }

    /// The first definition held by more than one card, if any
    pub fn duplicate_definition(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.cards
            .iter()
            .map(|card| card.definition.as_str())
            .find(|definition| !seen.insert(*definition))
    }

    /// Find a card by its term
    pub fn find_by_term(&self, term: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.term == term)
    }

    /// Find a card by its definition
    pub fn find_by_definition(&self, definition: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.definition == definition)
    }

    /// Check whether a card with this term exists
    pub fn contains_term(&self, term: &str) -> bool {
        self.position_of(term).is_some()
    }

    /// Set the error count of every card back to zero
    pub fn reset_all_errors(&mut self) {
        for card in &mut self.cards {
            card.errors = 0;
        }
    }

    /// Cards tied at the highest positive error count
    ///
    /// # Returns
    ///
    /// Every card whose error count equals the maximum, in store order.
    /// Empty if the store is empty or no card has any errors.
    pub fn hardest(&self) -> Vec<&Card> {
        let max = self.cards.iter().map(|card| card.errors).max().unwrap_or(0);
        if max == 0 {
            return Vec::new();
        }

        self.cards.iter().filter(|card| card.errors == max).collect()
    }

    /// Count one more wrong answer for the card at `index`
    ///
    /// Returns the card's new error count, or `None` if the index is out of
    /// range.
    pub fn record_error(&mut self, index: usize) -> Option<u32> {
        let card = self.cards.get_mut(index)?;
        card.errors = card.errors.saturating_add(1);
        Some(card.errors)
    }

    /// Get the card at `index`
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// All cards, in store order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over the cards in store order
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of cards in the store
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the store holds no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn position_of(&self, term: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.term == term)
    }
}

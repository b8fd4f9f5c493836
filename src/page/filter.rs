// SPDX-License-Identifier: MPL-2.0
//! Category filter for the project card grid.

use super::{CardId, PageLayout, ProjectCard};

/// Which project cards are shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(&self, card: &ProjectCard) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => card.category == *category,
        }
    }

    /// Ids of the cards this filter lets through, in page order.
    #[must_use]
    pub fn visible_cards(&self, page: &PageLayout) -> Vec<CardId> {
        page.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| self.matches(card))
            .map(|(index, _)| CardId(index))
            .collect()
    }
}

//! Page journeys.
//!
//! A journey is the ordered list of page paths the user has walked through in a wizard.
//! It drives the back link on every wizard page and lets controllers refuse a page that
//! was reached out of order, by bookmark or by refreshing after the wizard finished.

use crate::server::model::page;

/// Operations on a journey list of page paths.
pub trait Journey {
    /// Records a move from `current` to `next`.
    ///
    /// Any pages recorded after `current` are dropped first, so going back and choosing a
    /// different answer replaces the abandoned branch. If `current` is not in the journey
    /// yet it is appended before `next`.
    fn add_to_journey(&mut self, current: &str, next: &str);

    /// Page the back link on `current` points to.
    ///
    /// Falls back to the landing page when `current` is the first page or is not part of
    /// the journey.
    fn back_link(&self, current: &str) -> String;

    /// Whether `page` was reached through this journey.
    fn contains_page(&self, page: &str) -> bool;

    /// Restarts the journey at `page`.
    fn reset_to(&mut self, page: &str);
}

impl Journey for Vec<String> {
    fn add_to_journey(&mut self, current: &str, next: &str) {
        match self.iter().position(|path| path == current) {
            Some(index) => self.truncate(index + 1),
            None => self.push(current.to_string()),
        }

        if current != next {
            self.push(next.to_string());
        }
    }

    fn back_link(&self, current: &str) -> String {
        self.iter()
            .position(|path| path == current)
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| self.get(index))
            .cloned()
            .unwrap_or_else(|| page::MANAGE_ACCOUNT.to_string())
    }

    fn contains_page(&self, page: &str) -> bool {
        self.iter().any(|path| path == page)
    }

    fn reset_to(&mut self, page: &str) {
        self.clear();
        self.push(page.to_string());
    }
}

use crate::server::model::{action::ActionResult, journey::Journey, page};

/// Redirect for a wizard page requested outside its journey.
///
/// Returns `None` when `current` was reached through `journey`. Otherwise the user is sent
/// back to the landing page, which is where every wizard starts.
pub fn redirect_if_off_journey(journey: &impl Journey, current: &str) -> Option<ActionResult> {
    if journey.contains_page(current) {
        None
    } else {
        Some(ActionResult::redirect(page::MANAGE_ACCOUNT))
    }
}

/// Records `entry` as the first page of a wizard started from the landing page.
///
/// Revisiting the entry page from later in the wizard (a "change" link) keeps the pages
/// already answered.
pub fn enter_journey(journey: &mut impl Journey, entry: &str) {
    if !journey.contains_page(entry) {
        journey.add_to_journey(page::MANAGE_ACCOUNT, entry);
    }
}

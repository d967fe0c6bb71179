//! Building blocks shared by the pages.

pub mod form;
pub mod layout;

pub use form::{ErrorSummary, RadioGroup, RadioOption, SubmitButton, SummaryRow, TextInput};
pub use layout::Layout;

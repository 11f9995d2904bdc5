mod open_url;
mod show_card;
mod submit;
mod toggle_visibility;

pub use open_url::OpenUrlAction;
pub use show_card::ShowCardAction;
pub use submit::SubmitAction;
pub use toggle_visibility::{ToggleVisibilityAction, ToggleVisibilityTarget};

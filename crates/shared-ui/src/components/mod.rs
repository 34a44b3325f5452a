// Standalone components, no external widget library.
pub mod badge;
pub mod button;
pub mod card;
pub mod dialog;
pub mod form_select;
pub mod input;
pub mod label;
pub mod skeleton;
pub mod textarea;
pub mod toast;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use skeleton::*;
pub use textarea::*;
pub use toast::*;

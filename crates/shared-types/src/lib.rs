pub mod announcement;
pub mod assignment;
pub mod attendance;
pub mod billing;
pub mod class;
pub mod common;
pub mod enrollment;
pub mod notes;
pub mod progress;
pub mod requests;
pub mod schedule;
pub mod tabs;
pub mod user;
pub mod video;

pub use announcement::*;
pub use assignment::*;
pub use attendance::*;
pub use billing::*;
pub use class::*;
pub use common::*;
pub use enrollment::*;
pub use notes::*;
pub use progress::*;
pub use requests::*;
pub use schedule::*;
pub use tabs::*;
pub use user::*;
pub use video::*;

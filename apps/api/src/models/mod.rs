pub mod idea;
pub mod profile;

pub use idea::{Idea, IdeaKind};
pub use profile::{Profile, ProfileRequest};

//! Application state - the store shared by every screen and the slices it holds.

mod community;
mod mood;
mod profile;
mod session;
mod store;

pub use community::{seed_posts, CommunityFeed, CommunityPost, NewCommunityPost, COMMUNITY_GUIDELINES};
pub use mood::{MoodEntry, MoodLevel, MoodLog, MoodTrend};
pub use profile::{FitnessLevel, UserProfile};
pub use session::SessionState;
pub use store::{AppStore, StoreChange, SubscriptionId};

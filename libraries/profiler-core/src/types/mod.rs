mod ids;
mod profile;
mod stats;
mod user;

pub use ids::ProfileId;
pub use profile::{
    deserialize_text_or_number, CreateProfile, Profile, ProfileFields, UpdateProfile,
    PROFILE_FIELDS,
};
pub use stats::ProfileStats;
pub use user::{NewUser, User};

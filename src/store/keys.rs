//! Fixed, namespaced storage keys: one per collection plus the onboarding
//! flag. The store is the sole writer of these keys.

pub const USER: &str = "travelr:user";
pub const TRIPS: &str = "travelr:trips";
pub const EXPENSES: &str = "travelr:expenses";
pub const CHECKLIST: &str = "travelr:checklist";
pub const MEDIA: &str = "travelr:media";
pub const SAVED_PLACES: &str = "travelr:saved_places";
pub const JOURNAL: &str = "travelr:journal";
pub const PLAYLISTS: &str = "travelr:playlists";
pub const POSTS: &str = "travelr:posts";
pub const NOTIFICATIONS: &str = "travelr:notifications";
pub const ONBOARDING: &str = "travelr:onboarding_complete";

/// Every key the store owns, in the order account deletion clears them.
pub const ALL: [&str; 11] = [
    USER,
    TRIPS,
    EXPENSES,
    CHECKLIST,
    MEDIA,
    SAVED_PLACES,
    JOURNAL,
    PLAYLISTS,
    POSTS,
    NOTIFICATIONS,
    ONBOARDING,
];

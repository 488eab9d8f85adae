/// localStorage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// localStorage key holding the user type label (`customer` | `worker` | `administrator`)
pub const USER_TYPE_STORAGE_KEY: &str = "userType";

/// Default page size for every paginated listing
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default look-back window for earnings history
pub const DEFAULT_MONTHS_BACK: u32 = 12;

/// Orders rated at or below this value count as negative feedback
pub const DEFAULT_RATING_THRESHOLD: u8 = 3;

/// Id of the mount point in index.html
pub const APP_ROOT_ID: &str = "app";

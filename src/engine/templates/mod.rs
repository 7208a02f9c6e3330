mod listing;
mod preview;

pub use listing::{developers_listing, games_listing, videos_listing};
pub use preview::{developer_previews, game_previews, showcase_previews, COMING_SOON};

mod game;
pub mod messages;
mod site;
pub(crate) mod storage;

pub use game::{Developer, Game, GameStatus, Video};
pub use site::{
    DeveloperMap, FeaturedDeveloper, FeaturedGame, FeaturedPayload, FeaturedSelection,
    FeaturedShowcase, GameMap, SiteData, SiteStats, FEATURED_LIMIT,
};
pub use storage::{DataCache, Document, DocumentStore, Revision};

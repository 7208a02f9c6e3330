//! Locating, reading and rewriting the editable regions of site pages.

pub mod scrapers;
pub mod sections;
pub mod splice;
pub mod templates;

pub use scrapers::{DevelopersScraper, FeaturedScraper, GamesScraper, SectionScraper, VideosScraper};
pub use sections::Section;
pub use splice::{replace_favicon, splice_section, Spliced};

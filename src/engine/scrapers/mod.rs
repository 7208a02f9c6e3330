use super::sections::Section;

pub(crate) mod developers;
pub(crate) mod featured;
pub(crate) mod games;
pub(crate) mod videos;

pub use developers::DevelopersScraper;
pub use featured::FeaturedScraper;
pub use games::GamesScraper;
pub use videos::VideosScraper;

/// Reads the records of one kind back out of a rendered page.
///
/// Scraping is pattern based and only as lenient as the patterns: cards that
/// drift from the template are skipped. A page without the section yields an
/// empty collection.
pub trait SectionScraper {
    type Output: Default;

    fn section(&self) -> Section;

    /// Scrapes the markup inside the section container.
    fn scrape(&self, container: &str) -> Self::Output;

    fn extract(&self, document: &str) -> Self::Output {
        self.section()
            .inner(document)
            .map(|container| self.scrape(container))
            .unwrap_or_default()
    }
}

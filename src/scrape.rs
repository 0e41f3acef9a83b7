use crate::ScrapeError;
use scraper::Html;

pub trait Scraper {
    type Document: std::fmt::Debug;

    fn can_be_scraped(&self, doc: &Html) -> bool;
    fn scrape(&self, doc: &Html) -> Result<Self::Document, ScrapeError>;
}

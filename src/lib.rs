//! Extraction of quest records from Eorzea database quest pages.
//!
//! A page is located with [`node::content_root`], then
//! [`quest::assemble`] runs one extractor per field over the content block.
//! [`QuestScraper`] and [`parse_quest_page`] wrap both steps.

pub mod cards;
pub mod node;
pub mod quest;
pub mod scrape;
pub mod table;

mod error;
mod utils;

pub use error::{ExtractError, ScrapeError};
pub use node::{Node, Query};
pub use quest::{
    parse_quest_page, Condition, Coordinates, ItemRef, QuestDetail, QuestRef, QuestScraper, Reward,
};
pub use scrape::Scraper;

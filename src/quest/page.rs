use super::{assemble, QuestDetail};
use crate::node::{content_root, Node, Query};
use crate::scrape::Scraper;
use crate::ScrapeError;
use scraper::Html;
use tracing::debug;

/// Scrapes quest detail pages of the Eorzea database.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestScraper;

impl Scraper for QuestScraper {
    type Document = QuestDetail;

    fn can_be_scraped(&self, doc: &Html) -> bool {
        content_root(doc)
            .and_then(|root| root.first(&Query::NAME))
            .is_some()
    }

    fn scrape(&self, doc: &Html) -> Result<Self::Document, ScrapeError> {
        let root = content_root(doc).ok_or(ScrapeError::MissingContent)?;
        let quest = assemble(&root)?;
        debug!("Scraped quest {}", quest.name);
        Ok(quest)
    }
}

/// Parses raw page markup and scrapes the quest it describes.
pub fn parse_quest_page(html: &str) -> Result<QuestDetail, ScrapeError> {
    let doc = Html::parse_document(html);
    QuestScraper.scrape(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::Field;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_scrape_quest_page() {
        let html = fs::read_to_string("tests/htmls/quest.html").expect("Invalid file url");
        let doc = Html::parse_document(&html);

        assert!(QuestScraper.can_be_scraped(&doc));
        let quest = QuestScraper.scrape(&doc).unwrap();
        assert_eq!(quest.name, "冒険者への手引き");
        assert_eq!(quest.unlock_quests.len(), 3);
        assert_eq!(parse_quest_page(&html).unwrap(), quest);
    }

    #[test]
    fn test_page_without_content_block() {
        let html = "<html><body><div id=\"main\"><h2>News</h2></div></body></html>";
        let doc = Html::parse_document(html);

        assert!(!QuestScraper.can_be_scraped(&doc));
        assert!(matches!(
            parse_quest_page(html),
            Err(ScrapeError::MissingContent)
        ));
    }

    #[test]
    fn test_page_without_name() {
        let html = r#"<html><body><div id="main"><div id="eorzea_db"><div class="clearfix"><div class="db_cnts"><div class="db__l_main"><p class="db-view__quest__type">新生エオルゼア</p></div></div></div></div></div></body></html>"#;
        let doc = Html::parse_document(html);

        assert!(!QuestScraper.can_be_scraped(&doc));
        let err = parse_quest_page(html).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::Field {
                field: Field::Name,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Failed to extract quest name");
    }

    #[test]
    fn test_item_page_is_not_a_quest() {
        let html = fs::read_to_string("tests/htmls/not_quest.html").expect("Invalid file url");
        let doc = Html::parse_document(&html);
        assert!(!QuestScraper.can_be_scraped(&doc));
    }
}

use crate::node::{Node, Query};
use tracing::debug;

/// A linked sub-entity as shown on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub title: String,
}

/// Collects the cards of the `container` section in document order.
///
/// Cards without a usable link or title are skipped. An absent container
/// yields no cards.
pub fn extract_links<N: Node>(root: &N, container: &Query) -> Vec<Link> {
    let Some(section) = root.first(container) else {
        debug!("No {} on page", container.name());
        return vec![];
    };

    section
        .all(&Query::CARD)
        .iter()
        .filter_map(|card| {
            let link = parse_card(card);
            if link.is_none() {
                debug!("Skip malformed card in {}", container.name());
            }
            link
        })
        .collect()
}

fn parse_card<N: Node>(card: &N) -> Option<Link> {
    let href = card
        .first(&Query::CARD_LINK)?
        .attribute("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())?
        .to_string();
    let title = card.first(&Query::CARD_TITLE)?.text_content();
    if title.is_empty() {
        return None;
    }
    Some(Link { href, title })
}

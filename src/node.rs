//! Read-only structural queries over a parsed page.
//!
//! Extractors only talk to the [`Node`] trait and the [`Query`] constants
//! declared here, so the HTML engine behind them can be swapped without
//! touching extraction logic. [`scraper::ElementRef`] is the shipped
//! implementation.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use tracing::warn;

/// A named structural path into a quest page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    name: &'static str,
    path: &'static str,
}

impl Query {
    pub const fn new(name: &'static str, path: &'static str) -> Self {
        Query { name, path }
    }

    /// Human readable description, used in error messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// CSS selector text.
    pub fn path(&self) -> &'static str {
        self.path
    }

    pub const CONTENT_ROOT: Query = Query::new(
        "quest content block",
        "div#main > div#eorzea_db > div.clearfix > div.db_cnts > div.db__l_main",
    );

    pub const NAME: Query = Query::new("quest name heading", "h2.db-view__detail__lname_name");
    pub const TYPE: Query = Query::new("quest type label", "p.db-view__quest__type");
    pub const NPC: Query = Query::new("quest giver table", "dl.db-view__quest__npc");
    pub const PLACE: Query = Query::new("quest location", "span.db-view__quest__npc__place");
    pub const COORDINATES: Query =
        Query::new("quest coordinates", "span.db-view__quest__npc__coordinate");

    pub const CONDITIONS: Query = Query::new("conditions table", "dl.db-view__quest__conditions");

    pub const ROW: Query = Query::new("table row", "div.db-view__data__row");
    pub const LABEL: Query = Query::new("row label", "dt");
    pub const VALUE: Query = Query::new("row value", "dd");

    pub const REWARDS: Query = Query::new(
        "rewards block",
        "div.db-view__quest__reward ul.db-view__quest__reward__fixed",
    );
    pub const REWARD_ROW: Query = Query::new("reward line", "li");
    pub const REWARD_LABEL: Query =
        Query::new("reward label", "span.db-view__quest__reward__label");
    pub const REWARD_VALUE: Query =
        Query::new("reward amount", "span.db-view__quest__reward__value");

    pub const SELECTABLE_REWARDS: Query = Query::new(
        "selectable rewards",
        "div.db-view__quest__reward div.db-view__quest__reward__choice",
    );
    pub const PREREQUISITE_QUESTS: Query =
        Query::new("required quests", "div.db-view__quest__premise");
    pub const UNLOCK_QUESTS: Query = Query::new("unlocked quests", "div.db-view__quest__unlock");

    pub const CARD: Query = Query::new("card", "li.db-card");
    pub const CARD_LINK: Query = Query::new("card link", "a.db-card__link");
    pub const CARD_TITLE: Query = Query::new("card title", "span.db-card__name");

    pub const ALL: &'static [Query] = &[
        Query::CONTENT_ROOT,
        Query::NAME,
        Query::TYPE,
        Query::NPC,
        Query::PLACE,
        Query::COORDINATES,
        Query::CONDITIONS,
        Query::ROW,
        Query::LABEL,
        Query::VALUE,
        Query::REWARDS,
        Query::REWARD_ROW,
        Query::REWARD_LABEL,
        Query::REWARD_VALUE,
        Query::SELECTABLE_REWARDS,
        Query::PREREQUISITE_QUESTS,
        Query::UNLOCK_QUESTS,
        Query::CARD,
        Query::CARD_LINK,
        Query::CARD_TITLE,
    ];
}

/// A handle to one element of a parsed document.
pub trait Node: Sized {
    /// First descendant matching `query`.
    fn first(&self, query: &Query) -> Option<Self>;

    /// All descendants matching `query`, in document order.
    fn all(&self, query: &Query) -> Vec<Self>;

    /// Concatenated descendant text, trimmed.
    fn text_content(&self) -> String;

    fn attribute(&self, name: &str) -> Option<&str>;
}

const E: &str = "Invalid selector";
lazy_static! {
    static ref SELECTORS: HashMap<&'static str, Selector> = Query::ALL
        .iter()
        .map(|q| (q.path(), Selector::parse(q.path()).expect(E)))
        .collect();
}

fn with_selector<T>(query: &Query, f: impl FnOnce(&Selector) -> T) -> Option<T> {
    if let Some(selector) = SELECTORS.get(query.path()) {
        return Some(f(selector));
    }
    match Selector::parse(query.path()) {
        Ok(selector) => Some(f(&selector)),
        Err(_) => {
            warn!("Unusable selector for {}: {}", query.name(), query.path());
            None
        }
    }
}

impl<'a> Node for ElementRef<'a> {
    fn first(&self, query: &Query) -> Option<Self> {
        with_selector(query, |selector| self.select(selector).next()).flatten()
    }

    fn all(&self, query: &Query) -> Vec<Self> {
        with_selector(query, |selector| self.select(selector).collect()).unwrap_or_default()
    }

    fn text_content(&self) -> String {
        self.text().collect::<String>().trim().to_string()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }
}

/// Locates the quest content block of a full page.
pub fn content_root(doc: &Html) -> Option<ElementRef<'_>> {
    doc.root_element().first(&Query::CONTENT_ROOT)
}

mod assemble;
mod fields;
mod page;
mod policy;

pub use assemble::assemble;
pub use fields::{
    extract_client, extract_conditions, extract_coordinates, extract_name, extract_place,
    extract_prerequisite_quests, extract_rewards, extract_selectable_rewards, extract_type,
    extract_unlock_quests,
};
pub use page::{parse_quest_page, QuestScraper};
pub use policy::{Field, Policy};

use crate::cards::Link;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A prerequisite or follow-on quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestRef {
    pub link: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<QuestRef>>,
}

impl From<Link> for QuestRef {
    fn from(link: Link) -> Self {
        QuestRef {
            link: link.href,
            title: link.title,
            children: None,
        }
    }
}

/// A reward item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRef {
    pub link: String,
    pub title: String,
}

impl From<Link> for ItemRef {
    fn from(link: Link) -> Self {
        ItemRef {
            link: link.href,
            title: link.title,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// Requirement kinds of the conditions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
    InitJob,
    Class,
    GrandCompany,
    Content,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::InitJob => "initJob",
            Condition::Class => "class",
            Condition::GrandCompany => "grandCompany",
            Condition::Content => "content",
        }
    }
}

/// Fixed reward kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reward {
    Exp,
    Gil,
    Seals,
}

impl Reward {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reward::Exp => "exp",
            Reward::Gil => "gil",
            Reward::Seals => "seals",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestDetail {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub quest_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub conditions: BTreeMap<Condition, String>,
    pub rewards: BTreeMap<Reward, u64>,
    pub prerequisite_quests: Vec<QuestRef>,
    pub unlock_quests: Vec<QuestRef>,
    pub selectable_rewards: Vec<ItemRef>,
}

impl fmt::Display for QuestDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let none = "None";
        writeln!(f, "Name            : {}", self.name)?;
        writeln!(
            f,
            "Type            : {}",
            self.quest_type.as_deref().unwrap_or(none)
        )?;
        writeln!(
            f,
            "Client          : {}",
            self.client.as_deref().unwrap_or(none)
        )?;
        writeln!(
            f,
            "Place           : {}",
            self.place.as_deref().unwrap_or(none)
        )?;
        if let Some(c) = self.coordinates.as_ref() {
            writeln!(f, "Coordinates     : ({}, {})", c.x, c.y)?;
        } else {
            writeln!(f, "Coordinates     : None")?;
        };

        writeln!(f, "Conditions      : ")?;
        for (condition, value) in &self.conditions {
            writeln!(f, "> {}: {}", condition.as_str(), value)?;
        }
        writeln!(f, "Rewards         : ")?;
        for (reward, amount) in &self.rewards {
            writeln!(f, "> {}: {}", reward.as_str(), amount)?;
        }
        writeln!(f, "Required        : ")?;
        for q in &self.prerequisite_quests {
            writeln!(f, "> {} ({})", q.title, q.link)?;
        }
        writeln!(f, "Unlocks         : ")?;
        for q in &self.unlock_quests {
            writeln!(f, "> {} ({})", q.title, q.link)?;
        }
        writeln!(f, "Choose One      : ")?;
        for item in &self.selectable_rewards {
            writeln!(f, "> {} ({})", item.title, item.link)?;
        }

        Ok(())
    }
}

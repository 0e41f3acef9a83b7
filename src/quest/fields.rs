//! One extractor per quest attribute. Each takes the quest's content block.

use super::{Condition, Coordinates, ItemRef, QuestRef, Reward};
use crate::cards::extract_links;
use crate::node::{Node, Query};
use crate::table::{find_value, lookup, parse_table, TableShape};
use crate::utils::{parse_amount, parse_pair};
use crate::ExtractError;
use std::collections::BTreeMap;
use tracing::debug;

const NPC: TableShape = TableShape {
    table: Query::NPC,
    row: Query::ROW,
    label: Query::LABEL,
    value: Query::VALUE,
};

const CLIENT_LABEL: &str = "依頼主";
const PLACE_LABEL: &str = "場所";

const CONDITIONS: TableShape = TableShape {
    table: Query::CONDITIONS,
    row: Query::ROW,
    label: Query::LABEL,
    value: Query::VALUE,
};

const CONDITION_LABELS: &[(&str, Condition)] = &[
    ("初期クラス", Condition::InitJob),
    ("クラス・ジョブ", Condition::Class),
    ("グランドカンパニー", Condition::GrandCompany),
    ("コンテンツ", Condition::Content),
];

const REWARD_LABELS: &[(&str, Reward)] = &[
    ("経験値", Reward::Exp),
    ("ギル", Reward::Gil),
    ("軍票", Reward::Seals),
];

/// Trimmed text of `node`. A node without text counts as absent.
fn non_empty_text<N: Node>(node: Option<N>, what: &'static str) -> Result<String, ExtractError> {
    let text = node.ok_or(ExtractError::Absent(what))?.text_content();
    if text.is_empty() {
        return Err(ExtractError::Absent(what));
    }
    Ok(text)
}

/// The `場所` cell of the quest giver table, holding place and coordinates.
fn location<N: Node>(root: &N) -> Option<N> {
    find_value(root, &NPC, PLACE_LABEL)
}

pub fn extract_name<N: Node>(root: &N) -> Result<String, ExtractError> {
    let heading = root
        .first(&Query::NAME)
        .ok_or(ExtractError::Absent(Query::NAME.name()))?;
    let name = heading.text_content();
    if name.is_empty() {
        return Err(ExtractError::malformed("quest name", name));
    }
    Ok(name)
}

pub fn extract_type<N: Node>(root: &N) -> Result<String, ExtractError> {
    non_empty_text(root.first(&Query::TYPE), Query::TYPE.name())
}

pub fn extract_client<N: Node>(root: &N) -> Result<String, ExtractError> {
    non_empty_text(find_value(root, &NPC, CLIENT_LABEL), "quest giver")
}

pub fn extract_place<N: Node>(root: &N) -> Result<String, ExtractError> {
    let place = location(root).and_then(|cell| cell.first(&Query::PLACE));
    non_empty_text(place, Query::PLACE.name())
}

/// A coordinate node that is present but unreadable, blank included, is
/// malformed rather than absent.
pub fn extract_coordinates<N: Node>(root: &N) -> Result<Coordinates, ExtractError> {
    let text = location(root)
        .and_then(|cell| cell.first(&Query::COORDINATES))
        .ok_or(ExtractError::Absent(Query::COORDINATES.name()))?
        .text_content();
    let (x, y) = parse_pair(&text).ok_or_else(|| ExtractError::malformed("coordinates", &text))?;
    Ok(Coordinates { x, y })
}

pub fn extract_conditions<N: Node>(
    root: &N,
) -> Result<BTreeMap<Condition, String>, ExtractError> {
    parse_table(root, &CONDITIONS, CONDITION_LABELS)
}

/// Reads the fixed rewards. A recognised reward whose amount is missing,
/// blank or not a whole number fails the extraction. Unknown rewards are
/// ignored and the first line of a repeated reward wins.
pub fn extract_rewards<N: Node>(root: &N) -> Result<BTreeMap<Reward, u64>, ExtractError> {
    let block = root
        .first(&Query::REWARDS)
        .ok_or(ExtractError::Absent(Query::REWARDS.name()))?;

    let mut rewards = BTreeMap::new();
    for line in block.all(&Query::REWARD_ROW) {
        let Some(label) = line.first(&Query::REWARD_LABEL).map(|n| n.text_content()) else {
            continue;
        };
        let Some(reward) = lookup(REWARD_LABELS, &label) else {
            debug!("Ignore unknown {} {:?}", Query::REWARD_LABEL.name(), label);
            continue;
        };
        if rewards.contains_key(&reward) {
            continue;
        }
        let text = line
            .first(&Query::REWARD_VALUE)
            .map(|n| n.text_content())
            .unwrap_or_default();
        let amount =
            parse_amount(&text).ok_or_else(|| ExtractError::malformed("reward amount", text))?;
        rewards.insert(reward, amount);
    }

    Ok(rewards)
}

pub fn extract_selectable_rewards<N: Node>(root: &N) -> Vec<ItemRef> {
    extract_links(root, &Query::SELECTABLE_REWARDS)
        .into_iter()
        .map(ItemRef::from)
        .collect()
}

pub fn extract_prerequisite_quests<N: Node>(root: &N) -> Vec<QuestRef> {
    extract_links(root, &Query::PREREQUISITE_QUESTS)
        .into_iter()
        .map(QuestRef::from)
        .collect()
}

pub fn extract_unlock_quests<N: Node>(root: &N) -> Vec<QuestRef> {
    extract_links(root, &Query::UNLOCK_QUESTS)
        .into_iter()
        .map(QuestRef::from)
        .collect()
}

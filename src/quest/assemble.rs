use super::fields::{
    extract_client, extract_conditions, extract_coordinates, extract_name, extract_place,
    extract_prerequisite_quests, extract_rewards, extract_selectable_rewards, extract_type,
    extract_unlock_quests,
};
use super::{Field, Policy, QuestDetail};
use crate::node::Node;
use crate::{ExtractError, ScrapeError};
use tracing::debug;

/// Applies the field's policy to an extractor result.
fn resolve<T: Default>(field: Field, result: Result<T, ExtractError>) -> Result<T, ScrapeError> {
    match result {
        Ok(value) => Ok(value),
        Err(ExtractError::Absent(what)) if field.policy() == Policy::Optional => {
            debug!("No {} on page, leave {} empty", what, field);
            Ok(T::default())
        }
        Err(source) => Err(ScrapeError::Field { field, source }),
    }
}

/// Runs every field extractor against one quest content block.
///
/// Stops at the first field that cannot be tolerated; nothing is returned
/// until the whole record is built.
pub fn assemble<N: Node>(root: &N) -> Result<QuestDetail, ScrapeError> {
    let name = resolve(Field::Name, extract_name(root))?;
    let quest_type = resolve(Field::Type, extract_type(root).map(Some))?;
    let client = resolve(Field::Client, extract_client(root).map(Some))?;
    let place = resolve(Field::Place, extract_place(root).map(Some))?;
    let coordinates = resolve(Field::Coordinates, extract_coordinates(root).map(Some))?;
    let conditions = resolve(Field::Conditions, extract_conditions(root))?;
    let rewards = resolve(Field::Rewards, extract_rewards(root))?;
    let prerequisite_quests = resolve(
        Field::PrerequisiteQuests,
        Ok(extract_prerequisite_quests(root)),
    )?;
    let unlock_quests = resolve(Field::UnlockQuests, Ok(extract_unlock_quests(root)))?;
    let selectable_rewards = resolve(
        Field::SelectableRewards,
        Ok(extract_selectable_rewards(root)),
    )?;

    Ok(QuestDetail {
        name,
        quest_type,
        client,
        place,
        coordinates,
        conditions,
        rewards,
        prerequisite_quests,
        unlock_quests,
        selectable_rewards,
    })
}

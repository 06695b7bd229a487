//! View model for the activity list
//!
//! Cards are built here without touching any rendering surface, so every
//! view (DOM, terminal, tests) shows the same thing.

use crate::model::{Activities, Activity};

pub const NO_PARTICIPANTS: &str = "No participants yet.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantList {
    /// A single placeholder row, never an empty list.
    Placeholder(&'static str),
    /// One row per participant; each row carries a removal control.
    Rows(Vec<ParticipantRow>),
}

impl ParticipantList {
    pub fn emails(&self) -> impl Iterator<Item = &str> {
        let rows: &[ParticipantRow] = match self {
            ParticipantList::Placeholder(_) => &[],
            ParticipantList::Rows(rows) => rows.as_slice(),
        };
        rows.iter().map(|row| row.email.as_str())
    }

    pub fn row_count(&self) -> usize {
        match self {
            ParticipantList::Placeholder(_) => 1,
            ParticipantList::Rows(rows) => rows.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub participant_count: usize,
    pub participants: ParticipantList,
}

impl ActivityCard {
    pub fn schedule_line(&self) -> String {
        format!("Schedule: {}", self.schedule)
    }

    pub fn participants_heading(&self) -> String {
        format!("Participants ({})", self.participant_count)
    }
}

impl From<&Activity> for ActivityCard {
    fn from(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            participant_count: activity.participants.len(),
            participants: create_participant_list(&activity.participants),
        }
    }
}

pub fn create_participant_list(participants: &[String]) -> ParticipantList {
    if participants.is_empty() {
        return ParticipantList::Placeholder(NO_PARTICIPANTS);
    }
    ParticipantList::Rows(
        participants
            .iter()
            .map(|email| ParticipantRow {
                email: email.clone(),
            })
            .collect(),
    )
}

/// One card per activity, in the mapping's order.
pub fn render_activities(activities: &Activities) -> Vec<ActivityCard> {
    activities.iter().map(ActivityCard::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chess_club_card() {
        let activities: Activities = serde_json::from_str(
            r#"{"Chess Club": {"description":"Weekly games","schedule":"Fri 3pm","participants":["a@x.com"]}}"#,
        )
        .unwrap();

        let cards = render_activities(&activities);
        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.name, "Chess Club");
        assert_eq!(card.participant_count, 1);
        assert_eq!(card.participants_heading(), "Participants (1)");
        assert_eq!(card.schedule_line(), "Schedule: Fri 3pm");
        assert_eq!(
            card.participants,
            ParticipantList::Rows(vec![ParticipantRow {
                email: "a@x.com".to_string()
            }])
        );
    }

    #[test]
    fn empty_roster_gets_placeholder() {
        let list = create_participant_list(&[]);
        assert_eq!(list, ParticipantList::Placeholder(NO_PARTICIPANTS));
        assert_eq!(list.row_count(), 1);
        assert_eq!(list.emails().count(), 0);
    }

    #[test]
    fn one_card_per_activity_in_order() {
        let activities: Activities = serde_json::from_str(
            r#"{
                "Zumba": {"description": "", "schedule": "", "participants": ["a@x.com", "b@x.com"]},
                "Art": {"description": "", "schedule": "", "participants": []},
                "Music": {"description": "", "schedule": "", "participants": ["c@x.com"]}
            }"#,
        )
        .unwrap();

        let cards = render_activities(&activities);
        let summary: Vec<(&str, usize, usize)> = cards
            .iter()
            .map(|c| (c.name.as_str(), c.participant_count, c.participants.row_count()))
            .collect();
        assert_eq!(summary, [("Zumba", 2, 2), ("Art", 0, 1), ("Music", 1, 1)]);
    }
}

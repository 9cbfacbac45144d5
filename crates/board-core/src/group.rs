//! Partition tickets into board columns.

use crate::mode::{GroupChoice, GroupMode, ModeChoice};
use crate::model::{Ticket, User};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Column name for tickets whose `user_id` resolves to no known user.
pub const UNKNOWN_USER: &str = "Unknown User";

/// Column key under `By Priority` for tickets without a priority.
pub const NO_PRIORITY_KEY: &str = "none";

/// Group name → tickets, enumerated in the order each name was first seen.
pub type Grouped = IndexMap<String, Vec<Ticket>>;

/// Partition `tickets` by `mode`.
///
/// Tickets keep their input order within each group. Groups without tickets
/// never appear. An unrecognized mode yields an empty mapping.
#[must_use]
pub fn group(tickets: &[Ticket], users: &[User], mode: &GroupChoice) -> Grouped {
    let mode = match mode {
        ModeChoice::Known(mode) => *mode,
        ModeChoice::Unrecognized(raw) => {
            warn!(mode = %raw, "unrecognized grouping mode; board is empty");
            return Grouped::new();
        }
    };

    // First user wins when ids repeat.
    let mut names: HashMap<&str, &str> = HashMap::new();
    if mode == GroupMode::ByUser {
        for user in users {
            names.entry(user.id.as_str()).or_insert(user.name.as_str());
        }
    }

    let mut grouped = Grouped::new();
    for ticket in tickets {
        let key = match mode {
            GroupMode::ByStatus => ticket.status.clone(),
            GroupMode::ByUser => names
                .get(ticket.user_id.as_str())
                .copied()
                .unwrap_or(UNKNOWN_USER)
                .to_string(),
            GroupMode::ByPriority => ticket
                .priority
                .map_or_else(|| NO_PRIORITY_KEY.to_string(), |priority| priority.to_string()),
        };
        grouped.entry(key).or_default().push(ticket.clone());
    }

    debug!(
        mode = %mode,
        tickets = tickets.len(),
        groups = grouped.len(),
        "grouped tickets"
    );
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: &str, status: &str, priority: i64, user_id: &str) -> Ticket {
        Ticket {
            id: id.into(),
            title: format!("ticket {id}"),
            status: status.into(),
            priority: Some(priority),
            tag: Vec::new(),
            user_id: user_id.into(),
        }
    }

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.into(),
            name: name.into(),
        }
    }

    fn ids(group: &[Ticket]) -> Vec<&str> {
        group.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn by_status_uses_status_verbatim() {
        let tickets = vec![
            ticket("1", "Todo", 1, "u1"),
            ticket("2", "In progress", 2, "u1"),
            ticket("3", "Todo", 3, "u2"),
        ];
        let grouped = group(&tickets, &[], &GroupMode::ByStatus.into());

        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["Todo", "In progress"]);
        assert_eq!(ids(&grouped["Todo"]), vec!["1", "3"]);
        assert_eq!(ids(&grouped["In progress"]), vec!["2"]);
    }

    #[test]
    fn by_user_resolves_names() {
        let tickets = vec![
            ticket("1", "Todo", 1, "u2"),
            ticket("2", "Todo", 1, "u1"),
            ticket("3", "Todo", 1, "u2"),
        ];
        let users = vec![user("u1", "Anoop"), user("u2", "Yogesh")];
        let grouped = group(&tickets, &users, &GroupMode::ByUser.into());

        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["Yogesh", "Anoop"]);
        assert_eq!(ids(&grouped["Yogesh"]), vec!["1", "3"]);
    }

    #[test]
    fn by_user_missing_user_is_unknown() {
        let tickets = vec![ticket("1", "Todo", 1, "ghost"), ticket("2", "Todo", 1, "u1")];
        let users = vec![user("u1", "Anoop")];
        let grouped = group(&tickets, &users, &GroupMode::ByUser.into());

        assert_eq!(ids(&grouped[UNKNOWN_USER]), vec!["1"]);
        assert_eq!(ids(&grouped["Anoop"]), vec!["2"]);
    }

    #[test]
    fn by_priority_keys_are_numeric() {
        let tickets = vec![
            ticket("1", "Todo", 4, "u1"),
            ticket("2", "Todo", 0, "u1"),
            ticket("3", "Todo", 4, "u1"),
            ticket("4", "Todo", 9, "u1"),
        ];
        let grouped = group(&tickets, &[], &GroupMode::ByPriority.into());

        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["4", "0", "9"]);
        assert_eq!(ids(&grouped["4"]), vec!["1", "3"]);
        assert!(!grouped.contains_key("Urgent"));
    }

    #[test]
    fn missing_priority_gets_its_own_column() {
        let mut tickets = vec![
            ticket("1", "Todo", 0, "u1"),
            ticket("2", "Todo", 0, "u1"),
            ticket("3", "Todo", 2, "u1"),
        ];
        tickets[1].priority = None;
        let grouped = group(&tickets, &[], &GroupMode::ByPriority.into());

        assert_eq!(
            grouped.keys().collect::<Vec<_>>(),
            vec!["0", NO_PRIORITY_KEY, "2"]
        );
        assert_eq!(ids(&grouped["0"]), vec!["1"]);
        assert_eq!(ids(&grouped[NO_PRIORITY_KEY]), vec!["2"]);
    }

    #[test]
    fn integer_user_ids_resolve() {
        let data: crate::model::BoardData = serde_json::from_str(
            r#"{"tickets":[{"id":1,"title":"a","status":"Todo","userId":7},
                           {"id":2,"title":"b","status":"Todo","userId":8}],
                "users":[{"id":7,"name":"Ana"}]}"#,
        )
        .expect("integer ids decode");
        let grouped = group(&data.tickets, &data.users, &GroupMode::ByUser.into());

        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["Ana", UNKNOWN_USER]);
        assert_eq!(ids(&grouped["Ana"]), vec!["1"]);
    }

    #[test]
    fn empty_input_is_empty_mapping() {
        let grouped = group(&[], &[user("u1", "Anoop")], &GroupMode::ByUser.into());
        assert!(grouped.is_empty());
    }

    #[test]
    fn unrecognized_mode_is_empty_mapping() {
        let tickets = vec![ticket("1", "Todo", 1, "u1")];
        let grouped = group(&tickets, &[], &GroupChoice::parse("By Department"));
        assert!(grouped.is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let tickets = vec![ticket("2", "Todo", 1, "u1"), ticket("1", "Done", 3, "u1")];
        let before = tickets.clone();
        let _ = group(&tickets, &[], &GroupMode::ByStatus.into());
        assert_eq!(tickets, before);
    }
}

use serde::{Deserialize, Deserializer, Serialize};

/// A single work item as delivered by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub title: String,
    pub status: String,
    /// Meaningful in `0..=4`. `None` when the source omits it or sends `null`.
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub tag: Vec<String>,
    #[serde(default, deserialize_with = "opaque_id_or_empty")]
    pub user_id: String,
}

/// An assignee that tickets reference through `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub name: String,
}

/// The document shape returned by the data source:
/// `{ "tickets": [...], "users": [...] }`.
///
/// Replaced wholesale on every successful fetch, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

/// Ids arrive as strings or integers; both are kept as their string form so
/// `userId` 7 and user id 7 compare equal.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

fn opaque_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(String::from)
}

/// Like [`opaque_id`], but `null` reads as no reference.
fn opaque_id_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<RawId>::deserialize(deserializer)?
        .map(String::from)
        .unwrap_or_default())
}

impl BoardData {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tickets.is_empty() && self.users.is_empty()
    }
}

impl Ticket {
    /// Display label for this ticket's priority, "No priority" when absent.
    #[must_use]
    pub fn priority_label(&self) -> &'static str {
        self.priority.map_or(crate::priority::NO_PRIORITY, crate::priority::label)
    }

    /// Tags joined for display, e.g. `"Feature request, Bug"`.
    #[must_use]
    pub fn tags_display(&self) -> String {
        self.tag.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardData, Ticket};

    const SAMPLE: &str = r#"{
        "tickets": [
            {
                "id": "CAM-1",
                "title": "Update User Profile Page UI",
                "tag": ["Feature request"],
                "userId": "usr-1",
                "status": "Todo",
                "priority": 4
            },
            {
                "id": "CAM-2",
                "title": "Add Multi-Language Support",
                "tag": ["Feature Request", "i18n"],
                "userId": "usr-2",
                "status": "In progress",
                "priority": 3
            }
        ],
        "users": [
            { "id": "usr-1", "name": "Anoop sharma", "available": false },
            { "id": "usr-2", "name": "Yogesh", "available": true }
        ]
    }"#;

    #[test]
    fn decodes_data_source_document() {
        let data: BoardData = serde_json::from_str(SAMPLE).expect("sample should decode");
        assert_eq!(data.tickets.len(), 2);
        assert_eq!(data.users.len(), 2);
        assert_eq!(data.tickets[0].user_id, "usr-1");
        assert_eq!(data.tickets[1].tag, vec!["Feature Request", "i18n"]);
        assert_eq!(data.users[1].name, "Yogesh");
    }

    #[test]
    fn optional_ticket_fields_default() {
        let ticket: Ticket =
            serde_json::from_str(r#"{"id":"T-1","title":"t","status":"Done"}"#)
                .expect("minimal ticket should decode");
        assert_eq!(ticket.priority, None);
        assert_eq!(ticket.priority_label(), "No priority");
        assert!(ticket.tag.is_empty());
        assert_eq!(ticket.user_id, "");
    }

    #[test]
    fn tags_join_with_comma_space() {
        let ticket = Ticket {
            id: "T-1".into(),
            title: "t".into(),
            status: "Todo".into(),
            priority: Some(1),
            tag: vec!["a".into(), "b".into()],
            user_id: String::new(),
        };
        assert_eq!(ticket.tags_display(), "a, b");
    }

    #[test]
    fn integer_ids_decode_as_strings() {
        let data: BoardData = serde_json::from_str(
            r#"{"tickets":[{"id":1,"title":"t","status":"Todo","priority":2,"userId":7}],
                "users":[{"id":7,"name":"Ana"}]}"#,
        )
        .expect("integer ids should decode");
        assert_eq!(data.tickets[0].id, "1");
        assert_eq!(data.tickets[0].user_id, "7");
        assert_eq!(data.users[0].id, data.tickets[0].user_id);
    }

    #[test]
    fn null_user_id_is_no_reference() {
        let ticket: Ticket =
            serde_json::from_str(r#"{"id":"T-1","title":"t","status":"Todo","userId":null}"#)
                .expect("null userId should decode");
        assert_eq!(ticket.user_id, "");
    }

    #[test]
    fn non_scalar_id_is_rejected() {
        let result = serde_json::from_str::<Ticket>(r#"{"id":[1],"title":"t","status":"Todo"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn null_priority_reads_as_absent() {
        let ticket: Ticket = serde_json::from_str(
            r#"{"id":"A","title":"t","status":"Todo","priority":null,"tag":[],"userId":"u"}"#,
        )
        .expect("null priority should decode");
        assert_eq!(ticket.priority, None);
        assert_eq!(ticket.priority_label(), "No priority");
    }

    #[test]
    fn empty_document_is_empty_board() {
        let data: BoardData = serde_json::from_str("{}").expect("empty object should decode");
        assert!(data.is_empty());
    }
}

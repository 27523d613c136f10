//! Board Models
//!
//! Columns, tasks and assignees, plus the payloads the UI layer hands to the
//! store. Field names serialize as camelCase to match the seed file.

use serde::{Deserialize, Serialize};

/// Person a task can be attributed to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
}

impl Assignee {
    /// Avatar image, falling back to the profile picture
    pub fn avatar_src(&self) -> Option<&str> {
        self.avatar.as_deref().or(self.profile_pic_url.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Blue,
    Green,
    Orange,
    Purple,
    Red,
    #[default]
    Neutral,
}

impl TagColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagColor::Blue => "blue",
            TagColor::Green => "green",
            TagColor::Orange => "orange",
            TagColor::Purple => "purple",
            TagColor::Red => "red",
            TagColor::Neutral => "neutral",
        }
    }
}

/// Labeled, colored tag on a card
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskTag {
    pub label: String,
    #[serde(default)]
    pub color: TagColor,
}

/// Task (card) data structure
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub tags: Vec<TaskTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
    #[serde(default)]
    pub assignee: Option<Assignee>,
    #[serde(default)]
    pub show_assignee: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_menu: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
}

impl Task {
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            description: None,
            priority: None,
            tags: Vec::new(),
            ticket_id: None,
            assignee: None,
            show_assignee: false,
            show_menu: None,
            draggable: None,
        }
    }

    /// Ticket label, derived from the id when none was set
    pub fn ticket_display(&self) -> String {
        match &self.ticket_id {
            Some(ticket) => ticket.clone(),
            None => format!("T-{}", self.id.strip_prefix("task-").unwrap_or(&self.id)),
        }
    }

    /// Filter key: assignee id, or None when unassigned
    pub fn assignee_key(&self) -> Option<&str> {
        self.assignee.as_ref().map(|a| a.id.as_str())
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable.unwrap_or(true)
    }

    pub fn shows_menu(&self) -> bool {
        self.show_menu.unwrap_or(true)
    }

    pub fn assignee_badge(&self) -> AssigneeBadge<'_> {
        match (&self.assignee, self.show_assignee) {
            (_, false) => AssigneeBadge::Hidden,
            (None, true) => AssigneeBadge::Placeholder,
            (Some(assignee), true) => match assignee.avatar_src() {
                Some(src) => AssigneeBadge::Avatar { assignee, src },
                None => AssigneeBadge::Initials(assignee),
            },
        }
    }
}

/// Assignee slot of a card footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssigneeBadge<'a> {
    Hidden,
    /// Shown but nobody assigned yet
    Placeholder,
    Avatar { assignee: &'a Assignee, src: &'a str },
    Initials(&'a Assignee),
}

/// Column (lane) data structure
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_count: Option<usize>,
}

impl Column {
    /// Count shown in the header: override if present, else task count
    pub fn display_count(&self) -> usize {
        self.task_count.unwrap_or(self.tasks.len())
    }

    pub fn position_of(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }
}

// ========================
// Collaborator Payloads
// ========================

/// Cross-column move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDropPayload {
    pub task_id: String,
    pub from_column_id: String,
    pub to_column_id: String,
    pub to_index: usize,
}

/// Same-column reorder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReorderPayload {
    pub column_id: String,
    pub from_index: usize,
    pub to_index: usize,
}

/// Task creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    pub column_id: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_display_fallback() {
        let mut task = Task::new("task-42".to_string(), "Write docs".to_string());
        assert_eq!(task.ticket_display(), "T-42");

        task.id = "abc".to_string();
        assert_eq!(task.ticket_display(), "T-abc");

        task.ticket_id = Some("T-101".to_string());
        assert_eq!(task.ticket_display(), "T-101");
    }

    #[test]
    fn test_display_count_override() {
        let mut column = Column {
            id: "col-1".to_string(),
            title: "To Do".to_string(),
            description: None,
            tasks: vec![Task::new("task-1".to_string(), "A".to_string())],
            task_count: None,
        };
        assert_eq!(column.display_count(), 1);
        column.task_count = Some(12);
        assert_eq!(column.display_count(), 12);
    }

    #[test]
    fn test_task_deserializes_camel_case() {
        let json = r##"{
            "id": "task-1",
            "title": "Design",
            "priority": "high",
            "tags": [{ "label": "Design", "color": "purple" }],
            "ticketId": "T-101",
            "assignee": { "id": "user-1", "name": "John Doe", "initials": "JD", "color": "#C0D5FF" },
            "showAssignee": true
        }"##;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Some(Priority::High));
        assert_eq!(task.tags[0].color, TagColor::Purple);
        assert_eq!(task.ticket_id.as_deref(), Some("T-101"));
        assert_eq!(task.assignee_key(), Some("user-1"));
        assert!(task.show_assignee);
        assert!(task.is_draggable());
        assert!(task.shows_menu());
    }

    #[test]
    fn test_assignee_badge() {
        let mut task = Task::new("task-1".to_string(), "A".to_string());
        assert_eq!(task.assignee_badge(), AssigneeBadge::Hidden);

        task.show_assignee = true;
        assert_eq!(task.assignee_badge(), AssigneeBadge::Placeholder);

        let mut jane = Assignee {
            id: "user-2".to_string(),
            name: "Jane Smith".to_string(),
            initials: "JS".to_string(),
            color: "#FFD5C0".to_string(),
            avatar: None,
            profile_pic_url: None,
        };
        task.assignee = Some(jane.clone());
        assert!(matches!(task.assignee_badge(), AssigneeBadge::Initials(a) if a.initials == "JS"));

        jane.profile_pic_url = Some("/jane.png".to_string());
        task.assignee = Some(jane);
        assert!(matches!(task.assignee_badge(), AssigneeBadge::Avatar { src: "/jane.png", .. }));
    }

    #[test]
    fn test_filter_change_payload_uses_null_for_unassigned() {
        let keys: Vec<Option<String>> = serde_json::from_str(r#"["user-1", null]"#).unwrap();
        assert_eq!(keys, vec![Some("user-1".to_string()), None]);
    }
}

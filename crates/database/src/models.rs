//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Role of a stored chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// Kind of a generated-content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
}

/// Kind of a notification record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum NotificationKind {
    AnalysisComplete,
    GenerationComplete,
    TranscriptionComplete,
    System,
}

/// A user account, anchored to an external identity string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Auto-incrementing ID.
    pub id: i64,
    /// External identity string; unique and immutable after creation.
    pub open_id: String,
    /// Display name, if known.
    pub name: Option<String>,
    /// Email address, if known.
    pub email: Option<String>,
    /// How the user signed in (oauth provider, etc.), if known.
    pub login_method: Option<String>,
    /// Account role.
    pub role: Role,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
    /// Last successful sign-in timestamp.
    pub last_signed_in: String,
}

/// Fields supplied when recording a sign-in.
///
/// `None` fields leave the stored value untouched on update; `role` is
/// only overwritten when explicitly supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpsert {
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    pub role: Option<Role>,
}

/// A chat thread owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Conversation {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Thread title (no uniqueness constraint).
    pub title: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Touched whenever a message is appended.
    pub updated_at: String,
}

/// One turn in a conversation. Never updated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Message {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Owning conversation.
    pub conversation_id: i64,
    /// Who produced the turn.
    pub role: MessageRole,
    /// Text content.
    pub content: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// One generation result (text body or image URL). Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct GeneratedContent {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Text or image.
    pub kind: ContentKind,
    /// Prompt the content was generated from.
    pub prompt: String,
    /// Text body, or image URL (possibly empty).
    pub result: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// One audio transcription result. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Transcription {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Durable URL of the source audio.
    pub audio_url: String,
    /// Transcribed text.
    pub transcription: String,
    /// Detected or requested language code, if resolved.
    pub language: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

/// One data-analysis result. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Analysis {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Title supplied by the user.
    pub title: String,
    /// Durable URL of the uploaded source file, if any.
    pub data_url: Option<String>,
    /// Original file name, if a file was uploaded.
    pub file_name: Option<String>,
    /// Original content type, if a file was uploaded.
    pub file_type: Option<String>,
    /// Snapshot of the raw input data.
    pub raw_data: Option<String>,
    /// Natural-language analysis text. Always non-empty.
    pub analysis: String,
    /// Opaque serialized chart specification, if one was extracted.
    pub chart_data: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

/// Fields for a new analysis row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAnalysis {
    pub user_id: i64,
    pub title: String,
    pub data_url: Option<String>,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub raw_data: Option<String>,
    pub analysis: String,
    pub chart_data: Option<String>,
}

/// An informational record about a completed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// What completed.
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Read flag; transitions only unread to read.
    pub is_read: bool,
    /// Id of the record the notification refers to, if any.
    pub related_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: String,
}

/// Fields for a new notification row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub user_id: i64,
    pub kind: NotificationKind,
    pub title: String,
    pub content: String,
    pub related_id: Option<i64>,
}

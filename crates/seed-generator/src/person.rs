//! The mock person record.

use serde::Serialize;

/// Lowest generated age (inclusive).
pub const AGE_MIN: i32 = 0;

/// Upper bound of generated ages (exclusive).
pub const AGE_MAX_EXCLUSIVE: i32 = 100;

/// A synthetic person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    /// 1-based position in the run, present only when sequential ids are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl Person {
    /// Email address for the record at the given 1-based position.
    pub fn email_for_position(position: u64) -> String {
        format!("person{position}@example.com")
    }
}

//! Club records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A student club.
///
/// Clubs only come from seed data and are never modified while the
/// process runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Club {
    /// Unique club identifier.
    pub id: u64,
    /// Club name.
    pub name: String,
    /// Short description of the club.
    pub description: String,
    /// Current member count.
    pub members: u32,
    /// Name of the club president.
    pub president: String,
}

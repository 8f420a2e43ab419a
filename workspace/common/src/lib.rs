//! Common transport-layer types shared by the HTTP handlers and their tests,
//! plus the linked list used to reverse equipment listings.

mod linked_list;

pub use linked_list::{IntoIter, Iter, LinkedList};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain `{"message": ...}` body returned by every write endpoint and by
/// the missing-parent failures.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ===================== Users =====================

/// Request body for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

// ===================== Worksites =====================

/// Request body for creating a worksite under a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateWorksiteRequest {
    pub name: String,
}

/// Worksite row as listed for a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct WorksiteDto {
    pub id: i32,
    pub name: String,
}

// ===================== Equipment =====================

/// Request body for creating equipment on a worksite.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateEquipmentRequest {
    pub name: String,
    /// Stored and compared as text.
    pub working_hour: String,
}

/// Equipment row returned by the per-user lookup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EquipmentDto {
    pub id: i32,
    pub working_hour: String,
    pub user_id: i32,
}

/// Equipment row returned by the descending working-hour listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EquipmentHoursDto {
    pub id: i32,
    pub name: String,
    pub working_hour: String,
    pub worksite_id: i32,
}

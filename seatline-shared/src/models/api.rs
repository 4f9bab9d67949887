use serde::{Deserialize, Serialize};

use super::booking::{Ticket, User, UserSeat};
use super::seat::SeatSelection;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PurchaseTicketRequest {
    #[serde(default)]
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketResponse {
    pub ticket: Ticket,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionUsersResponse {
    pub user_seats: Vec<UserSeat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModifySeatRequest {
    #[serde(default)]
    pub new_seat: SeatSelection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifySeatResponse {
    pub updated_ticket: Ticket,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveUserResponse {
    pub success: bool,
}

/// Error body returned for every failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

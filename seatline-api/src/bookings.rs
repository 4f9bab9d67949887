use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post, put},
    Json, Router,
};
use seatline_shared::models::api::{
    ModifySeatRequest, ModifySeatResponse, PurchaseTicketRequest, RemoveUserResponse,
    SectionUsersResponse, TicketResponse,
};
use seatline_shared::{Masked, Snapshot, UserSeat};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/tickets", post(purchase_ticket))
        .route("/v1/tickets/{email}", get(get_receipt).delete(remove_user))
        .route("/v1/tickets/{email}/seat", put(modify_seat))
        .route("/v1/sections/{section}/users", get(get_section_users))
        .route("/v1/stat", get(get_stat))
}

async fn purchase_ticket(
    State(state): State<AppState>,
    payload: Result<Json<PurchaseTicketRequest>, JsonRejection>,
) -> Result<Json<TicketResponse>, AppError> {
    let Json(req) = payload?;

    let ticket = state.store.allocate(req.user)?;
    info!(email = %Masked(&ticket.user.email), seat = %ticket.seat, "Ticket purchased");

    Ok(Json(TicketResponse { ticket }))
}

async fn get_receipt(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<TicketResponse>, AppError> {
    let ticket = state.store.receipt(&email)?;
    Ok(Json(TicketResponse { ticket }))
}

async fn get_section_users(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<SectionUsersResponse>, AppError> {
    let tickets = state.store.section_occupants(&section)?;
    let user_seats = tickets.iter().map(UserSeat::from).collect();

    Ok(Json(SectionUsersResponse { user_seats }))
}

async fn remove_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<RemoveUserResponse>, AppError> {
    state.store.remove(&email)?;
    info!(email = %Masked(&email), "User removed");

    Ok(Json(RemoveUserResponse { success: true }))
}

async fn modify_seat(
    State(state): State<AppState>,
    Path(email): Path<String>,
    payload: Result<Json<ModifySeatRequest>, JsonRejection>,
) -> Result<Json<ModifySeatResponse>, AppError> {
    let Json(req) = payload?;

    let updated_ticket = state.store.reassign(&email, &req.new_seat)?;
    info!(email = %Masked(&email), seat = %updated_ticket.seat, "Seat modified");

    Ok(Json(ModifySeatResponse { updated_ticket }))
}

async fn get_stat(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.store.snapshot())
}

//! Reservation API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{
    MAX_GUESTS, MIN_GUESTS, Reservation as SharedReservation, ReservationCreate, Status,
    StatusUpdateRequest,
};

use crate::core::ServerState;
use crate::db::repository::ReservationRepository;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// POST /api/reservations
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<(StatusCode, Json<SharedReservation>)> {
    validate_reservation(&payload)?;

    let reservation = ReservationRepository::new(state.db.clone())
        .create(payload)
        .await?;
    tracing::info!(
        reservation_id = %reservation.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
        guests = reservation.guests,
        "reservation booked"
    );
    Ok((StatusCode::CREATED, Json(reservation.into())))
}

/// GET /api/admin/reservations
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedReservation>>> {
    let reservations = ReservationRepository::new(state.db.clone())
        .find_all()
        .await?;
    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

/// PATCH /api/admin/reservations/{id}/status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<SharedReservation>> {
    let next: Status = payload
        .status
        .parse()
        .map_err(|e: shared::models::TransitionError| AppError::validation(e.to_string()))?;

    let reservation = ReservationRepository::new(state.db.clone())
        .update_status(&id, next)
        .await?;
    tracing::info!(reservation_id = %id, status = %next, "reservation status updated");
    Ok(Json(reservation.into()))
}

fn validate_reservation(payload: &ReservationCreate) -> Result<(), AppError> {
    validate_required_text(&payload.customer_name, "customerName", MAX_NAME_LEN)?;
    validate_required_text(&payload.customer_phone, "customerPhone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.date, "date", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.time, "time", MAX_SHORT_TEXT_LEN)?;

    if payload.guests < MIN_GUESTS || payload.guests > MAX_GUESTS {
        return Err(AppError::validation(format!(
            "guests must be between {} and {}",
            MIN_GUESTS, MAX_GUESTS
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(guests: u32) -> ReservationCreate {
        ReservationCreate {
            customer_name: "Ravi".to_string(),
            customer_phone: "9876511111".to_string(),
            date: "2025-08-30".to_string(),
            time: "19:30".to_string(),
            guests,
        }
    }

    #[test]
    fn guest_bounds_are_enforced() {
        assert!(validate_reservation(&booking(0)).is_err());
        assert!(validate_reservation(&booking(21)).is_err());
        assert!(validate_reservation(&booking(1)).is_ok());
        assert!(validate_reservation(&booking(20)).is_ok());
    }

    #[test]
    fn missing_fields_are_rejected() {
        let mut b = booking(4);
        b.customer_name = "".to_string();
        assert!(validate_reservation(&b).is_err());

        let mut b = booking(4);
        b.time = "  ".to_string();
        assert!(validate_reservation(&b).is_err());
    }
}

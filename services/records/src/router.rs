use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use carelog_core::health::{healthz, readyz};
use carelog_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{login, physician_info, refresh_token, signup},
    patient::{
        create_patient, delete_patient, get_patient, list_patients, send_patient_info,
        update_patient,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/physician/info", get(physician_info))
        .route("/api/token/refresh", post(refresh_token))
        // Patients
        .route("/patients", get(list_patients).post(create_patient))
        .route(
            "/patients/{id}",
            get(get_patient)
                .patch(update_patient)
                .delete(delete_patient),
        )
        .route("/api/send-patient-info/{id}", post(send_patient_info))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}

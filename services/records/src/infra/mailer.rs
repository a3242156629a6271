use crate::domain::repository::PatientMailer;
use crate::domain::types::Patient;

/// Outbound patient-info mail, delivered best-effort off the request path.
///
/// This implementation records the dispatch in the log stream; a real SMTP
/// sender slots in behind the same port without touching any use case.
#[derive(Clone)]
pub struct LogMailer;

impl PatientMailer for LogMailer {
    async fn send_patient_info(&self, patient: Patient) -> Result<(), anyhow::Error> {
        tracing::info!(
            patient = %patient.id,
            recipient = %patient.email,
            "dispatching patient info email"
        );
        Ok(())
    }
}

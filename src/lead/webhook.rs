use gloo_net::http::Request;
use log::{error, info};

use crate::lead::record::LeadRecord;
use crate::lead::submission::SubmissionError;

/// Posts one lead to the webhook. Only an ok status counts as delivered.
pub async fn send_lead(endpoint: &str, lead: &LeadRecord) -> Result<(), SubmissionError> {
    let request = Request::post(endpoint)
        .json(lead)
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    match request.send().await {
        Ok(response) => {
            if response.ok() {
                info!("Lead delivered for {}", lead.phone_formatted);
                Ok(())
            } else {
                error!("Lead webhook failed with status: {}", response.status());
                Err(SubmissionError::Status(response.status()))
            }
        }
        Err(e) => {
            error!("Lead webhook request failed: {}", e);
            Err(SubmissionError::Network(e.to_string()))
        }
    }
}

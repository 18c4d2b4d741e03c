//! Appointment Endpoints
//!
//! The backend calls appointments "rdvs".

use super::{ApiClient, Endpoint};
use crate::models::{Appointment, AppointmentDraft};

impl ApiClient {
    /// `GET|POST {base}/rdvs`
    pub fn appointments(&self) -> Endpoint<Appointment, AppointmentDraft> {
        Endpoint::new(self.clone(), "rdvs", "appointments")
    }
}

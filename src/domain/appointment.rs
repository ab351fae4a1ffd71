use std::fmt;

use serde::Serialize;

use crate::domain::{Doctor, Identity, Patient, PersonId, Report};

/// A booking of one patient with one doctor at a given date and time.
///
/// Scheduling and cancelling only produce reports. The appointment carries no
/// status of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    number: u32,
    patient: PersonId,
    doctor: PersonId,
    date_time: String,
}

impl Appointment {
    /// Create an appointment between `patient` and `doctor`.
    #[must_use]
    pub fn new(
        appointment_number: u32,
        patient: &Patient,
        doctor: &Doctor,
        date_time: impl Into<String>,
    ) -> Self {
        Self::from_ids(appointment_number, patient.id(), doctor.id(), date_time)
    }

    /// Create an appointment from person handles.
    ///
    /// The handles are not checked here; the [`Hospital`](crate::Hospital)
    /// checks them when the appointment is scheduled.
    #[must_use]
    pub fn from_ids(
        appointment_number: u32,
        patient: PersonId,
        doctor: PersonId,
        date_time: impl Into<String>,
    ) -> Self {
        Self {
            number: appointment_number,
            patient,
            doctor,
            date_time: date_time.into(),
        }
    }

    /// The appointment number.
    #[must_use]
    pub const fn appointment_number(&self) -> u32 {
        self.number
    }

    /// Handle of the attending patient.
    #[must_use]
    pub const fn patient(&self) -> PersonId {
        self.patient
    }

    /// Handle of the doctor.
    #[must_use]
    pub const fn doctor(&self) -> PersonId {
        self.doctor
    }

    /// The current date and time of the appointment.
    #[must_use]
    pub fn date_time(&self) -> &str {
        &self.date_time
    }

    /// Report the booking.
    pub fn schedule(&self) -> Report {
        Report::Scheduled {
            appointment: self.number,
            patient: self.patient,
            doctor: self.doctor,
            date_time: self.date_time.clone(),
        }
        .emit()
    }

    /// Move the appointment to a new date and time.
    pub fn reschedule(&mut self, date_time: impl Into<String>) -> Report {
        self.date_time = date_time.into();
        Report::Rescheduled {
            appointment: self.number,
            date_time: self.date_time.clone(),
        }
        .emit()
    }

    /// Report a cancellation.
    ///
    /// The appointment stays wherever it is held.
    pub fn cancel(&self) -> Report {
        Report::Cancelled {
            appointment: self.number,
        }
        .emit()
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Appointment #{}", self.number)?;
        writeln!(f, "Patient: {}", self.patient)?;
        writeln!(f, "Doctor: {}", self.doctor)?;
        writeln!(f, "Date/Time: {}", self.date_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Person;

    fn appointment() -> Appointment {
        let patient = Patient::new(
            Person::try_new(1, "John Doe", "123 Elm St", "555-1234").unwrap(),
            1001,
            "01/01/1980",
        );
        let doctor = Doctor::new(
            Person::try_new(2, "Dr. Smith", "456 Oak St", "555-5678").unwrap(),
            2001,
            "Cardiology",
        );
        Appointment::new(4001, &patient, &doctor, "08/01/2024 10:00 AM")
    }

    #[test]
    fn schedule_reports_the_booking() {
        assert_eq!(
            appointment().schedule().to_string(),
            "Scheduled appointment #4001 for patient 1 with doctor 2 on 08/01/2024 10:00 AM"
        );
    }

    #[test]
    fn reschedule_replaces_the_date_time() {
        let mut appointment = appointment();

        let report = appointment.reschedule("09/01/2024 11:00 AM");

        assert_eq!(
            report.to_string(),
            "Rescheduled appointment #4001 to 09/01/2024 11:00 AM"
        );
        assert_eq!(appointment.date_time(), "09/01/2024 11:00 AM");
        assert_eq!(
            appointment.to_string(),
            "Appointment #4001\nPatient: 1\nDoctor: 2\nDate/Time: 09/01/2024 11:00 AM\n"
        );
    }

    #[test]
    fn cancel_leaves_the_appointment_unchanged() {
        let appointment = appointment();
        let before = appointment.clone();

        let report = appointment.cancel();

        assert_eq!(report.to_string(), "Cancelled appointment #4001");
        assert_eq!(appointment, before);
    }
}

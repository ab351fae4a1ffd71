use std::fmt;

use serde::Serialize;

use crate::domain::PersonId;

/// A human-readable record of an action taken on the hospital's records.
///
/// Actions return their report rather than printing it, so the caller
/// decides where it goes. Every report is also emitted as a `tracing` event
/// at `INFO` level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
#[must_use]
pub enum Report {
    /// A doctor recorded a diagnosis.
    Diagnosed {
        /// The diagnosing doctor.
        doctor: PersonId,
        /// The diagnosed patient.
        patient: PersonId,
        /// The recorded condition.
        condition: String,
    },
    /// A nurse checked on a patient.
    Checked {
        /// The nurse who made the check.
        nurse: PersonId,
        /// The checked patient.
        patient: PersonId,
    },
    /// A nurse reported a patient's status. The status is not stored.
    StatusUpdated {
        /// The reporting nurse.
        nurse: PersonId,
        /// The patient concerned.
        patient: PersonId,
        /// The reported status.
        status: String,
    },
    /// An appointment was booked.
    Scheduled {
        /// The appointment number.
        appointment: u32,
        /// The patient attending.
        patient: PersonId,
        /// The doctor seeing the patient.
        doctor: PersonId,
        /// When the appointment takes place.
        date_time: String,
    },
    /// An appointment was moved.
    Rescheduled {
        /// The appointment number.
        appointment: u32,
        /// The new date and time.
        date_time: String,
    },
    /// An appointment was called off.
    Cancelled {
        /// The appointment number.
        appointment: u32,
    },
}

impl Report {
    /// Logs this report at `INFO` level and returns it.
    pub fn emit(self) -> Self {
        tracing::info!("{self}");
        self
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Diagnosed {
                patient, condition, ..
            } => {
                write!(f, "Diagnosing patient {patient} with condition: {condition}")
            }
            Self::Checked { patient, .. } => write!(f, "Checking patient {patient}"),
            Self::StatusUpdated {
                patient, status, ..
            } => {
                write!(f, "Updating patient {patient} status to: {status}")
            }
            Self::Scheduled {
                appointment,
                patient,
                doctor,
                date_time,
            } => write!(
                f,
                "Scheduled appointment #{appointment} for patient {patient} with doctor {doctor} \
                 on {date_time}"
            ),
            Self::Rescheduled {
                appointment,
                date_time,
            } => write!(f, "Rescheduled appointment #{appointment} to {date_time}"),
            Self::Cancelled { appointment } => write!(f, "Cancelled appointment #{appointment}"),
        }
    }
}

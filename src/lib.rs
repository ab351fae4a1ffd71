//! In-memory hospital records
//!
//! Patients, doctors and nurses are registered with a [`Hospital`], which owns
//! them and hands out integer handles. Appointments and prescriptions refer to
//! people by handle rather than by pointer.

pub mod domain;
pub use domain::{
    Appointment, Config, Doctor, EmptyNameError, Hospital, HospitalError, Identity, Name, Nurse,
    Patient, Person, PersonId, Prescription, Reference, Report,
};

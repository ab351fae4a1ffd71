//! Domain models for hospital records.
//!
//! This module contains the people (patients, doctors, nurses), the records
//! that link them (appointments, prescriptions), and the [`Hospital`] store
//! that owns them all.

/// Integer identifiers for people.
pub mod id;
pub use id::{ParseIdError, PersonId};

/// Base identity record shared by every role.
pub mod person;
pub use person::{EmptyNameError, Identity, Name, Person};

mod patient;
pub use patient::{MedicalHistory, Patient};

mod doctor;
pub use doctor::Doctor;

mod nurse;
pub use nurse::Nurse;

mod appointment;
pub use appointment::Appointment;

mod prescription;
pub use prescription::Prescription;

mod report;
pub use report::Report;

mod config;
pub use config::Config;

/// The arena store owning every registered entity.
pub mod hospital;
pub use hospital::{Hospital, HospitalError, Reference};

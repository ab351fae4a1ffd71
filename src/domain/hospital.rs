//! In-memory store for every entity the hospital knows about.
//!
//! The [`Hospital`] owns all patients, staff, appointments and prescriptions.
//! Everything else refers to people by [`PersonId`] and to appointments and
//! prescriptions by number, so every mutation of shared state goes through
//! the store.

use std::{collections::HashMap, fmt};

use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use crate::domain::{
    Appointment, Config, Doctor, Identity, Nurse, Patient, PersonId, Prescription, Report,
};

/// An in-memory hospital.
///
/// Entities are stored in insertion order:
/// - People: one `Vec` per role, plus a `HashMap<PersonId, usize>` index per
///   role pointing at the most recently registered entry with that ID
/// - Appointments and prescriptions: a `Vec` each, indexed by number
///
/// Nothing is ever removed.
#[derive(Debug, Default, Serialize)]
pub struct Hospital {
    #[serde(skip)]
    config: Config,

    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    nurses: Vec<Nurse>,
    appointments: Vec<Appointment>,
    prescriptions: Vec<Prescription>,

    #[serde(skip)]
    patient_ids: HashMap<PersonId, usize>,

    #[serde(skip)]
    doctor_ids: HashMap<PersonId, usize>,

    #[serde(skip)]
    nurse_ids: HashMap<PersonId, usize>,

    #[serde(skip)]
    appointment_numbers: HashMap<u32, usize>,

    #[serde(skip)]
    prescription_numbers: HashMap<u32, usize>,
}

/// A handle that could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    /// A patient handle.
    Patient(PersonId),
    /// A doctor handle.
    Doctor(PersonId),
    /// A nurse handle.
    Nurse(PersonId),
    /// An appointment number.
    Appointment(u32),
    /// A prescription number.
    Prescription(u32),
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Patient(id) => write!(f, "patient {id}"),
            Self::Doctor(id) => write!(f, "doctor {id}"),
            Self::Nurse(id) => write!(f, "nurse {id}"),
            Self::Appointment(number) => write!(f, "appointment #{number}"),
            Self::Prescription(number) => write!(f, "prescription #{number}"),
        }
    }
}

/// Errors that can occur when updating the hospital's records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HospitalError {
    /// An appointment with this number has already been scheduled.
    #[error("appointment #{0} has already been scheduled")]
    DuplicateAppointment(u32),
    /// A prescription with this number has already been issued.
    #[error("prescription #{0} has already been issued")]
    DuplicatePrescription(u32),
    /// A handle did not refer to a registered entity of the expected kind.
    #[error("invalid reference: no {0} is registered")]
    InvalidReference(Reference),
}

impl Hospital {
    /// Creates an empty hospital with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The hospital's configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Registers a patient.
    ///
    /// Registering a second patient with the same ID appends it too; lookups
    /// by that ID then resolve to the newer entry.
    #[instrument(skip_all, fields(id = %patient.id()))]
    pub fn add_patient(&mut self, patient: Patient) -> PersonId {
        let id = patient.id();
        register(&mut self.patient_ids, id, self.patients.len());
        self.patients.push(patient);
        tracing::debug!("Registered patient");
        id
    }

    /// Registers a doctor.
    ///
    /// Duplicate IDs are appended, as for [`Hospital::add_patient`].
    #[instrument(skip_all, fields(id = %doctor.id()))]
    pub fn add_doctor(&mut self, doctor: Doctor) -> PersonId {
        let id = doctor.id();
        register(&mut self.doctor_ids, id, self.doctors.len());
        self.doctors.push(doctor);
        tracing::debug!("Registered doctor");
        id
    }

    /// Registers a nurse.
    ///
    /// Duplicate IDs are appended, as for [`Hospital::add_patient`].
    #[instrument(skip_all, fields(id = %nurse.id()))]
    pub fn add_nurse(&mut self, nurse: Nurse) -> PersonId {
        let id = nurse.id();
        register(&mut self.nurse_ids, id, self.nurses.len());
        self.nurses.push(nurse);
        tracing::debug!("Registered nurse");
        id
    }

    /// Retrieves a patient by ID.
    #[must_use]
    pub fn patient(&self, id: PersonId) -> Option<&Patient> {
        self.patient_index(id).ok().map(|i| &self.patients[i])
    }

    /// Retrieves a doctor by ID.
    #[must_use]
    pub fn doctor(&self, id: PersonId) -> Option<&Doctor> {
        self.doctor_index(id).ok().map(|i| &self.doctors[i])
    }

    /// Retrieves a nurse by ID.
    #[must_use]
    pub fn nurse(&self, id: PersonId) -> Option<&Nurse> {
        self.nurse_index(id).ok().map(|i| &self.nurses[i])
    }

    /// Retrieves an appointment by number.
    #[must_use]
    pub fn appointment(&self, number: u32) -> Option<&Appointment> {
        self.appointment_numbers
            .get(&number)
            .map(|&i| &self.appointments[i])
    }

    /// Retrieves a prescription by number.
    #[must_use]
    pub fn prescription(&self, number: u32) -> Option<&Prescription> {
        self.prescription_numbers
            .get(&number)
            .map(|&i| &self.prescriptions[i])
    }

    /// Registered patients, in registration order.
    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter()
    }

    /// Registered doctors, in registration order.
    pub fn doctors(&self) -> impl Iterator<Item = &Doctor> {
        self.doctors.iter()
    }

    /// Registered nurses, in registration order.
    pub fn nurses(&self) -> impl Iterator<Item = &Nurse> {
        self.nurses.iter()
    }

    /// Scheduled appointments, in scheduling order. Cancelled appointments
    /// are still listed.
    pub fn appointments(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }

    /// Issued prescriptions, in issue order.
    pub fn prescriptions(&self) -> impl Iterator<Item = &Prescription> {
        self.prescriptions.iter()
    }

    /// Adds an appointment to the hospital's list and reports the booking.
    ///
    /// The appointment is stored before the report is produced.
    ///
    /// # Errors
    ///
    /// - [`HospitalError::InvalidReference`] if the patient or doctor is not
    ///   registered (unless the configuration allows unregistered references)
    /// - [`HospitalError::DuplicateAppointment`] if the number is already in
    ///   use
    #[instrument(skip_all, fields(number = appointment.appointment_number()))]
    pub fn schedule_appointment(
        &mut self,
        appointment: Appointment,
    ) -> Result<Report, HospitalError> {
        self.check_participants(appointment.patient(), appointment.doctor())?;

        let number = appointment.appointment_number();
        if self.appointment_numbers.contains_key(&number) {
            return Err(HospitalError::DuplicateAppointment(number));
        }

        self.appointment_numbers
            .insert(number, self.appointments.len());
        self.appointments.push(appointment);

        Ok(self.appointments[self.appointments.len() - 1].schedule())
    }

    /// Moves a scheduled appointment to a new date and time.
    ///
    /// # Errors
    ///
    /// Returns [`HospitalError::InvalidReference`] if no appointment with this
    /// number has been scheduled.
    #[instrument(skip(self, date_time))]
    pub fn reschedule_appointment(
        &mut self,
        number: u32,
        date_time: impl Into<String>,
    ) -> Result<Report, HospitalError> {
        let index = self.scheduled_index(number)?;
        Ok(self.appointments[index].reschedule(date_time))
    }

    /// Reports the cancellation of a scheduled appointment.
    ///
    /// The appointment stays in the hospital's list.
    ///
    /// # Errors
    ///
    /// Returns [`HospitalError::InvalidReference`] if no appointment with this
    /// number has been scheduled.
    #[instrument(skip(self))]
    pub fn cancel_appointment(&self, number: u32) -> Result<Report, HospitalError> {
        let index = self.scheduled_index(number)?;
        Ok(self.appointments[index].cancel())
    }

    /// Files a prescription with the hospital.
    ///
    /// # Errors
    ///
    /// - [`HospitalError::InvalidReference`] if the patient or doctor is not
    ///   registered (unless the configuration allows unregistered references)
    /// - [`HospitalError::DuplicatePrescription`] if the number is already in
    ///   use
    #[instrument(skip_all, fields(number = prescription.prescription_number()))]
    pub fn issue_prescription(&mut self, prescription: Prescription) -> Result<(), HospitalError> {
        self.check_participants(prescription.patient(), prescription.doctor())?;

        let number = prescription.prescription_number();
        if self.prescription_numbers.contains_key(&number) {
            return Err(HospitalError::DuplicatePrescription(number));
        }

        self.prescription_numbers
            .insert(number, self.prescriptions.len());
        self.prescriptions.push(prescription);
        tracing::debug!("Issued prescription");
        Ok(())
    }

    /// Adds a medicine to an issued prescription.
    ///
    /// # Errors
    ///
    /// Returns [`HospitalError::InvalidReference`] if no prescription with
    /// this number has been issued.
    #[instrument(skip(self, medicine))]
    pub fn add_medicine(
        &mut self,
        number: u32,
        medicine: impl Into<String>,
    ) -> Result<(), HospitalError> {
        let index = self
            .prescription_numbers
            .get(&number)
            .copied()
            .ok_or(HospitalError::InvalidReference(Reference::Prescription(
                number,
            )))?;
        self.prescriptions[index].add_medicine(medicine);
        Ok(())
    }

    /// Places a registered patient under a registered doctor's care.
    ///
    /// # Errors
    ///
    /// Returns [`HospitalError::InvalidReference`] if either handle is not
    /// registered in the expected role.
    #[instrument(skip(self))]
    pub fn assign_patient(
        &mut self,
        doctor: PersonId,
        patient: PersonId,
    ) -> Result<(), HospitalError> {
        let doctor = self.doctor_index(doctor)?;
        let patient = self.patient_index(patient)?;
        self.doctors[doctor].add_patient(&self.patients[patient]);
        Ok(())
    }

    /// Records a doctor's diagnosis on a patient.
    ///
    /// # Errors
    ///
    /// Returns [`HospitalError::InvalidReference`] if either handle is not
    /// registered in the expected role.
    #[instrument(skip(self, condition))]
    pub fn diagnose_patient(
        &mut self,
        doctor: PersonId,
        patient: PersonId,
        condition: impl Into<String>,
    ) -> Result<Report, HospitalError> {
        let doctor = self.doctor_index(doctor)?;
        let patient = self.patient_index(patient)?;
        Ok(self.doctors[doctor].diagnose_patient(&mut self.patients[patient], condition))
    }

    /// Appends a medication to a registered patient's list.
    ///
    /// # Errors
    ///
    /// Returns [`HospitalError::InvalidReference`] if the patient is not
    /// registered.
    #[instrument(skip(self, medication))]
    pub fn prescribe(
        &mut self,
        patient: PersonId,
        medication: impl Into<String>,
    ) -> Result<(), HospitalError> {
        let patient = self.patient_index(patient)?;
        self.patients[patient].add_prescription(medication);
        Ok(())
    }

    /// Has a nurse check on a patient.
    ///
    /// # Errors
    ///
    /// Returns [`HospitalError::InvalidReference`] if either handle is not
    /// registered in the expected role.
    #[instrument(skip(self))]
    pub fn check_patient(
        &self,
        nurse: PersonId,
        patient: PersonId,
    ) -> Result<Report, HospitalError> {
        let nurse = self.nurse_index(nurse)?;
        let patient = self.patient_index(patient)?;
        Ok(self.nurses[nurse].check_patient(&self.patients[patient]))
    }

    /// Has a nurse report a patient's status.
    ///
    /// # Errors
    ///
    /// Returns [`HospitalError::InvalidReference`] if either handle is not
    /// registered in the expected role.
    #[instrument(skip(self, status))]
    pub fn update_patient_status(
        &self,
        nurse: PersonId,
        patient: PersonId,
        status: impl Into<String>,
    ) -> Result<Report, HospitalError> {
        let nurse = self.nurse_index(nurse)?;
        let patient = self.patient_index(patient)?;
        Ok(self.nurses[nurse].update_patient_status(&self.patients[patient], status))
    }

    fn check_participants(
        &self,
        patient: PersonId,
        doctor: PersonId,
    ) -> Result<(), HospitalError> {
        if self.config.allow_unregistered {
            return Ok(());
        }
        self.patient_index(patient)?;
        self.doctor_index(doctor)?;
        Ok(())
    }

    fn patient_index(&self, id: PersonId) -> Result<usize, HospitalError> {
        lookup(&self.patient_ids, id, Reference::Patient)
    }

    fn doctor_index(&self, id: PersonId) -> Result<usize, HospitalError> {
        lookup(&self.doctor_ids, id, Reference::Doctor)
    }

    fn nurse_index(&self, id: PersonId) -> Result<usize, HospitalError> {
        lookup(&self.nurse_ids, id, Reference::Nurse)
    }

    fn scheduled_index(&self, number: u32) -> Result<usize, HospitalError> {
        self.appointment_numbers
            .get(&number)
            .copied()
            .ok_or(HospitalError::InvalidReference(Reference::Appointment(
                number,
            )))
    }
}

fn register(index: &mut HashMap<PersonId, usize>, id: PersonId, position: usize) {
    if index.insert(id, position).is_some() {
        tracing::debug!("ID {id} registered again, lookups now resolve to the newer entry");
    }
}

fn lookup(
    index: &HashMap<PersonId, usize>,
    id: PersonId,
    reference: fn(PersonId) -> Reference,
) -> Result<usize, HospitalError> {
    index
        .get(&id)
        .copied()
        .ok_or_else(|| HospitalError::InvalidReference(reference(id)))
}

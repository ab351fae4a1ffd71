use std::fmt;

use serde::Serialize;

use crate::domain::{Identity, Person};

/// A patient of the hospital.
///
/// The medication list is append-only and keeps the order in which
/// medications were prescribed. The medical condition holds only the most
/// recent diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    #[serde(flatten)]
    person: Person,
    number: u32,
    date_of_birth: String,
    medical_condition: String,
    medications: Vec<String>,
}

impl Patient {
    /// Create a patient with no diagnosis and no medications.
    #[must_use]
    pub fn new(person: Person, patient_number: u32, date_of_birth: impl Into<String>) -> Self {
        Self {
            person,
            number: patient_number,
            date_of_birth: date_of_birth.into(),
            medical_condition: String::new(),
            medications: Vec::new(),
        }
    }

    /// The patient's hospital number.
    #[must_use]
    pub const fn patient_number(&self) -> u32 {
        self.number
    }

    /// Date of birth, as recorded.
    #[must_use]
    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    /// The current medical condition. Empty until a diagnosis is recorded.
    #[must_use]
    pub fn medical_condition(&self) -> &str {
        &self.medical_condition
    }

    /// Prescribed medications, in the order they were added.
    #[must_use]
    pub fn medications(&self) -> &[String] {
        &self.medications
    }

    /// Append a medication to the patient's list.
    ///
    /// Duplicates and empty names are accepted as-is.
    pub fn add_prescription(&mut self, medication: impl Into<String>) {
        self.medications.push(medication.into());
    }

    /// Replace the current medical condition.
    ///
    /// No history of earlier conditions is kept.
    pub fn set_medical_condition(&mut self, condition: impl Into<String>) {
        self.medical_condition = condition.into();
    }

    /// A rendering of the identity record followed by the medical record.
    #[must_use]
    pub const fn medical_history(&self) -> MedicalHistory<'_> {
        MedicalHistory { patient: self }
    }
}

/// Display adapter for a patient's medical history.
///
/// Returned by [`Patient::medical_history`].
#[derive(Debug, Clone, Copy)]
pub struct MedicalHistory<'a> {
    patient: &'a Patient,
}

impl fmt::Display for MedicalHistory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let patient = self.patient;
        write!(f, "{}", patient.person)?;
        writeln!(f, "Patient Number: {}", patient.number)?;
        writeln!(f, "Date of Birth: {}", patient.date_of_birth)?;
        writeln!(f, "Medical Condition: {}", patient.medical_condition)?;
        write!(f, "Prescribed Medications: ")?;
        for medication in &patient.medications {
            write!(f, "{medication} ")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.medical_history(), f)
    }
}

impl Identity for Patient {
    fn person(&self) -> &Person {
        &self.person
    }
}

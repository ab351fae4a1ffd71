use std::fmt;

use serde::Serialize;

use crate::domain::{Identity, Patient, Person, PersonId, Report};

/// A doctor, with the list of patients under their care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
    #[serde(flatten)]
    person: Person,
    number: u32,
    specialty: String,
    patients_under_care: Vec<PersonId>,
}

impl Doctor {
    /// Create a doctor with an empty care list.
    #[must_use]
    pub fn new(person: Person, doctor_number: u32, specialty: impl Into<String>) -> Self {
        Self {
            person,
            number: doctor_number,
            specialty: specialty.into(),
            patients_under_care: Vec::new(),
        }
    }

    /// The doctor's staff number.
    #[must_use]
    pub const fn doctor_number(&self) -> u32 {
        self.number
    }

    /// The doctor's medical specialty.
    #[must_use]
    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    /// Handles of the patients under this doctor's care, in the order they
    /// were added. May contain duplicates.
    #[must_use]
    pub fn patients_under_care(&self) -> &[PersonId] {
        &self.patients_under_care
    }

    /// Add a patient to the care list.
    ///
    /// No membership check is made, so adding the same patient twice lists
    /// them twice.
    pub fn add_patient(&mut self, patient: &Patient) {
        self.patients_under_care.push(patient.id());
    }

    /// Record a diagnosis against a patient.
    ///
    /// The patient does not need to be on this doctor's care list.
    pub fn diagnose_patient(&self, patient: &mut Patient, condition: impl Into<String>) -> Report {
        let condition = condition.into();
        let report = Report::Diagnosed {
            doctor: self.id(),
            patient: patient.id(),
            condition: condition.clone(),
        }
        .emit();
        patient.set_medical_condition(condition);
        report
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.person)?;
        writeln!(f, "Doctor Number: {}", self.number)?;
        writeln!(f, "Specialty: {}", self.specialty)
    }
}

impl Identity for Doctor {
    fn person(&self) -> &Person {
        &self.person
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dr_smith() -> Doctor {
        let person = Person::try_new(2, "Dr. Smith", "456 Oak St", "555-5678").unwrap();
        Doctor::new(person, 2001, "Cardiology")
    }

    fn john_doe() -> Patient {
        let person = Person::try_new(1, "John Doe", "123 Elm St", "555-1234").unwrap();
        Patient::new(person, 1001, "01/01/1980")
    }

    #[test]
    fn diagnosis_sets_the_patients_condition() {
        let doctor = dr_smith();
        let mut diagnosed = john_doe();
        let mut direct = john_doe();

        let report = doctor.diagnose_patient(&mut diagnosed, "Flu");
        direct.set_medical_condition("Flu");

        assert_eq!(diagnosed, direct);
        assert_eq!(
            report.to_string(),
            "Diagnosing patient 1 with condition: Flu"
        );
    }

    #[test]
    fn diagnosis_does_not_require_care_membership() {
        let doctor = dr_smith();
        let mut patient = john_doe();

        let _ = doctor.diagnose_patient(&mut patient, "Flu");

        assert!(doctor.patients_under_care().is_empty());
        assert_eq!(patient.medical_condition(), "Flu");
    }

    #[test]
    fn care_list_allows_duplicates() {
        let mut doctor = dr_smith();
        let patient = john_doe();

        doctor.add_patient(&patient);
        doctor.add_patient(&patient);

        assert_eq!(
            doctor.patients_under_care(),
            [PersonId::new(1), PersonId::new(1)]
        );
    }

    #[test]
    fn details_extend_the_identity_record() {
        assert_eq!(
            dr_smith().details(),
            "ID: 2\nName: Dr. Smith\nAddress: 456 Oak St\nPhone: 555-5678\nDoctor Number: \
             2001\nSpecialty: Cardiology\n"
        );
    }
}

use std::fmt;

use serde::Serialize;

use crate::domain::{Identity, Patient, Person, PersonId, Report};

/// A nurse attached to a hospital department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nurse {
    #[serde(flatten)]
    person: Person,
    number: u32,
    department: String,
    // No operation populates this yet.
    patients_under_care: Vec<PersonId>,
}

impl Nurse {
    /// Create a nurse.
    #[must_use]
    pub fn new(person: Person, nurse_number: u32, department: impl Into<String>) -> Self {
        Self {
            person,
            number: nurse_number,
            department: department.into(),
            patients_under_care: Vec::new(),
        }
    }

    /// The nurse's staff number.
    #[must_use]
    pub const fn nurse_number(&self) -> u32 {
        self.number
    }

    /// The department the nurse works in.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Patients under this nurse's care. Always empty.
    #[must_use]
    pub fn patients_under_care(&self) -> &[PersonId] {
        &self.patients_under_care
    }

    /// Report a check on a patient. The patient is not modified.
    pub fn check_patient(&self, patient: &Patient) -> Report {
        Report::Checked {
            nurse: self.id(),
            patient: patient.id(),
        }
        .emit()
    }

    /// Report a patient's status. The status is not stored on the patient.
    pub fn update_patient_status(&self, patient: &Patient, status: impl Into<String>) -> Report {
        Report::StatusUpdated {
            nurse: self.id(),
            patient: patient.id(),
            status: status.into(),
        }
        .emit()
    }
}

impl fmt::Display for Nurse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.person)?;
        writeln!(f, "Nurse Number: {}", self.number)?;
        writeln!(f, "Department: {}", self.department)
    }
}

impl Identity for Nurse {
    fn person(&self) -> &Person {
        &self.person
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nurse_kelly() -> Nurse {
        let person = Person::try_new(3, "Nurse Kelly", "789 Pine St", "555-8765").unwrap();
        Nurse::new(person, 3001, "ICU")
    }

    fn john_doe() -> Patient {
        let person = Person::try_new(1, "John Doe", "123 Elm St", "555-1234").unwrap();
        Patient::new(person, 1001, "01/01/1980")
    }

    #[test]
    fn care_list_is_present_and_empty() {
        assert!(nurse_kelly().patients_under_care().is_empty());
    }

    #[test]
    fn nurse_actions_report_without_touching_the_patient() {
        let nurse = nurse_kelly();
        let patient = john_doe();
        let before = patient.clone();

        let checked = nurse.check_patient(&patient);
        let updated = nurse.update_patient_status(&patient, "Stable");

        assert_eq!(checked.to_string(), "Checking patient 1");
        assert_eq!(updated.to_string(), "Updating patient 1 status to: Stable");
        assert_eq!(patient, before);
    }

    #[test]
    fn details_extend_the_identity_record() {
        assert!(
            nurse_kelly()
                .details()
                .ends_with("Phone: 555-8765\nNurse Number: 3001\nDepartment: ICU\n")
        );
    }
}

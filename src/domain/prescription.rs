use std::fmt;

use serde::Serialize;

use crate::domain::{Doctor, Identity, Patient, PersonId};

/// A doctor's prescription for a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prescription {
    number: u32,
    patient: PersonId,
    doctor: PersonId,
    instructions: String,
    medications: Vec<String>,
}

impl Prescription {
    /// Create a prescription with no medicines.
    #[must_use]
    pub fn new(
        prescription_number: u32,
        patient: &Patient,
        doctor: &Doctor,
        instructions: impl Into<String>,
    ) -> Self {
        Self::from_ids(prescription_number, patient.id(), doctor.id(), instructions)
    }

    /// Create a prescription from person handles.
    #[must_use]
    pub fn from_ids(
        prescription_number: u32,
        patient: PersonId,
        doctor: PersonId,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            number: prescription_number,
            patient,
            doctor,
            instructions: instructions.into(),
            medications: Vec::new(),
        }
    }

    /// The prescription number.
    #[must_use]
    pub const fn prescription_number(&self) -> u32 {
        self.number
    }

    /// Handle of the patient.
    #[must_use]
    pub const fn patient(&self) -> PersonId {
        self.patient
    }

    /// Handle of the prescribing doctor.
    #[must_use]
    pub const fn doctor(&self) -> PersonId {
        self.doctor
    }

    /// Dosage instructions.
    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Medicines on the prescription, in the order they were added.
    #[must_use]
    pub fn medications(&self) -> &[String] {
        &self.medications
    }

    /// Append a medicine by name.
    pub fn add_medicine(&mut self, medicine: impl Into<String>) {
        self.medications.push(medicine.into());
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Prescription #{}", self.number)?;
        writeln!(f, "Patient: {}", self.patient)?;
        writeln!(f, "Doctor: {}", self.doctor)?;
        writeln!(f, "Instructions: {}", self.instructions)?;
        write!(f, "Medications: ")?;
        for medicine in &self.medications {
            write!(f, "{medicine} ")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_list_medicines_in_order() {
        let mut prescription =
            Prescription::from_ids(5001, PersonId::new(1), PersonId::new(2), "Take one pill daily");
        prescription.add_medicine("Aspirin");
        prescription.add_medicine("Aspirin");
        prescription.add_medicine("Vitamin C");

        assert_eq!(prescription.medications(), ["Aspirin", "Aspirin", "Vitamin C"]);
        assert_eq!(
            prescription.to_string(),
            "Prescription #5001\nPatient: 1\nDoctor: 2\nInstructions: Take one pill \
             daily\nMedications: Aspirin Aspirin Vitamin C \n"
        );
    }

    #[test]
    fn empty_prescription_renders_blank_medication_line() {
        let prescription = Prescription::from_ids(5002, PersonId::new(1), PersonId::new(2), "");
        assert!(prescription.to_string().ends_with("Medications: \n"));
    }
}

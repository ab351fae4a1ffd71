use anyhow::Context;
use clap::Parser;
use hospital::{
    Appointment, Config, Doctor, Hospital, Identity, Nurse, Patient, Person, PersonId,
    Prescription, Report,
};
use serde_json::json;
use tracing::instrument;

use super::terminal;

#[derive(Debug, Default, Parser)]
#[command(about = "Run the demonstration scenario")]
pub struct Demo {
    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,

    /// Show only this patient's medical history
    #[arg(long, value_name = "ID")]
    patient: Option<PersonId>,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

const PATIENT: PersonId = PersonId::new(1);
const DOCTOR: PersonId = PersonId::new(2);
const NURSE: PersonId = PersonId::new(3);
const APPOINTMENT: u32 = 4001;
const PRESCRIPTION: u32 = 5001;

impl Demo {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, config: Config) -> anyhow::Result<()> {
        let (hospital, reports) = scenario(config)?;

        if let Some(id) = self.patient {
            let patient = hospital
                .patient(id)
                .with_context(|| format!("No patient with ID {id} in the scenario"))?;
            match self.output {
                OutputFormat::Pretty => print!("{}", patient.medical_history()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(patient)?),
            }
            return Ok(());
        }

        match self.output {
            OutputFormat::Pretty => output_pretty(&hospital, &reports),
            OutputFormat::Json => output_json(&hospital, &reports)?,
        }

        Ok(())
    }
}

/// Builds the demonstration hospital, returning it along with every report
/// produced on the way, in order.
fn scenario(config: Config) -> anyhow::Result<(Hospital, Vec<Report>)> {
    let mut hospital = Hospital::new(config);
    let mut reports = Vec::new();

    let patient = Patient::new(
        Person::try_new(PATIENT.get(), "John Doe", "123 Elm St", "555-1234")?,
        1001,
        "01/01/1980",
    );
    let doctor = Doctor::new(
        Person::try_new(DOCTOR.get(), "Dr. Smith", "456 Oak St", "555-5678")?,
        2001,
        "Cardiology",
    );
    let nurse = Nurse::new(
        Person::try_new(NURSE.get(), "Nurse Kelly", "789 Pine St", "555-8765")?,
        3001,
        "ICU",
    );

    let appointment = Appointment::new(APPOINTMENT, &patient, &doctor, "08/01/2024 10:00 AM");
    let mut prescription = Prescription::new(PRESCRIPTION, &patient, &doctor, "Take one pill daily");
    prescription.add_medicine("Aspirin");

    hospital.add_patient(patient);
    hospital.add_doctor(doctor);
    hospital.add_nurse(nurse);

    hospital.prescribe(PATIENT, "Aspirin")?;
    hospital.assign_patient(DOCTOR, PATIENT)?;
    reports.push(hospital.diagnose_patient(DOCTOR, PATIENT, "Flu")?);
    reports.push(hospital.check_patient(NURSE, PATIENT)?);
    reports.push(hospital.update_patient_status(NURSE, PATIENT, "Stable")?);

    reports.push(hospital.schedule_appointment(appointment)?);
    reports.push(hospital.reschedule_appointment(APPOINTMENT, "09/01/2024 11:00 AM")?);
    hospital.issue_prescription(prescription)?;

    Ok((hospital, reports))
}

fn output_pretty(hospital: &Hospital, reports: &[Report]) {
    println!("# {}\n", hospital.config().name());

    println!("{}", terminal::heading("Actions", reports.len()));
    for report in reports {
        println!("  • {}", terminal::report(report));
    }

    println!("\n{}", terminal::heading("Patients", hospital.patients().count()));
    for patient in hospital.patients() {
        print!("{}", patient.medical_history());
    }

    println!(
        "\n{}",
        terminal::heading("Staff", hospital.doctors().count() + hospital.nurses().count())
    );
    for doctor in hospital.doctors() {
        print!("{}", doctor.details());
    }
    for nurse in hospital.nurses() {
        print!("{}", nurse.details());
    }

    println!(
        "\n{}",
        terminal::heading("Appointments", hospital.appointments().count())
    );
    for appointment in hospital.appointments() {
        print!("{appointment}");
    }

    println!(
        "\n{}",
        terminal::heading("Prescriptions", hospital.prescriptions().count())
    );
    for prescription in hospital.prescriptions() {
        print!("{prescription}");
    }
}

fn output_json(hospital: &Hospital, reports: &[Report]) -> anyhow::Result<()> {
    let output = json!({
        "name": hospital.config().name(),
        "reports": reports,
        "records": hospital,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_diagnoses_and_reschedules() {
        let (hospital, reports) = scenario(Config::default()).unwrap();

        let patient = hospital.patient(PATIENT).unwrap();
        assert_eq!(patient.medical_condition(), "Flu");
        assert_eq!(patient.medications(), ["Aspirin"]);

        let appointment = hospital.appointment(APPOINTMENT).unwrap();
        assert_eq!(appointment.date_time(), "09/01/2024 11:00 AM");

        let lines: Vec<String> = reports.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            [
                "Diagnosing patient 1 with condition: Flu",
                "Checking patient 1",
                "Updating patient 1 status to: Stable",
                "Scheduled appointment #4001 for patient 1 with doctor 2 on 08/01/2024 10:00 AM",
                "Rescheduled appointment #4001 to 09/01/2024 11:00 AM",
            ]
        );
    }

    #[test]
    fn scenario_serialises_to_json() {
        let (hospital, reports) = scenario(Config::default()).unwrap();

        let value = json!({ "reports": reports, "records": hospital });

        assert_eq!(value["records"]["patients"][0]["name"], "John Doe");
        assert_eq!(value["records"]["prescriptions"][0]["medications"][0], "Aspirin");
        assert_eq!(value["reports"][0]["action"], "diagnosed");
    }

    #[test]
    fn patient_filter_takes_a_person_id() {
        let demo = Demo::try_parse_from(["demo", "--patient", " 1 "]).unwrap();
        assert_eq!(demo.patient, Some(PATIENT));

        let error = Demo::try_parse_from(["demo", "--patient", "abc"]).unwrap_err();
        assert!(error.to_string().contains("Invalid person ID 'abc'"));
    }

    #[test]
    fn unknown_patient_is_an_error() {
        let demo = Demo::try_parse_from(["demo", "--patient", "99"]).unwrap();

        let error = demo.run(Config::default()).unwrap_err();

        assert_eq!(error.to_string(), "No patient with ID 99 in the scenario");
    }
}

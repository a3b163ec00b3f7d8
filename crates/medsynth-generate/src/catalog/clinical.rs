//! Encounters, treatment and diagnostics.

use medsynth_core::{ColumnRule, ColumnSpec, EntityKind, RowCount, TableSchema};

const TIME_SLOTS: &[&str] = &[
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30",
];

const APPOINTMENT_STATUS: &[&str] = &["Scheduled", "Completed", "Cancelled", "No Show"];

const ADMISSION_TYPES: &[&str] = &["Planned", "Emergency", "Day Care"];

const DISCHARGE_OUTCOMES: &[&str] = &[
    "Recovered",
    "Referred",
    "Against Medical Advice",
    "Deceased",
];

const YES_NO: &[&str] = &["Yes", "No"];

const SEVERITY_LEVELS: &[&str] = &["Low", "Moderate", "High", "Critical"];

const SURGERY_TYPES: &[&str] = &[
    "Appendectomy",
    "Cataract",
    "Knee Replacement",
    "Coronary Bypass",
    "Hernia Repair",
    "Cesarean",
    "Gallbladder Removal",
];

const SURGERY_OUTCOMES: &[&str] = &["Successful", "Complications", "Postponed"];

const DOSAGES: &[&str] = &[
    "250 mg",
    "500 mg",
    "5 ml",
    "10 ml",
    "1 tablet",
    "2 tablets",
];

const FREQUENCIES: &[&str] = &[
    "Once daily",
    "Twice daily",
    "Thrice daily",
    "Every 6 hours",
    "As needed",
];

const MEDICATION_NAMES: &[&str] = &[
    "Amoxicillin",
    "Paracetamol",
    "Ibuprofen",
    "Metformin",
    "Atorvastatin",
    "Omeprazole",
    "Amlodipine",
    "Azithromycin",
    "Cetirizine",
    "Insulin Glargine",
];

const LAB_TEST_NAMES: &[&str] = &[
    "Complete Blood Count",
    "Lipid Panel",
    "Liver Function",
    "Thyroid Panel",
    "Blood Glucose",
    "Urinalysis",
    "Electrolyte Panel",
    "HbA1c",
];

const RESULT_FLAGS: &[&str] = &["Normal", "Abnormal", "Inconclusive"];

pub fn tables() -> Vec<TableSchema> {
    vec![
        appointments(),
        admissions(),
        discharges(),
        emergencies(),
        surgeries(),
        prescriptions(),
        medications(),
        lab_tests(),
        feedback(),
    ]
}

fn appointments() -> TableSchema {
    TableSchema {
        name: "appointments",
        entity: EntityKind::Appointment,
        rows: RowCount::Base,
        columns: vec![
            ColumnSpec::new("appointment_id", ColumnRule::Id),
            ColumnSpec::new("patient_id", ColumnRule::Ref(EntityKind::Patient)),
            ColumnSpec::new("doctor_id", ColumnRule::Ref(EntityKind::Doctor)),
            ColumnSpec::new("appointment_date", ColumnRule::DateWithin { days_back: 365 }),
            ColumnSpec::new("time_slot", ColumnRule::Choice(TIME_SLOTS)),
            ColumnSpec::new("status", ColumnRule::Choice(APPOINTMENT_STATUS)),
            ColumnSpec::new(
                "visit_reason",
                ColumnRule::Sentence {
                    min_words: 3,
                    max_words: 8,
                },
            ),
        ],
    }
}

fn admissions() -> TableSchema {
    TableSchema {
        name: "admissions",
        entity: EntityKind::Admission,
        rows: RowCount::Base,
        columns: vec![
            ColumnSpec::new("admission_id", ColumnRule::Id),
            ColumnSpec::new("patient_id", ColumnRule::Ref(EntityKind::Patient)),
            ColumnSpec::new("doctor_id", ColumnRule::Ref(EntityKind::Doctor)),
            ColumnSpec::new("bed_id", ColumnRule::Ref(EntityKind::Bed)),
            ColumnSpec::new("admitted_on", ColumnRule::DateWithin { days_back: 365 }),
            ColumnSpec::new("admission_type", ColumnRule::Choice(ADMISSION_TYPES)),
            ColumnSpec::new(
                "expected_stay_days",
                ColumnRule::IntRange { min: 1, max: 21 },
            ),
        ],
    }
}

fn discharges() -> TableSchema {
    TableSchema {
        name: "discharges",
        entity: EntityKind::Discharge,
        rows: RowCount::Half,
        columns: vec![
            ColumnSpec::new("discharge_id", ColumnRule::Id),
            ColumnSpec::new("admission_id", ColumnRule::Ref(EntityKind::Admission)),
            ColumnSpec::new("patient_id", ColumnRule::Ref(EntityKind::Patient)),
            ColumnSpec::new("discharged_on", ColumnRule::DateWithin { days_back: 365 }),
            ColumnSpec::new("outcome", ColumnRule::Choice(DISCHARGE_OUTCOMES)),
            ColumnSpec::new("followup_required", ColumnRule::Choice(YES_NO)),
        ],
    }
}

// A quarter of the base volume: emergencies are rarer than visits.
fn emergencies() -> TableSchema {
    TableSchema {
        name: "emergencies",
        entity: EntityKind::Emergency,
        rows: RowCount::Quarter,
        columns: vec![
            ColumnSpec::new("emergency_id", ColumnRule::Id),
            ColumnSpec::new("patient_id", ColumnRule::Ref(EntityKind::Patient)),
            ColumnSpec::new("ambulance_id", ColumnRule::Ref(EntityKind::Ambulance)),
            ColumnSpec::new("arrived_on", ColumnRule::DateWithin { days_back: 365 }),
            ColumnSpec::new("severity", ColumnRule::Choice(SEVERITY_LEVELS)),
            ColumnSpec::new("triage_level", ColumnRule::IntRange { min: 1, max: 5 }),
        ],
    }
}

fn surgeries() -> TableSchema {
    TableSchema {
        name: "surgeries",
        entity: EntityKind::Surgery,
        rows: RowCount::Half,
        columns: vec![
            ColumnSpec::new("surgery_id", ColumnRule::Id),
            ColumnSpec::new("patient_id", ColumnRule::Ref(EntityKind::Patient)),
            ColumnSpec::new("doctor_id", ColumnRule::Ref(EntityKind::Doctor)),
            ColumnSpec::new("room_id", ColumnRule::Ref(EntityKind::Room)),
            ColumnSpec::new("surgery_type", ColumnRule::Choice(SURGERY_TYPES)),
            ColumnSpec::new("scheduled_on", ColumnRule::DateWithin { days_back: 365 }),
            ColumnSpec::new(
                "duration_minutes",
                ColumnRule::IntRange { min: 30, max: 480 },
            ),
            ColumnSpec::new("outcome", ColumnRule::Choice(SURGERY_OUTCOMES)),
        ],
    }
}

fn prescriptions() -> TableSchema {
    TableSchema {
        name: "prescriptions",
        entity: EntityKind::Prescription,
        rows: RowCount::Base,
        columns: vec![
            ColumnSpec::new("prescription_id", ColumnRule::Id),
            ColumnSpec::new("patient_id", ColumnRule::Ref(EntityKind::Patient)),
            ColumnSpec::new("doctor_id", ColumnRule::Ref(EntityKind::Doctor)),
            ColumnSpec::new("medication_id", ColumnRule::Ref(EntityKind::Medication)),
            ColumnSpec::new("dosage", ColumnRule::Choice(DOSAGES)),
            ColumnSpec::new("frequency", ColumnRule::Choice(FREQUENCIES)),
            ColumnSpec::new("duration_days", ColumnRule::IntRange { min: 3, max: 30 }),
        ],
    }
}

fn medications() -> TableSchema {
    TableSchema {
        name: "medications",
        entity: EntityKind::Medication,
        rows: RowCount::Scaled {
            floor: 200,
            divisor: 50,
        },
        columns: vec![
            ColumnSpec::new("medication_id", ColumnRule::Id),
            ColumnSpec::new("medication_name", ColumnRule::Choice(MEDICATION_NAMES)),
            ColumnSpec::new("manufacturer", ColumnRule::CompanyName),
            ColumnSpec::new("batch_number", ColumnRule::NumberPattern("B^#####")),
            ColumnSpec::new(
                "unit_price",
                ColumnRule::FloatRange {
                    min: 0.5,
                    max: 120.0,
                    scale: 2,
                },
            ),
            ColumnSpec::new("stock_quantity", ColumnRule::IntRange { min: 0, max: 5000 }),
            ColumnSpec::new("restocked_on", ColumnRule::DateWithin { days_back: 365 }),
        ],
    }
}

fn lab_tests() -> TableSchema {
    TableSchema {
        name: "lab_tests",
        entity: EntityKind::LabTest,
        rows: RowCount::Base,
        columns: vec![
            ColumnSpec::new("lab_test_id", ColumnRule::Id),
            ColumnSpec::new("patient_id", ColumnRule::Ref(EntityKind::Patient)),
            ColumnSpec::new("doctor_id", ColumnRule::Ref(EntityKind::Doctor)),
            ColumnSpec::new("test_name", ColumnRule::Choice(LAB_TEST_NAMES)),
            ColumnSpec::new("result_flag", ColumnRule::Choice(RESULT_FLAGS)),
            ColumnSpec::new(
                "cost",
                ColumnRule::FloatRange {
                    min: 10.0,
                    max: 400.0,
                    scale: 2,
                },
            ),
            ColumnSpec::new("performed_on", ColumnRule::DateWithin { days_back: 365 }),
        ],
    }
}

fn feedback() -> TableSchema {
    TableSchema {
        name: "feedback",
        entity: EntityKind::Feedback,
        rows: RowCount::Half,
        columns: vec![
            ColumnSpec::new("feedback_id", ColumnRule::Id),
            ColumnSpec::new("patient_id", ColumnRule::Ref(EntityKind::Patient)),
            ColumnSpec::new("doctor_id", ColumnRule::Ref(EntityKind::Doctor)),
            ColumnSpec::new("rating", ColumnRule::IntRange { min: 1, max: 5 }),
            ColumnSpec::new(
                "comments",
                ColumnRule::Sentence {
                    min_words: 4,
                    max_words: 12,
                },
            ),
            ColumnSpec::new("submitted_on", ColumnRule::DateWithin { days_back: 365 }),
        ],
    }
}

//! Patients and hospital personnel.

use medsynth_core::{ColumnRule, ColumnSpec, EntityKind, RowCount, TableSchema};

const GENDERS: &[&str] = &["Female", "Male", "Other"];

const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

const SPECIALIZATIONS: &[&str] = &[
    "Cardiology",
    "Neurology",
    "Oncology",
    "Orthopedics",
    "Pediatrics",
    "Radiology",
    "General Surgery",
    "Anesthesiology",
    "Dermatology",
    "Psychiatry",
];

const SHIFTS: &[&str] = &["Morning", "Evening", "Night"];

const NURSE_GRADES: &[&str] = &["Junior", "Senior", "Charge"];

const STAFF_ROLES: &[&str] = &[
    "Receptionist",
    "Technician",
    "Cleaner",
    "Security",
    "Accountant",
    "Porter",
];

pub fn tables() -> Vec<TableSchema> {
    vec![patients(), doctors(), nurses(), support_staff()]
}

fn patients() -> TableSchema {
    TableSchema {
        name: "patients",
        entity: EntityKind::Patient,
        rows: RowCount::Base,
        columns: vec![
            ColumnSpec::new("patient_id", ColumnRule::Id),
            ColumnSpec::new("full_name", ColumnRule::FullName),
            ColumnSpec::new("gender", ColumnRule::Choice(GENDERS)),
            ColumnSpec::new("date_of_birth", ColumnRule::DateWithin { days_back: 29_200 }),
            ColumnSpec::new("blood_group", ColumnRule::Choice(BLOOD_GROUPS)),
            ColumnSpec::new("phone", ColumnRule::Phone),
            ColumnSpec::new("email", ColumnRule::Email),
            ColumnSpec::new("country", ColumnRule::Country),
            ColumnSpec::new("state", ColumnRule::State),
            ColumnSpec::new("city", ColumnRule::City),
            ColumnSpec::new("registered_on", ColumnRule::DateWithin { days_back: 1460 }),
        ],
    }
}

fn doctors() -> TableSchema {
    TableSchema {
        name: "doctors",
        entity: EntityKind::Doctor,
        rows: RowCount::Scaled {
            floor: 100,
            divisor: 100,
        },
        columns: vec![
            ColumnSpec::new("doctor_id", ColumnRule::Id),
            ColumnSpec::new("full_name", ColumnRule::FullName),
            ColumnSpec::new("specialization", ColumnRule::Choice(SPECIALIZATIONS)),
            ColumnSpec::new("department_id", ColumnRule::Ref(EntityKind::Department)),
            ColumnSpec::new("experience_years", ColumnRule::IntRange { min: 1, max: 35 }),
            ColumnSpec::new(
                "consultation_fee",
                ColumnRule::FloatRange {
                    min: 150.0,
                    max: 1200.0,
                    scale: 2,
                },
            ),
            ColumnSpec::new("phone", ColumnRule::Phone),
            ColumnSpec::new("email", ColumnRule::Email),
            ColumnSpec::new("country", ColumnRule::Country),
            ColumnSpec::new("state", ColumnRule::State),
            ColumnSpec::new("city", ColumnRule::City),
        ],
    }
}

fn nurses() -> TableSchema {
    TableSchema {
        name: "nurses",
        entity: EntityKind::Nurse,
        rows: RowCount::Scaled {
            floor: 150,
            divisor: 80,
        },
        columns: vec![
            ColumnSpec::new("nurse_id", ColumnRule::Id),
            ColumnSpec::new("full_name", ColumnRule::FullName),
            ColumnSpec::new("ward_id", ColumnRule::Ref(EntityKind::Ward)),
            ColumnSpec::new("shift", ColumnRule::Choice(SHIFTS)),
            ColumnSpec::new("grade", ColumnRule::Choice(NURSE_GRADES)),
            ColumnSpec::new("phone", ColumnRule::Phone),
        ],
    }
}

fn support_staff() -> TableSchema {
    TableSchema {
        name: "support_staff",
        entity: EntityKind::SupportStaff,
        rows: RowCount::Scaled {
            floor: 100,
            divisor: 100,
        },
        columns: vec![
            ColumnSpec::new("staff_id", ColumnRule::Id),
            ColumnSpec::new("full_name", ColumnRule::FullName),
            ColumnSpec::new("role", ColumnRule::Choice(STAFF_ROLES)),
            ColumnSpec::new("department_id", ColumnRule::Ref(EntityKind::Department)),
            ColumnSpec::new("shift", ColumnRule::Choice(SHIFTS)),
            ColumnSpec::new("phone", ColumnRule::Phone),
            ColumnSpec::new("country", ColumnRule::Country),
            ColumnSpec::new("state", ColumnRule::State),
            ColumnSpec::new("city", ColumnRule::City),
        ],
    }
}

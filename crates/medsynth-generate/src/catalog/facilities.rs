//! Buildings, beds and hardware.

use medsynth_core::{ColumnRule, ColumnSpec, EntityKind, RowCount, TableSchema};

const DEPARTMENT_NAMES: &[&str] = &[
    "Cardiology",
    "Neurology",
    "Oncology",
    "Orthopedics",
    "Pediatrics",
    "Radiology",
    "General Medicine",
    "Gynecology",
    "Dermatology",
    "ENT",
    "Urology",
    "Psychiatry",
];

const WARD_TYPES: &[&str] = &[
    "General",
    "Surgical",
    "Pediatric",
    "Maternity",
    "Intensive Care",
    "Isolation",
];

const ROOM_TYPES: &[&str] = &["Standard", "Semi-Private", "Private", "Deluxe"];

const BED_TYPES: &[&str] = &["Manual", "Electric", "ICU"];

const BED_STATUS: &[&str] = &["Available", "Occupied", "Under Maintenance"];

const EQUIPMENT_NAMES: &[&str] = &[
    "Ventilator",
    "Defibrillator",
    "Infusion Pump",
    "X-Ray Machine",
    "Ultrasound Scanner",
    "ECG Monitor",
    "Dialysis Machine",
    "Anesthesia Machine",
];

const EQUIPMENT_CONDITIONS: &[&str] = &["New", "Good", "Needs Service"];

pub fn tables() -> Vec<TableSchema> {
    vec![departments(), wards(), rooms(), beds(), equipment()]
}

fn departments() -> TableSchema {
    TableSchema {
        name: "departments",
        entity: EntityKind::Department,
        rows: RowCount::Scaled {
            floor: 12,
            divisor: 2000,
        },
        columns: vec![
            ColumnSpec::new("department_id", ColumnRule::Id),
            ColumnSpec::new("department_name", ColumnRule::Choice(DEPARTMENT_NAMES)),
            // Doctors are generated later; their pool already exists.
            ColumnSpec::new("head_doctor_id", ColumnRule::Ref(EntityKind::Doctor)),
            ColumnSpec::new("floor_number", ColumnRule::IntRange { min: 1, max: 8 }),
            ColumnSpec::new(
                "phone_extension",
                ColumnRule::IntRange {
                    min: 1000,
                    max: 9999,
                },
            ),
        ],
    }
}

fn wards() -> TableSchema {
    TableSchema {
        name: "wards",
        entity: EntityKind::Ward,
        rows: RowCount::Scaled {
            floor: 24,
            divisor: 1000,
        },
        columns: vec![
            ColumnSpec::new("ward_id", ColumnRule::Id),
            ColumnSpec::new("ward_type", ColumnRule::Choice(WARD_TYPES)),
            ColumnSpec::new("department_id", ColumnRule::Ref(EntityKind::Department)),
            ColumnSpec::new("capacity", ColumnRule::IntRange { min: 10, max: 60 }),
            ColumnSpec::new("floor_number", ColumnRule::IntRange { min: 1, max: 8 }),
        ],
    }
}

fn rooms() -> TableSchema {
    TableSchema {
        name: "rooms",
        entity: EntityKind::Room,
        rows: RowCount::Scaled {
            floor: 60,
            divisor: 250,
        },
        columns: vec![
            ColumnSpec::new("room_id", ColumnRule::Id),
            ColumnSpec::new("ward_id", ColumnRule::Ref(EntityKind::Ward)),
            ColumnSpec::new("room_type", ColumnRule::Choice(ROOM_TYPES)),
            ColumnSpec::new(
                "daily_rate",
                ColumnRule::FloatRange {
                    min: 80.0,
                    max: 900.0,
                    scale: 2,
                },
            ),
        ],
    }
}

fn beds() -> TableSchema {
    TableSchema {
        name: "beds",
        entity: EntityKind::Bed,
        rows: RowCount::Scaled {
            floor: 120,
            divisor: 100,
        },
        columns: vec![
            ColumnSpec::new("bed_id", ColumnRule::Id),
            ColumnSpec::new("room_id", ColumnRule::Ref(EntityKind::Room)),
            ColumnSpec::new("bed_type", ColumnRule::Choice(BED_TYPES)),
            ColumnSpec::new("status", ColumnRule::Choice(BED_STATUS)),
        ],
    }
}

fn equipment() -> TableSchema {
    TableSchema {
        name: "equipment",
        entity: EntityKind::Equipment,
        rows: RowCount::Scaled {
            floor: 80,
            divisor: 200,
        },
        columns: vec![
            ColumnSpec::new("equipment_id", ColumnRule::Id),
            ColumnSpec::new("equipment_name", ColumnRule::Choice(EQUIPMENT_NAMES)),
            ColumnSpec::new("department_id", ColumnRule::Ref(EntityKind::Department)),
            ColumnSpec::new("supplier_id", ColumnRule::Ref(EntityKind::Supplier)),
            ColumnSpec::new("purchased_on", ColumnRule::DateWithin { days_back: 2920 }),
            ColumnSpec::new("condition", ColumnRule::Choice(EQUIPMENT_CONDITIONS)),
        ],
    }
}

//! Fleet, suppliers and restocking.

use medsynth_core::{ColumnRule, ColumnSpec, EntityKind, RowCount, TableSchema};

const VEHICLE_TYPES: &[&str] = &[
    "Basic Life Support",
    "Advanced Life Support",
    "Patient Transport",
];

const AMBULANCE_STATUS: &[&str] = &["Available", "On Call", "In Maintenance"];

const ORDER_STATUS: &[&str] = &["Placed", "Shipped", "Delivered", "Cancelled"];

pub fn tables() -> Vec<TableSchema> {
    vec![ambulances(), suppliers(), purchase_orders()]
}

fn ambulances() -> TableSchema {
    TableSchema {
        name: "ambulances",
        entity: EntityKind::Ambulance,
        rows: RowCount::Scaled {
            floor: 25,
            divisor: 1000,
        },
        columns: vec![
            ColumnSpec::new("ambulance_id", ColumnRule::Id),
            ColumnSpec::new("vehicle_number", ColumnRule::NumberPattern("AMB-^###")),
            ColumnSpec::new("vehicle_type", ColumnRule::Choice(VEHICLE_TYPES)),
            ColumnSpec::new("status", ColumnRule::Choice(AMBULANCE_STATUS)),
            // Station location.
            ColumnSpec::new("country", ColumnRule::Country),
            ColumnSpec::new("state", ColumnRule::State),
            ColumnSpec::new("city", ColumnRule::City),
        ],
    }
}

fn suppliers() -> TableSchema {
    TableSchema {
        name: "suppliers",
        entity: EntityKind::Supplier,
        rows: RowCount::Scaled {
            floor: 30,
            divisor: 1000,
        },
        columns: vec![
            ColumnSpec::new("supplier_id", ColumnRule::Id),
            ColumnSpec::new("company_name", ColumnRule::CompanyName),
            ColumnSpec::new("contact_name", ColumnRule::FullName),
            ColumnSpec::new("phone", ColumnRule::Phone),
            ColumnSpec::new("email", ColumnRule::Email),
            ColumnSpec::new("country", ColumnRule::Country),
            ColumnSpec::new("state", ColumnRule::State),
            ColumnSpec::new("city", ColumnRule::City),
        ],
    }
}

fn purchase_orders() -> TableSchema {
    TableSchema {
        name: "purchase_orders",
        entity: EntityKind::PurchaseOrder,
        rows: RowCount::Half,
        columns: vec![
            ColumnSpec::new("order_id", ColumnRule::Id),
            ColumnSpec::new("supplier_id", ColumnRule::Ref(EntityKind::Supplier)),
            ColumnSpec::new("medication_id", ColumnRule::Ref(EntityKind::Medication)),
            ColumnSpec::new("quantity", ColumnRule::IntRange { min: 10, max: 500 }),
            ColumnSpec::new(
                "unit_cost",
                ColumnRule::FloatRange {
                    min: 1.0,
                    max: 250.0,
                    scale: 2,
                },
            ),
            ColumnSpec::new(
                "total_cost",
                ColumnRule::ProductOf {
                    quantity: "quantity",
                    unit: "unit_cost",
                },
            ),
            ColumnSpec::new("ordered_on", ColumnRule::DateWithin { days_back: 365 }),
            ColumnSpec::new("status", ColumnRule::Choice(ORDER_STATUS)),
        ],
    }
}

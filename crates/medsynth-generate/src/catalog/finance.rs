//! Billing, payments and insurance.

use medsynth_core::{ColumnRule, ColumnSpec, EntityKind, RowCount, TableSchema};

const PAYMENT_METHODS: &[&str] = &[
    "Cash",
    "Credit Card",
    "Debit Card",
    "Bank Transfer",
    "Insurance",
];

const PLAN_TIERS: &[&str] = &["Bronze", "Silver", "Gold", "Platinum"];

const CLAIM_STATUS: &[&str] = &["Filed", "Approved", "Rejected", "Under Review"];

pub fn tables() -> Vec<TableSchema> {
    vec![bills(), payments(), insurance_providers(), insurance_claims()]
}

fn bills() -> TableSchema {
    TableSchema {
        name: "bills",
        entity: EntityKind::Bill,
        rows: RowCount::Base,
        columns: vec![
            ColumnSpec::new("bill_id", ColumnRule::Id),
            ColumnSpec::new("patient_id", ColumnRule::Ref(EntityKind::Patient)),
            ColumnSpec::new("admission_id", ColumnRule::Ref(EntityKind::Admission)),
            ColumnSpec::new("billed_on", ColumnRule::DateWithin { days_back: 365 }),
            ColumnSpec::new(
                "total_amount",
                ColumnRule::FloatRange {
                    min: 100.0,
                    max: 20_000.0,
                    scale: 2,
                },
            ),
            ColumnSpec::new(
                "discount",
                ColumnRule::FloatRange {
                    min: 0.0,
                    max: 2_000.0,
                    scale: 2,
                },
            ),
            ColumnSpec::new(
                "tax",
                ColumnRule::FloatRange {
                    min: 0.0,
                    max: 1_800.0,
                    scale: 2,
                },
            ),
            ColumnSpec::new(
                "net_payable",
                ColumnRule::NetOf {
                    total: "total_amount",
                    discount: "discount",
                    tax: "tax",
                },
            ),
        ],
    }
}

fn payments() -> TableSchema {
    TableSchema {
        name: "payments",
        entity: EntityKind::Payment,
        rows: RowCount::Half,
        columns: vec![
            ColumnSpec::new("payment_id", ColumnRule::Id),
            ColumnSpec::new("bill_id", ColumnRule::Ref(EntityKind::Bill)),
            ColumnSpec::new("patient_id", ColumnRule::Ref(EntityKind::Patient)),
            ColumnSpec::new("paid_on", ColumnRule::DateWithin { days_back: 365 }),
            ColumnSpec::new("payment_method", ColumnRule::Choice(PAYMENT_METHODS)),
            ColumnSpec::new(
                "amount",
                ColumnRule::FloatRange {
                    min: 50.0,
                    max: 20_000.0,
                    scale: 2,
                },
            ),
            ColumnSpec::new(
                "reference_number",
                ColumnRule::NumberPattern("TXN-########"),
            ),
        ],
    }
}

fn insurance_providers() -> TableSchema {
    TableSchema {
        name: "insurance_providers",
        entity: EntityKind::Insurer,
        rows: RowCount::Scaled {
            floor: 15,
            divisor: 2000,
        },
        columns: vec![
            ColumnSpec::new("provider_id", ColumnRule::Id),
            ColumnSpec::new("company_name", ColumnRule::CompanyName),
            ColumnSpec::new("plan_tier", ColumnRule::Choice(PLAN_TIERS)),
            ColumnSpec::new("contact_phone", ColumnRule::Phone),
            ColumnSpec::new("contact_email", ColumnRule::Email),
            ColumnSpec::new("country", ColumnRule::Country),
            ColumnSpec::new("state", ColumnRule::State),
            ColumnSpec::new("city", ColumnRule::City),
        ],
    }
}

fn insurance_claims() -> TableSchema {
    TableSchema {
        name: "insurance_claims",
        entity: EntityKind::Claim,
        rows: RowCount::Half,
        columns: vec![
            ColumnSpec::new("claim_id", ColumnRule::Id),
            ColumnSpec::new("patient_id", ColumnRule::Ref(EntityKind::Patient)),
            ColumnSpec::new("provider_id", ColumnRule::Ref(EntityKind::Insurer)),
            ColumnSpec::new("bill_id", ColumnRule::Ref(EntityKind::Bill)),
            ColumnSpec::new(
                "claim_amount",
                ColumnRule::FloatRange {
                    min: 100.0,
                    max: 15_000.0,
                    scale: 2,
                },
            ),
            ColumnSpec::new("status", ColumnRule::Choice(CLAIM_STATUS)),
            ColumnSpec::new("filed_on", ColumnRule::DateWithin { days_back: 365 }),
        ],
    }
}

//! Declarative table schemas.
//!
//! Each hospital table is described once as an ordered list of
//! [`ColumnSpec`]s; a single assembly routine in `medsynth-generate`
//! interprets the rules. This replaces per-table handwritten generators.

/// Entity categories whose identifier pools are shared across tables.
///
/// Every table owns exactly one pool; reference columns in other tables
/// sample from it with replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Department,
    Ward,
    Room,
    Bed,
    Equipment,
    Patient,
    Doctor,
    Nurse,
    SupportStaff,
    Appointment,
    Admission,
    Discharge,
    Emergency,
    Surgery,
    Prescription,
    Medication,
    LabTest,
    Feedback,
    Bill,
    Payment,
    Insurer,
    Claim,
    Ambulance,
    Supplier,
    PurchaseOrder,
}

impl EntityKind {
    /// Identifier prefix; distinct per kind so pools never collide.
    pub fn prefix(&self) -> &'static str {
        match self {
            EntityKind::Department => "DEP",
            EntityKind::Ward => "WRD",
            EntityKind::Room => "ROM",
            EntityKind::Bed => "BED",
            EntityKind::Equipment => "EQP",
            EntityKind::Patient => "PAT",
            EntityKind::Doctor => "DOC",
            EntityKind::Nurse => "NUR",
            EntityKind::SupportStaff => "STF",
            EntityKind::Appointment => "APT",
            EntityKind::Admission => "ADM",
            EntityKind::Discharge => "DIS",
            EntityKind::Emergency => "EMG",
            EntityKind::Surgery => "SUR",
            EntityKind::Prescription => "PRE",
            EntityKind::Medication => "MED",
            EntityKind::LabTest => "LAB",
            EntityKind::Feedback => "FBK",
            EntityKind::Bill => "BIL",
            EntityKind::Payment => "PAY",
            EntityKind::Insurer => "INS",
            EntityKind::Claim => "CLM",
            EntityKind::Ambulance => "AMB",
            EntityKind::Supplier => "SUP",
            EntityKind::PurchaseOrder => "ORD",
        }
    }

    /// Digits reserved for the zero-padded sequence number.
    pub fn width(&self) -> u32 {
        match self {
            EntityKind::Department
            | EntityKind::Ward
            | EntityKind::Insurer
            | EntityKind::Ambulance
            | EntityKind::Supplier => 4,
            EntityKind::Room
            | EntityKind::Equipment
            | EntityKind::Doctor
            | EntityKind::Nurse
            | EntityKind::SupportStaff
            | EntityKind::Medication => 5,
            EntityKind::Bed
            | EntityKind::Discharge
            | EntityKind::Emergency
            | EntityKind::Surgery
            | EntityKind::Feedback
            | EntityKind::Claim
            | EntityKind::PurchaseOrder => 6,
            EntityKind::Patient
            | EntityKind::Appointment
            | EntityKind::Admission
            | EntityKind::Prescription
            | EntityKind::LabTest
            | EntityKind::Bill
            | EntityKind::Payment => 7,
        }
    }
}

/// Row-count derivation policy, resolved against the run's base count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCount {
    /// Scales 1:1 with the base count (fact tables).
    Base,
    /// Strict half of the base count.
    Half,
    /// Strict quarter of the base count.
    Quarter,
    /// `max(floor, base / divisor)` for dimension-like tables.
    Scaled { floor: u64, divisor: u64 },
}

impl RowCount {
    pub fn resolve(&self, base: u64) -> u64 {
        match self {
            RowCount::Base => base,
            RowCount::Half => base / 2,
            RowCount::Quarter => base / 4,
            RowCount::Scaled { floor, divisor } => (base / divisor).max(*floor),
        }
    }
}

/// Generation rule for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnRule {
    /// Sequential identifier from the table's own pool.
    Id,
    /// Uniform-with-replacement reference into another entity's pool.
    /// No per-row uniqueness or fan-out guarantee: this models realistic
    /// many-to-one references, not enforced joins.
    Ref(EntityKind),
    /// Country component of the table's location triple.
    Country,
    /// State component; always consistent with the row's country.
    State,
    /// City component; always consistent with the row's state.
    City,
    /// Uniform choice over a fixed vocabulary.
    Choice(&'static [&'static str]),
    IntRange {
        min: i64,
        max: i64,
    },
    FloatRange {
        min: f64,
        max: f64,
        scale: u32,
    },
    /// Date within `days_back` days before the run's base date.
    DateWithin {
        days_back: i64,
    },
    FullName,
    CompanyName,
    Phone,
    Email,
    Sentence {
        min_words: usize,
        max_words: usize,
    },
    /// Digit pattern ('#' = digit, '^' = non-zero digit).
    NumberPattern(&'static str),
    /// `total - discount + tax` over sibling columns, scale 2.
    NetOf {
        total: &'static str,
        discount: &'static str,
        tax: &'static str,
    },
    /// `quantity * unit` over sibling columns, scale 2.
    ProductOf {
        quantity: &'static str,
        unit: &'static str,
    },
}

impl ColumnRule {
    /// Decimal scale applied when rendering float cells.
    pub fn float_scale(&self) -> Option<u32> {
        match self {
            ColumnRule::FloatRange { scale, .. } => Some(*scale),
            ColumnRule::NetOf { .. } | ColumnRule::ProductOf { .. } => Some(2),
            _ => None,
        }
    }

    /// Derived rules are computed from sibling columns after all
    /// independently sampled columns of the row exist.
    pub fn is_derived(&self) -> bool {
        matches!(self, ColumnRule::NetOf { .. } | ColumnRule::ProductOf { .. })
    }

    pub fn is_location(&self) -> bool {
        matches!(
            self,
            ColumnRule::Country | ColumnRule::State | ColumnRule::City
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub rule: ColumnRule,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, rule: ColumnRule) -> Self {
        Self { name, rule }
    }
}

/// Schema of one output table.
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    pub entity: EntityKind,
    pub rows: RowCount,
    pub columns: Vec<ColumnSpec>,
}

impl TableSchema {
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.name).collect()
    }

    pub fn has_location(&self) -> bool {
        self.columns.iter().any(|column| column.rule.is_location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_floor_applies_at_matching_base() {
        let policy = RowCount::Scaled {
            floor: 50,
            divisor: 1000,
        };
        assert_eq!(policy.resolve(50_000), 50);
        assert_eq!(policy.resolve(500_000), 500);
        assert_eq!(policy.resolve(1_000), 50);
    }

    #[test]
    fn fractional_counts_divide_exactly() {
        assert_eq!(RowCount::Half.resolve(50_000), 25_000);
        assert_eq!(RowCount::Quarter.resolve(50_000), 12_500);
        assert_eq!(RowCount::Base.resolve(50_000), 50_000);
    }

    #[test]
    fn prefixes_are_distinct() {
        let kinds = [
            EntityKind::Department,
            EntityKind::Ward,
            EntityKind::Room,
            EntityKind::Bed,
            EntityKind::Equipment,
            EntityKind::Patient,
            EntityKind::Doctor,
            EntityKind::Nurse,
            EntityKind::SupportStaff,
            EntityKind::Appointment,
            EntityKind::Admission,
            EntityKind::Discharge,
            EntityKind::Emergency,
            EntityKind::Surgery,
            EntityKind::Prescription,
            EntityKind::Medication,
            EntityKind::LabTest,
            EntityKind::Feedback,
            EntityKind::Bill,
            EntityKind::Payment,
            EntityKind::Insurer,
            EntityKind::Claim,
            EntityKind::Ambulance,
            EntityKind::Supplier,
            EntityKind::PurchaseOrder,
        ];
        let mut prefixes: Vec<&str> = kinds.iter().map(|kind| kind.prefix()).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), kinds.len());
    }

    #[test]
    fn derived_rules_render_at_scale_two() {
        let rule = ColumnRule::NetOf {
            total: "total_amount",
            discount: "discount",
            tax: "tax",
        };
        assert!(rule.is_derived());
        assert_eq!(rule.float_scale(), Some(2));
    }
}

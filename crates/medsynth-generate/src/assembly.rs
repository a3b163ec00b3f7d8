//! Generic row assembly driven by table schemas.
//!
//! One routine interprets every [`ColumnRule`]; the catalog supplies the
//! per-table declarations. Location triples are sampled once per table and
//! distributed positionally; derived columns are filled in after the
//! row's sampled siblings exist.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::IndexedRandom;

use medsynth_core::{ColumnRule, ColumnSpec, EntityKind, TableSchema, Value};

use crate::errors::GenerationError;
use crate::geography::Geography;
use crate::locations::{LocationColumns, LocationSampler};
use crate::pools::PoolSet;
use crate::values;

/// Build all rows for one table.
pub fn build_rows(
    schema: &TableSchema,
    row_count: u64,
    pools: &PoolSet,
    geography: &Geography,
    rng: &mut impl Rng,
) -> Result<Vec<Vec<Value>>, GenerationError> {
    let ordinals = column_ordinals(schema);
    let locations = if schema.has_location() {
        Some(LocationSampler::new(geography).sample(row_count, rng)?)
    } else {
        None
    };

    let mut rows = Vec::with_capacity(row_count as usize);
    for row_index in 0..row_count as usize {
        rows.push(build_row(
            schema,
            row_index,
            pools,
            locations.as_ref(),
            &ordinals,
            rng,
        )?);
    }
    Ok(rows)
}

fn build_row(
    schema: &TableSchema,
    row_index: usize,
    pools: &PoolSet,
    locations: Option<&LocationColumns>,
    ordinals: &HashMap<&'static str, usize>,
    rng: &mut impl Rng,
) -> Result<Vec<Value>, GenerationError> {
    let mut cells: Vec<Option<Value>> = vec![None; schema.columns.len()];

    for (ordinal, column) in schema.columns.iter().enumerate() {
        if column.rule.is_derived() {
            continue;
        }
        cells[ordinal] = Some(sample_cell(schema, column, row_index, pools, locations, rng)?);
    }

    for (ordinal, column) in schema.columns.iter().enumerate() {
        if !column.rule.is_derived() {
            continue;
        }
        cells[ordinal] = Some(derive_cell(schema, column, &cells, ordinals)?);
    }

    let mut row = Vec::with_capacity(cells.len());
    for (ordinal, cell) in cells.into_iter().enumerate() {
        match cell {
            Some(value) => row.push(value),
            None => {
                return Err(GenerationError::Internal {
                    table: schema.name.to_string(),
                    column: schema.columns[ordinal].name.to_string(),
                    detail: "cell never assigned",
                });
            }
        }
    }
    Ok(row)
}

fn sample_cell(
    schema: &TableSchema,
    column: &ColumnSpec,
    row_index: usize,
    pools: &PoolSet,
    locations: Option<&LocationColumns>,
    rng: &mut impl Rng,
) -> Result<Value, GenerationError> {
    match &column.rule {
        ColumnRule::Id => {
            let id = own_pool_id(schema.entity, row_index, pools)?;
            Ok(Value::Text(id))
        }
        ColumnRule::Ref(entity) => {
            let id = reference_id(*entity, pools, rng)?;
            Ok(Value::Text(id))
        }
        ColumnRule::Country => {
            let batch = location_batch(schema, locations)?;
            Ok(Value::Text(batch.countries[row_index].to_string()))
        }
        ColumnRule::State => {
            let batch = location_batch(schema, locations)?;
            Ok(Value::Text(batch.states[row_index].to_string()))
        }
        ColumnRule::City => {
            let batch = location_batch(schema, locations)?;
            Ok(Value::Text(batch.cities[row_index].to_string()))
        }
        ColumnRule::Choice(options) => Ok(Value::Text(values::choice(*options, rng))),
        ColumnRule::IntRange { min, max } => Ok(Value::Int(values::int_range(*min, *max, rng))),
        ColumnRule::FloatRange { min, max, scale } => {
            Ok(Value::Float(values::float_range(*min, *max, *scale, rng)))
        }
        ColumnRule::DateWithin { days_back } => {
            Ok(Value::Date(values::date_within(*days_back, rng)))
        }
        ColumnRule::FullName => Ok(Value::Text(values::full_name(rng))),
        ColumnRule::CompanyName => Ok(Value::Text(values::company_name(rng))),
        ColumnRule::Phone => Ok(Value::Text(values::phone(rng))),
        ColumnRule::Email => Ok(Value::Text(values::email(rng))),
        ColumnRule::Sentence {
            min_words,
            max_words,
        } => Ok(Value::Text(values::sentence(*min_words, *max_words, rng))),
        ColumnRule::NumberPattern(pattern) => {
            Ok(Value::Text(values::number_pattern(*pattern, rng)))
        }
        ColumnRule::NetOf { .. } | ColumnRule::ProductOf { .. } => Err(GenerationError::Internal {
            table: schema.name.to_string(),
            column: column.name.to_string(),
            detail: "derived rule reached the sampling pass",
        }),
    }
}

fn derive_cell(
    schema: &TableSchema,
    column: &ColumnSpec,
    cells: &[Option<Value>],
    ordinals: &HashMap<&'static str, usize>,
) -> Result<Value, GenerationError> {
    match &column.rule {
        ColumnRule::NetOf {
            total,
            discount,
            tax,
        } => {
            let total = numeric_input(schema, column, cells, ordinals, total)?;
            let discount = numeric_input(schema, column, cells, ordinals, discount)?;
            let tax = numeric_input(schema, column, cells, ordinals, tax)?;
            Ok(Value::Float(values::round_to(total - discount + tax, 2)))
        }
        ColumnRule::ProductOf { quantity, unit } => {
            let quantity = numeric_input(schema, column, cells, ordinals, quantity)?;
            let unit = numeric_input(schema, column, cells, ordinals, unit)?;
            Ok(Value::Float(values::round_to(quantity * unit, 2)))
        }
        _ => Err(GenerationError::Internal {
            table: schema.name.to_string(),
            column: column.name.to_string(),
            detail: "sampled rule reached the derive pass",
        }),
    }
}

fn numeric_input(
    schema: &TableSchema,
    column: &ColumnSpec,
    cells: &[Option<Value>],
    ordinals: &HashMap<&'static str, usize>,
    input: &str,
) -> Result<f64, GenerationError> {
    ordinals
        .get(input)
        .and_then(|ordinal| cells[*ordinal].as_ref())
        .and_then(Value::as_f64)
        .ok_or_else(|| GenerationError::MissingInput {
            table: schema.name.to_string(),
            column: column.name.to_string(),
            input: input.to_string(),
        })
}

fn location_batch<'a>(
    schema: &TableSchema,
    locations: Option<&'a LocationColumns>,
) -> Result<&'a LocationColumns, GenerationError> {
    locations.ok_or_else(|| GenerationError::MissingLocations(schema.name.to_string()))
}

fn own_pool_id(
    entity: EntityKind,
    row_index: usize,
    pools: &PoolSet,
) -> Result<String, GenerationError> {
    let pool = pools
        .pool(entity)
        .ok_or(GenerationError::MissingPool(entity))?;
    pool.get(row_index)
        .map(str::to_string)
        .ok_or(GenerationError::PoolExhausted {
            entity,
            row: row_index,
        })
}

fn reference_id(
    entity: EntityKind,
    pools: &PoolSet,
    rng: &mut impl Rng,
) -> Result<String, GenerationError> {
    let pool = pools
        .pool(entity)
        .ok_or(GenerationError::MissingPool(entity))?;
    pool.ids()
        .choose(rng)
        .cloned()
        .ok_or(GenerationError::EmptyPool(entity))
}

fn column_ordinals(schema: &TableSchema) -> HashMap<&'static str, usize> {
    schema
        .columns
        .iter()
        .enumerate()
        .map(|(ordinal, column)| (column.name, ordinal))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use medsynth_core::RowCount;

    use super::*;

    fn ledger_schema() -> TableSchema {
        TableSchema {
            name: "ledger",
            entity: EntityKind::Bill,
            rows: RowCount::Base,
            columns: vec![
                ColumnSpec::new("bill_id", ColumnRule::Id),
                ColumnSpec::new("patient_id", ColumnRule::Ref(EntityKind::Patient)),
                ColumnSpec::new(
                    "total_amount",
                    ColumnRule::FloatRange {
                        min: 100.0,
                        max: 900.0,
                        scale: 2,
                    },
                ),
                ColumnSpec::new(
                    "discount",
                    ColumnRule::FloatRange {
                        min: 0.0,
                        max: 50.0,
                        scale: 2,
                    },
                ),
                ColumnSpec::new(
                    "tax",
                    ColumnRule::FloatRange {
                        min: 0.0,
                        max: 80.0,
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

    fn test_pools(schema: &TableSchema, base: u64) -> PoolSet {
        let patients = TableSchema {
            name: "patients",
            entity: EntityKind::Patient,
            rows: RowCount::Base,
            columns: vec![ColumnSpec::new("patient_id", ColumnRule::Id)],
        };
        PoolSet::allocate(&[schema.clone(), patients], base).expect("allocate pools")
    }

    #[test]
    fn own_ids_are_sequential_and_references_resolve() {
        let schema = ledger_schema();
        let pools = test_pools(&schema, 40);
        let geography = Geography::new();
        let mut rng = ChaCha8Rng::seed_from_u64(17);

        let rows = build_rows(&schema, 40, &pools, &geography, &mut rng).expect("build rows");
        assert_eq!(rows.len(), 40);

        let patient_pool = pools.pool(EntityKind::Patient).expect("patient pool");
        for (index, row) in rows.iter().enumerate() {
            let own = row[0].as_str().expect("own id");
            assert_eq!(own, format!("BIL{:07}", index + 1));
            let reference = row[1].as_str().expect("reference id").to_string();
            assert!(patient_pool.ids().contains(&reference));
        }
    }

    #[test]
    fn derived_column_matches_sibling_arithmetic() {
        let schema = ledger_schema();
        let pools = test_pools(&schema, 25);
        let geography = Geography::new();
        let mut rng = ChaCha8Rng::seed_from_u64(23);

        let rows = build_rows(&schema, 25, &pools, &geography, &mut rng).expect("build rows");
        for row in &rows {
            let total = row[2].as_f64().expect("total");
            let discount = row[3].as_f64().expect("discount");
            let tax = row[4].as_f64().expect("tax");
            let net = row[5].as_f64().expect("net");
            assert!((net - (total - discount + tax)).abs() < 0.005);
        }
    }

    #[test]
    fn unknown_derived_input_is_reported() {
        let mut schema = ledger_schema();
        schema.columns[5] = ColumnSpec::new(
            "net_payable",
            ColumnRule::NetOf {
                total: "grand_total",
                discount: "discount",
                tax: "tax",
            },
        );
        let pools = test_pools(&schema, 5);
        let geography = Geography::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let err = build_rows(&schema, 5, &pools, &geography, &mut rng).unwrap_err();
        match err {
            GenerationError::MissingInput { table, input, .. } => {
                assert_eq!(table, "ledger");
                assert_eq!(input, "grand_total");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_pool_is_reported_not_assumed() {
        let schema = ledger_schema();
        // Allocate pools for the ledger only; the patient reference has no
        // pool to resolve against.
        let pools = PoolSet::allocate(&[schema.clone()], 10).expect("allocate pools");
        let geography = Geography::new();
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let err = build_rows(&schema, 10, &pools, &geography, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::MissingPool(EntityKind::Patient)
        ));
    }
}

//! The hospital table catalog.
//!
//! Declaration order is the generation order. Reference validity does not
//! depend on it: every pool is allocated for the whole catalog before the
//! first table is assembled.

mod clinical;
mod facilities;
mod finance;
mod logistics;
mod people;

use medsynth_core::TableSchema;

/// All tables, in generation order.
pub fn hospital_tables() -> Vec<TableSchema> {
    let mut tables = Vec::with_capacity(25);
    tables.extend(facilities::tables());
    tables.extend(people::tables());
    tables.extend(clinical::tables());
    tables.extend(finance::tables());
    tables.extend(logistics::tables());
    tables
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn catalog_covers_twenty_five_distinct_tables() {
        let tables = hospital_tables();
        assert_eq!(tables.len(), 25);

        let names: BTreeSet<&str> = tables.iter().map(|table| table.name).collect();
        assert_eq!(names.len(), 25);

        let entities: BTreeSet<_> = tables.iter().map(|table| table.entity).collect();
        assert_eq!(entities.len(), 25, "each table owns its own pool");
    }

    #[test]
    fn every_table_leads_with_its_own_id_column() {
        for table in hospital_tables() {
            let first = table.columns.first().expect("at least one column");
            assert_eq!(
                first.rule,
                medsynth_core::ColumnRule::Id,
                "{} should lead with its pool id",
                table.name
            );
        }
    }

    #[test]
    fn location_columns_always_form_full_triples() {
        use medsynth_core::ColumnRule;

        for table in hospital_tables() {
            let count = |rule: &ColumnRule| {
                table
                    .columns
                    .iter()
                    .filter(|column| column.rule == *rule)
                    .count()
            };
            let countries = count(&ColumnRule::Country);
            let states = count(&ColumnRule::State);
            let cities = count(&ColumnRule::City);
            assert_eq!(countries, states, "{}", table.name);
            assert_eq!(states, cities, "{}", table.name);
            assert!(countries <= 1, "{}", table.name);
        }
    }

    #[test]
    fn referenced_entities_all_have_owning_tables() {
        use medsynth_core::ColumnRule;

        let tables = hospital_tables();
        let owners: BTreeSet<_> = tables.iter().map(|table| table.entity).collect();
        for table in &tables {
            for column in &table.columns {
                if let ColumnRule::Ref(entity) = column.rule {
                    assert!(
                        owners.contains(&entity),
                        "{}.{} references {:?} which no table owns",
                        table.name,
                        column.name,
                        entity
                    );
                }
            }
        }
    }

    #[test]
    fn derived_inputs_name_existing_sampled_columns() {
        use medsynth_core::ColumnRule;

        for table in hospital_tables() {
            let sampled: BTreeSet<&str> = table
                .columns
                .iter()
                .filter(|column| !column.rule.is_derived())
                .map(|column| column.name)
                .collect();
            for column in &table.columns {
                let inputs: Vec<&str> = match column.rule {
                    ColumnRule::NetOf {
                        total,
                        discount,
                        tax,
                    } => vec![total, discount, tax],
                    ColumnRule::ProductOf { quantity, unit } => vec![quantity, unit],
                    _ => continue,
                };
                for input in inputs {
                    assert!(
                        sampled.contains(input),
                        "{}.{} derives from missing column '{}'",
                        table.name,
                        column.name,
                        input
                    );
                }
            }
        }
    }
}

//! Pre-allocated identifier pools.
//!
//! Every entity's pool is materialized before any table is generated and
//! never mutated afterwards. Reference columns sample from these pools, so
//! generation order never affects referential validity.

use std::collections::BTreeMap;

use medsynth_core::{ConfigError, EntityKind, TableSchema};

/// Immutable pool of identifiers for one entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPool {
    prefix: &'static str,
    ids: Vec<String>,
}

impl IdPool {
    /// Allocate `count` identifiers: `prefix` + zero-padded 1..=count.
    ///
    /// Fails when the largest sequence number does not fit in `width`
    /// digits; silent truncation would corrupt cross-table references.
    pub fn allocate(prefix: &'static str, count: u64, width: u32) -> Result<Self, ConfigError> {
        let max = 10u64
            .checked_pow(width)
            .map(|limit| limit - 1)
            .unwrap_or(u64::MAX);
        if count > max {
            return Err(ConfigError {
                prefix: prefix.to_string(),
                count,
                width,
                max,
            });
        }

        let width = width as usize;
        let ids = (1..=count)
            .map(|seq| format!("{prefix}{seq:0width$}"))
            .collect();
        Ok(Self { prefix, ids })
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }
}

/// All pools for a run, keyed by entity kind.
#[derive(Debug)]
pub struct PoolSet {
    pools: BTreeMap<EntityKind, IdPool>,
}

impl PoolSet {
    /// Materialize one pool per catalog entity, each sized by its own
    /// table's row policy resolved against the base count.
    pub fn allocate(catalog: &[TableSchema], base_rows: u64) -> Result<Self, ConfigError> {
        let mut pools = BTreeMap::new();
        for table in catalog {
            let count = table.rows.resolve(base_rows);
            let pool = IdPool::allocate(table.entity.prefix(), count, table.entity.width())?;
            pools.insert(table.entity, pool);
        }
        Ok(Self { pools })
    }

    pub fn pool(&self, entity: EntityKind) -> Option<&IdPool> {
        self.pools.get(&entity)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn pool_covers_sequence_without_gaps() {
        let pool = IdPool::allocate("PAT", 250, 7).expect("allocate");
        assert_eq!(pool.len(), 250);
        assert_eq!(pool.get(0), Some("PAT0000001"));
        assert_eq!(pool.get(249), Some("PAT0000250"));

        let mut seen = BTreeSet::new();
        for (index, id) in pool.ids().iter().enumerate() {
            let digits = id.strip_prefix("PAT").expect("prefix");
            assert_eq!(digits.len(), 7);
            let seq: u64 = digits.parse().expect("sequence number");
            assert_eq!(seq, index as u64 + 1);
            assert!(seen.insert(id.clone()), "duplicate id {id}");
        }
        assert_eq!(seen.len(), 250);
    }

    #[test]
    fn reallocation_is_byte_identical() {
        let first = IdPool::allocate("DOC", 120, 5).expect("allocate");
        let second = IdPool::allocate("DOC", 120, 5).expect("allocate");
        assert_eq!(first, second);
    }

    #[test]
    fn overflowing_width_is_a_configuration_error() {
        let err = IdPool::allocate("WRD", 10_000, 4).unwrap_err();
        assert_eq!(err.count, 10_000);
        assert_eq!(err.max, 9_999);
    }

    #[test]
    fn width_boundary_is_inclusive() {
        let pool = IdPool::allocate("WRD", 9_999, 4).expect("allocate");
        assert_eq!(pool.get(9_998), Some("WRD9999"));
    }
}

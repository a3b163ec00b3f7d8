//! Output-level checks: every file on disk honors the referential and
//! geographic invariants, row by row.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use medsynth_generate::geography::Geography;
use medsynth_generate::{GenerateOptions, GenerationEngine};

struct Dataset {
    _dir: tempfile::TempDir,
    out_dir: PathBuf,
}

fn generate_dataset() -> Dataset {
    let dir = tempfile::tempdir().expect("temp dir");
    let options = GenerateOptions {
        out_dir: dir.path().to_path_buf(),
        base_rows: 400,
        seed: 11,
        only: Vec::new(),
    };
    let result = GenerationEngine::new(options).run().expect("run generation");
    assert!(result.report.failures.is_empty());
    Dataset {
        out_dir: result.out_dir,
        _dir: dir,
    }
}

fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .unwrap_or_else(|err| panic!("open {}: {err}", path.display()));
    let headers = reader
        .headers()
        .expect("headers")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|record| {
            record
                .expect("record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect();
    (headers, rows)
}

fn column_values(headers: &[String], rows: &[Vec<String>], name: &str) -> Vec<String> {
    let index = headers
        .iter()
        .position(|header| header == name)
        .unwrap_or_else(|| panic!("missing column '{name}'"));
    rows.iter().map(|row| row[index].clone()).collect()
}

#[test]
fn geography_triples_are_consistent_in_every_location_table() {
    let dataset = generate_dataset();
    let geography = Geography::new();

    for table in [
        "patients",
        "doctors",
        "support_staff",
        "insurance_providers",
        "ambulances",
        "suppliers",
    ] {
        let (headers, rows) = read_csv(&dataset.out_dir.join(format!("{table}.csv")));
        let countries = column_values(&headers, &rows, "country");
        let states = column_values(&headers, &rows, "state");
        let cities = column_values(&headers, &rows, "city");

        for i in 0..rows.len() {
            let valid_states = geography
                .states_of(&countries[i])
                .unwrap_or_else(|err| panic!("{table} row {i}: {err}"));
            assert!(
                valid_states.contains(&states[i].as_str()),
                "{table} row {i}: state '{}' not in country '{}'",
                states[i],
                countries[i]
            );
            let valid_cities = geography
                .cities_of(&states[i])
                .unwrap_or_else(|err| panic!("{table} row {i}: {err}"));
            assert!(
                valid_cities.contains(&cities[i].as_str()),
                "{table} row {i}: city '{}' not in state '{}'",
                cities[i],
                states[i]
            );
        }
    }
}

#[test]
fn reference_columns_resolve_to_pool_members() {
    let dataset = generate_dataset();

    let id_set = |table: &str, column: &str| -> BTreeSet<String> {
        let (headers, rows) = read_csv(&dataset.out_dir.join(format!("{table}.csv")));
        column_values(&headers, &rows, column).into_iter().collect()
    };

    let checks = [
        ("appointments", "patient_id", "patients", "patient_id"),
        ("appointments", "doctor_id", "doctors", "doctor_id"),
        ("admissions", "bed_id", "beds", "bed_id"),
        ("discharges", "admission_id", "admissions", "admission_id"),
        // Forward reference: departments are generated before doctors.
        ("departments", "head_doctor_id", "doctors", "doctor_id"),
        ("insurance_claims", "bill_id", "bills", "bill_id"),
        ("purchase_orders", "medication_id", "medications", "medication_id"),
        ("emergencies", "ambulance_id", "ambulances", "ambulance_id"),
    ];

    for (table, column, parent_table, parent_column) in checks {
        let parents = id_set(parent_table, parent_column);
        let (headers, rows) = read_csv(&dataset.out_dir.join(format!("{table}.csv")));
        for value in column_values(&headers, &rows, column) {
            assert!(
                parents.contains(&value),
                "{table}.{column} value '{value}' not found in {parent_table}.{parent_column}"
            );
        }
    }
}

#[test]
fn id_columns_enumerate_their_pool_in_order() {
    let dataset = generate_dataset();

    let (headers, rows) = read_csv(&dataset.out_dir.join("patients.csv"));
    let ids = column_values(&headers, &rows, "patient_id");
    assert_eq!(ids.len(), 400);
    for (index, id) in ids.iter().enumerate() {
        assert_eq!(id, &format!("PAT{:07}", index + 1));
    }

    let (headers, rows) = read_csv(&dataset.out_dir.join("departments.csv"));
    let ids = column_values(&headers, &rows, "department_id");
    assert_eq!(ids.len(), 12);
    assert_eq!(ids[0], "DEP0001");
    assert_eq!(ids[11], "DEP0012");
}

#[test]
fn bill_net_payable_matches_component_arithmetic() {
    let dataset = generate_dataset();
    let (headers, rows) = read_csv(&dataset.out_dir.join("bills.csv"));

    let parse = |values: Vec<String>| -> Vec<f64> {
        values
            .into_iter()
            .map(|value| value.parse().expect("numeric cell"))
            .collect()
    };
    let totals = parse(column_values(&headers, &rows, "total_amount"));
    let discounts = parse(column_values(&headers, &rows, "discount"));
    let taxes = parse(column_values(&headers, &rows, "tax"));
    let nets = parse(column_values(&headers, &rows, "net_payable"));

    for i in 0..rows.len() {
        let expected = totals[i] - discounts[i] + taxes[i];
        assert!(
            (nets[i] - expected).abs() < 0.005,
            "row {i}: net {} vs {} - {} + {}",
            nets[i],
            totals[i],
            discounts[i],
            taxes[i]
        );
    }
}

#[test]
fn purchase_order_total_cost_matches_component_arithmetic() {
    let dataset = generate_dataset();
    let (headers, rows) = read_csv(&dataset.out_dir.join("purchase_orders.csv"));

    let quantities = column_values(&headers, &rows, "quantity");
    let unit_costs = column_values(&headers, &rows, "unit_cost");
    let totals = column_values(&headers, &rows, "total_cost");

    for i in 0..rows.len() {
        let quantity: f64 = quantities[i].parse().expect("quantity");
        let unit: f64 = unit_costs[i].parse().expect("unit cost");
        let total: f64 = totals[i].parse().expect("total cost");
        assert!(
            (total - quantity * unit).abs() < 0.005,
            "row {i}: total {total} vs {quantity} * {unit}"
        );
    }
}

#[test]
fn every_catalog_table_is_written_with_its_header() {
    let dataset = generate_dataset();

    for table in medsynth_generate::catalog::hospital_tables() {
        let path = dataset.out_dir.join(format!("{}.csv", table.name));
        let (headers, rows) = read_csv(&path);
        assert_eq!(headers, table.column_names(), "{} header", table.name);
        assert!(!rows.is_empty(), "{} should not be empty", table.name);
        for row in &rows {
            assert_eq!(row.len(), table.columns.len(), "{} row width", table.name);
        }
    }
}

use chrono::NaiveDate;

/// Scalar cell value produced for a column.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl Value {
    /// Render the value for CSV output; floats honor the column's decimal
    /// scale.
    pub fn to_csv(&self, scale: Option<u32>) -> String {
        match self {
            Value::Int(value) => value.to_string(),
            Value::Float(value) => match scale {
                Some(scale) => format!("{value:.prec$}", prec = scale as usize),
                None => value.to_string(),
            },
            Value::Text(value) => value.clone(),
            Value::Date(value) => value.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_rendering_honors_scale() {
        let value = Value::Float(1234.5);
        assert_eq!(value.to_csv(Some(2)), "1234.50");
        assert_eq!(value.to_csv(None), "1234.5");
    }

    #[test]
    fn date_rendering_is_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(Value::Date(date).to_csv(None), "2024-03-09");
    }
}

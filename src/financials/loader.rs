//! Load property records from portfolio CSV exports

use super::PropertyFinancials;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the portfolio export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "PurchasePrice")]
    purchase_price: f64,
    #[serde(rename = "CurrentValue", default)]
    current_value: f64,
    #[serde(rename = "MonthlyRent", default)]
    monthly_rent: f64,
    #[serde(rename = "MonthlyExpenses", default)]
    monthly_expenses: Option<f64>,
}

impl CsvRow {
    fn to_financials(self) -> Result<PropertyFinancials, Box<dyn Error>> {
        let financials = PropertyFinancials::new(
            self.purchase_price,
            self.current_value,
            self.monthly_rent,
            self.monthly_expenses,
        );
        financials.validate()?;
        Ok(financials)
    }
}

/// Load all property records from a CSV file
pub fn load_properties<P: AsRef<Path>>(path: P) -> Result<Vec<PropertyFinancials>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut properties = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        properties.push(row.to_financials()?);
    }

    log::info!("loaded {} property records", properties.len());
    Ok(properties)
}

/// Load property records from any reader (e.g., string buffer, upload stream)
pub fn load_properties_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<PropertyFinancials>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut properties = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        properties.push(row.to_financials()?);
    }

    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
PurchasePrice,CurrentValue,MonthlyRent,MonthlyExpenses
300000,300000,2000,700
450000,480000,2800,
125000,0,1400,490
";

    #[test]
    fn test_load_from_reader() {
        let properties = load_properties_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(properties.len(), 3);

        let p1 = &properties[0];
        assert_eq!(p1.purchase_price, 300_000.0);
        assert_eq!(p1.monthly_expenses, Some(700.0));

        // Blank expenses column deserializes to None
        let p2 = &properties[1];
        assert_eq!(p2.monthly_expenses, None);

        // Zero current value kept as-is; fallback happens at calculation time
        let p3 = &properties[2];
        assert_eq!(p3.current_value, 0.0);
        assert_eq!(p3.effective_value(), 125_000.0);
    }

    #[test]
    fn test_negative_row_rejected() {
        let bad = "\
PurchasePrice,CurrentValue,MonthlyRent,MonthlyExpenses
300000,300000,-2000,700
";
        assert!(load_properties_from_reader(bad.as_bytes()).is_err());
    }
}

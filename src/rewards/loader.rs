//! Load reward profile catalogs from CSV
//!
//! Expected columns: `Name,Groceries,Gas,Dining,Travel,Other`, rates in percent.

use super::catalog::{CategoryAmounts, RewardProfile};
use crate::error::{CalcError, Result};
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching the catalog columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Groceries")]
    groceries: f64,
    #[serde(rename = "Gas")]
    gas: f64,
    #[serde(rename = "Dining")]
    dining: f64,
    #[serde(rename = "Travel")]
    travel: f64,
    #[serde(rename = "Other")]
    other: f64,
}

impl CsvRow {
    fn into_profile(self) -> Result<RewardProfile> {
        let rates = CategoryAmounts::new(self.groceries, self.gas, self.dining, self.travel, self.other);
        rates.validate("reward rate")?;
        Ok(RewardProfile::new(self.name.trim(), rates))
    }
}

/// Load a catalog from a CSV file, keeping file order
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<RewardProfile>> {
    let path = path.as_ref();
    let catalog = read_catalog(Reader::from_path(path)?)?;
    log::info!("loaded {} reward profiles from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Load a catalog from any reader (e.g., string buffer, request body)
pub fn load_catalog_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<RewardProfile>> {
    read_catalog(Reader::from_reader(reader))
}

fn read_catalog<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<RewardProfile>> {
    let mut catalog = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        catalog.push(row.into_profile()?);
    }

    if catalog.is_empty() {
        return Err(CalcError::EmptyCatalog);
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG: &str = "\
Name,Groceries,Gas,Dining,Travel,Other
Grocery Plus,6,3,1,1,1
Road Warrior,1,5,1,3,1
";

    #[test]
    fn test_load_from_reader() {
        let catalog = load_catalog_from_reader(CATALOG.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "Grocery Plus");
        assert_eq!(catalog[0].rates.groceries, 6.0);
        assert_eq!(catalog[1].rates.gas, 5.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog[1].name, "Road Warrior");
    }

    #[test]
    fn test_negative_rate_rejected() {
        let csv = "Name,Groceries,Gas,Dining,Travel,Other\nBad,1,-1,1,1,1\n";
        assert!(matches!(
            load_catalog_from_reader(csv.as_bytes()),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_header_only_is_empty_catalog() {
        let csv = "Name,Groceries,Gas,Dining,Travel,Other\n";
        assert!(matches!(load_catalog_from_reader(csv.as_bytes()), Err(CalcError::EmptyCatalog)));
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(load_catalog("does/not/exist.csv").is_err());
    }
}

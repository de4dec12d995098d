//! Assembly of normalized specimen records from data-sheet rows.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::input::{ColumnMap, Row, SheetTable};
use crate::normalize::{
    CostPolicy, CountryResolver, DiscoveryYear, coerce_cost, coerce_year, extract_elements,
    strip_markup,
};

/// One normalized specimen.
///
/// Serialized field names are the keys consumed by the catalog front end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecimenRecord {
    pub id: String,
    #[serde(rename = "name_ru")]
    pub name: String,
    #[serde(rename = "name_other")]
    pub other_names: String,
    pub ima_name: String,
    #[serde(rename = "abbr")]
    pub abbreviation: String,
    pub class: String,
    pub formula_html: String,
    pub formula_text: String,
    pub elements: Vec<String>,
    #[serde(rename = "syngony")]
    pub crystal_system: String,
    pub locality: String,
    pub country_code: String,
    pub country: String,
    pub discovery_year: DiscoveryYear,
    pub cost: Option<f64>,
    #[serde(rename = "ue_band")]
    pub cost_band: String,
}

/// Turns data-sheet rows into [`SpecimenRecord`]s.
pub struct RecordAssembler<'a> {
    columns: &'a ColumnMap,
    resolver: &'a CountryResolver,
    cost_policy: CostPolicy,
}

impl<'a> RecordAssembler<'a> {
    pub fn new(columns: &'a ColumnMap, resolver: &'a CountryResolver, cost_policy: CostPolicy) -> Self {
        Self {
            columns,
            resolver,
            cost_policy,
        }
    }

    /// Assemble every row with an identifier, preserving sheet order.
    pub fn assemble(&self, table: &SheetTable) -> Result<Vec<SpecimenRecord>> {
        for column in self.columns.check(table)? {
            warn!(sheet = %table.name, column = %column, "column missing, values read as blank");
        }

        let mut records = Vec::with_capacity(table.row_count());
        for (index, row) in table.rows().enumerate() {
            match self.assemble_row(&row)? {
                Some(record) => records.push(record),
                None => debug!(row = index + 2, "skipping row without identifier"),
            }
        }

        info!(
            records = records.len(),
            skipped = table.row_count() - records.len(),
            "assembled records"
        );
        Ok(records)
    }

    /// Normalize a single row; `None` when the identifier is blank.
    pub fn assemble_row(&self, row: &Row<'_>) -> Result<Option<SpecimenRecord>> {
        let c = self.columns;

        let id = row.text(&c.id);
        if id.is_empty() {
            return Ok(None);
        }

        let formula_html = row.raw_text(&c.formula);
        let formula_text = strip_markup(row.get(&c.formula).map(|_| formula_html.as_str()));
        let elements = extract_elements(&formula_text);

        let country_code = row.text(&c.country);
        let country = self.resolver.resolve(&country_code);

        let cost = coerce_cost(row.get(&c.cost), self.cost_policy, &id)?;

        Ok(Some(SpecimenRecord {
            name: row.text(&c.name),
            other_names: row.text(&c.other_names),
            ima_name: row.text(&c.ima_name),
            abbreviation: row.text(&c.abbreviation),
            class: row.text(&c.class),
            formula_html,
            formula_text,
            elements,
            crystal_system: row.text(&c.crystal_system),
            locality: row.text(&c.locality),
            country_code,
            country,
            discovery_year: coerce_year(row.get(&c.discovery_year)),
            cost,
            cost_band: row.text(&c.cost_band),
            id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Cell;
    use crate::normalize::NationLookup;

    fn resolver() -> CountryResolver {
        let lookup: NationLookup = [("RUS", "Россия"), ("GBR", "Англия")]
            .into_iter()
            .map(|(c, n)| (c.to_string(), n.to_string()))
            .collect();
        CountryResolver::new(lookup)
    }

    fn sheet(rows: Vec<Vec<Cell>>) -> SheetTable {
        let headers = ["col-ID", "Название", "Класс", "Формула", "Страна", "Год открытия", "Стоимость"];
        SheetTable::new("data", headers.iter().map(|h| h.to_string()).collect(), rows)
    }

    #[test]
    fn test_assemble_row_fields() {
        let table = sheet(vec![vec![
            Cell::from(" Q-1 "),
            Cell::from("Кварц "),
            Cell::from("Оксиды"),
            Cell::from("SiO<sub>2</sub> "),
            Cell::from("GBR"),
            Cell::Number(1850.0),
            Cell::Number(120.0),
        ]]);
        let columns = ColumnMap::default();
        let resolver = resolver();
        let records = RecordAssembler::new(&columns, &resolver, CostPolicy::Strict)
            .assemble(&table)
            .unwrap();

        let record = &records[0];
        assert_eq!(record.id, "Q-1");
        assert_eq!(record.name, "Кварц");
        assert_eq!(record.formula_html, "SiO<sub>2</sub> ");
        assert_eq!(record.formula_text, "SiO2");
        assert_eq!(record.elements, vec!["Si", "O"]);
        assert_eq!(record.country_code, "GBR");
        assert_eq!(record.country, "Великобритания");
        assert_eq!(record.discovery_year, DiscoveryYear::Integer(1850));
        assert_eq!(record.cost, Some(120.0));
        // Columns absent from the sheet read as blank
        assert_eq!(record.locality, "");
        assert_eq!(record.cost_band, "");
    }

    #[test]
    fn test_rows_without_identifier_skipped() {
        let table = sheet(vec![
            vec![Cell::from("A")],
            vec![Cell::Empty, Cell::from("Безымянный")],
            vec![Cell::from("   "), Cell::from("Пробел")],
            vec![Cell::Number(3.0)],
        ]);
        let columns = ColumnMap::default();
        let resolver = resolver();
        let records = RecordAssembler::new(&columns, &resolver, CostPolicy::Strict)
            .assemble(&table)
            .unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "3"]);
    }

    #[test]
    fn test_invalid_cost_aborts_in_strict_mode() {
        let table = sheet(vec![vec![
            Cell::from("A"),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::from("n/a"),
        ]]);
        let columns = ColumnMap::default();
        let resolver = resolver();

        let strict = RecordAssembler::new(&columns, &resolver, CostPolicy::Strict);
        assert!(strict.assemble(&table).is_err());

        let lenient = RecordAssembler::new(&columns, &resolver, CostPolicy::Lenient);
        let records = lenient.assemble(&table).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].cost, None);
    }

    #[test]
    fn test_record_json_keys() {
        let table = sheet(vec![vec![Cell::from("A")]]);
        let columns = ColumnMap::default();
        let resolver = resolver();
        let records = RecordAssembler::new(&columns, &resolver, CostPolicy::Strict)
            .assemble(&table)
            .unwrap();

        let json = serde_json::to_string(&records[0]).unwrap();
        let keys = [
            "id", "name_ru", "name_other", "ima_name", "abbr", "class", "formula_html",
            "formula_text", "elements", "syngony", "locality", "country_code", "country",
            "discovery_year", "cost", "ue_band",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(&format!("\"{}\":", k)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["discovery_year"].is_null());
        assert!(value["cost"].is_null());
    }
}

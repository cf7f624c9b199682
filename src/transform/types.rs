//! Period table types

use crate::types::columns;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One normalized period record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeriodRow {
    /// Period identifier (`Id`)
    pub id_periodo: Option<i64>,
    /// Period code, e.g. "202401" (`Codigo`)
    pub codigo_periodo: Option<String>,
    /// Display name, e.g. "janeiro 2024" (`Nome`)
    pub nome_periodo: Option<String>,
    /// Whether the period's data is published (`Disponivel`)
    pub disponivel: Option<bool>,
    /// Release date-time; `None` when absent or unparseable (`DataLiberacao`)
    pub data_liberacao: Option<NaiveDateTime>,
}

/// Ordered, immutable sequence of period rows
///
/// Row position is the only index; it always runs `0..len` in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeriodTable {
    rows: Vec<PeriodRow>,
}

impl PeriodTable {
    /// Create a table from rows in source order
    pub fn new(rows: Vec<PeriodRow>) -> Self {
        Self { rows }
    }

    /// All rows
    pub fn rows(&self) -> &[PeriodRow] {
        &self.rows
    }

    /// Row at `index`
    pub fn get(&self, index: usize) -> Option<&PeriodRow> {
        self.rows.get(index)
    }

    /// The first `n` rows (fewer if the table is shorter)
    pub fn head(&self, n: usize) -> &[PeriodRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        columns::ALL.len()
    }

    /// Column names in persisted order
    pub fn column_names(&self) -> &'static [&'static str] {
        &columns::ALL
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

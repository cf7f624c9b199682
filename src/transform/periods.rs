//! Raw response → period table

use super::coerce::{json_type_name, to_bool, to_datetime, to_i64, to_string};
use super::types::{PeriodRow, PeriodTable};
use crate::error::TransformError;
use crate::types::{columns, source_fields, JsonValue, RawResponse, PERIODS_PATH};
use tracing::{debug, info, warn};

/// Rows shown in the post-transform preview
const PREVIEW_ROWS: usize = 5;

/// Reshape the raw API document into a [`PeriodTable`]
///
/// Descends `Periodos` → `Periodos`, builds one row per record in source order,
/// renames the five known fields and drops everything else. Release dates that
/// fail to parse become `None`; every other structural problem aborts.
pub fn transform(raw: &RawResponse) -> Result<PeriodTable, TransformError> {
    let records = extract_periods(raw)?;

    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| build_row(index, record))
        .collect::<Result<Vec<_>, _>>()?;

    let table = PeriodTable::new(rows);

    info!(
        "Period table created: {} rows x {} columns",
        table.num_rows(),
        table.num_columns()
    );
    for (index, row) in table.head(PREVIEW_ROWS).iter().enumerate() {
        debug!(index, ?row, "preview");
    }

    Ok(table)
}

/// Walk the fixed key path down to the non-empty records array
fn extract_periods(raw: &JsonValue) -> Result<&[JsonValue], TransformError> {
    let mut current = raw;
    let mut walked: Vec<&str> = Vec::with_capacity(PERIODS_PATH.len());

    for key in PERIODS_PATH {
        let JsonValue::Object(obj) = current else {
            return Err(TransformError::UnexpectedType {
                path: display_path(&walked),
                expected: "object",
                found: json_type_name(current),
            });
        };

        walked.push(key);
        current = match obj.get(key) {
            None | Some(JsonValue::Null) => {
                return Err(TransformError::MissingField {
                    path: display_path(&walked),
                })
            }
            Some(value) => value,
        };
    }

    let path = display_path(&walked);
    match current {
        JsonValue::Array(records) if records.is_empty() => {
            Err(TransformError::EmptyPeriods { path })
        }
        JsonValue::Array(records) => Ok(records.as_slice()),
        other => Err(TransformError::UnexpectedType {
            path,
            expected: "array",
            found: json_type_name(other),
        }),
    }
}

fn display_path(keys: &[&str]) -> String {
    if keys.is_empty() {
        "$".to_string()
    } else {
        keys.join(".")
    }
}

/// Build one row from one source record
fn build_row(index: usize, record: &JsonValue) -> Result<PeriodRow, TransformError> {
    let JsonValue::Object(obj) = record else {
        return Err(TransformError::InvalidRecord {
            index,
            found: json_type_name(record),
        });
    };

    let raw_date = obj.get(source_fields::RELEASE_DATE);
    let data_liberacao = to_datetime(raw_date);
    if data_liberacao.is_none() {
        if let Some(value) = raw_date.filter(|v| !v.is_null()) {
            warn!(index, %value, "Unparseable release date, storing null");
        }
    }

    Ok(PeriodRow {
        id_periodo: to_i64(index, columns::ID, obj.get(source_fields::ID))?,
        codigo_periodo: to_string(index, columns::CODE, obj.get(source_fields::CODE))?,
        nome_periodo: to_string(index, columns::NAME, obj.get(source_fields::NAME))?,
        disponivel: to_bool(index, columns::AVAILABLE, obj.get(source_fields::AVAILABLE))?,
        data_liberacao,
    })
}

//! Arrow schema for the period table
//!
//! Converts a [`PeriodTable`] into a single Arrow `RecordBatch` with the five
//! persisted columns, in order. No index column is produced.

use crate::error::WriteError;
use crate::transform::PeriodTable;
use crate::types::columns;
use arrow::array::{ArrayRef, BooleanArray, Int64Array, StringArray, TimestampMillisecondArray};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef, TimeUnit};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Schema of the persisted period table
///
/// `data_liberacao` is a timezone-naive millisecond timestamp. All columns are
/// nullable.
pub fn period_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(columns::ID, DataType::Int64, true),
        Field::new(columns::CODE, DataType::Utf8, true),
        Field::new(columns::NAME, DataType::Utf8, true),
        Field::new(columns::AVAILABLE, DataType::Boolean, true),
        Field::new(
            columns::RELEASE_DATE,
            DataType::Timestamp(TimeUnit::Millisecond, None),
            true,
        ),
    ]))
}

/// Convert the table to a RecordBatch matching [`period_schema`]
pub fn table_to_batch(table: &PeriodTable) -> Result<RecordBatch, WriteError> {
    let rows = table.rows();

    let ids: Int64Array = rows.iter().map(|r| r.id_periodo).collect();
    let codes: StringArray = rows.iter().map(|r| r.codigo_periodo.as_deref()).collect();
    let names: StringArray = rows.iter().map(|r| r.nome_periodo.as_deref()).collect();
    let available: BooleanArray = rows.iter().map(|r| r.disponivel).collect();
    let released: TimestampMillisecondArray = rows
        .iter()
        .map(|r| r.data_liberacao.map(|dt| dt.and_utc().timestamp_millis()))
        .collect();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(ids),
        Arc::new(codes),
        Arc::new(names),
        Arc::new(available),
        Arc::new(released),
    ];

    Ok(RecordBatch::try_new(period_schema(), columns)?)
}

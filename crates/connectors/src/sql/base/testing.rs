//! In-memory row and statement doubles for unit tests.

use super::{
    error::DbError,
    metadata::column::ColumnMetadata,
    params::{ParamStatement, SqlParam},
    row::ResultRow,
    temporal::OffsetTime,
};
use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(BigDecimal),
    Text(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<FixedOffset>),
    TimeTz(OffsetTime),
    Array(Vec<String>),
    /// Every read of this cell fails, like a driver choking on a malformed value.
    Broken,
}

#[derive(Debug, Default)]
pub struct MemoryRow {
    columns: Vec<ColumnMetadata>,
    cells: Vec<Cell>,
}

impl MemoryRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, type_code: i32, type_name: &str, cell: Cell) -> Self {
        self.columns.push(ColumnMetadata::new(
            name, type_code, type_name, "PUBLIC", "EVENTS",
        ));
        self.cells.push(cell);
        self
    }

    fn cell(&self, index: usize) -> Result<&Cell, DbError> {
        self.cells.get(index).ok_or(DbError::ColumnIndexOutOfBounds {
            index,
            count: self.cells.len(),
        })
    }

    fn mismatch<T>(&self, index: usize, wanted: &str) -> Result<T, DbError> {
        let column = self.column(index)?;
        Err(DbError::type_conversion(
            column.name.clone(),
            format!("cannot read {:?} as {wanted}", self.cells[index]),
        ))
    }
}

impl ResultRow for MemoryRow {
    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column(&self, index: usize) -> Result<&ColumnMetadata, DbError> {
        self.columns.get(index).ok_or(DbError::ColumnIndexOutOfBounds {
            index,
            count: self.columns.len(),
        })
    }

    fn is_null(&self, index: usize) -> Result<bool, DbError> {
        Ok(matches!(self.cell(index)?, Cell::Null))
    }

    fn get_bool(&self, index: usize) -> Result<bool, DbError> {
        match self.cell(index)? {
            Cell::Bool(v) => Ok(*v),
            _ => self.mismatch(index, "bool"),
        }
    }

    fn get_i16(&self, index: usize) -> Result<i16, DbError> {
        let value = self.get_i64(index)?;
        i16::try_from(value).map_err(|e| DbError::type_conversion("i16", e.to_string()))
    }

    fn get_i32(&self, index: usize) -> Result<i32, DbError> {
        let value = self.get_i64(index)?;
        i32::try_from(value).map_err(|e| DbError::type_conversion("i32", e.to_string()))
    }

    fn get_i64(&self, index: usize) -> Result<i64, DbError> {
        match self.cell(index)? {
            Cell::Int(v) => Ok(*v),
            _ => self.mismatch(index, "i64"),
        }
    }

    fn get_f32(&self, index: usize) -> Result<f32, DbError> {
        Ok(self.get_f64(index)? as f32)
    }

    fn get_f64(&self, index: usize) -> Result<f64, DbError> {
        match self.cell(index)? {
            Cell::Float(v) => Ok(*v),
            Cell::Int(v) => Ok(*v as f64),
            _ => self.mismatch(index, "f64"),
        }
    }

    fn get_decimal(&self, index: usize) -> Result<BigDecimal, DbError> {
        match self.cell(index)? {
            Cell::Decimal(v) => Ok(v.clone()),
            Cell::Int(v) => Ok(BigDecimal::from(*v)),
            _ => self.mismatch(index, "decimal"),
        }
    }

    fn get_string(&self, index: usize) -> Result<String, DbError> {
        match self.cell(index)? {
            Cell::Text(v) => Ok(v.clone()),
            Cell::Int(v) => Ok(v.to_string()),
            _ => self.mismatch(index, "string"),
        }
    }

    fn get_bytes(&self, index: usize) -> Result<Vec<u8>, DbError> {
        match self.cell(index)? {
            Cell::Bytes(v) => Ok(v.clone()),
            _ => self.mismatch(index, "bytes"),
        }
    }

    fn get_date(&self, index: usize) -> Result<NaiveDate, DbError> {
        match self.cell(index)? {
            Cell::Date(v) => Ok(*v),
            Cell::Timestamp(v) => Ok(v.date()),
            _ => self.mismatch(index, "date"),
        }
    }

    /// Drops the fractional second, as the warehouse driver's time accessor does.
    fn get_time(&self, index: usize) -> Result<NaiveTime, DbError> {
        match self.cell(index)? {
            Cell::Timestamp(v) => Ok(v.time().with_nanosecond(0).unwrap_or(v.time())),
            _ => self.mismatch(index, "time"),
        }
    }

    fn get_timestamp(&self, index: usize) -> Result<NaiveDateTime, DbError> {
        match self.cell(index)? {
            Cell::Timestamp(v) => Ok(*v),
            Cell::TimestampTz(v) => Ok(v.naive_local()),
            _ => self.mismatch(index, "timestamp"),
        }
    }

    fn get_timestamp_tz(&self, index: usize) -> Result<DateTime<FixedOffset>, DbError> {
        match self.cell(index)? {
            Cell::TimestampTz(v) => Ok(*v),
            _ => self.mismatch(index, "timestamp with time zone"),
        }
    }

    fn get_time_tz(&self, index: usize) -> Result<OffsetTime, DbError> {
        match self.cell(index)? {
            Cell::TimeTz(v) => Ok(*v),
            _ => self.mismatch(index, "time with time zone"),
        }
    }

    fn get_array(&self, index: usize) -> Result<Vec<String>, DbError> {
        match self.cell(index)? {
            Cell::Array(v) => Ok(v.clone()),
            _ => self.mismatch(index, "array"),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingStatement {
    params: BTreeMap<usize, SqlParam>,
}

impl RecordingStatement {
    pub fn param(&self, index: usize) -> Option<&SqlParam> {
        self.params.get(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl ParamStatement for RecordingStatement {
    fn bind(&mut self, index: usize, param: SqlParam) -> Result<(), DbError> {
        self.params.insert(index, param);
        Ok(())
    }
}

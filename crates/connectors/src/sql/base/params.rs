use super::{error::DbError, temporal::TemporalValue};
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A value bound into a parameterized statement.
///
/// Native variants map onto the driver's typed setters. `Object` hands the value to the
/// driver's generic object setter and lets it pick the wire type.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Null,
    Boolean(bool),
    SmallInt(i16),
    Int(i32),
    BigInt(i64),
    Real(f32),
    Double(f64),
    Decimal(BigDecimal),
    String(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    Object(TemporalValue),
}

/// Parameterized statement exposed by the database client. Indexes are 0-based.
pub trait ParamStatement {
    fn bind(&mut self, index: usize, param: SqlParam) -> Result<(), DbError>;
}

use super::{error::DbError, metadata::column::ColumnMetadata, temporal::OffsetTime};
use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

/// Accessor over the current row of a forward-only result set. Indexes are 0-based.
///
/// Typed getters fail when the driver cannot produce the requested type; callers decide
/// whether that failure is fatal. The `try_get_*` helpers turn a failed read into `None`.
pub trait ResultRow {
    fn column_count(&self) -> usize;

    fn column(&self, index: usize) -> Result<&ColumnMetadata, DbError>;

    /// Whether the stored value is SQL NULL.
    fn is_null(&self, index: usize) -> Result<bool, DbError>;

    fn get_bool(&self, index: usize) -> Result<bool, DbError>;
    fn get_i16(&self, index: usize) -> Result<i16, DbError>;
    fn get_i32(&self, index: usize) -> Result<i32, DbError>;
    fn get_i64(&self, index: usize) -> Result<i64, DbError>;
    fn get_f32(&self, index: usize) -> Result<f32, DbError>;
    fn get_f64(&self, index: usize) -> Result<f64, DbError>;
    fn get_decimal(&self, index: usize) -> Result<BigDecimal, DbError>;
    fn get_string(&self, index: usize) -> Result<String, DbError>;
    fn get_bytes(&self, index: usize) -> Result<Vec<u8>, DbError>;
    fn get_date(&self, index: usize) -> Result<NaiveDate, DbError>;
    fn get_time(&self, index: usize) -> Result<NaiveTime, DbError>;
    fn get_timestamp(&self, index: usize) -> Result<NaiveDateTime, DbError>;
    fn get_timestamp_tz(&self, index: usize) -> Result<DateTime<FixedOffset>, DbError>;
    fn get_time_tz(&self, index: usize) -> Result<OffsetTime, DbError>;
    fn get_array(&self, index: usize) -> Result<Vec<String>, DbError>;

    fn try_get_f64(&self, index: usize) -> Option<f64> {
        self.get_f64(index).ok()
    }

    fn try_get_decimal(&self, index: usize) -> Option<BigDecimal> {
        self.get_decimal(index).ok()
    }
}

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};
use thiserror::Error;

/// Generic SQL type codes shared by relational drivers (JDBC numbering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NativeType {
    Bit,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Float,
    Real,
    Double,
    Numeric,
    Decimal,
    Char,
    VarChar,
    LongVarChar,
    Date,
    Time,
    Timestamp,
    Binary,
    VarBinary,
    LongVarBinary,
    Null,
    Other,
    JavaObject,
    Distinct,
    Struct,
    Array,
    Blob,
    Clob,
    Ref,
    DataLink,
    Boolean,
    RowId,
    NChar,
    NVarChar,
    LongNVarChar,
    NClob,
    SqlXml,
    RefCursor,
    TimeWithTimezone,
    TimestampWithTimezone,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownNativeType {
    #[error("unknown native type code: {0}")]
    Code(i32),

    #[error("unknown native type name: {0}")]
    Name(String),
}

const ALL_TYPES: [NativeType; 39] = {
    use NativeType::*;
    [
        Bit,
        TinyInt,
        SmallInt,
        Integer,
        BigInt,
        Float,
        Real,
        Double,
        Numeric,
        Decimal,
        Char,
        VarChar,
        LongVarChar,
        Date,
        Time,
        Timestamp,
        Binary,
        VarBinary,
        LongVarBinary,
        Null,
        Other,
        JavaObject,
        Distinct,
        Struct,
        Array,
        Blob,
        Clob,
        Ref,
        DataLink,
        Boolean,
        RowId,
        NChar,
        NVarChar,
        LongNVarChar,
        NClob,
        SqlXml,
        RefCursor,
        TimeWithTimezone,
        TimestampWithTimezone,
    ]
};

lazy_static! {
    static ref BY_CODE: HashMap<i32, NativeType> =
        ALL_TYPES.iter().map(|t| (t.code(), *t)).collect();
    static ref BY_NAME: HashMap<&'static str, NativeType> =
        ALL_TYPES.iter().map(|t| (t.name(), *t)).collect();
}

impl NativeType {
    pub fn all() -> &'static [NativeType] {
        &ALL_TYPES
    }

    pub fn from_code(code: i32) -> Result<Self, UnknownNativeType> {
        BY_CODE
            .get(&code)
            .copied()
            .ok_or(UnknownNativeType::Code(code))
    }

    /// Looks a type up by its canonical upper-case name, e.g. `TIMESTAMP_WITH_TIMEZONE`.
    pub fn from_name(name: &str) -> Result<Self, UnknownNativeType> {
        BY_NAME
            .get(name.trim().to_uppercase().as_str())
            .copied()
            .ok_or_else(|| UnknownNativeType::Name(name.to_string()))
    }

    pub fn code(&self) -> i32 {
        use NativeType::*;
        match self {
            Bit => -7,
            TinyInt => -6,
            SmallInt => 5,
            Integer => 4,
            BigInt => -5,
            Float => 6,
            Real => 7,
            Double => 8,
            Numeric => 2,
            Decimal => 3,
            Char => 1,
            VarChar => 12,
            LongVarChar => -1,
            Date => 91,
            Time => 92,
            Timestamp => 93,
            Binary => -2,
            VarBinary => -3,
            LongVarBinary => -4,
            Null => 0,
            Other => 1111,
            JavaObject => 2000,
            Distinct => 2001,
            Struct => 2002,
            Array => 2003,
            Blob => 2004,
            Clob => 2005,
            Ref => 2006,
            DataLink => 70,
            Boolean => 16,
            RowId => -8,
            NChar => -15,
            NVarChar => -9,
            LongNVarChar => -16,
            NClob => 2011,
            SqlXml => 2009,
            RefCursor => 2012,
            TimeWithTimezone => 2013,
            TimestampWithTimezone => 2014,
        }
    }

    pub fn name(&self) -> &'static str {
        use NativeType::*;
        match self {
            Bit => "BIT",
            TinyInt => "TINYINT",
            SmallInt => "SMALLINT",
            Integer => "INTEGER",
            BigInt => "BIGINT",
            Float => "FLOAT",
            Real => "REAL",
            Double => "DOUBLE",
            Numeric => "NUMERIC",
            Decimal => "DECIMAL",
            Char => "CHAR",
            VarChar => "VARCHAR",
            LongVarChar => "LONGVARCHAR",
            Date => "DATE",
            Time => "TIME",
            Timestamp => "TIMESTAMP",
            Binary => "BINARY",
            VarBinary => "VARBINARY",
            LongVarBinary => "LONGVARBINARY",
            Null => "NULL",
            Other => "OTHER",
            JavaObject => "JAVA_OBJECT",
            Distinct => "DISTINCT",
            Struct => "STRUCT",
            Array => "ARRAY",
            Blob => "BLOB",
            Clob => "CLOB",
            Ref => "REF",
            DataLink => "DATALINK",
            Boolean => "BOOLEAN",
            RowId => "ROWID",
            NChar => "NCHAR",
            NVarChar => "NVARCHAR",
            LongNVarChar => "LONGNVARCHAR",
            NClob => "NCLOB",
            SqlXml => "SQLXML",
            RefCursor => "REF_CURSOR",
            TimeWithTimezone => "TIME_WITH_TIMEZONE",
            TimestampWithTimezone => "TIMESTAMP_WITH_TIMEZONE",
        }
    }
}

impl TryFrom<i32> for NativeType {
    type Error = UnknownNativeType;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        NativeType::from_code(code)
    }
}

impl TryFrom<String> for NativeType {
    type Error = UnknownNativeType;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        NativeType::from_name(&name)
    }
}

impl From<NativeType> for String {
    fn from(native_type: NativeType) -> Self {
        native_type.name().to_string()
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

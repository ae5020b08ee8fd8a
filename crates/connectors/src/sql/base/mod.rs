pub mod cursor;
pub mod error;
pub mod extract;
pub mod metadata;
pub mod params;
pub mod row;
pub mod source;
pub mod temporal;

#[cfg(test)]
pub(crate) mod testing;

//! Access to the raw values of one guest-list row.

use std::num::ParseIntError;
use std::str::FromStr;

use csv::StringRecord;

use crate::error::{FieldError, FieldResult};
use crate::models::Price;

/// Column position of the ticket price including fees.
///
/// Eventjet uses the same header text for both price columns, so they can
/// only be told apart by position. If Eventjet reorders its columns, this
/// is the place to fix.
pub const PRICE_INCL_FEE_INDEX: usize = 16;

/// Column position of the ticket price excluding fees.
pub const PRICE_EXCL_FEE_INDEX: usize = 17;

/// Name used in errors for a column addressed by position.
pub fn positional_column_name(index: usize) -> String {
    format!("column #{}", index + 1)
}

/// One row of the guest list, borrowed from the reader.
///
/// Values are looked up by header name; the header is captured once when
/// the guest list is opened and shared by all rows.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a StringRecord,
    values: &'a StringRecord,
}

impl<'a> Row<'a> {
    pub fn new(headers: &'a StringRecord, values: &'a StringRecord) -> Self {
        Self { headers, values }
    }

    /// 1-based line of the row in the source, if known.
    pub fn line(&self) -> Option<u64> {
        self.values.position().map(|pos| pos.line())
    }

    /// Raw value of the named column.
    pub fn get(&self, name: &str) -> FieldResult<&'a str> {
        self.headers
            .iter()
            .position(|header| header == name)
            .and_then(|index| self.values.get(index))
            .ok_or_else(|| FieldError::MissingField(name.to_string()))
    }

    /// Raw value of the named column, `None` if it is empty.
    pub fn get_non_empty(&self, name: &str) -> FieldResult<Option<&'a str>> {
        self.get(name).map(|value| Some(value).filter(|v| !v.is_empty()))
    }

    /// Raw value at a fixed column position.
    pub fn get_at(&self, index: usize) -> FieldResult<&'a str> {
        self.values
            .get(index)
            .ok_or_else(|| FieldError::MissingField(positional_column_name(index)))
    }

    /// Named column coerced to an integer.
    pub fn get_int<T>(&self, name: &str) -> FieldResult<T>
    where
        T: FromStr<Err = ParseIntError>,
    {
        parse_int(name, self.get(name)?)
    }

    /// Named column coerced to an integer, `None` if it is empty.
    pub fn get_opt_int<T>(&self, name: &str) -> FieldResult<Option<T>>
    where
        T: FromStr<Err = ParseIntError>,
    {
        self.get_non_empty(name)?
            .map(|value| parse_int(name, value))
            .transpose()
    }

    /// Ticket price, read from the two positional price columns.
    pub fn price(&self) -> FieldResult<Price> {
        Ok(Price {
            incl_fee: self.get_at(PRICE_INCL_FEE_INDEX)?.to_string(),
            excl_fee: self.get_at(PRICE_EXCL_FEE_INDEX)?.to_string(),
        })
    }
}

fn parse_int<T>(field: &str, value: &str) -> FieldResult<T>
where
    T: FromStr<Err = ParseIntError>,
{
    value
        .trim()
        .parse()
        .map_err(|source| FieldError::MalformedInteger {
            field: field.to_string(),
            value: value.to_string(),
            source,
        })
}

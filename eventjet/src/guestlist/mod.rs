//! Guest-list reader.
//!
//! [`GuestList`] wraps a semicolon-delimited reader over an Eventjet
//! guest-list export and yields one [`GuestRecord`] per row. The conversion
//! of a single row is available on its own as [`map_row`].
//!
//! # Example
//!
//! ```rust,ignore
//! use eventjet::GuestList;
//!
//! let list = GuestList::new(std::fs::File::open("guestlist.csv")?)?;
//! for record in list {
//!     let record = record?;
//!     println!("{} ({})", record.email, record.ticket.code);
//! }
//! ```

pub mod columns;
pub mod row;

use std::io::{Cursor, Read};
use std::iter::FusedIterator;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::decode::{decode_content, detect_encoding};
use crate::error::{FieldResult, GuestListError, GuestListResult};
use crate::models::{Address, Event, Guest, GuestRecord, Invoice, Order, Ticket};

pub use row::{positional_column_name, Row, PRICE_EXCL_FEE_INDEX, PRICE_INCL_FEE_INDEX};

/// Options for reading a guest list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestListOptions {
    /// Field delimiter of the export.
    pub delimiter: u8,

    /// Value of a yes/no column meaning "yes". Anything else is "no".
    pub yes_token: String,

    /// Encoding of the export (auto-detect if `None`). Only used when the
    /// guest list is read from bytes or a file.
    pub encoding: Option<String>,
}

impl Default for GuestListOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            yes_token: columns::YES.to_string(),
            encoding: None,
        }
    }
}

// =============================================================================
// Row Mapping
// =============================================================================

/// Convert one row into a [`GuestRecord`].
///
/// Sub-records whose gate column is empty are omitted entirely. Columns are
/// only consulted when their sub-record is present, so e.g. a missing `PLZ`
/// column does not matter for guests without an address.
pub fn map_row(row: &Row<'_>, options: &GuestListOptions) -> FieldResult<GuestRecord> {
    let guest = match row.get_non_empty(columns::NAME)? {
        Some(_) => Some(map_guest(row)?),
        None => None,
    };

    // Eventjet prefixes mobile numbers with a single quote so spreadsheet
    // tools keep them as text.
    let mobile = row
        .get_non_empty(columns::MOBILE)?
        .map(|mobile| mobile.strip_prefix('\'').unwrap_or(mobile).to_string());

    Ok(GuestRecord {
        guest,
        mobile,
        email: row.get(columns::EMAIL)?.to_string(),
        newsletter: to_bool(row.get(columns::NEWSLETTER)?, options),
        event: map_event(row)?,
        ticket: map_ticket(row, options)?,
        order: map_order(row)?,
        code: row.get_non_empty(columns::CODE)?.map(str::to_string),
    })
}

fn map_guest(row: &Row<'_>) -> FieldResult<Guest> {
    Ok(Guest {
        salutation: row.get(columns::SALUTATION)?.to_string(),
        name: row.get(columns::NAME)?.to_string(),
        surname: row.get(columns::SURNAME)?.to_string(),
        company: row.get_non_empty(columns::COMPANY)?.map(str::to_string),
        year_of_birth: row.get_opt_int(columns::YEAR_OF_BIRTH)?,
        address: map_address(row)?,
    })
}

fn map_address(row: &Row<'_>) -> FieldResult<Option<Address>> {
    let Some(street) = row.get_non_empty(columns::STREET)? else {
        return Ok(None);
    };

    Ok(Some(Address {
        street: street.to_string(),
        zip: row.get_int(columns::ZIP)?,
        city: row.get(columns::CITY)?.to_string(),
        country: row.get(columns::COUNTRY)?.to_string(),
    }))
}

fn map_event(row: &Row<'_>) -> FieldResult<Event> {
    Ok(Event {
        id: row.get_int(columns::EVENT_ID)?,
        name: row.get(columns::EVENT_NAME)?.to_string(),
        begin: row.get(columns::EVENT_BEGIN)?.to_string(),
        end: row.get(columns::EVENT_END)?.to_string(),
    })
}

fn map_ticket(row: &Row<'_>, options: &GuestListOptions) -> FieldResult<Ticket> {
    Ok(Ticket {
        id: row.get_int(columns::TICKET_ID)?,
        code: row.get(columns::TICKET_CODE)?.to_string(),
        category: row.get(columns::TICKET_CATEGORY)?.to_string(),
        price: row.price()?,
        download: row.get(columns::TICKET_DOWNLOAD)?.to_string(),
        created: row.get(columns::TICKET_CREATED)?.to_string(),
        used: to_bool(row.get(columns::TICKET_USED)?, options),
    })
}

fn map_order(row: &Row<'_>) -> FieldResult<Option<Order>> {
    if row.get_non_empty(columns::ORDER_ID)?.is_none() {
        return Ok(None);
    }

    let invoice = match row.get_non_empty(columns::INVOICE_ID)? {
        Some(_) => Some(Invoice {
            id: row.get_int(columns::INVOICE_ID)?,
            download: row.get(columns::INVOICE_DOWNLOAD)?.to_string(),
        }),
        None => None,
    };

    Ok(Some(Order {
        id: row.get_int(columns::ORDER_ID)?,
        payment_id: row.get_opt_int(columns::PAYMENT_ID)?,
        invoice,
    }))
}

fn to_bool(value: &str, options: &GuestListOptions) -> bool {
    value == options.yes_token
}

// =============================================================================
// Guest List
// =============================================================================

/// Lazy, single-pass sequence of [`GuestRecord`]s read from an export.
///
/// Each call to `next` consumes one row. A row that fails to convert yields
/// an error; iteration may continue with the following row. Once the input
/// is exhausted, `next` keeps returning `None`.
pub struct GuestList<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    record: StringRecord,
    options: GuestListOptions,
    exhausted: bool,
}

impl<R: Read> GuestList<R> {
    /// Open a guest list with default options.
    pub fn new(reader: R) -> GuestListResult<Self> {
        Self::with_options(reader, GuestListOptions::default())
    }

    /// Open a guest list, reading the header line immediately.
    pub fn with_options(reader: R, options: GuestListOptions) -> GuestListResult<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = reader.headers()?.clone();

        let list = Self {
            reader,
            headers,
            record: StringRecord::new(),
            options,
            exhausted: false,
        };

        debug!(columns = list.headers.len(), "guest list opened");
        let missing = list.missing_columns();
        if !list.headers.is_empty() && !missing.is_empty() {
            warn!(missing = %missing.join(", "), "guest list header is incomplete");
        }

        Ok(list)
    }

    /// Header captured when the guest list was opened.
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Expected columns absent from the header.
    ///
    /// The positional price columns are reported as `column #17` and
    /// `column #18` if the header is too narrow to contain them.
    pub fn missing_columns(&self) -> Vec<String> {
        let mut missing: Vec<String> = columns::EXPECTED
            .iter()
            .filter(|name| !self.headers.iter().any(|header| header == **name))
            .map(|name| name.to_string())
            .collect();

        for index in [PRICE_INCL_FEE_INDEX, PRICE_EXCL_FEE_INDEX] {
            if index >= self.headers.len() {
                missing.push(positional_column_name(index));
            }
        }

        missing
    }

    /// Fail with [`GuestListError::MissingColumns`] unless the header is complete.
    pub fn require_columns(&self) -> GuestListResult<()> {
        let missing = self.missing_columns();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(GuestListError::MissingColumns(missing))
        }
    }

    fn map_current(&self) -> GuestListResult<GuestRecord> {
        let row = Row::new(&self.headers, &self.record);
        let line = row.line().unwrap_or_default();

        let record = map_row(&row, &self.options)
            .map_err(|source| GuestListError::Row { line, source })?;
        debug!(line, "guest-list row mapped");

        Ok(record)
    }
}

impl GuestList<Cursor<String>> {
    /// Open a guest list from raw bytes, decoding them first.
    ///
    /// The encoding is taken from `options.encoding` or detected.
    pub fn from_bytes(bytes: &[u8], options: GuestListOptions) -> GuestListResult<Self> {
        let encoding = options
            .encoding
            .clone()
            .unwrap_or_else(|| detect_encoding(bytes));
        let content = decode_content(bytes, &encoding)?;
        debug!(%encoding, bytes = bytes.len(), "guest list decoded");

        Self::with_options(Cursor::new(content), options)
    }

    /// Read and decode a guest-list file.
    pub fn from_path<P: AsRef<Path>>(path: P, options: GuestListOptions) -> GuestListResult<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(&bytes, options)
    }
}

impl<R: Read> Iterator for GuestList<R> {
    type Item = GuestListResult<GuestRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(self.map_current()),
            Ok(false) => {
                self.exhausted = true;
                None
            }
            Err(err) => {
                // Broken streams cannot be resumed; malformed rows can.
                if err.is_io_error() {
                    self.exhausted = true;
                }
                Some(Err(err.into()))
            }
        }
    }
}

impl<R: Read> FusedIterator for GuestList<R> {}

#[cfg(test)]
pub(crate) mod fixtures {
    //! A complete guest-list export to build test input from.

    pub const HEADER: [&str; 29] = [
        "Anrede",
        "Vorname",
        "Nachname",
        "Firma",
        "Geburtsjahr",
        "Stra\u{DF}e",
        "PLZ",
        "Ort",
        "Land",
        "Handynummer",
        "E-Mail",
        "Newsletter",
        "Event-ID",
        "Event",
        "Event-Beginn",
        "Event-Ende",
        "Preis",
        "Preis",
        "Ticket ID",
        "Ticket",
        "Kategorie",
        "Download Ticket",
        "Uhrzeit",
        "Benutzt",
        "Order-ID",
        "Payment-ID",
        "Rechnungs-Nr",
        "Download Rechnung",
        "Code",
    ];

    pub const VALUES: [&str; 29] = [
        "Frau",
        "Anna",
        "Muster",
        "",
        "1990",
        "Hauptstra\u{DF}e 1",
        "01067",
        "Dresden",
        "Deutschland",
        "'0171234567",
        "anna@example.org",
        "ja",
        "5",
        "Sommerfest",
        "01.07.2017 18:00",
        "02.07.2017 02:00",
        "12,50",
        "11,00",
        "1001",
        "XK7Q2",
        "Stehplatz",
        "https://eventjet.at/t/XK7Q2",
        "20.06.2017 10:11",
        "nein",
        "300",
        "400",
        "500",
        "https://eventjet.at/i/500",
        "",
    ];

    /// Export with one data row per override set. Overrides address the
    /// first column with the given name.
    pub fn csv(rows: &[&[(&str, &str)]]) -> String {
        let mut out = HEADER.join(";");
        out.push('\n');

        for overrides in rows {
            let mut values: [&str; 29] = VALUES;
            for &(name, value) in overrides.iter() {
                let index = HEADER
                    .iter()
                    .position(|header| *header == name)
                    .expect("unknown fixture column");
                values[index] = value;
            }
            out.push_str(&values.join(";"));
            out.push('\n');
        }

        out
    }

    /// Export with a single default row and one column removed entirely.
    pub fn csv_without(column: &str) -> String {
        let index = HEADER
            .iter()
            .position(|header| *header == column)
            .expect("unknown fixture column");
        let keep = |values: &[&str]| -> String {
            values
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, value)| *value)
                .collect::<Vec<_>>()
                .join(";")
        };

        format!("{}\n{}\n", keep(&HEADER[..]), keep(&VALUES[..]))
    }
}

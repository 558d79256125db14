//! Header names of the Eventjet guest-list export.
//!
//! The export is German; the names are the file's contract and are kept
//! verbatim.

pub const SALUTATION: &str = "Anrede";
pub const NAME: &str = "Vorname";
pub const SURNAME: &str = "Nachname";
pub const COMPANY: &str = "Firma";
pub const YEAR_OF_BIRTH: &str = "Geburtsjahr";
pub const STREET: &str = "Stra\u{DF}e";
pub const ZIP: &str = "PLZ";
pub const CITY: &str = "Ort";
pub const COUNTRY: &str = "Land";
pub const MOBILE: &str = "Handynummer";
pub const EMAIL: &str = "E-Mail";
pub const NEWSLETTER: &str = "Newsletter";
pub const EVENT_ID: &str = "Event-ID";
pub const EVENT_NAME: &str = "Event";
pub const EVENT_BEGIN: &str = "Event-Beginn";
pub const EVENT_END: &str = "Event-Ende";
pub const TICKET_ID: &str = "Ticket ID";
pub const TICKET_CODE: &str = "Ticket";
pub const TICKET_CATEGORY: &str = "Kategorie";
pub const TICKET_DOWNLOAD: &str = "Download Ticket";
pub const TICKET_CREATED: &str = "Uhrzeit";
pub const TICKET_USED: &str = "Benutzt";
pub const ORDER_ID: &str = "Order-ID";
pub const PAYMENT_ID: &str = "Payment-ID";
pub const INVOICE_ID: &str = "Rechnungs-Nr";
pub const INVOICE_DOWNLOAD: &str = "Download Rechnung";
pub const CODE: &str = "Code";

/// All columns looked up by name. The price columns are addressed by
/// position and therefore not listed.
pub const EXPECTED: [&str; 27] = [
    SALUTATION,
    NAME,
    SURNAME,
    COMPANY,
    YEAR_OF_BIRTH,
    STREET,
    ZIP,
    CITY,
    COUNTRY,
    MOBILE,
    EMAIL,
    NEWSLETTER,
    EVENT_ID,
    EVENT_NAME,
    EVENT_BEGIN,
    EVENT_END,
    TICKET_ID,
    TICKET_CODE,
    TICKET_CATEGORY,
    TICKET_DOWNLOAD,
    TICKET_CREATED,
    TICKET_USED,
    ORDER_ID,
    PAYMENT_ID,
    INVOICE_ID,
    INVOICE_DOWNLOAD,
    CODE,
];

/// Value of a yes/no column meaning "yes".
pub const YES: &str = "ja";

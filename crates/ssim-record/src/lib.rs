//! Fixed-width SSIM record layout and encoding.
//!
//! Every line of an SSIM dataset is exactly [`RECORD_LEN`] characters.
//! Layouts are declared as tables of fields and checked at compile time to
//! tile the whole record; [`place_field`] is the one primitive that writes a
//! value into a record.

mod boilerplate;
mod encoder;
mod error;
pub mod layout;
mod record;

pub use boilerplate::{
    FILLER_CHAR, HEADER_TITLE, MULTI_AIRLINE_SCOPE, carrier_record, filler_record, header_record,
    trailer_record,
};
pub use encoder::{LEG_RECORD_TYPE, LEG_SEQUENCE, LegEncoder};
pub use error::{RecordError, Result};
pub use layout::{Align, FieldSpec, LEG_LAYOUT, LegField, RECORD_LEN, RecordBuffer, place_field};
pub use record::{EncodedRecord, check_record};

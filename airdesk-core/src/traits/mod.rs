//! Form-facing trait definitions

mod editable_fields;
mod validator;

pub use editable_fields::{EditableFields, FlightField, UserField};
pub use validator::{ArrivalNotBeforeDeparture, RequiredFields, Validator};

//! Field-level access to form drafts

use std::fmt::Debug;

use airdesk_api::{Address, Flight, FlightDraft, User, UserDraft};

/// A value edited one field at a time.
///
/// Implemented for both the create drafts and the full records, so the same
/// form machinery serves the create dialog and the edit dialog.
pub trait EditableFields: Clone + Debug + Send + Sync + 'static {
    /// Field identifier.
    type Field: Copy + Eq + Debug + Send + Sync + 'static;

    /// Every field, in display order.
    fn fields() -> &'static [Self::Field];

    /// Wire name of a field (`flightNumber`, `email`, ...).
    fn field_name(field: Self::Field) -> &'static str;

    fn is_required(field: Self::Field) -> bool;

    /// Current value; absent optional values read as empty.
    fn value(&self, field: Self::Field) -> String;

    /// Replace exactly one field.
    fn set_value(&mut self, field: Self::Field, value: String);

    /// Look up a field by its wire name.
    fn parse_field(name: &str) -> Option<Self::Field> {
        Self::fields()
            .iter()
            .copied()
            .find(|f| Self::field_name(*f) == name)
    }

    /// Required fields that are blank.
    fn missing_required(&self) -> Vec<Self::Field> {
        Self::fields()
            .iter()
            .copied()
            .filter(|f| Self::is_required(*f) && self.value(*f).trim().is_empty())
            .collect()
    }
}

// ============ Flights ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightField {
    FlightNumber,
    DepartureDate,
    ArrivalDate,
    DepartureAirport,
    ArrivalAirport,
}

const FLIGHT_FIELDS: &[FlightField] = &[
    FlightField::FlightNumber,
    FlightField::DepartureDate,
    FlightField::ArrivalDate,
    FlightField::DepartureAirport,
    FlightField::ArrivalAirport,
];

macro_rules! impl_flight_fields {
    ($ty:ty) => {
        impl EditableFields for $ty {
            type Field = FlightField;

            fn fields() -> &'static [FlightField] {
                FLIGHT_FIELDS
            }

            fn field_name(field: FlightField) -> &'static str {
                match field {
                    FlightField::FlightNumber => "flightNumber",
                    FlightField::DepartureDate => "departureDate",
                    FlightField::ArrivalDate => "arrivalDate",
                    FlightField::DepartureAirport => "departureAirport",
                    FlightField::ArrivalAirport => "arrivalAirport",
                }
            }

            fn is_required(_field: FlightField) -> bool {
                true
            }

            fn value(&self, field: FlightField) -> String {
                match field {
                    FlightField::FlightNumber => self.flight_number.clone(),
                    FlightField::DepartureDate => self.departure_date.clone(),
                    FlightField::ArrivalDate => self.arrival_date.clone(),
                    FlightField::DepartureAirport => self.departure_airport.clone(),
                    FlightField::ArrivalAirport => self.arrival_airport.clone(),
                }
            }

            fn set_value(&mut self, field: FlightField, value: String) {
                match field {
                    FlightField::FlightNumber => self.flight_number = value,
                    FlightField::DepartureDate => self.departure_date = value,
                    FlightField::ArrivalDate => self.arrival_date = value,
                    FlightField::DepartureAirport => self.departure_airport = value,
                    FlightField::ArrivalAirport => self.arrival_airport = value,
                }
            }
        }
    };
}

impl_flight_fields!(FlightDraft);
impl_flight_fields!(Flight);

// ============ Users ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Name,
    Email,
    Password,
    Phone,
    Role,
    Street,
    Neighborhood,
    Zipcode,
    Number,
    Complement,
    City,
    State,
}

const USER_FIELDS: &[UserField] = &[
    UserField::Name,
    UserField::Email,
    UserField::Password,
    UserField::Phone,
    UserField::Role,
    UserField::Street,
    UserField::Neighborhood,
    UserField::Zipcode,
    UserField::Number,
    UserField::Complement,
    UserField::City,
    UserField::State,
];

fn address_value(address: Option<&Address>, field: UserField) -> String {
    let Some(a) = address else {
        return String::new();
    };
    match field {
        UserField::Street => a.street.clone(),
        UserField::Neighborhood => a.neighborhood.clone(),
        UserField::Zipcode => a.zipcode.clone(),
        UserField::Number => a.number.clone(),
        UserField::Complement => a.complement.clone(),
        UserField::City => a.city.clone(),
        UserField::State => a.state.clone(),
        _ => String::new(),
    }
}

/// Write one address field; an address left entirely blank becomes `None`.
fn set_address_value(address: &mut Option<Address>, field: UserField, value: String) {
    let a = address.get_or_insert_with(Address::default);
    match field {
        UserField::Street => a.street = value,
        UserField::Neighborhood => a.neighborhood = value,
        UserField::Zipcode => a.zipcode = value,
        UserField::Number => a.number = value,
        UserField::Complement => a.complement = value,
        UserField::City => a.city = value,
        UserField::State => a.state = value,
        _ => {}
    }
    if a.is_blank() {
        *address = None;
    }
}

macro_rules! impl_user_fields {
    ($ty:ty) => {
        impl EditableFields for $ty {
            type Field = UserField;

            fn fields() -> &'static [UserField] {
                USER_FIELDS
            }

            fn field_name(field: UserField) -> &'static str {
                match field {
                    UserField::Name => "name",
                    UserField::Email => "email",
                    UserField::Password => "password",
                    UserField::Phone => "phone",
                    UserField::Role => "role",
                    UserField::Street => "street",
                    UserField::Neighborhood => "neighborhood",
                    UserField::Zipcode => "zipcode",
                    UserField::Number => "number",
                    UserField::Complement => "complement",
                    UserField::City => "city",
                    UserField::State => "state",
                }
            }

            fn is_required(field: UserField) -> bool {
                matches!(
                    field,
                    UserField::Name | UserField::Email | UserField::Password | UserField::Role
                )
            }

            fn value(&self, field: UserField) -> String {
                match field {
                    UserField::Name => self.name.clone(),
                    UserField::Email => self.email.clone(),
                    UserField::Password => self.password.clone(),
                    UserField::Phone => self.phone.clone().unwrap_or_default(),
                    UserField::Role => self.role.clone(),
                    _ => address_value(self.address.as_ref(), field),
                }
            }

            fn set_value(&mut self, field: UserField, value: String) {
                match field {
                    UserField::Name => self.name = value,
                    UserField::Email => self.email = value,
                    UserField::Password => self.password = value,
                    UserField::Phone => {
                        self.phone = if value.trim().is_empty() {
                            None
                        } else {
                            Some(value)
                        };
                    }
                    UserField::Role => self.role = value,
                    _ => set_address_value(&mut self.address, field, value),
                }
            }
        }
    };
}

impl_user_fields!(UserDraft);
impl_user_fields!(User);

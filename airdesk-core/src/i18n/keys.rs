//! Translation key definitions
//!
//! Grouping:
//! 1. **Per resource** (`flights.*`, `users.*`, `records.*`): notification titles per operation
//! 2. **Forms** (`form.*`): draft validation and submit messages
//! 3. **Field labels** (`flight_fields.*`, `user_fields.*`)
//! 4. **Shared words** (`common.*`)

/// Root of all translated texts
pub struct Translations {
    pub common: CommonTexts,
    pub flights: ResourceTexts,
    pub users: ResourceTexts,
    /// Fallback for collections without dedicated texts
    pub records: ResourceTexts,
    pub form: FormTexts,
    pub flight_fields: FlightFieldTexts,
    pub user_fields: UserFieldTexts,
}

impl Translations {
    /// Texts for a resource collection name (`flights`, `users`, ...)
    pub fn resource(&self, name: &str) -> &ResourceTexts {
        match name {
            "flights" => &self.flights,
            "users" => &self.users,
            _ => &self.records,
        }
    }
}

pub struct CommonTexts {
    pub loading: &'static str,
    pub no_data: &'static str,
    pub page: &'static str,
    pub of: &'static str,
    pub id: &'static str,
}

/// Static message per operation type. No error codes are shown to users.
pub struct ResourceTexts {
    pub loaded: &'static str,
    pub fetch_failed: &'static str,
    pub fetch_failed_description: &'static str,
    pub load_failed: &'static str,
    pub created: &'static str,
    pub create_failed: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
}

pub struct FormTexts {
    pub required_missing: &'static str,
    pub arrival_before_departure: &'static str,
    pub invalid_date: &'static str,
}

pub struct FlightFieldTexts {
    pub flight_number: &'static str,
    pub departure_date: &'static str,
    pub arrival_date: &'static str,
    pub departure_airport: &'static str,
    pub arrival_airport: &'static str,
}

pub struct UserFieldTexts {
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub phone: &'static str,
    pub role: &'static str,
    pub street: &'static str,
    pub neighborhood: &'static str,
    pub zipcode: &'static str,
    pub number: &'static str,
    pub complement: &'static str,
    pub city: &'static str,
    pub state: &'static str,
}

//! English translations (en-US)

use super::keys::{
    CommonTexts, FlightFieldTexts, FormTexts, ResourceTexts, Translations, UserFieldTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        loading: "Loading...",
        no_data: "No data",
        page: "Page",
        of: "of",
        id: "ID",
    },

    flights: ResourceTexts {
        loaded: "Flights loaded",
        fetch_failed: "Failed to fetch flights!",
        fetch_failed_description: "An error occurred while fetching the flights.",
        load_failed: "Failed to load flight!",
        created: "Flight created successfully!",
        create_failed: "Error creating flight!",
        updated: "Flight updated successfully!",
        update_failed: "Error updating flight!",
        deleted: "Flight deleted successfully!",
        delete_failed: "Error deleting flight!",
    },

    users: ResourceTexts {
        loaded: "Users loaded",
        fetch_failed: "Failed to fetch users!",
        fetch_failed_description: "An error occurred while fetching the users.",
        load_failed: "Failed to load user!",
        created: "User created successfully!",
        create_failed: "Error creating user!",
        updated: "User updated successfully!",
        update_failed: "Error updating user!",
        deleted: "User deleted successfully!",
        delete_failed: "Error deleting user!",
    },

    records: ResourceTexts {
        loaded: "Records loaded",
        fetch_failed: "Failed to fetch records!",
        fetch_failed_description: "An error occurred while fetching the records.",
        load_failed: "Failed to load record!",
        created: "Record created successfully!",
        create_failed: "Error creating record!",
        updated: "Record updated successfully!",
        update_failed: "Error updating record!",
        deleted: "Record deleted successfully!",
        delete_failed: "Error deleting record!",
    },

    form: FormTexts {
        required_missing: "Please fill in all required fields",
        arrival_before_departure: "Arrival date must not be before departure date",
        invalid_date: "Dates must use the YYYY-MM-DD format",
    },

    flight_fields: FlightFieldTexts {
        flight_number: "Flight Number",
        departure_date: "Departure Date",
        arrival_date: "Arrival Date",
        departure_airport: "Departure Airport",
        arrival_airport: "Arrival Airport",
    },

    user_fields: UserFieldTexts {
        name: "Name",
        email: "Email",
        password: "Password",
        phone: "Phone",
        role: "Role",
        street: "Street",
        neighborhood: "Neighborhood",
        zipcode: "Zip Code",
        number: "Number",
        complement: "Complement",
        city: "City",
        state: "State",
    },
};

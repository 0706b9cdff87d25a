//! Pluggable draft validation

use std::marker::PhantomData;

use chrono::{NaiveDate, NaiveDateTime};

use super::editable_fields::{EditableFields, FlightField};
use crate::i18n::FormTexts;

/// A check run on the draft before it is submitted.
///
/// Returns the localized message to show when the draft is refused.
pub trait Validator<D>: Send + Sync {
    fn validate(&self, draft: &D, texts: &FormTexts) -> Result<(), String>;
}

/// Every required field is non-blank. Always applied by
/// [`FormDraft`](crate::FormDraft); exposed for callers composing their own checks.
#[derive(Debug)]
pub struct RequiredFields<D>(PhantomData<fn(&D)>);

impl<D> RequiredFields<D> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<D> Default for RequiredFields<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: EditableFields> Validator<D> for RequiredFields<D> {
    fn validate(&self, draft: &D, texts: &FormTexts) -> Result<(), String> {
        let missing = draft.missing_required();
        if missing.is_empty() {
            return Ok(());
        }
        let names: Vec<&str> = missing.into_iter().map(D::field_name).collect();
        Err(format!("{}: {}", texts.required_missing, names.join(", ")))
    }
}

/// Arrival must not come before departure.
///
/// Accepts `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM[:SS]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArrivalNotBeforeDeparture;

fn parse_moment(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

impl<D> Validator<D> for ArrivalNotBeforeDeparture
where
    D: EditableFields<Field = FlightField>,
{
    fn validate(&self, draft: &D, texts: &FormTexts) -> Result<(), String> {
        let departure = parse_moment(&draft.value(FlightField::DepartureDate));
        let arrival = parse_moment(&draft.value(FlightField::ArrivalDate));
        match (departure, arrival) {
            (Some(d), Some(a)) if a < d => Err(texts.arrival_before_departure.to_string()),
            (Some(_), Some(_)) => Ok(()),
            _ => Err(texts.invalid_date.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{texts, Language};
    use airdesk_api::FlightDraft;

    fn draft(departure: &str, arrival: &str) -> FlightDraft {
        FlightDraft {
            flight_number: "AA1".into(),
            departure_date: departure.into(),
            arrival_date: arrival.into(),
            departure_airport: "JFK".into(),
            arrival_airport: "GRU".into(),
        }
    }

    #[test]
    fn required_fields_lists_missing_names() {
        let form = &texts(Language::EnUs).form;
        let mut d = draft("2024-01-01", "2024-01-02");
        assert!(RequiredFields::new().validate(&d, form).is_ok());

        d.flight_number.clear();
        let msg = RequiredFields::new().validate(&d, form).unwrap_err();
        assert!(msg.contains("flightNumber"));
    }

    #[test]
    fn arrival_before_departure_refused() {
        let form = &texts(Language::EnUs).form;
        let v = ArrivalNotBeforeDeparture;
        assert!(v.validate(&draft("2024-01-01", "2024-01-02"), form).is_ok());
        assert!(v.validate(&draft("2024-01-01", "2024-01-01"), form).is_ok());
        assert_eq!(
            v.validate(&draft("2024-01-02", "2024-01-01"), form),
            Err(form.arrival_before_departure.to_string())
        );
    }

    #[test]
    fn datetime_inputs_accepted() {
        let form = &texts(Language::EnUs).form;
        let v = ArrivalNotBeforeDeparture;
        assert!(v
            .validate(&draft("2024-01-01T10:00", "2024-01-01T18:30"), form)
            .is_ok());
        assert!(v
            .validate(&draft("2024-01-01T10:00", "2024-01-01T08:00"), form)
            .is_err());
        assert_eq!(
            v.validate(&draft("01/01/2024", "2024-01-02"), form),
            Err(form.invalid_date.to_string())
        );
    }
}

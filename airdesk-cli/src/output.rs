//! Terminal rendering of pages, records and notifications.

use std::io::Write;

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use airdesk_api::{Flight, User};
use airdesk_core::i18n::{texts, Translations};
use airdesk_core::{Language, Notification, NotificationKind, PageWindow};

/// A record printable as one table row.
pub trait TableRow {
    fn headers(t: &Translations) -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

impl TableRow for Flight {
    fn headers(t: &Translations) -> Vec<&'static str> {
        let f = &t.flight_fields;
        vec![
            t.common.id,
            f.flight_number,
            f.departure_date,
            f.arrival_date,
            f.departure_airport,
            f.arrival_airport,
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.flight_number.clone(),
            self.departure_date.clone(),
            self.arrival_date.clone(),
            self.departure_airport.clone(),
            self.arrival_airport.clone(),
        ]
    }
}

impl TableRow for User {
    fn headers(t: &Translations) -> Vec<&'static str> {
        let f = &t.user_fields;
        vec![t.common.id, f.name, f.email, f.phone, f.role, f.city]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone().unwrap_or_default(),
            self.role.clone(),
            self.address
                .as_ref()
                .map(|a| a.city.clone())
                .unwrap_or_default(),
        ]
    }
}

/// Writes command results either as tables or as JSON.
pub struct Printer<'a> {
    out: &'a mut dyn Write,
    json: bool,
    language: Language,
    /// Output goes to an interactive terminal
    terminal: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageOutput<'r, R> {
    window: &'r PageWindow<R>,
    notifications: &'r [Notification],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordOutput<'r, R> {
    record: Option<&'r R>,
    notifications: &'r [Notification],
}

impl<'a> Printer<'a> {
    pub fn new(out: &'a mut dyn Write, json: bool, language: Language) -> Self {
        Self {
            out,
            json,
            language,
            terminal: false,
        }
    }

    #[must_use]
    pub fn on_terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    pub fn page<R: TableRow + Serialize>(
        &mut self,
        window: &PageWindow<R>,
        notifications: &[Notification],
    ) -> Result<()> {
        if self.json {
            return self.write_json(&PageOutput {
                window,
                notifications,
            });
        }
        let t = texts(self.language);
        self.table(&window.items)?;
        if window.total_pages > 0 {
            writeln!(
                self.out,
                "{} {} {} {}",
                t.common.page,
                window.page_index + 1,
                t.common.of,
                window.total_pages
            )?;
        }
        self.notifications(notifications)
    }

    pub fn record<R: TableRow + Serialize>(
        &mut self,
        record: Option<&R>,
        notifications: &[Notification],
    ) -> Result<()> {
        if self.json {
            return self.write_json(&RecordOutput {
                record,
                notifications,
            });
        }
        if let Some(record) = record {
            self.table(std::slice::from_ref(record))?;
        }
        self.notifications(notifications)
    }

    fn table<R: TableRow>(&mut self, rows: &[R]) -> Result<()> {
        let t = texts(self.language);
        if rows.is_empty() {
            writeln!(self.out, "{}", t.common.no_data)?;
            return Ok(());
        }
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(R::headers(t));
        if !self.terminal {
            table.force_no_tty();
        }
        for row in rows {
            table.add_row(row.cells());
        }
        writeln!(self.out, "{table}")?;
        Ok(())
    }

    fn notifications(&mut self, notifications: &[Notification]) -> Result<()> {
        for n in notifications {
            let mark = match n.kind {
                NotificationKind::Success => "ok",
                NotificationKind::Error => "error",
            };
            match &n.description {
                Some(d) => writeln!(self.out, "[{mark}] {} {d}", n.title)?,
                None => writeln!(self.out, "[{mark}] {}", n.title)?,
            }
        }
        Ok(())
    }

    pub fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut *self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }
}

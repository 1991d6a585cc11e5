//! Letter preview projection.
//!
//! DESIGN
//! ======
//! The preview page renders a flat view of an application in the letter's
//! wording: dates in Indonesian long form (`17 Agustus 2003`) and the letter
//! number and stamp once reserved. `to_detail` maps back so a preview can be
//! re-fed through the same pipeline; values that do not parse as dates are
//! carried through unchanged in both directions.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime};

use crate::application::{Application, ApplicationDetail, FormData, Stamp};
use crate::riwayat::ActionType;
use crate::status::ApplicationStatus;

const BULAN: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Data bound into the letter template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewData {
    pub application_id: String,
    pub status: ApplicationStatus,
    pub current_step: i32,
    pub nama: String,
    pub nim: String,
    pub email: String,
    pub departemen: String,
    pub program_studi: String,
    pub tempat_lahir: String,
    /// Indonesian long form.
    pub tanggal_lahir: String,
    pub no_hp: String,
    pub semester: Option<u32>,
    pub ipk: Option<f64>,
    pub scholarship_name: String,
    pub letter_number: Option<String>,
    pub stamp: Option<Stamp>,
    /// Issue date of the letter, Indonesian long form, once published.
    pub tanggal_surat: Option<String>,
}

impl PreviewData {
    #[must_use]
    pub fn from_detail(detail: &ApplicationDetail) -> Self {
        let form = &detail.form_data;
        let tanggal_surat = detail
            .riwayat
            .iter()
            .rev()
            .find(|entry| entry.action_type == ActionType::Publish)
            .map(|entry| format_tanggal(&entry.date));
        Self {
            application_id: detail.id.clone(),
            status: detail.status,
            current_step: detail.current_step,
            nama: form.nama_lengkap.clone(),
            nim: form.nim.clone(),
            email: form.email.clone(),
            departemen: form.departemen.clone(),
            program_studi: form.program_studi.clone(),
            tempat_lahir: form.tempat_lahir.clone(),
            tanggal_lahir: format_tanggal(&form.tanggal_lahir),
            no_hp: form.no_hp.clone(),
            semester: form.semester,
            ipk: form.ipk,
            scholarship_name: detail.scholarship_name.clone(),
            letter_number: detail.letter_number.clone(),
            stamp: detail.stamp.clone(),
            tanggal_surat,
        }
    }

    /// Preview of the letter as it would be published with this number and
    /// stamp, dated `at`. Used by UPA before committing.
    #[must_use]
    pub fn with_reservation(mut self, letter_number: Option<String>, stamp: Option<Stamp>, at: OffsetDateTime) -> Self {
        if self.letter_number.is_none() {
            self.letter_number = letter_number;
        }
        if self.stamp.is_none() {
            self.stamp = stamp;
        }
        if self.tanggal_surat.is_none() {
            self.tanggal_surat = Some(format_date(at.date()));
        }
        self
    }

    /// Map back to an application detail. Only the fields the preview carries
    /// are populated; history and attachments are left empty.
    #[must_use]
    pub fn to_detail(&self) -> ApplicationDetail {
        let form_data = FormData {
            nama_lengkap: self.nama.clone(),
            nim: self.nim.clone(),
            email: self.email.clone(),
            departemen: self.departemen.clone(),
            program_studi: self.program_studi.clone(),
            tempat_lahir: self.tempat_lahir.clone(),
            tanggal_lahir: parse_tanggal(&self.tanggal_lahir),
            no_hp: self.no_hp.clone(),
            semester: self.semester,
            ipk: self.ipk,
            ..FormData::default()
        };
        let mut detail = Application::new_draft(self.application_id.clone(), self.scholarship_name.clone(), form_data);
        detail.status = self.status;
        detail.current_step = self.current_step;
        detail.letter_number = self.letter_number.clone();
        detail.stamp_id = self.stamp.as_ref().map(|stamp| stamp.id.clone());
        detail.stamp = self.stamp.clone();
        detail
    }

    /// `Tempat, tanggal lahir` line of the letter.
    #[must_use]
    pub fn ttl(&self) -> String {
        match (self.tempat_lahir.trim(), self.tanggal_lahir.trim()) {
            ("", "") => "-".to_owned(),
            ("", tanggal) => tanggal.to_owned(),
            (tempat, "") => tempat.to_owned(),
            (tempat, tanggal) => format!("{tempat}, {tanggal}"),
        }
    }
}

/// Format an ISO `YYYY-MM-DD` date as `17 Agustus 2003`. Unparseable input is
/// returned unchanged.
#[must_use]
pub fn format_tanggal(iso: &str) -> String {
    match Date::parse(iso.trim(), format_description!("[year]-[month]-[day]")) {
        Ok(date) => format_date(date),
        Err(_) => iso.to_owned(),
    }
}

/// Whether `raw` is a valid ISO `YYYY-MM-DD` calendar date.
#[must_use]
pub fn is_iso_date(raw: &str) -> bool {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).is_ok()
}

#[must_use]
pub fn format_date(date: Date) -> String {
    let bulan = BULAN[usize::from(u8::from(date.month())) - 1];
    format!("{} {bulan} {}", date.day(), date.year())
}

/// Inverse of [`format_tanggal`]. Unparseable input is returned unchanged.
#[must_use]
pub fn parse_tanggal(formatted: &str) -> String {
    parse_long_date(formatted)
        .and_then(|date| date.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_else(|| formatted.to_owned())
}

fn parse_long_date(formatted: &str) -> Option<Date> {
    let mut parts = formatted.split_whitespace();
    let day: u8 = parts.next()?.parse().ok()?;
    let bulan = parts.next()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let index = BULAN.iter().position(|name| name.eq_ignore_ascii_case(bulan))?;
    let month = Month::try_from(u8::try_from(index + 1).ok()?).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

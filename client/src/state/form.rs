//! Multi-step submission form state for the Mahasiswa.
//!
//! DESIGN
//! ======
//! Text inputs are kept as raw strings and only parsed when a step is
//! validated or the request is built, so half-typed numbers never reach the
//! payload. Each step validates its own fields; the review step validates all
//! of them.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use workflow::preview::is_iso_date;
use workflow::{Action, ApplicationDetail, FormData, Role, available_actions};

use crate::net::types::ApplicationForm;

/// Wizard steps, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStep {
    #[default]
    DataDiri,
    DataAkademik,
    Beasiswa,
    Tinjau,
}

impl FormStep {
    pub const ALL: [Self; 4] = [Self::DataDiri, Self::DataAkademik, Self::Beasiswa, Self::Tinjau];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::DataDiri => "Data Diri",
            Self::DataAkademik => "Data Akademik",
            Self::Beasiswa => "Beasiswa",
            Self::Tinjau => "Tinjau & Ajukan",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::DataDiri => 0,
            Self::DataAkademik => 1,
            Self::Beasiswa => 2,
            Self::Tinjau => 3,
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).map(|idx| Self::ALL[idx])
    }
}

/// Editable form contents plus wizard position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    /// Set when editing an existing draft or revision.
    pub id: Option<String>,
    pub step: FormStep,
    pub scholarship_name: String,
    pub nama_lengkap: String,
    pub nim: String,
    pub email: String,
    pub no_hp: String,
    pub tempat_lahir: String,
    pub tanggal_lahir: String,
    pub departemen: String,
    pub program_studi: String,
    pub semester: String,
    pub ipk: String,
    /// Fields the form does not edit, carried through on save.
    pub base: FormData,
    /// Catatan of the revision that returned the application, if any.
    pub revision_note: Option<String>,
    pub saving: bool,
    pub error: Option<String>,
    /// Confirmation after a successful save. Failures go to `error`.
    pub notice: Option<String>,
}

impl FormState {
    /// New form prefilled with the signed-in user's name and email.
    #[must_use]
    pub fn blank(nama: &str, email: &str) -> Self {
        Self { nama_lengkap: nama.to_owned(), email: email.to_owned(), ..Self::default() }
    }

    #[must_use]
    pub fn from_detail(detail: &ApplicationDetail) -> Self {
        let form = &detail.form_data;
        Self {
            id: Some(detail.id.clone()),
            step: FormStep::DataDiri,
            scholarship_name: detail.scholarship_name.clone(),
            nama_lengkap: form.nama_lengkap.clone(),
            nim: form.nim.clone(),
            email: form.email.clone(),
            no_hp: form.no_hp.clone(),
            tempat_lahir: form.tempat_lahir.clone(),
            tanggal_lahir: form.tanggal_lahir.clone(),
            departemen: form.departemen.clone(),
            program_studi: form.program_studi.clone(),
            semester: form.semester.map(|s| s.to_string()).unwrap_or_default(),
            ipk: form.ipk.map(|ipk| ipk.to_string()).unwrap_or_default(),
            base: form.clone(),
            revision_note: detail.latest_revision_note().map(str::to_owned),
            saving: false,
            error: None,
            notice: None,
        }
    }

    /// Validate the fields on `step`. The review step checks everything.
    ///
    /// # Errors
    ///
    /// Returns the first message to show next to the form.
    pub fn validate_step(&self, step: FormStep) -> Result<(), &'static str> {
        match step {
            FormStep::DataDiri => self.validate_data_diri(),
            FormStep::DataAkademik => self.validate_data_akademik().map(|_| ()),
            FormStep::Beasiswa => self.validate_beasiswa(),
            FormStep::Tinjau => {
                self.validate_data_diri()?;
                self.validate_data_akademik()?;
                self.validate_beasiswa()
            }
        }
    }

    /// Move forward if the current step validates.
    pub fn advance(&mut self) {
        match self.validate_step(self.step) {
            Ok(()) => {
                self.error = None;
                if let Some(next) = self.step.next() {
                    self.step = next;
                }
            }
            Err(msg) => self.error = Some(msg.to_owned()),
        }
    }

    pub fn back(&mut self) {
        self.error = None;
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    /// Mark a save or submit as in flight.
    pub fn begin_save(&mut self) {
        self.saving = true;
        self.error = None;
        self.notice = None;
    }

    /// Remember the id the backend assigned, so later saves and submit
    /// retries update that application instead of creating another.
    pub fn record_saved(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// A "Simpan Draft" round trip succeeded.
    pub fn draft_saved(&mut self, id: impl Into<String>) {
        self.record_saved(id);
        self.notice = Some("Draft tersimpan.".to_owned());
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.notice = None;
    }

    /// Build a draft body without validation; unparseable numbers are dropped.
    #[must_use]
    pub fn draft_request(&self) -> ApplicationForm {
        let form_data = FormData {
            nama_lengkap: self.nama_lengkap.trim().to_owned(),
            nim: self.nim.trim().to_owned(),
            email: self.email.trim().to_owned(),
            departemen: self.departemen.trim().to_owned(),
            program_studi: self.program_studi.trim().to_owned(),
            tempat_lahir: self.tempat_lahir.trim().to_owned(),
            tanggal_lahir: self.tanggal_lahir.trim().to_owned(),
            no_hp: self.no_hp.trim().to_owned(),
            semester: self.semester.trim().parse().ok(),
            ipk: self.ipk.trim().replace(',', ".").parse().ok(),
            ..self.base.clone()
        };
        ApplicationForm { scholarship_name: self.scholarship_name.trim().to_owned(), form_data }
    }

    /// Build the submit body; every step must validate.
    ///
    /// # Errors
    ///
    /// Returns the first validation message when any step is incomplete.
    pub fn to_request(&self) -> Result<ApplicationForm, &'static str> {
        self.validate_step(FormStep::Tinjau)?;
        Ok(self.draft_request())
    }

    fn validate_data_diri(&self) -> Result<(), &'static str> {
        if self.nama_lengkap.trim().is_empty() {
            return Err("Nama lengkap wajib diisi.");
        }
        let nim = self.nim.trim();
        if nim.is_empty() || !nim.chars().all(|c| c.is_ascii_digit()) {
            return Err("NIM harus berupa angka.");
        }
        let email = self.email.trim();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err("Email tidak valid.");
        }
        let no_hp = self.no_hp.trim();
        let digits = no_hp.strip_prefix('+').unwrap_or(no_hp);
        if digits.len() < 8 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err("Nomor HP tidak valid.");
        }
        if self.tempat_lahir.trim().is_empty() {
            return Err("Tempat lahir wajib diisi.");
        }
        if !is_iso_date(&self.tanggal_lahir) {
            return Err("Tanggal lahir tidak valid.");
        }
        Ok(())
    }

    fn validate_data_akademik(&self) -> Result<(u32, f64), &'static str> {
        if self.departemen.trim().is_empty() {
            return Err("Departemen wajib diisi.");
        }
        if self.program_studi.trim().is_empty() {
            return Err("Program studi wajib diisi.");
        }
        let semester = match self.semester.trim().parse::<u32>() {
            Ok(s) if (1..=14).contains(&s) => s,
            _ => return Err("Semester harus antara 1 dan 14."),
        };
        let ipk = match self.ipk.trim().replace(',', ".").parse::<f64>() {
            Ok(ipk) if (0.0..=4.0).contains(&ipk) => ipk,
            _ => return Err("IPK harus antara 0.00 dan 4.00."),
        };
        Ok((semester, ipk))
    }

    fn validate_beasiswa(&self) -> Result<(), &'static str> {
        if self.scholarship_name.trim().is_empty() {
            return Err("Nama beasiswa wajib diisi.");
        }
        Ok(())
    }
}

/// Whether the Mahasiswa may still edit and submit `detail`.
#[must_use]
pub fn is_editable(detail: &ApplicationDetail) -> bool {
    available_actions(detail, Role::Mahasiswa).contains(&Action::Submit)
}

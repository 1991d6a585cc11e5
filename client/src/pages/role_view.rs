//! Per-role page configuration.
//!
//! DESIGN
//! ======
//! Every role shares the same dashboard and detail pages. What differs (copy,
//! which columns appear, whether the viewer can start an application) is one
//! row here, keyed by role.

#[cfg(test)]
#[path = "role_view_test.rs"]
mod role_view_test;

use workflow::{Role, RoleTable};

/// Page behaviour for one role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleView {
    pub role: Role,
    pub title: &'static str,
    pub list_heading: &'static str,
    pub empty_message: &'static str,
    /// Show the "new application" entry.
    pub can_create: bool,
    /// Show the applicant column (reviewers see other people's applications).
    pub show_applicant: bool,
    /// Show the letter number column.
    pub show_letter_number: bool,
}

const ROLE_VIEWS: [RoleView; 5] = [
    RoleView {
        role: Role::Mahasiswa,
        title: "Dashboard Mahasiswa",
        list_heading: "Pengajuan Saya",
        empty_message: "Anda belum memiliki pengajuan surat rekomendasi.",
        can_create: true,
        show_applicant: false,
        show_letter_number: true,
    },
    RoleView {
        role: Role::SupervisorAkademik,
        title: "Dashboard Supervisor Akademik",
        list_heading: "Pengajuan untuk Diverifikasi",
        empty_message: "Tidak ada pengajuan yang perlu diverifikasi.",
        can_create: false,
        show_applicant: true,
        show_letter_number: false,
    },
    RoleView {
        role: Role::ManajerTu,
        title: "Dashboard Manajer TU",
        list_heading: "Pengajuan untuk Diperiksa",
        empty_message: "Tidak ada pengajuan yang perlu diperiksa.",
        can_create: false,
        show_applicant: true,
        show_letter_number: false,
    },
    RoleView {
        role: Role::WakilDekan1,
        title: "Dashboard Wakil Dekan 1",
        list_heading: "Pengajuan untuk Disetujui",
        empty_message: "Tidak ada pengajuan yang menunggu persetujuan.",
        can_create: false,
        show_applicant: true,
        show_letter_number: false,
    },
    RoleView {
        role: Role::Upa,
        title: "Dashboard UPA",
        list_heading: "Surat untuk Diterbitkan",
        empty_message: "Tidak ada surat yang menunggu penerbitan.",
        can_create: false,
        show_applicant: true,
        show_letter_number: true,
    },
];

impl RoleView {
    #[must_use]
    pub fn for_role(role: Role) -> &'static Self {
        &ROLE_VIEWS[role.position()]
    }

    /// Dashboard subtitle, taken from the role table.
    #[must_use]
    pub fn description(&self) -> &'static str {
        RoleTable::standard().route(self.role).map_or("", |route| route.description)
    }
}

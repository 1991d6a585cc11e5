//! Workflow roles and the role/route table.
//!
//! DESIGN
//! ======
//! The role sequence is fixed; a role's position in it is the `currentStep`
//! value at which that role may act. The route table carries the per-role
//! dashboard path, label and description used by navigation.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five fixed workflow roles. Discriminants are the step at which
/// the role acts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "MAHASISWA")]
    Mahasiswa = 0,
    #[serde(rename = "SUPERVISOR_AKADEMIK")]
    SupervisorAkademik = 1,
    #[serde(rename = "MANAJER_TU")]
    ManajerTu = 2,
    #[serde(rename = "WAKIL_DEKAN_1")]
    WakilDekan1 = 3,
    #[serde(rename = "UPA")]
    Upa = 4,
}

/// The approval sequence. Index = step at which the role acts.
pub const ROLE_SEQUENCE: [Role; 5] =
    [Role::Mahasiswa, Role::SupervisorAkademik, Role::ManajerTu, Role::WakilDekan1, Role::Upa];

impl Role {
    /// Position of this role in [`ROLE_SEQUENCE`].
    #[must_use]
    pub const fn position(self) -> usize {
        self as usize
    }

    /// [`Role::position`] as a wire step value.
    #[must_use]
    pub const fn position_step(self) -> i32 {
        self as i32
    }

    /// Role at a given step in the standard table, if the step is in range.
    #[must_use]
    pub fn at_step(step: i32) -> Option<Self> {
        RoleTable::standard().resolve(step)
    }

    /// Role that acts after this one, `None` for UPA.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        ROLE_SEQUENCE.get(self.position() + 1).copied()
    }

    /// Backend identifier, e.g. `SUPERVISOR_AKADEMIK`.
    #[must_use]
    pub fn wire_id(self) -> &'static str {
        match self {
            Self::Mahasiswa => "MAHASISWA",
            Self::SupervisorAkademik => "SUPERVISOR_AKADEMIK",
            Self::ManajerTu => "MANAJER_TU",
            Self::WakilDekan1 => "WAKIL_DEKAN_1",
            Self::Upa => "UPA",
        }
    }

    /// URL segment used under `/dashboard`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Mahasiswa => "mahasiswa",
            Self::SupervisorAkademik => "supervisor-akademik",
            Self::ManajerTu => "manajer-tu",
            Self::WakilDekan1 => "wakil-dekan-1",
            Self::Upa => "upa",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        ROLE_SEQUENCE.into_iter().find(|role| role.slug() == slug)
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mahasiswa => "Mahasiswa",
            Self::SupervisorAkademik => "Supervisor Akademik",
            Self::ManajerTu => "Manajer TU",
            Self::WakilDekan1 => "Wakil Dekan 1",
            Self::Upa => "UPA",
        }
    }

    /// Dashboard root for this role.
    #[must_use]
    pub fn dashboard_path(self) -> String {
        format!("/dashboard/{}", self.slug())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned by [`Role::from_str`] for unknown identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Accepts wire identifiers, slugs and labels, case-insensitively.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        ROLE_SEQUENCE
            .into_iter()
            .find(|role| {
                role.wire_id().eq_ignore_ascii_case(needle)
                    || role.slug().eq_ignore_ascii_case(needle)
                    || role.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownRole(raw.to_owned()))
    }
}

// =============================================================================
// ROLE TABLE
// =============================================================================

/// One row of the role/route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoleRoute {
    pub role: Role,
    /// Step at which this role acts.
    pub position: usize,
    pub path: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

const STANDARD_ROUTES: [RoleRoute; 5] = [
    RoleRoute {
        role: Role::Mahasiswa,
        position: 0,
        path: "/dashboard/mahasiswa",
        label: "Mahasiswa",
        description: "Ajukan dan pantau surat rekomendasi beasiswa",
    },
    RoleRoute {
        role: Role::SupervisorAkademik,
        position: 1,
        path: "/dashboard/supervisor-akademik",
        label: "Supervisor Akademik",
        description: "Verifikasi data akademik pengajuan mahasiswa",
    },
    RoleRoute {
        role: Role::ManajerTu,
        position: 2,
        path: "/dashboard/manajer-tu",
        label: "Manajer TU",
        description: "Periksa kelengkapan administrasi pengajuan",
    },
    RoleRoute {
        role: Role::WakilDekan1,
        position: 3,
        path: "/dashboard/wakil-dekan-1",
        label: "Wakil Dekan 1",
        description: "Setujui surat rekomendasi atas nama fakultas",
    },
    RoleRoute {
        role: Role::Upa,
        position: 4,
        path: "/dashboard/upa",
        label: "UPA",
        description: "Beri nomor surat, stempel, dan terbitkan surat",
    },
];

/// Mapping from role to dashboard route and step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleTable {
    entries: Cow<'static, [RoleRoute]>,
}

impl Default for RoleTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RoleTable {
    /// The faculty's fixed table.
    #[must_use]
    pub const fn standard() -> Self {
        Self { entries: Cow::Borrowed(&STANDARD_ROUTES) }
    }

    /// Build a table from explicit rows. Steps claimed by more than one role
    /// are logged here and again whenever they are resolved.
    #[must_use]
    pub fn from_entries(entries: Vec<RoleRoute>) -> Self {
        let table = Self { entries: Cow::Owned(entries) };
        for (step, roles) in table.conflicts() {
            tracing::warn!(step, ?roles, "role table assigns one step to several roles");
        }
        table
    }

    #[must_use]
    pub fn entries(&self) -> &[RoleRoute] {
        &self.entries
    }

    #[must_use]
    pub fn route(&self, role: Role) -> Option<&RoleRoute> {
        self.entries.iter().find(|entry| entry.role == role)
    }

    /// Role that acts at `step`.
    ///
    /// If several rows claim the step, the earliest role in
    /// [`ROLE_SEQUENCE`] wins and a warning is logged.
    #[must_use]
    pub fn resolve(&self, step: i32) -> Option<Role> {
        let step = usize::try_from(step).ok()?;
        let claimants = self.claimants(step);
        if claimants.len() > 1 {
            tracing::warn!(step, ?claimants, "role table has multiple roles for one step; using the first");
        }
        claimants.first().copied()
    }

    /// Steps claimed by more than one role, each with its claimants in
    /// sequence order.
    #[must_use]
    pub fn conflicts(&self) -> Vec<(usize, Vec<Role>)> {
        let mut steps: Vec<usize> = self.entries.iter().map(|entry| entry.position).collect();
        steps.sort_unstable();
        steps.dedup();
        steps
            .into_iter()
            .map(|step| (step, self.claimants(step)))
            .filter(|(_, roles)| roles.len() > 1)
            .collect()
    }

    fn claimants(&self, step: usize) -> Vec<Role> {
        let mut roles: Vec<Role> =
            self.entries.iter().filter(|entry| entry.position == step).map(|entry| entry.role).collect();
        roles.sort_by_key(|role| role.position());
        roles.dedup();
        roles
    }
}

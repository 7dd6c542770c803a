//! # Capability Matrix
//!
//! The fixed capability vocabulary and the per-role capability set.
//!
//! ## Invariants
//! - PERM-C1: The capability set is closed; no flag outside [`Capability::ALL`]
//!   is ever consulted
//! - PERM-C2: An absent flag behaves exactly like an explicit `false`
//! - PERM-C3: [`Capability::ALL`] ordering is stable across calls

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single named capability flag, grouped by domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    // General
    /// Access the dashboard screen
    ViewDashboard,
    /// Access the standard-operating-procedure screen
    ViewSop,
    /// Access system settings
    ViewSettings,

    // Planting areas
    ViewArea,
    CreateArea,
    UpdateArea,
    DeleteArea,
    /// Move an area's legal status to Approved
    ApproveLegal,

    // Farming activity logs
    ViewFarming,
    CreateFarming,
    UpdateFarming,
    DeleteFarming,

    // Purchasing
    ViewPurchase,
    CreatePurchase,
    UpdatePurchase,
    DeletePurchase,
    /// See prices and amounts on purchase records
    ViewFinancials,

    // Staff
    ViewStaff,
    CreateStaff,
    UpdateStaff,
    DeleteStaff,
    ManageRoles,

    // Document library
    ViewDocuments,
    ManageDocuments,
}

impl Capability {
    /// Every capability, in stable declaration order.
    pub const ALL: [Capability; 24] = [
        Capability::ViewDashboard,
        Capability::ViewSop,
        Capability::ViewSettings,
        Capability::ViewArea,
        Capability::CreateArea,
        Capability::UpdateArea,
        Capability::DeleteArea,
        Capability::ApproveLegal,
        Capability::ViewFarming,
        Capability::CreateFarming,
        Capability::UpdateFarming,
        Capability::DeleteFarming,
        Capability::ViewPurchase,
        Capability::CreatePurchase,
        Capability::UpdatePurchase,
        Capability::DeletePurchase,
        Capability::ViewFinancials,
        Capability::ViewStaff,
        Capability::CreateStaff,
        Capability::UpdateStaff,
        Capability::DeleteStaff,
        Capability::ManageRoles,
        Capability::ViewDocuments,
        Capability::ManageDocuments,
    ];

    /// Returns the string key used in stored role documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ViewDashboard => "viewDashboard",
            Capability::ViewSop => "viewSOP",
            Capability::ViewSettings => "viewSettings",
            Capability::ViewArea => "viewArea",
            Capability::CreateArea => "createArea",
            Capability::UpdateArea => "updateArea",
            Capability::DeleteArea => "deleteArea",
            Capability::ApproveLegal => "approveLegal",
            Capability::ViewFarming => "viewFarming",
            Capability::CreateFarming => "createFarming",
            Capability::UpdateFarming => "updateFarming",
            Capability::DeleteFarming => "deleteFarming",
            Capability::ViewPurchase => "viewPurchase",
            Capability::CreatePurchase => "createPurchase",
            Capability::UpdatePurchase => "updatePurchase",
            Capability::DeletePurchase => "deletePurchase",
            Capability::ViewFinancials => "viewFinancials",
            Capability::ViewStaff => "viewStaff",
            Capability::CreateStaff => "createStaff",
            Capability::UpdateStaff => "updateStaff",
            Capability::DeleteStaff => "deleteStaff",
            Capability::ManageRoles => "manageRoles",
            Capability::ViewDocuments => "viewDocuments",
            Capability::ManageDocuments => "manageDocuments",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The effective capability set for a principal.
///
/// Every field defaults to `false` on deserialization, so a stored role object
/// with flags omitted behaves identically to one with those flags explicitly
/// `false` (invariant PERM-C2). The resolver relies on this: it returns stored
/// sets verbatim without patching missing keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CapabilitySet {
    pub view_dashboard: bool,
    #[serde(rename = "viewSOP")]
    pub view_sop: bool,
    pub view_settings: bool,

    pub view_area: bool,
    pub create_area: bool,
    pub update_area: bool,
    pub delete_area: bool,
    pub approve_legal: bool,

    pub view_farming: bool,
    pub create_farming: bool,
    pub update_farming: bool,
    pub delete_farming: bool,

    pub view_purchase: bool,
    pub create_purchase: bool,
    pub update_purchase: bool,
    pub delete_purchase: bool,
    pub view_financials: bool,

    pub view_staff: bool,
    pub create_staff: bool,
    pub update_staff: bool,
    pub delete_staff: bool,
    pub manage_roles: bool,

    pub view_documents: bool,
    pub manage_documents: bool,
}

impl CapabilitySet {
    /// The all-false set. Resolution default for missing session or catalog.
    pub fn none() -> Self {
        Self::default()
    }

    /// The all-true set. Only ever produced by the superuser override.
    pub fn all() -> Self {
        let mut set = Self::default();
        for cap in Capability::ALL {
            set.set(cap, true);
        }
        set
    }

    /// The least-privilege fallback: dashboard only.
    pub fn minimal() -> Self {
        let mut set = Self::default();
        set.view_dashboard = true;
        set
    }

    /// Returns whether the given capability is granted.
    pub fn has(&self, cap: Capability) -> bool {
        match cap {
            Capability::ViewDashboard => self.view_dashboard,
            Capability::ViewSop => self.view_sop,
            Capability::ViewSettings => self.view_settings,
            Capability::ViewArea => self.view_area,
            Capability::CreateArea => self.create_area,
            Capability::UpdateArea => self.update_area,
            Capability::DeleteArea => self.delete_area,
            Capability::ApproveLegal => self.approve_legal,
            Capability::ViewFarming => self.view_farming,
            Capability::CreateFarming => self.create_farming,
            Capability::UpdateFarming => self.update_farming,
            Capability::DeleteFarming => self.delete_farming,
            Capability::ViewPurchase => self.view_purchase,
            Capability::CreatePurchase => self.create_purchase,
            Capability::UpdatePurchase => self.update_purchase,
            Capability::DeletePurchase => self.delete_purchase,
            Capability::ViewFinancials => self.view_financials,
            Capability::ViewStaff => self.view_staff,
            Capability::CreateStaff => self.create_staff,
            Capability::UpdateStaff => self.update_staff,
            Capability::DeleteStaff => self.delete_staff,
            Capability::ManageRoles => self.manage_roles,
            Capability::ViewDocuments => self.view_documents,
            Capability::ManageDocuments => self.manage_documents,
        }
    }

    /// Sets a single capability flag.
    pub fn set(&mut self, cap: Capability, granted: bool) {
        match cap {
            Capability::ViewDashboard => self.view_dashboard = granted,
            Capability::ViewSop => self.view_sop = granted,
            Capability::ViewSettings => self.view_settings = granted,
            Capability::ViewArea => self.view_area = granted,
            Capability::CreateArea => self.create_area = granted,
            Capability::UpdateArea => self.update_area = granted,
            Capability::DeleteArea => self.delete_area = granted,
            Capability::ApproveLegal => self.approve_legal = granted,
            Capability::ViewFarming => self.view_farming = granted,
            Capability::CreateFarming => self.create_farming = granted,
            Capability::UpdateFarming => self.update_farming = granted,
            Capability::DeleteFarming => self.delete_farming = granted,
            Capability::ViewPurchase => self.view_purchase = granted,
            Capability::CreatePurchase => self.create_purchase = granted,
            Capability::UpdatePurchase => self.update_purchase = granted,
            Capability::DeletePurchase => self.delete_purchase = granted,
            Capability::ViewFinancials => self.view_financials = granted,
            Capability::ViewStaff => self.view_staff = granted,
            Capability::CreateStaff => self.create_staff = granted,
            Capability::UpdateStaff => self.update_staff = granted,
            Capability::DeleteStaff => self.delete_staff = granted,
            Capability::ManageRoles => self.manage_roles = granted,
            Capability::ViewDocuments => self.view_documents = granted,
            Capability::ManageDocuments => self.manage_documents = granted,
        }
    }

    /// True if no capability is granted.
    pub fn is_empty(&self) -> bool {
        Capability::ALL.iter().all(|c| !self.has(*c))
    }
}

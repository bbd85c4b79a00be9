//! # Backend endpoint catalog
//!
//! Static table of every backend route the frontend may call, with its
//! minimum required access. The paths are relative to the versioned API
//! root (see [`crate::ApiClient`]); `:id` marks a path parameter. The
//! table is reference data for the client's typed calls and lets the
//! shell list what a given role may reach.

use reqwest::Method;

use crate::roles::Role;

/// Who may call an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// No authentication required.
    Public,
    /// Any authenticated user.
    Authenticated,
    /// Only the listed roles.
    Roles(&'static [Role]),
}

impl Access {
    /// Whether a viewer with this role may call the endpoint.
    pub fn permits(&self, role: Option<Role>) -> bool {
        match self {
            Access::Public => true,
            Access::Authenticated => role.is_some(),
            Access::Roles(allowed) => role.is_some_and(|r| allowed.contains(&r)),
        }
    }
}

/// One backend route.
#[derive(Clone, Debug)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    pub access: Access,
    pub description: &'static str,
}

use Access::{Authenticated, Public};

const ADMIN: Access = Access::Roles(&[Role::Administrator]);
const TEACHER_OR_ADMIN: Access = Access::Roles(&[Role::Teacher, Role::Administrator]);
const FAMILY_OR_ADMIN: Access = Access::Roles(&[Role::Family, Role::Administrator]);

macro_rules! endpoint {
    ($method:ident, $path:expr, $access:expr, $description:expr) => {
        Endpoint {
            method: Method::$method,
            path: $path,
            access: $access,
            description: $description,
        }
    };
}

/// Every backend route, with its minimum required access.
pub const ENDPOINTS: &[Endpoint] = &[
    endpoint!(GET, "/health", Public, "Health-check"),
    endpoint!(POST, "/auth/register", Public, "Register"),
    endpoint!(POST, "/auth/login", Public, "Login"),
    endpoint!(POST, "/auth/refresh", Public, "Refresh token"),
    endpoint!(POST, "/auth/logout", Authenticated, "Logout"),
    endpoint!(GET, "/profile", Authenticated, "Current user profile"),
    endpoint!(PUT, "/profile", Authenticated, "Update profile"),
    endpoint!(GET, "/users/:id", Authenticated, "User details"),
    endpoint!(GET, "/users/:id/addresses", Authenticated, "User addresses"),
    endpoint!(GET, "/users/:id/payments", Authenticated, "User payments"),
    endpoint!(GET, "/users/:id/resources", Authenticated, "User resources"),
    endpoint!(GET, "/users", ADMIN, "List users"),
    endpoint!(PUT, "/users/:id", ADMIN, "Update user"),
    endpoint!(DELETE, "/users/:id", ADMIN, "Delete user"),
    endpoint!(GET, "/admin/users", ADMIN, "Admin list users"),
    endpoint!(PUT, "/admin/users/:id", ADMIN, "Admin update user"),
    endpoint!(DELETE, "/admin/users/:id", ADMIN, "Admin delete user"),
    endpoint!(GET, "/teacher/courses", TEACHER_OR_ADMIN, "Teacher courses"),
    endpoint!(GET, "/family/missions", FAMILY_OR_ADMIN, "Family missions"),
    endpoint!(GET, "/familles", ADMIN, "List familles"),
    endpoint!(GET, "/familles/:id", Authenticated, "Famille details"),
    endpoint!(PUT, "/familles/:id", Authenticated, "Update famille"),
    endpoint!(DELETE, "/familles/:id", ADMIN, "Delete famille"),
    endpoint!(GET, "/familles/:id/teachers", Authenticated, "Famille teachers"),
    endpoint!(GET, "/familles/:id/missions", Authenticated, "Famille missions"),
    endpoint!(GET, "/familles/:id/courses", Authenticated, "Famille courses"),
    endpoint!(GET, "/familles/:id/payments", Authenticated, "Famille payments"),
    endpoint!(POST, "/familles/:id/reviews", Authenticated, "Add famille review"),
    endpoint!(GET, "/familles/:id/options", Authenticated, "Famille options"),
    endpoint!(GET, "/missions", Authenticated, "List missions"),
    endpoint!(POST, "/missions", Authenticated, "Create mission"),
    endpoint!(GET, "/missions/:id", Authenticated, "Mission details"),
    endpoint!(PUT, "/missions/:id", Authenticated, "Update mission"),
    endpoint!(DELETE, "/missions/:id", Authenticated, "Delete mission"),
    endpoint!(GET, "/missions/:id/courses", Authenticated, "Mission courses"),
    endpoint!(GET, "/missions/:id/reports", Authenticated, "Mission reports"),
    endpoint!(GET, "/missions/:id/payments", Authenticated, "Mission payments"),
    endpoint!(PUT, "/missions/:id/stop", Authenticated, "Stop mission"),
    endpoint!(PUT, "/missions/:id/extend", Authenticated, "Extend mission"),
    endpoint!(GET, "/courses", Authenticated, "List courses"),
    endpoint!(POST, "/courses", Authenticated, "Create course"),
    endpoint!(GET, "/courses/:id", Authenticated, "Course details"),
    endpoint!(PUT, "/courses/:id", Authenticated, "Update course"),
    endpoint!(DELETE, "/courses/:id", Authenticated, "Delete course"),
    endpoint!(PUT, "/courses/:id/schedule", Authenticated, "Schedule course"),
    endpoint!(PUT, "/courses/:id/cancel", Authenticated, "Cancel course"),
    endpoint!(PUT, "/courses/:id/complete", Authenticated, "Complete course"),
    endpoint!(POST, "/courses/:id/declare", Authenticated, "Declare course"),
    endpoint!(GET, "/courses/:id/payments", Authenticated, "Course payments"),
    endpoint!(GET, "/enseignants", Authenticated, "List teachers"),
    endpoint!(POST, "/enseignants", ADMIN, "Create teacher"),
    endpoint!(GET, "/enseignants/:id", Authenticated, "Teacher details"),
    endpoint!(PUT, "/enseignants/:id", Authenticated, "Update teacher"),
    endpoint!(DELETE, "/enseignants/:id", ADMIN, "Delete teacher"),
    endpoint!(GET, "/enseignants/:id/students", Authenticated, "Teacher students"),
    endpoint!(GET, "/enseignants/:id/missions", Authenticated, "Teacher missions"),
    endpoint!(GET, "/enseignants/:id/courses", Authenticated, "Teacher courses"),
    endpoint!(GET, "/enseignants/:id/payments", Authenticated, "Teacher payments"),
    endpoint!(GET, "/enseignants/:id/reports", Authenticated, "Teacher reports"),
    endpoint!(GET, "/enseignants/:id/options", Authenticated, "Teacher options"),
    endpoint!(GET, "/enseignants/nearby", Authenticated, "Nearby teachers"),
    endpoint!(GET, "/offers", Authenticated, "List offers"),
    endpoint!(POST, "/offers", Authenticated, "Create offer"),
    endpoint!(GET, "/offers/:id", Authenticated, "Offer details"),
    endpoint!(PUT, "/offers/:id", Authenticated, "Update offer"),
    endpoint!(DELETE, "/offers/:id", Authenticated, "Delete offer"),
    endpoint!(GET, "/offers/:id/options", Authenticated, "Offer options"),
    endpoint!(PUT, "/offers/:id/close", Authenticated, "Close offer"),
    endpoint!(GET, "/offers/active", Authenticated, "Active offers"),
    endpoint!(GET, "/offers/search", Authenticated, "Search offers"),
    endpoint!(GET, "/options", Authenticated, "List options"),
    endpoint!(POST, "/options", Authenticated, "Create option"),
    endpoint!(GET, "/options/:id", Authenticated, "Option details"),
    endpoint!(PUT, "/options/:id", Authenticated, "Update option"),
    endpoint!(DELETE, "/options/:id", Authenticated, "Delete option"),
    endpoint!(PUT, "/options/:id/accept", Authenticated, "Accept option"),
    endpoint!(PUT, "/options/:id/decline", Authenticated, "Decline option"),
    endpoint!(PUT, "/options/:id/cancel", Authenticated, "Cancel option"),
    endpoint!(GET, "/options/pending", Authenticated, "Pending options"),
    endpoint!(GET, "/options/expiring", Authenticated, "Expiring options"),
    endpoint!(GET, "/addresses", ADMIN, "List addresses"),
    endpoint!(POST, "/addresses", Authenticated, "Create address"),
    endpoint!(GET, "/addresses/:id", Authenticated, "Address details"),
    endpoint!(PUT, "/addresses/:id", Authenticated, "Update address"),
    endpoint!(DELETE, "/addresses/:id", Authenticated, "Delete address"),
    endpoint!(GET, "/addresses/geocode", Authenticated, "Geocode address"),
    endpoint!(GET, "/addresses/route", Authenticated, "Calculate route"),
];

/// The catalog entries a viewer with the given role may call.
pub fn endpoints_for(role: Option<Role>) -> Vec<&'static Endpoint> {
    ENDPOINTS.iter().filter(|ep| ep.access.permits(role)).collect()
}

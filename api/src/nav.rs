//! # Dashboard navigation tree
//!
//! The sidebar is described by a static tree of [`NavRoute`] nodes built
//! once at startup by [`routes`]. Each node names the page it links to,
//! the icon the shell renders for it, and the set of roles allowed to see
//! it. [`filter_routes`] prunes that tree for the current viewer:
//!
//! - an administrator sees the tree unchanged;
//! - any other role keeps a node when the node lists that role, or when
//!   at least one of its children survives the same filter;
//! - a guest (no role) gets the narrowest view, which for the current
//!   tree is empty.
//!
//! Order is preserved and the input is never mutated.

use serde::Serialize;

use crate::roles::Role;

/// Icon reference rendered next to a navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    LayoutDashboard,
    Users,
    GraduationCap,
    BookOpen,
    Calendar,
    MessageSquare,
    FileText,
    CreditCard,
    Building2,
    MapPin,
    Settings,
}

/// One node of the sidebar tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NavRoute {
    pub title: &'static str,
    pub path: &'static str,
    pub icon: Icon,
    pub roles: &'static [Role],
    pub children: Vec<NavRoute>,
}

const ALL_ROLES: &[Role] = &[Role::Administrator, Role::Teacher, Role::Student, Role::Family];
const ADMIN_ONLY: &[Role] = &[Role::Administrator];

impl NavRoute {
    fn new(title: &'static str, path: &'static str, icon: Icon, roles: &'static [Role]) -> Self {
        Self { title, path, icon, roles, children: Vec::new() }
    }

    fn with_children(mut self, children: Vec<NavRoute>) -> Self {
        self.children = children;
        self
    }
}

/// Build the full (unfiltered) sidebar tree.
pub fn routes() -> Vec<NavRoute> {
    vec![
        NavRoute::new("Dashboard", "/dashboard", Icon::LayoutDashboard, ALL_ROLES),
        NavRoute::new("Users", "/users", Icon::Users, ADMIN_ONLY).with_children(vec![
            NavRoute::new("All Users", "/users", Icon::Users, ADMIN_ONLY),
            NavRoute::new("Teachers", "/users/teachers", Icon::GraduationCap, ADMIN_ONLY),
            NavRoute::new("Students", "/users/students", Icon::Users, ADMIN_ONLY),
            NavRoute::new("Families", "/users/families", Icon::Building2, ADMIN_ONLY),
        ]),
        NavRoute::new("Courses", "/courses", Icon::BookOpen, ALL_ROLES).with_children(vec![
            NavRoute::new("All Courses", "/courses", Icon::BookOpen, ALL_ROLES),
            NavRoute::new("Schedule", "/courses/schedule", Icon::Calendar, ALL_ROLES),
            NavRoute::new(
                "My Courses",
                "/courses/my-courses",
                Icon::BookOpen,
                &[Role::Teacher, Role::Student],
            ),
        ]),
        NavRoute::new("Messages", "/messages", Icon::MessageSquare, ALL_ROLES),
        NavRoute::new("Documents", "/documents", Icon::FileText, ALL_ROLES),
        NavRoute::new("Payments", "/payments", Icon::CreditCard, &[Role::Administrator, Role::Family])
            .with_children(vec![
                NavRoute::new("All Payments", "/payments", Icon::CreditCard, ADMIN_ONLY),
                NavRoute::new("My Payments", "/payments/my-payments", Icon::CreditCard, &[Role::Family]),
            ]),
        NavRoute::new("Locations", "/locations", Icon::MapPin, ADMIN_ONLY).with_children(vec![
            NavRoute::new("All Locations", "/locations", Icon::MapPin, ADMIN_ONLY),
            NavRoute::new("Add Location", "/locations/add", Icon::MapPin, ADMIN_ONLY),
        ]),
        NavRoute::new("Settings", "/settings", Icon::Settings, ALL_ROLES),
    ]
}

/// Prune the tree for a viewer. `None` is a guest.
pub fn filter_routes(routes: &[NavRoute], role: Option<Role>) -> Vec<NavRoute> {
    if role == Some(Role::Administrator) {
        return routes.to_vec();
    }

    routes
        .iter()
        .filter_map(|route| {
            let children = filter_routes(&route.children, role);
            let listed = role.is_some_and(|r| route.roles.contains(&r));
            if !listed && children.is_empty() {
                return None;
            }
            Some(NavRoute { children, ..route.clone() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(routes: &[NavRoute]) -> Vec<&str> {
        routes.iter().map(|r| r.title).collect()
    }

    #[test]
    fn test_admin_sees_unmodified_tree() {
        let tree = routes();
        assert_eq!(filter_routes(&tree, Some(Role::Administrator)), tree);
    }

    #[test]
    fn test_guest_sees_empty_tree() {
        assert!(filter_routes(&routes(), None).is_empty());
    }

    #[test]
    fn test_family_keeps_parent_when_one_child_survives() {
        // The documented example: Courses -> [All Courses (everyone),
        // My Courses (teacher, student)] filtered for a family.
        let tree = vec![NavRoute::new("Courses", "/courses", Icon::BookOpen, ALL_ROLES)
            .with_children(vec![
                NavRoute::new("All Courses", "/courses", Icon::BookOpen, ALL_ROLES),
                NavRoute::new(
                    "My Courses",
                    "/courses/my-courses",
                    Icon::BookOpen,
                    &[Role::Teacher, Role::Student],
                ),
            ])];

        let filtered = filter_routes(&tree, Some(Role::Family));
        assert_eq!(titles(&filtered), ["Courses"]);
        assert_eq!(titles(&filtered[0].children), ["All Courses"]);
    }

    #[test]
    fn test_parent_survives_through_children_alone() {
        // A node that does not list the role is kept if a descendant does.
        let tree = vec![NavRoute::new("Admin", "/admin", Icon::Settings, ADMIN_ONLY)
            .with_children(vec![NavRoute::new(
                "Shared",
                "/admin/shared",
                Icon::FileText,
                &[Role::Teacher],
            )])];

        let filtered = filter_routes(&tree, Some(Role::Teacher));
        assert_eq!(titles(&filtered), ["Admin"]);
        assert_eq!(titles(&filtered[0].children), ["Shared"]);
        assert!(filter_routes(&tree, Some(Role::Family)).is_empty());
    }

    #[test]
    fn test_no_excluded_leaves_remain() {
        // After filtering, every surviving node either lists the role or
        // still has children.
        fn check(routes: &[NavRoute], role: Role) {
            for route in routes {
                assert!(
                    route.roles.contains(&role) || !route.children.is_empty(),
                    "{} should have been pruned for {role}",
                    route.title
                );
                check(&route.children, role);
            }
        }

        for role in [Role::Teacher, Role::Family, Role::Student] {
            check(&filter_routes(&routes(), Some(role)), role);
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let filtered = filter_routes(&routes(), Some(Role::Family));
        assert_eq!(
            titles(&filtered),
            ["Dashboard", "Courses", "Messages", "Documents", "Payments", "Settings"]
        );
        // Payments keeps only the family child, Users and Locations are gone.
        let payments = filtered.iter().find(|r| r.title == "Payments").unwrap();
        assert_eq!(titles(&payments.children), ["My Payments"]);
    }

    #[test]
    fn test_student_view() {
        let filtered = filter_routes(&routes(), Some(Role::Student));
        assert!(!filtered.iter().any(|r| r.title == "Payments"));
        let courses = filtered.iter().find(|r| r.title == "Courses").unwrap();
        assert_eq!(titles(&courses.children), ["All Courses", "Schedule", "My Courses"]);
    }
}

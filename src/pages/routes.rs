use axum::{
    http::StatusCode,
    response::Html,
    routing::{get, MethodRouter},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::{
    roles::Role,
    shell::PageShell,
    table::{TableComponent, TableKind},
};
use crate::AppState;

/// A dashboard path bound to the table component it renders.
#[derive(Debug, Clone, Copy)]
pub struct PageRoute {
    pub path: &'static str,
    /// Access tier of the path; not forwarded to the component.
    pub tier: Role,
    pub table: TableComponent,
}

pub const PAGE_ROUTES: &[PageRoute] = &[
    PageRoute {
        path: "/admin/payments",
        tier: Role::Admin,
        table: TableComponent::new(TableKind::Payments),
    },
    PageRoute {
        path: "/admin/inventory",
        tier: Role::Admin,
        table: TableComponent::with_role(TableKind::Inventory, Role::Admin),
    },
    PageRoute {
        path: "/admin/refunds",
        tier: Role::Admin,
        table: TableComponent::new(TableKind::Refunds),
    },
    PageRoute {
        path: "/admin/stores",
        tier: Role::Admin,
        table: TableComponent::new(TableKind::Stores),
    },
    PageRoute {
        path: "/manager/sales",
        tier: Role::Manager,
        table: TableComponent::new(TableKind::Sales),
    },
    PageRoute {
        path: "/manager/expenses",
        tier: Role::Manager,
        table: TableComponent::new(TableKind::Expenses),
    },
];

pub fn find(path: &str) -> Option<&'static PageRoute> {
    PAGE_ROUTES.iter().find(|route| route.path == path)
}

impl PageRoute {
    pub fn shell(&self) -> PageShell {
        PageShell::new(self.table.kind.title(), self.table)
    }

    /// GET handler rendering this route's shell.
    pub fn handler(&'static self) -> MethodRouter<Arc<AppState>> {
        get(move || async move {
            let shell = self.shell();
            tracing::debug!(
                path      = %self.path,
                tier      = %self.tier,
                component = %shell.component().kind.component_name(),
                "Rendering page"
            );
            Html(shell.render())
        })
    }

    /// The same path with a trailing slash, served identically.
    pub fn slash_path(&self) -> String {
        format!("{}/", self.path)
    }
}

#[derive(Debug, Serialize)]
pub struct RouteEntry {
    pub path: &'static str,
    pub tier: Role,
    pub component: &'static str,
    pub role: Option<Role>,
}

impl From<&PageRoute> for RouteEntry {
    fn from(route: &PageRoute) -> Self {
        RouteEntry {
            path: route.path,
            tier: route.tier,
            component: route.table.kind.component_name(),
            role: route.table.role,
        }
    }
}

pub async fn list_routes() -> Json<Vec<RouteEntry>> {
    Json(PAGE_ROUTES.iter().map(RouteEntry::from).collect())
}

pub async fn not_found(uri: axum::http::Uri) -> (StatusCode, Json<serde_json::Value>) {
    tracing::warn!(path = %uri.path(), "No page registered for path (404)");
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": "Page not found"})),
    )
}

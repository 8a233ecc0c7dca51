use serde::Serialize;

use super::roles::Role;

/// Domain of an externally supplied CRUD table component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TableKind {
    Payments,
    Inventory,
    Sales,
    Refunds,
    Stores,
    Expenses,
}

impl TableKind {
    pub const ALL: [TableKind; 6] = [
        TableKind::Payments,
        TableKind::Inventory,
        TableKind::Sales,
        TableKind::Refunds,
        TableKind::Stores,
        TableKind::Expenses,
    ];

    /// Name the client bundle registers the component under.
    pub fn component_name(self) -> &'static str {
        match self {
            TableKind::Payments => "PaymentTable",
            TableKind::Inventory => "InventoryTable",
            TableKind::Sales => "SalesTable",
            TableKind::Refunds => "RefundsTable",
            TableKind::Stores => "StoresTable",
            TableKind::Expenses => "ExpensesTable",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TableKind::Payments => "Payments",
            TableKind::Inventory => "Inventory",
            TableKind::Sales => "Sales",
            TableKind::Refunds => "Refunds",
            TableKind::Stores => "Stores",
            TableKind::Expenses => "Expenses",
        }
    }
}

/// One instance of a table component with its optional `role` prop.
///
/// Data fetching, CRUD and loading/error states all live in the client-side
/// component; the server only emits the mount point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableComponent {
    pub kind: TableKind,
    pub role: Option<Role>,
}

impl TableComponent {
    pub const fn new(kind: TableKind) -> Self {
        Self { kind, role: None }
    }

    pub const fn with_role(kind: TableKind, role: Role) -> Self {
        Self {
            kind,
            role: Some(role),
        }
    }

    pub fn render(&self) -> String {
        match self.role {
            Some(role) => format!(
                r#"<div data-component="{}" data-role="{}"></div>"#,
                self.kind.component_name(),
                role
            ),
            None => format!(
                r#"<div data-component="{}"></div>"#,
                self.kind.component_name()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_role_has_no_role_attribute() {
        let html = TableComponent::new(TableKind::Expenses).render();

        assert_eq!(html, r#"<div data-component="ExpensesTable"></div>"#);
    }

    #[test]
    fn test_render_with_role_passes_literal() {
        let html = TableComponent::with_role(TableKind::Inventory, Role::Admin).render();

        assert_eq!(
            html,
            r#"<div data-component="InventoryTable" data-role="admin"></div>"#
        );
    }

    #[test]
    fn test_component_names_are_unique() {
        let mut names: Vec<_> = TableKind::ALL.iter().map(|k| k.component_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TableKind::ALL.len());
    }
}

use super::table::TableComponent;

pub const SITE_NAME: &str = "Admin Dashboard";

/// Full-width page container around a single delegated table component.
#[derive(Debug, Clone, Copy)]
pub struct PageShell {
    title: &'static str,
    component: TableComponent,
}

impl PageShell {
    pub const fn new(title: &'static str, component: TableComponent) -> Self {
        Self { title, component }
    }

    pub fn component(&self) -> &TableComponent {
        &self.component
    }

    pub fn render(&self) -> String {
        format!(
            "<!doctype html>\n\
             <html lang=\"en\">\n\
             <head>\n  \
             <meta charset=\"utf-8\"/>\n  \
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n  \
             <title>{title} · {site}</title>\n\
             </head>\n\
             <body>\n  \
             <main class=\"container\" style=\"width: 100%;\">\n    \
             {component}\n  \
             </main>\n\
             </body>\n\
             </html>\n",
            title = self.title,
            site = SITE_NAME,
            component = self.component.render(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::table::TableKind;

    #[test]
    fn test_shell_wraps_component_in_full_width_container() {
        let shell = PageShell::new("Sales", TableComponent::new(TableKind::Sales));
        let html = shell.render();

        assert_eq!(shell.component().kind, TableKind::Sales);
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Sales · Admin Dashboard</title>"));
        assert!(html.contains(
            "<main class=\"container\" style=\"width: 100%;\">\n    <div data-component=\"SalesTable\"></div>\n  </main>"
        ));
    }

    #[test]
    fn test_render_is_repeatable() {
        let shell = PageShell::new("Stores", TableComponent::new(TableKind::Stores));
        assert_eq!(shell.render(), shell.render());
    }
}

use crate::application::dto::ReadResponse;
use crate::component_model::domain::DevelopmentComponent;
use crate::ports::outbound::ComponentFormatter;
use crate::shared::Result;

/// Markdown table header for the component inventory
const COMPONENT_TABLE_HEADER: &str = "| Vendor | Name | Type | Description | Source Folders |\n";

/// Markdown table separator line for the component inventory
const COMPONENT_TABLE_SEPARATOR: &str =
    "|--------|------|------|-------------|----------------|\n";

/// Markdown table header for one component's dependencies
const DEPENDENCY_TABLE_HEADER: &str = "| Vendor | Name | Public Part | Usage |\n";

/// Markdown table separator line for dependency tables
const DEPENDENCY_TABLE_SEPARATOR: &str = "|--------|------|-------------|-------|\n";

/// MarkdownFormatter adapter for a human-readable component report
///
/// Renders a component inventory table followed by one dependency table
/// for every component that declares dependencies.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn or_placeholder(text: &str) -> String {
        if text.is_empty() {
            "-".to_string()
        } else {
            Self::escape_cell(text)
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, response: &ReadResponse) {
        output.push_str("# Development Components\n\n");
        output.push_str(&format!(
            "Workspace: `{}`  \nGenerated by {} {} at {}\n\n",
            response.metadata.workspace.display(),
            response.metadata.tool,
            response.metadata.version,
            response.metadata.timestamp.to_rfc3339()
        ));
    }

    fn render_inventory(&self, output: &mut String, components: &[DevelopmentComponent]) {
        output.push_str("## Component Inventory\n\n");

        if components.is_empty() {
            output.push_str("No development components found.\n\n");
            return;
        }

        output.push_str(COMPONENT_TABLE_HEADER);
        output.push_str(COMPONENT_TABLE_SEPARATOR);

        for component in components {
            let component_type = component
                .component_type()
                .map(|t| t.to_string())
                .unwrap_or_default();

            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::or_placeholder(component.vendor()),
                Self::or_placeholder(component.name()),
                Self::or_placeholder(&component_type),
                Self::escape_cell(component.description()),
                Self::escape_cell(&component.source_folders().join(", "))
            ));
        }
        output.push('\n');
    }

    fn render_dependencies(&self, output: &mut String, components: &[DevelopmentComponent]) {
        let with_dependencies: Vec<_> = components
            .iter()
            .filter(|c| !c.dependencies().is_empty())
            .collect();

        if with_dependencies.is_empty() {
            return;
        }

        output.push_str("## Dependencies\n\n");

        for component in with_dependencies {
            output.push_str(&format!(
                "### {}\n\n",
                Self::escape_cell(&component.qualified_name())
            ));
            output.push_str(DEPENDENCY_TABLE_HEADER);
            output.push_str(DEPENDENCY_TABLE_SEPARATOR);

            for dependency in component.dependencies() {
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    Self::escape_cell(dependency.vendor()),
                    Self::escape_cell(dependency.name()),
                    Self::or_placeholder(dependency.public_part().unwrap_or("")),
                    Self::or_placeholder(&dependency.usage().label())
                ));
            }
            output.push('\n');
        }
    }

    fn render_skipped(&self, output: &mut String, response: &ReadResponse) {
        if response.skipped_descriptors.is_empty() {
            return;
        }

        output.push_str("## Skipped Descriptors\n\n");
        for path in &response.skipped_descriptors {
            output.push_str(&format!("- `{}`\n", path.display()));
        }
        output.push('\n');
    }
}

impl ComponentFormatter for MarkdownFormatter {
    fn format(&self, response: &ReadResponse) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, response);
        self.render_inventory(&mut output, &response.components);
        self.render_dependencies(&mut output, &response.components);
        self.render_skipped(&mut output, response);

        Ok(output)
    }
}

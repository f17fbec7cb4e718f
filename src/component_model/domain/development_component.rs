use super::{DependencyReference, DevelopmentComponentType};
use crate::shared::Result;
use serde::Serialize;

/// A development component as declared by its `.dcdef` descriptor
///
/// Records are created empty, filled in by
/// [`DcDefinitionReader`](crate::dc_definition::DcDefinitionReader) and then
/// treated as read-only. A record whose descriptor was malformed may be
/// partially populated; [`is_complete`](Self::is_complete) tells callers
/// whether its identity is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentComponent {
    vendor: String,
    name: String,
    description: String,
    #[serde(rename = "type")]
    component_type: Option<DevelopmentComponentType>,
    source_folders: Vec<String>,
    dependencies: Vec<DependencyReference>,
}

impl DevelopmentComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn component_type(&self) -> Option<DevelopmentComponentType> {
        self.component_type
    }

    pub fn source_folders(&self) -> &[String] {
        &self.source_folders
    }

    pub fn dependencies(&self) -> &[DependencyReference] {
        &self.dependencies
    }

    /// Sets the vendor, rejecting empty values
    pub fn set_vendor(&mut self, vendor: String) -> Result<()> {
        validate_identity_part("vendor", &vendor)?;
        self.vendor = vendor;
        Ok(())
    }

    /// Sets the component name, rejecting empty values
    pub fn set_name(&mut self, name: String) -> Result<()> {
        validate_identity_part("name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Sets the classification
    ///
    /// # Errors
    /// Returns an error if a classification was already set; the first one is kept.
    pub fn set_component_type(&mut self, component_type: DevelopmentComponentType) -> Result<()> {
        if let Some(existing) = self.component_type {
            anyhow::bail!(
                "Component type already set to '{}', ignoring '{}'",
                existing,
                component_type
            );
        }
        self.component_type = Some(component_type);
        Ok(())
    }

    pub fn add_source_folder(&mut self, folder: String) {
        self.source_folders.push(folder);
    }

    pub fn add_dependencies(&mut self, dependencies: impl IntoIterator<Item = DependencyReference>) {
        self.dependencies.extend(dependencies);
    }

    /// True when both vendor and name are known
    pub fn is_complete(&self) -> bool {
        !self.vendor.is_empty() && !self.name.is_empty()
    }

    /// `vendor/name`, with `?` standing in for parts that are still unknown
    pub fn qualified_name(&self) -> String {
        let vendor = if self.vendor.is_empty() { "?" } else { &self.vendor };
        let name = if self.name.is_empty() { "?" } else { &self.name };
        format!("{}/{}", vendor, name)
    }
}

fn validate_identity_part(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("Component {} cannot be empty", field);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_component_is_empty() {
        let component = DevelopmentComponent::new();
        assert_eq!(component.vendor(), "");
        assert_eq!(component.name(), "");
        assert_eq!(component.description(), "");
        assert!(component.component_type().is_none());
        assert!(component.source_folders().is_empty());
        assert!(component.dependencies().is_empty());
        assert!(!component.is_complete());
    }

    #[test]
    fn test_set_identity() {
        let mut component = DevelopmentComponent::new();
        component.set_vendor("sap.com".to_string()).unwrap();
        component.set_name("tc/bl/logging/api".to_string()).unwrap();

        assert!(component.is_complete());
        assert_eq!(component.qualified_name(), "sap.com/tc/bl/logging/api");
    }

    #[test]
    fn test_set_empty_name_is_rejected() {
        let mut component = DevelopmentComponent::new();
        let err = component.set_name(String::new()).unwrap_err();
        assert!(err.to_string().contains("name cannot be empty"));
        assert_eq!(component.name(), "");
    }

    #[test]
    fn test_set_long_identity_is_kept_verbatim() {
        let mut component = DevelopmentComponent::new();
        component.set_vendor("v".repeat(300)).unwrap();
        component.set_name("n".repeat(4096)).unwrap();
        assert_eq!(component.vendor().len(), 300);
        assert_eq!(component.name().len(), 4096);
    }

    #[test]
    fn test_component_type_set_once() {
        let mut component = DevelopmentComponent::new();
        component
            .set_component_type(DevelopmentComponentType::Java)
            .unwrap();

        let err = component
            .set_component_type(DevelopmentComponentType::WebDynpro)
            .unwrap_err();
        assert!(err.to_string().contains("already set"));
        assert_eq!(
            component.component_type(),
            Some(DevelopmentComponentType::Java)
        );
    }

    #[test]
    fn test_source_folders_keep_order() {
        let mut component = DevelopmentComponent::new();
        component.add_source_folder("src/packages".to_string());
        component.add_source_folder("src/resources".to_string());
        component.add_source_folder("gen/packages".to_string());

        assert_eq!(
            component.source_folders(),
            &["src/packages", "src/resources", "gen/packages"]
        );
    }

    #[test]
    fn test_qualified_name_of_partial_record() {
        let mut component = DevelopmentComponent::new();
        component.set_name("dc1".to_string()).unwrap();
        assert_eq!(component.qualified_name(), "?/dc1");
    }

    #[test]
    fn test_serialize_uses_type_key() {
        let mut component = DevelopmentComponent::new();
        component.set_vendor("sap.com".to_string()).unwrap();
        component.set_name("dc1".to_string()).unwrap();
        component
            .set_component_type(DevelopmentComponentType::J2eeWebModule)
            .unwrap();
        component.add_source_folder("src/packages".to_string());

        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json["type"], "J2EE/WebModule");
        assert_eq!(json["sourceFolders"][0], "src/packages");
        assert!(json["dependencies"].as_array().unwrap().is_empty());
    }
}

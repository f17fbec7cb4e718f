use super::events::{XmlEvent, XmlEventSource};
use super::DescriptorError;
use crate::component_model::domain::{DependencyReference, DependencyUsage};
use std::io::BufRead;
use tracing::{debug, warn};

const DEPENDENCY: &str = "dependency";
const DC_REF: &str = "dc-ref";
const PP_REF: &str = "pp-ref";
const NAME: &str = "name";
const VENDOR: &str = "vendor";
const AT_BUILD_TIME: &str = "at-build-time";
const AT_DEPLOY_TIME: &str = "at-deploy-time";
const AT_RUN_TIME: &str = "at-run-time";

/// Reader for the `<dependencies>` block of a development component definition
///
/// Created by [`DcDefinitionReader`](super::DcDefinitionReader) right after
/// it has seen `<dependencies>` open. It works on the coordinator's own event
/// source and stops on the matching `</dependencies>`, so when
/// [`read`](Self::read) returns, the coordinator continues with the first
/// event after the block.
pub(crate) struct DependenciesReader<'e, R: BufRead> {
    events: &'e mut XmlEventSource<R>,
    /// `vendor/name` of the component being read, for log context
    owner: String,
    used_components: Vec<DependencyReference>,
}

/// Values collected while inside one `<dependency>` element
#[derive(Debug, Default)]
struct DependencyEntry {
    vendor: Option<String>,
    name: Option<String>,
    public_part: Option<String>,
    usage: DependencyUsage,
}

impl<'e, R: BufRead> DependenciesReader<'e, R> {
    pub(crate) fn new(events: &'e mut XmlEventSource<R>, owner: String) -> Self {
        Self {
            events,
            owner,
            used_components: Vec::new(),
        }
    }

    /// Reads the dependency list up to and including `</dependencies>`
    ///
    /// Entries without a vendor or name are dropped with a warning.
    pub(crate) fn read(mut self) -> Result<Vec<DependencyReference>, DescriptorError> {
        while let Some(event) = self.events.next_event()? {
            match event {
                XmlEvent::Start(element) if element == DEPENDENCY => {
                    let entry = self.read_dependency()?;
                    self.accept(entry);
                }
                XmlEvent::Start(_) => self.events.skip_element()?,
                XmlEvent::Text(_) => {}
                XmlEvent::End(_) => break,
            }
        }

        debug!(
            component = %self.owner,
            count = self.used_components.len(),
            "read dependencies"
        );
        Ok(self.used_components)
    }

    fn read_dependency(&mut self) -> Result<DependencyEntry, DescriptorError> {
        let mut entry = DependencyEntry::default();

        while let Some(event) = self.events.next_event()? {
            match event {
                XmlEvent::Start(element) => match element.as_str() {
                    AT_BUILD_TIME => {
                        entry.usage.at_build_time = true;
                        self.events.skip_element()?;
                    }
                    AT_DEPLOY_TIME => {
                        entry.usage.at_deploy_time = true;
                        self.events.skip_element()?;
                    }
                    AT_RUN_TIME => {
                        entry.usage.at_run_time = true;
                        self.events.skip_element()?;
                    }
                    DC_REF => self.read_dc_ref(&mut entry)?,
                    NAME | VENDOR | PP_REF => {
                        let text = self.events.read_text()?;
                        entry.update(&element, text);
                    }
                    _ => self.events.skip_element()?,
                },
                XmlEvent::Text(_) => {}
                XmlEvent::End(_) => break,
            }
        }

        Ok(entry)
    }

    /// `<dc-ref>` wraps the identity of the referenced component
    fn read_dc_ref(&mut self, entry: &mut DependencyEntry) -> Result<(), DescriptorError> {
        while let Some(event) = self.events.next_event()? {
            match event {
                XmlEvent::Start(element) if element == NAME || element == VENDOR => {
                    let text = self.events.read_text()?;
                    entry.update(&element, text);
                }
                XmlEvent::Start(_) => self.events.skip_element()?,
                XmlEvent::Text(_) => {}
                XmlEvent::End(_) => break,
            }
        }
        Ok(())
    }

    fn accept(&mut self, entry: DependencyEntry) {
        match entry.into_reference() {
            Ok(reference) => self.used_components.push(reference),
            Err(entry) => warn!(
                component = %self.owner,
                vendor = entry.vendor.as_deref().unwrap_or(""),
                name = entry.name.as_deref().unwrap_or(""),
                "skipping dependency without vendor and name"
            ),
        }
    }
}

impl DependencyEntry {
    fn update(&mut self, element: &str, text: String) {
        let value = (!text.is_empty()).then_some(text);
        match element {
            NAME => self.name = value,
            VENDOR => self.vendor = value,
            PP_REF => self.public_part = value,
            _ => {}
        }
    }

    fn into_reference(self) -> Result<DependencyReference, Self> {
        match (self.vendor, self.name) {
            (Some(vendor), Some(name)) => {
                let mut reference = DependencyReference::new(vendor, name).with_usage(self.usage);
                if let Some(public_part) = self.public_part {
                    reference = reference.with_public_part(public_part);
                }
                Ok(reference)
            }
            (vendor, name) => Err(Self {
                vendor,
                name,
                ..self
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;
    use tracing::Level;

    /// Positions a source just inside `<dependencies>` and runs the reader
    fn read_block(
        xml: &str,
    ) -> (
        Result<Vec<DependencyReference>, DescriptorError>,
        XmlEventSource<&[u8]>,
    ) {
        let mut events = XmlEventSource::new(xml.as_bytes());
        loop {
            match events.next_event().unwrap() {
                Some(XmlEvent::Start(name)) if name == "dependencies" => break,
                Some(_) => continue,
                None => panic!("no <dependencies> in test input"),
            }
        }
        let result = DependenciesReader::new(&mut events, "sap.com/dc1".to_string()).read();
        (result, events)
    }

    #[test]
    fn test_reads_dc_ref_with_usage_and_public_part() {
        let (result, _) = read_block(
            r#"<dependencies>
                 <dependency>
                   <at-build-time/>
                   <at-run-time/>
                   <dc-ref><name>tc/bl/logging/api</name><vendor>sap.com</vendor></dc-ref>
                   <pp-ref>api</pp-ref>
                 </dependency>
               </dependencies>"#,
        );
        let dependencies = result.unwrap();

        assert_eq!(dependencies.len(), 1);
        let dependency = &dependencies[0];
        assert_eq!(dependency.vendor(), "sap.com");
        assert_eq!(dependency.name(), "tc/bl/logging/api");
        assert_eq!(dependency.public_part(), Some("api"));
        assert!(dependency.usage().at_build_time);
        assert!(!dependency.usage().at_deploy_time);
        assert!(dependency.usage().at_run_time);
    }

    #[test]
    fn test_reads_identity_directly_under_dependency() {
        let (result, _) = read_block(
            "<dependencies><dependency><name>DC2</name><vendor>sap.com</vendor></dependency></dependencies>",
        );
        assert_eq!(
            result.unwrap(),
            vec![DependencyReference::new("sap.com", "DC2")]
        );
    }

    #[test]
    fn test_keeps_declaration_order() {
        let (result, _) = read_block(
            "<dependencies>\
               <dependency><name>b</name><vendor>v</vendor></dependency>\
               <dependency><name>a</name><vendor>v</vendor></dependency>\
               <dependency><name>c</name><vendor>v</vendor></dependency>\
             </dependencies>",
        );
        let names: Vec<_> = result.unwrap().iter().map(|d| d.name().to_string()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_drops_entry_without_identity_and_warns() {
        let ((result, _), logs) = capture_logs(|| {
            read_block(
                "<dependencies>\
                   <dependency><name>first</name><vendor>sap.com</vendor></dependency>\
                   <dependency><name>orphan</name></dependency>\
                   <dependency><vendor>sap.com</vendor><name>   </name></dependency>\
                   <dependency><name>last</name><vendor>sap.com</vendor></dependency>\
                 </dependencies>",
            )
        });

        let names: Vec<_> = result.unwrap().iter().map(|d| d.name().to_string()).collect();
        assert_eq!(names, vec!["first", "last"]);

        let warnings = logs.at_level(Level::WARN);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].field("name"), Some("orphan"));
        assert_eq!(warnings[0].field("component"), Some("sap.com/dc1"));
    }

    #[test]
    fn test_stops_at_end_of_block() {
        let (result, mut events) = read_block(
            "<development-component>\
               <dependencies><dependency><name>x</name><vendor>y</vendor></dependency></dependencies>\
               <caption>after</caption>\
             </development-component>",
        );
        assert_eq!(result.unwrap().len(), 1);
        assert_eq!(events.depth(), 1);
        assert_eq!(
            events.next_event().unwrap(),
            Some(XmlEvent::Start("caption".to_string()))
        );
    }

    #[test]
    fn test_ignores_unknown_elements() {
        let (result, _) = read_block(
            "<dependencies>\
               <comment>not a dependency</comment>\
               <dependency><name>x</name><vendor>y</vendor><extra><name>z</name></extra></dependency>\
             </dependencies>",
        );
        assert_eq!(result.unwrap(), vec![DependencyReference::new("y", "x")]);
    }

    #[test]
    fn test_truncated_block_is_an_error() {
        let (result, _) = read_block("<dependencies><dependency><name>x</name>");
        assert!(result.is_err());
    }
}

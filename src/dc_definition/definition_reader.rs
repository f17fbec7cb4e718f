use super::dependencies_reader::DependenciesReader;
use super::events::{XmlEvent, XmlEventSource};
use super::DescriptorError;
use crate::component_model::domain::{DevelopmentComponent, DevelopmentComponentType};
use std::io::{BufRead, BufReader, Read};
use tracing::{debug, error, warn};

/// tag name for a component's short description
const CAPTION: &str = "caption";
/// tag name for the component name
const NAME: &str = "name";
/// tag name for the component vendor
const VENDOR: &str = "vendor";
/// compound tag holding the component's type and sub type
const COMPONENT_TYPE: &str = "component-type";
/// alternative spelling of [`COMPONENT_TYPE`]
const TYPE_BLOCK: &str = "type-block";
const TYPE: &str = "type";
const SUB_TYPE: &str = "sub-type";
/// one source folder of the component (zero or more)
const PACKAGE_FOLDER: &str = "package-folder";
/// the used development components
const DEPENDENCIES: &str = "dependencies";

/// Structural position of the elements currently being read
///
/// Same-named elements mean different things depending on where they
/// appear: `<name>` directly below the root is the component's name,
/// anywhere else it is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// children of the document root
    Root,
    /// children of `<component-type>`
    ComponentType,
    /// anything deeper
    Nested,
}

/// Type and sub type seen inside one `<component-type>` block
#[derive(Debug, Default)]
struct TypeParts {
    type_name: String,
    sub_type_name: String,
}

/// An element whose end tag has not been read yet
#[derive(Debug)]
enum OpenElement {
    /// the document root
    Root,
    /// `<component-type>` collecting its parts
    ComponentType(TypeParts),
    /// any other element, with the scope it appeared in and its text so far
    Field {
        element: String,
        scope: Scope,
        text: String,
    },
}

impl OpenElement {
    /// Scope of the elements directly inside this one
    fn child_scope(&self) -> Scope {
        match self {
            OpenElement::Root => Scope::Root,
            OpenElement::ComponentType(_) => Scope::ComponentType,
            OpenElement::Field { .. } => Scope::Nested,
        }
    }
}

/// Reader for `.dcdef` development component definitions
///
/// Fills the [`DevelopmentComponent`] it was created for from exactly one
/// descriptor stream. [`read`](Self::read) consumes the reader, so an
/// instance cannot be reused for a second document.
///
/// ```
/// use nwdi_dcdef::prelude::*;
///
/// let dcdef = r#"<development-component>
///   <name>tc/bl/logging/api</name>
///   <vendor>sap.com</vendor>
///   <component-type><type>J2EE Server Component</type><sub-type>Library</sub-type></component-type>
/// </development-component>"#;
///
/// let mut component = DevelopmentComponent::new();
/// DcDefinitionReader::new(&mut component).read_str(dcdef);
///
/// assert_eq!(component.qualified_name(), "sap.com/tc/bl/logging/api");
/// assert_eq!(component.component_type(), Some(DevelopmentComponentType::J2eeServerLibrary));
/// ```
pub struct DcDefinitionReader<'c> {
    component: &'c mut DevelopmentComponent,
}

impl<'c> DcDefinitionReader<'c> {
    pub fn new(component: &'c mut DevelopmentComponent) -> Self {
        Self { component }
    }

    /// Reads the definition from the given stream into the component
    ///
    /// Failures to read or parse the stream are logged together with the
    /// component's vendor and name as far as they are known. The component
    /// keeps every field whose element was closed before the failure.
    pub fn read<R: Read>(self, definition: R) {
        self.read_buffered(BufReader::new(definition));
    }

    /// Reads the definition from an in-memory string
    pub fn read_str(self, definition: &str) {
        self.read_buffered(definition.as_bytes());
    }

    fn read_buffered<B: BufRead>(mut self, definition: B) {
        let mut events = XmlEventSource::new(definition);

        if let Err(e) = self.read_document(&mut events) {
            error!(
                vendor = self.component.vendor(),
                name = self.component.name(),
                kind = %e.kind(),
                error = %e,
                "failed to read development component definition"
            );
        }
    }

    fn read_document<B: BufRead>(
        &mut self,
        events: &mut XmlEventSource<B>,
    ) -> Result<(), DescriptorError> {
        let root = loop {
            match events.next_event()? {
                Some(XmlEvent::Start(root)) => break root,
                Some(_) => continue,
                None => return Err(DescriptorError::MissingRootElement),
            }
        };

        debug!(root = %root, "reading development component definition");
        self.read_root_content(events)?;

        // only comments and processing instructions may follow the root element
        while let Some(event) = events.next_event()? {
            if let XmlEvent::Start(element) = event {
                return Err(DescriptorError::TrailingContent { element });
            }
        }

        debug!(
            component = %self.component.qualified_name(),
            source_folders = self.component.source_folders().len(),
            dependencies = self.component.dependencies().len(),
            "read development component definition"
        );
        Ok(())
    }

    /// Reads everything below the root element, up to and including its end tag
    ///
    /// Open elements are kept on an explicit stack, so the nesting depth of a
    /// document is bounded by memory only.
    fn read_root_content<B: BufRead>(
        &mut self,
        events: &mut XmlEventSource<B>,
    ) -> Result<(), DescriptorError> {
        let mut open = vec![OpenElement::Root];

        while !open.is_empty() {
            let Some(event) = events.next_event()? else {
                break;
            };

            match event {
                XmlEvent::Text(chunk) => {
                    if let Some(OpenElement::Field { text, .. }) = open.last_mut() {
                        text.push_str(&chunk);
                    }
                }
                XmlEvent::Start(element) => {
                    let scope = open.last().map_or(Scope::Root, OpenElement::child_scope);
                    if element == DEPENDENCIES {
                        let owner = self.component.qualified_name();
                        let used_components = DependenciesReader::new(events, owner).read()?;
                        self.component.add_dependencies(used_components);
                    } else if element == COMPONENT_TYPE || element == TYPE_BLOCK {
                        open.push(OpenElement::ComponentType(TypeParts::default()));
                    } else {
                        open.push(OpenElement::Field {
                            element,
                            scope,
                            text: String::new(),
                        });
                    }
                }
                XmlEvent::End(_) => match open.pop() {
                    Some(OpenElement::Field {
                        element,
                        scope,
                        text,
                    }) => {
                        let type_parts = match open.last_mut() {
                            Some(OpenElement::ComponentType(parts)) => Some(parts),
                            _ => None,
                        };
                        self.end_element(scope, &element, text.trim().to_string(), type_parts);
                    }
                    Some(OpenElement::ComponentType(parts)) => self.classify(parts),
                    Some(OpenElement::Root) | None => {}
                },
            }
        }
        Ok(())
    }

    fn classify(&mut self, parts: TypeParts) {
        match DevelopmentComponentType::from_parts(&parts.type_name, &parts.sub_type_name) {
            Some(component_type) => {
                if let Err(e) = self.component.set_component_type(component_type) {
                    warn!(
                        component = %self.component.qualified_name(),
                        error = %e,
                        "ignoring repeated component type"
                    );
                }
            }
            None => warn!(
                component = %self.component.qualified_name(),
                component_type = %parts.type_name,
                sub_type = %parts.sub_type_name,
                "unknown development component type"
            ),
        }
    }

    /// Applies the text of a closed element depending on its name and where it appeared
    fn end_element(
        &mut self,
        scope: Scope,
        element: &str,
        text: String,
        type_parts: Option<&mut TypeParts>,
    ) {
        match (scope, element) {
            (_, CAPTION) => self.component.set_description(text),
            (Scope::Root, NAME) => {
                if let Err(e) = self.component.set_name(text) {
                    warn!(field = NAME, error = %e, "ignoring invalid component identity");
                }
            }
            (Scope::Root, VENDOR) => {
                if let Err(e) = self.component.set_vendor(text) {
                    warn!(field = VENDOR, error = %e, "ignoring invalid component identity");
                }
            }
            (Scope::ComponentType, TYPE) => {
                if let Some(parts) = type_parts {
                    parts.type_name = text;
                }
            }
            (Scope::ComponentType, SUB_TYPE) => {
                if let Some(parts) = type_parts {
                    parts.sub_type_name = text;
                }
            }
            (Scope::Root | Scope::Nested, PACKAGE_FOLDER) => {
                if text.is_empty() {
                    warn!(
                        component = %self.component.qualified_name(),
                        "ignoring empty package folder"
                    );
                } else {
                    self.component.add_source_folder(text);
                }
            }
            _ => {}
        }
    }
}

impl DevelopmentComponent {
    /// Creates a component from the definition read from `definition`
    ///
    /// Never fails; see [`DcDefinitionReader::read`] for how broken input is handled.
    pub fn from_reader<R: Read>(definition: R) -> Self {
        let mut component = Self::new();
        DcDefinitionReader::new(&mut component).read(definition);
        component
    }
}

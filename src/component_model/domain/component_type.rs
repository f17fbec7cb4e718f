use serde::{Serialize, Serializer};
use std::fmt;

/// Classification of a development component
///
/// A classification is the combination of a `type` and an optional
/// `sub-type` as declared in the component's `<component-type>` block.
/// The set is closed: every variant has exactly one row in [`TYPE_TABLE`],
/// so adding a classification means adding a variant and its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DevelopmentComponentType {
    Java,
    ExternalLibrary,
    Dictionary,
    WebDynpro,
    BuildPlugin,
    J2eeWebModule,
    J2eeEjbModule,
    J2eeEnterpriseApplication,
    J2eeServerLibrary,
    J2eeServerPrimaryLibrary,
    J2eeServerService,
    J2eeServerPrimaryService,
    J2eeServerInterface,
    J2eeServerPrimaryInterface,
    PortalApplicationModule,
    PortalApplicationStandalone,
    ProcessComposer,
    ContentPackage,
}

/// Lookup table from (type, sub-type) to classification.
///
/// An empty sub-type means the type has no sub-types.
const TYPE_TABLE: &[(DevelopmentComponentType, &str, &str)] = &[
    (DevelopmentComponentType::Java, "Java", ""),
    (DevelopmentComponentType::ExternalLibrary, "External Library", ""),
    (DevelopmentComponentType::Dictionary, "Dictionary", ""),
    (DevelopmentComponentType::WebDynpro, "WebDynpro", ""),
    (DevelopmentComponentType::BuildPlugin, "Build Plugin", ""),
    (DevelopmentComponentType::J2eeWebModule, "J2EE", "WebModule"),
    (DevelopmentComponentType::J2eeEjbModule, "J2EE", "EJBModule"),
    (
        DevelopmentComponentType::J2eeEnterpriseApplication,
        "J2EE",
        "Enterprise Application",
    ),
    (
        DevelopmentComponentType::J2eeServerLibrary,
        "J2EE Server Component",
        "Library",
    ),
    (
        DevelopmentComponentType::J2eeServerPrimaryLibrary,
        "J2EE Server Component",
        "Primary Library",
    ),
    (
        DevelopmentComponentType::J2eeServerService,
        "J2EE Server Component",
        "Service",
    ),
    (
        DevelopmentComponentType::J2eeServerPrimaryService,
        "J2EE Server Component",
        "Primary Service",
    ),
    (
        DevelopmentComponentType::J2eeServerInterface,
        "J2EE Server Component",
        "Interface",
    ),
    (
        DevelopmentComponentType::J2eeServerPrimaryInterface,
        "J2EE Server Component",
        "Primary Interface",
    ),
    (
        DevelopmentComponentType::PortalApplicationModule,
        "Portal Application",
        "Module",
    ),
    (
        DevelopmentComponentType::PortalApplicationStandalone,
        "Portal Application",
        "Standalone",
    ),
    (
        DevelopmentComponentType::ProcessComposer,
        "Composite Application",
        "Process Composer",
    ),
    (DevelopmentComponentType::ContentPackage, "Content", "Package"),
];

impl DevelopmentComponentType {
    /// Resolves a classification from its declared type and sub-type
    ///
    /// Surrounding whitespace is ignored; everything else must match exactly.
    ///
    /// # Returns
    /// `None` if the pair is not a known classification
    pub fn from_parts(type_name: &str, sub_type_name: &str) -> Option<Self> {
        let type_name = type_name.trim();
        let sub_type_name = sub_type_name.trim();

        TYPE_TABLE
            .iter()
            .find(|(_, t, s)| *t == type_name && *s == sub_type_name)
            .map(|(variant, _, _)| *variant)
    }

    /// Iterates over every known classification in table order
    pub fn all() -> impl Iterator<Item = DevelopmentComponentType> {
        TYPE_TABLE.iter().map(|(variant, _, _)| *variant)
    }

    fn entry(&self) -> &'static (DevelopmentComponentType, &'static str, &'static str) {
        // rows are kept in declaration order of the variants
        &TYPE_TABLE[*self as usize]
    }

    pub fn type_name(&self) -> &'static str {
        self.entry().1
    }

    /// Sub-type as declared, or `None` for types without sub-types
    pub fn sub_type_name(&self) -> Option<&'static str> {
        let sub_type = self.entry().2;
        (!sub_type.is_empty()).then_some(sub_type)
    }
}

impl fmt::Display for DevelopmentComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub_type_name() {
            Some(sub_type) => write!(f, "{}/{}", self.type_name(), sub_type),
            None => write!(f, "{}", self.type_name()),
        }
    }
}

impl Serialize for DevelopmentComponentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

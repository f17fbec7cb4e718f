use serde::Serialize;

/// The lifecycle phases in which a dependency is visible
///
/// Each flag corresponds to an empty marker element inside a
/// `<dependency>` entry (`<at-build-time/>` and so on).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyUsage {
    pub at_build_time: bool,
    pub at_deploy_time: bool,
    pub at_run_time: bool,
}

impl DependencyUsage {
    /// True when no usage flag was declared
    pub fn is_unspecified(&self) -> bool {
        !(self.at_build_time || self.at_deploy_time || self.at_run_time)
    }

    /// Short comma-separated label such as `build, run`
    pub fn label(&self) -> String {
        let mut phases = Vec::new();
        if self.at_build_time {
            phases.push("build");
        }
        if self.at_deploy_time {
            phases.push("deploy");
        }
        if self.at_run_time {
            phases.push("run");
        }
        phases.join(", ")
    }
}

/// A declared link from one development component to another
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyReference {
    vendor: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_part: Option<String>,
    #[serde(flatten)]
    usage: DependencyUsage,
}

impl DependencyReference {
    pub fn new(vendor: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            name: name.into(),
            public_part: None,
            usage: DependencyUsage::default(),
        }
    }

    pub fn with_public_part(mut self, public_part: impl Into<String>) -> Self {
        self.public_part = Some(public_part.into());
        self
    }

    pub fn with_usage(mut self, usage: DependencyUsage) -> Self {
        self.usage = usage;
        self
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the public part of the referenced component, if one was named
    pub fn public_part(&self) -> Option<&str> {
        self.public_part.as_deref()
    }

    pub fn usage(&self) -> DependencyUsage {
        self.usage
    }

    /// `vendor/name` of the referenced component
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.vendor, self.name)
    }
}

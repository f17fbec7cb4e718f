use crate::application::dto::{ReadMetadata, ReadRequest, ReadResponse};
use crate::component_model::domain::DevelopmentComponent;
use crate::component_model::services::ComponentFilter;
use crate::dc_definition::DcDefinitionReader;
use crate::ports::outbound::{DescriptorSource, ProgressReporter};
use crate::shared::error::DcdefError;
use crate::shared::Result;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use tracing::{debug, info, info_span, warn};

/// ReadComponentsUseCase - Reads every development component of a workspace
///
/// Descriptors are discovered through the [`DescriptorSource`], parsed by a
/// pool of scoped worker threads (one [`DcDefinitionReader`] per descriptor),
/// filtered, and returned in discovery order. A descriptor that cannot be
/// opened is reported and skipped; a malformed one still yields the partial
/// record its parser produced.
///
/// # Type Parameters
/// * `DS` - DescriptorSource implementation
/// * `PR` - ProgressReporter implementation
pub struct ReadComponentsUseCase<DS, PR> {
    descriptor_source: DS,
    progress_reporter: PR,
}

type ReadOutcome = Result<DevelopmentComponent>;

impl<DS, PR> ReadComponentsUseCase<DS, PR>
where
    DS: DescriptorSource,
    PR: ProgressReporter,
{
    /// Creates a new ReadComponentsUseCase with injected dependencies
    pub fn new(descriptor_source: DS, progress_reporter: PR) -> Self {
        Self {
            descriptor_source,
            progress_reporter,
        }
    }

    /// Executes the workspace read
    ///
    /// # Errors
    /// - The workspace cannot be searched or contains no descriptors
    /// - An exclusion pattern is invalid, or the patterns exclude everything
    pub fn execute(&self, request: ReadRequest) -> Result<ReadResponse> {
        // Step 1: Find descriptors
        let descriptors = self.discover_descriptors(&request)?;

        // Step 2: Parse them in parallel
        let (components, skipped) = self.read_descriptors(&descriptors, request.effective_jobs());

        // Step 3: Apply exclusion filters
        let components = self.apply_exclusion_filters(components, &request)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Read {} development component(s)",
            components.len()
        ));

        Ok(ReadResponse::new(
            components,
            ReadMetadata::new(request.workspace_path),
            skipped,
        ))
    }

    /// Reads the descriptor of one known component
    ///
    /// # Errors
    /// Returns an error if the workspace has no descriptor for the component
    /// or it cannot be opened.
    pub fn read_component(
        &self,
        workspace: &Path,
        vendor: &str,
        name: &str,
    ) -> Result<DevelopmentComponent> {
        let path = self
            .descriptor_source
            .locate(workspace, vendor, name)
            .ok_or_else(|| DcdefError::DescriptorReadError {
                path: workspace.to_path_buf(),
                details: format!("no descriptor for component {}/{}", vendor, name),
            })?;

        self.progress_reporter
            .report(&format!("📖 Reading {}", path.display()));
        read_descriptor(&self.descriptor_source, &path)
    }

    fn discover_descriptors(&self, request: &ReadRequest) -> Result<Vec<PathBuf>> {
        self.progress_reporter.report(&format!(
            "🔍 Searching for '{}' files in: {}",
            request.descriptor_name,
            request.workspace_path.display()
        ));

        let descriptors = self
            .descriptor_source
            .discover(&request.workspace_path, &request.descriptor_name)?;

        if descriptors.is_empty() {
            return Err(DcdefError::NoDescriptorsFound {
                path: request.workspace_path.clone(),
                descriptor_name: request.descriptor_name.clone(),
            }
            .into());
        }

        info!(count = descriptors.len(), "discovered descriptors");
        self.progress_reporter
            .report(&format!("✅ Found {} descriptor(s)", descriptors.len()));
        Ok(descriptors)
    }

    /// Parses `descriptors` on up to `jobs` scoped threads
    ///
    /// Workers own their parser and stream; results come back over a channel
    /// so progress is reported from this thread. Output keeps input order.
    fn read_descriptors(
        &self,
        descriptors: &[PathBuf],
        jobs: usize,
    ) -> (Vec<DevelopmentComponent>, Vec<PathBuf>) {
        let total = descriptors.len();
        let chunk_size = total.div_ceil(jobs.max(1)).max(1);
        let mut outcomes: Vec<Option<ReadOutcome>> = (0..total).map(|_| None).collect();
        let source = &self.descriptor_source;

        thread::scope(|scope| {
            let (sender, receiver) = mpsc::channel::<(usize, ReadOutcome)>();

            for (chunk_index, chunk) in descriptors.chunks(chunk_size).enumerate() {
                let sender = sender.clone();
                scope.spawn(move || {
                    for (offset, path) in chunk.iter().enumerate() {
                        let outcome = read_descriptor(source, path);
                        if sender.send((chunk_index * chunk_size + offset, outcome)).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(sender);

            for (done, (index, outcome)) in receiver.iter().enumerate() {
                self.progress_reporter
                    .report_progress(done + 1, total, Some(&descriptors[index]));
                outcomes[index] = Some(outcome);
            }
        });

        let mut components = Vec::with_capacity(total);
        let mut skipped = Vec::new();
        for (path, outcome) in descriptors.iter().zip(outcomes) {
            match outcome {
                Some(Ok(component)) => components.push(component),
                Some(Err(e)) => {
                    warn!(path = %path.display(), error = %e, "skipping descriptor");
                    self.progress_reporter.report_skipped(path, &e.to_string());
                    skipped.push(path.clone());
                }
                // worker never reported back
                None => skipped.push(path.clone()),
            }
        }

        (components, skipped)
    }

    fn apply_exclusion_filters(
        &self,
        components: Vec<DevelopmentComponent>,
        request: &ReadRequest,
    ) -> Result<Vec<DevelopmentComponent>> {
        if request.exclude_patterns.is_empty() {
            return Ok(components);
        }

        let filter = ComponentFilter::new(request.exclude_patterns.clone())?;
        let original_count = components.len();
        let kept = filter.filter_components(components);

        let excluded_count = original_count - kept.len();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} component(s) based on filters",
                excluded_count
            ));
        }

        if kept.is_empty() && original_count > 0 {
            anyhow::bail!(
                "All {} component(s) were excluded by the provided filters. \
                 Please adjust your exclusion patterns.",
                original_count
            );
        }

        for pattern in filter.unmatched_patterns() {
            warn!(pattern = %pattern, "exclude pattern did not match any component");
            self.progress_reporter.report(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any component.",
                pattern
            ));
        }

        Ok(kept)
    }
}

/// Opens and parses one descriptor
///
/// Only failing to open is an error here; parse failures are absorbed by the
/// reader and leave a partial record.
fn read_descriptor<DS: DescriptorSource>(source: &DS, path: &Path) -> ReadOutcome {
    let _span = info_span!("descriptor", path = %path.display()).entered();

    let input = source.open(path)?;
    let mut component = DevelopmentComponent::new();
    DcDefinitionReader::new(&mut component).read(input);

    debug!(component = %component.qualified_name(), "read descriptor");
    Ok(component)
}

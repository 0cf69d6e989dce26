use super::assembler::assemble_cues;
use super::builder::{clamp_range, render_cues};
use super::options::{OptionValue, Options};
use super::parser::scan_blocks;
use super::transform::{CueTextTransform, Verbatim};
use super::types::{Cue, LineEnding, TimelinePolicy};
use crate::errors::SubripResult;
use log::{debug, info};

const BOM: char = '\u{feff}';

/// A SubRip document: its cues, the content buffer and the build options.
///
/// `file_content` holds the raw input before [`parse`](Self::parse) and the
/// rendered output after [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct SubripFile {
    cues: Vec<Cue>,
    line_ending: LineEnding,
    detected_line_ending: Option<LineEnding>,
    options: Options,
    policy: TimelinePolicy,
    file_content: String,
}

impl SubripFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a file holding `content`, ready to be parsed
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            file_content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: TimelinePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn set_policy(&mut self, policy: TimelinePolicy) {
        self.policy = policy;
    }

    pub fn policy(&self) -> TimelinePolicy {
        self.policy
    }

    pub fn file_content(&self) -> &str {
        &self.file_content
    }

    pub fn set_file_content(&mut self, content: impl Into<String>) {
        self.file_content = content.into();
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Terminator the input used before the last successful parse normalized it
    pub fn detected_line_ending(&self) -> Option<LineEnding> {
        self.detected_line_ending
    }

    /// Parse `file_content` into cues.
    ///
    /// Returns `Ok(None)` when no cue block is recognized at all, which means
    /// the content is not SubRip. `Ok(Some(n))` reports the number of cues
    /// kept; that can be zero when every block had blank text. Under
    /// [`TimelinePolicy::Strict`] an ordering problem aborts the parse and the
    /// previous cues are left in place.
    pub fn parse(&mut self) -> SubripResult<Option<usize>> {
        let detected = LineEnding::detect(&self.file_content);
        debug!("Detected line ending: {:?}", detected);

        let content = self
            .file_content
            .trim_start_matches(BOM)
            .replace("\r\n", "\n")
            .replace('\r', "\n");

        let blocks = scan_blocks(&content);
        if blocks.is_empty() {
            info!("No SubRip blocks found ({} bytes)", content.len());
            return Ok(None);
        }
        debug!("Scanned {} raw blocks", blocks.len());

        let cues = assemble_cues(&blocks, LineEnding::Lf, self.policy)?;

        self.line_ending = LineEnding::Lf;
        self.detected_line_ending = detected;
        self.file_content = content;
        self.cues = cues;

        info!(
            "Parsed {} cues from {} blocks",
            self.cues.len(),
            blocks.len()
        );
        Ok(Some(self.cues.len()))
    }

    /// Render every cue into `file_content`
    pub fn build(&mut self) -> &str {
        self.build_with(&Verbatim)
    }

    pub fn build_with(&mut self, transform: &dyn CueTextTransform) -> &str {
        let last = self.cues.len() as i64 - 1;
        self.build_range_with(0, last, transform)
    }

    /// Render cues `from..=to` (after sorting) into `file_content`.
    ///
    /// Out-of-range bounds are clamped to the collection; an empty collection
    /// leaves an empty buffer.
    pub fn build_range(&mut self, from: i64, to: i64) -> &str {
        self.build_range_with(from, to, &Verbatim)
    }

    pub fn build_range_with(
        &mut self,
        from: i64,
        to: i64,
        transform: &dyn CueTextTransform,
    ) -> &str {
        self.sort_cues();

        self.file_content = match clamp_range(self.cues.len(), from, to) {
            Some(range) => {
                debug!("Building cues {:?} of {}", range, self.cues.len());
                render_cues(
                    &self.cues[range],
                    self.line_ending,
                    &self.options,
                    transform,
                )
            }
            None => {
                debug!("Nothing to build for range {}..={}", from, to);
                String::new()
            }
        };

        &self.file_content
    }

    /// Replace the options with `pairs` merged over the defaults.
    ///
    /// An unknown key is rejected before anything changes.
    pub fn set_options<I, K>(&mut self, pairs: I) -> SubripResult<()>
    where
        I: IntoIterator<Item = (K, OptionValue)>,
        K: AsRef<str>,
    {
        self.options = Options::merged(pairs)?;
        Ok(())
    }

    pub fn reset_options(&mut self) {
        self.options = Options::default();
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn cue(&self, index: usize) -> Option<&Cue> {
        self.cues.get(index)
    }

    pub fn cue_mut(&mut self, index: usize) -> Option<&mut Cue> {
        self.cues.get_mut(index)
    }

    pub fn first_cue(&self) -> Option<&Cue> {
        self.cues.first()
    }

    pub fn last_cue(&self) -> Option<&Cue> {
        self.cues.last()
    }

    pub fn cue_count(&self) -> usize {
        self.cues.len()
    }

    /// Append a cue, adopting the file's line ending
    pub fn add_cue(&mut self, cue: Cue) {
        self.cues.push(cue.with_line_ending(self.line_ending));
    }

    pub fn remove_cue(&mut self, index: usize) -> Option<Cue> {
        if index < self.cues.len() {
            Some(self.cues.remove(index))
        } else {
            None
        }
    }

    /// Stable sort by start time
    pub fn sort_cues(&mut self) {
        self.cues.sort_by(|a, b| a.start.cmp(&b.start));
    }
}

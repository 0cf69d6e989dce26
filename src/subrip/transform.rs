use super::options::Options;

/// Renders a cue's text for output.
///
/// Tag stripping and replacements live behind this trait; the builder only
/// forwards the current [`Options`].
#[cfg_attr(test, mockall::automock)]
pub trait CueTextTransform {
    fn render(&self, text: &str, options: &Options) -> String;
}

/// Returns the text unchanged, whatever the options say
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl CueTextTransform for Verbatim {
    fn render(&self, text: &str, _options: &Options) -> String {
        text.to_string()
    }
}

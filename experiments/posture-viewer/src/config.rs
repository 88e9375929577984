use crate::ViewerError;
use std::path::PathBuf;

/// Where the viewer takes its postures from.
#[derive(Clone, Debug, PartialEq)]
pub enum PostureSource {
    /// Freshly generated postures; Space generates the next one.
    Random,
    /// A `.json` document or a text file with one posture per line.
    File(PathBuf),
}

/// Configuration for the posture viewer window.
#[derive(Clone, Debug)]
pub struct ViewerConfig {
    width: usize,
    height: usize,
    fps: usize,
    source: PostureSource,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fps: 30,
            source: PostureSource::Random,
        }
    }
}

impl ViewerConfig {
    /// Build a config from command line arguments, program name excluded:
    /// `[random|<file>] [width] [height] [fps]`.
    ///
    /// Missing arguments keep their defaults; a present but malformed number
    /// is an error.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, ViewerError> {
        let mut config = Self::default();
        if let Some(source) = args.next() {
            if source != "random" {
                config = config.with_source(PostureSource::File(source.into()));
            }
        }
        if let Some(width) = args.next() {
            config = config.with_width(parse_dimension("width", &width)?);
        }
        if let Some(height) = args.next() {
            config = config.with_height(parse_dimension("height", &height)?);
        }
        if let Some(fps) = args.next() {
            config = config.with_fps(parse_dimension("fps", &fps)?);
        }
        Ok(config)
    }

    /// Set the window width in pixels.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the window height in pixels.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the target frames per second.
    pub fn with_fps(mut self, fps: usize) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_source(mut self, source: PostureSource) -> Self {
        self.source = source;
        self
    }

    // Getters
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn fps(&self) -> usize {
        self.fps
    }

    pub fn source(&self) -> &PostureSource {
        &self.source
    }
}

fn parse_dimension(label: &str, value: &str) -> Result<usize, ViewerError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ViewerError::Args(format!("{label} must be a positive integer, got `{value}`"))),
    }
}

//! Staged path-to-graph pipeline.
//!
//! Each stage is a pure function from the previous stage's output; the
//! [`Pipeline`] value carries the current output and a [`Stage`] marker so
//! stages run exactly once and in order.

use std::fmt;

use log::debug;

use crate::absolute::absolutize;
use crate::command::{Command, RawCommand};
use crate::error::{ErrorKind, PipelineError, PipelineResult};
use crate::expand::expand;
use crate::normalize::normalize;
use crate::options::PipelineOptions;
use crate::parser::parse_path;
use crate::pslg::Pslg;
use crate::sample::sample_curves;
use crate::subpath::{Regions, extract_regions};

/// The last stage a [`Pipeline`] completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Parsed,
    Expanded,
    Absolute,
    Sampled,
    Normalized,
    Extracted,
    Built,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Parsed => "parsed",
            Self::Expanded => "expanded",
            Self::Absolute => "absolute",
            Self::Sampled => "sampled",
            Self::Normalized => "normalized",
            Self::Extracted => "extracted",
            Self::Built => "built",
        };
        f.write_str(name)
    }
}

/// A path on its way from text to a planar straight-line graph.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stage: Stage,
    options: PipelineOptions,
    raw: Vec<RawCommand>,
    commands: Vec<Command>,
    regions: Option<Regions>,
    pslg: Option<Pslg>,
}

impl Pipeline {
    /// Tokenize `d` and start a pipeline at [`Stage::Parsed`].
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::Parse`] error for malformed path text.
    pub fn parse(d: &str, options: PipelineOptions) -> PipelineResult<Self> {
        let raw = parse_path(d)?;
        Ok(Self {
            stage: Stage::Parsed,
            options,
            raw,
            commands: Vec::new(),
            regions: None,
            pslg: None,
        })
    }

    /// Parse and run every stage, returning the finished graph.
    ///
    /// # Errors
    ///
    /// Propagates the first stage failure.
    pub fn run(d: &str, options: &PipelineOptions) -> PipelineResult<Pslg> {
        Self::parse(d, options.clone())?
            .expand()?
            .absolutize()?
            .sample()?
            .normalize()?
            .extract()?
            .build()?
            .into_pslg()
    }

    fn advance(mut self, from: Stage, to: Stage) -> PipelineResult<Self> {
        if self.stage != from {
            return Err(PipelineError::new(
                ErrorKind::StageOrder,
                format!("cannot go to {to} from {}, expected {from}", self.stage),
            ));
        }
        debug!("pipeline stage {from} -> {to}");
        self.stage = to;
        Ok(self)
    }

    /// Expand raw tuples into atomic commands.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::StageOrder`] unless the pipeline is at
    /// [`Stage::Parsed`], and with [`ErrorKind::Parse`] for bad opcodes or
    /// argument counts.
    pub fn expand(self) -> PipelineResult<Self> {
        let mut next = self.advance(Stage::Parsed, Stage::Expanded)?;
        next.commands = expand(&next.raw)?;
        Ok(next)
    }

    /// Resolve relative and shorthand commands to absolute ones.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::StageOrder`] unless at [`Stage::Expanded`].
    pub fn absolutize(self) -> PipelineResult<Self> {
        let mut next = self.advance(Stage::Expanded, Stage::Absolute)?;
        next.commands = absolutize(&next.commands, next.options.ignore_first_moveto);
        Ok(next)
    }

    /// Flatten curves into line segments and flip the Y axis.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::StageOrder`] unless at [`Stage::Absolute`].
    pub fn sample(self) -> PipelineResult<Self> {
        let mut next = self.advance(Stage::Absolute, Stage::Sampled)?;
        next.commands = sample_curves(&next.commands, next.options.segments_per_curve);
        Ok(next)
    }

    /// Rescale into the unit frame.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::StageOrder`] unless at [`Stage::Sampled`],
    /// and with [`ErrorKind::DegenerateRing`] for a path without extent.
    pub fn normalize(self) -> PipelineResult<Self> {
        let mut next = self.advance(Stage::Sampled, Stage::Normalized)?;
        next.commands = normalize(&next.commands)?;
        Ok(next)
    }

    /// Split into rings and find hole seeds.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::StageOrder`] unless at
    /// [`Stage::Normalized`]; propagates ring and hole-seed errors.
    pub fn extract(self) -> PipelineResult<Self> {
        let mut next = self.advance(Stage::Normalized, Stage::Extracted)?;
        next.regions = Some(extract_regions(&next.commands, &next.options)?);
        Ok(next)
    }

    /// Flatten the regions into a planar straight-line graph.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::StageOrder`] unless at [`Stage::Extracted`].
    pub fn build(self) -> PipelineResult<Self> {
        let mut next = self.advance(Stage::Extracted, Stage::Built)?;
        next.pslg = next.regions.as_ref().map(Pslg::from_regions);
        Ok(next)
    }

    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub const fn options(&self) -> &PipelineOptions {
        &self.options
    }

    #[must_use]
    pub fn raw_commands(&self) -> &[RawCommand] {
        &self.raw
    }

    /// Commands as of the current stage. Empty before expansion.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[must_use]
    pub const fn regions(&self) -> Option<&Regions> {
        self.regions.as_ref()
    }

    #[must_use]
    pub const fn pslg(&self) -> Option<&Pslg> {
        self.pslg.as_ref()
    }

    /// Take the finished graph.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::StageOrder`] unless at [`Stage::Built`].
    pub fn into_pslg(self) -> PipelineResult<Pslg> {
        let stage = self.stage;
        self.pslg.ok_or_else(|| {
            PipelineError::new(
                ErrorKind::StageOrder,
                format!("graph not built yet, pipeline is {stage}"),
            )
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Stages of the report pipeline, used for progress logging.

/// Stages of the report pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// Checking that the input file exists
    ResolvingInput,
    /// Reading the CSV into memory
    Loading,
    /// Rewriting column labels
    NormalizingColumns,
    /// Removing duplicates and parsing dates
    Cleaning,
    /// Narrowing to the reporting subset
    Filtering,
    /// Counting and ranking genres
    GenreAnalysis,
    /// Writing chart, CSV and summary
    Reporting,
}

impl PipelineStage {
    /// Every stage, in execution order.
    pub const ALL: [PipelineStage; 7] = [
        Self::ResolvingInput,
        Self::Loading,
        Self::NormalizingColumns,
        Self::Cleaning,
        Self::Filtering,
        Self::GenreAnalysis,
        Self::Reporting,
    ];

    /// Returns a human-readable name for the stage.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ResolvingInput => "Resolving Input",
            Self::Loading => "Loading Dataset",
            Self::NormalizingColumns => "Normalizing Columns",
            Self::Cleaning => "Cleaning Data",
            Self::Filtering => "Filtering Rows",
            Self::GenreAnalysis => "Analyzing Genres",
            Self::Reporting => "Writing Reports",
        }
    }

    /// 1-based position of the stage.
    pub fn step(&self) -> usize {
        Self::ALL
            .iter()
            .position(|stage| stage == self)
            .map_or(0, |idx| idx + 1)
    }

    /// Progress label such as `[3/7] Normalizing Columns`.
    pub fn label(&self) -> String {
        format!(
            "[{}/{}] {}",
            self.step(),
            Self::ALL.len(),
            self.display_name()
        )
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

//! Profiling engine - turns a DataFrame into a structured report
//!
//! This is the capability the presentation layer treats as opaque: one
//! `ProfileReport::generate` call in, one serializable report out. The
//! engine never writes to the terminal; anything its dependencies print is
//! the caller's problem (see `utils::silence`).

pub mod correlation;
pub mod interactions;
pub mod missing;
pub mod samples;
pub mod stats;

pub use correlation::{correlation_matrix, CorrelationMatrix, CorrelationMethod};
pub use interactions::{continuous_interactions, InteractionPlot};
pub use missing::{missing_bar, nullity_heatmap, nullity_matrix, MissingReport};
pub use samples::{extract_samples, SampleSection};
pub use stats::{
    compute_table_stats, summarize_variables, TableStats, VariableKind, VariableSummary,
};

use anyhow::Result;
use chrono::Utc;
use polars::prelude::DataFrame;
use serde::Serialize;

/// Which correlation coefficients to compute
#[derive(Debug, Clone, Copy)]
pub struct CorrelationSettings {
    pub pearson: bool,
    pub spearman: bool,
    pub kendall: bool,
}

/// Which missing-data diagrams to build
#[derive(Debug, Clone, Copy)]
pub struct MissingDiagrams {
    pub bar: bool,
    pub matrix: bool,
    pub heatmap: bool,
}

/// Report configuration. Defined once at startup, immutable afterwards.
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub title: String,
    pub correlations: CorrelationSettings,
    pub missing_diagrams: MissingDiagrams,
    pub interactions: bool,
    pub head: usize,
    pub tail: usize,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            title: "Data Profile".to_string(),
            correlations: CorrelationSettings {
                pearson: true,
                spearman: true,
                kendall: true,
            },
            missing_diagrams: MissingDiagrams {
                bar: true,
                matrix: true,
                heatmap: true,
            },
            interactions: true,
            head: 10,
            tail: 10,
        }
    }
}

impl ProfileConfig {
    /// A reduced configuration that skips the expensive sections.
    pub fn minimal(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            correlations: CorrelationSettings {
                pearson: false,
                spearman: false,
                kendall: false,
            },
            missing_diagrams: MissingDiagrams {
                bar: true,
                matrix: false,
                heatmap: false,
            },
            interactions: false,
            ..Default::default()
        }
    }
}

/// The complete profiling result, serialized into the HTML document.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub title: String,
    pub generated_at: String,
    pub table: TableStats,
    pub variables: Vec<VariableSummary>,
    pub correlations: Vec<CorrelationMatrix>,
    pub missing: MissingReport,
    pub interactions: Vec<InteractionPlot>,
    pub samples: SampleSection,
}

impl ProfileReport {
    /// Run every configured analysis over the dataset.
    pub fn generate(df: &DataFrame, config: &ProfileConfig) -> Result<Self> {
        let mut correlations = Vec::new();
        let methods = [
            (config.correlations.pearson, CorrelationMethod::Pearson),
            (config.correlations.spearman, CorrelationMethod::Spearman),
            (config.correlations.kendall, CorrelationMethod::KendallTau),
        ];
        for (enabled, method) in methods {
            if !enabled {
                continue;
            }
            if let Some(matrix) = correlation_matrix(df, method)? {
                correlations.push(matrix);
            }
        }

        let missing = MissingReport {
            bar: config.missing_diagrams.bar.then(|| missing_bar(df)),
            matrix: config.missing_diagrams.matrix.then(|| nullity_matrix(df)),
            heatmap: if config.missing_diagrams.heatmap {
                nullity_heatmap(df)?
            } else {
                None
            },
        };

        let interactions = if config.interactions {
            continuous_interactions(df)
        } else {
            Vec::new()
        };

        Ok(Self {
            title: config.title.clone(),
            generated_at: Utc::now().to_rfc3339(),
            table: compute_table_stats(df),
            variables: summarize_variables(df)?,
            correlations,
            missing,
            interactions,
            samples: extract_samples(df, config.head, config.tail),
        })
    }
}

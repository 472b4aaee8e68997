//! Per-feature mount outcomes and the startup report.
//!
//! DESIGN
//! ======
//! Each feature mounts independently. Missing markup makes a feature
//! inactive; a throwing DOM call makes it failed. Neither outcome stops the
//! remaining features from mounting.

#[cfg(test)]
#[path = "feature_test.rs"]
mod feature_test;

use crate::error::PageError;

/// What a feature's mount function found on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount {
    /// Elements present, listeners attached.
    Active,
    /// Required elements absent; nothing wired.
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureState {
    Active,
    Inactive,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureStatus {
    pub name: String,
    pub state: FeatureState,
}

#[derive(Debug, Clone, Default)]
pub struct MountReport {
    pub features: Vec<FeatureStatus>,
}

impl MountReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of mounting `name`.
    pub fn record(&mut self, name: impl Into<String>, outcome: Result<Mount, PageError>) {
        let state = match outcome {
            Ok(Mount::Active) => FeatureState::Active,
            Ok(Mount::Inactive) => FeatureState::Inactive,
            Err(err) => FeatureState::Failed(err.to_string()),
        };
        self.features.push(FeatureStatus { name: name.into(), state });
    }

    #[must_use]
    pub fn count(&self, state: &FeatureState) -> usize {
        self.features
            .iter()
            .filter(|f| std::mem::discriminant(&f.state) == std::mem::discriminant(state))
            .count()
    }

    /// Features that threw while mounting.
    pub fn failed(&self) -> impl Iterator<Item = &FeatureStatus> {
        self.features
            .iter()
            .filter(|f| matches!(f.state, FeatureState::Failed(_)))
    }

    /// One-line summary for the startup log.
    #[must_use]
    pub fn summary(&self) -> String {
        let active = self
            .features
            .iter()
            .filter(|f| f.state == FeatureState::Active)
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>();
        format!(
            "{} active, {} inactive, {} failed [{}]",
            active.len(),
            self.count(&FeatureState::Inactive),
            self.failed().count(),
            active.join(", ")
        )
    }
}

//! Tunable limits and behaviour for normalization and analysis.

/// Controls how `)(` adjacency is handled during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupAdjacency {
    /// Only the first `)(` in the equation gets an implicit `*`. Later groups are left touching,
    /// which the tree builder will then reject. This matches the behaviour existing diagrams and
    /// postfix output were produced with.
    FirstOnly,

    /// Every `)(` gets an implicit `*`.
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisSettings {
    /// Longest equation accepted, measured after whitespace is stripped.
    pub max_length: usize,

    /// Deepest recursion the tree builder may reach before giving up.
    pub max_depth: usize,

    pub group_adjacency: GroupAdjacency,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            max_length: 1024,
            max_depth: 200,
            group_adjacency: GroupAdjacency::FirstOnly,
        }
    }
}

impl AnalysisSettings {
    pub fn with_group_adjacency(self, group_adjacency: GroupAdjacency) -> Self {
        AnalysisSettings { group_adjacency, ..self }
    }
}

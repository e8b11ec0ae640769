use clap::ValueEnum;

/// How report results are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewMode {
    /// Cards with badges
    #[default]
    Gallery,
    /// One compact row per report
    List,
}

/// Presentation choices for the report list
/// This struct contains only UI-specific state (layout, ordering, grouping)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub view_mode: ViewMode,
    /// "name" or a filter id
    pub sort_by: Option<String>,
    /// A filter id
    pub group_by: Option<String>,
}

use crate::models::chart::LineChartConfig;

/// Which kind of work a transaction path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Checkpoint,
    Piscine,
    Project,
}

impl Category {
    /// Legend order.
    pub const ALL: [Category; 3] = [Category::Checkpoint, Category::Piscine, Category::Project];

    /// Three-way classification by path sentinel, first match wins:
    /// `"checkpoint"`, then `"piscine-"`, otherwise a regular project.
    pub fn of_path(path: &str) -> Self {
        if path.contains("checkpoint") {
            Category::Checkpoint
        } else if path.contains("piscine-") {
            Category::Piscine
        } else {
            Category::Project
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Checkpoint => "Checkpoint",
            Category::Piscine => "Piscine",
            Category::Project => "Project",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One color per [`Category`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPalette {
    pub checkpoint: String,
    pub piscine: String,
    pub project: String,
}

impl CategoryPalette {
    pub fn color(&self, category: Category) -> &str {
        match category {
            Category::Checkpoint => &self.checkpoint,
            Category::Piscine => &self.piscine,
            Category::Project => &self.project,
        }
    }

    /// Classify `path` and return its color.
    pub fn color_for_path(&self, path: &str) -> &str {
        self.color(Category::of_path(path))
    }
}

impl From<&LineChartConfig> for CategoryPalette {
    fn from(config: &LineChartConfig) -> Self {
        Self {
            checkpoint: config.checkpoint_color.clone(),
            piscine: config.piscine_color.clone(),
            project: config.project_color.clone(),
        }
    }
}

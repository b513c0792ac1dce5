//! Built-in preset: move the front-end from the `dark-*` palette to `site-*`.

use std::path::PathBuf;

use super::{RenameConfig, ReplacementMode, ReplacementTable};

/// Files that still reference the old palette, relative to the project root
pub const TARGET_FILES: &[&str] = &[
    "app/dashboard/admin/UserManagement.tsx",
    "app/dashboard/admin/page.tsx",
    "app/dashboard/admin/domains/page.tsx",
    "app/supervisor/page.tsx",
    "app/articles/new/page.tsx",
    "components/QuickArticleModal.tsx",
    "app/articles/[slug]/page.tsx",
    "components/EmbeddedArticleViewer.tsx",
    "app/page.tsx",
    "components/PostCard.tsx",
    "components/VotingSlider.tsx",
    "app/create/page.tsx",
    "app/profile/[id]/page.tsx",
    "components/ProfileEditor.tsx",
    "components/DiagramComparison.tsx",
    "components/EnhancedDiagramComparison.tsx",
    "components/SimplePostCard.tsx",
    "components/AdminPostCard.tsx",
    "app/auth/signup/page.tsx",
    "app/auth/signin/page.tsx",
    "app/articles/[slug]/edit/page.tsx",
];

/// Old utility class -> new utility class
pub const TOKEN_RENAMES: &[(&str, &str)] = &[
    ("bg-dark-bg", "bg-site-bg"),
    ("bg-dark-card", "bg-site-card"),
    ("bg-dark-secondary", "bg-site-secondary"),
    ("bg-dark-border", "bg-site-border"),
    ("border-dark-border", "border-site-border"),
    ("text-dark-text", "text-site-text"),
    ("text-dark-muted", "text-site-muted"),
    ("text-dark-secondary", "text-site-secondary"),
    ("divide-dark-border", "divide-site-border"),
    ("ring-dark-border", "ring-site-border"),
    ("from-dark-bg", "from-site-bg"),
    ("to-dark-bg", "to-site-bg"),
    ("from-dark-card", "from-site-card"),
    ("to-dark-card", "to-site-card"),
];

pub fn replacement_table() -> ReplacementTable {
    ReplacementTable::new(TOKEN_RENAMES.iter().copied())
}

pub fn config(base_dir: PathBuf, mode: ReplacementMode) -> RenameConfig {
    RenameConfig {
        base_dir,
        targets: TARGET_FILES.iter().map(|path| path.to_string()).collect(),
        table: replacement_table(),
        mode,
    }
}

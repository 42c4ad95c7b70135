//! Template engine for rendering site pages.

use std::collections::BTreeMap;
use std::path::Path;

use minijinja::{context, Environment};

use crate::data::{Leaderboard, PressItem};

/// Context shared by every rendered page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RenderContext {
    /// Site title.
    pub title: String,
    /// Normalized leaderboard sequence, input order preserved.
    pub leaderboards: Vec<Leaderboard>,
    /// Press mentions, newest first.
    pub press: Vec<PressItem>,
    /// Unique tags across all leaderboards, sorted.
    pub all_tags: Vec<String>,
    /// Leaderboard name to its sorted unique tags.
    pub leaderboard_tags: BTreeMap<String, Vec<String>>,
}

/// Template engine using minijinja.
///
/// Templates are loaded from the project's `templates/` directory by name,
/// so a page discovered at `templates/pages/foo.html` renders as
/// `pages/foo.html`. HTML auto-escaping applies to `.html` template names.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine loading templates from the given directory.
    pub fn from_dir(templates_dir: &Path) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(templates_dir));
        Self { env }
    }

    /// Render one template against the shared context.
    pub fn render(
        &self,
        name: &str,
        ctx: &RenderContext,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(name)?;

        tmpl.render(context! {
            title => &ctx.title,
            leaderboards => &ctx.leaderboards,
            press => &ctx.press,
            all_tags => &ctx.all_tags,
            leaderboard_tags => &ctx.leaderboard_tags,
        })
    }
}

//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole workflow:
//! 1. Validate the title and read today's date from the clock
//! 2. Derive the slug and the dated directory
//! 3. Render `index.md`
//! 4. Create the directory, `assets/` and `index.md`, rolling back on failure
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Clock, Filesystem, TemplateRenderer},
    },
    domain::{
        DomainValidator as validator, FsEntry, PostDate, PostDescriptor, PostLayout,
        RenderContext, SlugStyle, TemplateVariant,
    },
    error::NewPostResult,
};

/// Knobs the service needs, resolved by the caller before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSettings {
    /// Directory the dated post directories are created in
    /// (`<content_root>/posts`). Must already exist.
    pub posts_dir: PathBuf,
    pub variant: TemplateVariant,
    pub slug_style: SlugStyle,
    /// Remove the post directory again if a later step fails.
    pub rollback: bool,
}

impl ScaffoldSettings {
    pub fn new(posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            posts_dir: posts_dir.into(),
            variant: TemplateVariant::default(),
            slug_style: SlugStyle::default(),
            rollback: true,
        }
    }

    pub fn with_variant(mut self, variant: TemplateVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_slug_style(mut self, slug_style: SlugStyle) -> Self {
        self.slug_style = slug_style;
        self
    }

    pub fn with_rollback(mut self, rollback: bool) -> Self {
        self.rollback = rollback;
        self
    }
}

/// A fully planned post: what it is, and what would be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPlan {
    pub post: PostDescriptor,
    pub layout: PostLayout,
}

/// What a scaffold created (or, for a dry run, would create).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub path: PathBuf,
    pub title: String,
    pub slug: String,
    pub date: PostDate,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl ScaffoldReport {
    pub fn from_plan(plan: &PostPlan) -> Self {
        let root = plan.layout.root();
        Self {
            path: root.to_path_buf(),
            title: plan.post.title().to_string(),
            slug: plan.post.slug().to_string(),
            date: plan.post.date(),
            directories: plan
                .layout
                .directories()
                .map(|d| root.join(&d.path))
                .collect(),
            files: plan.layout.files().map(|f| root.join(&f.path)).collect(),
        }
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    settings: ScaffoldSettings,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    clock: Box<dyn Clock>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = ScaffoldService::new(
    ///     ScaffoldSettings::new("docs/posts"),
    ///     Box::new(SimpleRenderer::new()),
    ///     Box::new(LocalFilesystem::new()),
    ///     Box::new(SystemClock),
    /// );
    /// let report = service.scaffold("Hello World")?;
    /// ```
    pub fn new(
        settings: ScaffoldSettings,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            settings,
            renderer,
            filesystem,
            clock,
        }
    }

    /// Work out the post and its layout without touching the filesystem.
    #[instrument(skip(self), fields(variant = %self.settings.variant))]
    pub fn plan(&self, title: &str) -> NewPostResult<PostPlan> {
        let title = validator::validate_title(title)?;
        let date = self.clock.today();
        let post = PostDescriptor::new(title, date, self.settings.slug_style);
        debug!(slug = %post.slug(), %date, "Post descriptor derived");

        let context = RenderContext::for_post(&post);
        let content = self.renderer.render(self.settings.variant, &context)?;

        let layout = PostLayout::standard(post.directory_in(&self.settings.posts_dir), content);
        validator::validate_layout(&layout)?;

        Ok(PostPlan { post, layout })
    }

    /// Scaffold a new post.
    ///
    /// This is the main use case: one dated directory with `assets/` and
    /// `index.md`.
    #[instrument(skip(self), fields(posts_dir = %self.settings.posts_dir.display()))]
    pub fn scaffold(&self, title: &str) -> NewPostResult<ScaffoldReport> {
        let plan = self.plan(title)?;
        info!(path = %plan.layout.root().display(), "Scaffolding post");

        self.write_layout(&plan.layout)?;

        info!("Scaffold completed successfully");
        Ok(ScaffoldReport::from_plan(&plan))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write the layout to the filesystem with rollback on failure.
    fn write_layout(&self, layout: &PostLayout) -> NewPostResult<()> {
        let root = layout.root();

        if self.filesystem.exists(root) {
            return Err(ApplicationError::DirectoryExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        // Rollback only ever covers a root this call created.
        self.filesystem.create_dir(root)?;

        match self.write_entries(layout) {
            Ok(()) => {
                info!(entries = layout.entry_count(), "Successfully wrote all entries");
                Ok(())
            }
            Err(e) if self.settings.rollback => {
                warn!(error = %e, "Write failed, attempting rollback");
                self.rollback(root);
                Err(e)
            }
            Err(e) => {
                warn!(error = %e, path = %root.display(), "Write failed, leaving partial post in place");
                Err(e)
            }
        }
    }

    /// Write all entries in creation order.
    fn write_entries(&self, layout: &PostLayout) -> NewPostResult<()> {
        let root = layout.root();
        for entry in layout.entries() {
            let path = root.join(entry.path());
            match entry {
                FsEntry::Directory(_) => {
                    debug!(path = %path.display(), "Creating directory");
                    self.filesystem.create_dir(&path)?;
                }
                FsEntry::File(file) => {
                    debug!(path = %path.display(), bytes = file.size(), "Writing file");
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }
        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockClock, MockFilesystem, MockTemplateRenderer};
    use crate::domain::{DomainError, vars};
    use crate::error::NewPostError;
    use mockall::Sequence;

    const POSTS: &str = "docs/posts";
    const ROOT: &str = "docs/posts/2024-01-01-hello-world";

    fn clock() -> Box<MockClock> {
        let mut clock = MockClock::new();
        clock
            .expect_today()
            .returning(|| PostDate::from_ymd(2024, 1, 1).unwrap());
        Box::new(clock)
    }

    fn renderer() -> Box<MockTemplateRenderer> {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|_, ctx| {
            Ok(format!(
                "title: {}\ndate: {}\n",
                ctx.get(vars::TITLE).unwrap_or_default(),
                ctx.get(vars::DATE).unwrap_or_default()
            ))
        });
        Box::new(renderer)
    }

    fn service(fs: MockFilesystem, rollback: bool) -> ScaffoldService {
        ScaffoldService::new(
            ScaffoldSettings::new(POSTS).with_rollback(rollback),
            renderer(),
            Box::new(fs),
            clock(),
        )
    }

    fn not_found(path: &Path) -> NewPostError {
        ApplicationError::NotFound {
            path: path.to_path_buf(),
        }
        .into()
    }

    #[test]
    fn scaffold_creates_root_assets_then_index() {
        let mut fs = MockFilesystem::new();
        let mut seq = Sequence::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir()
            .withf(|p| p == Path::new(ROOT))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_create_dir()
            .withf(|p| p == Path::new(ROOT).join("assets"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, content| {
                p == Path::new(ROOT).join("index.md")
                    && content.contains("title: Hello World")
                    && content.contains("date: 2024-01-01")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        fs.expect_remove_dir_all().times(0);

        let report = service(fs, true).scaffold("Hello World").unwrap();
        assert_eq!(report.path, PathBuf::from(ROOT));
        assert_eq!(report.slug, "hello-world");
        assert_eq!(report.date.to_string(), "2024-01-01");
        assert_eq!(report.directories, vec![Path::new(ROOT).join("assets")]);
        assert_eq!(report.files, vec![Path::new(ROOT).join("index.md")]);
    }

    #[test]
    fn existing_directory_is_rejected_without_mutation() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir().times(0);
        fs.expect_write_file().times(0);
        fs.expect_remove_dir_all().times(0);

        let err = service(fs, true).scaffold("Hello World").unwrap_err();
        assert!(err.is_directory_exists());
    }

    #[test]
    fn missing_posts_dir_fails_without_rollback() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir()
            .times(1)
            .returning(|p| Err(not_found(p.parent().unwrap())));
        fs.expect_remove_dir_all().times(0);

        let err = service(fs, true).scaffold("Hello World").unwrap_err();
        assert_eq!(
            err,
            NewPostError::Application(ApplicationError::NotFound {
                path: PathBuf::from(POSTS)
            })
        );
    }

    #[test]
    fn assets_failure_rolls_back_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir()
            .withf(|p| p == Path::new(ROOT))
            .returning(|_| Ok(()));
        fs.expect_create_dir()
            .withf(|p| p.ends_with("assets"))
            .returning(|p| {
                Err(ApplicationError::PermissionDenied {
                    path: p.to_path_buf(),
                }
                .into())
            });
        fs.expect_write_file().times(0);
        fs.expect_remove_dir_all()
            .withf(|p| p == Path::new(ROOT))
            .times(1)
            .returning(|_| Ok(()));

        let err = service(fs, true).scaffold("Hello World").unwrap_err();
        assert!(matches!(
            err,
            NewPostError::Application(ApplicationError::PermissionDenied { .. })
        ));
    }

    #[test]
    fn assets_failure_without_rollback_keeps_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir()
            .withf(|p| p == Path::new(ROOT))
            .returning(|_| Ok(()));
        fs.expect_create_dir()
            .withf(|p| p.ends_with("assets"))
            .returning(|p| {
                Err(ApplicationError::PermissionDenied {
                    path: p.to_path_buf(),
                }
                .into())
            });
        fs.expect_remove_dir_all().times(0);

        assert!(service(fs, false).scaffold("Hello World").is_err());
    }

    #[test]
    fn write_failure_rolls_back_and_reports_write_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir().times(2).returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| {
            Err(ApplicationError::WriteError {
                path: p.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));

        let err = service(fs, true).scaffold("Hello World").unwrap_err();
        assert!(matches!(
            err,
            NewPostError::Application(ApplicationError::WriteError { .. })
        ));
    }

    #[test]
    fn failed_rollback_still_returns_original_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir().times(2).returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| {
            Err(ApplicationError::WriteError {
                path: p.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        fs.expect_remove_dir_all().times(1).returning(|p| {
            Err(ApplicationError::PermissionDenied {
                path: p.to_path_buf(),
            }
            .into())
        });

        let err = service(fs, true).scaffold("Hello World").unwrap_err();
        assert!(matches!(
            err,
            NewPostError::Application(ApplicationError::WriteError { .. })
        ));
    }

    #[test]
    fn plan_rejects_empty_title_before_rendering() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().times(0);
        let mut clock = MockClock::new();
        clock.expect_today().times(0);

        let service = ScaffoldService::new(
            ScaffoldSettings::new(POSTS),
            Box::new(renderer),
            Box::new(MockFilesystem::new()),
            Box::new(clock),
        );

        assert_eq!(
            service.plan("  ").unwrap_err(),
            NewPostError::Domain(DomainError::EmptyTitle)
        );
    }

    #[test]
    fn plan_passes_configured_variant_and_slug_style() {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .withf(|variant, _| *variant == TemplateVariant::Classic)
            .times(1)
            .returning(|_, _| Ok("body".into()));

        let service = ScaffoldService::new(
            ScaffoldSettings::new(POSTS)
                .with_variant(TemplateVariant::Classic)
                .with_slug_style(SlugStyle::Verbatim),
            Box::new(renderer),
            Box::new(MockFilesystem::new()),
            clock(),
        );

        let plan = service.plan("Hello World").unwrap();
        assert_eq!(
            plan.layout.root(),
            Path::new("docs/posts/2024-01-01-Hello World")
        );
        assert_eq!(plan.layout.files().next().unwrap().content, "body");
    }

    #[test]
    fn renderer_failure_propagates() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|_, _| {
            Err(ApplicationError::RenderingFailed {
                reason: "boom".into(),
            }
            .into())
        });
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir().times(0);

        let service = ScaffoldService::new(
            ScaffoldSettings::new(POSTS),
            Box::new(renderer),
            Box::new(fs),
            clock(),
        );

        assert!(matches!(
            service.scaffold("x"),
            Err(NewPostError::Application(ApplicationError::RenderingFailed { .. }))
        ));
    }
}

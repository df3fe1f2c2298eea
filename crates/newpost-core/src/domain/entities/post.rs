use std::path::{Path, PathBuf};

use crate::domain::value_objects::{PostDate, Slug, SlugStyle, Title};

/// Everything known about a post before anything touches the disk.
///
/// Exists only for the duration of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDescriptor {
    title: Title,
    date: PostDate,
    slug: Slug,
}

impl PostDescriptor {
    pub fn new(title: Title, date: PostDate, style: SlugStyle) -> Self {
        let slug = Slug::from_title(&title, style);
        Self { title, date, slug }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn date(&self) -> PostDate {
        self.date
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// `"{date}-{slug}"`, e.g. `2024-01-01-hello-world`.
    pub fn directory_name(&self) -> String {
        format!("{}-{}", self.date, self.slug)
    }

    /// Where this post lives under a posts directory.
    pub fn directory_in(&self, posts_dir: &Path) -> PathBuf {
        posts_dir.join(self.directory_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, style: SlugStyle) -> PostDescriptor {
        PostDescriptor::new(
            Title::new(title).unwrap(),
            PostDate::from_ymd(2024, 1, 1).unwrap(),
            style,
        )
    }

    #[test]
    fn directory_name_joins_date_and_slug() {
        assert_eq!(
            post("Hello World", SlugStyle::Hyphenated).directory_name(),
            "2024-01-01-hello-world"
        );
    }

    #[test]
    fn verbatim_directory_keeps_title() {
        assert_eq!(
            post("Hello World", SlugStyle::Verbatim).directory_name(),
            "2024-01-01-Hello World"
        );
    }

    #[test]
    fn directory_in_appends_single_component() {
        let p = post("My_Post", SlugStyle::Hyphenated);
        let dir = p.directory_in(Path::new("docs/posts"));
        assert_eq!(dir, PathBuf::from("docs/posts/2024-01-01-my-post"));
        assert_eq!(dir.parent(), Some(Path::new("docs/posts")));
    }
}

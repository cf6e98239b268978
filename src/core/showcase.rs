use crate::core::carousel::CarouselController;
use crate::domain::model::{MediaItem, Project};
use crate::utils::error::{Result, ShowcaseError};

/// Which way the last project change went, so renderers can slide the
/// outgoing card out on the correct side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// `1` / `-1`, the form animation code usually wants.
    pub fn sign(&self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Project browser: the current project plus one carousel over its media.
///
/// Every project change reloads the carousel, so the media position never
/// leaks from one project into the next.
#[derive(Debug, Clone)]
pub struct ProjectShowcase {
    projects: Vec<Project>,
    current: usize,
    direction: Direction,
    carousel: CarouselController,
}

impl ProjectShowcase {
    pub fn new(projects: Vec<Project>) -> Self {
        let carousel = projects
            .first()
            .map(|p| CarouselController::new(p.media.clone()))
            .unwrap_or_default();
        Self {
            projects,
            current: 0,
            direction: Direction::default(),
            carousel,
        }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.projects.get(self.current)
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CarouselController {
        &mut self.carousel
    }

    /// First media item of the current project, regardless of where the
    /// carousel is.
    pub fn hero_image(&self) -> Option<&MediaItem> {
        self.current_project().and_then(|p| p.media.first())
    }

    pub fn next_project(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.change_subject((self.current + 1) % len, Direction::Forward);
    }

    pub fn previous_project(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.change_subject((self.current + len - 1) % len, Direction::Backward);
    }

    /// Open a specific project, e.g. from a details link.
    pub fn show_project(&mut self, index: usize) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(ShowcaseError::InvalidIndex { index, len });
        }
        let direction = if index < self.current {
            Direction::Backward
        } else {
            Direction::Forward
        };
        self.change_subject(index, direction);
        Ok(())
    }

    fn change_subject(&mut self, index: usize, direction: Direction) {
        self.current = index;
        self.direction = direction;
        let media = self.projects[index].media.clone();
        self.carousel.load(media);
        tracing::debug!(
            project = %self.projects[index].name,
            media = self.carousel.len(),
            "subject changed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MediaSequence;

    fn project(name: &str, media: usize) -> Project {
        Project {
            name: name.to_string(),
            role: String::new(),
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            repository: None,
            media: (0..media)
                .map(|i| MediaItem::new(format!("@/{}/{}.png", name, i)))
                .collect::<MediaSequence>(),
        }
    }

    #[test]
    fn switching_projects_resets_carousel() {
        let mut showcase = ProjectShowcase::new(vec![project("a", 3), project("b", 2)]);
        showcase.carousel_mut().jump_to(2).unwrap();
        showcase.next_project();
        assert_eq!(showcase.current_project().unwrap().name, "b");
        assert_eq!(showcase.carousel().current_index(), 0);
        assert_eq!(showcase.carousel().len(), 2);
        assert_eq!(showcase.direction(), Direction::Forward);
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut showcase = ProjectShowcase::new(vec![project("a", 1), project("b", 1), project("c", 0)]);
        showcase.previous_project();
        assert_eq!(showcase.current_index(), 2);
        assert_eq!(showcase.direction(), Direction::Backward);
        assert!(showcase.carousel().current().is_none());
        assert!(showcase.hero_image().is_none());
    }

    #[test]
    fn show_project_rejects_out_of_range() {
        let mut showcase = ProjectShowcase::new(vec![project("a", 1)]);
        assert!(matches!(
            showcase.show_project(1),
            Err(ShowcaseError::InvalidIndex { index: 1, len: 1 })
        ));
        assert_eq!(showcase.current_index(), 0);
    }

    #[test]
    fn hero_image_ignores_carousel_position() {
        let mut showcase = ProjectShowcase::new(vec![project("a", 3)]);
        showcase.carousel_mut().advance();
        assert_eq!(showcase.hero_image().unwrap().url, "@/a/0.png");
        assert_eq!(showcase.carousel().current().unwrap().url, "@/a/1.png");
    }

    #[test]
    fn empty_showcase_is_inert() {
        let mut showcase = ProjectShowcase::new(Vec::new());
        showcase.next_project();
        showcase.previous_project();
        assert!(showcase.current_project().is_none());
        assert!(showcase.carousel().is_empty());
        assert_eq!(Direction::Backward.sign(), -1);
    }
}

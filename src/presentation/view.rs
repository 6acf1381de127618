//! Plain-text rendering of the setup screen.

use std::fmt::Write as _;

use crate::application::SetupState;
use crate::domain::entities::Category;
use crate::domain::services::resolve_thumbnail_url;

const SELECTED_MARK: &str = "[x]";
const UNSELECTED_MARK: &str = "[ ]";
const PLACEHOLDER: &str = "[..] loading";

/// Renders `state` as a block of lines.
#[must_use]
pub fn render(state: &SetupState) -> String {
    let mut out = String::new();

    render_categories(&mut out, state);
    render_gallery(&mut out, state);
    render_difficulty(&mut out, state);

    let start = if state.can_start() {
        "Start: ready"
    } else {
        "Start: pick an image first"
    };
    let _ = writeln!(out, "{start}");

    out
}

fn render_categories(out: &mut String, state: &SetupState) {
    let tabs: Vec<String> = Category::ALL
        .iter()
        .map(|category| {
            if *category == state.active_category() {
                format!("<{category}>")
            } else {
                category.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "Categories: {}", tabs.join(" "));
}

fn render_gallery(out: &mut String, state: &SetupState) {
    if state.is_loading() {
        for slot in 1..=state.placeholder_count() {
            let _ = writeln!(out, "  {slot}. {PLACEHOLDER}");
        }
        return;
    }

    if let Some(error) = state.last_error() {
        let _ = writeln!(out, "  Could not load images: {error} (type `refresh` to retry)");
    }

    if !state.images_are_current() {
        if state.last_error().is_none() {
            let _ = writeln!(out, "  No images yet");
        }
        return;
    }

    if state.images().is_empty() {
        let _ = writeln!(out, "  No images in this category");
        return;
    }

    for (slot, record) in state.visible_images().iter().enumerate() {
        let mark = if state.is_selected(record.image_url()) {
            SELECTED_MARK
        } else {
            UNSELECTED_MARK
        };
        let _ = writeln!(
            out,
            "  {}. {mark} {}",
            slot + 1,
            resolve_thumbnail_url(record.image_url())
        );
    }

    let _ = writeln!(
        out,
        "Page {}/{}{}{}",
        state.page() + 1,
        state.total_pages(),
        if state.has_previous_page() { "  [prev]" } else { "" },
        if state.has_next_page() { "  [next]" } else { "" },
    );
}

fn render_difficulty(out: &mut String, state: &SetupState) {
    let sizes: Vec<String> = state
        .allowed_grid_sizes()
        .iter()
        .map(|size| {
            if *size == state.grid_size().get() {
                format!("<{size}>")
            } else {
                size.to_string()
            }
        })
        .collect();
    let _ = writeln!(
        out,
        "Difficulty: {}  Grid: {} ({})",
        state.difficulty(),
        state.grid_size(),
        sizes.join(" ")
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::{
        CategoryCache, DEFAULT_PAGE_SIZE, LoadCategoryUseCase, Prefetcher, SetupController,
    };
    use crate::domain::entities::DifficultyLevel;
    use crate::domain::ports::NoopWarmer;
    use crate::domain::ports::mocks::{MockImageCatalog, MockNavigationPort, sample_images};

    fn cached_controller(count: usize) -> SetupController {
        let mut cache = CategoryCache::new();
        cache.put(Category::Animals, sample_images(Category::Animals, count).into());
        let (controller, _events) = SetupController::new(
            SetupState::new(Category::Animals, DEFAULT_PAGE_SIZE),
            cache,
            LoadCategoryUseCase::new(Arc::new(MockImageCatalog::new())),
            Prefetcher::new(Arc::new(NoopWarmer)),
            Arc::new(MockNavigationPort::new()),
        );
        controller
    }

    #[test]
    fn test_initial_screen() {
        let state = SetupState::new(Category::Nature, DEFAULT_PAGE_SIZE);
        let screen = render(&state);

        assert!(screen.contains("Categories: animals <nature> places objects abstract"));
        assert!(screen.contains("No images yet"));
        assert!(screen.contains("Difficulty: easy  Grid: 3x3 (<3> 4 5 6)"));
        assert!(screen.contains("Start: pick an image first"));
    }

    #[tokio::test]
    async fn test_gallery_with_selection() {
        let mut controller = cached_controller(8);
        controller.open();
        controller.select_visible(1);
        controller.select_difficulty(DifficultyLevel::Medium);

        let screen = render(controller.state());

        assert!(screen.contains("1. [ ] "));
        assert!(screen.contains("2. [x] "));
        assert!(screen.contains("/image/upload/w_260,h_195,c_fill,f_auto,q_auto/"));
        assert!(screen.contains("Page 1/2  [next]"));
        assert!(screen.contains("Grid: 7x7 (<7> 8 9)"));
        assert!(screen.contains("Start: ready"));
    }

    #[tokio::test]
    async fn test_last_page_has_only_prev() {
        let mut controller = cached_controller(8);
        controller.open();
        controller.next_page();

        let screen = render(controller.state());

        assert!(screen.contains("Page 2/2  [prev]"));
        assert!(!screen.contains("[next]"));
        assert!(!screen.contains("3. "));
    }

    #[tokio::test]
    async fn test_empty_category() {
        let mut controller = cached_controller(0);
        controller.open();

        let screen = render(controller.state());
        assert!(screen.contains("No images in this category"));
        assert!(!screen.contains("Page "));
    }
}

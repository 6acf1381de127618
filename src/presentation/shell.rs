//! Line-oriented host for the setup screen.

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use super::commands::{ShellCommand, USAGE};
use super::view::render;
use crate::application::{LoadEvents, LoadReport, SetupController};
use crate::domain::entities::LaunchPayload;

const PROMPT: &str = "> ";

/// What the shell does after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// State changed; draw the screen again.
    Redraw,
    /// Nothing changed; show a message instead.
    Notice(String),
    /// The game was launched.
    Launch(LaunchPayload),
    /// The user left.
    Quit,
}

/// Applies one command to the controller.
pub fn execute(controller: &mut SetupController, command: ShellCommand) -> Flow {
    debug!(?command, "Executing command");

    match command {
        ShellCommand::Category(category) => {
            controller.select_category(category);
            Flow::Redraw
        }
        ShellCommand::NextPage => {
            let moved = controller.next_page();
            paging_flow(controller, moved, "already on the last page")
        }
        ShellCommand::PreviousPage => {
            let moved = controller.previous_page();
            paging_flow(controller, moved, "already on the first page")
        }
        ShellCommand::Page(page) => {
            let moved = controller.go_to_page(page - 1);
            paging_flow(controller, moved, "no images to page through")
        }
        ShellCommand::Pick(slot) => {
            if controller.select_visible(slot - 1) {
                Flow::Redraw
            } else {
                Flow::Notice(format!("no image {slot} on this page"))
            }
        }
        ShellCommand::Difficulty(difficulty) => {
            controller.select_difficulty(difficulty);
            Flow::Redraw
        }
        ShellCommand::Grid(size) => {
            if controller.select_grid_size(size) {
                Flow::Redraw
            } else {
                let state = controller.state();
                let allowed: Vec<String> = state
                    .allowed_grid_sizes()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                Flow::Notice(format!(
                    "grid {size} is not offered at {}; choose one of {}",
                    state.difficulty(),
                    allowed.join(", ")
                ))
            }
        }
        ShellCommand::Start => match controller.start() {
            Some(payload) => Flow::Launch(payload),
            None => Flow::Notice("pick an image before starting".to_string()),
        },
        ShellCommand::Refresh => {
            controller.refresh();
            Flow::Redraw
        }
        ShellCommand::Help => Flow::Notice(USAGE.to_string()),
        ShellCommand::Quit => Flow::Quit,
    }
}

fn paging_flow(controller: &SetupController, moved: bool, notice: &str) -> Flow {
    if moved {
        Flow::Redraw
    } else if !controller.state().images_are_current() {
        Flow::Notice("no gallery to page through yet".to_string())
    } else {
        Flow::Notice(notice.to_string())
    }
}

/// Drives a [`SetupController`] from text input.
#[derive(Debug)]
pub struct SetupShell {
    controller: SetupController,
    events: LoadEvents,
}

impl SetupShell {
    /// Wraps a controller and the receiver returned alongside it.
    #[must_use]
    pub const fn new(controller: SetupController, events: LoadEvents) -> Self {
        Self { controller, events }
    }

    /// Underlying controller.
    #[must_use]
    pub const fn controller(&self) -> &SetupController {
        &self.controller
    }

    /// Runs until the game launches or input ends.
    ///
    /// Fetch completions are applied as they arrive, interleaved with
    /// commands. Returns the launch payload, or `None` if the user quit.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> io::Result<Option<LaunchPayload>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        self.controller.open();
        self.draw(output).await?;

        let launched = loop {
            tokio::select! {
                Some(outcome) = self.events.recv() => {
                    match self.controller.apply_load_outcome(outcome) {
                        LoadReport::Adopted { .. } | LoadReport::Failed { .. } => {
                            self.draw(output).await?;
                        }
                        LoadReport::CachedOnly { .. } | LoadReport::Discarded { .. } => {}
                    }
                }

                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("Input closed");
                        break None;
                    };
                    if line.trim().is_empty() {
                        write_flush(output, PROMPT).await?;
                        continue;
                    }

                    let flow = match line.parse::<ShellCommand>() {
                        Ok(command) => execute(&mut self.controller, command),
                        Err(e) => Flow::Notice(e.to_string()),
                    };

                    match flow {
                        Flow::Redraw => self.draw(output).await?,
                        Flow::Notice(message) => {
                            write_flush(output, &format!("{message}\n{PROMPT}")).await?;
                        }
                        Flow::Launch(payload) => break Some(payload),
                        Flow::Quit => break None,
                    }
                }
            }
        };

        self.controller.shutdown();
        info!(launched = launched.is_some(), "Setup screen closed");
        Ok(launched)
    }

    async fn draw<W>(&self, output: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let screen = render(self.controller.state());
        write_flush(output, &format!("\n{screen}{PROMPT}")).await
    }
}

async fn write_flush<W>(output: &mut W, text: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::io::BufReader;

    use super::*;
    use crate::application::{
        CategoryCache, DEFAULT_PAGE_SIZE, LoadCategoryUseCase, Prefetcher, SetupState,
    };
    use crate::domain::entities::{Category, DifficultyLevel, GridSize};
    use crate::domain::ports::NoopWarmer;
    use crate::domain::ports::mocks::{MockImageCatalog, MockNavigationPort, sample_images};
    use crate::domain::RetrievalError;

    fn shell_with(
        catalog: MockImageCatalog,
        cached: Option<usize>,
        navigator: MockNavigationPort,
    ) -> SetupShell {
        let mut cache = CategoryCache::new();
        if let Some(count) = cached {
            cache.put(Category::Animals, sample_images(Category::Animals, count).into());
        }
        let (controller, events) = SetupController::new(
            SetupState::new(Category::Animals, DEFAULT_PAGE_SIZE),
            cache,
            LoadCategoryUseCase::new(Arc::new(catalog)),
            Prefetcher::new(Arc::new(NoopWarmer)),
            Arc::new(navigator),
        );
        SetupShell::new(controller, events)
    }

    fn idle_navigator() -> MockNavigationPort {
        let mut navigator = MockNavigationPort::new();
        navigator.expect_launch().never();
        navigator
    }

    #[tokio::test]
    async fn test_execute_pick_out_of_range() {
        let mut shell = shell_with(MockImageCatalog::new(), Some(8), idle_navigator());
        shell.controller.open();

        let flow = execute(&mut shell.controller, ShellCommand::Pick(3));
        assert_eq!(flow, Flow::Redraw);

        shell.controller.next_page();
        let flow = execute(&mut shell.controller, ShellCommand::Pick(3));
        assert_eq!(flow, Flow::Notice("no image 3 on this page".to_string()));
    }

    #[tokio::test]
    async fn test_execute_rejected_grid_lists_allowed_sizes() {
        let mut shell = shell_with(MockImageCatalog::new(), Some(1), idle_navigator());
        execute(&mut shell.controller, ShellCommand::Difficulty(DifficultyLevel::Hard));

        let flow = execute(&mut shell.controller, ShellCommand::Grid(4));

        assert_eq!(
            flow,
            Flow::Notice("grid 4 is not offered at hard; choose one of 10, 11, 12".to_string())
        );
        assert_eq!(shell.controller().state().grid_size().get(), 10);
    }

    #[tokio::test]
    async fn test_execute_start_without_selection() {
        let mut shell = shell_with(MockImageCatalog::new(), Some(4), idle_navigator());
        shell.controller.open();

        let flow = execute(&mut shell.controller, ShellCommand::Start);
        assert_eq!(flow, Flow::Notice("pick an image before starting".to_string()));
    }

    #[tokio::test]
    async fn test_execute_paging_at_edges() {
        let mut shell = shell_with(MockImageCatalog::new(), Some(8), idle_navigator());
        shell.controller.open();

        assert_eq!(
            execute(&mut shell.controller, ShellCommand::PreviousPage),
            Flow::Notice("already on the first page".to_string())
        );
        assert_eq!(execute(&mut shell.controller, ShellCommand::Page(5)), Flow::Redraw);
        assert_eq!(shell.controller().state().page(), 1);
        assert_eq!(
            execute(&mut shell.controller, ShellCommand::NextPage),
            Flow::Notice("already on the last page".to_string())
        );
    }

    #[tokio::test]
    async fn test_run_launches_selected_image() {
        let images = sample_images(Category::Animals, 8);
        let expected = LaunchPayload::new(
            images[7].image_url().to_string(),
            GridSize::for_difficulty(DifficultyLevel::Medium, 8).unwrap(),
            DifficultyLevel::Medium,
        );

        let mut navigator = MockNavigationPort::new();
        let launched = expected.clone();
        navigator
            .expect_launch()
            .withf(move |payload| *payload == launched)
            .times(1)
            .return_const(());

        let mut shell = shell_with(MockImageCatalog::new(), Some(8), navigator);
        let input = BufReader::new(&b"next\npick 2\ndifficulty medium\ngrid 8\nstart\n"[..]);
        let mut output = Vec::new();

        let result = shell.run(input, &mut output).await.unwrap();

        assert_eq!(result, Some(expected));
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Page 2/2"));
        assert!(text.contains("Start: ready"));
    }

    #[tokio::test]
    async fn test_run_quit_and_bad_input() {
        let mut shell = shell_with(MockImageCatalog::new(), Some(2), idle_navigator());
        let input = BufReader::new(&b"shuffle\n\nstart\nquit\n"[..]);
        let mut output = Vec::new();

        let result = shell.run(input, &mut output).await.unwrap();

        assert!(result.is_none());
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("unknown command: shuffle"));
        assert!(text.contains("pick an image before starting"));
    }

    #[tokio::test]
    async fn test_run_redraws_when_fetch_fails() {
        let catalog = MockImageCatalog::new().with_failure(
            Category::Animals,
            RetrievalError::status(503, "http://localhost/api/images/category/animals"),
        );
        let mut shell = shell_with(catalog, None, idle_navigator());
        let (input, mut keyboard) = tokio::io::duplex(64);
        let (mut screen, display) = tokio::io::duplex(4096);

        let run = shell.run(BufReader::new(input), &mut screen);
        let user = async {
            let mut lines = BufReader::new(display).lines();
            let mut seen = Vec::new();
            while let Some(line) = lines.next_line().await.unwrap() {
                let failed = line.contains("Could not load images");
                seen.push(line);
                if failed {
                    break;
                }
            }
            keyboard.write_all(b"quit\n").await.unwrap();
            seen
        };
        let (result, seen) = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            async { tokio::join!(run, user) },
        )
        .await
        .unwrap();

        assert!(result.unwrap().is_none());
        assert!(seen.iter().any(|line| line.contains("[..] loading")));
        assert!(seen.last().unwrap().contains("image service returned 503"));
        assert!(shell.controller().state().last_error().is_some());
    }

    #[tokio::test]
    async fn test_paging_while_loading_explains_why() {
        let catalog = MockImageCatalog::new()
            .with_images(Category::Places, sample_images(Category::Places, 3));
        let mut shell = shell_with(catalog, Some(8), idle_navigator());
        shell.controller.open();

        execute(&mut shell.controller, ShellCommand::Category(Category::Places));

        assert_eq!(
            execute(&mut shell.controller, ShellCommand::NextPage),
            Flow::Notice("no gallery to page through yet".to_string())
        );
        assert_eq!(shell.controller().state().page(), 0);
    }
}

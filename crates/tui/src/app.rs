//! Main application struct and run loop.
//!
//! [`App`] owns the [`Board`], feeds it messages (including the follow-up
//! chain each message may produce), and draws it.

use kancli_protocol::Message;
use ratatui::Frame;
use tracing::{debug, info};

use crate::{
    board::Board,
    event::{event_to_message, poll_event},
    terminal::AppTerminal,
    widgets::render_board,
};

/// The main application struct.
#[derive(Debug, Default)]
pub struct App {
    board: Board,
}

impl App {
    /// Creates an application around `board`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kancli_protocol::seed::seed_tasks;
    /// use kancli_tui::{App, Board};
    ///
    /// let app = App::new(Board::with_tasks(seed_tasks()));
    /// assert_eq!(app.board().total_tasks(), 3);
    /// ```
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns `true` once the board asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.board.is_quitting()
    }

    /// Delivers a message and every follow-up it produces.
    ///
    /// When this returns, the board has fully settled: no move or form
    /// submission is left pending.
    pub fn update(&mut self, msg: Message) {
        let mut next = Some(msg);
        while let Some(msg) = next {
            debug!(?msg, "update");
            next = self.board.update(msg);
        }
    }

    /// Draws the board into the frame.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        render_board(&self.board, area, frame.buffer_mut());
    }

    /// Runs the main application loop until the board quits.
    ///
    /// The current terminal size is delivered first so the board can lay
    /// itself out. A final frame is drawn after quitting, which clears the
    /// screen.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kancli_tui::{App, Board, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Board::new());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        let size = terminal.size()?;
        self.update(Message::Resize {
            width: size.width,
            height: size.height,
        });
        info!(tasks = self.board.total_tasks(), "board started");

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if self.should_quit() {
                break;
            }

            if let Some(event) = poll_event()? {
                let form_open = self.board.form().is_some();
                if let Some(msg) = event_to_message(&event, form_open) {
                    self.update(msg);
                }
            }
        }

        Ok(())
    }
}

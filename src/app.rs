//! The interactive program: input loop, editing session and save command.
//!
//! [`App`] is a bubbletea model. Each key press is decoded into exactly one
//! [`Command`] (or, while a cell is being edited, handed to the editor), the
//! grid is updated, its viewport is recomputed and the screen is drawn again.
//!
//! bubbletea constructs the model through [`BubbleTeaModel::init`], which takes
//! no arguments, so the binary hands its [`LaunchOptions`] over with
//! [`set_launch_options`] before starting the program.

use crate::codec;
use crate::command::{Command, GridKeyMap};
use crate::config::{Layout, DEFAULT_OUTPUT};
use crate::editor;
use crate::error::{GridError, Result};
use crate::grid::{Model as GridModel, TerminalSize, CELL_CAPACITY};
use crate::key::short_help_view;
use crate::render::{self, Frame, Status, Styles};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

static LAUNCH: OnceCell<LaunchOptions> = OnceCell::new();

const HELP_SEPARATOR: &str = " | ";

/// Everything the program needs before the first frame.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// The grid, already sized and optionally filled from an imported file.
    pub grid: GridModel,
    /// Destination of the save command.
    pub output: PathBuf,
    /// Message shown in the status line of the first frame.
    pub status: Status,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            grid: GridModel::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            status: Status::Empty,
        }
    }
}

impl LaunchOptions {
    /// Validates the dimensions and builds an empty grid sized for
    /// `terminal`.
    ///
    /// # Errors
    ///
    /// [`GridError::Configuration`] when `rows` or `cols` is out of range or the
    /// layout cannot be drawn.
    pub fn new(
        rows: usize,
        cols: usize,
        terminal: TerminalSize,
        layout: Layout,
        output: impl Into<PathBuf>,
    ) -> Result<Self> {
        layout.validate()?;
        let grid = GridModel::new(rows, cols, terminal, layout)?;
        Ok(Self {
            grid,
            output: output.into(),
            status: Status::Empty,
        })
    }

    /// Fills the grid from decoded CSV records.
    pub fn with_records(mut self, records: &[Vec<String>], source: &Path) -> Self {
        let truncated = self.grid.import(records);
        let rows = records.len().min(self.grid.row_count());
        self.status = if truncated > 0 {
            Status::Info(format!(
                "Loaded {rows} rows from {}, {truncated} fields cut to {CELL_CAPACITY} characters",
                source.display()
            ))
        } else {
            Status::Info(format!("Loaded {rows} rows from {}", source.display()))
        };
        self
    }
}

/// Stores the options [`BubbleTeaModel::init`] starts from.
///
/// # Errors
///
/// [`GridError::Configuration`] when options were already set.
pub fn set_launch_options(options: LaunchOptions) -> Result<()> {
    LAUNCH
        .set(options)
        .map_err(|_| GridError::Configuration("launch options already set".to_string()))
}

/// The grid editor program.
pub struct App {
    grid: GridModel,
    keys: GridKeyMap,
    editor: editor::Model,
    editing: bool,
    status: Status,
    output: PathBuf,
    styles: Styles,
}

impl App {
    /// Creates the program state from launch options.
    pub fn new(options: LaunchOptions) -> Self {
        let mut editor = editor::new();
        editor.set_width(options.grid.layout().cell_width);
        Self {
            grid: options.grid,
            keys: GridKeyMap::default(),
            editor,
            editing: false,
            status: options.status,
            output: options.output,
            styles: Styles::default(),
        }
    }

    /// The grid.
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    /// Last status message.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Whether a cell editor is open.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// The cell editor. Only meaningful while [`App::is_editing`].
    pub fn editor(&self) -> &editor::Model {
        &self.editor
    }

    /// Where the save command writes.
    pub fn output(&self) -> &Path {
        &self.output
    }

    fn execute(&mut self, command: Command) -> Option<Cmd> {
        tracing::trace!(?command, "command");
        if let Some(direction) = command.direction() {
            self.grid.move_cursor(direction);
            // Feedback about an earlier action goes stale once the user moves on.
            if let Status::Info(_) = self.status {
                self.status = Status::Empty;
            }
            return None;
        }
        match command {
            Command::BeginEdit => self.begin_edit(),
            Command::Save => self.save(),
            Command::Quit => {
                tracing::info!("quit requested");
                return Some(bubbletea_rs::quit());
            }
            Command::MoveUp | Command::MoveDown | Command::MoveLeft | Command::MoveRight => {}
        }
        None
    }

    fn begin_edit(&mut self) {
        let current = self.grid.begin_edit().to_string();
        self.editor.set_width(self.grid.layout().cell_width);
        self.editor.set_value(&current);
        self.editor.focus();
        self.editing = true;
        self.status = Status::Empty;
    }

    fn commit_edit(&mut self) {
        let text = self.editor.value();
        let outcome = self.grid.commit_edit(&text);
        if outcome.is_truncated() {
            self.status = Status::Info(format!(
                "{} cut to {CELL_CAPACITY} characters",
                outcome.position
            ));
        }
        self.close_editor();
    }

    fn cancel_edit(&mut self) {
        tracing::debug!(cell = %self.grid.cursor(), "edit cancelled");
        self.close_editor();
    }

    fn close_editor(&mut self) {
        self.editor.blur();
        self.editor.reset();
        self.editing = false;
    }

    fn save(&mut self) {
        self.status = match codec::save(self.grid.table(), &self.output) {
            Ok(()) => Status::Info(format!("Saved to {}", self.output.display())),
            Err(e) => {
                tracing::error!(error = %e, "save failed");
                Status::Error(format!("Save failed: {e}"))
            }
        };
    }

    fn update_editing(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if self.editor.key_map.commit.matches(key) {
                self.commit_edit();
                return None;
            }
            if self.editor.key_map.cancel.matches(key) {
                self.cancel_edit();
                return None;
            }
        }
        let cmd = self.editor.update(msg);
        if let Some(err) = &self.editor.err {
            self.status = Status::Error(err.clone());
        }
        cmd
    }

    fn help_text(&self) -> String {
        if self.editing {
            short_help_view(&self.editor.key_map, HELP_SEPARATOR)
        } else {
            short_help_view(&self.keys, HELP_SEPARATOR)
        }
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let options = LAUNCH.get().cloned().unwrap_or_else(|| {
            tracing::warn!("no launch options set, starting with a 1x1 grid");
            LaunchOptions::default()
        });
        (App::new(options), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let cmd = if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.grid
                .recompute_viewport_size(TerminalSize::new(size.width, size.height));
            None
        } else if self.editing {
            self.update_editing(msg)
        } else if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match self.keys.command_for(key) {
                Some(command) => self.execute(command),
                None => None,
            }
        } else {
            None
        };

        // The clamp runs before every frame, not only on resize.
        let terminal = self.grid.terminal_size();
        self.grid.recompute_viewport_size(terminal);
        cmd
    }

    fn view(&self) -> String {
        let help = self.help_text();
        let frame = Frame {
            editor: self.editing.then_some(&self.editor),
            status: &self.status,
            help: &help,
        };
        render::view(&self.grid, &frame, &self.styles)
    }
}

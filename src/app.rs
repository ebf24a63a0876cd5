//! Application Module
//!
//! Main application state and logic.

use crate::command::{self, TitleAction};
use crate::config::AppConfig;
use crate::filter::FilterCriteria;
use crate::inspector::MkvmergeInspector;
use crate::media::is_mkv_file;
use crate::session::Session;
use crate::utils::DependencyStatus;
use ratatui::widgets::{ListState, TableState};
use std::path::{Path, PathBuf};
use tracing::info;

/// Application screens
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Browse,
    Explorer,
    Filters,
    Results,
}

/// Confirmation dialog action
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    ExitApp,
}

/// Focusable element on the filter screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    AudioLanguages,
    AudioName,
    AudioTypes,
    AudioIds,
    SubtitleLanguages,
    SubtitleName,
    SubtitleTypes,
    SubtitleIds,
    Title,
    Reset,
    Generate,
}

impl FilterField {
    const ORDER: [FilterField; 11] = [
        FilterField::AudioLanguages,
        FilterField::AudioName,
        FilterField::AudioTypes,
        FilterField::AudioIds,
        FilterField::SubtitleLanguages,
        FilterField::SubtitleName,
        FilterField::SubtitleTypes,
        FilterField::SubtitleIds,
        FilterField::Title,
        FilterField::Reset,
        FilterField::Generate,
    ];

    pub fn next(self) -> Self {
        let pos = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(pos + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let pos = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(pos + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Raw filter form entries, parsed into criteria at generation time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterForm {
    pub audio_languages: String,
    pub audio_name: String,
    pub audio_types: String,
    pub audio_ids: String,
    pub subtitle_languages: String,
    pub subtitle_name: String,
    pub subtitle_types: String,
    pub subtitle_ids: String,
    pub title_action: TitleAction,
}

impl FilterForm {
    pub fn new(title_action: TitleAction) -> Self {
        Self {
            title_action,
            ..Self::default()
        }
    }

    /// Restore every criterion to empty and the title choice to the
    /// given default
    pub fn reset(&mut self, title_action: TitleAction) {
        *self = Self::new(title_action);
    }

    pub fn audio_criteria(&self) -> FilterCriteria {
        FilterCriteria::from_entries(
            &self.audio_languages,
            &self.audio_name,
            &self.audio_types,
            &self.audio_ids,
        )
    }

    pub fn subtitle_criteria(&self) -> FilterCriteria {
        FilterCriteria::from_entries(
            &self.subtitle_languages,
            &self.subtitle_name,
            &self.subtitle_types,
            &self.subtitle_ids,
        )
    }

    pub fn entry_mut(&mut self, field: FilterField) -> Option<&mut String> {
        match field {
            FilterField::AudioLanguages => Some(&mut self.audio_languages),
            FilterField::AudioName => Some(&mut self.audio_name),
            FilterField::AudioTypes => Some(&mut self.audio_types),
            FilterField::AudioIds => Some(&mut self.audio_ids),
            FilterField::SubtitleLanguages => Some(&mut self.subtitle_languages),
            FilterField::SubtitleName => Some(&mut self.subtitle_name),
            FilterField::SubtitleTypes => Some(&mut self.subtitle_types),
            FilterField::SubtitleIds => Some(&mut self.subtitle_ids),
            _ => None,
        }
    }
}

/// Main application state
pub struct App {
    pub current_screen: Screen,
    pub should_quit: bool,

    // Session
    pub session: Session,
    pub inspector: MkvmergeInspector,
    pub config: AppConfig,
    pub deps: DependencyStatus,

    // File grid
    pub browse_index: usize,
    pub table_state: TableState,
    pub editing_path: bool,
    pub path_input: String,
    pub path_invalid: bool,
    pub multi_line: bool,

    // Folder explorer
    pub explorer_dir: PathBuf,
    pub dir_entries: Vec<PathBuf>,
    pub explorer_index: usize,
    pub explorer_list_state: ListState,

    // Filter form
    pub form: FilterForm,
    pub filter_focus: FilterField,

    // Results
    pub output: String,
    pub results_scroll: u16,

    // UI state
    pub message: Option<String>,
    pub confirm_dialog: Option<ConfirmAction>,
    pub confirm_selection: bool,
}

impl App {
    pub fn new(folder: PathBuf, config: AppConfig) -> Self {
        let inspector = MkvmergeInspector::new(config.tools.inspector.clone());
        let deps = DependencyStatus::check(&config.tools.inspector, &config.tools.editor);
        info!("starting in {}", folder.display());
        info!(
            "inspector available: {}, editor available: {}",
            deps.inspector_ok, deps.editor_ok
        );

        let mut table_state = TableState::default();
        table_state.select(Some(0));
        let mut explorer_list_state = ListState::default();
        explorer_list_state.select(Some(0));

        let form = FilterForm::new(config.output.title_action);
        let multi_line = config.display.multi_line;
        let path_input = folder.to_string_lossy().to_string();

        Self {
            current_screen: Screen::Browse,
            should_quit: false,
            session: Session::new(folder.clone()),
            inspector,
            config,
            deps,
            browse_index: 0,
            table_state,
            editing_path: false,
            path_input,
            path_invalid: false,
            multi_line,
            explorer_dir: folder,
            dir_entries: Vec::new(),
            explorer_index: 0,
            explorer_list_state,
            form,
            filter_focus: FilterField::AudioLanguages,
            output: String::new(),
            results_scroll: 0,
            message: None,
            confirm_dialog: None,
            confirm_selection: false,
        }
    }

    // Message handling

    pub fn set_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    // Navigation

    pub fn navigate_to_browse(&mut self) {
        self.current_screen = Screen::Browse;
    }

    pub fn navigate_to_explorer(&mut self) {
        self.explorer_dir = self.session.folder.clone();
        self.refresh_dir_entries();
        self.current_screen = Screen::Explorer;
    }

    pub fn navigate_to_filters(&mut self) {
        self.filter_focus = FilterField::AudioLanguages;
        self.current_screen = Screen::Filters;
    }

    pub fn navigate_to_results(&mut self) {
        self.results_scroll = 0;
        self.current_screen = Screen::Results;
    }

    // Scanning

    /// Discard and reload everything in the current folder
    pub fn refresh(&mut self) {
        if let Err(e) = self.session.rescan(&self.inspector) {
            self.set_message(&e.to_string());
        } else if self.session.error_count() > 0 {
            self.set_message(&format!(
                "{} file(s) could not be inspected",
                self.session.error_count()
            ));
        }
        self.browse_index = 0;
        self.table_state.select(Some(0));
    }

    // Path entry

    pub fn start_path_edit(&mut self) {
        self.editing_path = true;
        self.path_invalid = false;
        self.path_input = self.session.folder.to_string_lossy().to_string();
    }

    pub fn cancel_path_edit(&mut self) {
        self.editing_path = false;
        self.path_invalid = false;
        self.path_input = self.session.folder.to_string_lossy().to_string();
    }

    /// Apply the typed folder path. A path that is not a folder is
    /// flagged invalid and nothing is reloaded.
    pub fn apply_path_input(&mut self) {
        let trimmed = self.path_input.trim_end_matches('/');
        let candidate = if trimmed.is_empty() {
            PathBuf::from("/")
        } else {
            PathBuf::from(trimmed)
        };

        if candidate.is_dir() {
            self.editing_path = false;
            self.path_invalid = false;
            self.path_input = candidate.to_string_lossy().to_string();
            self.change_folder(candidate);
        } else {
            self.path_invalid = true;
        }
    }

    fn change_folder(&mut self, folder: PathBuf) {
        if let Err(e) = self.session.set_folder(folder, &self.inspector) {
            self.set_message(&e.to_string());
        }
        self.browse_index = 0;
        self.table_state.select(Some(0));
    }

    // File grid

    pub fn browse_move_up(&mut self) {
        if self.browse_index > 0 {
            self.browse_index -= 1;
            self.table_state.select(Some(self.browse_index));
        }
    }

    pub fn browse_move_down(&mut self) {
        if self.browse_index < self.session.files.len().saturating_sub(1) {
            self.browse_index += 1;
            self.table_state.select(Some(self.browse_index));
        }
    }

    pub fn toggle_multi_line(&mut self) {
        self.multi_line = !self.multi_line;
    }

    /// Separator between tracks in the grid summaries
    pub fn track_separator(&self) -> &'static str {
        if self.multi_line { "\n" } else { ",  " }
    }

    // Folder explorer

    pub fn refresh_dir_entries(&mut self) {
        self.dir_entries.clear();

        if let Some(parent) = self.explorer_dir.parent()
            && parent != self.explorer_dir
        {
            self.dir_entries.push(PathBuf::from(".."));
        }

        if let Ok(entries) = std::fs::read_dir(&self.explorer_dir) {
            let mut paths: Vec<PathBuf> = entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_dir() || is_mkv_file(p))
                .collect();

            // Directories first, then files
            paths.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => a.file_name().cmp(&b.file_name()),
            });

            self.dir_entries.extend(paths);
        }

        self.explorer_index = 0;
        self.explorer_list_state.select(Some(0));
    }

    pub fn explorer_move_up(&mut self) {
        if self.explorer_index > 0 {
            self.explorer_index -= 1;
            self.explorer_list_state.select(Some(self.explorer_index));
        }
    }

    pub fn explorer_move_down(&mut self) {
        if self.explorer_index < self.dir_entries.len().saturating_sub(1) {
            self.explorer_index += 1;
            self.explorer_list_state.select(Some(self.explorer_index));
        }
    }

    pub fn enter_directory(&mut self) {
        if self.dir_entries.is_empty() {
            return;
        }

        let selected = self.dir_entries[self.explorer_index].clone();

        if selected == Path::new("..") {
            if let Some(parent) = self.explorer_dir.parent() {
                self.explorer_dir = parent.to_path_buf();
                self.refresh_dir_entries();
            }
        } else if selected.is_dir() {
            self.explorer_dir = selected;
            self.refresh_dir_entries();
        }
    }

    /// Take the explorer's current directory as the session folder
    pub fn select_explorer_dir(&mut self) {
        let folder = self.explorer_dir.clone();
        self.path_input = folder.to_string_lossy().to_string();
        self.path_invalid = false;
        self.change_folder(folder);
        self.navigate_to_browse();
        if self.session.files.is_empty() {
            self.set_message("No mkv files found in this folder");
        }
    }

    // Command generation

    /// Build the command lines for every loaded file and show them
    pub fn generate(&mut self) {
        self.output = command::render_output(
            &self.config.tools.editor,
            &self.session.files,
            &self.form.audio_criteria(),
            &self.form.subtitle_criteria(),
            self.form.title_action,
        );
        info!(
            "generated commands for {} file(s)",
            self.output.lines().count() / 2
        );
        self.navigate_to_results();
    }

    pub fn reset_filters(&mut self) {
        self.form.reset(self.config.output.title_action);
    }
}

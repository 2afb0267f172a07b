use std::path::Path;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;

use crate::draft::{AutosaveClock, DraftStore};
use crate::export::{ExportFormat, write_export};
use crate::listing::{FetchSpec, ListQuery};
use crate::model::{
    ApiConfig, ListEnvelope, Post, PostInput, Resource, Story, Submission, Subscriber, TeamMember,
};
use crate::remote::ApiClient;
use crate::store::{LocalStore, MemKvStore};
use crate::validate::{FieldIssue, validate_post};

use super::editor::{EditorTarget, PostEditor};
use super::input::Input;
use super::modal;
use super::suggest::{score_match, sort_scored_suggestions};
use super::view::{RenderCtx, View};
use super::views::{PostsView, StoriesView, SubmissionsView, SubscribersView, TeamView};

mod commands_exec;
mod editor_ops;
mod event_loop;
mod fetch;
mod input_hints;
mod lifecycle;
mod log_types;
mod modal_output;
mod modal_types;
mod mode_commands;
mod mutations;
mod parse_utils;
mod render;
mod runtime;
mod session_trace;
mod state;
mod time_utils;
mod types;
mod view_nav;

use self::input_hints::{input_hint_left, input_hint_right};
pub(super) use self::log_types::CommandDef;
use self::log_types::{EntryKind, ScrollEntry};
pub(super) use self::modal_types::{Modal, ModalKind, PendingAction, TextInputAction};
use self::mode_commands::mode_command_defs;
use self::parse_utils::{server_label, tokenize};
pub(super) use self::runtime::run;
pub(super) use self::state::App;
pub(super) use self::time_utils::{fmt_ts_list, fmt_ts_ui, now_ts};
use self::types::ALL_MODES;
pub(super) use self::types::{TimestampMode, UiMode};

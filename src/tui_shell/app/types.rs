use super::*;

/// One screen per admin resource; the digit keys jump straight to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum UiMode {
    Posts,
    Stories,
    Subscribers,
    Submissions,
    Team,
}

pub(in crate::tui_shell) const ALL_MODES: [UiMode; 5] = [
    UiMode::Posts,
    UiMode::Stories,
    UiMode::Subscribers,
    UiMode::Submissions,
    UiMode::Team,
];

impl UiMode {
    pub(in crate::tui_shell) fn prompt(self) -> &'static str {
        match self {
            UiMode::Posts => "posts>",
            UiMode::Stories => "stories>",
            UiMode::Subscribers => "subscribers>",
            UiMode::Submissions => "submissions>",
            UiMode::Team => "team>",
        }
    }

    pub(in crate::tui_shell) fn resource(self) -> Resource {
        match self {
            UiMode::Posts => Resource::Posts,
            UiMode::Stories => Resource::Stories,
            UiMode::Subscribers => Resource::Subscribers,
            UiMode::Submissions => Resource::Submissions,
            UiMode::Team => Resource::Team,
        }
    }

    pub(super) fn command_name(self) -> &'static str {
        match self {
            UiMode::Posts => "posts",
            UiMode::Stories => "stories",
            UiMode::Subscribers => "subscribers",
            UiMode::Submissions => "submissions",
            UiMode::Team => "team",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum TimestampMode {
    Relative,
    Absolute,
}

impl TimestampMode {
    pub(super) fn toggle(self) -> Self {
        match self {
            TimestampMode::Relative => TimestampMode::Absolute,
            TimestampMode::Absolute => TimestampMode::Relative,
        }
    }

    pub(super) fn label(self) -> &'static str {
        match self {
            TimestampMode::Relative => "relative",
            TimestampMode::Absolute => "absolute",
        }
    }
}

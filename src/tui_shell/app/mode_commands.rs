use super::super::commands::{
    global_command_defs, listing_command_defs, posts_command_defs, stories_command_defs,
    submissions_command_defs, subscribers_command_defs, team_command_defs,
};
use super::{CommandDef, UiMode};

pub(super) fn mode_command_defs(mode: UiMode) -> Vec<CommandDef> {
    let mut out = match mode {
        UiMode::Posts => posts_command_defs(),
        UiMode::Stories => stories_command_defs(),
        UiMode::Subscribers => subscribers_command_defs(),
        UiMode::Submissions => submissions_command_defs(),
        UiMode::Team => team_command_defs(),
    };
    out.extend(listing_command_defs());
    out.extend(global_command_defs());
    out
}

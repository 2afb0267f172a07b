use super::CommandDef;

pub(super) fn global_command_defs() -> Vec<CommandDef> {
    vec![
        CommandDef {
            name: "help",
            aliases: &["h", "?"],
            usage: "help [command]",
            help: "Show help",
        },
        CommandDef {
            name: "login",
            aliases: &[],
            usage: "login",
            help: "Configure the API base URL and token",
        },
        CommandDef {
            name: "logout",
            aliases: &[],
            usage: "logout",
            help: "Forget the stored API token",
        },
        CommandDef {
            name: "posts",
            aliases: &[],
            usage: "posts",
            help: "Switch to blog posts",
        },
        CommandDef {
            name: "stories",
            aliases: &[],
            usage: "stories",
            help: "Switch to success stories",
        },
        CommandDef {
            name: "subscribers",
            aliases: &["subs"],
            usage: "subscribers",
            help: "Switch to newsletter subscribers",
        },
        CommandDef {
            name: "submissions",
            aliases: &["forms"],
            usage: "submissions",
            help: "Switch to contact form submissions",
        },
        CommandDef {
            name: "team",
            aliases: &[],
            usage: "team",
            help: "Switch to team members",
        },
        CommandDef {
            name: "ts",
            aliases: &[],
            usage: "ts",
            help: "Toggle relative/absolute timestamps",
        },
        CommandDef {
            name: "clear",
            aliases: &[],
            usage: "clear",
            help: "Clear the command log",
        },
        CommandDef {
            name: "quit",
            aliases: &["exit"],
            usage: "quit",
            help: "Exit",
        },
    ]
}

/// Commands every list screen shares.
pub(super) fn listing_command_defs() -> Vec<CommandDef> {
    vec![
        CommandDef {
            name: "refresh",
            aliases: &["r"],
            usage: "refresh",
            help: "Fetch the current page again",
        },
        CommandDef {
            name: "search",
            aliases: &[],
            usage: "search [text]",
            help: "Set the search text (empty clears)",
        },
        CommandDef {
            name: "filter",
            aliases: &[],
            usage: "filter <name> <value>",
            help: "Apply a filter; value `all` removes it",
        },
        CommandDef {
            name: "clear-filters",
            aliases: &[],
            usage: "clear-filters",
            help: "Remove every filter",
        },
        CommandDef {
            name: "page",
            aliases: &[],
            usage: "page <n>",
            help: "Jump to page n",
        },
        CommandDef {
            name: "next",
            aliases: &["n"],
            usage: "next",
            help: "Go to the next page",
        },
        CommandDef {
            name: "prev",
            aliases: &["p"],
            usage: "prev",
            help: "Go to the previous page",
        },
    ]
}

pub(super) fn posts_command_defs() -> Vec<CommandDef> {
    vec![
        CommandDef {
            name: "new",
            aliases: &[],
            usage: "new",
            help: "Open the post editor (resumes a saved draft)",
        },
        CommandDef {
            name: "edit",
            aliases: &[],
            usage: "edit",
            help: "Edit the selected post",
        },
        CommandDef {
            name: "delete",
            aliases: &["del"],
            usage: "delete",
            help: "Delete the selected post",
        },
    ]
}

pub(super) fn stories_command_defs() -> Vec<CommandDef> {
    vec![CommandDef {
        name: "delete",
        aliases: &["del"],
        usage: "delete",
        help: "Delete the selected story",
    }]
}

pub(super) fn subscribers_command_defs() -> Vec<CommandDef> {
    vec![
        CommandDef {
            name: "export",
            aliases: &[],
            usage: "export [csv|json]",
            help: "Download the subscriber list to a dated file",
        },
        CommandDef {
            name: "delete",
            aliases: &["del"],
            usage: "delete",
            help: "Delete the selected subscriber",
        },
    ]
}

pub(super) fn submissions_command_defs() -> Vec<CommandDef> {
    vec![CommandDef {
        name: "delete",
        aliases: &["del"],
        usage: "delete",
        help: "Delete the selected submission",
    }]
}

pub(super) fn team_command_defs() -> Vec<CommandDef> {
    vec![CommandDef {
        name: "delete",
        aliases: &["del"],
        usage: "delete",
        help: "Remove the selected team member",
    }]
}

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Save the admin API base url and store its token
    Login {
        #[arg(long)]
        url: String,
        #[arg(long)]
        token: String,
    },

    /// Clear the stored admin API token
    Logout,

    /// Blog posts
    Posts {
        #[command(subcommand)]
        command: PostCommands,
    },

    /// Client success stories
    Stories {
        #[command(subcommand)]
        command: StoryCommands,
    },

    /// Newsletter subscribers
    Subscribers {
        #[command(subcommand)]
        command: SubscriberCommands,
    },

    /// Contact form submissions
    Submissions {
        #[command(subcommand)]
        command: SubmissionCommands,
    },

    /// Team members
    Team {
        #[command(subcommand)]
        command: TeamCommands,
    },
}

#[derive(Subcommand)]
pub(crate) enum PostCommands {
    /// List posts
    List {
        /// Match against title and content
        #[arg(long)]
        search: Option<String>,
        /// Filter by status: draft|published|all
        #[arg(long)]
        status: Option<String>,
        /// Filter by featured flag
        #[arg(long)]
        featured: Option<bool>,
        /// Filter by tag
        #[arg(long)]
        tag: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        slug: String,
        #[arg(long)]
        excerpt: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        cover_url: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
        /// Status: draft|published
        #[arg(long, default_value = "draft")]
        status: String,
        #[arg(long)]
        featured: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace a post
    Update {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        slug: String,
        #[arg(long)]
        excerpt: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        cover_url: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
        /// Status: draft|published
        #[arg(long, default_value = "draft")]
        status: String,
        #[arg(long)]
        featured: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a post
    Delete {
        id: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum StoryCommands {
    /// List stories
    List {
        /// Match against title and client
        #[arg(long)]
        search: Option<String>,
        /// Filter by status: draft|published|all
        #[arg(long)]
        status: Option<String>,
        /// Filter by featured flag
        #[arg(long)]
        featured: Option<bool>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a story
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        client: String,
        #[arg(long)]
        summary: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long)]
        cover_url: Option<String>,
        /// Status: draft|published
        #[arg(long, default_value = "draft")]
        status: String,
        #[arg(long)]
        featured: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace a story
    Update {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        client: String,
        #[arg(long)]
        summary: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long)]
        cover_url: Option<String>,
        /// Status: draft|published
        #[arg(long, default_value = "draft")]
        status: String,
        #[arg(long)]
        featured: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a story
    Delete {
        id: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum SubscriberCommands {
    /// List subscribers
    List {
        /// Match against email and name
        #[arg(long)]
        search: Option<String>,
        /// Filter by status: subscribed|unsubscribed|all
        #[arg(long)]
        status: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Download the subscriber list as a dated file
    Export {
        /// Format: csv|json
        #[arg(long, default_value = "csv")]
        format: String,
        /// Directory to write into (defaults to the current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a subscriber
    Delete {
        id: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum SubmissionCommands {
    /// List contact form submissions
    List {
        /// Match against name, email and message
        #[arg(long)]
        search: Option<String>,
        /// Filter by originating form
        #[arg(long)]
        form_name: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a submission
    Delete {
        id: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum TeamCommands {
    /// List team members
    List {
        /// Match against name and role
        #[arg(long)]
        search: Option<String>,
        /// Filter by role
        #[arg(long)]
        role: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a team member
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        photo_url: Option<String>,
        #[arg(long, default_value = "")]
        bio: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace a team member
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        photo_url: Option<String>,
        #[arg(long, default_value = "")]
        bio: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a team member
    Delete {
        id: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

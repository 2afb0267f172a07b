mod posts;
mod stories;
mod submissions;
mod subscribers;
mod team;

pub(super) use self::posts::PostsView;
pub(super) use self::stories::StoriesView;
pub(super) use self::submissions::SubmissionsView;
pub(super) use self::subscribers::SubscribersView;
pub(super) use self::team::TeamView;

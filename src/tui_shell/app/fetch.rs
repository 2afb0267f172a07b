use std::thread;

use super::*;

/// Outcome of one list fetch, tagged with the resource it was issued for and
/// the controller sequence number that proves freshness.
pub(super) struct FetchReply {
    pub(super) resource: Resource,
    pub(super) seq: u64,
    pub(super) delivery: FetchDelivery,
}

pub(super) enum FetchDelivery {
    Posts(Result<ListEnvelope<Post>, String>),
    Stories(Result<ListEnvelope<Story>, String>),
    Subscribers(Result<ListEnvelope<Subscriber>, String>),
    Submissions(Result<ListEnvelope<Submission>, String>),
    Team(Result<ListEnvelope<TeamMember>, String>),
}

fn run_fetch(client: &ApiClient, resource: Resource, query: &ListQuery) -> FetchDelivery {
    match resource {
        Resource::Posts => {
            FetchDelivery::Posts(client.list_posts(query).map_err(|e| format!("{:#}", e)))
        }
        Resource::Stories => {
            FetchDelivery::Stories(client.list_stories(query).map_err(|e| format!("{:#}", e)))
        }
        Resource::Subscribers => FetchDelivery::Subscribers(
            client.list_subscribers(query).map_err(|e| format!("{:#}", e)),
        ),
        Resource::Submissions => FetchDelivery::Submissions(
            client.list_submissions(query).map_err(|e| format!("{:#}", e)),
        ),
        Resource::Team => {
            FetchDelivery::Team(client.list_team(query).map_err(|e| format!("{:#}", e)))
        }
    }
}

fn err_delivery(resource: Resource, msg: String) -> FetchDelivery {
    match resource {
        Resource::Posts => FetchDelivery::Posts(Err(msg)),
        Resource::Stories => FetchDelivery::Stories(Err(msg)),
        Resource::Subscribers => FetchDelivery::Subscribers(Err(msg)),
        Resource::Submissions => FetchDelivery::Submissions(Err(msg)),
        Resource::Team => FetchDelivery::Team(Err(msg)),
    }
}

impl App {
    /// Runs `spec` on a worker thread so the event loop never blocks on the
    /// network. The reply lands in `fetch_rx`; the controller's sequence
    /// check makes anything but the newest fetch a no-op.
    pub(super) fn dispatch_fetch(&mut self, spec: FetchSpec) {
        let resource = self.view.resource();
        let Some(client) = self.client.clone() else {
            let delivery = err_delivery(resource, "not logged in (run `login`)".to_string());
            let _ = self.fetch_tx.send(FetchReply {
                resource,
                seq: spec.seq,
                delivery,
            });
            return;
        };
        let tx = self.fetch_tx.clone();
        thread::spawn(move || {
            let delivery = run_fetch(&client, resource, &spec.query);
            let _ = tx.send(FetchReply {
                resource,
                seq: spec.seq,
                delivery,
            });
        });
    }

    /// Fires the debounced search once its 300ms window has passed.
    pub(super) fn poll_search_debounce(&mut self) {
        if let Some(spec) = self.view.list_mut().poll(Instant::now()) {
            self.dispatch_fetch(spec);
        }
    }

    pub(super) fn drain_fetch_replies(&mut self) {
        loop {
            let reply = match self.fetch_rx.try_recv() {
                Ok(r) => r,
                Err(_) => return,
            };
            self.apply_fetch_reply(reply);
        }
    }

    fn apply_fetch_reply(&mut self, reply: FetchReply) {
        if reply.resource != self.view.resource() {
            // The screen that asked for this page is gone.
            return;
        }
        let seq = reply.seq;
        let committed = match reply.delivery {
            FetchDelivery::Posts(outcome) => self
                .current_view_mut::<PostsView>()
                .is_some_and(|v| v.commit(seq, outcome)),
            FetchDelivery::Stories(outcome) => self
                .current_view_mut::<StoriesView>()
                .is_some_and(|v| v.commit(seq, outcome)),
            FetchDelivery::Subscribers(outcome) => self
                .current_view_mut::<SubscribersView>()
                .is_some_and(|v| v.commit(seq, outcome)),
            FetchDelivery::Submissions(outcome) => self
                .current_view_mut::<SubmissionsView>()
                .is_some_and(|v| v.commit(seq, outcome)),
            FetchDelivery::Team(outcome) => self
                .current_view_mut::<TeamView>()
                .is_some_and(|v| v.commit(seq, outcome)),
        };
        if !committed {
            return;
        }
        if let Some(err) = self.view.list().error().map(str::to_string) {
            self.trace_error(&err);
        }
    }
}

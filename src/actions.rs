// src/actions.rs
use crate::api::Backend;
use crate::model::ActivityMap;
use crate::status::Notice;

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(ActivityMap),
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Signup,
    Unregister,
}

impl Action {
    fn rejected_fallback(self) -> &'static str {
        match self {
            Action::Signup => "An error occurred",
            Action::Unregister => "Unable to remove participant",
        }
    }

    fn transport_message(self) -> &'static str {
        match self {
            Action::Signup => "Failed to sign up. Please try again.",
            Action::Unregister => "Failed to remove participant. Please try again.",
        }
    }

    fn log_context(self) -> &'static str {
        match self {
            Action::Signup => "Error signing up",
            Action::Unregister => "Error removing participant",
        }
    }
}

/// What the view should do once a signup/unregister request settles.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub notice: Notice,
    pub reset_form: bool,
    /// The list changed on the server; fetch it again after showing `notice`.
    pub reload: bool,
}

pub async fn load<B: Backend>(backend: &B) -> ListState {
    match backend.activities().await {
        Ok(map) => {
            log::info!("Loaded {} activities", map.len());
            ListState::Loaded(map)
        }
        Err(e) => {
            log::error!("Error fetching activities: {e}");
            ListState::Failed
        }
    }
}

pub async fn perform<B: Backend>(
    backend: &B,
    action: Action,
    activity: &str,
    email: &str,
) -> Completion {
    let result = match action {
        Action::Signup => backend.signup(activity, email).await,
        Action::Unregister => backend.unregister(activity, email).await,
    };

    match result {
        // A success without `message` still shows the (empty) success banner.
        Ok(reply) if reply.ok => Completion {
            notice: Notice::success(reply.body.message.unwrap_or_default()),
            reset_form: action == Action::Signup,
            reload: true,
        },
        Ok(reply) => Completion {
            notice: Notice::error(
                reply
                    .body
                    .detail
                    .unwrap_or_else(|| action.rejected_fallback().to_string()),
            ),
            reset_form: false,
            reload: false,
        },
        Err(e) => {
            log::error!("{}: {e}", action.log_context());
            Completion {
                notice: Notice::error(action.transport_message()),
                reset_form: false,
                reload: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::api::Reply;
    use crate::error::{ApiError, Result};
    use crate::model::{Activity, ApiMessage};
    use crate::status::NoticeKind;

    #[derive(Default)]
    struct FakeBackend {
        list: Option<ActivityMap>,
        /// `activities()` never resolves, like a stalled request.
        list_stalls: bool,
        reply: Option<Reply>,
        fetches: RefCell<usize>,
        calls: RefCell<Vec<(Action, String, String)>>,
    }

    impl FakeBackend {
        fn replying(ok: bool, body: ApiMessage) -> Self {
            let mut list = ActivityMap::new();
            list.insert(
                "Chess Club".into(),
                Activity {
                    description: Some("Learn strategies".into()),
                    schedule: None,
                    max_participants: 10,
                    participants: vec!["a@x.com".into(), "b@x.com".into()],
                },
            );
            Self {
                list: Some(list),
                reply: Some(Reply { ok, body }),
                ..Default::default()
            }
        }

        fn unreachable() -> Self {
            Self::default()
        }

        fn mutate(&self, action: Action, activity: &str, email: &str) -> Result<Reply> {
            self.calls
                .borrow_mut()
                .push((action, activity.to_string(), email.to_string()));
            self.reply
                .clone()
                .ok_or_else(|| ApiError::Network("connection refused".into()))
        }
    }

    impl Backend for FakeBackend {
        async fn activities(&self) -> Result<ActivityMap> {
            *self.fetches.borrow_mut() += 1;
            if self.list_stalls {
                std::future::pending::<()>().await;
            }
            self.list
                .clone()
                .ok_or_else(|| ApiError::Decode("expected value at line 1 column 1".into()))
        }

        async fn signup(&self, activity: &str, email: &str) -> Result<Reply> {
            self.mutate(Action::Signup, activity, email)
        }

        async fn unregister(&self, activity: &str, email: &str) -> Result<Reply> {
            self.mutate(Action::Unregister, activity, email)
        }
    }

    fn said(message: &str) -> ApiMessage {
        ApiMessage { message: Some(message.into()), detail: None }
    }

    fn refused(detail: &str) -> ApiMessage {
        ApiMessage { message: None, detail: Some(detail.into()) }
    }

    #[test]
    fn load_returns_the_mapping() {
        let backend = FakeBackend::replying(true, ApiMessage::default());
        let ListState::Loaded(map) = pollster::block_on(load(&backend)) else {
            panic!("expected a loaded list");
        };
        assert_eq!(map.len(), 1);
        assert_eq!(map["Chess Club"].availability_label(), "8 spots left");
    }

    #[test]
    fn load_failure_is_reported_as_failed() {
        let backend = FakeBackend::unreachable();
        assert_eq!(pollster::block_on(load(&backend)), ListState::Failed);
    }

    #[test]
    fn successful_signup_resets_form_and_asks_for_reload() {
        let backend = FakeBackend::replying(true, said("Signed up a@x.com for Chess Club"));
        let done = pollster::block_on(perform(&backend, Action::Signup, "Chess Club", "a@x.com"));

        assert_eq!(done.notice, Notice::success("Signed up a@x.com for Chess Club"));
        assert!(done.reset_form);
        assert!(done.reload);
        assert_eq!(*backend.fetches.borrow(), 0);
        assert_eq!(
            *backend.calls.borrow(),
            [(Action::Signup, "Chess Club".to_string(), "a@x.com".to_string())]
        );
    }

    #[test]
    fn rejected_signup_shows_detail_without_reset() {
        let backend = FakeBackend::replying(false, refused("Already registered"));
        let done = pollster::block_on(perform(&backend, Action::Signup, "Chess Club", "a@x.com"));

        assert_eq!(done.notice.kind, NoticeKind::Error);
        assert_eq!(done.notice.text, "Already registered");
        assert!(!done.reset_form);
        assert!(!done.reload);
        assert_eq!(*backend.fetches.borrow(), 0);
    }

    #[test]
    fn rejection_without_detail_uses_fallback() {
        let backend = FakeBackend::replying(false, ApiMessage::default());
        let signup = pollster::block_on(perform(&backend, Action::Signup, "Chess Club", "a@x.com"));
        assert_eq!(signup.notice, Notice::error("An error occurred"));

        let removal =
            pollster::block_on(perform(&backend, Action::Unregister, "Chess Club", "a@x.com"));
        assert_eq!(removal.notice, Notice::error("Unable to remove participant"));
    }

    #[test]
    fn transport_failure_uses_fixed_message() {
        let backend = FakeBackend::unreachable();
        let signup = pollster::block_on(perform(&backend, Action::Signup, "Chess Club", "a@x.com"));
        assert_eq!(signup.notice, Notice::error("Failed to sign up. Please try again."));
        assert!(!signup.reset_form);
        assert!(!signup.reload);

        let removal =
            pollster::block_on(perform(&backend, Action::Unregister, "Chess Club", "a@x.com"));
        assert_eq!(
            removal.notice,
            Notice::error("Failed to remove participant. Please try again.")
        );
        assert_eq!(*backend.fetches.borrow(), 0);
    }

    #[test]
    fn unregister_targets_one_pair_and_asks_for_reload() {
        let backend = FakeBackend::replying(true, said("Unregistered b@x.com from Chess Club"));
        let done =
            pollster::block_on(perform(&backend, Action::Unregister, "Chess Club", "b@x.com"));

        assert_eq!(done.notice.kind, NoticeKind::Success);
        assert!(!done.reset_form);
        assert!(done.reload);
        assert_eq!(
            *backend.calls.borrow(),
            [(Action::Unregister, "Chess Club".to_string(), "b@x.com".to_string())]
        );
    }

    #[test]
    fn success_notice_does_not_wait_for_the_list() {
        let mut backend = FakeBackend::replying(true, said("Signed up"));
        backend.list_stalls = true;
        let done = pollster::block_on(perform(&backend, Action::Signup, "Chess Club", "a@x.com"));
        assert_eq!(done.notice, Notice::success("Signed up"));
        assert!(done.reset_form);
        assert_eq!(*backend.fetches.borrow(), 0);
    }

    #[test]
    fn structured_rejection_detail_uses_fallback() {
        let body: ApiMessage =
            serde_json::from_str(r#"{"detail":[{"loc":["query","email"],"msg":"field required"}]}"#)
                .unwrap();
        let backend = FakeBackend::replying(false, body);
        let done = pollster::block_on(perform(&backend, Action::Signup, "Chess Club", ""));
        assert_eq!(done.notice, Notice::error("An error occurred"));
        assert!(!done.reload);
    }
}

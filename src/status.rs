// src/status.rs
// Shared status banner shown after a signup/unregister attempt.
use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Every `show` starts a new generation; a hide request only applies to the
/// generation it was scheduled for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    notice: Option<Notice>,
    hidden: bool,
    generation: u64,
}

impl Default for Banner {
    fn default() -> Self {
        Self { notice: None, hidden: true, generation: 0 }
    }
}

impl Banner {
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the current message and makes it visible.
    pub fn show(&self, notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            hidden: false,
            generation: self.generation + 1,
        }
    }

    /// Hides the banner if `generation` is still current. Text and style stay.
    pub fn hide(&self, generation: u64) -> Self {
        let mut next = self.clone();
        if generation == self.generation {
            next.hidden = true;
        }
        next
    }

    pub fn text(&self) -> &str {
        self.notice.as_ref().map(|n| n.text.as_str()).unwrap_or_default()
    }

    /// `message success` / `message error`, plus `hidden` when not shown.
    pub fn class(&self) -> String {
        let mut class = String::from("message");
        if let Some(n) = &self.notice {
            class.push(' ');
            class.push_str(n.kind.class());
        }
        if self.hidden {
            class.push_str(" hidden");
        }
        class
    }
}

pub enum BannerAction {
    Show(Notice),
    /// Scheduled by the hide timer of the given generation.
    Hide(u64),
}

impl Reducible for Banner {
    type Action = BannerAction;

    fn reduce(self: Rc<Self>, action: BannerAction) -> Rc<Self> {
        match action {
            BannerAction::Show(notice) => Rc::new(self.show(notice)),
            BannerAction::Hide(generation) => {
                if self.hidden || generation != self.generation {
                    self
                } else {
                    Rc::new(self.hide(generation))
                }
            }
        }
    }
}

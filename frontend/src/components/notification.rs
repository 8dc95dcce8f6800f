use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{NOTICE_DISMISS_MS, NOTICE_EXIT_MS};

/// Flavour of a transient banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
        }
    }
}

/// Content of one transient banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: &str) -> Self {
        Self {
            message: message.to_string(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            kind: NoticeKind::Error,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationBannerProps {
    pub notice: Notice,
    /// Fired after the exit phase; the owner drops the banner from the tree.
    pub on_dismissed: Callback<()>,
}

/// Self-dismissing banner: shown for 5 s, then a 300 ms exit phase, then
/// removed by the owner.
///
/// Owners keep at most one notice alive and key the banner by a fresh epoch,
/// so a newer notice remounts this component; unmounting drops both timers,
/// which keeps an evicted banner from dismissing its successor.
#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    let leaving = use_state_eq(|| false);
    let exit_timer = use_mut_ref(|| None::<Timeout>);

    {
        let leaving = leaving.clone();
        let exit_timer = exit_timer.clone();
        let on_dismissed = props.on_dismissed.clone();
        use_effect_with((), move |_| {
            let dismiss_timer = Timeout::new(NOTICE_DISMISS_MS, {
                let exit_timer = exit_timer.clone();
                move || {
                    leaving.set(true);
                    let on_dismissed = on_dismissed.clone();
                    *exit_timer.borrow_mut() =
                        Some(Timeout::new(NOTICE_EXIT_MS, move || on_dismissed.emit(())));
                }
            });

            move || {
                drop(dismiss_timer);
                exit_timer.borrow_mut().take();
            }
        });
    }

    html! {
        <div
            class={classes!(
                "notification",
                props.notice.kind.class(),
                (*leaving).then_some("leaving")
            )}
            role="status"
        >
            <i class={classes!("fas", props.notice.kind.icon())} aria-hidden="true"></i>
            <span>{ &props.notice.message }</span>
        </div>
    }
}

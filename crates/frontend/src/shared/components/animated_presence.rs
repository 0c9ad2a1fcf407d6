//! AnimatedPresence - keeps content mounted until its exit animation ends.
//!
//! `<Show>` removes its children immediately, which cuts exit animations
//! short. This wrapper plays `enter` on mount, switches to `exit` when `when`
//! turns false, and unmounts once the exit has had time to finish.

use crate::shared::motion_css::animation_style;
use contracts::shared::motion::MotionSpec;
use contracts::shared::presence::Presence;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn AnimatedPresence(
    /// Whether the content should be on screen.
    #[prop(into)]
    when: Signal<bool>,
    enter: MotionSpec,
    exit: MotionSpec,
    /// Class of the animated wrapper element.
    #[prop(optional, into)]
    class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let presence = RwSignal::new(Presence::new(when.get_untracked()));
    let mounted = Memo::new(move |_| presence.with(|presence| presence.is_mounted()));
    let leaving = Memo::new(move |_| presence.with(|presence| presence.is_leaving()));

    Effect::new(move |_| {
        if when.get() {
            presence.maybe_update(|presence| presence.show());
            return;
        }
        let mut ticket = None;
        presence.maybe_update(|presence| {
            ticket = presence.hide();
            ticket.is_some()
        });
        if let Some(ticket) = ticket {
            spawn_local(async move {
                TimeoutFuture::new(exit.transition.total_ms()).await;
                presence.try_update(|presence| {
                    presence.exit_finished(ticket);
                });
            });
        }
    });

    let style = move || {
        if leaving.get() {
            animation_style(&exit)
        } else {
            animation_style(&enter)
        }
    };

    view! {
        <Show when=move || mounted.get()>
            <div class=class.clone() style=style>
                {children()}
            </div>
        </Show>
    }
}

use leptos::prelude::*;
use storefront_commerce::session::Notice;

/// Modal for a blocking notice; its single action links away.
#[component]
pub fn NoticeModal(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            view! {
                <div class="overlay">
                    <div class="modal" role="alertdialog">
                        <p>{n.message()}</p>
                        <a class="btn" href=n.action_target().path() on:click=move |_| notice.set(None)>
                            {n.action_label()}
                        </a>
                    </div>
                </div>
            }
        })
    }
}

//! Notice Toast Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Transient success/error message; the controller hides it after a delay
#[component]
pub fn NoticeToast() -> impl IntoView {
    let store = use_app_store();
    let notice = Memo::new(move |_| store.notice().get());

    let toast_class = move || match notice.get() {
        Some(n) if n.is_error => "toast show error",
        Some(_) => "toast show",
        None => "toast",
    };

    view! {
        <div class=toast_class>
            {move || notice.get().map(|n| n.text).unwrap_or_default()}
        </div>
    }
}

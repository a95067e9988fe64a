use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context;

#[component]
pub fn App() -> impl IntoView {
    context::provide_auth();
    provide_context(ModalStackService::new());
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <ModalHost />
        <ToastHost />
    }
}

use leptos::prelude::*;

use crate::domain::a001_currency::ui::list::CurrencyList;
use crate::domain::a002_unit::ui::list::UnitList;
use crate::domain::a003_company::ui::list::CompanyList;
use crate::domain::a004_purchaser::ui::list::PurchaserList;
use crate::domain::a005_product::ui::list::ProductList;
use crate::domain::a006_project::ui::list::ProjectList;
use crate::domain::a007_contract::ui::list::ContractList;
use crate::domain::a008_payment::ui::list::PaymentPage;
use crate::domain::a009_attachment::ui::list::AttachmentList;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Страницы приложения (фиксированный набор, роутер не используется)
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Projects,
    Contracts,
    Payments,
    Attachments,
    Products,
    Companies,
    Purchasers,
    Units,
    Currencies,
}

#[component]
fn MainLayout() -> impl IntoView {
    let current_page = RwSignal::new(Page::Projects);

    view! {
        <Shell current_page=current_page>
            {move || match current_page.get() {
                Page::Projects => view! { <ProjectList /> }.into_any(),
                Page::Contracts => view! { <ContractList /> }.into_any(),
                Page::Payments => view! { <PaymentPage /> }.into_any(),
                Page::Attachments => view! { <AttachmentList /> }.into_any(),
                Page::Products => view! { <ProductList /> }.into_any(),
                Page::Companies => view! { <CompanyList /> }.into_any(),
                Page::Purchasers => view! { <PurchaserList /> }.into_any(),
                Page::Units => view! { <UnitList /> }.into_any(),
                Page::Currencies => view! { <CurrencyList /> }.into_any(),
            }}
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth_state = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_logged_in()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

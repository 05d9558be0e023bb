//! Root application component with routing and the auth context.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::dashboard::DashboardPage;
use crate::pages::employee_detail::EmployeeDetailPage;
use crate::pages::employee_edit::EditEmployeePage;
use crate::pages::employee_new::NewEmployeePage;
use crate::pages::employees::EmployeesPage;
use crate::pages::login::LoginPage;
use crate::state::auth::AuthState;

/// Root application component.
///
/// Rebuilds the auth state from the stored session record once per tab
/// lifetime (expired records are discarded during the load) and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    #[cfg(feature = "csr")]
    {
        use crate::state::session::{self, BrowserStore};
        if let Some(stored) = session::load(&BrowserStore, session::now_ms()) {
            auth.set(AuthState {
                user: Some(stored.user()),
                loading: false,
            });
        }
    }
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/hr-client.css"/>
        <Title text="HR System"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("employees") view=EmployeesPage/>
                <Route
                    path=(StaticSegment("employee"), StaticSegment("new"))
                    view=NewEmployeePage
                />
                <Route
                    path=(StaticSegment("employee"), ParamSegment("id"))
                    view=EmployeeDetailPage
                />
                <Route
                    path=(StaticSegment("employee"), ParamSegment("id"), StaticSegment("edit"))
                    view=EditEmployeePage
                />
            </Routes>
        </Router>
    }
}

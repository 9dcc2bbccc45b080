use leptos::*;
use leptos_router::*;

use crate::components::guard::RequireRole;
use crate::components::layout::Layout;
use crate::pages::about::AboutPage;
use crate::pages::admin::AdminDashboardPage;
use crate::pages::careers::CareersPage;
use crate::pages::contact::ContactPage;
use crate::pages::employee::EmployeeDashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::services::ServicesPage;
use crate::pages::why_choose_us::WhyChooseUsPage;
use crate::state::session::Role;

/// Every screen the app can show. Paths are stable; unknown paths fall
/// back to `Home`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    About,
    Services,
    WhyChooseUs,
    Careers,
    Contact,
    Login,
    AdminDashboard,
    EmployeeDashboard,
}

pub const ALL_VIEWS: [View; 9] = [
    View::Home,
    View::About,
    View::Services,
    View::WhyChooseUs,
    View::Careers,
    View::Contact,
    View::Login,
    View::AdminDashboard,
    View::EmployeeDashboard,
];

impl View {
    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::About => "/about",
            View::Services => "/services",
            View::WhyChooseUs => "/why-choose-us",
            View::Careers => "/careers",
            View::Contact => "/contact",
            View::Login => "/login",
            View::AdminDashboard => "/admin-dashboard",
            View::EmployeeDashboard => "/employee-dashboard",
        }
    }

    fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        ALL_VIEWS
            .into_iter()
            .find(|view| view.path().trim_end_matches('/') == trimmed)
            .unwrap_or(View::Home)
    }

    pub fn required_role(self) -> Option<Role> {
        match self {
            View::AdminDashboard => Some(Role::Admin),
            View::EmployeeDashboard => Some(Role::Employee),
            _ => None,
        }
    }

    pub fn is_public(self) -> bool {
        self.required_role().is_none()
    }

    /// Marketing header and footer wrap every public view except the login
    /// screen.
    pub fn shows_chrome(self) -> bool {
        self.is_public() && self != View::Login
    }
}

/// Substitutes the login view wherever the visitor lacks the role a view
/// requires. Deep links keep their URL; only the rendered view changes.
pub fn resolve(view: View, role: Option<Role>) -> View {
    match view.required_role() {
        Some(required) if role != Some(required) => View::Login,
        _ => view,
    }
}

pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Admin => View::AdminDashboard.path(),
        Role::Employee => View::EmployeeDashboard.path(),
    }
}

#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path=View::Home.path() view=|| view! { <Layout><HomePage/></Layout> }/>
                <Route path=View::About.path() view=|| view! { <Layout><AboutPage/></Layout> }/>
                <Route path=View::Services.path() view=|| view! { <Layout><ServicesPage/></Layout> }/>
                <Route path=View::WhyChooseUs.path() view=|| view! { <Layout><WhyChooseUsPage/></Layout> }/>
                <Route path=View::Careers.path() view=|| view! { <Layout><CareersPage/></Layout> }/>
                <Route path=View::Contact.path() view=|| view! { <Layout><ContactPage/></Layout> }/>
                <Route path=View::Login.path() view=|| view! { <LoginPage/> }/>
                <Route
                    path=View::AdminDashboard.path()
                    view=|| view! { <RequireRole role=Role::Admin><AdminDashboardPage/></RequireRole> }
                />
                <Route
                    path=View::EmployeeDashboard.path()
                    view=|| view! { <RequireRole role=Role::Employee><EmployeeDashboardPage/></RequireRole> }
                />
                <Route path="/*any" view=|| view! { <Layout><HomePage/></Layout> }/>
            </Routes>
        </Router>
    }
}

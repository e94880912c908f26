//! Main application component with routing.

use roster_store::StoreConfig;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::DashboardPage;
use crate::roster::RosterHandle;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let roster = use_state(|| RosterHandle::open(&StoreConfig::default()));

    let switch = {
        let roster = (*roster).clone();
        move |routes: Route| match routes {
            Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
            Route::Dashboard => html! { <DashboardPage roster={roster.clone()} /> },
            Route::NotFound => html! {
                <div class="card">
                    <h1>{"404 - Page Not Found"}</h1>
                    <p>{"The page you're looking for doesn't exist."}</p>
                </div>
            },
        }
    };

    html! {
        <BrowserRouter>
            <div class="app-container">
                <Sidebar />
                <main class="main-content">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

/// Sidebar navigation component.
#[function_component(Sidebar)]
fn sidebar() -> Html {
    html! {
        <aside class="sidebar">
            <Link<Route> to={Route::Dashboard} classes="nav-brand">
                {"Team Dashboard"}
            </Link<Route>>
            <nav>
                <ul class="nav-links">
                    <li>
                        <Link<Route> to={Route::Dashboard}>
                            {"Dashboard"}
                        </Link<Route>>
                    </li>
                </ul>
            </nav>
        </aside>
    }
}

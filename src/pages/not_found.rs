use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page drifted off the map."}</p>
            <Link<Route> to={Route::Home} classes={classes!("cta", "cta-primary")}>
                {"Back to the studio"}
            </Link<Route>>
        </div>
    }
}

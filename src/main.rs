mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    app::logging::init();
    mount_to_body(|| {
        view! { <App /> }
    })
}

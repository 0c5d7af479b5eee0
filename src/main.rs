use yew::prelude::*;
use log::{info, Level};

mod sections;
mod components {
    pub mod fade_in;
}
mod pages {
    pub mod update;
}

use pages::update::BrandUpdate;

#[function_component]
fn App() -> Html {
    html! { <BrandUpdate /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting brand update page");
    yew::Renderer::<App>::new().render();
}

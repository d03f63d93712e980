use harvest_storefront::{init_console_logging, App};

fn main() {
    console_error_panic_hook::set_once();
    init_console_logging();
    leptos::mount::mount_to_body(App);
}

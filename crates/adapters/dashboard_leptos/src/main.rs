use espdash_dashboard::App;

fn main() {
    espdash_dashboard::logging::init();
    leptos::mount::mount_to_body(App);
}

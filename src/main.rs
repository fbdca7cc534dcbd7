use story_viewer::app::App;

fn main() {
    story_viewer::init();
    leptos::mount::mount_to_body(App);
}

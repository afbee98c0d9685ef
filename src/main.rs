mod app;
mod components;
mod conf;

fn main() {
    yew::Renderer::<app::App>::new().render();
}

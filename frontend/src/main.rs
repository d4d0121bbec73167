mod app;
mod config;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level_from_build_env()));
    log::info!(
        "event=app_start status=ok version={}",
        env!("CARGO_PKG_VERSION")
    );
    yew::start_app::<app::App>();
}

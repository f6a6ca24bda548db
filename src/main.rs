// Copyright © 2025 Nipun Kumar

use dioxus::logger::tracing::Level;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    dioxus::launch(chatlog_web::App);
}

use crate::config::model::{Config, RenderConfig};
use crate::novedades::api::DEFAULT_API_URL;
use reqwest::Url;
use std::env;

pub fn load_config() -> Config {
    let api_url = load_url_config("NOVEDADES_API_URL", DEFAULT_API_URL);
    let no_color = load_bool_config("NOVEDADES_NO_COLOR", false);

    Config {
        api_url,
        render_config: RenderConfig { colors: !no_color },
    }
}

fn load_url_config(name: &str, default: &str) -> String {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());

    parse_url_config(name, &value)
}

fn parse_url_config(name: &str, value: &str) -> String {
    let url: Url = value
        .parse()
        .unwrap_or_else(|_| panic!("Invalid config '{}'. '{}' is not a valid URL", name, value));

    if !matches!(url.scheme(), "http" | "https") {
        panic!("Invalid config '{}'. Expected an http(s) URL", name);
    }

    value.trim_end_matches('/').to_string()
}

fn load_bool_config(name: &str, default: bool) -> bool {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'true' or 'false'",
                name
            )
        })
}

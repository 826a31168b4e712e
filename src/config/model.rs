#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub render_config: RenderConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub colors: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { colors: true }
    }
}

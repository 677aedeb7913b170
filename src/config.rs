use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_char(name: &str, default: char) -> char {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().chars().next())
        .unwrap_or(default)
}

static RENDER_SCALE: OnceLock<u32> = OnceLock::new();

/// Pixels per module for image output (`QR_RENDER_SCALE`, default 8)
pub fn render_scale() -> u32 {
    *RENDER_SCALE.get_or_init(|| parse_env_usize("QR_RENDER_SCALE", 8).clamp(1, 64) as u32)
}

static QUIET_ZONE: OnceLock<u32> = OnceLock::new();

/// Light border around the symbol in modules (`QR_QUIET_ZONE`, default 4)
pub fn quiet_zone() -> u32 {
    *QUIET_ZONE.get_or_init(|| parse_env_usize("QR_QUIET_ZONE", 4).min(16) as u32)
}

static TEXT_DARK: OnceLock<char> = OnceLock::new();

/// Character for dark modules in text output (`QR_TEXT_DARK`, default `#`)
pub fn text_dark() -> char {
    *TEXT_DARK.get_or_init(|| parse_env_char("QR_TEXT_DARK", '#'))
}

static TEXT_LIGHT: OnceLock<char> = OnceLock::new();

/// Character for light modules in text output (`QR_TEXT_LIGHT`, default `.`)
pub fn text_light() -> char {
    *TEXT_LIGHT.get_or_init(|| parse_env_char("QR_TEXT_LIGHT", '.'))
}

/// localStorage key holding the explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// How long each testimonial stays on screen.
pub const CAROUSEL_INTERVAL_MS: u32 = 4_000;

pub const GALLERY_SIZE: usize = 9;
pub const BLOG_POST_COUNT: usize = 3;

const DEFAULT_HERO_SCENE_URL: &str = "https://prod.spline.design/zhZFnwyOYLgqlLWk/scene.splinecode";

/// Scene file rendered behind the hero. Set `HERO_SCENE_URL` at build time to swap it.
pub fn get_hero_scene_url() -> &'static str {
    option_env!("HERO_SCENE_URL").unwrap_or(DEFAULT_HERO_SCENE_URL)
}

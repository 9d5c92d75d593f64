use std::{path::PathBuf, time::Duration};

use config::ConfigError;
use serde::Deserialize;

use crate::domain::{faq::FaqEntry, testimonial::Testimonial};
use crate::presentation::config::{keybindings, styles};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Carousel timing and gesture settings
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Feature flag for timer-driven progression; the restart machinery runs either way
    pub auto_advance_enabled: bool,
    pub auto_advance_interval_ms: u64,
    pub render_delay_ms: u64,
    pub interaction_grace_ms: u64,
    pub hover_resume_delay_ms: u64,
    pub swipe_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_enabled: false,
            auto_advance_interval_ms: 5000,
            render_delay_ms: 200,
            interaction_grace_ms: 100,
            hover_resume_delay_ms: 200,
            swipe_threshold: crate::domain::gesture::SWIPE_THRESHOLD,
        }
    }
}

impl CarouselConfig {
    pub fn auto_advance_interval(&self) -> Duration {
        Duration::from_millis(self.auto_advance_interval_ms)
    }

    pub fn render_delay(&self) -> Duration {
        Duration::from_millis(self.render_delay_ms)
    }

    pub fn interaction_grace(&self) -> Duration {
        Duration::from_millis(self.interaction_grace_ms)
    }

    pub fn hover_resume_delay(&self) -> Duration {
        Duration::from_millis(self.hover_resume_delay_ms)
    }
}

/// Pointer units per terminal cell
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PointerScale {
    pub x: f64,
    pub y: f64,
}

impl Default for PointerScale {
    fn default() -> Self {
        Self { x: 8.0, y: 16.0 }
    }
}

impl PointerScale {
    pub fn columns_to_units(&self, columns: u16) -> f64 {
        f64::from(columns) * self.x
    }

    pub fn units_to_columns(&self, units: f64) -> i32 {
        if self.x <= 0.0 {
            return 0;
        }
        (units / self.x).round() as i32
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub close_animation_ms: u64,
    /// Viewport width (pointer units) at which an open menu closes itself
    pub desktop_breakpoint: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            close_animation_ms: 300,
            desktop_breakpoint: 640.0,
        }
    }
}

impl MenuConfig {
    pub fn close_animation(&self) -> Duration {
        Duration::from_millis(self.close_animation_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    pub resume_delay_ms: u64,
    /// Hover only pauses the track on viewports wider than this (pointer units)
    pub pause_breakpoint: f64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            resume_delay_ms: 500,
            pause_breakpoint: 768.0,
        }
    }
}

impl MarqueeConfig {
    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.resume_delay_ms)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub pointer_scale: PointerScale,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub marquee: MarqueeConfig,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub logos: Vec<String>,
}

impl Config {
    /// Built-in configuration shipped with the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        let cfg = cfg.merged_with(default_config);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject timing values the timers cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.auto_advance_interval_ms == 0 {
            return Err(ConfigError::Message(
                "carousel.auto_advance_interval_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Fill everything the user left unset from `defaults`
    pub fn merged_with(mut self, defaults: Config) -> Self {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        if self.testimonials.is_empty() {
            self.testimonials = defaults.testimonials;
        }
        if self.faq.is_empty() {
            self.faq = defaults.faq;
        }
        if self.logos.is_empty() {
            self.logos = defaults.logos;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::config::keybindings::Action;

    #[test]
    fn test_embedded_config() {
        let cfg = Config::embedded().unwrap();
        assert_eq!(cfg.testimonials.len(), 3);
        assert_eq!(cfg.testimonials[2].author_name, "Lisa Rodriguez");
        assert_eq!(cfg.faq.len(), 3);
        assert!(!cfg.logos.is_empty());
        assert_eq!(cfg.carousel, CarouselConfig::default());
        assert_eq!(cfg.pointer_scale, PointerScale::default());
        assert_eq!(cfg.menu, MenuConfig::default());
        assert_eq!(cfg.marquee, MarqueeConfig::default());
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            Some(Action::MoveLeft)
        );
    }

    #[test]
    fn test_merge_keeps_user_overrides() {
        let user: Config = json5::from_str(
            r#"{
                "keybindings": { "<Left>": "MoveRight" },
                "carousel": { "auto_advance_enabled": true },
            }"#,
        )
        .unwrap();
        let merged = user.merged_with(Config::embedded().unwrap());

        assert_eq!(
            merged
                .keybindings
                .action_for(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            Some(Action::MoveRight)
        );
        assert_eq!(
            merged
                .keybindings
                .action_for(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert!(merged.carousel.auto_advance_enabled);
        assert_eq!(merged.carousel.render_delay_ms, 200);
        assert_eq!(merged.testimonials.len(), 3);
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        assert!(Config::embedded().unwrap().validate().is_ok());

        let user: Config =
            json5::from_str(r#"{ "carousel": { "auto_advance_interval_ms": 0 } }"#).unwrap();
        let merged = user.merged_with(Config::embedded().unwrap());
        assert!(matches!(merged.validate(), Err(ConfigError::Message(_))));
    }

    #[test]
    fn test_durations() {
        let carousel = CarouselConfig::default();
        assert_eq!(carousel.render_delay(), Duration::from_millis(200));
        assert_eq!(carousel.interaction_grace(), Duration::from_millis(100));
        assert_eq!(carousel.hover_resume_delay(), Duration::from_millis(200));
        assert_eq!(MenuConfig::default().close_animation(), Duration::from_millis(300));
        assert_eq!(MarqueeConfig::default().resume_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_pointer_scale() {
        let scale = PointerScale::default();
        assert_eq!(scale.columns_to_units(80), 640.0);
        assert_eq!(scale.units_to_columns(-18.0), -2);
    }
}

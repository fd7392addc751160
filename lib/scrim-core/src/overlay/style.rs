use crate::config::Config;
use std::time::Duration;

/// Marker id for the injected presentation rules.
pub const STYLE_MARKER: &str = "scrim-overlay-style";

/// Presentation record for the overlay. Built from the active [`Config`]
/// when a manager starts; embedders fork the config to restyle.
#[derive(Debug, Clone)]
pub struct OverlayStyle {
    pub mask_color: String,
    pub accent_color: String,
    pub spinner_size: u32,
    pub bar_height: u32,
    pub font_size: u32,
    pub z_index: u32,
    pub teardown_delay: Duration,
    pub bar_transition: Duration,
}

impl OverlayStyle {
    pub fn from_config(config: &Config) -> Self {
        Self {
            mask_color: config.mask_color.clone(),
            accent_color: config.accent_color.clone(),
            spinner_size: config.spinner_size,
            bar_height: config.bar_height,
            font_size: config.font_size,
            z_index: config.z_index,
            teardown_delay: Duration::from_millis(config.teardown_delay_ms),
            bar_transition: Duration::from_millis(config.bar_transition_ms),
        }
    }

    /// The stylesheet injected once under [`STYLE_MARKER`].
    pub fn stylesheet(&self) -> String {
        format!(
            "\
.scrim-mask {{ position: fixed; inset: 0; display: flex; flex-direction: column; \
align-items: center; justify-content: center; background: {mask}; z-index: {z}; }}
.scrim-spinner {{ width: {spinner}px; height: {spinner}px; border: 3px solid transparent; \
border-top-color: {accent}; border-radius: 50%; animation: scrim-spin 0.8s linear infinite; }}
.scrim-label {{ margin-top: 12px; color: #fff; font-size: {font}px; }}
.scrim-track {{ position: absolute; top: 0; left: 0; width: 100%; height: {bar}px; }}
.scrim-line {{ width: 0; height: 100%; background: {accent}; }}
@keyframes scrim-spin {{ to {{ transform: rotate(360deg); }} }}
",
            mask = self.mask_color,
            accent = self.accent_color,
            spinner = self.spinner_size,
            font = self.font_size,
            bar = self.bar_height,
            z = self.z_index,
        )
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

use crate::config::LayoutConfig;

pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0;
pub const MOBILE_PLAYER_HEIGHT_PX: u32 = 35;
pub const DESKTOP_PLAYER_HEIGHT_PX: u32 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Desktop,
}

impl LayoutMode {
    /// Widths at or below the breakpoint are mobile.
    pub fn classify(viewport_width: f64, config: &LayoutConfig) -> Self {
        if viewport_width <= config.mobile_max_width_px {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, LayoutMode::Mobile)
    }

    pub fn player_height_px(self, config: &LayoutConfig) -> u32 {
        match self {
            LayoutMode::Mobile => config.mobile_player_height_px,
            LayoutMode::Desktop => config.desktop_player_height_px,
        }
    }

    pub fn player_height_style(self, config: &LayoutConfig) -> String {
        format!("{}px", self.player_height_px(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        let config = LayoutConfig::default();
        assert_eq!(LayoutMode::classify(768.0, &config), LayoutMode::Mobile);
        assert_eq!(LayoutMode::classify(768.5, &config), LayoutMode::Desktop);
        assert_eq!(LayoutMode::classify(480.0, &config), LayoutMode::Mobile);
        assert_eq!(LayoutMode::classify(1024.0, &config), LayoutMode::Desktop);
    }

    #[test]
    fn player_height_follows_mode() {
        let config = LayoutConfig::default();
        assert_eq!(LayoutMode::Mobile.player_height_style(&config), "35px");
        assert_eq!(LayoutMode::Desktop.player_height_style(&config), "40px");
    }
}

//! All setting definitions with their default values.

/// A single setting definition.
#[derive(Debug, Clone, Copy)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

pub const SETTING_DEFS: &[SettingDef] = &[
    SettingDef {
        key: "EPD_WIDTH",
        default: "400",
        description: "Panel width in pixels",
    },
    SettingDef {
        key: "EPD_HEIGHT",
        default: "300",
        description: "Panel height in pixels",
    },
    SettingDef {
        key: "EPD_THRESHOLD",
        default: "128",
        description: "Samples above this become white (0-255)",
    },
    SettingDef {
        key: "EPD_RESIZE_FILTER",
        default: "catmull-rom",
        description: "Resampling kernel (nearest, triangle, catmull-rom, gaussian, lanczos3)",
    },
];

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    SETTING_DEFS.iter().find(|d| d.key == key).map(|d| d.default)
}

/// Help text listing the recognized environment variables.
pub fn env_help() -> String {
    let mut out = String::from("Environment (also read from .env):\n");
    for def in SETTING_DEFS {
        out.push_str(&format!(
            "  {:<18} {} [default: {}]\n",
            def.key, def.description, def.default
        ));
    }
    out
}

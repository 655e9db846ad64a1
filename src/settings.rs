use gotham_derive::StateData;
use serde_derive::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bind_address: String,
    pub port: u16,
    pub site: Site,
}

/// Branding shown around the event grid.
#[derive(Clone, Debug, Deserialize, StateData)]
#[serde(default)]
pub struct Site {
    pub name: String,
    pub tagline: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub copyright_year: i32,
}

impl Settings {
    /// Reads `path` (any extension the config crate knows, or none at all).
    /// A missing file, like any missing key, falls back to the defaults.
    pub fn load(path: &str) -> Result<Settings, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .build()?
            .try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bind_address: "127.0.0.1".to_owned(),
            port: 7878,
            site: Site::default(),
        }
    }
}

impl Default for Site {
    fn default() -> Self {
        Site {
            name: "EventBlossom".to_owned(),
            tagline: "Connecting communities through magical local events ✨".to_owned(),
            hero_title: "Discover Events Near You ✨".to_owned(),
            hero_subtitle: "Connect with your community through magical local events, workshops, and dreamy gatherings".to_owned(),
            copyright_year: 2025,
        }
    }
}

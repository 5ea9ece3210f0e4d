use std::fmt;

use crate::presentation::view_models::ConfigViewModel;

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let config_path = if self.data.config_exists {
            self.data.config_path.clone()
        } else {
            format!("{} (not found, using defaults)", self.data.config_path)
        };

        writeln!(f, "{:<16} {}", "data_dir", self.data.data_dir)?;
        writeln!(f, "{:<16} {}", "config", config_path)?;
        writeln!(f, "{:<16} {}", "page_size", self.data.page_size)?;
        writeln!(f, "{:<16} {}", "elapsed_anchor", self.data.elapsed_anchor)?;
        writeln!(
            f,
            "{:<16} {}",
            "viewer",
            self.data
                .viewer
                .as_ref()
                .map(|v| v.as_str())
                .unwrap_or("(none)")
        )
    }
}

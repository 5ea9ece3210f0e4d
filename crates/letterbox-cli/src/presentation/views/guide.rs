use std::fmt;

use crate::presentation::view_models::GuideViewModel;

pub struct GuideView<'a> {
    data: &'a GuideViewModel,
}

impl<'a> GuideView<'a> {
    pub fn new(data: &'a GuideViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for GuideView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "letterbox - Letters that arrive when they are meant to")?;
        writeln!(f)?;
        writeln!(f, "Data directory: {}", self.data.data_dir)?;

        match &self.data.viewer {
            Some(viewer) => writeln!(f, "Reading as:     {}", viewer)?,
            None => writeln!(f, "Reading as:     (no viewer selected)")?,
        }
        writeln!(f)?;

        if !self.data.store_exists {
            writeln!(f, "No letters.json found in the data directory yet.")?;
            writeln!(f)?;
        }

        writeln!(f, "Quick commands:")?;
        writeln!(f, "  letterbox letter list                  # Letters sent to you")?;
        writeln!(f, "  letterbox letter list --direction sent # Letters you wrote")?;
        writeln!(f, "  letterbox letter show <ID>             # Read one letter")?;
        writeln!(f, "  letterbox config show                  # Current settings")?;
        writeln!(f)?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  letterbox --help")
    }
}

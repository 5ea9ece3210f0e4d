use letterbox_types::UserId;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};
use crate::presentation::views::guide::GuideView;

/// What `letterbox` with no subcommand knows about the local setup.
#[derive(Debug, Serialize)]
pub struct GuideViewModel {
    pub data_dir: String,
    pub config_exists: bool,
    pub store_exists: bool,
    pub viewer: Option<UserId>,
}

impl CreateView for GuideViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuideView::new(self))
    }
}

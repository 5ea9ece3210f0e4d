use letterbox_engine::ElapsedAnchor;
use letterbox_types::UserId;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};
use crate::presentation::views::config::ConfigView;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub data_dir: String,
    pub config_path: String,
    pub config_exists: bool,
    pub page_size: usize,
    pub elapsed_anchor: ElapsedAnchor,
    pub viewer: Option<UserId>,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView::new(self))
    }
}

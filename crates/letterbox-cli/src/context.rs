use anyhow::{Result, anyhow};
use letterbox_runtime::{
    Clock, Config, FixedClock, JsonLetterStore, Mailbox, SystemClock, resolve_data_dir,
};
use letterbox_types::{Timestamp, UserId};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use crate::types::OutputFormat;

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    viewer: Option<UserId>,
    clock: Box<dyn Clock>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(
        data_dir: Option<String>,
        viewer: Option<String>,
        now: Option<String>,
        format: OutputFormat,
    ) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir.as_deref())?;

        let clock: Box<dyn Clock> = match now {
            Some(ts) => Box::new(FixedClock(Timestamp::parse_rfc3339(&ts)?)),
            None => Box::new(SystemClock),
        };

        Ok(Self {
            data_dir,
            config: OnceCell::new(),
            viewer: viewer.map(UserId::new),
            clock,
            format,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()))
            .map_err(Into::into)
    }

    /// `--viewer`, then `viewer` from config.toml.
    pub fn viewer(&self) -> Result<UserId> {
        if let Some(viewer) = &self.viewer {
            return Ok(viewer.clone());
        }

        self.config()?.viewer.clone().ok_or_else(|| {
            anyhow!(
                "No viewer selected. Pass --viewer <USER> or set `viewer` in {}",
                self.config_path().display()
            )
        })
    }

    /// Read once per command so every letter in one output agrees on "now".
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn store(&self) -> JsonLetterStore {
        JsonLetterStore::open(&self.data_dir)
    }

    pub fn mailbox(&self) -> Result<Mailbox<JsonLetterStore>> {
        let viewer = self.viewer()?;
        let config = self.config()?;
        Ok(Mailbox::new(self.store(), viewer, config))
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

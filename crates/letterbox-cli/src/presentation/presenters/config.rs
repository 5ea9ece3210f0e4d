use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, GuideViewModel, StatusBadge,
};

pub fn present_config(content: ConfigViewModel) -> CommandResultViewModel<ConfigViewModel> {
    let mut result = CommandResultViewModel::new(content);

    if result.content.config_exists {
        result = result.with_badge(StatusBadge::success("Configuration loaded"));
    } else {
        let hint = format!(
            "Create {} to change these defaults",
            result.content.config_path
        );
        result = result
            .with_badge(StatusBadge::info("Using default configuration"))
            .with_suggestion(Guidance::new(hint));
    }

    if result.content.viewer.is_none() {
        result = result.with_suggestion(
            Guidance::new("Pick whose mailbox to read")
                .with_command("letterbox --viewer <USER> letter list"),
        );
    }

    result
}

pub fn present_guidance(content: GuideViewModel) -> CommandResultViewModel<GuideViewModel> {
    let mut result = CommandResultViewModel::new(content);

    if result.content.viewer.is_none() {
        result = result.with_suggestion(
            Guidance::new("Set `viewer = \"<USER>\"` in config.toml, or pass it per command")
                .with_command("letterbox --viewer <USER> letter list"),
        );
    }

    result
}

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::view_models::ConfigViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config()?;
    let config_path = ctx.config_path();

    let content = ConfigViewModel {
        data_dir: ctx.data_dir().display().to_string(),
        config_exists: config_path.exists(),
        config_path: config_path.display().to_string(),
        page_size: config.effective_page_size(),
        elapsed_anchor: config.elapsed_anchor,
        viewer: ctx.viewer().ok(),
    };

    let renderer = ConsoleRenderer::new(ctx.json_mode());
    renderer.render(presenters::present_config(content))?;

    Ok(())
}

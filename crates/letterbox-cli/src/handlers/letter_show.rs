use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Result, bail};
use letterbox_types::LetterId;

pub fn handle(ctx: &ExecutionContext, letter_id: String) -> Result<()> {
    let mailbox = ctx.mailbox()?;
    let renderer = ConsoleRenderer::new(ctx.json_mode());
    let letter_id = LetterId::new(letter_id);
    let now = ctx.now();

    match mailbox.open(&letter_id, now) {
        Ok(view) => renderer.render(presenters::present_letter_detail(now, view)),
        Err(letterbox_runtime::Error::NotFound(id)) => {
            renderer.render(presenters::present_letter_not_found(
                id.clone(),
                mailbox.viewer().clone(),
            ))?;
            bail!("Letter not found: {}", id)
        }
        Err(err) => Err(err.into()),
    }
}

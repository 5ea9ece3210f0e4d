use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Result, bail};
use letterbox_types::LetterId;

pub fn handle(ctx: &ExecutionContext, letter_id: String) -> Result<()> {
    let mailbox = ctx.mailbox()?;
    let outcome = mailbox.delete(&LetterId::new(letter_id));

    let failure = (!outcome.deleted).then(|| outcome.notice.message.clone());

    let renderer = ConsoleRenderer::new(ctx.json_mode());
    renderer.render(presenters::present_delete_result(outcome))?;

    if let Some(message) = failure {
        bail!(message);
    }

    Ok(())
}

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::Result;
use letterbox_runtime::Cursor;
use letterbox_types::Direction;

pub fn handle(
    ctx: &ExecutionContext,
    direction: Direction,
    cursor: Option<String>,
    limit: Option<usize>,
    all: bool,
    mode: ViewMode,
) -> Result<()> {
    let mailbox = ctx.mailbox()?;
    let now = ctx.now();

    let (rows, next_cursor) = if all {
        let mut feed = mailbox.feed(direction);
        let loaded = feed.load_all(mailbox.source())?;
        tracing::debug!(loaded, direction = %direction, "loaded full mailbox segment");
        (feed.rows(mailbox.list_projector(), now), None)
    } else {
        let page = mailbox.page(direction, cursor.map(Cursor::new), limit, now)?;
        (page.rows, page.next_cursor)
    };

    let result = presenters::present_letter_list(
        mailbox.viewer().clone(),
        direction,
        now,
        rows,
        next_cursor,
        limit,
    );

    let renderer = ConsoleRenderer::new(ctx.json_mode()).with_mode(mode);
    renderer.render(result)?;

    Ok(())
}

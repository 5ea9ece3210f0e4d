use super::args::{Cli, Commands, ConfigCommand, LetterCommand};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging;
use crate::presentation::presenters;
use crate::presentation::view_models::GuideViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use letterbox_runtime::JsonLetterStore;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let ctx = ExecutionContext::new(cli.data_dir, cli.viewer, cli.now, cli.format)?;
    tracing::debug!(data_dir = %ctx.data_dir().display(), "resolved data directory");

    let Some(command) = cli.command else {
        return show_guidance(&ctx);
    };

    match command {
        Commands::Letter { command } => match command {
            LetterCommand::List {
                direction,
                cursor,
                limit,
                all,
                mode,
            } => handlers::letter_list::handle(
                &ctx,
                direction.into(),
                cursor,
                limit,
                all,
                mode.into(),
            ),
            LetterCommand::Show { letter_id } => handlers::letter_show::handle(&ctx, letter_id),
            LetterCommand::Delete { letter_id } => {
                handlers::letter_delete::handle(&ctx, letter_id)
            }
        },

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config_show::handle(&ctx),
        },
    }
}

fn show_guidance(ctx: &ExecutionContext) -> Result<()> {
    let content = GuideViewModel {
        data_dir: ctx.data_dir().display().to_string(),
        config_exists: ctx.config_path().exists(),
        store_exists: ctx.data_dir().join(JsonLetterStore::FILE_NAME).exists(),
        viewer: ctx.viewer().ok(),
    };

    ConsoleRenderer::new(ctx.json_mode()).render(presenters::present_guidance(content))
}

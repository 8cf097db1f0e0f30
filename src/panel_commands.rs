use std::path::Path;

use anyhow::{bail, Result};
use clap::Subcommand;
use tracing::info;

use crate::panel::compose::resolve_frame;
use crate::panel::layout::ViewMode;
use crate::panel::store::JsonFileStore;
use crate::services::{PanelOrdering, PanelService};

#[derive(Subcommand, Debug)]
pub enum PanelsCommand {
    /// List saved panels
    List {
        /// Substring match against event name or description
        #[clap(long)]
        busca: Option<String>,
        #[clap(long, value_enum, default_value_t = PanelOrdering::Recente)]
        ordenacao: PanelOrdering,
    },
    /// Print the resolved layout of one panel
    Show {
        id: String,
        #[clap(long, value_enum, default_value_t = ViewMode::Fullscreen)]
        view: ViewMode,
    },
    /// Copy a panel under a fresh id
    Duplicate { id: String },
    /// Remove a panel permanently
    Delete {
        id: String,
        /// Deletion is irreversible; require the flag as confirmation
        #[clap(long)]
        yes: bool,
    },
}

pub fn run(store_dir: &Path, command: PanelsCommand) -> Result<()> {
    let service = PanelService::new(JsonFileStore::new(store_dir));

    match command {
        PanelsCommand::List { busca, ordenacao } => {
            let paineis = service.list_filtered(busca.as_deref(), ordenacao);
            if paineis.is_empty() {
                println!("no panels saved");
                return Ok(());
            }
            for painel in paineis {
                let nome = if painel.nome_evento.is_empty() {
                    "(unnamed)"
                } else {
                    painel.nome_evento.as_str()
                };
                println!(
                    "{}  {}  [{} logos, updated {}]",
                    painel.id,
                    nome,
                    painel.quantidade_logos_exibicao,
                    painel.atualizado_em.format("%Y-%m-%d %H:%M"),
                );
            }
        }
        PanelsCommand::Show { id, view } => {
            let Some(config) = service.find(&id) else {
                bail!("panel not found: {}", id);
            };
            let frame = resolve_frame(&config, view);
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
        PanelsCommand::Duplicate { id } => match service.duplicate(&id)? {
            Some(copia) => println!("created {} ({})", copia.id, copia.nome_evento),
            None => println!("panel not found: {} (nothing duplicated)", id),
        },
        PanelsCommand::Delete { id, yes } => {
            if !yes {
                bail!("refusing to delete {} without --yes", id);
            }
            if service.delete(&id)? {
                info!("panel {} deleted", id);
                println!("deleted {}", id);
            } else {
                println!("panel not found: {} (nothing deleted)", id);
            }
        }
    }

    Ok(())
}

use chrono::Utc;
use clap::ValueEnum;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::panel::config::PanelConfiguration;
use crate::panel::store::{PanelStore, StoreError};

#[derive(Debug, Error)]
pub enum PanelServiceError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Sort orders offered by the saved-panel listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PanelOrdering {
    /// Newest first (by creation time).
    Recente,
    /// Oldest first.
    Antigo,
    /// Event name, A-Z.
    Nome,
}

/// Operations over the saved-panel list. The gateway is injected so tests can
/// substitute an in-memory store for the JSON file.
pub struct PanelService<S: PanelStore> {
    store: S,
}

impl<S: PanelStore> PanelService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<PanelConfiguration> {
        self.store.load_all()
    }

    /// Listing with the search and sort controls applied.
    pub fn list_filtered(
        &self,
        busca: Option<&str>,
        ordenacao: PanelOrdering,
    ) -> Vec<PanelConfiguration> {
        let mut paineis = self.store.load_all();
        if let Some(busca) = busca {
            paineis.retain(|painel| matches_busca(painel, busca));
        }
        sort_paineis(&mut paineis, ordenacao);
        paineis
    }

    pub fn find(&self, id: &str) -> Option<PanelConfiguration> {
        self.store.find_by_id(id)
    }

    /// Persist a draft: assign an id on first save, stamp timestamps, and
    /// rewrite the stored list whole (append or in-place replace).
    pub fn save(
        &self,
        mut config: PanelConfiguration,
    ) -> Result<PanelConfiguration, PanelServiceError> {
        config
            .validate()
            .map_err(|err| PanelServiceError::Validation(err.to_string()))?;
        config.clamp_ranges();

        let now = Utc::now();
        if config.id.is_empty() {
            config.id = Uuid::new_v4().to_string();
            config.criado_em = now;
        }
        config.atualizado_em = now;

        let mut paineis = self.store.load_all();
        match paineis.iter_mut().find(|painel| painel.id == config.id) {
            Some(slot) => *slot = config.clone(),
            None => paineis.push(config.clone()),
        }
        self.store.save_all(&paineis)?;
        info!("saved panel {} ({})", config.id, config.nome_evento);
        Ok(config)
    }

    /// Copy an existing panel under a fresh id. Returns `None` (a no-op) when
    /// the source id is unknown.
    pub fn duplicate(&self, id: &str) -> Result<Option<PanelConfiguration>, PanelServiceError> {
        let mut paineis = self.store.load_all();
        let Some(original) = paineis.iter().find(|painel| painel.id == id).cloned() else {
            return Ok(None);
        };

        let now = Utc::now();
        let copia = PanelConfiguration {
            id: Uuid::new_v4().to_string(),
            nome_evento: format!("{} (Cópia)", original.nome_evento),
            criado_em: now,
            atualizado_em: now,
            ..original
        };
        paineis.push(copia.clone());
        self.store.save_all(&paineis)?;
        info!("duplicated panel {} -> {}", id, copia.id);
        Ok(Some(copia))
    }

    /// Remove a panel. Deletion is immediate and irreversible; the caller is
    /// responsible for having confirmed with the user first. Returns whether
    /// anything was removed (an unknown id is a no-op).
    pub fn delete(&self, id: &str) -> Result<bool, PanelServiceError> {
        let mut paineis = self.store.load_all();
        let before = paineis.len();
        paineis.retain(|painel| painel.id != id);
        if paineis.len() == before {
            return Ok(false);
        }
        self.store.save_all(&paineis)?;
        info!("deleted panel {}", id);
        Ok(true)
    }
}

fn matches_busca(painel: &PanelConfiguration, busca: &str) -> bool {
    if busca.is_empty() {
        return true;
    }
    let busca = busca.to_lowercase();
    painel.nome_evento.to_lowercase().contains(&busca)
        || painel.descricao.to_lowercase().contains(&busca)
}

fn sort_paineis(paineis: &mut [PanelConfiguration], ordenacao: PanelOrdering) {
    match ordenacao {
        PanelOrdering::Recente => {
            paineis.sort_by(|a, b| b.criado_em.cmp(&a.criado_em));
        }
        PanelOrdering::Antigo => {
            paineis.sort_by(|a, b| a.criado_em.cmp(&b.criado_em));
        }
        PanelOrdering::Nome => {
            paineis.sort_by(|a, b| {
                a.nome_evento
                    .to_lowercase()
                    .cmp(&b.nome_evento.to_lowercase())
            });
        }
    }
}

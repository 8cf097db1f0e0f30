//! Panel store tests
//!
//! Round-trip and failure-degradation behavior of the JSON file store, plus
//! the service operations running against it end to end.

use std::fs;

use anyhow::Result;
use tempfile::TempDir;
use versopag::panel::config::PanelConfiguration;
use versopag::panel::store::{JsonFileStore, PanelStore};
use versopag::services::PanelService;

fn named(nome: &str) -> PanelConfiguration {
    PanelConfiguration {
        nome_evento: nome.to_string(),
        ..PanelConfiguration::default()
    }
}

#[test]
fn test_load_all_empty_when_nothing_stored() -> Result<()> {
    let dir = TempDir::new()?;
    let store = JsonFileStore::new(dir.path());
    assert!(store.load_all().is_empty());
    Ok(())
}

#[test]
fn test_save_and_load_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let store = JsonFileStore::new(dir.path());
    let service = PanelService::new(store);

    let saved = service.save(named("Festa X"))?;
    let loaded = service.list();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], saved);

    Ok(())
}

#[test]
fn test_save_all_of_load_all_is_idempotent() -> Result<()> {
    let dir = TempDir::new()?;
    let store = JsonFileStore::new(dir.path());
    let service = PanelService::new(JsonFileStore::new(dir.path()));

    service.save(named("A"))?;
    service.save(named("B"))?;

    let first = store.load_all();
    store.save_all(&first)?;
    let second = store.load_all();
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_corrupt_store_degrades_to_empty_list() -> Result<()> {
    let dir = TempDir::new()?;
    let store = JsonFileStore::new(dir.path());

    fs::write(store.path(), "{ not valid json")?;
    assert!(store.load_all().is_empty());

    // and saving over it recovers the slot
    store.save_all(&[named("Recuperado")])?;
    assert_eq!(store.load_all().len(), 1);

    Ok(())
}

#[test]
fn test_find_by_id() -> Result<()> {
    let dir = TempDir::new()?;
    let service = PanelService::new(JsonFileStore::new(dir.path()));

    let saved = service.save(named("Festa X"))?;
    let found = service.find(&saved.id).expect("panel should be found");
    assert_eq!(found.nome_evento, "Festa X");

    assert!(service.find("missing").is_none());

    Ok(())
}

#[test]
fn test_duplicate_and_delete_through_file_store() -> Result<()> {
    let dir = TempDir::new()?;
    let service = PanelService::new(JsonFileStore::new(dir.path()));

    let original = service.save(named("Festa X"))?;
    let copia = service.duplicate(&original.id)?.expect("source exists");
    assert_eq!(copia.nome_evento, "Festa X (Cópia)");

    // a second process-independent handle sees both records
    let reread = JsonFileStore::new(dir.path()).load_all();
    assert_eq!(reread.len(), 2);

    assert!(service.delete(&original.id)?);
    let restante = JsonFileStore::new(dir.path()).load_all();
    assert_eq!(restante.len(), 1);
    assert_eq!(restante[0].id, copia.id);

    Ok(())
}

#[test]
fn test_store_file_uses_original_slot_name() -> Result<()> {
    let dir = TempDir::new()?;
    let service = PanelService::new(JsonFileStore::new(dir.path()));
    service.save(named("Festa X"))?;

    assert!(dir.path().join("paineisSalvos.json").exists());

    Ok(())
}

#[test]
fn test_stored_json_keeps_wire_field_names() -> Result<()> {
    let dir = TempDir::new()?;
    let store = JsonFileStore::new(dir.path());
    let service = PanelService::new(JsonFileStore::new(dir.path()));
    service.save(named("Festa X"))?;

    let raw = fs::read_to_string(store.path())?;
    for key in ["nomeEvento", "exibirQRCode", "quantidadeLogosExibicao", "criadoEm"] {
        assert!(raw.contains(key), "stored JSON should contain {}", key);
    }

    Ok(())
}

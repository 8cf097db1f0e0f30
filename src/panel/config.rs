use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::panel::fonts::FontFamily;

/// ## Structure
/// This module contains the configuration record for one sponsor panel.
///
/// ```text
/// PanelConfiguration
///   ├── identity: id, nomeEvento, descricao
///   ├── branding: logoEventoUrl, logoPatrocinadorUrl, cores, fontes
///   ├── layout: orientacao, posicaoLogoEvento, quantidadeLogosExibicao,
///   │           espacamentoLogos, margens, exibirCabecalho, exibirRodape
///   ├── slides: tempoExibicao, animacao, velocidadeAnimacao
///   └── rodapé: exibirQRCode, textoQRCodePrincipal, textoQRCodeSecundario
/// ```
///
/// Persisted JSON keeps the original camelCase field names so records written
/// by older releases keep parsing; new fields must carry serde defaults.

pub const MIN_LOGOS: u8 = 1;
pub const MAX_LOGOS: u8 = 9;
pub const MAX_ESPACAMENTO: u16 = 100;
pub const MAX_MARGENS: u16 = 100;
pub const MIN_TEMPO_EXIBICAO: u16 = 1;
pub const MAX_TEMPO_EXIBICAO: u16 = 30;
pub const MIN_VELOCIDADE: f32 = 0.5;
pub const MAX_VELOCIDADE: f32 = 3.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientacao {
    Horizontal,
    Vertical,
}

impl Orientacao {
    /// Venue screens are either 16:9 or a rotated 9:16 totem.
    pub fn aspect_ratio(self) -> (u32, u32) {
        match self {
            Orientacao::Horizontal => (16, 9),
            Orientacao::Vertical => (9, 16),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PosicaoLogo {
    Topo,
    Laterais,
    Cantos,
    Centro,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Animacao {
    Fade,
    Slide,
    Zoom,
    None,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelConfiguration {
    pub id: String,
    pub nome_evento: String,
    pub descricao: String,
    pub logo_evento_url: Option<String>,
    pub logo_patrocinador_url: Option<String>,
    pub cor_fundo: String,
    pub cor_texto: String,
    pub cor_destaque: String,
    pub cor_secundaria: String,
    pub fonte_titulo: FontFamily,
    pub fonte_corpo: FontFamily,
    pub orientacao: Orientacao,
    pub posicao_logo_evento: PosicaoLogo,
    pub quantidade_logos_exibicao: u8,
    pub espacamento_logos: u16,
    pub margens: u16,
    pub exibir_cabecalho: bool,
    pub exibir_rodape: bool,
    pub tempo_exibicao: u16,
    pub animacao: Animacao,
    pub velocidade_animacao: f32,
    #[serde(rename = "exibirQRCode")]
    pub exibir_qr_code: bool,
    #[serde(rename = "textoQRCodePrincipal")]
    pub texto_qr_code_principal: String,
    #[serde(rename = "textoQRCodeSecundario")]
    pub texto_qr_code_secundario: String,
    pub exibir_redes_sociais: bool,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

impl Default for PanelConfiguration {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            nome_evento: String::new(),
            descricao: String::new(),
            logo_evento_url: None,
            logo_patrocinador_url: None,
            cor_fundo: "#000000".to_string(),
            cor_texto: "#FFFFFF".to_string(),
            cor_destaque: "#FACC15".to_string(),
            cor_secundaria: "#2E2E2E".to_string(),
            fonte_titulo: FontFamily::Inter,
            fonte_corpo: FontFamily::Inter,
            orientacao: Orientacao::Horizontal,
            posicao_logo_evento: PosicaoLogo::Topo,
            quantidade_logos_exibicao: 6,
            espacamento_logos: 24,
            margens: 32,
            exibir_cabecalho: true,
            exibir_rodape: true,
            tempo_exibicao: 10,
            animacao: Animacao::Fade,
            velocidade_animacao: 1.0,
            exibir_qr_code: true,
            texto_qr_code_principal: "DIVULGUE SUA MARCA".to_string(),
            texto_qr_code_secundario: "ESCANEIE O QR CODE".to_string(),
            exibir_redes_sociais: true,
            criado_em: now,
            atualizado_em: now,
        }
    }
}

impl PanelConfiguration {
    /// Force every numeric field back into its documented range. Range inputs
    /// bound themselves, so this only matters for records that arrive from
    /// outside the editor (hand-edited store files, older releases).
    pub fn clamp_ranges(&mut self) {
        self.quantidade_logos_exibicao = self.quantidade_logos_exibicao.clamp(MIN_LOGOS, MAX_LOGOS);
        self.espacamento_logos = self.espacamento_logos.min(MAX_ESPACAMENTO);
        self.margens = self.margens.min(MAX_MARGENS);
        self.tempo_exibicao = self.tempo_exibicao.clamp(MIN_TEMPO_EXIBICAO, MAX_TEMPO_EXIBICAO);
        self.velocidade_animacao = snap_velocidade(self.velocidade_animacao);
    }

    pub fn validate(&self) -> Result<()> {
        for (campo, valor) in [
            ("corFundo", &self.cor_fundo),
            ("corTexto", &self.cor_texto),
            ("corDestaque", &self.cor_destaque),
            ("corSecundaria", &self.cor_secundaria),
        ] {
            if !is_valid_hex_color(valor) {
                return Err(anyhow!("{} is not a valid hex color: {}", campo, valor));
            }
        }
        Ok(())
    }
}

/// Accepts the `#rgb` and `#rrggbb` forms the color inputs emit.
pub fn is_valid_hex_color(value: &str) -> bool {
    let Ok(re) = Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$") else {
        return false;
    };
    re.is_match(value)
}

/// Animation speed moves in 0.5 steps between 0.5 and 3.0.
pub fn snap_velocidade(velocidade: f32) -> f32 {
    (velocidade.clamp(MIN_VELOCIDADE, MAX_VELOCIDADE) * 2.0).round() / 2.0
}

/// Field-level update for an in-progress draft. Every field is optional;
/// absent fields are left untouched by [`PanelDraft::update`].
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelPatch {
    pub nome_evento: Option<String>,
    pub descricao: Option<String>,
    pub logo_evento_url: Option<String>,
    pub logo_patrocinador_url: Option<String>,
    pub cor_fundo: Option<String>,
    pub cor_texto: Option<String>,
    pub cor_destaque: Option<String>,
    pub cor_secundaria: Option<String>,
    pub fonte_titulo: Option<FontFamily>,
    pub fonte_corpo: Option<FontFamily>,
    pub orientacao: Option<Orientacao>,
    pub posicao_logo_evento: Option<PosicaoLogo>,
    pub quantidade_logos_exibicao: Option<u8>,
    pub espacamento_logos: Option<u16>,
    pub margens: Option<u16>,
    pub exibir_cabecalho: Option<bool>,
    pub exibir_rodape: Option<bool>,
    pub tempo_exibicao: Option<u16>,
    pub animacao: Option<Animacao>,
    pub velocidade_animacao: Option<f32>,
    #[serde(rename = "exibirQRCode")]
    pub exibir_qr_code: Option<bool>,
    #[serde(rename = "textoQRCodePrincipal")]
    pub texto_qr_code_principal: Option<String>,
    #[serde(rename = "textoQRCodeSecundario")]
    pub texto_qr_code_secundario: Option<String>,
    pub exibir_redes_sociais: Option<bool>,
}

/// The in-memory, not-yet-saved configuration being edited. Owned exclusively
/// by the single editing flow; persistence happens through
/// [`crate::services::PanelService`].
#[derive(Clone, Debug, Default)]
pub struct PanelDraft {
    config: PanelConfiguration,
}

impl PanelDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_existing(config: PanelConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PanelConfiguration {
        &self.config
    }

    pub fn into_config(self) -> PanelConfiguration {
        self.config
    }

    /// Shallow-merge the patch into the draft. Numeric fields are clamped into
    /// their documented ranges; an empty logo URL clears the logo back to the
    /// placeholder glyph.
    pub fn update(&mut self, patch: PanelPatch) {
        let config = &mut self.config;
        if let Some(nome) = patch.nome_evento {
            config.nome_evento = nome;
        }
        if let Some(descricao) = patch.descricao {
            config.descricao = descricao;
        }
        if let Some(url) = patch.logo_evento_url {
            config.logo_evento_url = if url.is_empty() { None } else { Some(url) };
        }
        if let Some(url) = patch.logo_patrocinador_url {
            config.logo_patrocinador_url = if url.is_empty() { None } else { Some(url) };
        }
        if let Some(cor) = patch.cor_fundo {
            config.cor_fundo = cor;
        }
        if let Some(cor) = patch.cor_texto {
            config.cor_texto = cor;
        }
        if let Some(cor) = patch.cor_destaque {
            config.cor_destaque = cor;
        }
        if let Some(cor) = patch.cor_secundaria {
            config.cor_secundaria = cor;
        }
        if let Some(fonte) = patch.fonte_titulo {
            config.fonte_titulo = fonte;
        }
        if let Some(fonte) = patch.fonte_corpo {
            config.fonte_corpo = fonte;
        }
        if let Some(orientacao) = patch.orientacao {
            config.orientacao = orientacao;
        }
        if let Some(posicao) = patch.posicao_logo_evento {
            config.posicao_logo_evento = posicao;
        }
        if let Some(quantidade) = patch.quantidade_logos_exibicao {
            config.quantidade_logos_exibicao = quantidade.clamp(MIN_LOGOS, MAX_LOGOS);
        }
        if let Some(espacamento) = patch.espacamento_logos {
            config.espacamento_logos = espacamento.min(MAX_ESPACAMENTO);
        }
        if let Some(margens) = patch.margens {
            config.margens = margens.min(MAX_MARGENS);
        }
        if let Some(exibir) = patch.exibir_cabecalho {
            config.exibir_cabecalho = exibir;
        }
        if let Some(exibir) = patch.exibir_rodape {
            config.exibir_rodape = exibir;
        }
        if let Some(tempo) = patch.tempo_exibicao {
            config.tempo_exibicao = tempo.clamp(MIN_TEMPO_EXIBICAO, MAX_TEMPO_EXIBICAO);
        }
        if let Some(animacao) = patch.animacao {
            config.animacao = animacao;
        }
        if let Some(velocidade) = patch.velocidade_animacao {
            config.velocidade_animacao = snap_velocidade(velocidade);
        }
        if let Some(exibir) = patch.exibir_qr_code {
            config.exibir_qr_code = exibir;
        }
        if let Some(texto) = patch.texto_qr_code_principal {
            config.texto_qr_code_principal = texto;
        }
        if let Some(texto) = patch.texto_qr_code_secundario {
            config.texto_qr_code_secundario = texto;
        }
        if let Some(exibir) = patch.exibir_redes_sociais {
            config.exibir_redes_sociais = exibir;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration_is_valid() {
        let config = PanelConfiguration::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.quantidade_logos_exibicao, 6);
        assert!(config.exibir_cabecalho);
        assert!(config.exibir_rodape);
        assert!(config.exibir_qr_code);
    }

    #[test]
    fn test_wire_format_keeps_original_field_names() {
        let config = PanelConfiguration::default();
        let value = serde_json::to_value(&config).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "nomeEvento",
            "logoEventoUrl",
            "corFundo",
            "fonteTitulo",
            "posicaoLogoEvento",
            "quantidadeLogosExibicao",
            "espacamentoLogos",
            "exibirCabecalho",
            "tempoExibicao",
            "velocidadeAnimacao",
            "exibirQRCode",
            "textoQRCodePrincipal",
            "textoQRCodeSecundario",
            "exibirRedesSociais",
            "criadoEm",
            "atualizadoEm",
        ] {
            assert!(object.contains_key(key), "missing wire field {}", key);
        }

        assert_eq!(value["orientacao"], "horizontal");
        assert_eq!(value["posicaoLogoEvento"], "topo");
        assert_eq!(value["animacao"], "fade");
    }

    #[test]
    fn test_wire_format_round_trip() {
        let mut config = PanelConfiguration::default();
        config.id = "abc".to_string();
        config.nome_evento = "Festa X".to_string();
        config.orientacao = Orientacao::Vertical;
        config.posicao_logo_evento = PosicaoLogo::Laterais;
        config.animacao = Animacao::Zoom;

        let json = serde_json::to_string(&config).unwrap();
        let back: PanelConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_older_records_without_newer_fields_still_parse() {
        // A record written before the slide/QR options existed.
        let json = r##"{
            "id": "1700000000000",
            "nomeEvento": "Evento Antigo",
            "corFundo": "#111111"
        }"##;

        let config: PanelConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.nome_evento, "Evento Antigo");
        assert_eq!(config.cor_fundo, "#111111");
        assert_eq!(config.tempo_exibicao, 10);
        assert!(config.exibir_qr_code);
    }

    #[test]
    fn test_update_clamps_numeric_fields() {
        let mut draft = PanelDraft::new();
        draft.update(PanelPatch {
            quantidade_logos_exibicao: Some(42),
            espacamento_logos: Some(900),
            margens: Some(101),
            tempo_exibicao: Some(0),
            velocidade_animacao: Some(2.7),
            ..Default::default()
        });

        let config = draft.config();
        assert_eq!(config.quantidade_logos_exibicao, 9);
        assert_eq!(config.espacamento_logos, 100);
        assert_eq!(config.margens, 100);
        assert_eq!(config.tempo_exibicao, 1);
        assert_eq!(config.velocidade_animacao, 2.5);
    }

    #[test]
    fn test_update_merges_only_present_fields() {
        let mut draft = PanelDraft::new();
        draft.update(PanelPatch {
            nome_evento: Some("Feira de Tecnologia".to_string()),
            ..Default::default()
        });
        draft.update(PanelPatch {
            cor_fundo: Some("#101010".to_string()),
            ..Default::default()
        });

        assert_eq!(draft.config().nome_evento, "Feira de Tecnologia");
        assert_eq!(draft.config().cor_fundo, "#101010");
        // untouched fields keep their defaults
        assert_eq!(draft.config().quantidade_logos_exibicao, 6);
    }

    #[test]
    fn test_empty_logo_url_clears_to_placeholder() {
        let mut draft = PanelDraft::new();
        draft.update(PanelPatch {
            logo_evento_url: Some("https://cdn.example.com/logo.png".to_string()),
            ..Default::default()
        });
        assert!(draft.config().logo_evento_url.is_some());

        draft.update(PanelPatch {
            logo_evento_url: Some(String::new()),
            ..Default::default()
        });
        assert!(draft.config().logo_evento_url.is_none());
    }

    #[test]
    fn test_hex_color_validation() {
        assert!(is_valid_hex_color("#000000"));
        assert!(is_valid_hex_color("#FACC15"));
        assert!(is_valid_hex_color("#fff"));
        assert!(!is_valid_hex_color("000000"));
        assert!(!is_valid_hex_color("#12345"));
        assert!(!is_valid_hex_color("#GGGGGG"));
        assert!(!is_valid_hex_color("red"));
    }

    #[test]
    fn test_snap_velocidade() {
        assert_eq!(snap_velocidade(0.1), 0.5);
        assert_eq!(snap_velocidade(1.0), 1.0);
        assert_eq!(snap_velocidade(1.3), 1.5);
        assert_eq!(snap_velocidade(2.7), 2.5);
        assert_eq!(snap_velocidade(9.0), 3.0);
    }
}

use serde::Serialize;

use crate::panel::config::{Animacao, PanelConfiguration, PosicaoLogo, MAX_LOGOS, MIN_LOGOS};
use crate::panel::fonts::FontFamily;
use crate::panel::layout::{effective_gap, resolve_grid, SizeTier, ViewMode};

/// Brand mark pinned to the left side of every rendered footer.
pub const BRAND_MARK: &str = "VersoPag";

/// A logo slot either references the configured image or falls back to the
/// placeholder glyph.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LogoSource {
    Url(String),
    Placeholder,
}

impl LogoSource {
    fn from_url(url: Option<&String>) -> Self {
        match url {
            Some(u) if !u.is_empty() => LogoSource::Url(u.clone()),
            _ => LogoSource::Placeholder,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderLayout {
    pub nome_evento: String,
    /// `laterais`/`cantos` place the one event logo on both sides of the
    /// centered title; `topo`/`centro` center everything with no side logos.
    pub side_logos: bool,
    pub logo_evento: LogoSource,
    pub fonte_titulo: FontFamily,
    pub cor_destaque: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FooterLayout {
    pub brand: &'static str,
    /// Each QR caption line is independently omitted when its text is empty.
    pub texto_principal: Option<String>,
    pub texto_secundario: Option<String>,
    pub cor_destaque: String,
    pub cor_texto: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogoGridLayout {
    pub slots: u8,
    pub columns: u8,
    pub tier: SizeTier,
    pub logo_px: u32,
    pub label_font_px: u32,
    pub gap_px: u32,
    pub show_social_line: bool,
    pub logo_patrocinador: LogoSource,
    pub cor_texto: String,
    pub cor_secundaria: String,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SlideTiming {
    pub display_secs: u16,
    pub animacao: Animacao,
    pub velocidade: f32,
}

impl SlideTiming {
    pub fn display_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.display_secs))
    }
}

/// The fully resolved, render-ready description of one panel in one view.
/// Pure derived state: the inline preview and the fullscreen visualize view
/// consume the same structure and differ only by the `view` passed in.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PanelFrame {
    pub view: ViewMode,
    pub aspect_ratio: (u32, u32),
    pub margens_px: u16,
    pub cor_fundo: String,
    pub fonte_corpo: FontFamily,
    pub header: Option<HeaderLayout>,
    pub grid: LogoGridLayout,
    pub footer: Option<FooterLayout>,
    pub timing: SlideTiming,
    /// Stylesheets to load fire-and-forget for the configured fonts.
    pub stylesheets: Vec<String>,
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

pub fn resolve_header(config: &PanelConfiguration) -> Option<HeaderLayout> {
    if !config.exibir_cabecalho {
        return None;
    }
    let side_logos = matches!(
        config.posicao_logo_evento,
        PosicaoLogo::Laterais | PosicaoLogo::Cantos
    );
    Some(HeaderLayout {
        nome_evento: config.nome_evento.clone(),
        side_logos,
        logo_evento: LogoSource::from_url(config.logo_evento_url.as_ref()),
        fonte_titulo: config.fonte_titulo,
        cor_destaque: config.cor_destaque.clone(),
    })
}

/// The footer renders only when both toggles agree; otherwise the region is
/// omitted entirely rather than partially rendered.
pub fn resolve_footer(config: &PanelConfiguration) -> Option<FooterLayout> {
    if !(config.exibir_rodape && config.exibir_qr_code) {
        return None;
    }
    Some(FooterLayout {
        brand: BRAND_MARK,
        texto_principal: non_empty(&config.texto_qr_code_principal),
        texto_secundario: non_empty(&config.texto_qr_code_secundario),
        cor_destaque: config.cor_destaque.clone(),
        cor_texto: config.cor_texto.clone(),
    })
}

pub fn resolve_frame(config: &PanelConfiguration, view: ViewMode) -> PanelFrame {
    let count = config.quantidade_logos_exibicao;
    let grid = resolve_grid(count);

    let mut stylesheets = vec![config.fonte_titulo.stylesheet_url()];
    if config.fonte_corpo != config.fonte_titulo {
        stylesheets.push(config.fonte_corpo.stylesheet_url());
    }

    PanelFrame {
        view,
        aspect_ratio: config.orientacao.aspect_ratio(),
        margens_px: config.margens,
        cor_fundo: config.cor_fundo.clone(),
        fonte_corpo: config.fonte_corpo,
        header: resolve_header(config),
        grid: LogoGridLayout {
            slots: count.clamp(MIN_LOGOS, MAX_LOGOS),
            columns: grid.columns,
            tier: grid.tier,
            logo_px: grid.tier.logo_px(view),
            label_font_px: grid.tier.label_font_px(view),
            gap_px: effective_gap(config.espacamento_logos, count, view),
            show_social_line: config.exibir_redes_sociais && grid.social_line_allowed,
            logo_patrocinador: LogoSource::from_url(config.logo_patrocinador_url.as_ref()),
            cor_texto: config.cor_texto.clone(),
            cor_secundaria: config.cor_secundaria.clone(),
        },
        footer: resolve_footer(config),
        timing: SlideTiming {
            display_secs: config.tempo_exibicao,
            animacao: config.animacao,
            velocidade: config.velocidade_animacao,
        },
        stylesheets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::config::Orientacao;

    fn config() -> PanelConfiguration {
        PanelConfiguration {
            nome_evento: "Festa X".to_string(),
            ..PanelConfiguration::default()
        }
    }

    #[test]
    fn test_footer_requires_both_toggles() {
        for (rodape, qr, expected) in [
            (true, true, true),
            (true, false, false),
            (false, true, false),
            (false, false, false),
        ] {
            let mut c = config();
            c.exibir_rodape = rodape;
            c.exibir_qr_code = qr;
            assert_eq!(
                resolve_footer(&c).is_some(),
                expected,
                "rodape={} qr={}",
                rodape,
                qr
            );
        }
    }

    #[test]
    fn test_footer_brand_and_caption_lines() {
        let mut c = config();
        c.texto_qr_code_secundario = String::new();
        let footer = resolve_footer(&c).unwrap();
        assert_eq!(footer.brand, "VersoPag");
        assert_eq!(footer.texto_principal.as_deref(), Some("DIVULGUE SUA MARCA"));
        assert_eq!(footer.texto_secundario, None);
    }

    #[test]
    fn test_header_suppressed_entirely_when_toggled_off() {
        let mut c = config();
        c.exibir_cabecalho = false;
        c.posicao_logo_evento = PosicaoLogo::Laterais;
        assert!(resolve_header(&c).is_none());
    }

    #[test]
    fn test_header_side_logos_follow_position() {
        for (posicao, side_logos) in [
            (PosicaoLogo::Topo, false),
            (PosicaoLogo::Centro, false),
            (PosicaoLogo::Laterais, true),
            (PosicaoLogo::Cantos, true),
        ] {
            let mut c = config();
            c.posicao_logo_evento = posicao;
            let header = resolve_header(&c).unwrap();
            assert_eq!(header.side_logos, side_logos, "{:?}", posicao);
        }
    }

    #[test]
    fn test_missing_logo_renders_placeholder() {
        let mut c = config();
        c.logo_evento_url = None;
        c.logo_patrocinador_url = Some(String::new());
        let frame = resolve_frame(&c, ViewMode::Fullscreen);
        assert_eq!(frame.header.unwrap().logo_evento, LogoSource::Placeholder);
        assert_eq!(frame.grid.logo_patrocinador, LogoSource::Placeholder);
    }

    #[test]
    fn test_five_logos_tier_s_three_columns_social_shown() {
        let mut c = config();
        c.quantidade_logos_exibicao = 5;
        c.exibir_redes_sociais = true;
        let frame = resolve_frame(&c, ViewMode::Fullscreen);
        assert_eq!(frame.grid.tier, SizeTier::S);
        assert_eq!(frame.grid.columns, 3);
        assert!(frame.grid.show_social_line);
    }

    #[test]
    fn test_social_line_forced_off_at_seven_despite_toggle() {
        let mut c = config();
        c.exibir_redes_sociais = true;
        c.quantidade_logos_exibicao = 6;
        assert!(resolve_frame(&c, ViewMode::Preview).grid.show_social_line);

        c.quantidade_logos_exibicao = 7;
        assert!(!resolve_frame(&c, ViewMode::Preview).grid.show_social_line);

        // and the toggle still governs the low-count range
        c.quantidade_logos_exibicao = 3;
        c.exibir_redes_sociais = false;
        assert!(!resolve_frame(&c, ViewMode::Preview).grid.show_social_line);
    }

    #[test]
    fn test_orientation_picks_aspect_ratio() {
        let mut c = config();
        c.orientacao = Orientacao::Horizontal;
        assert_eq!(resolve_frame(&c, ViewMode::Preview).aspect_ratio, (16, 9));
        c.orientacao = Orientacao::Vertical;
        assert_eq!(resolve_frame(&c, ViewMode::Preview).aspect_ratio, (9, 16));
    }

    #[test]
    fn test_same_tier_boundaries_both_views() {
        let mut c = config();
        for count in 1..=9 {
            c.quantidade_logos_exibicao = count;
            let preview = resolve_frame(&c, ViewMode::Preview);
            let fullscreen = resolve_frame(&c, ViewMode::Fullscreen);
            assert_eq!(preview.grid.tier, fullscreen.grid.tier, "count {}", count);
            assert_eq!(
                preview.grid.columns, fullscreen.grid.columns,
                "count {}",
                count
            );
            assert!(fullscreen.grid.logo_px > preview.grid.logo_px);
        }
    }

    #[test]
    fn test_stylesheets_deduplicate_shared_font() {
        let mut c = config();
        c.fonte_titulo = FontFamily::Oswald;
        c.fonte_corpo = FontFamily::Oswald;
        assert_eq!(resolve_frame(&c, ViewMode::Preview).stylesheets.len(), 1);

        c.fonte_corpo = FontFamily::Lato;
        assert_eq!(resolve_frame(&c, ViewMode::Preview).stylesheets.len(), 2);
    }

    #[test]
    fn test_timing_carries_slide_settings() {
        let mut c = config();
        c.tempo_exibicao = 12;
        c.animacao = Animacao::Slide;
        c.velocidade_animacao = 2.0;
        let frame = resolve_frame(&c, ViewMode::Fullscreen);
        assert_eq!(frame.timing.display_secs, 12);
        assert_eq!(frame.timing.display_duration().as_secs(), 12);
        assert_eq!(frame.timing.animacao, Animacao::Slide);
    }
}

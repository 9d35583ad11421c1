use crate::config::DrawParams;
use crate::error::{LottoError, LtResult};
use crate::game::GameKind;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeTier {
    #[serde(default)]
    pub descricao_faixa: String,
    #[serde(default)]
    pub faixa: u32,
    #[serde(default)]
    pub numero_de_ganhadores: u64,
    #[serde(default)]
    pub valor_premio: f64,
}

/// One contest as returned by the results portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRecord {
    pub numero: u32,
    pub data_apuracao: String,
    pub lista_dezenas: Vec<String>,
    #[serde(default)]
    pub acumulado: bool,
    #[serde(default)]
    pub valor_acumulado_proximo_concurso: f64,
    #[serde(default)]
    pub valor_estimado_proximo_concurso: Option<f64>,
    #[serde(default)]
    pub lista_rateio_premio: Vec<PrizeTier>,
    #[serde(default)]
    pub local_sorteio: Option<String>,
    #[serde(default, rename = "nomeMunicipioUFSorteio")]
    pub nome_municipio_uf_sorteio: Option<String>,
}

impl DrawRecord {
    /// Drawn numbers as integers, in the order the portal lists them.
    pub fn numbers(&self) -> LtResult<Vec<u8>> {
        self.lista_dezenas
            .iter()
            .map(|s| {
                s.trim().parse::<u8>().map_err(|_| {
                    LottoError::Validation(format!(
                        "Contest {} lists a non-numeric value '{}'",
                        self.numero, s
                    ))
                })
            })
            .collect()
    }
}

/// Async client for the lottery results API.
#[derive(Debug, Clone)]
pub struct DrawClient {
    client: Client,
    base_url: String,
}

impl DrawClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_params(params: &DrawParams) -> LtResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(params.draw_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: params.draw_api.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{slug}/` for the latest contest, `{base}/{slug}/{n}` otherwise.
    pub fn endpoint(&self, contest: Option<u32>, game: GameKind) -> String {
        match contest {
            Some(n) => format!("{}/{}/{}", self.base_url, game.api_slug(), n),
            None => format!("{}/{}/", self.base_url, game.api_slug()),
        }
    }

    pub async fn fetch(&self, contest: Option<u32>, game: GameKind) -> LtResult<DrawRecord> {
        if contest == Some(0) {
            return Err(LottoError::Validation(
                "Contest numbers start at 1".to_string(),
            ));
        }
        let url = self.endpoint(contest, game);
        info!("Fetching {} draw from {}", game, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Draw request to {} failed: {}", url, e);
            LottoError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Draw service answered {} for {}", status, url);
            return Err(LottoError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let record: DrawRecord = response.json().await.map_err(|e| {
            warn!("Could not decode draw from {}: {}", url, e);
            LottoError::Http(e)
        })?;
        Ok(record)
    }

    /// The requested contest plus the one before it, when there is one.
    pub async fn fetch_with_previous(
        &self,
        contest: Option<u32>,
        game: GameKind,
    ) -> LtResult<(DrawRecord, Option<DrawRecord>)> {
        let current = self.fetch(contest, game).await?;
        let previous = if current.numero > 1 {
            Some(self.fetch(Some(current.numero - 1), game).await?)
        } else {
            None
        };
        Ok((current, previous))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_shapes() {
        let client = DrawClient::new("http://localhost/api/");
        assert_eq!(client.base_url(), "http://localhost/api");
        assert_eq!(client.endpoint(None, GameKind::MegaSena), "http://localhost/api/megasena/");
        assert_eq!(
            client.endpoint(Some(2700), GameKind::Trevo),
            "http://localhost/api/trevo/2700"
        );
    }

    #[test]
    fn test_record_decodes_portal_json() {
        let json = r#"{
            "numero": 2700,
            "dataApuracao": "01/04/2024",
            "listaDezenas": ["04", "15", "23", "31", "42", "58"],
            "acumulado": true,
            "valorAcumuladoProximoConcurso": 1000000.5,
            "nomeMunicipioUFSorteio": "SÃO PAULO, SP",
            "listaRateioPremio": [{"descricaoFaixa": "6 acertos", "faixa": 1, "numeroDeGanhadores": 0, "valorPremio": 0.0}]
        }"#;
        let record: DrawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.numbers().unwrap(), vec![4, 15, 23, 31, 42, 58]);
        assert_eq!(record.nome_municipio_uf_sorteio.as_deref(), Some("SÃO PAULO, SP"));
        assert_eq!(record.lista_rateio_premio[0].faixa, 1);
        assert!(record.valor_estimado_proximo_concurso.is_none());
    }

    #[test]
    fn test_numbers_rejects_garbage() {
        let record = DrawRecord {
            numero: 1,
            data_apuracao: String::new(),
            lista_dezenas: vec!["xx".into()],
            acumulado: false,
            valor_acumulado_proximo_concurso: 0.0,
            valor_estimado_proximo_concurso: None,
            lista_rateio_premio: vec![],
            local_sorteio: None,
            nome_municipio_uf_sorteio: None,
        };
        assert!(record.numbers().is_err());
    }
}

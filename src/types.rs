use serde::{Deserialize, Serialize};

/// The fixed set of lottery games fetched from the upstream portal.
///
/// Mega-Sena da Virada is not listed here: it is derived locally from the
/// Mega-Sena dataset and never fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lottery {
    DiaDeSorte,
    DuplaSena,
    Federal,
    Lotofacil,
    Lotomania,
    MaisMilionaria,
    MegaSena,
    Quina,
    SuperSete,
    Timemania,
}

impl Lottery {
    pub const ALL: [Lottery; 10] = [
        Lottery::DiaDeSorte,
        Lottery::DuplaSena,
        Lottery::Federal,
        Lottery::Lotofacil,
        Lottery::Lotomania,
        Lottery::MaisMilionaria,
        Lottery::MegaSena,
        Lottery::Quina,
        Lottery::SuperSete,
        Lottery::Timemania,
    ];

    /// File-name identifier, also used in log output.
    pub fn slug(self) -> &'static str {
        match self {
            Lottery::DiaDeSorte => "dia-de-sorte",
            Lottery::DuplaSena => "dupla-sena",
            Lottery::Federal => "federal",
            Lottery::Lotofacil => "lotofacil",
            Lottery::Lotomania => "lotomania",
            Lottery::MaisMilionaria => "mais-milionaria",
            Lottery::MegaSena => "mega-sena",
            Lottery::Quina => "quina",
            Lottery::SuperSete => "super-sete",
            Lottery::Timemania => "timemania",
        }
    }

    /// Path segment of the upstream API endpoint.
    pub fn endpoint(self) -> &'static str {
        match self {
            Lottery::DiaDeSorte => "diadesorte",
            Lottery::DuplaSena => "duplasena",
            Lottery::Federal => "federal",
            Lottery::Lotofacil => "lotofacil",
            Lottery::Lotomania => "lotomania",
            Lottery::MaisMilionaria => "maismilionaria",
            Lottery::MegaSena => "megasena",
            Lottery::Quina => "quina",
            Lottery::SuperSete => "supersete",
            Lottery::Timemania => "timemania",
        }
    }

    /// Fixed zero-pad width of the drawn numbers.
    pub fn pad_width(self) -> usize {
        match self {
            Lottery::Federal => 5,
            Lottery::SuperSete => 1,
            _ => 2,
        }
    }

    /// How many numbers a complete draw contains.
    pub fn draw_size(self) -> usize {
        match self {
            Lottery::DiaDeSorte => 7,
            Lottery::DuplaSena => 6,
            Lottery::Federal => 5,
            Lottery::Lotofacil => 15,
            Lottery::Lotomania => 20,
            Lottery::MaisMilionaria => 6,
            Lottery::MegaSena => 6,
            Lottery::Quina => 5,
            Lottery::SuperSete => 7,
            Lottery::Timemania => 7,
        }
    }
}

/// One published draw, as stored in the per-lottery JSON files.
///
/// The optional fields are fixed per lottery type: `resultado_2` for
/// Dupla Sena, `trevos` for +Milionária, `time_do_coracao` for Timemania.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub concurso: u32,
    pub data: String,
    pub resultado: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resultado_2: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trevos: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_do_coracao: Option<String>,
}

/// Raw draw payload returned by the upstream portal API.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamDraw {
    pub numero: u32,
    #[serde(rename = "dataApuracao")]
    pub data_apuracao: String,
    #[serde(rename = "listaDezenas")]
    pub lista_dezenas: Vec<String>,
    #[serde(rename = "listaDezenasSegundoSorteio")]
    pub lista_dezenas_segundo_sorteio: Option<Vec<String>>,
    #[serde(rename = "trevosSorteados")]
    pub trevos_sorteados: Option<Vec<String>>,
    #[serde(rename = "nomeTimeCoracaoMesSorte")]
    pub nome_time_coracao: Option<String>,
}

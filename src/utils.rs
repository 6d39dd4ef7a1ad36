use chrono::NaiveDate;

use crate::error::UpdateError;
use crate::types::{DrawRecord, Lottery, UpstreamDraw};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse every drawn number, sort ascending, and zero-pad to `width`.
/// An unexpected count or a non-numeric ball is a parse error.
pub fn normalize_numbers(
    raw: &[String],
    width: usize,
    expected: usize,
) -> Result<Vec<String>, UpdateError> {
    if raw.len() != expected {
        return Err(UpdateError::Parse(format!(
            "expected {expected} numbers, got {}",
            raw.len()
        )));
    }

    let mut parsed = Vec::with_capacity(raw.len());
    for value in raw {
        let number: u32 = value
            .trim()
            .parse()
            .map_err(|_| UpdateError::Parse(format!("non-numeric ball {value:?}")))?;
        parsed.push(number);
    }
    parsed.sort_unstable();

    Ok(parsed.iter().map(|n| format!("{n:0width$}")).collect())
}

/// Collapse tabs and runs of whitespace to single spaces. Upstream team
/// names arrive padded with tab characters.
pub fn normalize_team_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map a raw upstream payload into the published record schema for the
/// given lottery, applying its variant field set.
pub fn normalize_draw(lottery: Lottery, raw: &UpstreamDraw) -> Result<DrawRecord, UpdateError> {
    if raw.numero == 0 {
        return Err(UpdateError::Parse("concurso must be positive".to_string()));
    }
    if NaiveDate::parse_from_str(&raw.data_apuracao, DATE_FORMAT).is_err() {
        return Err(UpdateError::Parse(format!(
            "bad draw date {:?}",
            raw.data_apuracao
        )));
    }

    let resultado = normalize_numbers(&raw.lista_dezenas, lottery.pad_width(), lottery.draw_size())?;

    let mut record = DrawRecord {
        concurso: raw.numero,
        data: raw.data_apuracao.clone(),
        resultado,
        resultado_2: None,
        trevos: None,
        time_do_coracao: None,
    };

    match lottery {
        Lottery::DuplaSena => {
            let second = raw
                .lista_dezenas_segundo_sorteio
                .as_deref()
                .ok_or_else(|| UpdateError::Parse("missing second draw".to_string()))?;
            record.resultado_2 =
                Some(normalize_numbers(second, lottery.pad_width(), lottery.draw_size())?);
        }
        Lottery::MaisMilionaria => {
            let trevos = raw
                .trevos_sorteados
                .as_deref()
                .ok_or_else(|| UpdateError::Parse("missing trevos".to_string()))?;
            record.trevos = Some(normalize_numbers(trevos, 2, 2)?);
        }
        Lottery::Timemania => {
            let team = raw
                .nome_time_coracao
                .as_deref()
                .ok_or_else(|| UpdateError::Parse("missing time do coracao".to_string()))?;
            record.time_do_coracao = Some(normalize_team_name(team));
        }
        _ => {}
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(numero: u32, dezenas: &[&str]) -> UpstreamDraw {
        UpstreamDraw {
            numero,
            data_apuracao: "31/12/2025".to_string(),
            lista_dezenas: dezenas.iter().map(|s| s.to_string()).collect(),
            lista_dezenas_segundo_sorteio: None,
            trevos_sorteados: None,
            nome_time_coracao: None,
        }
    }

    #[test]
    fn numbers_are_sorted_and_padded() {
        let raw = payload(2801, &["05", "33", "12", "50", "41", "09"]);
        let record = normalize_draw(Lottery::MegaSena, &raw).unwrap();
        assert_eq!(record.concurso, 2801);
        assert_eq!(record.resultado, ["05", "09", "12", "33", "41", "50"]);
    }

    #[test]
    fn pad_width_follows_the_lottery() {
        let raw = payload(100, &["7", "0", "3", "9", "3", "1", "5"]);
        let record = normalize_draw(Lottery::SuperSete, &raw).unwrap();
        assert_eq!(record.resultado, ["0", "1", "3", "3", "5", "7", "9"]);

        let raw = payload(6000, &["12345", "5", "98765", "404", "31"]);
        let record = normalize_draw(Lottery::Federal, &raw).unwrap();
        assert_eq!(
            record.resultado,
            ["00005", "00031", "00404", "12345", "98765"]
        );
    }

    #[test]
    fn short_draw_is_a_parse_error() {
        let raw = payload(2801, &["05", "33"]);
        let err = normalize_draw(Lottery::MegaSena, &raw).unwrap_err();
        assert!(matches!(err, UpdateError::Parse(_)));
    }

    #[test]
    fn non_numeric_ball_is_a_parse_error() {
        let raw = payload(2801, &["05", "33", "12", "50", "41", "xx"]);
        let err = normalize_draw(Lottery::MegaSena, &raw).unwrap_err();
        assert!(matches!(err, UpdateError::Parse(_)));
    }

    #[test]
    fn bad_date_is_a_parse_error() {
        let mut raw = payload(2801, &["05", "33", "12", "50", "41", "09"]);
        raw.data_apuracao = "2025-12-31".to_string();
        let err = normalize_draw(Lottery::MegaSena, &raw).unwrap_err();
        assert!(matches!(err, UpdateError::Parse(_)));
    }

    #[test]
    fn dupla_sena_requires_the_second_draw() {
        let mut raw = payload(700, &["05", "33", "12", "50", "41", "09"]);
        let err = normalize_draw(Lottery::DuplaSena, &raw).unwrap_err();
        assert!(matches!(err, UpdateError::Parse(_)));

        raw.lista_dezenas_segundo_sorteio = Some(
            ["44", "02", "17", "28", "36", "11"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        let record = normalize_draw(Lottery::DuplaSena, &raw).unwrap();
        assert_eq!(
            record.resultado_2.unwrap(),
            ["02", "11", "17", "28", "36", "44"]
        );
    }

    #[test]
    fn mais_milionaria_normalizes_trevos() {
        let mut raw = payload(250, &["05", "33", "12", "50", "41", "09"]);
        raw.trevos_sorteados = Some(vec!["6".to_string(), "1".to_string()]);
        let record = normalize_draw(Lottery::MaisMilionaria, &raw).unwrap();
        assert_eq!(record.trevos.unwrap(), ["01", "06"]);
    }

    #[test]
    fn timemania_collapses_team_whitespace() {
        let mut raw = payload(2200, &["05", "33", "12", "50", "41", "09", "76"]);
        raw.nome_time_coracao = Some("SAO \tPAULO   \tSP".to_string());
        let record = normalize_draw(Lottery::Timemania, &raw).unwrap();
        assert_eq!(record.time_do_coracao.unwrap(), "SAO PAULO SP");
    }
}

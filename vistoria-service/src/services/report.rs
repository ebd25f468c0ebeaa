use crate::models::{Client, Inspection};
use chrono::{DateTime, Utc};

/// Report ids are derived from the generation instant, matching the
/// `REP-<millis>` scheme the mobile client expects.
pub fn report_id(generated_at: DateTime<Utc>) -> String {
    format!("REP-{}", generated_at.timestamp_millis())
}

pub fn download_filename(inspection: &Inspection) -> String {
    format!("relatorio-{}.pdf", inspection.protocol_number)
}

fn date_br(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn text_or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Render the downloadable report body. The layout mirrors the printed
/// form used by the field team; document text stays in Portuguese.
pub fn render(inspection: &Inspection, client: Option<&Client>) -> Vec<u8> {
    let mut body = String::new();

    body.push_str("======================================\n");
    body.push_str("RELATÓRIO DE VISTORIA TÉCNICA BRASILIT\n");
    body.push_str("======================================\n\n");

    body.push_str(&format!("Protocolo: {}\n", inspection.protocol_number));
    body.push_str(&format!(
        "Data: {}\n\n",
        inspection
            .scheduled_date
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "Não agendada".to_string())
    ));

    body.push_str("INFORMAÇÕES DO CLIENTE\n");
    body.push_str("---------------------\n");
    body.push_str(&format!(
        "Nome: {}\n",
        client.map(|c| c.name.as_str()).unwrap_or("-")
    ));
    body.push_str(&format!(
        "Contato: {}\n",
        text_or_dash(client.and_then(|c| c.contact_name.as_deref()))
    ));
    body.push_str(&format!(
        "Telefone: {}\n\n",
        text_or_dash(client.and_then(|c| c.contact_phone.as_deref()))
    ));

    body.push_str("DETALHES DA INSPEÇÃO\n");
    body.push_str("-------------------\n");
    body.push_str(&format!(
        "Produto: {}\n",
        text_or_dash(inspection.roof_model.as_deref())
    ));
    body.push_str(&format!(
        "Quantidade: {} unidades\n",
        inspection
            .quantity
            .map(|q| q.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    body.push_str(&format!(
        "Área: {} m²\n",
        inspection
            .area
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    body.push_str(&format!(
        "Data de instalação: {}\n\n",
        date_br(inspection.installation_date)
    ));

    body.push_str("CONCLUSÃO\n");
    body.push_str("---------\n");
    body.push_str(&format!(
        "{}\n\n",
        inspection
            .conclusion
            .as_deref()
            .unwrap_or("Sem conclusão registrada")
    ));

    body.push_str("RECOMENDAÇÕES\n");
    body.push_str("-------------\n");
    body.push_str(&format!(
        "{}\n\n",
        inspection
            .recommendation
            .as_deref()
            .unwrap_or("Sem recomendações registradas")
    ));

    body.push_str("Assinatura: ______________________\n\n");
    body.push_str(&format!(
        "Documento gerado em {}\n",
        Utc::now().format("%d/%m/%Y %H:%M")
    ));
    body.push_str(&format!(
        "Para validar este documento, acesse www.brasilit.com.br/validar e informe o código {}\n",
        inspection.protocol_number
    ));

    body.into_bytes()
}

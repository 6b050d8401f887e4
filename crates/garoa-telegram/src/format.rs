//! Forecast and outfit rendering.

use garoa_weather::WeatherReport;

use crate::phrases;

/// A softer bar than the watch threshold: digests mention rain at ≥60%.
const RAIN_ADVISORY_THRESHOLD: u8 = 60;

/// Render the forecast block shared by digests, rain alerts and `/clima`.
///
/// Rain alerts pass `with_rain_advisory = false`; their headline already
/// says it is going to rain.
pub fn format_report(report: &WeatherReport, with_rain_advisory: bool) -> String {
    let mut text = format!("📍 Cidade: {}", report.city_name);
    if let Some(day) = report.today() {
        text.push_str(&format!(
            "\n🌡️ Temp. Máx/Mín: {}°C / {}°C",
            day.max, day.min
        ));
        text.push_str(&format!("\n📝 Condição: {}", day.description));
    }
    text.push_str(&format!("\n💨 Umidade: {}%", report.humidity));
    text.push_str(&format!(
        "\n💡 Agora: {} ({}°C)",
        report.description, report.temp
    ));

    if with_rain_advisory {
        if let Some(p) = report.rain_probability() {
            if p >= RAIN_ADVISORY_THRESHOLD {
                text.push_str(&format!(
                    "\n\n⚠️ *Alerta de chuva: {p}% de chance.*\n_{}_",
                    phrases::pick(phrases::RAIN_ADVISORY)
                ));
            }
        }
    }
    text
}

/// Clothing suggestion from the current temperature, with an umbrella
/// addendum when rain is likely.
pub fn outfit_suggestion(report: &WeatherReport) -> String {
    let mut suggestion = match report.temp {
        t if t < 15 => {
            "❄️ *Frio intenso!* Casaco pesado, gorro e talvez até luvas. \
             O importante é ficar bem aquecido!"
        }
        t if t < 20 => {
            "🧥 *Clima friozinho.* Um bom moletom ou uma jaqueta resolvem. \
             Não saia desagasalhado(a)!"
        }
        t if t < 24 => {
            "👕 *Temperatura amena.* Manga comprida ou camiseta com uma \
             jaqueta leve por cima é perfeito."
        }
        _ => {
            "☀️ *Calor!* Roupas leves: camiseta, regata e bermuda. \
             Não esqueça o protetor solar!"
        }
    }
    .to_string();

    if report.rain_probability().unwrap_or(0) >= RAIN_ADVISORY_THRESHOLD {
        suggestion.push_str(
            "\n\n*E atenção:* ☂️ Parece que vem chuva por aí, então um calçado \
             impermeável e um guarda-chuva são essenciais!",
        );
    }
    suggestion
}

#[cfg(test)]
mod tests {
    use super::*;
    use garoa_weather::DayForecast;

    fn report(temp: i32, rain_probability: u8) -> WeatherReport {
        WeatherReport {
            city_name: "Campinas".to_string(),
            temp,
            description: "Parcialmente nublado".to_string(),
            humidity: 72,
            forecast: vec![DayForecast {
                date: "30/08".to_string(),
                weekday: "Sáb".to_string(),
                max: temp + 4,
                min: temp - 6,
                description: "Chuvas esparsas".to_string(),
                rain_probability,
            }],
        }
    }

    #[test]
    fn report_lists_the_essentials() {
        let text = format_report(&report(22, 10), true);
        assert!(text.contains("Campinas"));
        assert!(text.contains("26°C / 16°C"));
        assert!(text.contains("Umidade: 72%"));
        assert!(text.contains("(22°C)"));
        assert!(!text.contains("Alerta de chuva"));
    }

    #[test]
    fn advisory_appears_only_when_asked_and_wet() {
        assert!(format_report(&report(22, 60), true).contains("Alerta de chuva: 60%"));
        assert!(!format_report(&report(22, 60), false).contains("Alerta de chuva"));
        assert!(!format_report(&report(22, 59), true).contains("Alerta de chuva"));
    }

    #[test]
    fn outfit_bands_follow_the_temperature() {
        assert!(outfit_suggestion(&report(10, 0)).contains("Frio intenso"));
        assert!(outfit_suggestion(&report(15, 0)).contains("friozinho"));
        assert!(outfit_suggestion(&report(20, 0)).contains("amena"));
        assert!(outfit_suggestion(&report(24, 0)).contains("Calor"));
    }

    #[test]
    fn umbrella_addendum_at_sixty_percent() {
        assert!(outfit_suggestion(&report(24, 60)).contains("guarda-chuva"));
        assert!(!outfit_suggestion(&report(24, 30)).contains("guarda-chuva"));
    }
}

//! Humanised reply bank. One variant is picked at random so the bot does
//! not sound like a template engine. Placeholders (`{cidade}`, `{previsao}`,
//! `{look}`, `{comando}`) are substituted by the handler.

use rand::Rng;

pub const START: &str = "Olá! Eu sou a *Garoa*, sua assistente pessoal do clima. 🌦️\n\n\
Comigo você não é pego de surpresa pelo tempo:\n\n\
🔍 `/clima [cidade]`\n   Consulta rápida da previsão.\n\n\
⚙️ `/setdaily [cidade]`\n   Define a cidade dos seus alertas.\n\n\
🔔 `/daily`\n   Liga/desliga o resumo diário (manhã e noite).\n\n\
☔️ `/alertachuva`\n   Liga/desliga o monitor de chuva.\n\n\
👕 `/lookdodia`\n   Sugestão de roupa para agora.";

pub const CLIMA_OK: &[&str] = &[
    "Feito! O tempo em *{cidade}* tá assim, ó:\n\n{previsao}",
    "Olha aí a previsão quentinha (ou fria hehe) pra *{cidade}*:\n\n{previsao}",
];

pub const CITY_ERROR: &[&str] = &[
    "Hmm, não achei essa cidade no meu mapa. 🗺️ Será que o nome tá certinho?",
    "Puts, não rolou. 😕 Tenta mandar com o estado junto, tipo 'Campinas, SP'.",
];

pub const SETDAILY_OK: &[&str] = &[
    "Anotado! ✅ Sua cidade para os alertas agora é *{cidade}*. Usa /daily pra ativar as notificações!",
    "Show! Configurei *{cidade}* como sua cidade principal. Quando quiser os alertas, manda um /daily. 👍",
];

pub const DAILY_ENABLED: &[&str] = &[
    "Fechou! 🤝 Resumo diário ativado para *{cidade}*. Te dou um toque de manhã e à noite.",
    "Combinado! 🔔 Alertas programados para *{cidade}*. Fica de olho nas notificações.",
];

pub const DAILY_DISABLED: &[&str] = &[
    "Beleza, alertas em modo silencioso. 🔕 Sem mais previsões automáticas.",
    "Ok, resumo diário pausado. Pra voltar, é só mandar /daily de novo.",
];

pub const WATCH_ENABLED: &[&str] = &[
    "Beleza! ✅ Monitor de chuva ativado para *{cidade}*. Se a chance ficar alta, eu te aviso! 🌦️",
    "Pode deixar! Vou ficar de olho no céu de *{cidade}* pra você. 😉",
];

pub const WATCH_DISABLED: &[&str] = &[
    "Ok, monitor de chuva desativado. ☀️ Sem mais alertas de temporal.",
    "Entendido. Desliguei meu radar de chuva. 📡",
];

pub const RAIN_ALERT: &[&str] = &[
    "☔️ *Alerta de chuva para as próximas horas em {cidade}!*",
    "🌧️ *Atenção: previsão de chuva se aproximando de {cidade}!*",
];

pub const RAIN_ADVISORY: &[&str] = &[
    "É bom levar o guarda-chuva! ☂️",
    "Parece que vem água por aí! 🌧️",
    "Dia de maratonar séries? Talvez! 📺",
];

pub const LOOK: &[&str] = &[
    "Pra hoje em *{cidade}*, a minha sugestão é:\n\n{look}",
    "Analisando o clima de *{cidade}*... 🧐 Acho que o look ideal é:\n\n{look}",
];

pub const MISSING_CITY: &[&str] = &[
    "Opa, segura aí! Pra esse comando preciso de uma cidade. Tipo assim: `/{comando} São Paulo, SP`",
];

pub const SET_CITY_FIRST: &[&str] = &[
    "Calma lá! Antes eu preciso saber sua cidade. Usa o comando `/setdaily Sua Cidade` primeiro.",
];

pub const GENERIC_ERROR: &[&str] = &[
    "Eita, deu um bug aqui do meu lado. 😅 Tenta de novo daqui a pouco.",
    "Ops, parece que tropecei nos cabos aqui. 🔌 Foi mal! Manda o comando de novo.",
];

/// Pick one variant. Slices here are never empty.
pub fn pick(options: &'static [&'static str]) -> &'static str {
    options[rand::thread_rng().gen_range(0..options.len())]
}

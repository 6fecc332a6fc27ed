//! Intent Classifier
//!
//! Ordered keyword rules over the lowercased message. The first rule with
//! any trigger present wins; there is no scoring. Reordering the table
//! changes which profile mixed messages resolve to.

use crate::model::{Intent, IntentKind, ProfileId};

struct Rule {
    triggers: &'static [&'static str],
    intent: Intent,
}

const fn portfolio(profile: ProfileId) -> Intent {
    Intent::portfolio(IntentKind::PortfolioRequest, profile)
}

/// Priority order matters
const RULES: &[Rule] = &[
    Rule {
        triggers: &["conservadora", "seguro", "bajo riesgo", "preservar", "estable"],
        intent: portfolio(ProfileId::ConservadorEspanol),
    },
    Rule {
        triggers: &["agresiva", "crypto", "bitcoin", "arriesgada", "alta rentabilidad"],
        intent: portfolio(ProfileId::AgresivoCrypto),
    },
    Rule {
        triggers: &["tech", "tecnología", "nvidia", "apple", "crecimiento"],
        intent: portfolio(ProfileId::CrecimientoTech),
    },
    Rule {
        triggers: &["ibex", "españa", "español", "santander", "inditex"],
        intent: portfolio(ProfileId::ConservadorEspanol),
    },
    Rule {
        triggers: &["equilibrado", "moderado", "medio", "global"],
        intent: portfolio(ProfileId::EquilibradoGlobal),
    },
    Rule {
        triggers: &["inflación", "batir inflación", "ipc"],
        intent: Intent::portfolio(IntentKind::InflationHedge, ProfileId::ConservadorEspanol)
            .with_inflation_addon(),
    },
    Rule {
        triggers: &["hola", "quién eres", "qué haces", "ayuda"],
        intent: Intent::new(IntentKind::Greeting),
    },
    Rule {
        triggers: &["qaoa", "cuántico", "quantum", "algoritmo"],
        intent: Intent::new(IntentKind::ExplainQuantum),
    },
    Rule {
        triggers: &["sharpe", "ratio", "métrica", "riesgo"],
        intent: Intent::new(IntentKind::ExplainMetrics),
    },
];

const FALLBACK: Intent = Intent::portfolio(IntentKind::DefaultPortfolio, ProfileId::FALLBACK);

/// Map free text to exactly one intent
pub fn classify(message: &str) -> Intent {
    let lowered = message.to_lowercase();

    let intent = RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| lowered.contains(t)))
        .map_or(FALLBACK, |rule| rule.intent);

    tracing::debug!(kind = ?intent.kind, profile = ?intent.profile, "classified message");
    intent
}

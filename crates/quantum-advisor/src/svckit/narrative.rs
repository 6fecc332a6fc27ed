//! Narrative
//!
//! Spanish-language reply text built from engine output. Formatting only:
//! nothing here feeds back into the numbers.

use crate::model::{PortfolioMetrics, Profile};
use crate::rounding::round1;

/// Spanish CPI used for the inflation commentary (%)
pub const SPAIN_INFLATION: f64 = 3.2;

/// ECB deposit rate reported alongside market status (%)
pub const ECB_RATE: f64 = 4.5;

/// Chart colour palette, cycled by asset position
pub const CHART_COLORS: [&str; 10] = [
    "#14B8A6", // teal
    "#0D9488",
    "#0F172A",
    "#64748B",
    "#F7931A", // bitcoin orange
    "#6366F1",
    "#8B5CF6",
    "#EC4899",
    "#F59E0B",
    "#10B981",
];

pub const DISCLAIMER: &str = "⚠️ Esto NO es asesoramiento financiero. \
Es una herramienta educativa. \
Los datos son simulados y los resultados pasados no garantizan rentabilidades futuras. \
Consulta con un asesor financiero profesional antes de invertir.";

pub const GREETING: &str = "¡Hola! Soy Coach Q, tu asesor cuántico de inversiones. \
Utilizo el algoritmo QAOA para optimizar carteras para el mercado español. \
Cuéntame: ¿buscas una cartera conservadora, equilibrada, o algo más arriesgado con crypto/tech?";

pub const QUANTUM_EXPLAINER: &str = r"🔬 **QAOA (Quantum Approximate Optimization Algorithm)**

Es un algoritmo híbrido cuántico-clásico diseñado para resolver problemas de optimización combinatoria.

**¿Cómo funciona?**
1. Codificamos el problema de selección de cartera en un Hamiltoniano cuántico
2. QAOA alterna entre dos operadores: uno que codifica el problema (H_C) y otro que explora soluciones (H_M)
3. Un optimizador clásico ajusta los parámetros γ y β
4. Medimos el estado final para obtener la mejor combinación de activos

**Ventaja para carteras:**
Cuando tienes 20+ activos, el número de combinaciones posibles crece exponencialmente.
QAOA puede explorar este espacio de soluciones de forma más eficiente que métodos clásicos.

¿Te gustaría que optimice una cartera para ti?";

pub const METRICS_EXPLAINER: &str = r"📊 **Métricas financieras que uso:**

**Ratio de Sharpe**: Mide cuánta rentabilidad extra obtienes por cada unidad de riesgo.
- > 1.0 = Bueno
- > 1.5 = Muy bueno
- > 2.0 = Excelente

**Volatilidad**: Cuánto fluctúa el valor de la cartera. A menor volatilidad, más estable.

**VaR 95%**: Value at Risk - la pérdida máxima esperada en el 95% de los casos.

**Rentabilidad esperada**: Basada en datos históricos y fundamentales de cada activo.

¿Quieres que aplique estas métricas a una cartera personalizada?";

pub const GREETING_ACTIONS: [&str; 3] = [
    "Quiero una cartera conservadora",
    "Algo equilibrado global",
    "Me interesa tech y crypto",
];

pub const QUANTUM_ACTIONS: [&str; 3] = [
    "Optimiza una cartera para mí",
    "Compara QAOA vs clásico",
    "Cuéntame más sobre las métricas",
];

pub const METRICS_ACTIONS: [&str; 3] = [
    "Cartera de bajo riesgo",
    "Máxima rentabilidad",
    "Balance riesgo-retorno",
];

pub const PORTFOLIO_ACTIONS: [&str; 3] = [
    "Ver comparación QAOA vs Clásico",
    "Ajustar nivel de riesgo",
    "Explorar otra cartera",
];

/// Colour for the asset at `index`
pub fn chart_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

pub fn actions(list: &[&str]) -> Vec<String> {
    list.iter().map(|a| (*a).to_string()).collect()
}

/// Explanation shown with a generated portfolio
pub fn explain_portfolio(profile: &Profile, metrics: &PortfolioMetrics, inflation: bool) -> String {
    let mut s = String::from(
        "He analizado tu solicitud usando el algoritmo QAOA \
         (Quantum Approximate Optimization Algorithm). \n\n",
    );
    s.push_str(&format!("📊 **Perfil detectado**: {}\n", profile.name));
    s.push_str(&format!("{}\n\n", profile.description));
    s.push_str("💡 **Métricas clave**:\n");
    s.push_str(&format!("- Rentabilidad esperada: {}% anual\n", metrics.expected_return));
    s.push_str(&format!("- Volatilidad: {}%\n", metrics.volatility));
    s.push_str(&format!(
        "- Ratio de Sharpe: {} (a mayor valor, mejor relación rentabilidad/riesgo)\n",
        metrics.sharpe_ratio
    ));
    s.push_str(&format!(
        "- VaR 95%: {}% (pérdida máxima probable en 95% de casos)\n",
        metrics.var_95
    ));

    if inflation {
        let margin = round1(metrics.expected_return - SPAIN_INFLATION);
        s.push_str(&format!(
            "\n🎯 **Para batir la inflación española** (actualmente ~{SPAIN_INFLATION}%), \
             esta cartera tiene \n"
        ));
        s.push_str(&format!(
            "una rentabilidad esperada de {}%, lo que te da un \n",
            metrics.expected_return
        ));
        s.push_str(&format!("margen real de {margin}% sobre la inflación.\n"));
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProfileId;

    fn profile() -> Profile {
        Profile {
            id: ProfileId::ConservadorEspanol,
            name: "Conservador España".into(),
            description: "Para quien prioriza preservar capital.".into(),
            risk_aversion: 0.8,
            tickers: vec!["IBE.MC".into(), "IBTS.L".into()],
        }
    }

    fn metrics() -> PortfolioMetrics {
        PortfolioMetrics {
            expected_return: 4.87,
            volatility: 5.12,
            sharpe_ratio: 0.37,
            var_95: -3.55,
            max_drawdown: 12.8,
        }
    }

    #[test]
    fn test_explanation_lists_metrics() {
        let text = explain_portfolio(&profile(), &metrics(), false);
        assert!(text.contains("Conservador España"));
        assert!(text.contains("Rentabilidad esperada: 4.87% anual"));
        assert!(text.contains("Ratio de Sharpe: 0.37"));
        assert!(text.contains("VaR 95%: -3.55%"));
        assert!(!text.contains("inflación española"));
    }

    #[test]
    fn test_inflation_margin() {
        let text = explain_portfolio(&profile(), &metrics(), true);
        assert!(text.contains("inflación española"));
        // 4.87 - 3.2 = 1.67 -> 1.7
        assert!(text.contains("margen real de 1.7%"));
    }

    #[test]
    fn test_chart_colors_cycle() {
        assert_eq!(chart_color(0), "#14B8A6");
        assert_eq!(chart_color(10), chart_color(0));
        assert_eq!(chart_color(13), "#64748B");
    }
}

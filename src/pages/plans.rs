#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
}

pub const PLANS: [Plan; 4] = [
    Plan {
        name: "Evaluación inicial",
        price: "$20.000",
        description: "30 min. para definir tu plan",
        cta: "Agendar",
    },
    Plan {
        name: "Mensual 4 sesiones",
        price: "$75.000 CLP",
        description: "1 por semana",
        cta: "Agendar",
    },
    Plan {
        name: "Mensual 8 sesiones",
        price: "$80.000 CLP",
        description: "2 por semana",
        cta: "Agendar",
    },
    Plan {
        name: "Mensual 12 sesiones",
        price: "$90.000 CLP",
        description: "3 por semana",
        cta: "Agendar",
    },
];

pub const HIGHLIGHTS: [&str; 5] = [
    "Evaluación inicial: fuerza, movilidad, postura y control",
    "Registro digital de progreso con gráficos y métricas",
    "Adaptaciones según edad, capacidad y objetivos",
    "Uso de herramientas como TRX, kettlebells y macebells",
    "Filosofía: fuerza, movilidad y control aplicados a tu vida diaria",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plans_in_fixed_order_with_prices() {
        let listed: Vec<(&str, &str)> = PLANS.iter().map(|p| (p.name, p.price)).collect();
        assert_eq!(
            listed,
            vec![
                ("Evaluación inicial", "$20.000"),
                ("Mensual 4 sesiones", "$75.000 CLP"),
                ("Mensual 8 sesiones", "$80.000 CLP"),
                ("Mensual 12 sesiones", "$90.000 CLP"),
            ]
        );
    }

    #[test]
    fn test_plan_names_are_unique() {
        // Names double as list keys.
        let mut names: Vec<&str> = PLANS.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PLANS.len());
    }
}

use crate::i18n::Locale;

use super::model::{CaseStudy, ComparisonPoint, Metric, TrendPoint};

struct CaseText {
    title: &'static str,
    category: &'static str,
    duration: &'static str,
    summary: &'static str,
    challenge: &'static str,
    solution: &'static str,
    results: &'static str,
    implementation: &'static [&'static str],
    /// (label, value, change)
    metrics: [(&'static str, &'static str, &'static str); 3],
    periods: &'static [&'static str],
    comparison_names: [&'static str; 3],
}

struct CaseSource {
    slug: &'static str,
    company: &'static str,
    trend: &'static [f64],
    comparison: [(f64, f64); 3],
    en: CaseText,
    pt: CaseText,
}

impl CaseSource {
    fn text(&self, locale: Locale) -> &CaseText {
        match locale {
            Locale::En => &self.en,
            Locale::Pt => &self.pt,
        }
    }

    fn build(&self, locale: Locale) -> CaseStudy {
        let text = self.text(locale);
        let trend = text
            .periods
            .iter()
            .zip(self.trend)
            .map(|(period, value)| TrendPoint { period: period.to_string(), value: *value })
            .collect::<Vec<_>>();
        let comparison = text
            .comparison_names
            .iter()
            .zip(self.comparison)
            .map(|(name, (before, after))| ComparisonPoint { name: name.to_string(), before, after })
            .collect::<Vec<_>>();

        CaseStudy {
            slug: self.slug.to_string(),
            company: self.company.to_string(),
            title: text.title.to_string(),
            category: text.category.to_string(),
            image: format!("/cases/{}.svg", self.slug),
            duration: text.duration.to_string(),
            summary: text.summary.to_string(),
            challenge: text.challenge.to_string(),
            solution: text.solution.to_string(),
            results_description: text.results.to_string(),
            implementation: text.implementation.iter().map(|s| s.to_string()).collect(),
            metrics: text
                .metrics
                .iter()
                .map(|(label, value, change)| Metric::new(label, value, change))
                .collect(),
            trend: Some(trend),
            comparison: Some(comparison),
        }
    }
}

/// Every case study, in display order, for `locale`.
pub fn case_studies(locale: Locale) -> Vec<CaseStudy> {
    CASES.iter().map(|source| source.build(locale)).collect()
}

pub fn find_case(locale: Locale, slug: &str) -> Option<CaseStudy> {
    CASES
        .iter()
        .find(|source| source.slug == slug)
        .map(|source| source.build(locale))
}

pub fn case_slugs() -> impl Iterator<Item = &'static str> {
    CASES.iter().map(|source| source.slug)
}

static CASES: [CaseSource; 6] = [
    CaseSource {
        slug: "adidas",
        company: "Adidas",
        trend: &[65.0, 68.0, 75.0, 82.0, 88.0, 92.0],
        comparison: [(100.0, 53.0), (70.0, 98.0), (60.0, 88.0)],
        en: CaseText {
            title: "Adidas - AI Demand Forecasting",
            category: "Machine Learning",
            duration: "6 months",
            summary: "Regional demand forecasting that cut stagnant inventory almost in half.",
            challenge: "Adidas faced significant challenges with stagnant inventory and losses due to inadequate demand forecasting by region. Unsold collections generated losses and occupied warehouse space.",
            solution: "We developed a Machine Learning system that analyzes historical sales data, market trends, seasonality, and external factors to predict product demand by region with high precision.",
            results: "The results exceeded expectations, with significant reduction in stagnant inventory and improved operational efficiency.",
            implementation: &[
                "Collection and cleaning of 5-year historical data",
                "Development of predictive models with TensorFlow",
                "Integration with ERP and supply chain systems",
                "Real-time dashboard for managers",
                "Team training and continuous adjustments",
            ],
            metrics: [
                ("Forecast Accuracy", "92%", "+38%"),
                ("Stagnant Stock Reduction", "47%", "-47%"),
                ("Profit Increase", "28%", "+28%"),
            ],
            periods: &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
            comparison_names: ["Stock", "Sales", "Profit"],
        },
        pt: CaseText {
            title: "Adidas - Previsão de Demanda com IA",
            category: "Machine Learning",
            duration: "6 meses",
            summary: "Previsão de demanda por região que reduziu o estoque parado quase pela metade.",
            challenge: "A Adidas enfrentava estoque parado e prejuízos por causa de previsões de demanda inadequadas por região. Coleções não vendidas geravam perdas e ocupavam espaço nos armazéns.",
            solution: "Desenvolvemos um sistema de Machine Learning que analisa histórico de vendas, tendências de mercado, sazonalidade e fatores externos para prever a demanda por região com alta precisão.",
            results: "Os resultados superaram as expectativas, com redução significativa do estoque parado e ganho de eficiência operacional.",
            implementation: &[
                "Coleta e limpeza de 5 anos de dados históricos",
                "Desenvolvimento de modelos preditivos com TensorFlow",
                "Integração com ERP e cadeia de suprimentos",
                "Dashboard em tempo real para gestores",
                "Treinamento da equipe e ajustes contínuos",
            ],
            metrics: [
                ("Precisão da Previsão", "92%", "+38%"),
                ("Redução de Estoque Parado", "47%", "-47%"),
                ("Aumento de Lucro", "28%", "+28%"),
            ],
            periods: &["Jan", "Fev", "Mar", "Abr", "Mai", "Jun"],
            comparison_names: ["Estoque", "Vendas", "Lucro"],
        },
    },
    CaseSource {
        slug: "loccitane",
        company: "L'Occitane",
        trend: &[45.0, 52.0, 61.0, 68.0],
        comparison: [(2.8, 3.8), (180.0, 230.0), (55.0, 78.0)],
        en: CaseText {
            title: "L'Occitane - Customer Behavior BI",
            category: "Business Intelligence",
            duration: "4 months",
            summary: "One view of the customer across e-commerce and physical stores.",
            challenge: "L'Occitane needed to integrate e-commerce and physical store data to understand the complete customer journey and effectively personalize offers.",
            solution: "We created a Business Intelligence platform that unifies data from all channels, enabling 360° analysis of customer behavior and automatic offer personalization.",
            results: "Data integration generated valuable insights that significantly boosted conversions and average ticket.",
            implementation: &[
                "Integration of e-commerce and POS APIs",
                "Centralized data warehouse in BigQuery",
                "Customer segmentation models",
                "Personalized recommendation system",
                "Interactive dashboards for marketing teams",
            ],
            metrics: [
                ("Conversion Increase", "34%", "+34%"),
                ("Average Ticket", "28%", "+28%"),
                ("Customer Retention", "42%", "+42%"),
            ],
            periods: &["Jan", "Feb", "Mar", "Apr"],
            comparison_names: ["Conversion", "Ticket ($)", "Retention"],
        },
        pt: CaseText {
            title: "L'Occitane - BI de Comportamento do Cliente",
            category: "Business Intelligence",
            duration: "4 meses",
            summary: "Visão única do cliente entre e-commerce e lojas físicas.",
            challenge: "A L'Occitane precisava integrar dados do e-commerce e das lojas físicas para entender a jornada completa do cliente e personalizar ofertas de forma eficaz.",
            solution: "Criamos uma plataforma de Business Intelligence que unifica dados de todos os canais, permitindo análise 360° do comportamento do cliente e personalização automática de ofertas.",
            results: "A integração de dados gerou insights valiosos que aumentaram significativamente as conversões e o ticket médio.",
            implementation: &[
                "Integração das APIs de e-commerce e PDV",
                "Data warehouse centralizado no BigQuery",
                "Modelos de segmentação de clientes",
                "Sistema de recomendação personalizada",
                "Dashboards interativos para o marketing",
            ],
            metrics: [
                ("Aumento de Conversão", "34%", "+34%"),
                ("Ticket Médio", "28%", "+28%"),
                ("Retenção de Clientes", "42%", "+42%"),
            ],
            periods: &["Jan", "Fev", "Mar", "Abr"],
            comparison_names: ["Conversão", "Ticket ($)", "Retenção"],
        },
    },
    CaseSource {
        slug: "arezzo",
        company: "Arezzo",
        trend: &[35.0, 48.0, 62.0, 72.0, 78.0],
        comparison: [(15.0, 78.0), (3.7, 4.6), (12.0, 3.0)],
        en: CaseText {
            title: "Arezzo - AI Customer Service Chatbot",
            category: "AI Automation",
            duration: "5 months",
            summary: "A 24/7 NLP assistant that now resolves most customer conversations.",
            challenge: "Arezzo sought to automate customer service, reduce response time, and offer 24/7 support without compromising service quality.",
            solution: "We developed an intelligent chatbot with natural language processing (NLP) capable of understanding context, recommending products, and resolving complex queries.",
            results: "The chatbot transformed the customer experience, automating most interactions with high satisfaction.",
            implementation: &[
                "Training NLP model with real conversations",
                "Integration with product catalog and inventory",
                "Real-time order tracking system",
                "Intelligent handoff to human agents",
                "Sentiment analysis for continuous improvement",
            ],
            metrics: [
                ("Automated Interactions", "78%", "+78%"),
                ("Customer Satisfaction", "4.6/5", "+23%"),
                ("Cost Reduction", "52%", "-52%"),
            ],
            periods: &["Month 1", "Month 2", "Month 3", "Month 4", "Month 5"],
            comparison_names: ["Automation", "Satisfaction", "Time (min)"],
        },
        pt: CaseText {
            title: "Arezzo - Chatbot de Atendimento com IA",
            category: "Automação com IA",
            duration: "5 meses",
            summary: "Um assistente de NLP 24/7 que resolve a maior parte dos atendimentos.",
            challenge: "A Arezzo buscava automatizar o atendimento, reduzir o tempo de resposta e oferecer suporte 24/7 sem comprometer a qualidade.",
            solution: "Desenvolvemos um chatbot inteligente com processamento de linguagem natural (NLP) capaz de entender contexto, recomendar produtos e resolver dúvidas complexas.",
            results: "O chatbot transformou a experiência do cliente, automatizando a maioria das interações com alta satisfação.",
            implementation: &[
                "Treinamento do modelo de NLP com conversas reais",
                "Integração com catálogo de produtos e estoque",
                "Rastreamento de pedidos em tempo real",
                "Transferência inteligente para atendentes humanos",
                "Análise de sentimento para melhoria contínua",
            ],
            metrics: [
                ("Interações Automatizadas", "78%", "+78%"),
                ("Satisfação do Cliente", "4,6/5", "+23%"),
                ("Redução de Custos", "52%", "-52%"),
            ],
            periods: &["Mês 1", "Mês 2", "Mês 3", "Mês 4", "Mês 5"],
            comparison_names: ["Automação", "Satisfação", "Tempo (min)"],
        },
    },
    CaseSource {
        slug: "vitrium",
        company: "Vitrium Capital",
        trend: &[62.0, 71.0, 80.0, 89.0],
        comparison: [(54.0, 89.0), (24.0, 8.0), (18.0, 31.0)],
        en: CaseText {
            title: "Vitrium Capital - Predictive Investment Analysis",
            category: "Business Intelligence",
            duration: "8 months",
            summary: "AI risk scoring and recommendations for investment analysts.",
            challenge: "Vitrium Capital needed more precise predictive analytics for risk assessment and personalized investment recommendations for their clients.",
            solution: "We created a BI platform with AI algorithms for risk analysis, asset performance forecasting, and automatic recommendations based on investor profile.",
            results: "The platform changed how Vitrium analyzes investments, increasing precision and dramatically reducing analysis time.",
            implementation: &[
                "Analysis of historical market data",
                "ML models for trend forecasting",
                "Automated risk scoring system",
                "Personalized recommendation engine",
                "Real-time executive dashboards",
            ],
            metrics: [
                ("Forecast Precision", "89%", "+35%"),
                ("Time Reduction", "65%", "-65%"),
                ("Avg Client ROI", "31%", "+31%"),
            ],
            periods: &["Q1", "Q2", "Q3", "Q4"],
            comparison_names: ["Precision (%)", "Time (h)", "ROI (%)"],
        },
        pt: CaseText {
            title: "Vitrium Capital - Análise Preditiva de Investimentos",
            category: "Business Intelligence",
            duration: "8 meses",
            summary: "Score de risco e recomendações com IA para analistas de investimento.",
            challenge: "A Vitrium Capital precisava de análises preditivas mais precisas para avaliação de risco e recomendações de investimento personalizadas para seus clientes.",
            solution: "Criamos uma plataforma de BI com algoritmos de IA para análise de risco, previsão de desempenho de ativos e recomendações automáticas conforme o perfil do investidor.",
            results: "A plataforma mudou a forma como a Vitrium analisa investimentos, aumentando a precisão e reduzindo drasticamente o tempo de análise.",
            implementation: &[
                "Análise de dados históricos de mercado",
                "Modelos de ML para previsão de tendências",
                "Sistema automatizado de score de risco",
                "Motor de recomendações personalizadas",
                "Dashboards executivos em tempo real",
            ],
            metrics: [
                ("Precisão das Previsões", "89%", "+35%"),
                ("Redução de Tempo", "65%", "-65%"),
                ("ROI Médio dos Clientes", "31%", "+31%"),
            ],
            periods: &["T1", "T2", "T3", "T4"],
            comparison_names: ["Precisão (%)", "Tempo (h)", "ROI (%)"],
        },
    },
    CaseSource {
        slug: "garbo",
        company: "Garbo Tecnologia",
        trend: &[45.0, 68.0, 89.0, 99.7],
        comparison: [(35.0, 99.7), (45.0, 4.0), (95.0, 99.9)],
        en: CaseText {
            title: "Garbo Tecnologia - Health Tech AI Platform",
            category: "Health Tech Infrastructure",
            duration: "12 months",
            summary: "Biometric anti-fraud and claims automation for 50+ health operators.",
            challenge: "Health insurance operators in Brazil faced massive fraud losses, slow authorization processes, and fragmented systems that couldn't scale to serve millions of beneficiaries efficiently.",
            solution: "We built a complete AI infrastructure platform including biometric anti-fraud systems, omnichannel automation, intelligent claims analysis, and real-time BI dashboards integrated with existing health management systems.",
            results: "The platform transformed how health operators manage fraud and operations, achieving industry-leading security and massive cost savings across 50+ operators.",
            implementation: &[
                "Facial recognition and digital biometry anti-fraud system",
                "Whitelabel mobile app for iOS and Android",
                "Omnichannel automation (WhatsApp, App, Web, Phone)",
                "AI-powered claims analysis and gloss recovery",
                "Native integration with Benner Health CRM",
                "Real-time operational BI dashboards",
            ],
            metrics: [
                ("Fraud Blocked", "99.7%", "+99.7%"),
                ("Savings Generated", "R$120M", "+R$120M"),
                ("Authorization Time", "-90%", "-90%"),
            ],
            periods: &["Q1", "Q2", "Q3", "Q4"],
            comparison_names: ["Fraud Block (%)", "Auth Time (min)", "Uptime (%)"],
        },
        pt: CaseText {
            title: "Garbo Tecnologia - Plataforma de IA para Saúde",
            category: "Infraestrutura Health Tech",
            duration: "12 meses",
            summary: "Antifraude biométrico e automação de contas médicas para mais de 50 operadoras.",
            challenge: "Operadoras de planos de saúde no Brasil enfrentavam grandes perdas com fraudes, autorizações lentas e sistemas fragmentados que não escalavam para atender milhões de beneficiários.",
            solution: "Construímos uma plataforma completa de infraestrutura de IA com antifraude biométrico, automação omnichannel, análise inteligente de contas e dashboards de BI em tempo real integrados aos sistemas de gestão de saúde.",
            results: "A plataforma transformou a gestão de fraudes e operações das operadoras, alcançando segurança de ponta e grande economia em mais de 50 operadoras.",
            implementation: &[
                "Sistema antifraude com reconhecimento facial e biometria digital",
                "App whitelabel para iOS e Android",
                "Automação omnichannel (WhatsApp, App, Web, Telefone)",
                "Análise de contas com IA e recuperação de glosas",
                "Integração nativa com o CRM Benner Saúde",
                "Dashboards operacionais de BI em tempo real",
            ],
            metrics: [
                ("Fraudes Bloqueadas", "99,7%", "+99,7%"),
                ("Economia Gerada", "R$120M", "+R$120M"),
                ("Tempo de Autorização", "-90%", "-90%"),
            ],
            periods: &["T1", "T2", "T3", "T4"],
            comparison_names: ["Bloqueio de Fraude (%)", "Autorização (min)", "Disponibilidade (%)"],
        },
    },
    CaseSource {
        slug: "gmvodonto",
        company: "GMV Odonto",
        trend: &[25.0, 38.0, 52.0, 68.0, 85.0, 100.0],
        comparison: [(18.0, 47.0), (1.0, 3.0), (100.0, 162.0)],
        en: CaseText {
            title: "GMV Odonto - Dental Clinic AI Automation",
            category: "AI Automation & Sales",
            duration: "6 months",
            summary: "Automated scheduling, follow-up and reactivation for dental clinics.",
            challenge: "Dental clinics were losing revenue not from lack of patients, but from poor infrastructure: missed follow-ups, inefficient scheduling, lost leads, and no systematic approach to patient reactivation and sales.",
            solution: "We developed a verticalized AI platform for dental clinics that automates the entire patient journey, from 24/7 scheduling and intelligent follow-up to patient reactivation campaigns and commercial structuring with sales funnels.",
            results: "The platform turned clinic operations into predictable and profitable structures, dramatically improving conversion rates and reactivating dormant patient bases within 90 days.",
            implementation: &[
                "AI chatbot for 24/7 patient scheduling and negotiation",
                "Intelligent follow-up system until budget closure",
                "Automated patient reactivation campaigns",
                "Sales funnel development with performance scripts",
                "Profit mapping and financial diagnostics",
                "Continuous strategic direction and operational support",
            ],
            metrics: [
                ("Conversion Rate", "+47%", "+47%"),
                ("Patient Reactivation", "3x", "+200%"),
                ("Revenue Growth", "+62%", "+62%"),
            ],
            periods: &["Month 1", "Month 2", "Month 3", "Month 4", "Month 5", "Month 6"],
            comparison_names: ["Conversion (%)", "Reactivation", "Revenue Index"],
        },
        pt: CaseText {
            title: "GMV Odonto - Automação com IA para Clínicas",
            category: "Automação com IA & Vendas",
            duration: "6 meses",
            summary: "Agendamento, follow-up e reativação automatizados para clínicas odontológicas.",
            challenge: "As clínicas perdiam receita não por falta de pacientes, mas por infraestrutura precária: follow-ups esquecidos, agenda ineficiente, leads perdidos e nenhuma estratégia de reativação e vendas.",
            solution: "Desenvolvemos uma plataforma de IA verticalizada para clínicas que automatiza toda a jornada do paciente, do agendamento 24/7 e follow-up inteligente às campanhas de reativação e estruturação comercial com funis de vendas.",
            results: "A plataforma transformou a operação das clínicas em estruturas previsíveis e lucrativas, elevando a conversão e reativando bases de pacientes em até 90 dias.",
            implementation: &[
                "Chatbot com IA para agendamento e negociação 24/7",
                "Follow-up inteligente até o fechamento do orçamento",
                "Campanhas automatizadas de reativação de pacientes",
                "Funil de vendas com scripts de alta performance",
                "Mapeamento de lucro e diagnóstico financeiro",
                "Direcionamento estratégico e suporte operacional contínuo",
            ],
            metrics: [
                ("Taxa de Conversão", "+47%", "+47%"),
                ("Reativação de Pacientes", "3x", "+200%"),
                ("Crescimento de Receita", "+62%", "+62%"),
            ],
            periods: &["Mês 1", "Mês 2", "Mês 3", "Mês 4", "Mês 5", "Mês 6"],
            comparison_names: ["Conversão (%)", "Reativação", "Índice de Receita"],
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_list_the_same_cases_in_order() {
        let en: Vec<_> = case_studies(Locale::En).into_iter().map(|c| c.slug).collect();
        let pt: Vec<_> = case_studies(Locale::Pt).into_iter().map(|c| c.slug).collect();
        assert_eq!(en, pt);
        assert_eq!(en, case_slugs().collect::<Vec<_>>());
        assert_eq!(en.len(), 6);
    }

    #[test]
    fn every_case_has_full_series() {
        for locale in Locale::ALL {
            for case in case_studies(locale) {
                assert_eq!(case.metrics.len(), 3, "{}", case.slug);
                assert!(!case.implementation.is_empty());
                let trend = case.trend.as_ref().expect("trend");
                let source = CASES.iter().find(|s| s.slug == case.slug).expect("source");
                assert_eq!(trend.len(), source.trend.len(), "{} {:?}", case.slug, locale);
                assert_eq!(case.comparison.as_ref().map(Vec::len), Some(3));
            }
        }
    }

    #[test]
    fn lookup_by_slug() {
        let case = find_case(Locale::Pt, "garbo").expect("garbo");
        assert_eq!(case.company, "Garbo Tecnologia");
        assert_eq!(case.image, "/cases/garbo.svg");
        assert!(find_case(Locale::En, "nike").is_none());
    }
}

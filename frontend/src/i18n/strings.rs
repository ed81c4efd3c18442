//! Static translation bundles, one per [`Locale`].

use super::locale::Locale;

pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct HeaderText {
    pub home: &'static str,
    pub what_we_do: &'static str,
    pub showcase: &'static str,
    pub about: &'static str,
    pub get_started: &'static str,
    pub open_menu: &'static str,
    pub close_menu: &'static str,
    pub switch_to: &'static str,
}

pub struct HeroText {
    pub title: &'static str,
    pub description: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub details: [&'static str; 3],
}

pub struct WhatWeDoText {
    pub title: &'static str,
    pub description: &'static str,
    pub services: [Card; 6],
}

pub struct BeforeAfter {
    pub metric: &'static str,
    pub before: &'static str,
    pub after: &'static str,
    pub growth: &'static str,
}

pub struct Driver {
    pub title: &'static str,
    pub impact: &'static str,
    pub description: &'static str,
}

pub struct RevenueText {
    pub badge: &'static str,
    pub title: &'static str,
    pub highlight: &'static str,
    pub description: &'static str,
    pub comparison_title: &'static str,
    pub comparison: [BeforeAfter; 4],
    pub drivers_title: &'static str,
    pub drivers: [Driver; 3],
    pub outcomes_title: &'static str,
    pub outcomes: [&'static str; 6],
    pub cta_prompt: &'static str,
    pub cta: &'static str,
}

pub struct ShowcaseText {
    pub title: &'static str,
    pub description: &'static str,
    pub view_all: &'static str,
}

pub struct GlobalText {
    pub title: &'static str,
    pub description: &'static str,
    /// Names for [`OFFICES`](crate::components::world_map::OFFICES), same order.
    pub countries: [&'static str; 5],
    pub stats: [Stat; 3],
}

pub struct AboutText {
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub mission: Card,
    pub vision: Card,
    pub values_title: &'static str,
    pub values: [Card; 4],
    pub stats: [Stat; 4],
}

pub struct ContactText {
    pub title: &'static str,
    pub description: &'static str,
    pub name: &'static str,
    pub name_placeholder: &'static str,
    pub company: &'static str,
    pub company_placeholder: &'static str,
    pub phone: &'static str,
    pub phone_placeholder: &'static str,
    pub business_type: &'static str,
    pub business_type_placeholder: &'static str,
    pub revenue: &'static str,
    pub revenue_default: &'static str,
    /// Display labels, in [`RevenueBracket::ALL`](crate::contact::lead::RevenueBracket::ALL) order.
    pub revenue_options: [&'static str; 8],
    pub submit: &'static str,
    pub processing: &'static str,
    pub success_title: &'static str,
    pub success_description: &'static str,
    pub send_another: &'static str,
    pub error: &'static str,
    pub missing_field: &'static str,
}

pub struct CasesText {
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub view_full: &'static str,
    pub view_less: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub implementation: &'static str,
    pub results: &'static str,
    pub performance: &'static str,
    pub before_after: &'static str,
    pub before: &'static str,
    pub after: &'static str,
    pub cta_title: &'static str,
    pub cta_description: &'static str,
    pub cta_button: &'static str,
}

pub struct FooterText {
    pub tagline: &'static str,
    pub social: &'static str,
    pub contact: &'static str,
    pub rights: &'static str,
    pub made_by: &'static str,
}

pub struct NotFoundText {
    pub title: &'static str,
    pub description: &'static str,
    pub back: &'static str,
}

pub struct Strings {
    pub header: HeaderText,
    pub hero: HeroText,
    pub what_we_do: WhatWeDoText,
    pub revenue: RevenueText,
    pub showcase: ShowcaseText,
    pub global: GlobalText,
    pub about: AboutText,
    pub contact: ContactText,
    pub cases: CasesText,
    pub footer: FooterText,
    pub not_found: NotFoundText,
}

pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::En => &EN,
        Locale::Pt => &PT,
    }
}

static EN: Strings = Strings {
    header: HeaderText {
        home: "Home",
        what_we_do: "What we do",
        showcase: "Showcase",
        about: "About",
        get_started: "Get started",
        open_menu: "Open menu",
        close_menu: "Close menu",
        switch_to: "Switch to",
    },
    hero: HeroText {
        title: "AI Infrastructure That Turns Data Into Revenue",
        description: "We engineer production-ready AI infrastructure for companies that want to scale: custom data pipelines, MLOps systems and BI platforms that process billions of data points and generate measurable ROI.",
        primary_cta: "Talk to an engineer",
        secondary_cta: "See our work",
        details: [
            "Production systems, not prototypes",
            "Billions of records processed",
            "Measurable ROI in months",
        ],
    },
    what_we_do: WhatWeDoText {
        title: "What we do",
        description: "We combine artificial intelligence with business expertise to deliver infrastructure that drives real results.",
        services: [
            Card {
                title: "AI Infrastructure",
                description: "We build the foundation for your company to scale with AI. Custom infrastructure that processes millions of data points, trains proprietary models, and integrates seamlessly with your existing systems.",
            },
            Card {
                title: "Data Pipeline Engineering",
                description: "Turn raw data into competitive advantage. We design and implement data pipelines that collect, process, and transform your business data into actionable insights in real-time.",
            },
            Card {
                title: "Predictive Analytics & BI",
                description: "Stop guessing, start knowing. Our Business Intelligence solutions predict market trends, customer behavior, and operational bottlenecks before they happen.",
            },
            Card {
                title: "Machine Learning Operations (MLOps)",
                description: "Deploy, monitor, and scale AI models in production. We implement MLOps practices that keep your AI systems reliable, performant, and continuously improving.",
            },
            Card {
                title: "Custom AI Solutions",
                description: "Your business is unique, your AI should be too. We develop custom machine learning models, computer vision systems, and NLP solutions tailored to your challenges.",
            },
            Card {
                title: "Data Monetization",
                description: "Your data is an asset. We help you package insights into new products and revenue streams without compromising privacy or compliance.",
            },
        ],
    },
    revenue: RevenueText {
        badge: "Revenue Impact",
        title: "AI Infrastructure Can Increase",
        highlight: "Revenue by up to 200%",
        description: "When properly architected, AI infrastructure doesn't just optimize operations. It changes how companies generate revenue. Here's the data.",
        comparison_title: "Real Impact on Business Metrics",
        comparison: [
            BeforeAfter { metric: "Monthly Revenue", before: "$500K", after: "$1.5M", growth: "+200%" },
            BeforeAfter { metric: "Decision Speed", before: "2-3 weeks", after: "Real-time", growth: "100x faster" },
            BeforeAfter { metric: "Data Processing", before: "Manual", after: "Automated", growth: "99% reduction" },
            BeforeAfter { metric: "Market Response", before: "Reactive", after: "Predictive", growth: "3-month lead" },
        ],
        drivers_title: "How AI Infrastructure Drives Revenue Growth",
        drivers: [
            Driver {
                title: "Data-Driven Decision Making",
                impact: "+45% Revenue",
                description: "Real-time analytics and predictive models enable faster, more accurate business decisions. Companies reduce waste and capitalize on opportunities 3x faster.",
            },
            Driver {
                title: "Operational Efficiency",
                impact: "+60% Productivity",
                description: "Automated data pipelines and ML-powered workflows eliminate manual work. Teams focus on high-value tasks while AI handles repetitive operations at scale.",
            },
            Driver {
                title: "Predictive Intelligence",
                impact: "+95% Forecast Accuracy",
                description: "ML models predict customer behavior, market trends, and operational issues. Prevent losses, optimize pricing, and capture market share before competitors.",
            },
        ],
        outcomes_title: "What This Means for Your Business",
        outcomes: [
            "Identify high-value customers with 95% accuracy",
            "Predict demand spikes 30 days in advance",
            "Automate pricing optimization in real-time",
            "Reduce operational costs by 40-60%",
            "Launch new revenue streams from data monetization",
            "Scale operations without proportional cost increase",
        ],
        cta_prompt: "Ready to 2-3x your revenue with AI infrastructure?",
        cta: "Get Your Revenue Growth Assessment",
    },
    showcase: ShowcaseText {
        title: "Showcase",
        description: "Real projects, real numbers. See how companies turned their data into a competitive edge.",
        view_all: "View all transformations",
    },
    global: GlobalText {
        title: "Global Presence",
        description: "Engineering teams and clients across three continents.",
        countries: ["United States", "Brazil", "Portugal", "Germany", "Switzerland"],
        stats: [
            Stat { value: "5", label: "Countries" },
            Stat { value: "3", label: "Continents" },
            Stat { value: "24/7", label: "Support" },
        ],
    },
    about: AboutText {
        badge: "About us",
        title: "Engineers who ship AI to production",
        description: "ZielHub builds the infrastructure behind data-driven companies: from ingestion to models to the dashboards executives actually use.",
        mission: Card {
            title: "Our mission",
            description: "Save companies from digital extinction by putting production-grade AI within their reach.",
        },
        vision: Card {
            title: "Our vision",
            description: "Every company running on its own data, with AI systems it understands and controls.",
        },
        values_title: "What guides us",
        values: [
            Card { title: "Production Ready", description: "We deliver systems that run in production from day one, not slide decks." },
            Card { title: "Data First", description: "Good models start with good data. We fix the pipeline before the model." },
            Card { title: "ROI Focused", description: "Every project is measured by the revenue and savings it generates." },
            Card { title: "Knowledge Transfer", description: "Your team owns what we build. We document, train and hand over." },
        ],
        stats: [
            Stat { value: "50+", label: "AI systems delivered" },
            Stat { value: "10B+", label: "Data points processed" },
            Stat { value: "5+", label: "Years of experience" },
            Stat { value: "95%", label: "Average model accuracy" },
        ],
    },
    contact: ContactText {
        title: "Let's build your AI infrastructure",
        description: "Tell us about your company and an engineer will get back to you within one business day.",
        name: "Name",
        name_placeholder: "Your full name",
        company: "Company",
        company_placeholder: "Company name",
        phone: "Phone / WhatsApp",
        phone_placeholder: "+1 555 000 0000",
        business_type: "Business type",
        business_type_placeholder: "E-commerce, health, finance...",
        revenue: "Annual revenue",
        revenue_default: "Select a range",
        revenue_options: [
            "Pre-revenue",
            "Less than $100k",
            "$100k - $500k",
            "$500k - $1M",
            "$1M - $5M",
            "$5M - $15M",
            "$15M - $30M",
            "More than $30M",
        ],
        submit: "Request a consultation",
        processing: "Sending...",
        success_title: "Message received!",
        success_description: "Thanks for reaching out. We'll contact you shortly.",
        send_another: "Send another message",
        error: "Something went wrong. Please try again.",
        missing_field: "Please fill in every field.",
    },
    cases: CasesText {
        badge: "Success Stories",
        title: "Projects that transformed businesses",
        description: "Meet companies that achieved extraordinary results with our Artificial Intelligence and Business Intelligence solutions.",
        view_full: "View full case",
        view_less: "View less",
        challenge: "The Challenge",
        solution: "The Solution",
        implementation: "Implementation",
        results: "Results",
        performance: "Performance Evolution",
        before_after: "Before vs After",
        before: "Before",
        after: "After",
        cta_title: "Ready to be our next success story?",
        cta_description: "Get in touch and discover how we can transform your business with AI.",
        cta_button: "Contact Us",
    },
    footer: FooterText {
        tagline: "Saving companies from digital extinction with cutting-edge technology.",
        social: "Social Media",
        contact: "Contact",
        rights: "All rights reserved.",
        made_by: "Made with cutting-edge technology by ZielHub",
    },
    not_found: NotFoundText {
        title: "Page not found",
        description: "The page you are looking for does not exist.",
        back: "Back to home",
    },
};

static PT: Strings = Strings {
    header: HeaderText {
        home: "Início",
        what_we_do: "O que fazemos",
        showcase: "Cases",
        about: "Sobre",
        get_started: "Começar",
        open_menu: "Abrir menu",
        close_menu: "Fechar menu",
        switch_to: "Mudar para",
    },
    hero: HeroText {
        title: "Infraestrutura de IA que Transforma Dados em Receita",
        description: "Construímos infraestrutura de IA pronta para produção para empresas que querem escalar: pipelines de dados sob medida, sistemas de MLOps e plataformas de BI que processam bilhões de registros e geram ROI mensurável.",
        primary_cta: "Fale com um engenheiro",
        secondary_cta: "Veja nossos cases",
        details: [
            "Sistemas em produção, não protótipos",
            "Bilhões de registros processados",
            "ROI mensurável em meses",
        ],
    },
    what_we_do: WhatWeDoText {
        title: "O que fazemos",
        description: "Unimos inteligência artificial e visão de negócio para entregar infraestrutura que gera resultados reais.",
        services: [
            Card {
                title: "Infraestrutura de IA",
                description: "Construímos a base para sua empresa escalar com IA. Infraestrutura sob medida que processa milhões de dados, treina modelos proprietários e se integra aos seus sistemas atuais.",
            },
            Card {
                title: "Engenharia de Pipelines de Dados",
                description: "Transforme dados brutos em vantagem competitiva. Projetamos pipelines que coletam, processam e convertem os dados do seu negócio em insights acionáveis em tempo real.",
            },
            Card {
                title: "Análise Preditiva & BI",
                description: "Pare de adivinhar e comece a saber. Nossas soluções de Business Intelligence antecipam tendências de mercado, comportamento de clientes e gargalos operacionais.",
            },
            Card {
                title: "Operações de Machine Learning (MLOps)",
                description: "Implante, monitore e escale modelos de IA em produção. Aplicamos práticas de MLOps que mantêm seus sistemas confiáveis, performáticos e em evolução contínua.",
            },
            Card {
                title: "Soluções de IA Sob Medida",
                description: "Seu negócio é único e sua IA também deve ser. Desenvolvemos modelos de machine learning, visão computacional e NLP para os seus desafios específicos.",
            },
            Card {
                title: "Monetização de Dados",
                description: "Seus dados são um ativo. Ajudamos a transformar insights em novos produtos e fontes de receita sem comprometer privacidade ou conformidade.",
            },
        ],
    },
    revenue: RevenueText {
        badge: "Impacto na Receita",
        title: "Infraestrutura de IA Pode Aumentar",
        highlight: "a Receita em até 200%",
        description: "Quando bem arquitetada, a infraestrutura de IA não apenas otimiza operações. Ela muda a forma como a empresa gera receita. Veja os dados.",
        comparison_title: "Impacto Real nas Métricas do Negócio",
        comparison: [
            BeforeAfter { metric: "Receita Mensal", before: "R$500 mil", after: "R$1,5 mi", growth: "+200%" },
            BeforeAfter { metric: "Velocidade de Decisão", before: "2-3 semanas", after: "Tempo real", growth: "100x mais rápido" },
            BeforeAfter { metric: "Processamento de Dados", before: "Manual", after: "Automatizado", growth: "99% de redução" },
            BeforeAfter { metric: "Resposta ao Mercado", before: "Reativa", after: "Preditiva", growth: "3 meses de vantagem" },
        ],
        drivers_title: "Como a Infraestrutura de IA Impulsiona a Receita",
        drivers: [
            Driver {
                title: "Decisões Orientadas por Dados",
                impact: "+45% Receita",
                description: "Análises em tempo real e modelos preditivos permitem decisões mais rápidas e precisas. Empresas reduzem desperdício e aproveitam oportunidades 3x mais rápido.",
            },
            Driver {
                title: "Eficiência Operacional",
                impact: "+60% Produtividade",
                description: "Pipelines automatizados e fluxos com ML eliminam trabalho manual. O time foca no que gera valor enquanto a IA cuida das operações repetitivas.",
            },
            Driver {
                title: "Inteligência Preditiva",
                impact: "+95% Precisão de Previsão",
                description: "Modelos de ML preveem comportamento de clientes, tendências e problemas operacionais. Evite perdas, otimize preços e conquiste mercado antes da concorrência.",
            },
        ],
        outcomes_title: "O Que Isso Significa para o Seu Negócio",
        outcomes: [
            "Identificar clientes de alto valor com 95% de precisão",
            "Prever picos de demanda com 30 dias de antecedência",
            "Automatizar a otimização de preços em tempo real",
            "Reduzir custos operacionais em 40-60%",
            "Criar novas fontes de receita com monetização de dados",
            "Escalar operações sem aumento proporcional de custos",
        ],
        cta_prompt: "Pronto para multiplicar sua receita por 2-3x com infraestrutura de IA?",
        cta: "Solicite sua Avaliação de Crescimento",
    },
    showcase: ShowcaseText {
        title: "Cases",
        description: "Projetos reais, números reais. Veja como empresas transformaram seus dados em vantagem competitiva.",
        view_all: "Ver todas as transformações",
    },
    global: GlobalText {
        title: "Presença Global",
        description: "Times de engenharia e clientes em três continentes.",
        countries: ["Estados Unidos", "Brasil", "Portugal", "Alemanha", "Suíça"],
        stats: [
            Stat { value: "5", label: "Países" },
            Stat { value: "3", label: "Continentes" },
            Stat { value: "24/7", label: "Suporte" },
        ],
    },
    about: AboutText {
        badge: "Sobre nós",
        title: "Engenheiros que colocam IA em produção",
        description: "A ZielHub constrói a infraestrutura por trás de empresas orientadas por dados: da ingestão aos modelos e aos dashboards que os executivos realmente usam.",
        mission: Card {
            title: "Nossa missão",
            description: "Salvar empresas da extinção digital colocando IA de nível de produção ao seu alcance.",
        },
        vision: Card {
            title: "Nossa visão",
            description: "Toda empresa operando sobre os próprios dados, com sistemas de IA que ela entende e controla.",
        },
        values_title: "O que nos guia",
        values: [
            Card { title: "Pronto para Produção", description: "Entregamos sistemas rodando em produção desde o primeiro dia, não apresentações." },
            Card { title: "Dados em Primeiro Lugar", description: "Bons modelos começam com bons dados. Corrigimos o pipeline antes do modelo." },
            Card { title: "Foco em ROI", description: "Cada projeto é medido pela receita e pela economia que gera." },
            Card { title: "Transferência de Conhecimento", description: "Seu time é dono do que construímos. Documentamos, treinamos e entregamos." },
        ],
        stats: [
            Stat { value: "50+", label: "Sistemas de IA entregues" },
            Stat { value: "10B+", label: "Dados processados" },
            Stat { value: "5+", label: "Anos de experiência" },
            Stat { value: "95%", label: "Precisão média dos modelos" },
        ],
    },
    contact: ContactText {
        title: "Vamos construir sua infraestrutura de IA",
        description: "Conte sobre sua empresa e um engenheiro retornará em até um dia útil.",
        name: "Nome",
        name_placeholder: "Seu nome completo",
        company: "Empresa",
        company_placeholder: "Nome da empresa",
        phone: "Telefone / WhatsApp",
        phone_placeholder: "+55 11 90000-0000",
        business_type: "Tipo de negócio",
        business_type_placeholder: "E-commerce, saúde, finanças...",
        revenue: "Faturamento anual",
        revenue_default: "Selecione uma faixa",
        revenue_options: [
            "Pré-faturamento",
            "Menos de $100 mil",
            "$100 mil - $500 mil",
            "$500 mil - $1 mi",
            "$1 mi - $5 mi",
            "$5 mi - $15 mi",
            "$15 mi - $30 mi",
            "Mais de $30 mi",
        ],
        submit: "Solicitar consultoria",
        processing: "Enviando...",
        success_title: "Mensagem recebida!",
        success_description: "Obrigado pelo contato. Retornaremos em breve.",
        send_another: "Enviar outra mensagem",
        error: "Algo deu errado. Tente novamente.",
        missing_field: "Preencha todos os campos.",
    },
    cases: CasesText {
        badge: "Histórias de Sucesso",
        title: "Projetos que transformaram negócios",
        description: "Conheça empresas que alcançaram resultados extraordinários com nossas soluções de Inteligência Artificial e Business Intelligence.",
        view_full: "Ver case completo",
        view_less: "Ver menos",
        challenge: "O Desafio",
        solution: "A Solução",
        implementation: "Implementação",
        results: "Resultados",
        performance: "Evolução de Desempenho",
        before_after: "Antes vs Depois",
        before: "Antes",
        after: "Depois",
        cta_title: "Pronto para ser nosso próximo case de sucesso?",
        cta_description: "Entre em contato e descubra como podemos transformar seu negócio com IA.",
        cta_button: "Fale Conosco",
    },
    footer: FooterText {
        tagline: "Salvando empresas da extinção digital com tecnologia de ponta.",
        social: "Redes Sociais",
        contact: "Contato",
        rights: "Todos os direitos reservados.",
        made_by: "Feito com tecnologia de ponta pela ZielHub",
    },
    not_found: NotFoundText {
        title: "Página não encontrada",
        description: "A página que você procura não existe.",
        back: "Voltar ao início",
    },
};

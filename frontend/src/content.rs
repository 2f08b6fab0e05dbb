//! Copy and data for the home page sections.

pub struct Brand {
    pub name: &'static str,
    pub color: &'static str,
}

pub const BRANDS: &[Brand] = &[
    Brand { name: "Unitel", color: "#2B65EC" },
    Brand { name: "Yango", color: "#FF0000" },
    Brand { name: "Refriango", color: "#EA4335" },
    Brand { name: "Centro Óptico", color: "#00BFFF" },
    Brand { name: "Beko", color: "#4285F4" },
    Brand { name: "Ecoangola", color: "#188038" },
];

pub struct NavLink {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", section_id: "hero" },
    NavLink { label: "Serviços", section_id: "servicos" },
    NavLink { label: "Portfólio", section_id: "portfolio" },
    NavLink { label: "Sobre", section_id: "sobre" },
    NavLink { label: "Contacto", section_id: "contacto" },
];

pub struct PortfolioItem {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Rebranding Corporativo",
        category: "Identidade Visual",
        image: "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    },
    PortfolioItem {
        title: "Campanha de Lançamento",
        category: "Marketing Digital",
        image: "https://images.unsplash.com/photo-1600880292089-90a7e086ee0c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    },
    PortfolioItem {
        title: "Website Premium",
        category: "Web Design",
        image: "https://images.unsplash.com/photo-1558655146-9f40138edfeb?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    },
];

pub const STATS: &[(&str, &str)] = &[
    ("10+", "Anos de experiência"),
    ("250+", "Projetos entregues"),
    ("45+", "Clientes satisfeitos"),
];

pub struct Testimonial {
    pub content: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub image: &'static str,
}

impl Testimonial {
    /// First letter of each word, shown when the photo fails to load.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        content: "A Nzinga transformou completamente a presença digital da nossa empresa. A equipe entendeu perfeitamente nossas necessidades e desenvolveu uma estratégia que nos ajudou a aumentar significativamente o engajamento nas redes sociais e as conversões no site.",
        name: "Maria Andrade",
        role: "CEO",
        company: "TechAngola",
        image: "https://images.unsplash.com/photo-1573497019940-1c28c88b4f3e?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200",
    },
    Testimonial {
        content: "O rebranding que a Nzinga fez para nosso banco foi um divisor de águas. Nossa marca ganhou uma nova vida e agora realmente comunica nossos valores de inovação e confiança. O retorno sobre o investimento superou todas as nossas expectativas.",
        name: "João Carlos",
        role: "Diretor de Marketing",
        company: "Banco Nacional",
        image: "https://images.unsplash.com/photo-1560250097-0b93528c311a?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200",
    },
    Testimonial {
        content: "Buscávamos uma agência que entendesse a cultura angolana e pudesse trazer inovação. A equipe da Nzinga foi além, criando uma campanha que destacou nossa identidade cultural e ao mesmo tempo nos posicionou como um destino turístico moderno e atraente.",
        name: "Luísa Santos",
        role: "Gerente de Marketing",
        company: "Visit Angola",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200",
    },
    Testimonial {
        content: "O trabalho de estratégia digital que a Nzinga realizou para nossa marca foi transformador. Em apenas seis meses, nosso tráfego orgânico cresceu 200% e nossas vendas online aumentaram 150%. Sua abordagem estratégica fez toda a diferença.",
        name: "Paulo Mendes",
        role: "Diretor Comercial",
        company: "Global Retail Group",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200",
    },
    Testimonial {
        content: "Contratar a Nzinga foi a melhor decisão que tomamos para o lançamento do nosso festival cultural. Eles entenderam perfeitamente a essência do evento e desenvolveram uma identidade visual que capturou o espírito da nossa cultura de forma contemporânea e impactante.",
        name: "Ana Lúcia",
        role: "Diretora Executiva",
        company: "Festival de Artes de Angola",
        image: "https://images.unsplash.com/photo-1548142813-c348350df52b?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200",
    },
];

pub const FAQS: &[(&str, &str)] = &[
    (
        "Quais serviços a Nzinga oferece?",
        "A Nzinga oferece uma gama completa de serviços de comunicação e estratégia, incluindo desenvolvimento de identidade de marca, design gráfico, marketing digital, web design, gestão de conteúdo e consultoria estratégica. Nosso objetivo é fornecer soluções personalizadas que ajudem sua marca a se destacar no mercado competitivo.",
    ),
    (
        "Como funciona o processo de trabalho com a Nzinga?",
        "Nosso processo começa com uma consulta inicial para entender suas necessidades e objetivos. Em seguida, desenvolvemos uma proposta personalizada com escopo, cronograma e orçamento. Após aprovação, entramos na fase de pesquisa e planejamento estratégico, seguida pela execução criativa e implementação. Finalizamos com uma análise de resultados e recomendações para otimizações futuras.",
    ),
    (
        "Quanto custam os serviços da Nzinga?",
        "Cada projeto é único, por isso nossos preços são personalizados com base no escopo, prazos e recursos necessários. Oferecemos desde pacotes básicos para pequenas empresas até soluções complexas para grandes corporações. Entre em contato conosco para receber uma cotação personalizada para o seu projeto específico.",
    ),
    (
        "Quanto tempo leva para completar um projeto?",
        "O prazo para a conclusão de um projeto varia dependendo da sua complexidade e escopo. Um redesign de marca completo pode levar de 4 a 8 semanas, enquanto uma campanha de marketing digital pode exigir um compromisso contínuo de 3 a 6 meses para resultados otimizados. Durante nossa consulta inicial, forneceremos um cronograma detalhado para seu projeto específico.",
    ),
    (
        "Vocês trabalham com empresas de diferentes setores e tamanhos?",
        "Sim, trabalhamos com empresas de todos os tamanhos - desde startups e pequenos negócios até grandes corporações. Nossa experiência abrange diversos setores, incluindo tecnologia, saúde, educação, varejo, gastronomia, entretenimento e muitos outros. Adaptamos nossa abordagem para atender às necessidades específicas de cada setor e tamanho de empresa.",
    ),
    (
        "Como posso medir o retorno sobre o investimento (ROI) dos serviços contratados?",
        "Estabelecemos métricas claras de sucesso no início de cada projeto e fornecemos relatórios regulares de desempenho. Dependendo dos serviços contratados, podemos monitorar indicadores como tráfego do site, taxas de conversão, engajamento nas redes sociais, visibilidade da marca, geração de leads e aumento nas vendas. Nosso objetivo é sempre vincular nossas ações a resultados comerciais mensuráveis.",
    ),
    (
        "Posso ver exemplos de trabalhos anteriores para empresas semelhantes à minha?",
        "Sim, temos um portfólio diversificado de projetos concluídos para diferentes setores. Durante nossa consulta inicial, podemos compartilhar estudos de caso e exemplos específicos de trabalhos anteriores em seu setor ou para desafios semelhantes aos seus. Isso ajudará a demonstrar nossa experiência e abordagem em situações comparáveis.",
    ),
];

pub struct ContactInfo {
    pub title: &'static str,
    pub details: &'static [&'static str],
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo { title: "Nosso Endereço", details: &["Avenida Agostinho Neto, 245", "Luanda, Angola"] },
    ContactInfo { title: "E-mail", details: &["info@nzinga.ao", "contacto@nzinga.ao"] },
    ContactInfo { title: "Telefone", details: &["+244 923 456 789", "+244 912 345 678"] },
    ContactInfo { title: "Horário", details: &["Segunda - Sexta", "8:00 - 18:00"] },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letter_of_each_name() {
        assert_eq!(TESTIMONIALS[0].initials(), "MA");
        assert_eq!(TESTIMONIALS[4].initials(), "AL");
    }

    #[test]
    fn nav_targets_are_distinct() {
        let mut ids: Vec<&str> = NAV_LINKS.iter().map(|l| l.section_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NAV_LINKS.len());
    }
}
